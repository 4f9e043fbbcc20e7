//! Metrics API Server
//!
//! REST API serving derived LST climate metrics: region catalog,
//! daily metric records, KPI summaries, and observation submission.

use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use metrics_api::app;
use metrics_api::state::AppState;

/// Metrics API Server
#[derive(Parser, Debug)]
#[command(name = "metrics-api")]
#[command(about = "REST API for derived LST climate metrics")]
struct Args {
    /// Listen address
    #[arg(short, long, default_value = "0.0.0.0:8084", env = "METRICS_LISTEN_ADDR")]
    listen: String,

    /// Log level
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Directory of region definition YAML files
    #[arg(long, default_value = "config/regions", env = "METRICS_REGIONS_DIR")]
    regions_dir: String,

    /// Number of worker threads
    #[arg(long, env = "METRICS_WORKER_THREADS")]
    worker_threads: Option<usize>,
}

fn main() {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Build runtime with configured threads
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();

    if let Some(threads) = args.worker_threads {
        runtime_builder.worker_threads(threads);
    }

    let runtime = runtime_builder
        .build()
        .expect("Failed to create Tokio runtime");

    runtime.block_on(async move {
        run_server(args).await;
    });
}

async fn run_server(args: Args) {
    // Initialize tracing
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .json()
        .init();

    info!("Starting metrics API server");

    // Initialize application state
    let state = match AppState::new(&args.regions_dir) {
        Ok(state) => Arc::new(state),
        Err(e) => {
            tracing::error!("Failed to initialize application state: {}", e);
            std::process::exit(1);
        }
    };

    // Build router
    let app = app::router(state);

    // Parse listen address
    let addr: SocketAddr = args.listen.parse().expect("Invalid listen address");

    info!("Metrics API listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind");
    axum::serve(listener, app).await.expect("Server failed");
}
