//! Router construction.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Extension, Router,
};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::handlers;
use crate::state::AppState;

/// Build the full application router with all middleware layers.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_handler))
        // Region catalog
        .route(
            "/v1/regions",
            get(handlers::regions::list_regions_handler)
                .post(handlers::regions::create_region_handler),
        )
        // Derived metrics
        .route("/v1/metrics", get(handlers::metrics::metrics_handler))
        .route("/v1/kpi", get(handlers::kpi::kpi_handler))
        // Pipeline input
        .route(
            "/v1/regions/:region_id/observations",
            post(handlers::observations::submit_observation_handler),
        )
        // Middleware
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
}
