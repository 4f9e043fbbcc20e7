//! Region catalog handlers.

use axum::{
    extract::Extension,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use lst_common::{Region, RegionKind, RegionTimeSeries};

use crate::config::RegionDefinition;
use crate::handlers::common::{error_response, ExceptionResponse};
use crate::state::AppState;

/// GET /v1/regions
pub async fn list_regions_handler(Extension(state): Extension<Arc<AppState>>) -> Json<Vec<Region>> {
    Json(state.regions.read().await.catalog())
}

/// POST /v1/regions
///
/// Register a user-defined region. The catalog entry is always
/// `custom` regardless of the submitted kind, and an empty time series
/// is seeded so observations can be submitted immediately. Registered
/// regions share the persistence stance of the observation store:
/// in-memory, gone on restart.
pub async fn create_region_handler(
    Extension(state): Extension<Arc<AppState>>,
    Json(mut definition): Json<RegionDefinition>,
) -> Response {
    if definition.id.trim().is_empty() {
        return error_response(
            StatusCode::BAD_REQUEST,
            ExceptionResponse::bad_request("Region id must not be empty"),
        );
    }
    if definition.bbox.min_lon >= definition.bbox.max_lon
        || definition.bbox.min_lat >= definition.bbox.max_lat
    {
        return error_response(
            StatusCode::BAD_REQUEST,
            ExceptionResponse::bad_request(
                "Bounding box must satisfy min_lon < max_lon and min_lat < max_lat",
            ),
        );
    }
    if let Err(e) = definition.config.validate() {
        return error_response(
            StatusCode::BAD_REQUEST,
            ExceptionResponse::bad_request(e.to_string()),
        );
    }
    definition.kind = RegionKind::Custom;

    let mut regions = state.regions.write().await;
    if regions.find(&definition.id).is_some() {
        return error_response(
            StatusCode::CONFLICT,
            ExceptionResponse::conflict(format!("Region already exists: {}", definition.id)),
        );
    }

    let region = definition.to_region();
    let mut store = state.store.write().await;
    store.insert(definition.id.clone(), RegionTimeSeries::new());
    regions.insert(definition);

    tracing::info!(region_id = %region.id, "registered custom region");
    (StatusCode::CREATED, Json(region)).into_response()
}
