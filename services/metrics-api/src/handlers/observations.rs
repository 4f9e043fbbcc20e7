//! Observation submission handler.
//!
//! Feeds the derivation pipeline: accepts one day's raster samples
//! for a region, derives the daily record against the stored history,
//! and appends it.

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use lst_common::{DailyMetricRecord, MetricsError, RegionTimeSeries};
use lst_processor::{derive_daily_record, RasterSample};

use crate::handlers::common::metrics_error_response;
use crate::state::AppState;

/// Request body for observation submission.
#[derive(Debug, Deserialize)]
pub struct ObservationRequest {
    /// Calendar date of the observation (YYYY-MM-DD).
    pub date: NaiveDate,
    /// Raw per-pixel samples for the region on that date.
    pub samples: Vec<RasterSample>,
}

/// Response body: the derived record plus extraction bookkeeping.
#[derive(Debug, Serialize)]
pub struct ObservationResponse {
    pub record: DailyMetricRecord,
    pub total_pixel_count: usize,
    pub series_length: usize,
}

/// POST /v1/regions/:region_id/observations
pub async fn submit_observation_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(region_id): Path<String>,
    Json(request): Json<ObservationRequest>,
) -> Response {
    let config = {
        let regions = state.regions.read().await;
        let Some(definition) = regions.find(&region_id) else {
            return metrics_error_response(&MetricsError::RegionNotFound(region_id));
        };
        definition.config.clone()
    };

    let mut store = state.store.write().await;
    let series = store
        .entry(region_id.clone())
        .or_insert_with(RegionTimeSeries::new);

    let record = match derive_daily_record(
        &region_id,
        request.date,
        &request.samples,
        series,
        &config,
    ) {
        Ok(record) => record,
        Err(e) => {
            tracing::warn!(region_id, date = %request.date, error = %e, "derivation rejected");
            return metrics_error_response(&e);
        }
    };

    if let Err(e) = series.push(record.clone()) {
        return metrics_error_response(&e);
    }

    tracing::info!(
        region_id,
        date = %request.date,
        status = ?record.processing_status,
        valid_pixels = record.valid_pixel_count,
        "appended daily record"
    );

    let response = ObservationResponse {
        total_pixel_count: request.samples.len(),
        series_length: series.len(),
        record,
    };
    (StatusCode::CREATED, Json(response)).into_response()
}
