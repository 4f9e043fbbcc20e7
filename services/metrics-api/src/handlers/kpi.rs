//! KPI summary handler.

use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use lst_common::{DateRange, MetricsError, RegionTimeSeries};
use lst_processor::compute_kpi_summary;

use crate::handlers::common::{error_response, metrics_error_response, ExceptionResponse};
use crate::state::AppState;

/// Query parameters for the KPI endpoint.
#[derive(Debug, Deserialize)]
pub struct KpiQueryParams {
    pub region_id: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
}

/// GET /v1/kpi?region_id&from&to
pub async fn kpi_handler(
    Extension(state): Extension<Arc<AppState>>,
    Query(params): Query<KpiQueryParams>,
) -> Response {
    let Some(region_id) = params.region_id.as_deref() else {
        return error_response(
            StatusCode::BAD_REQUEST,
            ExceptionResponse::bad_request("Missing required parameter: region_id"),
        );
    };
    let (Some(from), Some(to)) = (params.from.as_deref(), params.to.as_deref()) else {
        return error_response(
            StatusCode::BAD_REQUEST,
            ExceptionResponse::bad_request("Missing required parameters: from, to"),
        );
    };

    if state.regions.read().await.find(region_id).is_none() {
        return metrics_error_response(&MetricsError::RegionNotFound(region_id.to_string()));
    }

    let range = match DateRange::parse(from, to) {
        Ok(range) => range,
        Err(e) => return metrics_error_response(&e),
    };

    let store = state.store.read().await;
    let empty = RegionTimeSeries::new();
    let series = store.get(region_id).unwrap_or(&empty);

    match compute_kpi_summary(series, range.from, range.to) {
        Ok(summary) => Json(serde_json::json!({
            "region_id": region_id,
            "from": from,
            "to": to,
            "kpi_summary": summary,
        }))
        .into_response(),
        Err(e) => metrics_error_response(&e),
    }
}
