//! Metric record query handler.

use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::sync::Arc;

use lst_common::{DailyMetricRecord, DateRange, MetricsError};

use crate::handlers::common::{error_response, metrics_error_response, ExceptionResponse};
use crate::state::AppState;

/// Metric fields returned when the `vars` parameter is omitted.
const DEFAULT_VARS: &[&str] = &[
    "lst_mean_c",
    "lst_min_c",
    "lst_max_c",
    "cdd",
    "hdd",
    "heatwave_flag",
    "uhi_index",
    "anomaly_zscore",
];

/// Query parameters for the metrics endpoint.
#[derive(Debug, Deserialize)]
pub struct MetricsQueryParams {
    pub region_id: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    /// Comma-separated list of metric fields to include.
    pub vars: Option<String>,
}

/// GET /v1/metrics?region_id&from&to&vars
pub async fn metrics_handler(
    Extension(state): Extension<Arc<AppState>>,
    Query(params): Query<MetricsQueryParams>,
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
    let records: Vec<Value> = store
        .get(region_id)
        .map(|series| {
            series
                .window(range.from, range.to)
                .map(|r| project_record(r, params.vars.as_deref()))
                .collect()
        })
        .unwrap_or_default();

    Json(serde_json::json!({
        "region_id": region_id,
        "from": from,
        "to": to,
        "metrics": records,
    }))
    .into_response()
}

/// Reduce a record to the requested fields. `date` and
/// `processing_status` are always included.
fn project_record(record: &DailyMetricRecord, vars: Option<&str>) -> Value {
    let full = serde_json::to_value(record).unwrap_or(Value::Null);
    let Value::Object(fields) = full else {
        return Value::Null;
    };

    let requested: Vec<&str> = match vars {
        Some(csv) => csv.split(',').map(str::trim).collect(),
        None => DEFAULT_VARS.to_vec(),
    };

    let mut projected = Map::new();
    for (key, value) in fields {
        if key == "date"
            || key == "processing_status"
            || requested.iter().any(|v| *v == key)
        {
            projected.insert(key, value);
        }
    }
    Value::Object(projected)
}
