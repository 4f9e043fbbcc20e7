//! Shared handler helpers: exception bodies and error mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use lst_common::MetricsError;

/// JSON exception body returned for every error response.
#[derive(Debug, Serialize)]
pub struct ExceptionResponse {
    pub code: String,
    pub description: String,
}

impl ExceptionResponse {
    pub fn bad_request(description: impl Into<String>) -> Self {
        Self {
            code: "InvalidParameter".to_string(),
            description: description.into(),
        }
    }

    pub fn not_found(description: impl Into<String>) -> Self {
        Self {
            code: "NotFound".to_string(),
            description: description.into(),
        }
    }

    pub fn conflict(description: impl Into<String>) -> Self {
        Self {
            code: "DataIntegrity".to_string(),
            description: description.into(),
        }
    }

    pub fn internal(description: impl Into<String>) -> Self {
        Self {
            code: "InternalError".to_string(),
            description: description.into(),
        }
    }
}

/// Build an error response with the given status and exception body.
pub fn error_response(status: StatusCode, body: ExceptionResponse) -> Response {
    (status, Json(body)).into_response()
}

/// Map a domain error to the matching HTTP response.
pub fn metrics_error_response(err: &MetricsError) -> Response {
    let status =
        StatusCode::from_u16(err.http_status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let body = if err.is_data_integrity() {
        ExceptionResponse::conflict(err.to_string())
    } else {
        match status {
            StatusCode::NOT_FOUND => ExceptionResponse::not_found(err.to_string()),
            StatusCode::BAD_REQUEST => ExceptionResponse::bad_request(err.to_string()),
            _ => ExceptionResponse::internal(err.to_string()),
        }
    };
    error_response(status, body)
}
