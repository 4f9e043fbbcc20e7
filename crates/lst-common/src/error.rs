//! Error types for urban-heat-analytics crates.

use chrono::NaiveDate;
use thiserror::Error;

/// Result type alias using MetricsError.
pub type MetricsResult<T> = Result<T, MetricsError>;

/// Primary error type for metric derivation and aggregation.
///
/// A day with zero valid pixels is *not* an error: it produces a record
/// with `ProcessingStatus::Failed` and is handled as a normal value.
/// The variants here are contract violations that abort the single call.
#[derive(Debug, Error)]
pub enum MetricsError {
    // === Data integrity (caller contract violations) ===
    #[error("duplicate record date {date} for region {region_id}")]
    DuplicateDate { region_id: String, date: NaiveDate },

    #[error("out-of-order record date {date} for region {region_id}: series already ends at {last}")]
    OutOfOrderDate {
        region_id: String,
        date: NaiveDate,
        last: NaiveDate,
    },

    #[error("record for region {found} appended to series for region {expected}")]
    RegionMismatch { expected: String, found: String },

    // === Configuration ===
    #[error("configuration error: {0}")]
    Configuration(String),

    // === Query errors ===
    #[error("invalid date range: from {from} is after to {to}")]
    InvalidDateRange { from: NaiveDate, to: NaiveDate },

    #[error("invalid date: {0}")]
    InvalidDate(String),

    #[error("region not found: {0}")]
    RegionNotFound(String),
}

impl MetricsError {
    /// Create a Configuration error.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// True if this error is a data-integrity contract violation.
    pub fn is_data_integrity(&self) -> bool {
        matches!(
            self,
            MetricsError::DuplicateDate { .. }
                | MetricsError::OutOfOrderDate { .. }
                | MetricsError::RegionMismatch { .. }
        )
    }

    /// Get the HTTP status code for this error.
    pub fn http_status_code(&self) -> u16 {
        match self {
            MetricsError::DuplicateDate { .. }
            | MetricsError::OutOfOrderDate { .. }
            | MetricsError::RegionMismatch { .. } => 409,

            MetricsError::InvalidDateRange { .. } | MetricsError::InvalidDate(_) => 400,

            MetricsError::RegionNotFound(_) => 404,

            MetricsError::Configuration(_) => 500,
        }
    }
}
