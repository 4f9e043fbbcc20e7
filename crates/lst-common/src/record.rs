//! Daily metric records produced by the derivation pipeline.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Outcome of deriving one region-date record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessingStatus {
    /// Metrics were computed from at least one valid pixel.
    Processed,
    /// Zero valid pixels after quality filtering; all metric fields are null.
    Failed,
}

/// One region, one calendar date of derived climate metrics.
///
/// Field names match the JSON contract consumed by the API and
/// dashboard: `date`, `lst_mean_c`, `lst_min_c`, `lst_max_c`, `cdd`,
/// `hdd`, `heatwave_flag`, `uhi_index`, `anomaly_zscore`.
///
/// When `processing_status` is `Failed`, every metric field is `None`
/// (serialized as JSON null). When `Processed`, all metric fields are
/// present and `lst_min_c <= lst_mean_c <= lst_max_c` holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyMetricRecord {
    pub region_id: String,
    pub date: NaiveDate,
    pub lst_mean_c: Option<f64>,
    pub lst_min_c: Option<f64>,
    pub lst_max_c: Option<f64>,
    pub cdd: Option<f64>,
    pub hdd: Option<f64>,
    pub heatwave_flag: Option<bool>,
    pub uhi_index: Option<f64>,
    pub anomaly_zscore: Option<f64>,
    pub valid_pixel_count: usize,
    pub processing_status: ProcessingStatus,
}

impl DailyMetricRecord {
    /// Create a failed record for a day with no usable pixels.
    pub fn failed(region_id: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            region_id: region_id.into(),
            date,
            lst_mean_c: None,
            lst_min_c: None,
            lst_max_c: None,
            cdd: None,
            hdd: None,
            heatwave_flag: None,
            uhi_index: None,
            anomaly_zscore: None,
            valid_pixel_count: 0,
            processing_status: ProcessingStatus::Failed,
        }
    }

    /// True if metrics were computed for this day.
    pub fn is_processed(&self) -> bool {
        self.processing_status == ProcessingStatus::Processed
    }
}
