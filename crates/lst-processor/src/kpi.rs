//! KPI rollup over a region's time series.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use lst_common::{DailyMetricRecord, DateRange, MetricsResult, RegionTimeSeries};

/// Window-scoped aggregates plus a series-scoped "today" snapshot.
///
/// Aggregates cover records with `date` in the inclusive window and
/// `processing_status = processed`; failed records are excluded, not
/// treated as zero. When no processed record falls in the window the
/// aggregate fields are `None`, so callers must handle the empty case
/// rather than receive a sentinel that could be mistaken for data.
///
/// `today` is deliberately asymmetric: it is the most recent record of
/// the *full* series, reported verbatim even when it lies outside the
/// window or is failed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiSummary {
    pub avg_lst_c: Option<f64>,
    pub heatwave_days: usize,
    pub max_uhi_index: Option<f64>,
    pub max_anomaly_zscore: Option<f64>,
    pub today: Option<DailyMetricRecord>,
}

/// Compute the KPI summary for an inclusive [from, to] window.
///
/// Duplicate or out-of-order dates cannot occur here: the
/// [`RegionTimeSeries`] type rejects them at insertion, which is the
/// enforcement boundary for that invariant. The only failure mode left
/// is an inverted window.
pub fn compute_kpi_summary(
    series: &RegionTimeSeries,
    from: NaiveDate,
    to: NaiveDate,
) -> MetricsResult<KpiSummary> {
    let range = DateRange::new(from, to)?;

    let mut mean_sum = 0.0;
    let mut mean_count = 0usize;
    let mut heatwave_days = 0usize;
    let mut max_uhi: Option<f64> = None;
    let mut max_zscore: Option<f64> = None;

    for record in series.window(range.from, range.to) {
        if record.heatwave_flag == Some(true) {
            heatwave_days += 1;
        }
        if !record.is_processed() {
            continue;
        }
        if let Some(mean) = record.lst_mean_c {
            mean_sum += mean;
            mean_count += 1;
        }
        if let Some(uhi) = record.uhi_index {
            max_uhi = Some(max_uhi.map_or(uhi, |m| m.max(uhi)));
        }
        if let Some(z) = record.anomaly_zscore {
            max_zscore = Some(max_zscore.map_or(z, |m| m.max(z)));
        }
    }

    let avg_lst_c = if mean_count > 0 {
        Some(mean_sum / mean_count as f64)
    } else {
        None
    };

    Ok(KpiSummary {
        avg_lst_c,
        heatwave_days,
        max_uhi_index: max_uhi,
        max_anomaly_zscore: max_zscore,
        today: series.latest().cloned(),
    })
}
