//! Rolling historical baseline for anomaly scoring.

use lst_common::RegionTimeSeries;

/// Mean and standard deviation of `lst_mean_c` over a trailing window
/// of prior processed records.
///
/// The window covers up to `window` of the most recent prior records;
/// fewer are used if fewer exist. Failed records carry no mean and are
/// skipped. The standard deviation is the population form, matching
/// the reference implementation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistoricalBaseline {
    pub mean: f64,
    pub std: f64,
    pub sample_count: usize,
}

impl HistoricalBaseline {
    /// Build the baseline from a region's prior time series.
    pub fn from_prior(prior: &RegionTimeSeries, window: usize) -> Self {
        let means: Vec<f64> = prior
            .records()
            .iter()
            .rev()
            .filter_map(|r| r.lst_mean_c)
            .take(window)
            .collect();

        let n = means.len();
        if n == 0 {
            return Self {
                mean: 0.0,
                std: 0.0,
                sample_count: 0,
            };
        }

        let mean = means.iter().sum::<f64>() / n as f64;
        let variance = means.iter().map(|m| (m - mean).powi(2)).sum::<f64>() / n as f64;

        Self {
            mean,
            std: variance.sqrt(),
            sample_count: n,
        }
    }

    /// Standardized deviation of a daily mean from this baseline.
    ///
    /// Falls back to 0.0 when fewer than 2 baseline samples exist or
    /// the baseline deviation is zero: a near-empty baseline produces
    /// meaningless scores, and a zero deviation would divide by zero.
    pub fn zscore(&self, lst_mean_c: f64) -> f64 {
        if self.sample_count < 2 || self.std == 0.0 {
            return 0.0;
        }
        (lst_mean_c - self.mean) / self.std
    }
}
