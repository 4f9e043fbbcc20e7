//! Configuration for metric derivation.

use lst_common::{MetricsError, MetricsResult};
use serde::{Deserialize, Serialize};

/// Per-region constants for daily metric derivation.
///
/// Every field has a documented default usable when a region supplies
/// no override. Defaults match the MODIS-based reference deployment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegionConfig {
    /// Comfort baseline for degree-day math, in Celsius.
    pub base_temperature: f64,

    /// Rural reference temperature for the UHI index, in Celsius.
    pub rural_baseline_temperature: f64,

    /// Daily mean LST above which a day counts toward a heatwave, in Celsius.
    pub heatwave_threshold: f64,

    /// Minimum run of consecutive above-threshold days before the
    /// heatwave flag turns on.
    pub heatwave_consecutive_days: u32,

    /// Maximum number of prior processed records used for the anomaly
    /// baseline.
    pub baseline_window_days: usize,
}

impl Default for RegionConfig {
    fn default() -> Self {
        Self {
            base_temperature: 18.0,
            rural_baseline_temperature: 20.0,
            heatwave_threshold: 32.0,
            heatwave_consecutive_days: 3,
            baseline_window_days: 30,
        }
    }
}

impl RegionConfig {
    /// Validate the configuration before any derivation begins.
    pub fn validate(&self) -> MetricsResult<()> {
        if self.heatwave_consecutive_days == 0 {
            return Err(MetricsError::configuration(
                "heatwave_consecutive_days must be positive",
            ));
        }
        if self.baseline_window_days == 0 {
            return Err(MetricsError::configuration(
                "baseline_window_days must be positive",
            ));
        }
        for (name, value) in [
            ("base_temperature", self.base_temperature),
            ("rural_baseline_temperature", self.rural_baseline_temperature),
            ("heatwave_threshold", self.heatwave_threshold),
        ] {
            if !value.is_finite() {
                return Err(MetricsError::configuration(format!(
                    "{} must be a finite temperature, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

/// Sensor decoding constants for raster extraction.
///
/// The defaults match the MODIS LST encoding: raw digital numbers are
/// Kelvin scaled by 50 (scale factor 0.02), converted to Celsius with
/// a fixed offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Multiplicative scale applied to raw sensor values.
    pub scale: f64,

    /// Additive offset applied after scaling (Kelvin to Celsius).
    pub offset: f64,

    /// Quality codes whose pixels are kept. 0 = good, 1 = other
    /// quality but usable; everything else is dropped.
    pub accepted_quality_codes: Vec<u8>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            scale: 0.02,
            offset: -273.15,
            accepted_quality_codes: vec![0, 1],
        }
    }
}

impl ExtractionConfig {
    /// True if a pixel with this quality code should be kept.
    pub fn accepts(&self, quality_code: u8) -> bool {
        self.accepted_quality_codes.contains(&quality_code)
    }
}
