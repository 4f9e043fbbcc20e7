//! Raster sample extraction and quality filtering.
//!
//! Stage 1 of the pipeline: converts raw per-pixel sensor readings
//! into validated Celsius temperatures, dropping pixels whose quality
//! code is not in the accepted set.

use serde::{Deserialize, Serialize};

use crate::config::ExtractionConfig;

/// One decoded pixel reading from the satellite raster.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RasterSample {
    /// Raw sensor value in digital numbers (Kelvin-scaled for MODIS).
    pub raw_value: f64,
    /// Pixel quality code from the QC band.
    pub quality_code: u8,
}

/// A validated scalar temperature in Celsius for one pixel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureReading(f64);

impl TemperatureReading {
    /// The temperature in Celsius.
    pub fn celsius(&self) -> f64 {
        self.0
    }
}

/// Result of extracting one region-date's raster samples.
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    /// Validated readings, one per accepted pixel. May be empty.
    pub readings: Vec<TemperatureReading>,
    /// Pixels dropped by the quality filter.
    pub dropped_pixel_count: usize,
}

impl Extraction {
    /// Number of pixels that survived the quality filter.
    pub fn valid_pixel_count(&self) -> usize {
        self.readings.len()
    }
}

/// Convert raw raster samples into Celsius readings.
///
/// Applies `celsius = raw_value * scale + offset` to every sample
/// whose quality code is accepted; everything else is dropped, not
/// zeroed. An empty input, or an input where every pixel fails the
/// quality filter, yields an empty reading set; the derivation stage
/// turns that into a `failed` record rather than computing statistics
/// over an empty set.
pub fn extract_readings(samples: &[RasterSample], config: &ExtractionConfig) -> Extraction {
    let readings: Vec<TemperatureReading> = samples
        .iter()
        .filter(|s| config.accepts(s.quality_code))
        .map(|s| TemperatureReading(s.raw_value * config.scale + config.offset))
        .collect();

    let dropped = samples.len() - readings.len();
    if dropped > 0 {
        tracing::debug!(
            dropped_pixels = dropped,
            valid_pixels = readings.len(),
            "quality filter dropped pixels"
        );
    }

    Extraction {
        readings,
        dropped_pixel_count: dropped,
    }
}
