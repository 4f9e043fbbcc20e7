//! LST metric derivation pipeline.
//!
//! Turns per-pixel satellite land-surface-temperature samples into
//! daily region-level climate metrics and rolling aggregates. The
//! pipeline is a sequence of pure, synchronous transformations:
//!
//! 1. **Extraction & quality filtering**: decode raw sensor values
//!    into Celsius readings, dropping pixels with unacceptable
//!    quality codes ([`extract_readings`]).
//! 2. **Daily derivation**: reduce one day's readings plus the
//!    region's prior history into a [`lst_common::DailyMetricRecord`]
//!    ([`derive_daily_record`]).
//! 3. **KPI rollup**: aggregate a region's time series over a date
//!    window into summary statistics ([`compute_kpi_summary`]).
//!
//! All state (configuration, prior history) is passed in explicitly;
//! nothing reads ambient globals, so every stage is independently
//! testable. Concurrency across regions belongs to the caller;
//! derivation is strictly sequential within a region.

pub mod baseline;
pub mod config;
pub mod derive;
pub mod extraction;
pub mod kpi;

// Re-exports
pub use baseline::HistoricalBaseline;
pub use config::{ExtractionConfig, RegionConfig};
pub use derive::derive_daily_record;
pub use extraction::{extract_readings, Extraction, RasterSample, TemperatureReading};
pub use kpi::{compute_kpi_summary, KpiSummary};
