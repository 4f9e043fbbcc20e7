//! Common types shared across all urban-heat-analytics crates.

pub mod daterange;
pub mod error;
pub mod record;
pub mod region;
pub mod series;

pub use daterange::DateRange;
pub use error::{MetricsError, MetricsResult};
pub use record::{DailyMetricRecord, ProcessingStatus};
pub use region::{BoundingBox, Region, RegionKind};
pub use series::RegionTimeSeries;
