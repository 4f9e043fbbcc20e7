//! Validated chronological time series of daily metric records.

use chrono::NaiveDate;

use crate::error::{MetricsError, MetricsResult};
use crate::record::DailyMetricRecord;

/// Ordered-by-date sequence of [`DailyMetricRecord`] for one region.
///
/// Insertion order is chronological order. Appending a record whose
/// date is not strictly after the last record's date is rejected as a
/// data-integrity violation, as is appending a record for a different
/// region. Heatwave and anomaly derivation rely on this ordering.
///
/// The type deliberately has no serde support: a series can only be
/// built through the validating constructors, never deserialized
/// around them.
#[derive(Debug, Clone, Default)]
pub struct RegionTimeSeries {
    records: Vec<DailyMetricRecord>,
}

impl RegionTimeSeries {
    /// Create an empty series.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a series from records already in chronological order.
    ///
    /// Every record is pushed through the same validation as
    /// [`RegionTimeSeries::push`], so duplicate or out-of-order dates
    /// are rejected rather than silently accepted.
    pub fn from_records(
        records: impl IntoIterator<Item = DailyMetricRecord>,
    ) -> MetricsResult<Self> {
        let mut series = Self::new();
        for record in records {
            series.push(record)?;
        }
        Ok(series)
    }

    /// Append a record, enforcing chronological order and region identity.
    pub fn push(&mut self, record: DailyMetricRecord) -> MetricsResult<()> {
        if let Some(last) = self.records.last() {
            if last.region_id != record.region_id {
                return Err(MetricsError::RegionMismatch {
                    expected: last.region_id.clone(),
                    found: record.region_id,
                });
            }
            if record.date == last.date {
                return Err(MetricsError::DuplicateDate {
                    region_id: record.region_id,
                    date: record.date,
                });
            }
            if record.date < last.date {
                return Err(MetricsError::OutOfOrderDate {
                    region_id: record.region_id,
                    date: record.date,
                    last: last.date,
                });
            }
        }
        self.records.push(record);
        Ok(())
    }

    /// Number of records in the series.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if the series holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in chronological order.
    pub fn records(&self) -> &[DailyMetricRecord] {
        &self.records
    }

    /// The most recent record, if any.
    pub fn latest(&self) -> Option<&DailyMetricRecord> {
        self.records.last()
    }

    /// Iterate records whose date falls within [from, to] inclusive.
    pub fn window(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> impl Iterator<Item = &DailyMetricRecord> {
        self.records
            .iter()
            .filter(move |r| r.date >= from && r.date <= to)
    }

    /// Iterate records in chronological order.
    pub fn iter(&self) -> std::slice::Iter<'_, DailyMetricRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a RegionTimeSeries {
    type Item = &'a DailyMetricRecord;
    type IntoIter = std::slice::Iter<'a, DailyMetricRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
