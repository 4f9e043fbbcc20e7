//! Daily metric derivation.
//!
//! Stage 2 of the pipeline: reduce one region-date's filtered
//! readings, together with the region's prior history, into a
//! [`DailyMetricRecord`].

use chrono::{Duration, NaiveDate};

use lst_common::{DailyMetricRecord, MetricsError, MetricsResult, ProcessingStatus, RegionTimeSeries};

use crate::baseline::HistoricalBaseline;
use crate::config::{ExtractionConfig, RegionConfig};
use crate::extraction::{extract_readings, RasterSample};

/// Derive one region-date record from raw raster samples.
///
/// The result is a pure function of (today's samples, prior series,
/// configuration). Records must be derived in strict chronological
/// order per region: `date` has to be later than the last date in
/// `prior`, and `prior` must belong to the same region, otherwise a
/// data-integrity error is returned.
///
/// A day with zero valid pixels (empty input, or everything dropped by
/// the quality filter) yields a record with
/// `processing_status = failed` and all metric fields null. That is a
/// normal return value, not an error, and the pipeline continues with
/// the next region-date.
pub fn derive_daily_record(
    region_id: &str,
    date: NaiveDate,
    samples: &[RasterSample],
    prior: &RegionTimeSeries,
    config: &RegionConfig,
) -> MetricsResult<DailyMetricRecord> {
    config.validate()?;

    if let Some(last) = prior.latest() {
        if last.region_id != region_id {
            return Err(MetricsError::RegionMismatch {
                expected: last.region_id.clone(),
                found: region_id.to_string(),
            });
        }
        if date == last.date {
            return Err(MetricsError::DuplicateDate {
                region_id: region_id.to_string(),
                date,
            });
        }
        if date < last.date {
            return Err(MetricsError::OutOfOrderDate {
                region_id: region_id.to_string(),
                date,
                last: last.date,
            });
        }
    }

    let extraction = extract_readings(samples, &ExtractionConfig::default());
    if extraction.readings.is_empty() {
        tracing::warn!(
            region_id,
            %date,
            total_pixels = samples.len(),
            "no valid pixels after quality filtering, marking record failed"
        );
        return Ok(DailyMetricRecord::failed(region_id, date));
    }

    let valid_pixel_count = extraction.valid_pixel_count();
    let mut sum = 0.0;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for reading in &extraction.readings {
        let c = reading.celsius();
        sum += c;
        min = min.min(c);
        max = max.max(c);
    }
    let mean = sum / valid_pixel_count as f64;

    let cdd = (mean - config.base_temperature).max(0.0);
    let hdd = (config.base_temperature - mean).max(0.0);
    let uhi_index = mean - config.rural_baseline_temperature;

    let baseline = HistoricalBaseline::from_prior(prior, config.baseline_window_days);
    let anomaly_zscore = baseline.zscore(mean);

    let heatwave_flag = heatwave_run_length(mean, date, prior, config)
        >= config.heatwave_consecutive_days as usize;

    tracing::debug!(
        region_id,
        %date,
        lst_mean_c = mean,
        valid_pixel_count,
        heatwave_flag,
        "derived daily record"
    );

    Ok(DailyMetricRecord {
        region_id: region_id.to_string(),
        date,
        lst_mean_c: Some(mean),
        lst_min_c: Some(min),
        lst_max_c: Some(max),
        cdd: Some(cdd),
        hdd: Some(hdd),
        heatwave_flag: Some(heatwave_flag),
        uhi_index: Some(uhi_index),
        anomaly_zscore: Some(anomaly_zscore),
        valid_pixel_count,
        processing_status: ProcessingStatus::Processed,
    })
}

/// Length of the consecutive above-threshold run ending today.
///
/// Returns 0 if today's mean does not exceed the threshold. Otherwise
/// counts today plus the immediately preceding calendar days whose
/// records also exceed it. A calendar gap, a failed record, or a
/// below-threshold day ends the walk: heatwave runs are gap-free by
/// definition. Prior means are re-compared against the configured
/// threshold rather than trusting stored flags, so a threshold change
/// does not carry stale state forward.
fn heatwave_run_length(
    today_mean: f64,
    date: NaiveDate,
    prior: &RegionTimeSeries,
    config: &RegionConfig,
) -> usize {
    if today_mean <= config.heatwave_threshold {
        return 0;
    }

    let mut run = 1;
    let mut expected = date - Duration::days(1);
    for record in prior.records().iter().rev() {
        if record.date != expected {
            break;
        }
        match record.lst_mean_c {
            Some(mean) if mean > config.heatwave_threshold => {
                run += 1;
                expected = expected - Duration::days(1);
            }
            _ => break,
        }
    }
    run
}
