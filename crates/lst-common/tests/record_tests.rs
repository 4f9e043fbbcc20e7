//! Serialization tests for DailyMetricRecord JSON contract.

use chrono::NaiveDate;
use lst_common::{DailyMetricRecord, ProcessingStatus};

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

// ============================================================================
// JSON field contract
// ============================================================================

#[test]
fn test_processed_record_json_field_names() {
    let record = DailyMetricRecord {
        region_id: "NYC001".to_string(),
        date: d("2024-07-15"),
        lst_mean_c: Some(22.625),
        lst_min_c: Some(18.45),
        lst_max_c: Some(26.85),
        cdd: Some(4.625),
        hdd: Some(0.0),
        heatwave_flag: Some(false),
        uhi_index: Some(2.625),
        anomaly_zscore: Some(0.0),
        valid_pixel_count: 4,
        processing_status: ProcessingStatus::Processed,
    };

    let value: serde_json::Value = serde_json::to_value(&record).unwrap();
    for field in [
        "date",
        "lst_mean_c",
        "lst_min_c",
        "lst_max_c",
        "cdd",
        "hdd",
        "heatwave_flag",
        "uhi_index",
        "anomaly_zscore",
        "region_id",
        "valid_pixel_count",
        "processing_status",
    ] {
        assert!(value.get(field).is_some(), "missing field {}", field);
    }
    assert_eq!(value["date"], "2024-07-15");
    assert_eq!(value["processing_status"], "processed");
}

#[test]
fn test_failed_record_serializes_metric_fields_as_null() {
    let record = DailyMetricRecord::failed("NYC001", d("2024-07-15"));
    let value: serde_json::Value = serde_json::to_value(&record).unwrap();

    for field in [
        "lst_mean_c",
        "lst_min_c",
        "lst_max_c",
        "cdd",
        "hdd",
        "heatwave_flag",
        "uhi_index",
        "anomaly_zscore",
    ] {
        assert!(value[field].is_null(), "field {} should be null", field);
    }
    assert_eq!(value["valid_pixel_count"], 0);
    assert_eq!(value["processing_status"], "failed");
}

// ============================================================================
// Round trips
// ============================================================================

#[test]
fn test_processed_record_json_round_trip() {
    let record = DailyMetricRecord {
        region_id: "CHI001".to_string(),
        date: d("2024-08-01"),
        lst_mean_c: Some(33.0),
        lst_min_c: Some(28.5),
        lst_max_c: Some(38.2),
        cdd: Some(15.0),
        hdd: Some(0.0),
        heatwave_flag: Some(true),
        uhi_index: Some(13.0),
        anomaly_zscore: Some(1.8),
        valid_pixel_count: 1440,
        processing_status: ProcessingStatus::Processed,
    };

    let json = serde_json::to_string(&record).unwrap();
    let parsed: DailyMetricRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, record);
}

#[test]
fn test_failed_record_json_round_trip() {
    let record = DailyMetricRecord::failed("MIA001", d("2024-08-02"));
    let json = serde_json::to_string(&record).unwrap();
    let parsed: DailyMetricRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, record);
    assert!(!parsed.is_processed());
}
