//! Offline inputs: CSV files and saved Cube responses feeding the pipeline

use crate::common::{daily_csv, snapshot_csv, synthetic_daily, synthetic_snapshot, write_file};
use activity_segmentation::analysis::SegmentationEngine;
use activity_segmentation::config::AnalysisConfig;
use activity_segmentation::errors::AppError;
use activity_segmentation::source::files::{
    load_daily_records, load_volume_records, save_cube_response, write_json,
};
use activity_segmentation::source::CubeResponse;
use activity_segmentation::types::UserVolumeRecord;
use tempfile::TempDir;

#[test]
fn test_csv_inputs_match_in_memory_run() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let snapshot = synthetic_snapshot(400, 20);
    let daily = synthetic_daily(&snapshot, 60);

    let volume_path = write_file(dir.path(), "volume.csv", &snapshot_csv(&snapshot))?;
    let daily_path = write_file(dir.path(), "daily.csv", &daily_csv(&daily))?;

    let loaded_snapshot = load_volume_records(&volume_path)?;
    let loaded_daily = load_daily_records(&daily_path)?;
    assert_eq!(loaded_snapshot, snapshot);
    assert_eq!(loaded_daily, daily);

    let engine = SegmentationEngine::new(AnalysisConfig::default());
    let from_files = engine.run(&loaded_snapshot, &loaded_daily)?;
    let in_memory = engine.run(&snapshot, &daily)?;

    assert_eq!(from_files.volume_distribution, in_memory.volume_distribution);
    assert_eq!(from_files.tier_breakdown, in_memory.tier_breakdown);
    assert_eq!(from_files.activity_patterns, in_memory.activity_patterns);
    assert_eq!(from_files.power_user_count, in_memory.power_user_count);
    Ok(())
}

#[test]
fn test_saved_cube_response_input() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let response: CubeResponse = serde_json::from_str(
        r#"{"data": [
            {"user_axiom_volume.fee_payer": "A", "user_axiom_volume.total_usd_volume": "250.5", "user_axiom_volume.swap_count": "5"},
            {"user_axiom_volume.fee_payer": "B", "user_axiom_volume.total_usd_volume": 12, "user_axiom_volume.swap_count": null},
            {"user_axiom_volume.total_usd_volume": "99"}
        ]}"#,
    )?;
    let path = dir.path().join("cube").join("volume_snapshot.json");
    save_cube_response(&path, &response)?;

    let records = load_volume_records(&path)?;
    assert_eq!(
        records,
        vec![
            UserVolumeRecord::new("A", 250.5, 5.0),
            UserVolumeRecord::new("B", 12.0, 0.0),
        ]
    );
    Ok(())
}

#[test]
fn test_saved_daily_response_input() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = write_file(
        dir.path(),
        "daily_activity.json",
        r#"{"data": [
            {"user_axiom_volume.fee_payer": "A", "user_axiom_volume.aggregation_date.day": "2024-05-01T00:00:00.000", "user_axiom_volume.total_usd_volume": "10", "user_axiom_volume.swap_count": "1"},
            {"user_axiom_volume.fee_payer": "A", "user_axiom_volume.aggregation_date.day": "2024-05-02T00:00:00.000", "user_axiom_volume.total_usd_volume": "0", "user_axiom_volume.swap_count": "0"},
            {"user_axiom_volume.fee_payer": "A", "user_axiom_volume.total_usd_volume": "7"}
        ]}"#,
    )?;

    let records = load_daily_records(&path)?;
    // The row without a day is dropped
    assert_eq!(records.len(), 2);
    assert!(records[0].is_active());
    assert!(!records[1].is_active());
    Ok(())
}

#[test]
fn test_malformed_inputs_rejected() -> anyhow::Result<()> {
    let dir = TempDir::new()?;

    let bad_day = write_file(
        dir.path(),
        "daily.csv",
        "user,day,volume,swap_count\nA,2024-05-01,1,1\nB,2024-13-45,1,1\n",
    )?;
    assert!(matches!(
        load_daily_records(&bad_day),
        Err(AppError::InvalidRecord { line: 3, .. })
    ));

    let bad_number = write_file(dir.path(), "volume.csv", "user,total_volume,swap_count\nA,lots,1\n")?;
    assert!(matches!(load_volume_records(&bad_number), Err(AppError::Csv(_))));

    let bad_json = write_file(dir.path(), "volume.json", "{not json")?;
    assert!(load_volume_records(&bad_json).is_err());

    assert!(matches!(
        load_volume_records(&dir.path().join("missing.csv")),
        Err(AppError::Csv(_)) | Err(AppError::Io(_))
    ));
    Ok(())
}

#[test]
fn test_results_written_as_json() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let report =
        SegmentationEngine::new(AnalysisConfig::default()).run(&synthetic_snapshot(200, 0), &[])?;

    let path = dir.path().join("out").join("power_user_analysis_results.json");
    write_json(&path, &report)?;

    let value: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path)?)?;
    assert_eq!(value["total_users"], 200);
    assert_eq!(value["recommendations"].as_array().map(|a| a.len()), Some(3));
    assert_eq!(value["tier_breakdown"]["entries"][3]["tier"], "whale");
    assert!(value["activity_patterns"].is_null());
    Ok(())
}
