use super::*;
use crate::grid::{GridGeometry, GridModel, GridType, ScalarType};
use crate::table::TravelTimeTable;
use crate::writer::write_grid;
use std::fs;
use tempfile::tempdir;

fn write_sample(basename: &Path, values: Vec<f64>, grid_type: GridType) -> GridFilePair {
    let table = TravelTimeTable::from_values(2, 3, values).unwrap();
    let geometry = GridGeometry::new([1, 2, 3], [0.0, 0.0, 0.0], [0.0, 1.0, 1.0]).unwrap();
    let model =
        GridModel::build(table, geometry, ScalarType::Single, grid_type, "P", None).unwrap();
    write_grid(&model, basename).unwrap()
}

#[test]
fn test_validation_report_display() {
    let mut report = ValidationReport::new("m.P.{hdr,buf}");
    report.add_check(ValidationCheck::ok("Test check 1"));
    report.add_check(ValidationCheck::warning("Test check 2", "This is a warning"));
    report.add_check(ValidationCheck::failed("Test check 3", "This failed"));

    let output = report.to_string();
    assert!(output.contains("Pair: m.P.{hdr,buf}"));
    assert!(output.contains("✓"));
    assert!(output.contains("⚠"));
    assert!(output.contains("✗"));
    assert!(output.contains("1 passed, 1 warnings, 1 failed"));
    assert!(output.ends_with("Validation FAILED\n"));
}

#[test]
fn test_valid_pair_passes() {
    let dir = tempdir().unwrap();
    let basename = dir.path().join("iasp91.P");
    write_sample(&basename, (0..6).map(f64::from).collect(), GridType::Time2D);

    let report = validate_grid_pair(&basename);

    assert!(!report.has_failures(), "{}", report);
    assert!(!report.has_warnings(), "{}", report);
    assert_eq!(report.success_count(), 5);
}

#[test]
fn test_missing_buffer_fails_structure() {
    let dir = tempdir().unwrap();
    let basename = dir.path().join("iasp91.P");
    let pair = write_sample(&basename, vec![0.0; 6], GridType::Time2D);
    fs::remove_file(pair.buffer_path()).unwrap();

    let report = validate_grid_pair(&basename);

    assert_eq!(report.checks.len(), 2);
    assert_eq!(report.failure_count(), 1);
    assert_eq!(report.checks[1].name, "Buffer file present");
}

#[test]
fn test_nothing_at_basename() {
    let dir = tempdir().unwrap();
    let report = validate_grid_pair(dir.path().join("absent"));
    assert_eq!(report.failure_count(), 2);
}

#[test]
fn test_malformed_header_reports_line() {
    let dir = tempdir().unwrap();
    let basename = dir.path().join("g");
    let pair = write_sample(&basename, vec![0.0; 6], GridType::Time2D);
    fs::write(
        pair.header_path(),
        "1 2 3\n0 0 0\n0 1 1\nQUAD\nTIME2D\nP\n\n",
    )
    .unwrap();

    let report = validate_grid_pair(&basename);

    assert!(report.has_failures());
    match &report.checks.last().unwrap().status {
        CheckStatus::Failed(msg) => assert!(msg.contains("line 4"), "{}", msg),
        other => panic!("unexpected status {:?}", other),
    }
}

#[test]
#[cfg(target_pointer_width = "64")]
fn test_oversized_header_fails_header_check() {
    let dir = tempdir().unwrap();
    let basename = dir.path().join("huge");
    let pair = GridFilePair::from_basename(&basename);
    fs::write(
        pair.header_path(),
        "2147483648 1073741824 1\n0 0 0\n1 1 1\nDOUBLE\nTIME2D\nP\n\n",
    )
    .unwrap();
    fs::write(pair.buffer_path(), b"").unwrap();

    let report = validate_grid_pair(&basename);

    assert!(report.has_failures());
    match &report.checks.last().unwrap().status {
        CheckStatus::Failed(msg) => assert!(msg.contains("too large"), "{}", msg),
        other => panic!("unexpected status {:?}", other),
    }
}

#[test]
fn test_truncated_buffer_fails_size_check() {
    let dir = tempdir().unwrap();
    let basename = dir.path().join("g");
    let pair = write_sample(&basename, vec![0.0; 6], GridType::Time2D);
    let bytes = fs::read(pair.buffer_path()).unwrap();
    fs::write(pair.buffer_path(), &bytes[..bytes.len() - 1]).unwrap();

    let report = validate_grid_pair(&basename);

    let last = report.checks.last().unwrap();
    assert_eq!(last.name, "Buffer size");
    assert_eq!(
        last.status,
        CheckStatus::Failed("expected 24 bytes, found 23".to_string())
    );
}

#[test]
fn test_non_finite_samples_warn() {
    let dir = tempdir().unwrap();
    let basename = dir.path().join("g");
    let values = vec![0.0, f64::NAN, 2.0, f64::INFINITY, 4.0, 5.0];
    write_sample(&basename, values, GridType::Time2D);

    let report = validate_grid_pair(&basename);

    assert!(!report.has_failures());
    assert_eq!(report.warning_count(), 1);
    assert!(report.to_string().contains("2 of 6 samples"));
}

#[test]
fn test_non_travel_time_grid_warns() {
    let dir = tempdir().unwrap();
    let basename = dir.path().join("g");
    write_sample(&basename, vec![1.0; 6], GridType::Velocity);

    let report = validate_grid_pair(&basename);

    assert!(!report.has_failures());
    assert_eq!(report.warning_count(), 1);
}

#[test]
fn test_report_serializes_to_json() {
    let mut report = ValidationReport::new("g.{hdr,buf}");
    report.add_check(ValidationCheck::ok("Header file present"));
    report.add_check(ValidationCheck::failed("Buffer file present", "missing"));

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["target"], "g.{hdr,buf}");
    assert_eq!(json["checks"][0]["status"], "ok");
    assert_eq!(json["checks"][1]["status"], "failed");
    assert_eq!(json["checks"][1]["message"], "missing");
}
