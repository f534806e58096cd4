//! Result persistence through the public API

use littime::report::{load_result, read_text, save_result, to_json, EstimateRecord};
use littime::{estimate_reading_time, ReadingEstimate, ReportError};
use std::fs;
use tempfile::TempDir;

use crate::helpers::{fixtures_dir, temp_text};

#[test]
fn read_text_returns_whole_file() {
    let (_temp, path) = temp_text("book.txt", "Первая строка.\nSecond line.\n");
    assert_eq!(read_text(&path).unwrap(), "Первая строка.\nSecond line.\n");
}

#[test]
fn read_directory_is_an_error() {
    let err = read_text(&fixtures_dir()).unwrap_err();
    assert!(matches!(err, ReportError::FileRead { .. }));
}

#[test]
fn saved_json_has_pascal_case_fields() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("littime_results.json");
    let estimate = ReadingEstimate::new(1.5, 270, 15, 400, 88.25);

    save_result(&estimate, &path).unwrap();

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json["ReadingTime"], 1.5);
    assert_eq!(json["WordCount"], 270);
    assert_eq!(json["SentenceCount"], 15);
    assert_eq!(json["SyllableCount"], 400);
    assert_eq!(json["FleschKincaidIndex"], 88.25);
}

#[test]
fn json_is_two_space_indented() {
    let json = to_json(&ReadingEstimate::new(0.5, 100, 10, 100, 133.74)).unwrap();
    assert!(json.starts_with("{\n  \"ReadingTime\""));
}

#[test]
fn estimate_survives_save_and_load() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("out").join("result.json");
    let estimate = estimate_reading_time("Один. Два три.", 180.0, false, 2).unwrap();

    save_result(&estimate, &path).unwrap();
    assert_eq!(load_result(&path).unwrap(), estimate);
}

#[test]
fn record_converts_from_estimate() {
    let estimate = ReadingEstimate::new(2.0, 10, 2, 15, 70.0);
    let record = EstimateRecord::from(&estimate);
    assert_eq!(record.word_count, 10);
    assert_eq!(record.flesch_kincaid_index, 70.0);
    assert_eq!(ReadingEstimate::from(record), estimate);
}

#[test]
fn save_into_file_parent_fails() {
    let (_temp, file) = temp_text("plain.txt", "x");
    let err = save_result(&ReadingEstimate::new(1.0, 1, 1, 1, 1.0), &file.join("r.json"))
        .unwrap_err();
    assert!(matches!(err, ReportError::FileWrite { .. }));
}
