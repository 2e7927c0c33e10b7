//! Tests for CSV reading and writing

use super::*;
use crate::app::adapters::filesystem::{read_csv_raw, read_table, save_table_csv, write_csv};
use crate::app::services::validators::{RecordFilter, RegionFilter};
use crate::config::ReadOptions;
use crate::constants::derived::RECORD_ID;
use crate::error::AdListError;
use crate::table::{has_column, string_values};
use tempfile::TempDir;

#[test]
fn test_read_table_normalizes_and_assigns_ids() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        dir.path(),
        "raw.csv",
        "FIRST_NAME,PERSONAL_ZIP\nAnn,01234\nBob,-\n",
    );

    let df = read_table(&path, &ReadOptions::default()).unwrap();

    assert!(has_column(&df, RECORD_ID));
    assert_eq!(df.height(), 2);
    // Leading zeros survive because nothing is type-inferred
    assert_eq!(
        string_values(&df, "PERSONAL_ZIP").unwrap(),
        vec![Some("01234"), None]
    );
}

#[test]
fn test_read_table_keeps_blank_cells_apart_from_sentinels() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        dir.path(),
        "raw.csv",
        "FIRST_NAME,PERSONAL_STATE,PERSONAL_ZIP\nblank,,10001\ndash,-,10001\nny,NY,x\n",
    );

    let df = read_table(&path, &ReadOptions::default()).unwrap();
    assert_eq!(
        string_values(&df, "PERSONAL_STATE").unwrap(),
        vec![Some(""), None, Some("NY")]
    );

    let survivors = RegionFilter.apply(&df).unwrap();
    assert_eq!(
        string_values(&survivors, "FIRST_NAME").unwrap(),
        vec![Some("dash"), Some("ny")]
    );
}

#[test]
fn test_keep_sentinels_and_custom_delimiter() {
    let dir = TempDir::new().unwrap();
    let path = write_file(dir.path(), "raw.csv", "A;B\nx;-\n");
    let options = ReadOptions::default().with_delimiter(b';').keep_sentinels();

    let df = read_csv_raw(&path, &options).unwrap();

    assert!(!has_column(&df, RECORD_ID));
    assert_eq!(string_values(&df, "B").unwrap(), vec![Some("-")]);
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = read_table(&dir.path().join("absent.csv"), &ReadOptions::default()).unwrap_err();
    assert!(matches!(err, AdListError::FileNotFound { .. }));
}

#[test]
fn test_save_creates_directory_and_drops_record_ids() {
    let dir = TempDir::new().unwrap();
    let input = write_file(dir.path(), "raw.csv", "A,B\n1,2\n3,4\n");
    let df = read_table(&input, &ReadOptions::default()).unwrap();

    let out_dir = dir.path().join("Output_list_DataBase");
    let path = save_table_csv(&df, &out_dir, "my_list").unwrap();

    assert_eq!(path, out_dir.join("my_list.csv"));
    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written.lines().next(), Some("A,B"));
    assert_eq!(written.lines().count(), 3);
}

#[test]
fn test_write_csv_nested_path() {
    let dir = TempDir::new().unwrap();
    let input = write_file(dir.path(), "raw.csv", "A\nx\n");
    let df = read_csv_raw(&input, &ReadOptions::default()).unwrap();

    let nested = dir.path().join("a").join("b").join("out.csv");
    write_csv(&df, &nested).unwrap();
    assert!(nested.is_file());
}

#[test]
fn test_empty_list_name_is_rejected() {
    let dir = TempDir::new().unwrap();
    let input = write_file(dir.path(), "raw.csv", "A\nx\n");
    let df = read_csv_raw(&input, &ReadOptions::default()).unwrap();

    let err = save_table_csv(&df, dir.path(), " ").unwrap_err();
    assert!(matches!(err, AdListError::InvalidInput { .. }));
}
