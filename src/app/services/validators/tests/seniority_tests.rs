//! Tests for seniority filtering

use super::*;
use crate::app::services::validators::{RecordFilter, SeniorityFilter};
use crate::error::AdListError;
use crate::table::string_values;

#[test]
fn test_excluded_levels_are_case_insensitive() {
    let df = single_column(
        "SENIORITY_LEVEL",
        &[Some("Staff"), Some("MANAGER"), Some("Director"), Some("cxo")],
    );
    let filter = SeniorityFilter::new(["staff", "Manager"]);

    let result = filter.apply(&df).unwrap();

    assert_eq!(
        string_values(&result, "SENIORITY_LEVEL").unwrap(),
        vec![Some("Director"), Some("cxo")]
    );
}

#[test]
fn test_non_standard_characters_and_missing_are_dropped() {
    let df = single_column(
        "SENIORITY_LEVEL",
        &[
            Some("Vice President"),
            Some("C-Level"),
            Some("Owner/Partner"),
            Some("senior_staff"),
            None,
            Some("-"),
        ],
    );
    let filter = SeniorityFilter::default();

    let result = filter.apply(&df).unwrap();

    assert_eq!(
        string_values(&result, "SENIORITY_LEVEL").unwrap(),
        vec![Some("Vice President"), Some("senior_staff")]
    );
}

#[test]
fn test_missing_column_is_schema_error() {
    let df = single_column("JOB_TITLE", &[Some("CEO")]);
    let err = SeniorityFilter::default().apply(&df).unwrap_err();
    assert!(err.is_schema_error());
    assert!(matches!(err, AdListError::MissingColumn { .. }));
}
