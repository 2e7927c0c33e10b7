//! Tests for delimited column expansion

use super::*;
use crate::app::services::enrichers::split_columns_by_separator;
use crate::config::ExpansionOptions;
use crate::table::{has_column, string_values};

fn programmatic() -> DataFrame {
    table(&[(
        "PROGRAMMATIC_BUSINESS_EMAILS",
        &[Some("a@x.com,b@x.com,c@x.com"), Some("d@x.com,e@x.com"), Some("f@x.com,g@x.com")],
    )])
}

#[test]
fn test_plain_split_keeps_every_column() {
    let result = split_columns_by_separator(
        &programmatic(),
        &["PROGRAMMATIC_BUSINESS_EMAILS"],
        &ExpansionOptions::plain(","),
    )
    .unwrap();

    assert_eq!(result.width(), 4);
    assert_eq!(
        string_values(&result, "PROGRAMMATIC_BUSINESS_EMAILS_3").unwrap(),
        vec![Some("c@x.com"), None, None]
    );
}

#[test]
fn test_columns_with_gaps_are_dropped() {
    let result = split_columns_by_separator(
        &programmatic(),
        &["PROGRAMMATIC_BUSINESS_EMAILS"],
        &ExpansionOptions::default(),
    )
    .unwrap();

    assert!(has_column(&result, "PROGRAMMATIC_BUSINESS_EMAILS_1"));
    assert!(has_column(&result, "PROGRAMMATIC_BUSINESS_EMAILS_2"));
    assert!(!has_column(&result, "PROGRAMMATIC_BUSINESS_EMAILS_3"));
    assert_eq!(
        string_values(&result, "PROGRAMMATIC_BUSINESS_EMAILS_2").unwrap(),
        vec![Some("b@x.com"), Some("e@x.com"), Some("g@x.com")]
    );
}

#[test]
fn test_identical_columns_are_dropped() {
    let df = table(&[("TAGS", &[Some("x;x"), Some("y;y")])]);
    let options = ExpansionOptions {
        separator: ";".to_string(),
        keep_non_missing_only: true,
        drop_duplicates: true,
    };

    let result = split_columns_by_separator(&df, &["TAGS"], &options).unwrap();

    assert!(has_column(&result, "TAGS_1"));
    assert!(!has_column(&result, "TAGS_2"));
}

#[test]
fn test_missing_column_fails() {
    let err = split_columns_by_separator(&programmatic(), &["NOPE"], &ExpansionOptions::default())
        .unwrap_err();
    assert!(err.is_schema_error());
}
