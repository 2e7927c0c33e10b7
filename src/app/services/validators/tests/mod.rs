//! Tests for the record validators

pub mod keyword_tests;
pub mod seniority_tests;

use polars::prelude::*;

/// Build a single-column table
pub fn single_column(name: &str, values: &[Option<&str>]) -> DataFrame {
    DataFrame::new(vec![Column::new(name.into(), values)]).unwrap()
}

/// Build a two-column table
pub fn two_columns(
    first: (&str, &[Option<&str>]),
    second: (&str, &[Option<&str>]),
) -> DataFrame {
    DataFrame::new(vec![
        Column::new(first.0.into(), first.1),
        Column::new(second.0.into(), second.1),
    ])
    .unwrap()
}
