//! Tests for record enrichers

pub mod email_tests;
pub mod expansion_tests;

use polars::prelude::*;

/// Build a table from named optional-string columns
pub fn table(columns: &[(&str, &[Option<&str>])]) -> DataFrame {
    DataFrame::new(
        columns
            .iter()
            .map(|(name, values)| Column::new((*name).into(), *values))
            .collect(),
    )
    .unwrap()
}
