//! Seniority level filtering

use super::RecordFilter;
use crate::constants::columns;
use crate::error::Result;
use crate::table::string_column;
use polars::prelude::DataFrame;
use regex::Regex;
use std::sync::LazyLock;

/// Anything other than word characters and whitespace
static NON_STANDARD_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("static pattern"));

/// Drop records with an excluded, malformed or missing seniority level
#[derive(Debug, Clone, Default)]
pub struct SeniorityFilter {
    excluded: Vec<String>,
}

impl SeniorityFilter {
    /// Labels are compared case-insensitively
    pub fn new<I, S>(excluded: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            excluded: excluded
                .into_iter()
                .map(|s| s.as_ref().to_lowercase())
                .collect(),
        }
    }

    pub fn is_acceptable(&self, value: Option<&str>) -> bool {
        let Some(level) = value else {
            return false;
        };
        let lowered = level.to_lowercase();
        !self.excluded.contains(&lowered) && !NON_STANDARD_CHARS.is_match(level)
    }
}

impl RecordFilter for SeniorityFilter {
    fn name(&self) -> &'static str {
        "seniority_filter"
    }

    fn required_columns(&self) -> Vec<&str> {
        vec![columns::SENIORITY_LEVEL]
    }

    fn keep_mask(&self, df: &DataFrame) -> Result<Vec<bool>> {
        Ok(string_column(df, columns::SENIORITY_LEVEL)?
            .into_iter()
            .map(|value| self.is_acceptable(value))
            .collect())
    }
}
