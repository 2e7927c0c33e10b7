//! SIC code filtering

use super::RecordFilter;
use crate::config::AdListConfig;
use crate::constants::{DEFAULT_SIC_DELIMITER, columns};
use crate::error::Result;
use crate::table::string_column;
use polars::prelude::DataFrame;
use std::collections::HashSet;

/// Keep records whose delimited SIC field contains at least one target code
#[derive(Debug, Clone)]
pub struct SicCodeFilter {
    column: String,
    delimiter: String,
    targets: HashSet<String>,
}

impl SicCodeFilter {
    pub fn new<I, S>(targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            column: columns::COMPANY_SIC.to_string(),
            delimiter: DEFAULT_SIC_DELIMITER.to_string(),
            targets: targets
                .into_iter()
                .map(|s| s.as_ref().trim().to_string())
                .collect(),
        }
    }

    /// Targets split on the configured SIC delimiter
    pub fn from_config<I, S>(targets: I, config: &AdListConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(targets).with_delimiter(config.sic_delimiter.as_str())
    }

    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    pub fn with_column(mut self, column: impl Into<String>) -> Self {
        self.column = column.into();
        self
    }

    /// Check one raw SIC value
    pub fn matches(&self, value: Option<&str>) -> bool {
        value.is_some_and(|codes| {
            codes
                .split(self.delimiter.as_str())
                .any(|code| self.targets.contains(code.trim()))
        })
    }
}

impl RecordFilter for SicCodeFilter {
    fn name(&self) -> &'static str {
        "sic_code_filter"
    }

    fn required_columns(&self) -> Vec<&str> {
        vec![self.column.as_str()]
    }

    fn keep_mask(&self, df: &DataFrame) -> Result<Vec<bool>> {
        Ok(string_column(df, &self.column)?
            .into_iter()
            .map(|value| self.matches(value))
            .collect())
    }
}
