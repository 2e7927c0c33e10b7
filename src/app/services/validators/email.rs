//! Personal email presence check

use super::RecordFilter;
use crate::constants::columns;
use crate::error::Result;
use crate::table::string_column;
use polars::prelude::DataFrame;

/// Keep records whose personal email contains an `@`.
///
/// This is a syntactic smoke test, not address validation.
#[derive(Debug, Clone, Copy, Default)]
pub struct PersonalEmailFilter;

pub fn has_at_sign(value: Option<&str>) -> bool {
    value.is_some_and(|v| v.contains('@'))
}

impl RecordFilter for PersonalEmailFilter {
    fn name(&self) -> &'static str {
        "personal_email_filter"
    }

    fn required_columns(&self) -> Vec<&str> {
        vec![columns::PERSONAL_EMAIL]
    }

    fn keep_mask(&self, df: &DataFrame) -> Result<Vec<bool>> {
        Ok(string_column(df, columns::PERSONAL_EMAIL)?
            .into_iter()
            .map(has_at_sign)
            .collect())
    }
}
