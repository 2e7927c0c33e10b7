//! Record validators
//!
//! Pure predicates over one field or a small group of fields. Each filter
//! checks its schema precondition before looking at any row, then narrows the
//! table to the rows it accepts.
//!
//! # Architecture
//!
//! - [`sic`] - SIC code membership on a delimited multi-value field
//! - [`seniority`] - Seniority exclude-list with a character-set gate
//! - [`keyword`] - Escaped keyword alternation (industry, job title, email status)
//! - [`email`] - Weak personal email presence check
//! - [`region`] - US state / ZIP validity
//! - [`address`] - PO-box detection for candidate street addresses

pub mod address;
pub mod email;
pub mod keyword;
pub mod region;
pub mod seniority;
pub mod sic;

#[cfg(test)]
pub mod tests;

use crate::error::Result;
use crate::table::{filter_rows, require_columns};
use polars::prelude::DataFrame;
use tracing::debug;

pub use address::{PoBoxMatcher, is_valid_address};
pub use email::PersonalEmailFilter;
pub use keyword::{
    EmailStatusFilter, IndustryFilter, JobTitleExclusionFilter, KeywordMatcher,
};
pub use region::{RegionFilter, is_us_state, is_valid_zip};
pub use seniority::SeniorityFilter;
pub use sic::SicCodeFilter;

/// A keep/drop decision over every record of a table
pub trait RecordFilter {
    /// Short stage name used in logs
    fn name(&self) -> &'static str;

    /// Columns that must exist before any row is examined
    fn required_columns(&self) -> Vec<&str>;

    /// One entry per row, true to keep
    fn keep_mask(&self, df: &DataFrame) -> Result<Vec<bool>>;

    /// Check the schema, then narrow the table
    fn apply(&self, df: &DataFrame) -> Result<DataFrame> {
        require_columns(df, &self.required_columns())?;
        let mask = self.keep_mask(df)?;
        let filtered = filter_rows(df, &mask)?;
        debug!(
            "{}: {} -> {} records",
            self.name(),
            df.height(),
            filtered.height()
        );
        Ok(filtered)
    }
}
