//! Phone number consolidation
//!
//! Two phone columns overlap: most records carry one, some carry both. The
//! column with fewer missing values across the whole batch becomes primary.
//! That choice is made once, by [`PrimarySourceDecision::analyze`], and then
//! applied record by record with [`enrich_phone_numbers`]. Re-running the
//! analysis on a different subset of the same data can flip the choice, so
//! callers that need a stable designation should keep the decision value.

use crate::constants::{columns, derived::ENRICHED_PHONE_NUMBER};
use crate::error::Result;
use crate::table::{filter_rows, present, require_columns, string_values, with_string_column};
use polars::prelude::DataFrame;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Which of two phone columns is consulted first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimarySourceDecision {
    pub primary: String,
    pub secondary: String,
    pub primary_missing: usize,
    pub secondary_missing: usize,
}

impl PrimarySourceDecision {
    /// Count missing values in both columns and pick the more complete one.
    ///
    /// On a tie the first column stays primary.
    pub fn analyze(df: &DataFrame, first: &str, second: &str) -> Result<Self> {
        require_columns(df, &[first, second])?;

        let first_missing = count_missing(df, first)?;
        let second_missing = count_missing(df, second)?;

        let decision = if second_missing < first_missing {
            Self {
                primary: second.to_string(),
                secondary: first.to_string(),
                primary_missing: second_missing,
                secondary_missing: first_missing,
            }
        } else {
            Self {
                primary: first.to_string(),
                secondary: second.to_string(),
                primary_missing: first_missing,
                secondary_missing: second_missing,
            }
        };

        debug!(
            "Phone primary: {} ({} missing), secondary: {} ({} missing)",
            decision.primary,
            decision.primary_missing,
            decision.secondary,
            decision.secondary_missing
        );
        Ok(decision)
    }

    /// Decision over `MOBILE_PHONE` and `DIRECT_NUMBER`
    pub fn for_phone_columns(df: &DataFrame) -> Result<Self> {
        Self::analyze(df, columns::MOBILE_PHONE, columns::DIRECT_NUMBER)
    }

    /// Canonical value for one record
    pub fn resolve<'a>(&self, primary: Option<&'a str>, secondary: Option<&'a str>) -> Option<&'a str> {
        present(primary).or_else(|| present(secondary))
    }
}

fn count_missing(df: &DataFrame, column: &str) -> Result<usize> {
    Ok(string_values(df, column)?
        .into_iter()
        .filter(|value| present(*value).is_none())
        .count())
}

/// Attach `ENRICHED_PHONE_NUMBER` and drop records with no phone at all
pub fn enrich_phone_numbers(df: &DataFrame, decision: &PrimarySourceDecision) -> Result<DataFrame> {
    require_columns(df, &[decision.primary.as_str(), decision.secondary.as_str()])?;

    let primary = string_values(df, &decision.primary)?;
    let secondary = string_values(df, &decision.secondary)?;

    let enriched: Vec<Option<String>> = primary
        .into_iter()
        .zip(secondary)
        .map(|(p, s)| decision.resolve(p, s).map(str::to_string))
        .collect();
    let keep: Vec<bool> = enriched.iter().map(Option::is_some).collect();

    let with_phone = with_string_column(df.clone(), ENRICHED_PHONE_NUMBER, enriched)?;
    let result = filter_rows(&with_phone, &keep)?;

    debug!(
        "Phone enrichment kept {} of {} records",
        result.height(),
        df.height()
    );
    Ok(result)
}
