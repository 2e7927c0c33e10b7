//! US state and ZIP validity

use super::RecordFilter;
use crate::constants::{SENTINEL, US_STATE_ABBREVIATIONS, ZIP_CODE_PATTERN, columns};
use crate::error::Result;
use crate::table::string_values;
use polars::prelude::DataFrame;
use regex::Regex;
use std::sync::LazyLock;

static ZIP_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(ZIP_CODE_PATTERN).expect("static pattern"));

pub fn is_us_state(value: &str) -> bool {
    US_STATE_ABBREVIATIONS.contains(&value)
}

pub fn is_valid_zip(value: &str) -> bool {
    ZIP_CODE.is_match(value)
}

/// Keep a record in one of the 50 states, or with no state but a valid ZIP.
///
/// A null state (a normalized sentinel) is treated exactly like `-`. A blank
/// state is neither a state nor the sentinel, so it is dropped.
pub fn is_us_region(state: Option<&str>, zip: Option<&str>) -> bool {
    match state {
        Some(s) if s == SENTINEL => zip.is_some_and(is_valid_zip),
        Some(s) => is_us_state(s),
        None => zip.is_some_and(is_valid_zip),
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RegionFilter;

impl RecordFilter for RegionFilter {
    fn name(&self) -> &'static str {
        "region_filter"
    }

    fn required_columns(&self) -> Vec<&str> {
        vec![columns::PERSONAL_STATE, columns::PERSONAL_ZIP]
    }

    fn keep_mask(&self, df: &DataFrame) -> Result<Vec<bool>> {
        let states = string_values(df, columns::PERSONAL_STATE)?;
        let zips = string_values(df, columns::PERSONAL_ZIP)?;
        Ok(states
            .into_iter()
            .zip(zips)
            .map(|(state, zip)| is_us_region(state, zip))
            .collect())
    }
}
