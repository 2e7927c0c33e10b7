//! Street address selection with provenance

use crate::app::models::AddressSource;
use crate::app::services::validators::{PoBoxMatcher, is_valid_address};
use crate::constants::derived::{ADDRESS_USED, VALID_ADDRESS};
use crate::error::Result;
use crate::table::{filter_rows, require_columns, string_values, with_string_column};
use polars::prelude::DataFrame;
use tracing::debug;

/// Pick the first usable address among the six sources for one record
pub fn first_valid_address<'a>(
    candidates: &[Option<&'a str>],
    matcher: &PoBoxMatcher,
) -> Option<(&'a str, AddressSource)> {
    AddressSource::PRIORITY
        .iter()
        .zip(candidates)
        .find(|(_, value)| is_valid_address(**value, matcher))
        .and_then(|(source, value)| value.map(|v| (v, *source)))
}

/// Attach `VALID_ADDRESS` and `ADDRESS_USED`, dropping records without a
/// usable address. Returns the narrowed table and the number of records kept.
pub fn filter_and_label_valid_addresses(
    df: &DataFrame,
    matcher: &PoBoxMatcher,
) -> Result<(DataFrame, usize)> {
    let source_columns = AddressSource::all_columns();
    require_columns(df, &source_columns)?;

    let mut candidates = Vec::with_capacity(source_columns.len());
    for column in &source_columns {
        candidates.push(string_values(df, column)?);
    }

    let mut addresses = Vec::with_capacity(df.height());
    let mut used = Vec::with_capacity(df.height());
    let mut keep = Vec::with_capacity(df.height());

    for row in 0..df.height() {
        let record: Vec<Option<&str>> = candidates.iter().map(|column| column[row]).collect();
        match first_valid_address(&record, matcher) {
            Some((address, source)) => {
                addresses.push(Some(address.to_string()));
                used.push(Some(source.to_string()));
                keep.push(true);
            }
            None => {
                addresses.push(None);
                used.push(None);
                keep.push(false);
            }
        }
    }

    let labeled = with_string_column(df.clone(), VALID_ADDRESS, addresses)?;
    let labeled = with_string_column(labeled, ADDRESS_USED, used)?;
    let result = filter_rows(&labeled, &keep)?;
    let valid = result.height();

    debug!("Address enrichment found {} valid addresses", valid);
    Ok((result, valid))
}
