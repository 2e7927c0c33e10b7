//! Output layouts
//!
//! Projects an enriched table onto a fixed, ordered set of output columns,
//! renaming on the way, optionally prefixing a synthetic identifier and
//! clearing fields that repeat another field of the same record.

use crate::config::IdStrategy;
use crate::constants::{columns, derived, email_list, liveramp};
use crate::error::{AdListError, Result};
use crate::table::{rendered_values, require_columns};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Target schema for a formatted list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputLayout {
    /// Synthetic identifier column placed first, if any
    pub id_column: Option<String>,

    /// `(target, source)` pairs in output order
    pub columns: Vec<(String, String)>,

    /// `(keep, clear)` target pairs: `clear` is nulled when equal to `keep`
    pub suppress_duplicates: Vec<(String, String)>,
}

fn pairs(mapping: &[(&str, &str)]) -> Vec<(String, String)> {
    mapping
        .iter()
        .map(|(a, b)| (a.to_string(), b.to_string()))
        .collect()
}

impl OutputLayout {
    /// LiveRamp advertising audience upload
    pub fn liveramp() -> Self {
        Self {
            id_column: Some(liveramp::CLIENT_CUSTOMER_ID.to_string()),
            columns: pairs(&[
                (liveramp::FIRST_NAME, columns::FIRST_NAME),
                (liveramp::LAST_NAME, columns::LAST_NAME),
                (liveramp::STREET_ADDRESS_1, derived::VALID_ADDRESS),
                (liveramp::STREET_ADDRESS_2, columns::PROFESSIONAL_ADDRESS),
                (liveramp::CITY, columns::PERSONAL_CITY),
                (liveramp::STATE, columns::PERSONAL_STATE),
                (liveramp::ZIP_CODE, columns::PERSONAL_ZIP),
                (liveramp::ZIP_CODE_PLUS_4, columns::PERSONAL_ZIP4),
                (liveramp::EMAIL_1, derived::VALID_BUSINESS_EMAIL),
                (liveramp::EMAIL_2, "PROGRAMMATIC_BUSINESS_EMAILS_1"),
                (liveramp::EMAIL_3, "PROGRAMMATIC_BUSINESS_EMAILS_2"),
                (liveramp::PHONE_NUMBER_1, derived::ENRICHED_PHONE_NUMBER),
                (liveramp::PHONE_NUMBER_2, columns::MOBILE_PHONE),
            ]),
            suppress_duplicates: pairs(&[
                (liveramp::PHONE_NUMBER_1, liveramp::PHONE_NUMBER_2),
                (liveramp::STREET_ADDRESS_1, liveramp::STREET_ADDRESS_2),
            ]),
        }
    }

    /// Plain first name / last name / email list
    pub fn email_list() -> Self {
        Self {
            id_column: None,
            columns: pairs(&[
                (email_list::FIRST_NAME, columns::FIRST_NAME),
                (email_list::LAST_NAME, columns::LAST_NAME),
                (email_list::EMAIL, derived::VALID_BUSINESS_EMAIL),
            ]),
            suppress_duplicates: Vec::new(),
        }
    }

    pub fn source_columns(&self) -> Vec<&str> {
        self.columns.iter().map(|(_, source)| source.as_str()).collect()
    }

    pub fn target_columns(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.id_column.iter().map(String::as_str).collect();
        names.extend(self.columns.iter().map(|(target, _)| target.as_str()));
        names
    }

    fn target_index(&self, target: &str) -> Result<usize> {
        self.columns
            .iter()
            .position(|(name, _)| name == target)
            .ok_or_else(|| {
                AdListError::invalid_input(format!(
                    "suppression names '{}' which is not an output column",
                    target
                ))
            })
    }
}

/// Deterministic identifiers for `height` output rows
pub fn synthetic_ids(df: &DataFrame, strategy: IdStrategy) -> Result<Vec<u64>> {
    match strategy {
        IdStrategy::Sequential { start } => (0..df.height() as u64)
            .map(|i| {
                start.checked_add(i).ok_or_else(|| {
                    AdListError::invalid_input(format!(
                        "customer IDs starting at {} overflow for {} rows",
                        start,
                        df.height()
                    ))
                })
            })
            .collect(),
        IdStrategy::RecordId => {
            require_columns(df, &[derived::RECORD_ID])?;
            let ids = df
                .column(derived::RECORD_ID)?
                .as_materialized_series()
                .cast(&DataType::UInt64)?;
            Ok(ids.u64()?.into_iter().map(|id| id.unwrap_or_default()).collect())
        }
    }
}

/// Null `clear` wherever it is byte-identical to `keep`
fn suppress(keep: &[Option<String>], clear: &mut [Option<String>]) -> usize {
    let mut cleared = 0;
    for (kept, value) in keep.iter().zip(clear.iter_mut()) {
        if value.is_some() && value == kept {
            *value = None;
            cleared += 1;
        }
    }
    cleared
}

/// Project `df` onto `layout`.
///
/// Every source column must exist; the check runs before any value is read.
pub fn format_table(df: &DataFrame, layout: &OutputLayout, ids: IdStrategy) -> Result<DataFrame> {
    require_columns(df, &layout.source_columns())?;

    let mut values = Vec::with_capacity(layout.columns.len());
    for (_, source) in &layout.columns {
        values.push(rendered_values(df, source)?);
    }

    for (keep, clear) in &layout.suppress_duplicates {
        let keep_idx = layout.target_index(keep)?;
        let clear_idx = layout.target_index(clear)?;
        let kept = values[keep_idx].clone();
        let cleared = suppress(&kept, &mut values[clear_idx]);
        debug!("Cleared {} '{}' values repeating '{}'", cleared, clear, keep);
    }

    let mut output: Vec<Column> = Vec::with_capacity(layout.columns.len() + 1);
    if let Some(id_column) = &layout.id_column {
        let ids = synthetic_ids(df, ids)?;
        output.push(Column::new(id_column.as_str().into(), ids));
    }
    for ((target, _), column) in layout.columns.iter().zip(values) {
        output.push(Column::new(target.as_str().into(), column));
    }

    Ok(DataFrame::new(output)?)
}
