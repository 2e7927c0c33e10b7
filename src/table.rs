//! Record table access helpers.
//!
//! The record table is a Polars `DataFrame` whose data columns are all
//! string-typed. These helpers give every stage the same schema precondition
//! check, the same notion of "missing" and the same way of narrowing rows.

use crate::constants::{SENTINEL, derived::RECORD_ID};
use crate::error::{AdListError, Result};
use polars::prelude::*;
use std::collections::HashSet;
use tracing::debug;

/// Fail with a schema error naming the first absent column
pub fn require_columns(df: &DataFrame, columns: &[&str]) -> Result<()> {
    for column in columns {
        if df.get_column_index(column).is_none() {
            return Err(AdListError::missing_column(*column));
        }
    }
    Ok(())
}

/// Check whether the table carries a column
pub fn has_column(df: &DataFrame, column: &str) -> bool {
    df.get_column_index(column).is_some()
}

/// Borrow a string column
pub fn string_column<'a>(df: &'a DataFrame, column: &str) -> Result<&'a StringChunked> {
    let column = df
        .column(column)
        .map_err(|_| AdListError::missing_column(column))?;
    Ok(column.as_materialized_series().str()?)
}

/// Collect a string column into per-row optional values
pub fn string_values<'a>(df: &'a DataFrame, column: &str) -> Result<Vec<Option<&'a str>>> {
    Ok(string_column(df, column)?.into_iter().collect())
}

/// A value is missing when it is null, blank, or the `-` sentinel
pub fn is_missing(value: Option<&str>) -> bool {
    match value {
        None => true,
        Some(v) => {
            let trimmed = v.trim();
            trimmed.is_empty() || trimmed == SENTINEL
        }
    }
}

/// Present value, with the sentinel folded into `None`
pub fn present(value: Option<&str>) -> Option<&str> {
    if is_missing(value) { None } else { value }
}

/// Keep the rows whose mask entry is true
pub fn filter_rows(df: &DataFrame, keep: &[bool]) -> Result<DataFrame> {
    if keep.len() != df.height() {
        return Err(AdListError::invalid_input(format!(
            "row mask has {} entries for a table of {} rows",
            keep.len(),
            df.height()
        )));
    }
    let mask: BooleanChunked = keep.iter().copied().collect();
    Ok(df.filter(&mask)?)
}

/// Attach (or replace) a string column
pub fn with_string_column(
    mut df: DataFrame,
    column: &str,
    values: Vec<Option<String>>,
) -> Result<DataFrame> {
    df.with_column(Series::new(column.into(), values))?;
    Ok(df)
}

/// Reorder rows by position
pub fn take_rows(df: &DataFrame, order: &[usize]) -> Result<DataFrame> {
    let indices: Vec<IdxSize> = order.iter().map(|&i| i as IdxSize).collect();
    let indices = IdxCa::from_vec("order".into(), indices);
    Ok(df.take(&indices)?)
}

/// Assign the stable `RECORD_ID` column if the table has none
pub fn assign_record_ids(df: DataFrame) -> Result<DataFrame> {
    if has_column(&df, RECORD_ID) {
        return Ok(df);
    }
    Ok(df.with_row_index(RECORD_ID.into(), None)?)
}

/// Drop the `RECORD_ID` column before the table leaves the process
pub fn without_record_ids(df: DataFrame) -> Result<DataFrame> {
    if has_column(&df, RECORD_ID) {
        Ok(df.drop(RECORD_ID)?)
    } else {
        Ok(df)
    }
}

/// Replace the sentinel `-` with null in every string column
pub fn normalize_sentinels(df: DataFrame) -> Result<DataFrame> {
    let mut columns = Vec::with_capacity(df.width());
    let mut replaced = 0usize;

    for column in df.get_columns() {
        if column.dtype() == &DataType::String {
            let values: Vec<Option<&str>> = column
                .as_materialized_series()
                .str()?
                .into_iter()
                .map(|value| match value {
                    Some(v) if v.trim() == SENTINEL => {
                        replaced += 1;
                        None
                    }
                    other => other,
                })
                .collect();
            columns.push(Column::from(Series::new(column.name().clone(), values)));
        } else {
            columns.push(column.clone());
        }
    }

    debug!("Normalized {} sentinel values to null", replaced);
    Ok(DataFrame::new(columns)?)
}

/// Render every value of a column as an optional string
pub fn rendered_values(df: &DataFrame, column: &str) -> Result<Vec<Option<String>>> {
    let column = df
        .column(column)
        .map_err(|_| AdListError::missing_column(column))?;
    let as_text = column.as_materialized_series().cast(&DataType::String)?;
    Ok(as_text
        .str()?
        .into_iter()
        .map(|v| v.map(str::to_string))
        .collect())
}

/// Count rows that fully duplicate an earlier row, ignoring `RECORD_ID`
pub fn count_duplicates(df: &DataFrame) -> Result<usize> {
    let names: Vec<String> = df
        .get_column_names()
        .into_iter()
        .filter(|name| name.as_str() != RECORD_ID)
        .map(|name| name.to_string())
        .collect();

    let mut rendered = Vec::with_capacity(names.len());
    for name in &names {
        rendered.push(rendered_values(df, name)?);
    }

    let mut seen = HashSet::with_capacity(df.height());
    let mut duplicates = 0;
    for row in 0..df.height() {
        let key: Vec<Option<&str>> = rendered.iter().map(|col| col[row].as_deref()).collect();
        if !seen.insert(key) {
            duplicates += 1;
        }
    }
    Ok(duplicates)
}

/// Human-readable duplicate report
pub fn duplicate_summary(df: &DataFrame) -> Result<String> {
    let duplicates = count_duplicates(df)?;
    if duplicates == 0 {
        Ok("No duplicates found.".to_string())
    } else {
        Ok(format!("The data has {} duplicates.", duplicates))
    }
}
