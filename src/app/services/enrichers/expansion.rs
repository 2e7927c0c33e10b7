//! Delimited column expansion

use crate::config::ExpansionOptions;
use crate::error::Result;
use crate::table::{require_columns, string_values, with_string_column};
use polars::prelude::DataFrame;
use tracing::debug;

/// Name of the `n`th expanded column (1-based)
pub fn expanded_column_name(column: &str, n: usize) -> String {
    format!("{}_{}", column, n)
}

/// Tokenize every value; a null value yields no tokens
fn split_values(values: &[Option<&str>], separator: &str) -> Vec<Vec<String>> {
    values
        .iter()
        .map(|value| match value {
            Some(v) => v.split(separator).map(str::to_string).collect(),
            None => Vec::new(),
        })
        .collect()
}

/// Expand each named column into `<name>_1 .. <name>_N` where N is the
/// largest token count in the table.
///
/// With `keep_non_missing_only`, an expanded column with a gap in any record
/// is dropped. With `drop_duplicates`, an expanded column identical to an
/// earlier one is dropped. The source column itself is kept.
pub fn split_columns_by_separator(
    df: &DataFrame,
    columns: &[&str],
    options: &ExpansionOptions,
) -> Result<DataFrame> {
    require_columns(df, columns)?;

    let mut result = df.clone();
    for column in columns {
        let tokens = split_values(&string_values(df, column)?, &options.separator);
        let width = tokens.iter().map(Vec::len).max().unwrap_or(0);

        let mut expanded: Vec<(usize, Vec<Option<String>>)> = (0..width)
            .map(|slot| {
                let values = tokens.iter().map(|row| row.get(slot).cloned()).collect();
                (slot + 1, values)
            })
            .collect();

        if options.keep_non_missing_only {
            expanded.retain(|(_, values)| values.iter().all(Option::is_some));
        }
        if options.drop_duplicates {
            let mut unique: Vec<(usize, Vec<Option<String>>)> = Vec::with_capacity(expanded.len());
            for (n, values) in expanded {
                if !unique.iter().any(|(_, seen)| *seen == values) {
                    unique.push((n, values));
                }
            }
            expanded = unique;
        }

        debug!(
            "Expanded {} into {} of {} possible columns",
            column,
            expanded.len(),
            width
        );

        for (n, values) in expanded {
            result = with_string_column(result, &expanded_column_name(column, n), values)?;
        }
    }

    Ok(result)
}
