//! CSV ingestion

use crate::config::ReadOptions;
use crate::error::{AdListError, Result};
use crate::table::{assign_record_ids, normalize_sentinels};
use polars::prelude::*;
use std::path::Path;
use tracing::debug;

/// Read a CSV file with every column typed as string; blank cells are null
pub fn read_csv_raw(path: &Path, options: &ReadOptions) -> Result<DataFrame> {
    read_csv(path, options, true)
}

fn read_csv(path: &Path, options: &ReadOptions, blank_is_null: bool) -> Result<DataFrame> {
    if !path.is_file() {
        return Err(AdListError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let delimiter = options.delimiter;
    let df = CsvReadOptions::default()
        .with_has_header(options.has_header)
        .with_infer_schema_length(Some(0))
        .map_parse_options(|parse| {
            parse
                .with_separator(delimiter)
                .with_missing_is_null(blank_is_null)
        })
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()?;

    debug!(
        "Read {} rows x {} columns from {}",
        df.height(),
        df.width(),
        path.display()
    );
    Ok(df)
}

/// Read a raw export into a record table.
///
/// Blank cells stay empty strings so that only the `-` sentinel becomes
/// null. Sentinels are normalized when configured and every record gets a
/// `RECORD_ID`.
pub fn read_table(path: &Path, options: &ReadOptions) -> Result<DataFrame> {
    let df = read_csv(path, options, false)?;
    let df = if options.normalize_sentinel {
        normalize_sentinels(df)?
    } else {
        df
    };
    assign_record_ids(df)
}
