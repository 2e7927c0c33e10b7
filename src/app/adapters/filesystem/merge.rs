//! Folder merge with key-based deduplication

use super::reader::read_csv_raw;
use super::writer::write_csv;
use crate::app::models::MergeReport;
use crate::config::ReadOptions;
use crate::constants::CSV_GLOB;
use crate::error::{AdListError, Result};
use crate::table::{filter_rows, rendered_values, require_columns};
use polars::prelude::{DataFrame, IntoLazy, UnionArgs, concat};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// CSV files directly inside `folder`, in name order
fn find_csv_files(folder: &Path) -> Result<Vec<PathBuf>> {
    if !folder.is_dir() {
        return Err(AdListError::FolderNotFound {
            path: folder.to_path_buf(),
        });
    }

    let pattern = folder.join(CSV_GLOB);
    let mut files: Vec<PathBuf> = glob::glob(&pattern.to_string_lossy())?
        .filter_map(|entry| entry.ok())
        .filter(|path| path.is_file())
        .collect();
    files.sort();

    if files.is_empty() {
        return Err(AdListError::NoMatchingFiles {
            folder: folder.to_path_buf(),
            pattern: CSV_GLOB.to_string(),
        });
    }
    Ok(files)
}

/// Keep the first record for each distinct key
fn deduplicate(df: &DataFrame, key_columns: &[&str]) -> Result<DataFrame> {
    require_columns(df, key_columns)?;

    let mut keys = Vec::with_capacity(key_columns.len());
    for column in key_columns {
        keys.push(rendered_values(df, column)?);
    }

    let mut seen = HashSet::with_capacity(df.height());
    let keep: Vec<bool> = (0..df.height())
        .map(|row| {
            let key: Vec<Option<&str>> = keys.iter().map(|col| col[row].as_deref()).collect();
            seen.insert(key)
        })
        .collect();

    filter_rows(df, &keep)
}

/// Concatenate every CSV in `folder` (union of columns, gaps left empty),
/// drop later duplicates on `key_columns` and write the result to `output`.
pub fn merge_csv_files(folder: &Path, output: &Path, key_columns: &[&str]) -> Result<MergeReport> {
    let files = find_csv_files(folder)?;
    debug!("Merging {} files from {}", files.len(), folder.display());

    let options = ReadOptions::default().keep_sentinels();
    let mut frames = Vec::with_capacity(files.len());
    for file in &files {
        frames.push(read_csv_raw(file, &options)?.lazy());
    }

    let merged = concat(
        frames,
        UnionArgs {
            diagonal: true,
            ..Default::default()
        },
    )?
    .collect()?;
    let rows_before_dedup = merged.height();

    let merged = if key_columns.is_empty() {
        merged
    } else {
        deduplicate(&merged, key_columns)?
    };

    write_csv(&merged, output)?;

    let report = MergeReport {
        files_merged: files.len(),
        rows_before_dedup,
        rows_written: merged.height(),
        output_path: output.to_path_buf(),
    };
    info!("{}", report.summary());
    Ok(report)
}
