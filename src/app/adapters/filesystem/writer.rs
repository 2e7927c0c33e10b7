//! CSV output

use crate::error::{AdListError, Result};
use crate::table::without_record_ids;
use polars::prelude::*;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Write `df` to `path` with a header row, creating parent directories.
///
/// `RECORD_ID` never leaves the process.
pub fn write_csv(df: &DataFrame, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| AdListError::write_failed(path, e))?;
    }

    let mut output = without_record_ids(df.clone())?;
    let mut file = File::create(path).map_err(|e| AdListError::write_failed(path, e))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut output)
        .map_err(|e| AdListError::write_failed(path, e))?;

    debug!("Wrote {} rows to {}", output.height(), path.display());
    Ok(())
}

/// Save `df` as `<dir>/<name>.csv` and return the path written
pub fn save_table_csv(df: &DataFrame, dir: &Path, name: &str) -> Result<PathBuf> {
    if name.trim().is_empty() {
        return Err(AdListError::invalid_input("list name must not be empty"));
    }
    let path = dir.join(format!("{}.csv", name));
    write_csv(df, &path)?;
    Ok(path)
}
