//! Multi-sheet workbook output

use crate::constants::MAX_SHEET_NAME_LEN;
use crate::error::{AdListError, Result};
use crate::table::rendered_values;
use polars::prelude::DataFrame;
use rust_xlsxwriter::Workbook;
use std::path::Path;
use tracing::debug;

/// `<name>_<rows>`, cut to the sheet-name length limit
pub fn sheet_title(name: &str, rows: usize) -> String {
    format!("{}_{}", name, rows)
        .chars()
        .take(MAX_SHEET_NAME_LEN)
        .collect()
}

/// Zero-based table column as a worksheet column index
pub fn sheet_column(col: usize) -> Result<u16> {
    u16::try_from(col).map_err(|_| {
        AdListError::invalid_input(format!("column index {} does not fit in a worksheet", col))
    })
}

/// Zero-based table row as a worksheet row index, below the header row
pub fn sheet_row(row: usize) -> Result<u32> {
    row.checked_add(1)
        .and_then(|r| u32::try_from(r).ok())
        .ok_or_else(|| {
            AdListError::invalid_input(format!("row index {} does not fit in a worksheet", row))
        })
}

/// Write one sheet per table: a header row, then the values in column order.
///
/// Without `sheet_names`, sheets are named `Sheet_1`, `Sheet_2`, ...
pub fn write_workbook(tables: &[DataFrame], path: &Path, sheet_names: Option<&[String]>) -> Result<()> {
    if let Some(names) = sheet_names.filter(|names| names.len() != tables.len()) {
        return Err(AdListError::invalid_input(format!(
            "{} sheet names given for {} tables",
            names.len(),
            tables.len()
        )));
    }

    let mut workbook = Workbook::new();
    for (index, df) in tables.iter().enumerate() {
        let hint = match sheet_names {
            Some(names) => names[index].clone(),
            None => format!("Sheet_{}", index + 1),
        };
        let title = sheet_title(&hint, df.height());

        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&title)?;

        for (col, name) in df.get_column_names().into_iter().enumerate() {
            let col = sheet_column(col)?;
            worksheet.write_string(0, col, name.as_str())?;
            for (row, value) in rendered_values(df, name.as_str())?.into_iter().enumerate() {
                if let Some(value) = value {
                    worksheet.write_string(sheet_row(row)?, col, value)?;
                }
            }
        }
        debug!("Sheet '{}' holds {} rows", title, df.height());
    }

    workbook
        .save(path)
        .map_err(|e| AdListError::write_failed(path, e))?;
    Ok(())
}
