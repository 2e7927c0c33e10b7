//! File-system adapter
//!
//! Everything that touches disk lives here: reading raw exports into a record
//! table, writing assembled lists, building multi-sheet workbooks, merging a
//! folder of CSV files and listing a folder.

pub mod listing;
pub mod merge;
pub mod reader;
pub mod workbook;
pub mod writer;

#[cfg(test)]
pub mod tests;

pub use listing::list_files_in_folder;
pub use merge::merge_csv_files;
pub use reader::{read_csv_raw, read_table};
pub use workbook::{sheet_column, sheet_row, sheet_title, write_workbook};
pub use writer::{save_table_csv, write_csv};
