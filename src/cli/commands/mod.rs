//! Command implementations for the list builder CLI
//!
//! Each command lives in its own module:
//! - `lists`: ad-list and email-list assembly
//! - `merge`: folder merge with deduplication
//! - `files`: folder listing and workbook output

pub mod files;
pub mod lists;
pub mod merge;
pub mod shared;

use crate::app::models::ListKind;
use crate::cli::args::{Args, Commands};
use anyhow::Result;

/// Dispatch to the handler for the parsed subcommand
pub fn run(args: Args) -> Result<()> {
    shared::setup_logging(&args)?;

    match args.command {
        Some(Commands::AdList(list_args)) => lists::run_list(ListKind::AdList, &list_args),
        Some(Commands::EmailList(list_args)) => lists::run_list(ListKind::EmailList, &list_args),
        Some(Commands::Merge(merge_args)) => merge::run_merge(&merge_args),
        Some(Commands::ListFiles(list_files_args)) => files::run_list_files(&list_files_args),
        Some(Commands::Workbook(workbook_args)) => files::run_workbook(&workbook_args),
        None => Ok(()),
    }
}
