//! Folder listing and workbook commands

use super::shared::{print_field, print_heading};
use crate::app::adapters::filesystem::{list_files_in_folder, read_csv_raw, write_workbook};
use crate::cli::args::{ListFilesArgs, WorkbookArgs};
use crate::config::ReadOptions;
use anyhow::{Context, Result};
use colored::*;

pub fn run_list_files(args: &ListFilesArgs) -> Result<()> {
    let files = list_files_in_folder(&args.folder);
    if files.is_empty() {
        println!("{}", "No files found.".yellow());
        return Ok(());
    }
    for file in files {
        println!("{}", file);
    }
    Ok(())
}

pub fn run_workbook(args: &WorkbookArgs) -> Result<()> {
    let options = ReadOptions::default().keep_sentinels();
    let mut tables = Vec::with_capacity(args.inputs.len());
    for input in &args.inputs {
        let table = read_csv_raw(input, &options)
            .with_context(|| format!("Failed to read {}", input.display()))?;
        tables.push(table);
    }

    let sheet_names = (!args.sheet_names.is_empty()).then_some(args.sheet_names.as_slice());
    write_workbook(&tables, &args.output, sheet_names)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    print_heading("Workbook written");
    print_field("Sheets", tables.len());
    print_field("Path", args.output.display());
    println!("{}", "Done.".bright_green());
    Ok(())
}
