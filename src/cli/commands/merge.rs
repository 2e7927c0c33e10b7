//! Merge command

use super::shared::{print_field, print_heading};
use crate::app::services::assembly::merge_lists;
use crate::cli::args::MergeArgs;
use anyhow::{Context, Result};
use colored::*;

pub fn run_merge(args: &MergeArgs) -> Result<()> {
    let keys: Vec<&str> = args.keys.iter().map(String::as_str).collect();
    let config = args.to_config();

    let report = merge_lists(&config, &args.output, &keys)
        .with_context(|| format!("Failed to merge {}", config.output_dir.display()))?;

    print_heading("Merge complete");
    print_field("Files merged", report.files_merged);
    print_field("Rows read", report.rows_before_dedup);
    print_field("Duplicates removed", report.duplicates_removed());
    print_field("Rows written", report.rows_written);
    println!("\n{}", report.summary().bright_green());
    Ok(())
}
