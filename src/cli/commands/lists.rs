//! Ad-list and email-list commands

use super::shared::{format_duration_ms, print_field, print_heading};
use crate::app::models::ListKind;
use crate::app::services::assembly::run_list_with_stats;
use crate::cli::args::ListArgs;
use anyhow::{Context, Result};
use colored::*;

pub fn run_list(kind: ListKind, args: &ListArgs) -> Result<()> {
    let config = args.to_config()?;
    let request = args.to_request();

    let (report, stats) = run_list_with_stats(kind, &request, &config)
        .with_context(|| format!("Failed to build {} from {}", kind, args.input.display()))?;

    print_heading(&format!("{} complete", capitalize(&kind.to_string())));
    print_field("Input records", report.input_rows);
    print_field("Output records", report.output_rows);
    print_field("Retained", format!("{:.1}%", stats.retention_rate()));
    print_field("Processing time", format_duration_ms(report.processing_time_ms));

    println!("\n{}", "Stages:".bright_cyan());
    for stage in &stats.stages {
        println!(
            "   • {:<24} {:>8} -> {:<8} ({} dropped)",
            stage.stage,
            stage.rows_in,
            stage.rows_out,
            stage.rows_dropped()
        );
    }

    println!("\n{}", report.status_message().bright_green());
    Ok(())
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
