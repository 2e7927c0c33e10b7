//! List assembly
//!
//! Top-level orchestration: read a raw export, run the pipeline for the
//! requested list, save the result and report. The `build_*` functions are
//! report-style entry points that never fail; they turn any error into a
//! status line. Everything below them propagates errors.

use crate::app::adapters::filesystem::{merge_csv_files, read_table, save_table_csv};
use crate::app::models::{ListKind, ListReport, MergeReport};
use crate::app::services::pipeline::{Pipeline, PipelineRunner, PipelineStats};
use crate::config::AdListConfig;
use crate::error::Result;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{error, info};

/// What to build and from which export
#[derive(Debug, Clone)]
pub struct AdListRequest {
    pub input: PathBuf,
    pub target_industries: Vec<String>,
    /// Output file stem, written as `<output_dir>/<list_name>.csv`
    pub list_name: String,
}

impl AdListRequest {
    pub fn new(
        input: impl Into<PathBuf>,
        target_industries: Vec<String>,
        list_name: impl Into<String>,
    ) -> Self {
        Self {
            input: input.into(),
            target_industries,
            list_name: list_name.into(),
        }
    }
}

/// Build one list and return its report together with per-stage statistics
pub fn run_list_with_stats(
    kind: ListKind,
    request: &AdListRequest,
    config: &AdListConfig,
) -> Result<(ListReport, PipelineStats)> {
    let started = Instant::now();

    let table = read_table(&request.input, &config.read)?;
    let input_rows = table.height();
    info!(
        "Building {} '{}' from {} ({} records)",
        kind,
        request.list_name,
        request.input.display(),
        input_rows
    );

    let pipeline = Pipeline::for_kind(kind, &request.target_industries, config)?;
    let output = PipelineRunner::new(config.show_progress).run(&pipeline, table)?;
    let output_path = save_table_csv(&output.table, &config.output_dir, &request.list_name)?;

    let report = ListReport {
        kind,
        input_rows,
        output_rows: output.table.height(),
        output_path,
        processing_time_ms: started.elapsed().as_millis(),
    };
    info!("{}", report.status_message());
    Ok((report, output.stats))
}

pub fn run_ad_list(request: &AdListRequest, config: &AdListConfig) -> Result<ListReport> {
    run_list_with_stats(ListKind::AdList, request, config).map(|(report, _)| report)
}

pub fn run_email_list(request: &AdListRequest, config: &AdListConfig) -> Result<ListReport> {
    run_list_with_stats(ListKind::EmailList, request, config).map(|(report, _)| report)
}

fn status_line(result: Result<ListReport>) -> String {
    match result {
        Ok(report) => report.status_message(),
        Err(e) => {
            error!("List build failed: {}", e);
            format!("An error occurred: {}", e)
        }
    }
}

/// Build the LiveRamp advertising list and describe the outcome
pub fn build_ad_list(request: &AdListRequest, config: &AdListConfig) -> String {
    status_line(run_ad_list(request, config))
}

/// Build the email list and describe the outcome
pub fn build_email_list(request: &AdListRequest, config: &AdListConfig) -> String {
    status_line(run_email_list(request, config))
}

/// Merge every list assembled into the configured output directory
pub fn merge_lists(config: &AdListConfig, output: &Path, key_columns: &[&str]) -> Result<MergeReport> {
    merge_csv_files(&config.output_dir, output, key_columns)
}
