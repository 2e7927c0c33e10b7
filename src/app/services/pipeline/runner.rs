//! Pipeline execution

use super::{Pipeline, PipelineStats, StageReport};
use crate::error::Result;
use indicatif::{ProgressBar, ProgressStyle};
use polars::prelude::DataFrame;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Final table and accounting of one run
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub table: DataFrame,
    pub stats: PipelineStats,
}

/// Runs a pipeline stage by stage
#[derive(Debug, Clone, Copy, Default)]
pub struct PipelineRunner {
    show_progress: bool,
}

impl PipelineRunner {
    pub fn new(show_progress: bool) -> Self {
        Self { show_progress }
    }

    fn create_stage_spinner(stage: &str) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{elapsed_precise}] {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(stage.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }

    /// Execute every stage in order; the first error aborts the run
    pub fn run(&self, pipeline: &Pipeline, input: DataFrame) -> Result<PipelineOutput> {
        let mut stats = PipelineStats::new(pipeline.name(), input.height());
        info!(
            "Starting {} pipeline for {} records ({} stages)",
            pipeline.name(),
            input.height(),
            pipeline.stages().len()
        );

        let mut table = input;
        for stage in pipeline.stages() {
            let pb = self
                .show_progress
                .then(|| Self::create_stage_spinner(stage.name()));

            let started = Instant::now();
            let rows_in = table.height();
            let result = stage.apply(&table);

            if let Some(pb) = &pb {
                pb.finish_and_clear();
            }
            table = result?;

            let report = StageReport {
                stage: stage.name().to_string(),
                rows_in,
                rows_out: table.height(),
                elapsed_ms: started.elapsed().as_millis(),
            };
            debug!(
                "Stage {}: {} -> {} records in {}ms",
                report.stage, report.rows_in, report.rows_out, report.elapsed_ms
            );
            stats.record(report);
        }

        info!("{}", stats.summary());
        Ok(PipelineOutput { table, stats })
    }
}
