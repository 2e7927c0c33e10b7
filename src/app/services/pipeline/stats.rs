//! Per-stage row accounting

use serde::Serialize;

/// Rows entering and leaving one stage
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageReport {
    pub stage: String,
    pub rows_in: usize,
    pub rows_out: usize,
    pub elapsed_ms: u128,
}

impl StageReport {
    pub fn rows_dropped(&self) -> usize {
        self.rows_in.saturating_sub(self.rows_out)
    }
}

/// Statistics for one pipeline run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PipelineStats {
    pub pipeline: String,
    pub input_rows: usize,
    pub output_rows: usize,
    pub stages: Vec<StageReport>,
}

impl PipelineStats {
    pub fn new(pipeline: impl Into<String>, input_rows: usize) -> Self {
        Self {
            pipeline: pipeline.into(),
            input_rows,
            output_rows: input_rows,
            stages: Vec::new(),
        }
    }

    pub fn record(&mut self, report: StageReport) {
        self.output_rows = report.rows_out;
        self.stages.push(report);
    }

    /// Share of input rows that reached the output, as a percentage
    pub fn retention_rate(&self) -> f64 {
        if self.input_rows == 0 {
            0.0
        } else {
            (self.output_rows as f64 / self.input_rows as f64) * 100.0
        }
    }

    pub fn summary(&self) -> String {
        let steps: Vec<String> = self
            .stages
            .iter()
            .map(|s| format!("{} {}", s.stage, s.rows_out))
            .collect();
        format!(
            "{}: {} -> {} records ({:.1}% retained) | {}",
            self.pipeline,
            self.input_rows,
            self.output_rows,
            self.retention_rate(),
            steps.join(" -> ")
        )
    }
}
