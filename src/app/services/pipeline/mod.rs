//! Filter pipelines
//!
//! A pipeline is a fixed, ordered list of stages for one use case. Each stage
//! consumes the table produced by the previous one and returns a new table.
//! A stage that fails aborts the whole run; no partial output is produced.
//!
//! # Architecture
//!
//! - [`Stage`] - one validator, enricher or formatter step
//! - [`Pipeline`] - the two production pipelines and custom compositions
//! - [`runner`] - executes a pipeline with per-stage logging and progress
//! - [`stats`] - rows in/out for every stage of a run

pub mod runner;
pub mod stats;

#[cfg(test)]
pub mod tests;

pub use runner::{PipelineOutput, PipelineRunner};
pub use stats::{PipelineStats, StageReport};

use crate::app::models::ListKind;
use crate::app::services::enrichers::{
    PrimarySourceDecision, drop_rows_with_hyphen, enrich_business_personal_email,
    enrich_email_three_tier, enrich_phone_numbers, filter_and_label_valid_addresses,
    split_columns_by_separator,
};
use crate::app::services::formatter::{OutputLayout, format_table};
use crate::app::services::validators::{
    EmailStatusFilter, IndustryFilter, JobTitleExclusionFilter, PersonalEmailFilter, PoBoxMatcher,
    RecordFilter, RegionFilter, SeniorityFilter, SicCodeFilter,
};
use crate::config::{AdListConfig, ExpansionOptions, IdStrategy};
use crate::constants::{columns, derived};
use crate::error::Result;
use polars::prelude::DataFrame;

/// One step of a pipeline
#[derive(Debug, Clone)]
pub enum Stage {
    Industry(IndustryFilter),
    Region,
    Sic(SicCodeFilter),
    Seniority(SeniorityFilter),
    JobTitleExclusion(JobTitleExclusionFilter),
    EmailStatus(EmailStatusFilter),
    PersonalEmail,
    /// Address selection; records without a usable address are dropped
    Address(PoBoxMatcher),
    /// Phone consolidation, analyzed over the table this stage receives
    Phone { first: String, second: String },
    BusinessPersonalEmail,
    ThreeTierEmail,
    DropMissing(Vec<String>),
    Expand {
        columns: Vec<String>,
        options: ExpansionOptions,
    },
    Format {
        layout: OutputLayout,
        ids: IdStrategy,
    },
}

impl Stage {
    /// SIC stage using the configured code delimiter
    pub fn sic_codes<I, S>(targets: I, config: &AdListConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Stage::Sic(SicCodeFilter::from_config(targets, config))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Stage::Industry(filter) => filter.name(),
            Stage::Region => RegionFilter.name(),
            Stage::Sic(filter) => filter.name(),
            Stage::Seniority(filter) => filter.name(),
            Stage::JobTitleExclusion(filter) => filter.name(),
            Stage::EmailStatus(filter) => filter.name(),
            Stage::PersonalEmail => PersonalEmailFilter.name(),
            Stage::Address(_) => "address_enrichment",
            Stage::Phone { .. } => "phone_enrichment",
            Stage::BusinessPersonalEmail => "business_personal_email",
            Stage::ThreeTierEmail => "three_tier_email",
            Stage::DropMissing(_) => "drop_missing",
            Stage::Expand { .. } => "column_expansion",
            Stage::Format { .. } => "format",
        }
    }

    /// Run this stage over `df`
    pub fn apply(&self, df: &DataFrame) -> Result<DataFrame> {
        match self {
            Stage::Industry(filter) => filter.apply(df),
            Stage::Region => RegionFilter.apply(df),
            Stage::Sic(filter) => filter.apply(df),
            Stage::Seniority(filter) => filter.apply(df),
            Stage::JobTitleExclusion(filter) => filter.apply(df),
            Stage::EmailStatus(filter) => filter.apply(df),
            Stage::PersonalEmail => PersonalEmailFilter.apply(df),
            Stage::Address(matcher) => {
                let (labeled, _) = filter_and_label_valid_addresses(df, matcher)?;
                Ok(labeled)
            }
            Stage::Phone { first, second } => {
                let decision = PrimarySourceDecision::analyze(df, first, second)?;
                enrich_phone_numbers(df, &decision)
            }
            Stage::BusinessPersonalEmail => enrich_business_personal_email(df),
            Stage::ThreeTierEmail => enrich_email_three_tier(df),
            Stage::DropMissing(names) => {
                let names: Vec<&str> = names.iter().map(String::as_str).collect();
                drop_rows_with_hyphen(df, &names)
            }
            Stage::Expand { columns, options } => {
                let names: Vec<&str> = columns.iter().map(String::as_str).collect();
                split_columns_by_separator(df, &names, options)
            }
            Stage::Format { layout, ids } => format_table(df, layout, *ids),
        }
    }
}

/// A named, ordered list of stages
#[derive(Debug, Clone)]
pub struct Pipeline {
    name: String,
    stages: Vec<Stage>,
}

impl Pipeline {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stages: Vec::new(),
        }
    }

    pub fn with_stage(mut self, stage: Stage) -> Self {
        self.stages.push(stage);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(Stage::name).collect()
    }

    /// Industry, region, address, phone, email, programmatic email expansion,
    /// LiveRamp formatting
    pub fn ad_list(target_industries: &[String], config: &AdListConfig) -> Result<Self> {
        Ok(Self::new("ad_list")
            .with_stage(Stage::Industry(IndustryFilter::new(
                target_industries,
                config.industry_match,
            )?))
            .with_stage(Stage::Region)
            .with_stage(Stage::Address(PoBoxMatcher::from_config(&config.address)?))
            .with_stage(Stage::Phone {
                first: columns::MOBILE_PHONE.to_string(),
                second: columns::DIRECT_NUMBER.to_string(),
            })
            .with_stage(Stage::BusinessPersonalEmail)
            .with_stage(Stage::Expand {
                columns: vec![columns::PROGRAMMATIC_BUSINESS_EMAILS.to_string()],
                options: config.expansion.clone(),
            })
            .with_stage(Stage::Format {
                layout: OutputLayout::liveramp(),
                ids: config.id_strategy,
            }))
    }

    /// Industry, region, three-tier email, drop unresolved, projection
    pub fn email_list(target_industries: &[String], config: &AdListConfig) -> Result<Self> {
        Ok(Self::new("email_list")
            .with_stage(Stage::Industry(IndustryFilter::new(
                target_industries,
                config.industry_match,
            )?))
            .with_stage(Stage::Region)
            .with_stage(Stage::ThreeTierEmail)
            .with_stage(Stage::DropMissing(vec![
                derived::VALID_BUSINESS_EMAIL.to_string(),
            ]))
            .with_stage(Stage::Format {
                layout: OutputLayout::email_list(),
                ids: config.id_strategy,
            }))
    }

    pub fn for_kind(kind: ListKind, target_industries: &[String], config: &AdListConfig) -> Result<Self> {
        match kind {
            ListKind::AdList => Self::ad_list(target_industries, config),
            ListKind::EmailList => Self::email_list(target_industries, config),
        }
    }
}
