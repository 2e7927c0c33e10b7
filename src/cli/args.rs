//! Command-line argument definitions
//!
//! The CLI is built with the clap derive API. Every list option maps onto a
//! field of [`AdListConfig`]; anything not given on the command line keeps
//! its default.

use crate::app::services::assembly::AdListRequest;
use crate::config::{
    AdListConfig, AddressConfig, ExpansionOptions, IdStrategy, IndustryMatch, ReadOptions,
};
use crate::constants::DEFAULT_AD_INDUSTRIES;
use crate::error::{AdListError, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the list builder
#[derive(Debug, Clone, Parser)]
#[command(
    name = "adlist",
    version,
    about = "Build advertising and email contact lists from raw prospect CSV exports",
    long_about = "Filters a raw prospect export by industry and US region, resolves one \
                  phone, street address and business email per contact, and writes the \
                  result as a LiveRamp upload file or a plain email list. Also merges \
                  assembled lists and packs tables into a multi-sheet workbook."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable debug logging
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(short = 'q', long = "quiet", global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    pub fn get_log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "warn"
        } else {
            "info"
        }
    }
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Build a LiveRamp-formatted advertising list
    AdList(ListArgs),
    /// Build a first name / last name / email list
    EmailList(ListArgs),
    /// Merge every CSV file in a folder into one file
    Merge(MergeArgs),
    /// List the files in a folder
    ListFiles(ListFilesArgs),
    /// Write CSV files as sheets of one workbook
    Workbook(WorkbookArgs),
}

/// Arguments shared by the two list builders
#[derive(Debug, Clone, Parser)]
pub struct ListArgs {
    /// Raw prospect export (CSV)
    #[arg(short = 'i', long = "input", value_name = "FILE")]
    pub input: PathBuf,

    /// Output list name, written as <output-dir>/<name>.csv
    #[arg(short = 'n', long = "name", value_name = "NAME")]
    pub name: String,

    /// Target industries (comma-separated); defaults to the advertising set
    #[arg(long = "industries", value_name = "LIST", value_delimiter = ',')]
    pub industries: Vec<String>,

    /// Require an exact industry match instead of keyword containment
    #[arg(long = "exact-industry")]
    pub exact_industry: bool,

    /// Directory lists are written to
    #[arg(short = 'o', long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Input field delimiter
    #[arg(long = "delimiter", default_value_t = ',')]
    pub delimiter: char,

    /// Keep `-` values as text instead of treating them as empty
    #[arg(long = "keep-sentinels")]
    pub keep_sentinels: bool,

    /// Also reject Attn, C/O, PMB, Drawer and similar non-street addresses
    #[arg(long = "extended-po-box")]
    pub extended_po_box: bool,

    /// Keep every expanded programmatic email column, even with gaps
    #[arg(long = "keep-all-expanded")]
    pub keep_all_expanded: bool,

    /// First synthetic customer ID
    #[arg(long = "id-start", value_name = "N", default_value_t = 1)]
    pub id_start: u64,

    /// Use the input row number as customer ID
    #[arg(long = "record-ids", conflicts_with = "id_start")]
    pub record_ids: bool,

    /// Hide per-stage spinners
    #[arg(long = "no-progress")]
    pub no_progress: bool,
}

impl ListArgs {
    pub fn target_industries(&self) -> Vec<String> {
        if self.industries.is_empty() {
            DEFAULT_AD_INDUSTRIES.iter().map(|s| s.to_string()).collect()
        } else {
            self.industries.clone()
        }
    }

    pub fn to_request(&self) -> AdListRequest {
        AdListRequest::new(&self.input, self.target_industries(), &self.name)
    }

    /// Build the run configuration from defaults and flags
    pub fn to_config(&self) -> Result<AdListConfig> {
        if !self.delimiter.is_ascii() {
            return Err(AdListError::invalid_input(format!(
                "delimiter '{}' must be a single ASCII character",
                self.delimiter
            )));
        }

        let mut read = ReadOptions::default().with_delimiter(self.delimiter as u8);
        if self.keep_sentinels {
            read = read.keep_sentinels();
        }

        let mut config = AdListConfig::default().with_read_options(read);
        if self.exact_industry {
            config = config.with_industry_match(IndustryMatch::Exact);
        }
        if self.extended_po_box {
            config = config.with_address_config(AddressConfig::extended());
        }
        if self.keep_all_expanded {
            config = config.with_expansion(ExpansionOptions {
                keep_non_missing_only: false,
                ..ExpansionOptions::default()
            });
        }
        config = config.with_id_strategy(if self.record_ids {
            IdStrategy::RecordId
        } else {
            IdStrategy::Sequential {
                start: self.id_start,
            }
        });
        if let Some(dir) = &self.output_dir {
            config = config.with_output_dir(dir);
        }
        if !self.no_progress {
            config = config.with_progress();
        }
        Ok(config)
    }
}

/// Arguments for merging a folder of CSV files
#[derive(Debug, Clone, Parser)]
pub struct MergeArgs {
    /// Folder holding the CSV files; defaults to the list output directory
    #[arg(value_name = "FOLDER")]
    pub folder: Option<PathBuf>,

    /// Merged output file
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: PathBuf,

    /// Columns that identify a duplicate (comma-separated)
    #[arg(short = 'k', long = "key", value_name = "COLUMNS", value_delimiter = ',')]
    pub keys: Vec<String>,
}

impl MergeArgs {
    /// Configuration whose output directory is the folder to merge
    pub fn to_config(&self) -> AdListConfig {
        match &self.folder {
            Some(folder) => AdListConfig::default().with_output_dir(folder),
            None => AdListConfig::default(),
        }
    }
}

/// Arguments for listing a folder
#[derive(Debug, Clone, Parser)]
pub struct ListFilesArgs {
    #[arg(value_name = "FOLDER")]
    pub folder: PathBuf,
}

/// Arguments for building a workbook
#[derive(Debug, Clone, Parser)]
pub struct WorkbookArgs {
    /// CSV files, one sheet each
    #[arg(value_name = "CSV", required = true)]
    pub inputs: Vec<PathBuf>,

    /// Workbook to write
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: PathBuf,

    /// Sheet names in input order (comma-separated)
    #[arg(long = "sheets", value_name = "NAMES", value_delimiter = ',')]
    pub sheet_names: Vec<String>,
}
