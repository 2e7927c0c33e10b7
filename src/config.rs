//! Configuration management.
//!
//! Provides the knobs every list build shares: how input is read, which
//! PO-box variants disqualify an address, how delimited columns expand, how
//! synthetic IDs are generated and where output lands.

use crate::constants::{DEFAULT_OUTPUT_DIR, DEFAULT_SIC_DELIMITER, EMAIL_LIST_SEPARATOR};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// How a raw CSV export is read into a record table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadOptions {
    /// Field delimiter byte
    pub delimiter: u8,

    /// First row holds column names
    pub has_header: bool,

    /// Replace the `-` sentinel with null at ingestion
    pub normalize_sentinel: bool,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            has_header: true,
            normalize_sentinel: true,
        }
    }
}

impl ReadOptions {
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn without_header(mut self) -> Self {
        self.has_header = false;
        self
    }

    /// Keep `-` values as raw strings
    pub fn keep_sentinels(mut self) -> Self {
        self.normalize_sentinel = false;
        self
    }
}

/// How the industry column is matched against the targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndustryMatch {
    /// Case-insensitive containment of any target keyword
    Keyword,
    /// Whole value equals one of the targets
    Exact,
}

/// Address validation settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddressConfig {
    /// Literal markers that disqualify an address, on top of the base PO-box pattern
    pub extra_po_box_variants: Vec<String>,
}

impl AddressConfig {
    /// Use the full production list of non-physical address markers
    pub fn extended() -> Self {
        Self {
            extra_po_box_variants: crate::constants::PO_BOX_VARIANTS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// Options for splitting a separator-joined column into numbered columns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpansionOptions {
    pub separator: String,

    /// Drop any expanded column that has a missing value in some row
    pub keep_non_missing_only: bool,

    /// Drop expanded columns identical to an earlier expanded column
    pub drop_duplicates: bool,
}

impl Default for ExpansionOptions {
    fn default() -> Self {
        Self {
            separator: EMAIL_LIST_SEPARATOR.to_string(),
            keep_non_missing_only: true,
            drop_duplicates: true,
        }
    }
}

impl ExpansionOptions {
    /// Plain split: every expanded column is kept
    pub fn plain(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
            keep_non_missing_only: false,
            drop_duplicates: false,
        }
    }
}

/// Synthetic identifier generation for formatted output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IdStrategy {
    /// Counter starting at `start`, in output row order
    Sequential { start: u64 },
    /// Reuse the ingestion `RECORD_ID`
    RecordId,
}

impl Default for IdStrategy {
    fn default() -> Self {
        IdStrategy::Sequential { start: 1 }
    }
}

/// Global configuration for list building
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdListConfig {
    pub read: ReadOptions,

    /// Delimiter between codes in the SIC column
    pub sic_delimiter: String,

    pub industry_match: IndustryMatch,

    pub address: AddressConfig,

    /// Expansion of the programmatic email column in the ad list
    pub expansion: ExpansionOptions,

    pub id_strategy: IdStrategy,

    /// Directory assembled lists are written into
    pub output_dir: PathBuf,

    /// Show a spinner per pipeline stage
    pub show_progress: bool,
}

impl Default for AdListConfig {
    fn default() -> Self {
        Self {
            read: ReadOptions::default(),
            sic_delimiter: DEFAULT_SIC_DELIMITER.to_string(),
            industry_match: IndustryMatch::Keyword,
            address: AddressConfig::default(),
            expansion: ExpansionOptions::default(),
            id_strategy: IdStrategy::default(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            show_progress: false,
        }
    }
}

impl AdListConfig {
    pub fn with_read_options(mut self, read: ReadOptions) -> Self {
        self.read = read;
        self
    }

    pub fn with_industry_match(mut self, industry_match: IndustryMatch) -> Self {
        self.industry_match = industry_match;
        self
    }

    pub fn with_address_config(mut self, address: AddressConfig) -> Self {
        self.address = address;
        self
    }

    pub fn with_expansion(mut self, expansion: ExpansionOptions) -> Self {
        self.expansion = expansion;
        self
    }

    pub fn with_id_strategy(mut self, id_strategy: IdStrategy) -> Self {
        self.id_strategy = id_strategy;
        self
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn with_progress(mut self) -> Self {
        self.show_progress = true;
        self
    }
}
