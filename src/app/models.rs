//! Core data structures shared across the pipeline.
//!
//! Defines the address provenance tags, list kinds and the reports returned
//! by list assembly and file merging.

use crate::constants::columns;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// The six address source columns, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AddressSource {
    PersonalLine1,
    PersonalLine2,
    ProfessionalLine1,
    ProfessionalLine2,
    CompanyLine1,
    CompanyLine2,
}

impl AddressSource {
    /// Candidates in the order they are tried
    pub const PRIORITY: [AddressSource; 6] = [
        AddressSource::PersonalLine1,
        AddressSource::PersonalLine2,
        AddressSource::ProfessionalLine1,
        AddressSource::ProfessionalLine2,
        AddressSource::CompanyLine1,
        AddressSource::CompanyLine2,
    ];

    /// Raw column this source reads
    pub fn column(&self) -> &'static str {
        match self {
            AddressSource::PersonalLine1 => columns::PERSONAL_ADDRESS,
            AddressSource::PersonalLine2 => columns::PERSONAL_ADDRESS_2,
            AddressSource::ProfessionalLine1 => columns::PROFESSIONAL_ADDRESS,
            AddressSource::ProfessionalLine2 => columns::PROFESSIONAL_ADDRESS_2,
            AddressSource::CompanyLine1 => columns::COMPANY_ADDRESS,
            AddressSource::CompanyLine2 => columns::COMPANY_ADDRESS_2,
        }
    }

    /// Parse a provenance tag back into its source
    pub fn from_column(column: &str) -> Option<Self> {
        Self::PRIORITY.into_iter().find(|s| s.column() == column)
    }

    pub fn all_columns() -> Vec<&'static str> {
        Self::PRIORITY.iter().map(|s| s.column()).collect()
    }
}

impl fmt::Display for AddressSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

/// Named list use cases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListKind {
    /// LiveRamp-formatted advertising audience
    AdList,
    /// First name, last name, email
    EmailList,
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListKind::AdList => f.write_str("ad list"),
            ListKind::EmailList => f.write_str("email list"),
        }
    }
}

/// Outcome of one assembled list
#[derive(Debug, Clone)]
pub struct ListReport {
    pub kind: ListKind,
    pub input_rows: usize,
    pub output_rows: usize,
    pub output_path: PathBuf,
    pub processing_time_ms: u128,
}

impl ListReport {
    /// Status line returned by the string-reporting builders
    pub fn status_message(&self) -> String {
        format!(
            "DataFrame successfully saved to {}",
            self.output_path.display()
        )
    }
}

/// Outcome of merging a folder of CSV files
#[derive(Debug, Clone, PartialEq)]
pub struct MergeReport {
    pub files_merged: usize,
    pub rows_before_dedup: usize,
    pub rows_written: usize,
    pub output_path: PathBuf,
}

impl MergeReport {
    pub fn duplicates_removed(&self) -> usize {
        self.rows_before_dedup - self.rows_written
    }

    pub fn summary(&self) -> String {
        let duplicates_msg = if self.duplicates_removed() > 0 {
            " and duplicates removed"
        } else {
            " with no duplicates"
        };
        format!(
            "Merged data saved to '{}'{}.",
            self.output_path.display(),
            duplicates_msg
        )
    }
}
