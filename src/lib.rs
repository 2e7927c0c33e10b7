//! Ad List Builder Library
//!
//! Builds filtered, enriched contact lists from raw prospect CSV exports.
//!
//! This library provides tools for:
//! - Validating records by industry, SIC code, seniority, region and email status
//! - Enriching records with a canonical phone, street address and business email
//! - Running the fixed advertising-list and email-list pipelines
//! - Formatting output for LiveRamp upload or a plain email list
//! - Merging assembled lists and writing multi-sheet workbooks

pub mod config;
pub mod constants;
pub mod error;
pub mod table;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod assembly;
        pub mod enrichers;
        pub mod formatter;
        pub mod pipeline;
        pub mod validators;
    }
    pub mod adapters {
        pub mod filesystem;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{AddressSource, ListKind, ListReport, MergeReport};
pub use app::services::assembly::{
    AdListRequest, build_ad_list, build_email_list, run_ad_list, run_email_list,
};
pub use config::AdListConfig;
pub use error::{AdListError, Result};
