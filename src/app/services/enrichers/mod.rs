//! Record enrichers
//!
//! Each enricher reads several candidate columns for one semantic attribute
//! and attaches a single canonical column. Source columns are never modified.
//! Enrichers that cannot resolve a value for a record drop that record.
//!
//! # Architecture
//!
//! - [`phone`] - Two-phase primary/secondary phone selection
//! - [`address`] - First usable street address in priority order, with provenance
//! - [`email`] - Business email resolution (validation-gated and three-tier)
//! - [`expansion`] - Separator-joined column expansion into numbered columns

pub mod address;
pub mod email;
pub mod expansion;
pub mod phone;

#[cfg(test)]
pub mod tests;

pub use address::filter_and_label_valid_addresses;
pub use email::{drop_rows_with_hyphen, enrich_business_personal_email, enrich_email_three_tier};
pub use expansion::split_columns_by_separator;
pub use phone::{PrimarySourceDecision, enrich_phone_numbers};
