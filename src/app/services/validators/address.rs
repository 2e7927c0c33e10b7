//! PO-box detection for candidate street addresses

use crate::config::AddressConfig;
use crate::constants::PO_BOX_PATTERN;
use crate::error::Result;
use crate::table::is_missing;
use regex::{Regex, RegexBuilder};

/// Recognizes non-physical mailing addresses.
///
/// The base pattern covers "PO Box", "P.O. Box", "P O Box" and friends in any
/// case. Extra variants are literal, case-sensitive substrings.
#[derive(Debug, Clone)]
pub struct PoBoxMatcher {
    base: Regex,
    variants: Option<Regex>,
}

impl PoBoxMatcher {
    pub fn new<I, S>(extra_variants: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let base = RegexBuilder::new(PO_BOX_PATTERN)
            .case_insensitive(true)
            .build()?;

        let escaped: Vec<String> = extra_variants
            .into_iter()
            .filter(|v| !v.as_ref().is_empty())
            .map(|v| regex::escape(v.as_ref()))
            .collect();
        let variants = if escaped.is_empty() {
            None
        } else {
            Some(Regex::new(&escaped.join("|"))?)
        };

        Ok(Self { base, variants })
    }

    pub fn standard() -> Result<Self> {
        Self::new(std::iter::empty::<&str>())
    }

    pub fn extended() -> Result<Self> {
        Self::from_config(&AddressConfig::extended())
    }

    pub fn from_config(config: &AddressConfig) -> Result<Self> {
        Self::new(&config.extra_po_box_variants)
    }

    pub fn is_po_box(&self, address: &str) -> bool {
        self.base.is_match(address) || self.variants.as_ref().is_some_and(|v| v.is_match(address))
    }
}

/// A candidate is usable when present, not the sentinel, and not a PO box
pub fn is_valid_address(value: Option<&str>, matcher: &PoBoxMatcher) -> bool {
    match value {
        Some(address) if !is_missing(value) => !matcher.is_po_box(address),
        _ => false,
    }
}
