//! Keyword containment filters
//!
//! Industry targeting, job-title exclusion and email validation status all
//! reduce to "does this field contain any of these words". Keywords are
//! regex-escaped and joined into one case-insensitive alternation so that
//! punctuation in a keyword is matched literally.

use super::RecordFilter;
use crate::config::IndustryMatch;
use crate::constants::columns;
use crate::error::Result;
use crate::table::{filter_rows, require_columns, string_column, take_rows};
use polars::prelude::DataFrame;
use regex::{Regex, RegexBuilder};
use std::collections::HashSet;
use tracing::debug;

/// Case-insensitive "contains any keyword" matcher
#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    pattern: Option<Regex>,
}

impl KeywordMatcher {
    /// Blank keywords are ignored; an empty list matches nothing
    pub fn new<I, S>(keywords: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let escaped: Vec<String> = keywords
            .into_iter()
            .map(|k| k.as_ref().trim().to_string())
            .filter(|k| !k.is_empty())
            .map(|k| regex::escape(&k))
            .collect();

        if escaped.is_empty() {
            return Ok(Self { pattern: None });
        }

        let pattern = RegexBuilder::new(&escaped.join("|"))
            .case_insensitive(true)
            .build()?;
        Ok(Self {
            pattern: Some(pattern),
        })
    }

    pub fn is_match(&self, value: &str) -> bool {
        self.pattern.as_ref().is_some_and(|p| p.is_match(value))
    }

    /// Missing values never match
    pub fn matches(&self, value: Option<&str>) -> bool {
        value.is_some_and(|v| self.is_match(v))
    }
}

/// Keep records in the target industries
#[derive(Debug, Clone)]
pub struct IndustryFilter {
    mode: IndustryMatch,
    matcher: KeywordMatcher,
    exact: HashSet<String>,
}

impl IndustryFilter {
    pub fn new<I, S>(targets: I, mode: IndustryMatch) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let targets: Vec<String> = targets
            .into_iter()
            .map(|s| s.as_ref().to_string())
            .collect();
        Ok(Self {
            mode,
            matcher: KeywordMatcher::new(&targets)?,
            exact: targets.into_iter().collect(),
        })
    }

    pub fn keyword(targets: &[String]) -> Result<Self> {
        Self::new(targets, IndustryMatch::Keyword)
    }

    pub fn matches(&self, value: Option<&str>) -> bool {
        match self.mode {
            IndustryMatch::Keyword => self.matcher.matches(value),
            IndustryMatch::Exact => value.is_some_and(|v| self.exact.contains(v)),
        }
    }
}

impl RecordFilter for IndustryFilter {
    fn name(&self) -> &'static str {
        "industry_filter"
    }

    fn required_columns(&self) -> Vec<&str> {
        vec![columns::PRIMARY_INDUSTRY]
    }

    fn keep_mask(&self, df: &DataFrame) -> Result<Vec<bool>> {
        Ok(string_column(df, columns::PRIMARY_INDUSTRY)?
            .into_iter()
            .map(|value| self.matches(value))
            .collect())
    }
}

/// Sort by job title and drop titles containing an excluded keyword
#[derive(Debug, Clone)]
pub struct JobTitleExclusionFilter {
    matcher: KeywordMatcher,
}

impl JobTitleExclusionFilter {
    pub fn new<I, S>(keywords: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self {
            matcher: KeywordMatcher::new(keywords)?,
        })
    }

    /// Stable ascending order with missing titles last
    fn sort_by_title(df: &DataFrame) -> Result<DataFrame> {
        let titles: Vec<Option<&str>> = string_column(df, columns::JOB_TITLE)?
            .into_iter()
            .collect();
        let mut order: Vec<usize> = (0..titles.len()).collect();
        order.sort_by(|&a, &b| match (titles[a], titles[b]) {
            (Some(x), Some(y)) => x.cmp(y),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        });
        take_rows(df, &order)
    }
}

impl RecordFilter for JobTitleExclusionFilter {
    fn name(&self) -> &'static str {
        "job_title_exclusion"
    }

    fn required_columns(&self) -> Vec<&str> {
        vec![columns::JOB_TITLE]
    }

    fn keep_mask(&self, df: &DataFrame) -> Result<Vec<bool>> {
        Ok(string_column(df, columns::JOB_TITLE)?
            .into_iter()
            .map(|value| !self.matcher.matches(value))
            .collect())
    }

    fn apply(&self, df: &DataFrame) -> Result<DataFrame> {
        require_columns(df, &self.required_columns())?;
        let sorted = Self::sort_by_title(df)?;
        let mask = self.keep_mask(&sorted)?;
        let filtered = filter_rows(&sorted, &mask)?;
        debug!(
            "{}: {} -> {} records",
            self.name(),
            df.height(),
            filtered.height()
        );
        Ok(filtered)
    }
}

/// Keep records whose business email validation status mentions "valid"
#[derive(Debug, Clone)]
pub struct EmailStatusFilter {
    column: String,
}

impl Default for EmailStatusFilter {
    fn default() -> Self {
        Self {
            column: columns::BUSINESS_EMAIL_VALIDATION_STATUS.to_string(),
        }
    }
}

impl EmailStatusFilter {
    pub fn with_column(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
        }
    }
}

/// Case-insensitive containment of "valid"; note "Invalid" also contains it
pub fn status_mentions_valid(value: Option<&str>) -> bool {
    value.is_some_and(|v| v.to_lowercase().contains("valid"))
}

/// Case-insensitive equality with "valid"
pub fn status_is_valid(value: Option<&str>) -> bool {
    value.is_some_and(|v| v.trim().eq_ignore_ascii_case("valid"))
}

impl RecordFilter for EmailStatusFilter {
    fn name(&self) -> &'static str {
        "email_status_filter"
    }

    fn required_columns(&self) -> Vec<&str> {
        vec![self.column.as_str()]
    }

    fn keep_mask(&self, df: &DataFrame) -> Result<Vec<bool>> {
        Ok(string_column(df, &self.column)?
            .into_iter()
            .map(status_mentions_valid)
            .collect())
    }
}
