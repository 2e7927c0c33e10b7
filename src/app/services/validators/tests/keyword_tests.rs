//! Tests for keyword containment filters

use super::*;
use crate::app::services::validators::keyword::{status_is_valid, status_mentions_valid};
use crate::app::services::validators::{
    EmailStatusFilter, IndustryFilter, JobTitleExclusionFilter, KeywordMatcher, RecordFilter,
};
use crate::config::IndustryMatch;
use crate::table::string_values;

#[test]
fn test_keyword_matcher_escapes_punctuation() {
    let matcher = KeywordMatcher::new(["C++", "a.b"]).unwrap();

    assert!(matcher.is_match("senior c++ developer"));
    assert!(matcher.is_match("A.B testing"));
    assert!(!matcher.is_match("axb"));
}

#[test]
fn test_empty_keyword_list_matches_nothing() {
    let matcher = KeywordMatcher::new(Vec::<String>::new()).unwrap();
    assert!(!matcher.is_match("anything"));

    let blank = KeywordMatcher::new(["", "  "]).unwrap();
    assert!(!blank.is_match("anything"));
}

#[test]
fn test_industry_keyword_mode() {
    let df = single_column(
        "PRIMARY_INDUSTRY",
        &[
            Some("Advertising Services"),
            Some("online MEDIA"),
            Some("Farming"),
            None,
        ],
    );
    let filter = IndustryFilter::new(["advertising", "Media"], IndustryMatch::Keyword).unwrap();

    let result = filter.apply(&df).unwrap();

    assert_eq!(
        string_values(&result, "PRIMARY_INDUSTRY").unwrap(),
        vec![Some("Advertising Services"), Some("online MEDIA")]
    );
}

#[test]
fn test_industry_exact_mode() {
    let df = single_column(
        "PRIMARY_INDUSTRY",
        &[Some("Marketing"), Some("Marketing Services"), Some("marketing")],
    );
    let filter = IndustryFilter::new(["Marketing"], IndustryMatch::Exact).unwrap();

    let result = filter.apply(&df).unwrap();

    assert_eq!(
        string_values(&result, "PRIMARY_INDUSTRY").unwrap(),
        vec![Some("Marketing")]
    );
}

#[test]
fn test_job_title_exclusion_sorts_then_drops() {
    let df = single_column(
        "JOB_TITLE",
        &[
            Some("Software Engineer"),
            None,
            Some("Marketing Director"),
            Some("INTERN"),
            Some("Brand Manager"),
        ],
    );
    let filter = JobTitleExclusionFilter::new(["intern", "engineer"]).unwrap();

    let result = filter.apply(&df).unwrap();

    assert_eq!(
        string_values(&result, "JOB_TITLE").unwrap(),
        vec![Some("Brand Manager"), Some("Marketing Director"), None]
    );
}

#[test]
fn test_email_status_filter() {
    let df = single_column(
        "BUSINESS_EMAIL_VALIDATION_STATUS",
        &[Some("Valid (Digital)"), Some("unknown"), None, Some("VALID")],
    );

    let result = EmailStatusFilter::default().apply(&df).unwrap();

    assert_eq!(result.height(), 2);
}

#[test]
fn test_status_helpers() {
    assert!(status_mentions_valid(Some("Valid (Esp)")));
    assert!(status_mentions_valid(Some("Invalid")));
    assert!(!status_mentions_valid(None));

    assert!(status_is_valid(Some("valid")));
    assert!(status_is_valid(Some(" Valid ")));
    assert!(!status_is_valid(Some("Invalid")));
    assert!(!status_is_valid(Some("Valid (Digital)")));
}

#[test]
fn test_personal_email_filter() {
    use crate::app::services::validators::PersonalEmailFilter;

    let df = single_column(
        "PERSONAL_EMAIL",
        &[Some("a@b.com"), Some("nobody"), None, Some("-")],
    );

    let result = PersonalEmailFilter.apply(&df).unwrap();

    assert_eq!(
        string_values(&result, "PERSONAL_EMAIL").unwrap(),
        vec![Some("a@b.com")]
    );
}
