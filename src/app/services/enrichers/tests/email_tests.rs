//! Tests for business email resolution

use super::*;
use crate::app::services::enrichers::email::{gated_email, three_tier_email};
use crate::app::services::enrichers::{
    drop_rows_with_hyphen, enrich_business_personal_email, enrich_email_three_tier,
};
use crate::table::string_values;

#[test]
fn test_gated_prefers_second_personal_candidate() {
    assert_eq!(
        gated_email(Some("b@x.com"), Some("p1@y.com,p2@y.com"), Some("unknown")),
        Some("p2@y.com")
    );
    assert_eq!(
        gated_email(Some("b@x.com"), Some("p1@y.com"), None),
        Some("p1@y.com")
    );
    assert_eq!(
        gated_email(Some("b@x.com"), Some("p1@y.com"), Some("Valid")),
        Some("b@x.com")
    );
    assert_eq!(gated_email(Some("b@x.com"), Some("-"), Some("catch-all")), None);
}

#[test]
fn test_gated_containment_accepts_invalid_status() {
    assert_eq!(
        gated_email(Some("b@x.com"), Some("p@y.com"), Some("Invalid")),
        Some("b@x.com")
    );
}

#[test]
fn test_three_tier_examples() {
    assert_eq!(
        three_tier_email(
            Some("john@x.com"),
            Some("-"),
            Some("a@y.com,b@y.com"),
            Some("Invalid")
        ),
        Some("a@y.com")
    );
    assert_eq!(
        three_tier_email(
            Some("-"),
            Some("p@z.com,q@z.com"),
            Some("a@y.com"),
            Some("Invalid")
        ),
        Some("p@z.com")
    );
    assert_eq!(
        three_tier_email(Some("john@x.com"), Some("p@z.com"), None, Some("VALID")),
        Some("john@x.com")
    );
    assert_eq!(
        three_tier_email(Some("-"), Some("-"), Some("-"), Some("Valid")),
        None
    );
}

#[test]
fn test_gated_enrichment_drops_unresolved() {
    let df = table(&[
        ("BUSINESS_EMAIL", &[Some("a@x.com"), Some("b@x.com"), Some("c@x.com")]),
        ("PERSONAL_EMAIL", &[None, Some("p@y.com,q@y.com"), Some("-")]),
        (
            "BUSINESS_EMAIL_VALIDATION_STATUS",
            &[Some("Valid (Esp)"), Some("unknown"), None],
        ),
    ]);

    let result = enrich_business_personal_email(&df).unwrap();

    assert_eq!(
        string_values(&result, "Valid_Business_Email").unwrap(),
        vec![Some("a@x.com"), Some("q@y.com")]
    );
}

#[test]
fn test_three_tier_then_hyphen_drop() {
    let df = table(&[
        ("BUSINESS_EMAIL", &[Some("a@x.com"), Some("-"), Some("-")]),
        ("PERSONAL_EMAIL", &[Some("p@y.com"), Some("-"), Some("r@y.com, s@y.com")]),
        ("PROGRAMMATIC_BUSINESS_EMAILS", &[None, Some("-"), None]),
        (
            "BUSINESS_EMAIL_VALIDATION_STATUS",
            &[Some("valid"), Some("Valid"), Some("Invalid")],
        ),
    ]);

    let enriched = enrich_email_three_tier(&df).unwrap();
    assert_eq!(enriched.height(), 3);

    let cleaned = drop_rows_with_hyphen(&enriched, &["Valid_Business_Email", "NOT_A_COLUMN"])
        .unwrap();
    assert_eq!(
        string_values(&cleaned, "Valid_Business_Email").unwrap(),
        vec![Some("a@x.com"), Some("r@y.com")]
    );
}

#[test]
fn test_three_tier_requires_programmatic_column() {
    let df = table(&[
        ("BUSINESS_EMAIL", &[Some("a@x.com")]),
        ("PERSONAL_EMAIL", &[None]),
        ("BUSINESS_EMAIL_VALIDATION_STATUS", &[Some("valid")]),
    ]);
    let err = enrich_email_three_tier(&df).unwrap_err();
    assert!(err.to_string().contains("PROGRAMMATIC_BUSINESS_EMAILS"));
}
