//! Business email resolution
//!
//! Two production variants exist and both are kept:
//!
//! - validation-gated: a business email whose status mentions "valid" wins,
//!   otherwise a personal email is chosen, preferring the second listed
//!   candidate because the first is usually already in use elsewhere
//! - three-tier: business (status exactly "valid"), then the first personal
//!   candidate, then the first programmatic candidate

use crate::app::services::validators::keyword::{status_is_valid, status_mentions_valid};
use crate::constants::{EMAIL_LIST_SEPARATOR, columns, derived::VALID_BUSINESS_EMAIL};
use crate::error::Result;
use crate::table::{
    filter_rows, has_column, is_missing, present, require_columns, string_values,
    with_string_column,
};
use polars::prelude::DataFrame;
use tracing::debug;

fn candidates(value: &str) -> Vec<&str> {
    value.split(EMAIL_LIST_SEPARATOR).map(str::trim).collect()
}

/// Validation-gated pick for one record
pub fn gated_email<'a>(
    business: Option<&'a str>,
    personal: Option<&'a str>,
    status: Option<&str>,
) -> Option<&'a str> {
    if status_mentions_valid(status) {
        return present(business);
    }
    let personal = present(personal)?;
    let listed = candidates(personal);
    let chosen = if listed.len() > 1 { listed[1] } else { listed[0] };
    present(Some(chosen))
}

/// Three-tier pick for one record
pub fn three_tier_email<'a>(
    business: Option<&'a str>,
    personal: Option<&'a str>,
    programmatic: Option<&'a str>,
    status: Option<&str>,
) -> Option<&'a str> {
    if let Some(business) = present(business).filter(|_| status_is_valid(status)) {
        return Some(business);
    }
    if let Some(personal) = present(personal) {
        return present(candidates(personal).first().copied());
    }
    present(programmatic).and_then(|p| present(candidates(p).first().copied()))
}

/// Attach `Valid_Business_Email` using the validation-gated rule.
///
/// Records left without an email are dropped.
pub fn enrich_business_personal_email(df: &DataFrame) -> Result<DataFrame> {
    require_columns(
        df,
        &[
            columns::BUSINESS_EMAIL_VALIDATION_STATUS,
            columns::BUSINESS_EMAIL,
            columns::PERSONAL_EMAIL,
        ],
    )?;

    let status = string_values(df, columns::BUSINESS_EMAIL_VALIDATION_STATUS)?;
    let business = string_values(df, columns::BUSINESS_EMAIL)?;
    let personal = string_values(df, columns::PERSONAL_EMAIL)?;

    let emails: Vec<Option<String>> = (0..df.height())
        .map(|row| gated_email(business[row], personal[row], status[row]).map(str::to_string))
        .collect();
    let keep: Vec<bool> = emails.iter().map(Option::is_some).collect();

    let enriched = with_string_column(df.clone(), VALID_BUSINESS_EMAIL, emails)?;
    let result = filter_rows(&enriched, &keep)?;

    debug!(
        "Validation-gated email resolved {} of {} records",
        result.height(),
        df.height()
    );
    Ok(result)
}

/// Attach `Valid_Business_Email` using the three-tier rule.
///
/// Unresolved records keep a null value; [`drop_rows_with_hyphen`] removes them.
pub fn enrich_email_three_tier(df: &DataFrame) -> Result<DataFrame> {
    require_columns(
        df,
        &[
            columns::BUSINESS_EMAIL_VALIDATION_STATUS,
            columns::BUSINESS_EMAIL,
            columns::PERSONAL_EMAIL,
            columns::PROGRAMMATIC_BUSINESS_EMAILS,
        ],
    )?;

    let status = string_values(df, columns::BUSINESS_EMAIL_VALIDATION_STATUS)?;
    let business = string_values(df, columns::BUSINESS_EMAIL)?;
    let personal = string_values(df, columns::PERSONAL_EMAIL)?;
    let programmatic = string_values(df, columns::PROGRAMMATIC_BUSINESS_EMAILS)?;

    let emails: Vec<Option<String>> = (0..df.height())
        .map(|row| {
            three_tier_email(business[row], personal[row], programmatic[row], status[row])
                .map(str::to_string)
        })
        .collect();
    let resolved = emails.iter().filter(|e| e.is_some()).count();

    debug!(
        "Three-tier email resolved {} of {} records",
        resolved,
        df.height()
    );
    with_string_column(df.clone(), VALID_BUSINESS_EMAIL, emails)
}

/// Drop records where any named column is missing or `-`.
///
/// Columns the table does not have are skipped.
pub fn drop_rows_with_hyphen(df: &DataFrame, columns: &[&str]) -> Result<DataFrame> {
    let mut keep = vec![true; df.height()];

    for column in columns {
        if !has_column(df, column) {
            debug!("Skipping hyphen check on absent column {}", column);
            continue;
        }
        for (flag, value) in keep.iter_mut().zip(string_values(df, column)?) {
            if is_missing(value) {
                *flag = false;
            }
        }
    }

    filter_rows(df, &keep)
}
