//! Synthetic prospect exports for integration tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

pub const HEADER: &[&str] = &[
    "FIRST_NAME",
    "LAST_NAME",
    "BUSINESS_EMAIL",
    "BUSINESS_EMAIL_VALIDATION_STATUS",
    "PERSONAL_EMAIL",
    "PROGRAMMATIC_BUSINESS_EMAILS",
    "MOBILE_PHONE",
    "DIRECT_NUMBER",
    "PERSONAL_ADDRESS",
    "PERSONAL_ADDRESS_2",
    "PROFESSIONAL_ADDRESS",
    "PROFESSIONAL_ADDRESS_2",
    "COMPANY_ADDRESS",
    "COMPANY_ADDRESS_2",
    "PERSONAL_CITY",
    "PERSONAL_STATE",
    "PERSONAL_ZIP",
    "PERSONAL_ZIP4",
    "PRIMARY_INDUSTRY",
    "COMPANY_SIC",
    "SENIORITY_LEVEL",
    "JOB_TITLE",
];

/// One raw export row for record `i` of the 100-record scenario.
///
/// - 0..60: outside the target industries
/// - 60..70: target industry, Canadian province
/// - 70..80: US, but every address is a PO box or empty
/// - 80..85: usable address, no phone at all
/// - 85..100: survive the whole ad-list pipeline
pub fn scenario_row(i: usize) -> Vec<String> {
    let industry = if i < 60 { "Farming" } else { "Advertising Services" };

    let (state, zip) = match i {
        60..70 => ("ON", "M5V 2T6"),
        _ if i % 3 == 0 => ("-", "10001"),
        _ => ("NY", "10002-1234"),
    };

    let (personal, professional, company) = if (70..80).contains(&i) {
        (
            format!("PO Box {}", i),
            "-".to_string(),
            format!("P.O. Box {}", i + 1000),
        )
    } else {
        let street = format!("{} Main St", i);
        let professional = if i % 2 == 0 {
            street.clone()
        } else {
            format!("{} Office Park", i)
        };
        (street, professional, format!("{} Corporate Plz", i))
    };

    let (mobile, direct) = if (80..85).contains(&i) {
        ("-".to_string(), "-".to_string())
    } else if i % 4 == 0 {
        ("-".to_string(), format!("212-555-{:04}", i))
    } else {
        (format!("917-555-{:04}", i), format!("212-555-{:04}", i))
    };

    vec![
        format!("First{}", i),
        format!("Last{}", i),
        format!("user{}@company.com", i),
        "Valid".to_string(),
        format!("user{}@home.com,alt{}@home.com", i, i),
        format!("p{}a@company.com,p{}b@company.com", i, i),
        mobile,
        direct,
        personal,
        "-".to_string(),
        professional,
        "-".to_string(),
        company,
        "-".to_string(),
        "New York".to_string(),
        state.to_string(),
        zip.to_string(),
        "0001".to_string(),
        industry.to_string(),
        "7311".to_string(),
        "Director".to_string(),
        "Media Buyer".to_string(),
    ]
}

fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Write rows under the standard header
pub fn write_export(path: &Path, rows: &[Vec<String>]) -> PathBuf {
    let mut contents = HEADER.join(",");
    contents.push('\n');
    for row in rows {
        let line: Vec<String> = row.iter().map(|v| quote(v)).collect();
        contents.push_str(&line.join(","));
        contents.push('\n');
    }
    fs::write(path, contents).unwrap();
    path.to_path_buf()
}

/// The 100-record scenario export
pub fn write_scenario(path: &Path) -> PathBuf {
    let rows: Vec<Vec<String>> = (0..100).map(scenario_row).collect();
    write_export(path, &rows)
}
