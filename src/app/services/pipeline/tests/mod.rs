//! Tests for pipelines and the runner


use polars::prelude::*;
use std::collections::BTreeMap;

/// Raw export columns in export order
pub const RAW_COLUMNS: &[&str] = &[
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

pub type RawRecord = BTreeMap<&'static str, Option<String>>;

/// A record that survives every stage of both pipelines
pub fn good_record(n: usize) -> RawRecord {
    let mut record = RawRecord::new();
    let mut set = |k: &'static str, v: String| {
        record.insert(k, Some(v));
    };
    set("FIRST_NAME", format!("First{}", n));
    set("LAST_NAME", format!("Last{}", n));
    set("BUSINESS_EMAIL", format!("user{}@corp.com", n));
    set("BUSINESS_EMAIL_VALIDATION_STATUS", "Valid".to_string());
    set("PERSONAL_EMAIL", format!("user{}@home.com", n));
    set(
        "PROGRAMMATIC_BUSINESS_EMAILS",
        format!("p{}a@corp.com,p{}b@corp.com", n, n),
    );
    set("MOBILE_PHONE", format!("555-01{:02}", n % 100));
    set("DIRECT_NUMBER", format!("555-02{:02}", n % 100));
    set("PERSONAL_ADDRESS", format!("{} Main St", n));
    set("PERSONAL_ADDRESS_2", "-".to_string());
    set("PROFESSIONAL_ADDRESS", format!("{} Work Rd", n));
    set("PROFESSIONAL_ADDRESS_2", "-".to_string());
    set("COMPANY_ADDRESS", format!("{} Corp Plz", n));
    set("COMPANY_ADDRESS_2", "-".to_string());
    set("PERSONAL_CITY", "Austin".to_string());
    set("PERSONAL_STATE", "TX".to_string());
    set("PERSONAL_ZIP", "73301".to_string());
    set("PERSONAL_ZIP4", "0001".to_string());
    set("PRIMARY_INDUSTRY", "Marketing".to_string());
    set("COMPANY_SIC", "7311".to_string());
    set("SENIORITY_LEVEL", "Director".to_string());
    set("JOB_TITLE", "Marketing Director".to_string());
    record
}

/// Override one field of a record; `None` leaves the value null
pub fn with(mut record: RawRecord, column: &'static str, value: Option<&str>) -> RawRecord {
    record.insert(column, value.map(str::to_string));
    record
}

/// Build a raw table from records
pub fn raw_table(records: &[RawRecord]) -> DataFrame {
    let columns: Vec<Column> = RAW_COLUMNS
        .iter()
        .map(|name| {
            let values: Vec<Option<String>> = records
                .iter()
                .map(|record| record.get(name).cloned().flatten())
                .collect();
            Column::new((*name).into(), values)
        })
        .collect();
    DataFrame::new(columns).unwrap()
}
