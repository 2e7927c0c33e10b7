//! Application constants for the list builder
//!
//! Column names of the raw prospect export, the derived columns the pipeline
//! attaches, reference data (US states, PO-box variants) and file defaults.

// =============================================================================
// Sentinels and Missing Values
// =============================================================================

/// Raw-data encoding for "no value"
pub const SENTINEL: &str = "-";

/// Default delimiter between codes in the SIC column
pub const DEFAULT_SIC_DELIMITER: &str = ";";

/// Default separator for comma-joined email lists
pub const EMAIL_LIST_SEPARATOR: &str = ",";

// =============================================================================
// Column Name Constants
// =============================================================================

/// Column names in the raw prospect export
pub mod columns {
    // Identity
    pub const FIRST_NAME: &str = "FIRST_NAME";
    pub const LAST_NAME: &str = "LAST_NAME";

    // Contact channels
    pub const BUSINESS_EMAIL: &str = "BUSINESS_EMAIL";
    pub const BUSINESS_EMAIL_VALIDATION_STATUS: &str = "BUSINESS_EMAIL_VALIDATION_STATUS";
    pub const PERSONAL_EMAIL: &str = "PERSONAL_EMAIL";
    pub const PROGRAMMATIC_BUSINESS_EMAILS: &str = "PROGRAMMATIC_BUSINESS_EMAILS";
    pub const MOBILE_PHONE: &str = "MOBILE_PHONE";
    pub const DIRECT_NUMBER: &str = "DIRECT_NUMBER";

    // Location
    pub const PERSONAL_ADDRESS: &str = "PERSONAL_ADDRESS";
    pub const PERSONAL_ADDRESS_2: &str = "PERSONAL_ADDRESS_2";
    pub const PROFESSIONAL_ADDRESS: &str = "PROFESSIONAL_ADDRESS";
    pub const PROFESSIONAL_ADDRESS_2: &str = "PROFESSIONAL_ADDRESS_2";
    pub const COMPANY_ADDRESS: &str = "COMPANY_ADDRESS";
    pub const COMPANY_ADDRESS_2: &str = "COMPANY_ADDRESS_2";
    pub const PERSONAL_CITY: &str = "PERSONAL_CITY";
    pub const PERSONAL_STATE: &str = "PERSONAL_STATE";
    pub const PERSONAL_ZIP: &str = "PERSONAL_ZIP";
    pub const PERSONAL_ZIP4: &str = "PERSONAL_ZIP4";

    // Classification
    pub const PRIMARY_INDUSTRY: &str = "PRIMARY_INDUSTRY";
    pub const COMPANY_SIC: &str = "COMPANY_SIC";
    pub const SENIORITY_LEVEL: &str = "SENIORITY_LEVEL";
    pub const JOB_TITLE: &str = "JOB_TITLE";
}

/// Columns attached by the pipeline; never present in raw input
pub mod derived {
    /// Stable identifier assigned at ingestion
    pub const RECORD_ID: &str = "RECORD_ID";
    pub const ENRICHED_PHONE_NUMBER: &str = "ENRICHED_PHONE_NUMBER";
    pub const VALID_ADDRESS: &str = "VALID_ADDRESS";
    pub const ADDRESS_USED: &str = "ADDRESS_USED";
    pub const VALID_BUSINESS_EMAIL: &str = "Valid_Business_Email";
}

/// Column names of the LiveRamp upload layout
pub mod liveramp {
    pub const CLIENT_CUSTOMER_ID: &str = "Client Customer ID";
    pub const FIRST_NAME: &str = "First Name";
    pub const LAST_NAME: &str = "Last Name";
    pub const STREET_ADDRESS_1: &str = "Street Address 1";
    pub const STREET_ADDRESS_2: &str = "Street Address 2";
    pub const CITY: &str = "City";
    pub const STATE: &str = "State";
    pub const ZIP_CODE: &str = "Zip Code";
    pub const ZIP_CODE_PLUS_4: &str = "Zip Code Plus 4";
    pub const EMAIL_1: &str = "Email1";
    pub const EMAIL_2: &str = "Email2";
    pub const EMAIL_3: &str = "Email3";
    pub const PHONE_NUMBER_1: &str = "PhoneNumber1";
    pub const PHONE_NUMBER_2: &str = "PhoneNumber2";
}

/// Column names of the plain email list layout
pub mod email_list {
    pub const FIRST_NAME: &str = "First Name";
    pub const LAST_NAME: &str = "Last Name";
    pub const EMAIL: &str = "Email";
}

// =============================================================================
// Reference Data
// =============================================================================

/// The 50 standard two-letter US state abbreviations
pub const US_STATE_ABBREVIATIONS: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "FL", "GA", "HI", "ID", "IL", "IN", "IA", "KS",
    "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH", "NJ", "NM", "NY",
    "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VT", "VA", "WA", "WV",
    "WI", "WY",
];

/// US ZIP or ZIP+4
pub const ZIP_CODE_PATTERN: &str = r"^\d{5}(-\d{4})?$";

/// Base PO-box pattern, matched case-insensitively
pub const PO_BOX_PATTERN: &str = r"p\.?\s*o\.?\s*box";

/// Non-physical mailing address markers seen in production exports.
///
/// Matched as literal, case-sensitive substrings: several entries ("CO", "MB")
/// would match ordinary street names if case were ignored.
pub const PO_BOX_VARIANTS: &[&str] = &[
    "PO Box",
    "P.O. Box",
    "P.O Box",
    "P.OBOX",
    "P O Box",
    "Post Office Box",
    "po box",
    "Po Box",
    "PO. Box",
    "Post Office",
    "Box No",
    "Box #",
    "Mailbox",
    "Mail Box",
    "MB",
    "Drawer",
    "Drawer No",
    "Drawer #",
    "Private Bag",
    "PMB",
    "Postal Bag",
    "Parcel Locker",
    "Locker No",
    "Locker #",
    "Community Mail Center",
    "CMC",
    "Apt #",
    "Attention",
    "Attn",
    "Attn:",
    "C/O",
    "Care Of",
    "CO",
    "c/o",
];

/// Industries targeted by the default advertising list
pub const DEFAULT_AD_INDUSTRIES: &[&str] = &[
    "Advertising Services",
    "Marketing",
    "Book And Periodical Publishing",
    "Entertainment Providers",
    "Events Services",
    "Broadcast Media Production And Distribution",
    "Public Relations And Communications Services",
    "Online Audio And Video Media",
    "Printing Services",
    "Newspaper Publishing",
    "Newspapers",
];

// =============================================================================
// File and Directory Constants
// =============================================================================

/// Directory assembled lists are written to
pub const DEFAULT_OUTPUT_DIR: &str = "Output_list_DataBase";

/// Files picked up by the merge operation
pub const CSV_GLOB: &str = "*.csv";

/// Workbook sheet-name length limit
pub const MAX_SHEET_NAME_LEN: usize = 31;
