// Server side handling of the data page form.
// Missing or empty fields fall back to the placeholder identity.

use std::collections::HashMap;

use chrono::NaiveDate;
use log::debug;

use crate::models::PassportRecord;
use crate::utils::PassportError;

pub const DEFAULT_SURNAME: &str = "HACKER";
pub const DEFAULT_FIRST_NAME: &str = "WACK";
pub const DEFAULT_PLACE_OF_ORIGIN: &str = "THE WOODS";

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%d %b %Y"];

/// A parsed form submission, before a document version is assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSubmission {
    pub passport_number: u32,
    pub surname: String,
    pub first_name: String,
    pub date_of_birth: NaiveDate,
    pub date_of_issue: NaiveDate,
    pub place_of_origin: String,
    pub user_id: u64,
    /// Whether the user asked to register the passport.
    pub register: bool,
}

impl FormSubmission {
    pub fn into_record(self, document_version: u32) -> PassportRecord {
        PassportRecord {
            document_version,
            document_number: self.passport_number,
            surname: self.surname,
            first_name: self.first_name,
            date_of_birth: self.date_of_birth,
            date_of_issue: self.date_of_issue,
            place_of_origin: self.place_of_origin,
        }
    }
}

pub fn default_date_of_birth() -> NaiveDate {
    NaiveDate::from_ymd_opt(1200, 4, 6).unwrap_or_default()
}

/// Parses submitted form fields. `today` stands in for a missing issue
/// date.
pub fn parse_form_data(
    fields: &HashMap<String, String>,
    today: NaiveDate,
) -> Result<FormSubmission, PassportError> {
    let get = |key: &str| fields.get(key).map(|v| v.trim()).filter(|v| !v.is_empty());

    let passport_number = match get("passportNumber") {
        Some(raw) => raw.parse::<u32>().map_err(|e| {
            PassportError::InvalidField(format!("passportNumber '{}': {}", raw, e))
        })?,
        None => 0,
    };

    let date_of_birth = match get("dateOfBirth") {
        Some(raw) => parse_date(raw)?,
        None => default_date_of_birth(),
    };

    let date_of_issue = match get("dateOfIssue") {
        Some(raw) => parse_date(raw)?,
        None => today,
    };

    let user_id = match get("userId") {
        Some(raw) => raw
            .parse::<u64>()
            .map_err(|e| PassportError::InvalidField(format!("userId '{}': {}", raw, e)))?,
        None => 0,
    };

    let submission = FormSubmission {
        passport_number,
        surname: get("surname").unwrap_or(DEFAULT_SURNAME).to_string(),
        first_name: get("firstName").unwrap_or(DEFAULT_FIRST_NAME).to_string(),
        date_of_birth,
        date_of_issue,
        place_of_origin: get("placeOfOrigin")
            .unwrap_or(DEFAULT_PLACE_OF_ORIGIN)
            .to_string(),
        user_id,
        register: get("sendToDb").map_or(false, |v| v.eq_ignore_ascii_case("true")),
    };

    debug!("parsed form submission: {:?}", submission);
    Ok(submission)
}

/// Accepts `YYYY-MM-DD` (HTML date inputs) and `DD Mon YYYY`.
pub fn parse_date(raw: &str) -> Result<NaiveDate, PassportError> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        .ok_or_else(|| PassportError::InvalidDate(format!("unrecognised date '{}'", raw)))
}

/// File name offered when downloading a generated page.
pub fn download_name(first_name: &str, surname: &str) -> String {
    fn process(name: &str) -> String {
        name.replacen(' ', "_", 1).to_lowercase()
    }
    format!("passport_{}_{}", process(first_name), process(surname))
}
