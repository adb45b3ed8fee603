use chrono::{Datelike, NaiveDate};

use crate::config::GeneratorConfig;
use crate::models::{FormatValidationResult, PassportRecord, ValidationIssue, ValidationIssueType};

pub const MAX_DOCUMENT_VERSION: u32 = 999;
pub const MAX_DOCUMENT_NUMBER: u32 = 999_999;
const MAX_YEAR: i32 = 9999;

pub struct FormatValidator;

impl FormatValidator {
    /// Checks that a record fits the fixed-width footer layout. All issues
    /// are collected; the record is valid only when none are found.
    pub fn validate(
        record: &PassportRecord,
        config: &GeneratorConfig,
        today: NaiveDate,
    ) -> FormatValidationResult {
        let mut issues = Vec::new();

        if record.surname.trim().is_empty() {
            issues.push(issue(ValidationIssueType::Format, "Surname is missing"));
        }

        if record.first_name.trim().is_empty() {
            issues.push(issue(ValidationIssueType::Format, "First name is missing"));
        }

        if record.document_version > MAX_DOCUMENT_VERSION {
            issues.push(issue(
                ValidationIssueType::Range,
                format!(
                    "Document version {} does not fit in 3 digits",
                    record.document_version
                ),
            ));
        }

        if record.document_number > MAX_DOCUMENT_NUMBER {
            issues.push(issue(
                ValidationIssueType::Range,
                format!(
                    "Document number {} does not fit in 6 digits",
                    record.document_number
                ),
            ));
        }

        let origin_len = record.place_of_origin.chars().count();
        if origin_len > config.max_origin_len {
            issues.push(issue(
                ValidationIssueType::Format,
                format!(
                    "Place of origin is {} characters, at most {} allowed",
                    origin_len, config.max_origin_len
                ),
            ));
        }

        if record.date_of_birth >= today {
            issues.push(issue(
                ValidationIssueType::Date,
                "Date of birth cannot be later than today",
            ));
        }

        if !year_fits(record.date_of_birth) {
            issues.push(issue(
                ValidationIssueType::Date,
                format!("Birth year {} does not fit in 4 digits", record.date_of_birth.year()),
            ));
        }

        if !year_fits(record.date_of_issue) {
            issues.push(issue(
                ValidationIssueType::Date,
                format!("Issue year {} does not fit in 4 digits", record.date_of_issue.year()),
            ));
        }

        FormatValidationResult {
            is_valid: issues.is_empty(),
            issues,
        }
    }

    /// Checks the raw passport number a user typed into the form.
    pub fn validate_requested_number(raw: &str, config: &GeneratorConfig) -> FormatValidationResult {
        let mut issues = Vec::new();
        let len = raw.chars().count();

        if len > config.max_passport_number_digits {
            issues.push(issue(
                ValidationIssueType::Format,
                format!(
                    "Passport number is {} characters, at most {} allowed",
                    len, config.max_passport_number_digits
                ),
            ));
        }

        FormatValidationResult {
            is_valid: issues.is_empty(),
            issues,
        }
    }
}

fn year_fits(date: NaiveDate) -> bool {
    (0..=MAX_YEAR).contains(&date.year())
}

fn issue(issue_type: ValidationIssueType, message: impl Into<String>) -> ValidationIssue {
    ValidationIssue {
        issue_type,
        message: message.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record() -> PassportRecord {
        PassportRecord {
            document_version: 1,
            document_number: 42,
            surname: "DOE".to_string(),
            first_name: "JANE".to_string(),
            date_of_birth: date(1990, 3, 14),
            date_of_issue: date(2024, 6, 10),
            place_of_origin: "The woods".to_string(),
        }
    }

    #[test]
    fn test_valid_record() {
        let result = FormatValidator::validate(&record(), &GeneratorConfig::default(), date(2024, 6, 10));
        assert!(result.is_valid);
        assert!(result.issues.is_empty());
    }

    #[test]
    fn test_collects_every_issue() {
        let mut bad = record();
        bad.surname = "  ".to_string();
        bad.first_name = String::new();
        bad.document_version = 1000;
        bad.document_number = 1_000_000;
        bad.place_of_origin = "Somewhere far away".to_string();
        bad.date_of_birth = date(2030, 1, 1);

        let result = FormatValidator::validate(&bad, &GeneratorConfig::default(), date(2024, 6, 10));
        assert!(!result.is_valid);
        assert_eq!(result.issues.len(), 6);

        let ranges = result
            .issues
            .iter()
            .filter(|i| i.issue_type == ValidationIssueType::Range)
            .count();
        assert_eq!(ranges, 2);
    }

    #[test]
    fn test_birth_today_rejected() {
        let mut r = record();
        r.date_of_birth = date(2024, 6, 10);
        let result = FormatValidator::validate(&r, &GeneratorConfig::default(), date(2024, 6, 10));
        assert!(!result.is_valid);
        assert_eq!(result.issues[0].issue_type, ValidationIssueType::Date);
    }

    #[test]
    fn test_width_boundaries_accepted() {
        let mut r = record();
        r.document_version = MAX_DOCUMENT_VERSION;
        r.document_number = MAX_DOCUMENT_NUMBER;
        r.place_of_origin = "The deep seaa".to_string(); // 13 chars
        let result = FormatValidator::validate(&r, &GeneratorConfig::default(), date(2024, 6, 10));
        assert!(result.is_valid, "{:?}", result.issues);
    }

    #[test]
    fn test_out_of_range_years() {
        let mut r = record();
        r.date_of_birth = date(-5, 1, 1);
        r.date_of_issue = date(10_000, 1, 1);
        let result = FormatValidator::validate(&r, &GeneratorConfig::default(), date(2024, 6, 10));
        assert_eq!(result.issues.len(), 2);
        assert!(result.issues.iter().all(|i| i.issue_type == ValidationIssueType::Date));
    }

    #[test]
    fn test_requested_number_length() {
        let config = GeneratorConfig::default();
        assert!(FormatValidator::validate_requested_number("1234", &config).is_valid);
        assert!(FormatValidator::validate_requested_number("", &config).is_valid);
        assert!(!FormatValidator::validate_requested_number("12345", &config).is_valid);
    }
}
