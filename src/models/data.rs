use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Normalized input to the footer line formatter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassportRecord {
    pub document_version: u32,
    pub document_number: u32,
    pub surname: String,
    pub first_name: String,
    pub date_of_birth: NaiveDate,
    pub date_of_issue: NaiveDate,
    pub place_of_origin: String,
}

/// The two encoded lines printed at the bottom of the data page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FooterLines {
    pub name_line: String,
    pub check_line: String,
}

/// Checksum digits embedded in the check line, each in `0..=9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CheckDigits {
    pub document_check: u8,
    pub date_of_birth_check: u8,
    pub date_of_issue_check: u8,
    pub composite_check: u8,
}

/// Everything the rendering layer needs to lay out one data page.
#[derive(Debug, Clone, Serialize)]
pub struct DataPage {
    pub record: PassportRecord,
    pub footer: FooterLines,
    pub check_digits: CheckDigits,
    pub background_url: String,
    /// Where the stored page image lives once the passport is registered.
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationIssue {
    pub issue_type: ValidationIssueType,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ValidationIssueType {
    Format,
    Range,
    Date,
    Mrz,
}

#[derive(Debug, Serialize)]
pub struct FormatValidationResult {
    pub is_valid: bool,
    pub issues: Vec<ValidationIssue>,
}

#[derive(Debug, Serialize)]
pub struct MrzValidationResult {
    pub is_valid: bool,
    pub document_check_valid: bool,
    pub date_of_birth_check_valid: bool,
    pub date_of_issue_check_valid: bool,
    pub composite_check_valid: bool,
    pub issues: Vec<ValidationIssue>,
}

impl MrzValidationResult {
    pub(crate) fn layout_failure(message: String) -> Self {
        MrzValidationResult {
            is_valid: false,
            document_check_valid: false,
            date_of_birth_check_valid: false,
            date_of_issue_check_valid: false,
            composite_check_valid: false,
            issues: vec![ValidationIssue {
                issue_type: ValidationIssueType::Mrz,
                message,
            }],
        }
    }
}
