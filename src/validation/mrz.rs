use lazy_static::lazy_static;
use regex::Regex;

use crate::models::{MrzValidationResult, ValidationIssue, ValidationIssueType};
use crate::mrz::lines::{NAME_LINE_PREFIX, NAME_LINE_WIDTH, NAME_SEPARATOR};
use crate::mrz::CheckSums;

lazy_static! {
    // version, number, C1, birth y/m/d, C2, issue year, C3, C4
    static ref CHECK_LINE: Regex = Regex::new(
        r"^([0-9]{3})([0-9]{6})([0-9])HAK([0-9]{4})([0-9]{2})([0-9]{2})([0-9])<([0-9]{4})0101([0-9])<{10}0([0-9])$"
    )
    .unwrap();
}

pub struct MrzValidator;

impl MrzValidator {
    /// Re-reads a printed check line and recomputes its four checksum
    /// digits. Only the fixed 44-character layout is understood.
    pub fn validate(check_line: &str) -> MrzValidationResult {
        let caps = match CHECK_LINE.captures(check_line) {
            Some(caps) => caps,
            None => {
                return MrzValidationResult::layout_failure(format!(
                    "Check line does not match the expected layout: {}",
                    check_line
                ))
            }
        };

        // Every group is a run of ASCII digits at most 6 long.
        let num = |i: usize| -> i64 { caps[i].parse().unwrap_or_default() };
        let printed = |i: usize| -> u8 { caps[i].as_bytes()[0] - b'0' };

        let expected =
            CheckSums::from_fields(num(1), num(2), (num(4), num(5), num(6)), num(8)).digits();

        let mut issues = Vec::new();
        let mut check = |ok: bool, what: &str| {
            if !ok {
                issues.push(ValidationIssue {
                    issue_type: ValidationIssueType::Mrz,
                    message: format!("{} check digit mismatch", what),
                });
            }
            ok
        };

        let document_check_valid = check(printed(3) == expected.document_check, "Document number");
        let date_of_birth_check_valid =
            check(printed(7) == expected.date_of_birth_check, "Date of birth");
        let date_of_issue_check_valid =
            check(printed(9) == expected.date_of_issue_check, "Date of issue");
        let composite_check_valid = check(printed(10) == expected.composite_check, "Composite");

        MrzValidationResult {
            is_valid: issues.is_empty(),
            document_check_valid,
            date_of_birth_check_valid,
            date_of_issue_check_valid,
            composite_check_valid,
            issues,
        }
    }

    /// Checks the structure of a name line: prefix, a separator between
    /// the names and at least 44 characters.
    pub fn validate_name_line(name_line: &str) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        let mut fail = |message: String| {
            issues.push(ValidationIssue {
                issue_type: ValidationIssueType::Mrz,
                message,
            })
        };

        match name_line.strip_prefix(NAME_LINE_PREFIX) {
            Some(rest) => {
                let names = rest.trim_end_matches('<');
                if !names.contains(NAME_SEPARATOR) {
                    fail("Name line has no separator between surname and first name".to_string());
                }
            }
            None => fail(format!("Name line does not start with {}", NAME_LINE_PREFIX)),
        }

        let len = name_line.chars().count();
        if len < NAME_LINE_WIDTH {
            fail(format!("Name line is {} characters, expected at least {}", len, NAME_LINE_WIDTH));
        }

        issues
    }
}
