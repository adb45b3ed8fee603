use chrono::{Datelike, NaiveDate};

use crate::models::CheckDigits;

/// Constant added to the issue year before it is reduced.
pub const ISSUE_YEAR_OFFSET: i64 = 2;

/// Unreduced checksum components of a check line.
///
/// The composite digit is taken over these raw sums, never over the
/// already-reduced digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckSums {
    pub document: i64,
    pub date_of_birth: i64,
    pub date_of_issue: i64,
}

impl CheckSums {
    pub fn new(
        version: u32,
        document_number: u32,
        date_of_birth: NaiveDate,
        date_of_issue: NaiveDate,
    ) -> Self {
        Self::from_fields(
            i64::from(version),
            i64::from(document_number),
            (
                i64::from(date_of_birth.year()),
                i64::from(date_of_birth.month()),
                i64::from(date_of_birth.day()),
            ),
            i64::from(date_of_issue.year()),
        )
    }

    /// Builds the sums from already-decoded numeric fields; used when
    /// re-reading a printed check line.
    pub fn from_fields(
        version: i64,
        document_number: i64,
        (birth_year, birth_month, birth_day): (i64, i64, i64),
        issue_year: i64,
    ) -> Self {
        CheckSums {
            document: version + document_number,
            date_of_birth: birth_year + birth_month + birth_day,
            date_of_issue: issue_year + ISSUE_YEAR_OFFSET,
        }
    }

    pub fn composite(&self) -> i64 {
        self.document + self.date_of_birth + self.date_of_issue
    }

    pub fn digits(&self) -> CheckDigits {
        CheckDigits {
            document_check: check_digit(self.document),
            date_of_birth_check: check_digit(self.date_of_birth),
            date_of_issue_check: check_digit(self.date_of_issue),
            composite_check: check_digit(self.composite()),
        }
    }
}

/// Reduces a sum to a single decimal digit. Negative sums (years before
/// 0) still land in `0..=9`.
pub fn check_digit(sum: i64) -> u8 {
    // rem_euclid(10) is always in 0..10
    sum.rem_euclid(10) as u8
}
