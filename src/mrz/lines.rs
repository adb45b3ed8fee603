use chrono::{Datelike, NaiveDate};

use super::checksum::CheckSums;

pub const FILLER: char = '<';
/// Width the name line is padded up to.
pub const NAME_LINE_WIDTH: usize = 44;
pub const NAME_LINE_PREFIX: &str = "PH<HAK";
pub const NAME_SEPARATOR: &str = "<<";
pub const ISSUER_TAG: &str = "HAK";
/// Month and day printed after the issue year; the real issue month/day
/// are not encoded.
pub const ISSUE_MONTH_DAY: &str = "0101";
pub const TRAILING_FILLER_LEN: usize = 10;

/// Length of a check line whose version and number fit their fields
/// (3 + 6 + 1 + 3 + 8 + 1 + 1 + 4 + 4 + 1 + 10 + 1 + 1).
pub const CHECK_LINE_LEN: usize = 44;

/// Builds the name line: prefix, surname, separator, first name, then
/// right-padded with `<` to 44 characters. Only the first space of each
/// name is removed. Overlong content is returned as is.
///
/// Width is counted in Unicode scalar values, so a name containing
/// characters outside the Basic Multilingual Plane pads to 44 `char`s
/// rather than 44 UTF-16 code units.
pub fn format_name_line(surname: &str, first_name: &str) -> String {
    let mut line = format!(
        "{}{}{}{}",
        NAME_LINE_PREFIX,
        surname.replacen(' ', "", 1),
        NAME_SEPARATOR,
        first_name.replacen(' ', "", 1)
    );

    let len = line.chars().count();
    if len < NAME_LINE_WIDTH {
        line.extend(std::iter::repeat(FILLER).take(NAME_LINE_WIDTH - len));
    }
    line
}

/// Builds the check line carrying the zero-padded version and document
/// number, the birth date, the issue year and four checksum digits.
///
/// Numeric fields are padded but never truncated, so a version above 999
/// or a document number above 999 999 widens the line past
/// [`CHECK_LINE_LEN`]. Years before 0 are rendered with a sign and are
/// not meaningful.
pub fn format_check_line(
    version: u32,
    document_number: u32,
    date_of_birth: NaiveDate,
    date_of_issue: NaiveDate,
) -> String {
    let digits = CheckSums::new(version, document_number, date_of_birth, date_of_issue).digits();

    format!(
        "{version:03}{number:06}{c1}{tag}{by:04}{bm:02}{bd:02}{c2}{filler}{iy:04}{issue_md}{c3}{trail}0{c4}",
        version = version,
        number = document_number,
        c1 = digits.document_check,
        tag = ISSUER_TAG,
        by = date_of_birth.year(),
        bm = date_of_birth.month(),
        bd = date_of_birth.day(),
        c2 = digits.date_of_birth_check,
        filler = FILLER,
        iy = date_of_issue.year(),
        issue_md = ISSUE_MONTH_DAY,
        c3 = digits.date_of_issue_check,
        trail = FILLER.to_string().repeat(TRAILING_FILLER_LEN),
        c4 = digits.composite_check,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_name_line_padding() {
        let line = format_name_line("DOE", "JANE");
        assert_eq!(line.len(), NAME_LINE_WIDTH);
        assert!(line.starts_with("PH<HAKDOE<<JANE<"));
        assert_eq!(line, format!("PH<HAKDOE<<JANE{}", "<".repeat(29)));
    }

    #[test]
    fn test_name_line_strips_first_space_only() {
        let line = format_name_line("VAN DYKE", "ANN MARIE");
        assert!(line.starts_with("PH<HAKVANDYKE<<ANNMARIE<"));

        let line = format_name_line("DE LA CRUZ", "MARY ANN LEE");
        assert!(line.starts_with("PH<HAKDELA CRUZ<<MARYANN LEE<"));
    }

    #[test]
    fn test_name_line_overlong_is_not_truncated() {
        let surname = "A".repeat(40);
        let line = format_name_line(&surname, "BOB");
        assert_eq!(line, format!("PH<HAK{}<<BOB", surname));
        assert_eq!(line.len(), 6 + 40 + 2 + 3);
    }

    #[test]
    fn test_name_line_counts_chars_not_bytes() {
        // U+1D49C is outside the BMP: one char, four bytes, two UTF-16 units
        let line = format_name_line("\u{1D49C}", "ZOE");
        assert_eq!(line.chars().count(), NAME_LINE_WIDTH);
        assert_eq!(line.len(), NAME_LINE_WIDTH + 3);
    }

    #[test]
    fn test_name_line_exact_width_gets_no_filler() {
        let surname = "B".repeat(33);
        let line = format_name_line(&surname, "CAT");
        assert_eq!(line.len(), NAME_LINE_WIDTH);
        assert!(line.ends_with("<<CAT"));
    }

    #[test]
    fn test_check_line_reference() {
        let line = format_check_line(1, 7, date(2000, 1, 2), date(2024, 6, 10));
        assert_eq!(line, "0010000078HAK200001023<202401016<<<<<<<<<<07");
        assert_eq!(line.len(), CHECK_LINE_LEN);
        assert_eq!(&line[9..10], "8");
        assert_eq!(&line[21..22], "3");
        assert_eq!(&line[31..32], "6");
        assert_eq!(&line[43..44], "7");
    }

    #[test]
    fn test_check_line_zero_padding() {
        let line = format_check_line(5, 42, date(1985, 11, 30), date(2020, 3, 3));
        assert!(line.starts_with("005000042"));
        assert_eq!(&line[13..21], "19851130");
    }

    #[test]
    fn test_check_line_fixed_length() {
        let births = [date(1, 1, 1), date(1200, 4, 6), date(1999, 12, 31), date(9999, 12, 31)];
        for &(version, number) in &[(0, 0), (999, 999_999), (1, 42), (120, 5000)] {
            for &dob in &births {
                let line = format_check_line(version, number, dob, date(2024, 2, 29));
                assert_eq!(line.len(), CHECK_LINE_LEN, "line {}", line);
            }
        }
    }

    #[test]
    fn test_check_line_ignores_issue_month_and_day() {
        let a = format_check_line(2, 9, date(1970, 7, 4), date(2021, 1, 1));
        let b = format_check_line(2, 9, date(1970, 7, 4), date(2021, 11, 27));
        assert_eq!(a, b);
        assert_eq!(&a[23..31], "20210101");
    }

    #[test]
    fn test_check_line_is_deterministic() {
        let a = format_check_line(3, 1234, date(1990, 8, 15), date(2023, 5, 1));
        let b = format_check_line(3, 1234, date(1990, 8, 15), date(2023, 5, 1));
        assert_eq!(a, b);
    }

    #[test]
    fn test_check_line_overflow_expands() {
        let line = format_check_line(1, 1_000_000, date(2000, 1, 2), date(2024, 6, 10));
        assert!(line.starts_with("0011000000"));
        assert_eq!(line.len(), CHECK_LINE_LEN + 1);
        // C1 = (1 + 1_000_000) % 10
        assert_eq!(&line[10..11], "1");
    }
}
