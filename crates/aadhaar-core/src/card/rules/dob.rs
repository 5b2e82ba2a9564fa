//! Date of birth extraction.

use super::FieldExtractor;
use super::lines::normalize_lines;
use super::patterns::DATE_DMY;

/// Label terms introducing the date of birth.
const DOB_LABELS: [&str; 3] = ["dob", "birth", "जन्म"];

/// Date of birth field extractor.
///
/// Returns the date exactly as printed (delimiter preserved) rather than a
/// normalized value; [`crate::card::age`] parses it later.
pub struct DobExtractor;

impl DobExtractor {
    pub fn new() -> Self {
        Self
    }

    fn from_label(lines: &[&str]) -> Option<String> {
        for (i, line) in lines.iter().enumerate() {
            let lower = line.to_lowercase();
            if !DOB_LABELS.iter().any(|l| lower.contains(l)) {
                continue;
            }

            if let Some(m) = DATE_DMY.find(line) {
                return Some(m.as_str().to_string());
            }
            if let Some(m) = lines.get(i + 1).and_then(|next| DATE_DMY.find(next)) {
                return Some(m.as_str().to_string());
            }
        }
        None
    }

    fn from_any_date(text: &str) -> Option<String> {
        DATE_DMY
            .find_iter(text)
            .map(|m| m.as_str())
            .find(|date| is_plausible_date(date))
            .map(str::to_string)
    }
}

impl Default for DobExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for DobExtractor {
    type Output = String;

    const FIELD: &'static str = "date_of_birth";

    fn extract(&self, text: &str) -> Option<Self::Output> {
        let lines = normalize_lines(text);
        Self::from_label(&lines).or_else(|| Self::from_any_date(text))
    }
}

/// Extract the date of birth as printed, or an empty string.
pub fn extract_dob(text: &str) -> String {
    DobExtractor::new().extract(text).unwrap_or_default()
}

/// Range check on a `D?M?YYYY` token: day 1-31, month 1-12, year 1900-2100.
fn is_plausible_date(date: &str) -> bool {
    let parts: Vec<u32> = date
        .split(['/', '-', '.'])
        .filter_map(|p| p.parse().ok())
        .collect();

    match parts.as_slice() {
        [day, month, year] => {
            (1..=31).contains(day) && (1..=12).contains(month) && (1900..=2100).contains(year)
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_same_line() {
        assert_eq!(extract_dob("DOB: 15/06/2000"), "15/06/2000");
        assert_eq!(extract_dob("जन्म तिथि / DOB : 01-12-1975"), "01-12-1975");
    }

    #[test]
    fn test_label_next_line() {
        assert_eq!(extract_dob("Date of Birth\n3.4.1990\nMALE"), "3.4.1990");
    }

    #[test]
    fn test_label_value_is_not_range_checked() {
        assert_eq!(extract_dob("DOB: 45/13/1890"), "45/13/1890");
    }

    #[test]
    fn test_generic_skips_invalid_dates() {
        let text = "Issued 45/13/2019\nRahul\n07/08/1988";
        assert_eq!(extract_dob(text), "07/08/1988");
    }

    #[test]
    fn test_no_date() {
        assert_eq!(extract_dob("Rahul Kumar\nMALE"), "");
        assert_eq!(extract_dob("00/00/0000"), "");
    }

    #[test]
    fn test_plausible_date() {
        assert!(is_plausible_date("1/1/1900"));
        assert!(is_plausible_date("31.12.2100"));
        assert!(!is_plausible_date("32/01/2000"));
        assert!(!is_plausible_date("01/01/1899"));
    }
}
