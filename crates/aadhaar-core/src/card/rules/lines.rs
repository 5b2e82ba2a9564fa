//! Line normalization shared by all extractors.

/// Split OCR text into trimmed, non-empty lines, in order.
pub fn normalize_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lines() {
        let text = "  Government of India \r\n\n\t\nRahul Kumar\n   \nDOB: 01/02/1990  ";
        assert_eq!(
            normalize_lines(text),
            vec!["Government of India", "Rahul Kumar", "DOB: 01/02/1990"]
        );
    }

    #[test]
    fn test_normalize_empty() {
        assert!(normalize_lines("").is_empty());
        assert!(normalize_lines(" \n \n").is_empty());
    }
}
