//! Small text helpers backing the table search box and phone inputs

/// Case-insensitive containment check used by table row filtering; an empty
/// term matches every row
pub fn row_matches(row_text: &str, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    row_text.to_lowercase().contains(&term.to_lowercase())
}

/// Strip everything but digits from a phone input. Edits that leave more
/// than 10 digits are rejected with `None`; the caller keeps the previous
/// field value.
pub fn normalize_phone(input: &str) -> Option<String> {
    let digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() > 10 {
        None
    } else {
        Some(digits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_matches() {
        assert!(row_matches("Pipe Fix | Plumbing | $50", "plumb"));
        assert!(!row_matches("Pipe Fix | Plumbing | $50", "electric"));
        assert!(row_matches("anything", ""));
    }

    #[test]
    fn test_normalize_phone() {
        assert_eq!(
            normalize_phone("(555) 123-4567").as_deref(),
            Some("5551234567")
        );
        assert_eq!(normalize_phone("abc").as_deref(), Some(""));
    }

    #[test]
    fn test_normalize_phone_rejects_overlong_edits() {
        // More than 10 digits leaves the field on its previous value
        assert_eq!(normalize_phone("+372 5551 2345 678"), None);
    }
}
