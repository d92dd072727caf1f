//! Name, fee and enrollment matching primitives.
//!
//! Everything here is pure string work: case-insensitive, punctuation-stripped
//! token matching for person names, fee-amount parsing for threshold filters,
//! and detection of enrollment-number tokens in free text.

use regex::Regex;
use std::sync::LazyLock;

static FEE_AMOUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"₹(\d+)").expect("Invalid regex: fee amount pattern"));

static UNDER_THRESHOLD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)under\s*(?:₹|rs\.?\s*)?(\d+)").expect("Invalid regex: fee threshold pattern")
});

static ENROLLMENT_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{10,})\b").expect("Invalid regex: enrollment token pattern"));

/// Lowercases and strips everything that is not alphanumeric, underscore or
/// whitespace, then trims. The common form both sides of a name match share.
pub fn normalize(s: &str) -> String {
    s.to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect::<String>()
        .trim()
        .to_string()
}

/// Token-subset name match: every whitespace token of the search term (longer
/// than one character) must appear as a substring of the candidate's full
/// name, or the full name must contain the whole search term verbatim. Both
/// sides are normalized first, so order, case and punctuation do not matter:
/// "sutaria vidhi" matches "Ms. Vidhi Sutaria".
pub fn name_matches(full_name: &str, search_name: &str) -> bool {
    let full = normalize(full_name);
    let search = normalize(search_name);
    let parts: Vec<&str> = search.split_whitespace().filter(|p| p.len() > 1).collect();
    if parts.is_empty() {
        return false;
    }
    parts.iter().all(|p| full.contains(p)) || full.contains(&search)
}

/// Extracts the numeric amount from a currency-prefixed fee string: the first
/// run of digits after the currency symbol. "₹1000 (all 3 events)" → 1000.
/// Fees without an amount ("Free", empty) yield `None`.
pub fn fee_amount(fee: &str) -> Option<u64> {
    FEE_AMOUNT
        .captures(fee)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Extracts a fee threshold from a query phrased as "under ₹100" / "under 100".
pub fn fee_threshold(query: &str) -> Option<u64> {
    UNDER_THRESHOLD
        .captures(query)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Finds a run of at least 10 consecutive digits in the query, treated as an
/// enrollment number.
pub fn enrollment_token(query: &str) -> Option<String> {
    ENROLLMENT_TOKEN
        .captures(query)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Compares an enrollment token against a stored enrollment number after
/// stripping whitespace from the stored value.
pub fn enrollment_equals(stored: &str, token: &str) -> bool {
    let compact: String = stored.chars().filter(|c| !c.is_whitespace()).collect();
    compact == token
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_name_matches_titled_full_name() {
        assert!(name_matches("Dr. Vishvajit Bakrola", "vishvajit"));
        assert!(name_matches("Ms. Vidhi Sutaria", "vidhi sutaria"));
    }

    #[test]
    fn test_token_order_does_not_matter() {
        assert!(name_matches("Ms. Vidhi Sutaria", "sutaria vidhi"));
    }

    #[test]
    fn test_unrelated_name_does_not_match() {
        assert!(!name_matches("Ms. Vidhi Patel", "halak"));
    }

    #[test]
    fn test_single_char_tokens_are_noise() {
        assert!(!name_matches("Ms. Vidhi Sutaria", "a b"));
        assert!(!name_matches("Ms. Vidhi Sutaria", ""));
    }

    #[test]
    fn test_punctuation_is_ignored() {
        assert!(name_matches("Ms. Vidhi Sutaria", "ms. vidhi"));
        assert!(name_matches("Dr. Vishvajit Bakrola", "bakrola, vishvajit"));
    }

    #[test]
    fn test_fee_amount_parses_digits_after_symbol() {
        assert_eq!(fee_amount("₹70"), Some(70));
        assert_eq!(fee_amount("₹1000 (all 3 events)"), Some(1000));
        assert_eq!(fee_amount("Free"), None);
    }

    #[test]
    fn test_fee_threshold_variants() {
        assert_eq!(fee_threshold("events under ₹100"), Some(100));
        assert_eq!(fee_threshold("events under 100"), Some(100));
        assert_eq!(fee_threshold("Events Under Rs. 250"), Some(250));
        assert_eq!(fee_threshold("list all events"), None);
    }

    #[test]
    fn test_enrollment_token_requires_ten_digits() {
        assert_eq!(
            enrollment_token("enrollment no 202403103510225"),
            Some("202403103510225".to_string())
        );
        assert_eq!(enrollment_token("sem 4 division"), None);
        assert_eq!(enrollment_token("call 9408810123x"), None);
    }

    #[test]
    fn test_enrollment_equality_ignores_stored_whitespace() {
        assert!(enrollment_equals("2024 0310 3510 225", "202403103510225"));
        assert!(!enrollment_equals("202403103510226", "202403103510225"));
    }
}
