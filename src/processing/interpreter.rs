//! Pulls a match percentage out of free-form model output

use regex::Regex;
use std::sync::LazyLock;

static PERCENTAGE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)%").expect("percentage pattern is valid"));

#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseInterpreter;

impl ResponseInterpreter {
    pub fn new() -> Self {
        Self
    }

    /// First run of ASCII digits immediately followed by `%`, scanning left
    /// to right. Digits from other scripts are not part of a match. Values
    /// above 100 are returned unchanged; a digit run too long for `u32`
    /// counts as no match.
    pub fn extract_percentage(&self, response_text: &str) -> Option<u32> {
        PERCENTAGE_PATTERN
            .captures(response_text)
            .and_then(|caps| caps.get(1))
            .and_then(|digits| digits.as_str().parse().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_stated_percentage() {
        let interpreter = ResponseInterpreter::new();
        assert_eq!(interpreter.extract_percentage("Overall match: 78% ..."), Some(78));
    }

    #[test]
    fn test_no_percentage_is_a_miss() {
        let interpreter = ResponseInterpreter::new();
        assert_eq!(interpreter.extract_percentage("Great candidate, no match stated"), None);
        assert_eq!(interpreter.extract_percentage(""), None);
        assert_eq!(interpreter.extract_percentage("100 % with a space"), None);
    }

    #[test]
    fn test_first_match_wins() {
        let interpreter = ResponseInterpreter::new();
        assert_eq!(interpreter.extract_percentage("85% match, 15% gap"), Some(85));
    }

    #[test]
    fn test_out_of_range_is_not_clamped() {
        let interpreter = ResponseInterpreter::new();
        assert_eq!(interpreter.extract_percentage("A 150% fit!"), Some(150));
    }

    #[test]
    fn test_digits_not_followed_by_percent_are_skipped() {
        let interpreter = ResponseInterpreter::new();
        assert_eq!(
            interpreter.extract_percentage("5 years Python, 3 projects, match 64%"),
            Some(64)
        );
        assert_eq!(interpreter.extract_percentage("**Match Percentage:** 072%"), Some(72));
    }

    #[test]
    fn test_overflowing_digit_run_is_a_miss() {
        let interpreter = ResponseInterpreter::new();
        assert_eq!(interpreter.extract_percentage("99999999999999999999%"), None);
    }

    #[test]
    fn test_only_ascii_digits_count() {
        let interpreter = ResponseInterpreter::new();
        assert_eq!(interpreter.extract_percentage("Match \u{ff18}\u{ff15}% overall, 70% skills"), Some(70));
        assert_eq!(interpreter.extract_percentage("Match: \u{668}\u{665}%"), None);
    }
}
