use once_cell::sync::Lazy;
use regex::Regex;

/// Optional minus, digits, optional point, then at least one digit.
/// `\d` is restricted to ASCII so other scripts' digits are rejected.
pub const NUMERIC_PATTERN: &str = r"^-?[0-9]*\.?[0-9]+$";

static NUMERIC_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(NUMERIC_PATTERN).expect("numeric pattern is a valid regex"));

pub fn matches_numeric_grammar(input: &str) -> bool {
    NUMERIC_RE.is_match(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_forms() {
        for input in ["0", "123", "-45.67", ".5", "-.5", "007", "-0"] {
            assert!(matches_numeric_grammar(input), "{input} should match");
        }
    }

    #[test]
    fn test_rejects_incomplete_and_exotic_forms() {
        for input in [
            "", ".", "-", "-.", "5.", "1e10", "+1", "1.2.3", " 1", "1 ", "1\n", "--1", "٣", "１",
        ] {
            assert!(!matches_numeric_grammar(input), "{input:?} should not match");
        }
    }
}
