//! Property-based tests for text normalization

use proptest::prelude::*;

use crate::core::text::{normalize, strip_line_indent, tokenize};

const STRIPPED: &[char] = &['.', ',', '!', '?', ';', ':', '(', ')', '"', '\''];

/// Question-like text with punctuation and odd spacing.
fn arb_query() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 .,!?;:()\"'\t-]{0,80}"
}

proptest! {
    #[test]
    fn renormalizing_only_trims(text in arb_query()) {
        let once = normalize(&text);
        prop_assert_eq!(normalize(&once), once.trim());
        prop_assert_eq!(tokenize(&once), tokenize(&text));
    }

    #[test]
    fn normalize_removes_punctuation(text in arb_query()) {
        let normalized = normalize(&text);
        prop_assert!(!normalized.chars().any(|c| STRIPPED.contains(&c)));
        prop_assert!(!normalized.chars().any(|c| c.is_ascii_uppercase()));
    }

    #[test]
    fn tokens_are_clean(text in arb_query()) {
        for token in tokenize(&text) {
            prop_assert!(!token.is_empty());
            prop_assert!(!token.chars().any(char::is_whitespace));
        }
    }

    #[test]
    fn stripped_lines_have_no_indent(text in "[ a-z\n]{0,60}") {
        let stripped = strip_line_indent(&text);
        for line in stripped.lines() {
            prop_assert!(!line.starts_with(' '));
        }
    }
}
