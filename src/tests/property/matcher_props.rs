//! Property-based tests for department matching

use proptest::prelude::*;

use crate::core::matcher::{match_department, similarity_score};
use crate::tests::common::department_records;

proptest! {
    #[test]
    fn similarity_is_bounded(a in "[a-z ]{0,40}", b in "[a-z ]{0,40}") {
        let score = similarity_score(&a, &b);
        prop_assert!((0.0..=1.0).contains(&score));
    }

    #[test]
    fn similarity_is_symmetric(a in "[a-z ]{0,40}", b in "[a-z ]{0,40}") {
        prop_assert_eq!(similarity_score(&a, &b), similarity_score(&b, &a));
    }

    #[test]
    fn matches_are_known_codes(text in "[a-zA-Z ]{0,60}") {
        let departments = department_records();
        if let Some(code) = match_department(&text, &departments) {
            prop_assert!(departments.iter().any(|d| d.code == code));
        }
    }

    #[test]
    fn own_name_matches(index in 0usize..5, filler in "(please|tell me about|info on)") {
        let departments = department_records();
        let dept = &departments[index];
        let text = format!("{} {}", filler, dept.name);
        prop_assert_eq!(match_department(&text, &departments), Some(dept.code.clone()));
    }
}
