//! Property-based tests for intent classification

use proptest::prelude::*;

use crate::core::intent::{Intent, IntentClassifier};
use crate::tests::common::department_records;

proptest! {
    #[test]
    fn classify_is_deterministic(query in "\\PC{0,80}") {
        let departments = department_records();
        let classifier = IntentClassifier::new(&departments);
        prop_assert_eq!(classifier.classify(&query), classifier.classify(&query));
    }

    #[test]
    fn greeting_token_wins(word in "(hi|hello|hey|greetings)", suffix in "(there|friend|all)") {
        let departments = department_records();
        let query = format!("{word} {suffix}!");
        let result = IntentClassifier::new(&departments).classify(&query);
        prop_assert_eq!(result.intent, Intent::Greeting);
    }

    #[test]
    fn farewell_phrase_wins(
        phrase in "(bye|goodbye|see you|thanks|thank you)",
        prefix in "(ok|well|alright)",
    ) {
        let departments = department_records();
        let query = format!("{prefix} {phrase}");
        let result = IntentClassifier::new(&departments).classify(&query);
        prop_assert_eq!(result.intent, Intent::Farewell);
    }
}
