//! Assistant Flow Tests
//!
//! Full question → answer runs through the classifier, repository and
//! formatters, served by the in-memory loader.

use std::sync::Arc;

use rstest::rstest;

use crate::core::assistant::{Assistant, FALLBACK};
use crate::core::data::{DataRepository, DEFAULT_CAMPUS_PATH, DEFAULT_DEPARTMENTS_PATH};
use crate::core::intent::{Intent, IntentClassifier};
use crate::core::respond::conversation::GREETING_RESPONSES;
use crate::tests::common::department_records;
use crate::tests::mocks::CountingLoader;

fn bot() -> (Assistant, Arc<CountingLoader>) {
    let loader = Arc::new(CountingLoader::with_fixtures());
    let repo = DataRepository::with_loader(loader.clone());
    (Assistant::new(Arc::new(repo)), loader)
}

#[tokio::test]
async fn greeting_is_always_from_the_fixed_set() {
    let (bot, _) = bot();
    for query in ["hi", "Hello", "hey there", "greetings!"] {
        let answer = bot.answer(query).await;
        assert!(GREETING_RESPONSES.contains(&answer.as_str()), "{query}: {answer}");
    }
}

#[tokio::test]
async fn hod_of_cse_uses_directory_template() {
    let (bot, _) = bot();

    // classified as a faculty question, answered by the HOD fallback
    let departments = department_records();
    let intent = IntentClassifier::new(&departments).classify("who is the hod of cse").intent;
    assert_eq!(intent, Intent::FacultyQuery);

    let answer = bot.answer("who is the hod of cse").await;
    assert!(answer.contains("Dr. R. Anitha Reddy"));
    assert!(answer.contains("- Email: hod.cse@gcet.edu.in"));
    assert!(answer.contains("Office Hours: Monday to Friday, 10:00 AM - 12:00 PM"));
}

#[tokio::test]
async fn library_timings_is_specific() {
    let (bot, _) = bot();
    let answer = bot.answer("library timings").await;

    assert!(answer.contains("from 8:30 AM to 6:00 PM, Monday to Saturday"));
    assert!(!answer.contains("It's open"));
    assert!(!answer.contains("Central Library"));
}

#[tokio::test]
async fn branch_count_lists_every_department_in_order() {
    let (bot, _) = bot();
    let listed = bot.repository().list_departments().await;

    let answer = bot.answer("how many branches do you have").await;

    let expected = format!(
        "We offer {} branches: {}.",
        listed.len(),
        listed.iter().map(|d| d.name.as_str()).collect::<Vec<_>>().join(", ")
    );
    assert_eq!(answer, expected);
}

#[tokio::test]
async fn gibberish_gets_generic_fallback() {
    let (bot, _) = bot();
    assert_eq!(bot.answer("xyz123").await, FALLBACK);
}

#[tokio::test]
async fn personnel_questions_outside_college_wording_fall_back() {
    // faculty questions only reach the personnel answers through a
    // college-level intent
    let (bot, _) = bot();
    assert_eq!(bot.answer("who is the principal").await, FALLBACK);
}

#[rstest]
#[case("When was the college established?", "established in 1997")]
#[case("college accreditation", "holds NAAC A+ accreditation")]
#[case("what is the college address", "The complete address is: Cheeryal")]
#[case("college principal contact", "The Principal is Dr. K. Srinivas Rao")]
#[case("college timing and location", "College working hours are 9:00 AM to 3:40 PM")]
#[case("where does the college bus stop", "buses arriving at campus by 8:45 AM")]
#[case("mid-term examinations", "Mid-Term Examinations will be held from October 20")]
#[case("pharmacy branches", "We offer 5 branches")]
#[case("is there a pharmacy branch", "No, there is no Pharmacy department listed.")]
#[case("hostel safety", "Yes, our hostels are equipped with security")]
#[case("head of department civil", "The Head of Department (HOD) for Civil Engineering is Dr. M. Sujatha.")]
#[case("tell me about electrical and electronics", "Department: Electrical and Electronics Engineering")]
#[tokio::test]
async fn answers_by_topic(#[case] query: &str, #[case] expected: &str) {
    let (bot, _) = bot();
    let answer = bot.answer(query).await;
    assert!(answer.contains(expected), "{query}: {answer}");
}

#[tokio::test]
async fn documents_load_once_across_questions() {
    let (bot, loader) = bot();

    let (a, b, c) = tokio::join!(
        bot.answer("library timings"),
        bot.answer("who is the hod of ece"),
        bot.answer("college location")
    );
    assert!(!a.is_empty() && !b.is_empty() && !c.is_empty());
    bot.answer("placement package").await;

    assert_eq!(loader.calls(DEFAULT_DEPARTMENTS_PATH), 1);
    assert_eq!(loader.calls(DEFAULT_CAMPUS_PATH), 1);
}
