//! Rule-Based Intent Classifier
//!
//! Evaluates an ordered list of rules against the normalized query and
//! returns the first match. Order matters: earlier rules pre-empt later,
//! broader ones, so a query mentioning "hod" is a faculty query before it
//! can ever be a HOD query.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{EntityKind, Intent, IntentResult};
use crate::core::data::DepartmentRecord;
use crate::core::matcher::match_department;
use crate::core::text::normalize;

// ============================================================================
// Vocabulary
// ============================================================================

const GREETING_WORDS: &[&str] = &["hi", "hello", "hey", "greetings"];

/// Multi-word entries match as consecutive tokens.
const FAREWELL_WORDS: &[&str] = &["bye", "goodbye", "see you", "thanks", "thank you"];

const FACILITY_WORDS: &[&str] = &[
    "library",
    "hostel",
    "canteen",
    "wifi",
    "lab",
    "labs",
    "placement",
    "placements",
    "exam",
    "exams",
    "event",
    "events",
];

// ============================================================================
// Compiled Patterns (lazy static)
// ============================================================================

static COLLEGE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"college|institution|university").expect("Invalid college regex"));

static PLACE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"where|location|address|place").expect("Invalid place regex"));

static ESTABLISHMENT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"when|year|establish|start").expect("Invalid establishment regex"));

static ACCREDITATION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"accredit|naac|grade").expect("Invalid accreditation regex"));

static CONTACT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"contact|phone|email|reach|office").expect("Invalid contact regex"));

static FACILITIES_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"facility|infrastructure|campus|amenity").expect("Invalid facilities regex")
});

static ADMISSION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"admission|apply|entrance|eligibility|fee").expect("Invalid admission regex")
});

static PLACEMENT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"placement|package|job|recruitment|salary").expect("Invalid placement regex")
});

static LOCATED_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"where|location|address|place|located").expect("Invalid located regex")
});

static ROLE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"principal|director|hod|faculty|professor|dean").expect("Invalid role regex")
});

/// Roles captured as an entity; "faculty" and "professor" are not.
static ROLE_ENTITY_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"principal|director|hod|dean").expect("Invalid role entity regex"));

static SCHEDULE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"schedule|timing|hour|working hour|time table|exam|attendance")
        .expect("Invalid schedule regex")
});

static EXAM_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"exam|examination").expect("Invalid exam regex"));

static ATTENDANCE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"attendance|rule|leave").expect("Invalid attendance regex"));

static TRANSPORT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"transport|bus|route").expect("Invalid transport regex"));

static COUNT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"how many|number of|how many branches|how many departments|count of departments")
        .expect("Invalid count regex")
});

// ============================================================================
// Rules
// ============================================================================

/// A query prepared once for every rule.
struct PreparedQuery {
    text: String,
    tokens: Vec<String>,
}

impl PreparedQuery {
    fn new(query: &str) -> Self {
        let text = normalize(query);
        let tokens = text.split_whitespace().map(str::to_string).collect();
        Self { text, tokens }
    }

    fn contains(&self, needle: &str) -> bool {
        self.text.contains(needle)
    }

    fn matches(&self, pattern: &Regex) -> bool {
        pattern.is_match(&self.text)
    }

    /// True when any entry occurs as a run of consecutive tokens.
    fn has_phrase(&self, entries: &[&str]) -> bool {
        entries.iter().any(|entry| {
            let words: Vec<&str> = entry.split_whitespace().collect();
            !words.is_empty()
                && self
                    .tokens
                    .windows(words.len())
                    .any(|window| window.iter().zip(&words).all(|(t, w)| t == w))
        })
    }
}

type RuleFn = fn(&PreparedQuery, &[DepartmentRecord]) -> Option<IntentResult>;

/// One step of the cascade.
struct Rule {
    name: &'static str,
    apply: RuleFn,
}

impl Rule {
    const fn new(name: &'static str, apply: RuleFn) -> Self {
        Self { name, apply }
    }
}

/// Evaluated top to bottom; the first rule returning a result wins.
const RULES: &[Rule] = &[
    Rule::new("greeting", greeting_rule),
    Rule::new("farewell", farewell_rule),
    Rule::new("help", help_rule),
    Rule::new("college", college_rule),
    Rule::new("faculty", faculty_rule),
    Rule::new("schedule", schedule_rule),
    Rule::new("hod", hod_rule),
    Rule::new("branches", branches_rule),
    Rule::new("pharmacy", pharmacy_rule),
    Rule::new("college_info", college_info_rule),
    Rule::new("facility", facility_rule),
    Rule::new("department", department_rule),
];

fn intent(intent: Intent) -> Option<IntentResult> {
    Some(IntentResult::new(intent))
}

fn greeting_rule(q: &PreparedQuery, _: &[DepartmentRecord]) -> Option<IntentResult> {
    q.has_phrase(GREETING_WORDS).then(|| IntentResult::new(Intent::Greeting))
}

fn farewell_rule(q: &PreparedQuery, _: &[DepartmentRecord]) -> Option<IntentResult> {
    q.has_phrase(FAREWELL_WORDS).then(|| IntentResult::new(Intent::Farewell))
}

fn help_rule(q: &PreparedQuery, _: &[DepartmentRecord]) -> Option<IntentResult> {
    (q.contains("help") || q.contains("what can you do")).then(|| IntentResult::new(Intent::Help))
}

/// College or location vocabulary, narrowed by sub-pattern. Falls through
/// when no sub-pattern applies.
fn college_rule(q: &PreparedQuery, _: &[DepartmentRecord]) -> Option<IntentResult> {
    if !q.matches(&COLLEGE_PATTERN) && !q.matches(&PLACE_PATTERN) {
        return None;
    }

    let sub_intents: [(&Lazy<Regex>, Intent); 7] = [
        (&ESTABLISHMENT_PATTERN, Intent::CollegeEstablishment),
        (&ACCREDITATION_PATTERN, Intent::CollegeAccreditation),
        (&CONTACT_PATTERN, Intent::CollegeContact),
        (&FACILITIES_PATTERN, Intent::CollegeFacilities),
        (&ADMISSION_PATTERN, Intent::CollegeAdmission),
        (&PLACEMENT_PATTERN, Intent::CollegePlacement),
        (&LOCATED_PATTERN, Intent::CollegeLocation),
    ];

    sub_intents
        .iter()
        .find(|(pattern, _)| q.matches(pattern))
        .map(|(_, found)| IntentResult::new(*found))
}

fn faculty_rule(q: &PreparedQuery, _: &[DepartmentRecord]) -> Option<IntentResult> {
    if !q.matches(&ROLE_PATTERN) {
        return None;
    }
    let role = ROLE_ENTITY_PATTERN
        .find(&q.text)
        .map(|m| m.as_str().to_string());
    Some(IntentResult::new(Intent::FacultyQuery).with_entity(EntityKind::Role, role))
}

fn schedule_rule(q: &PreparedQuery, _: &[DepartmentRecord]) -> Option<IntentResult> {
    if !q.matches(&SCHEDULE_PATTERN) {
        return None;
    }
    if q.matches(&EXAM_PATTERN) {
        return intent(Intent::ExamSchedule);
    }
    if q.matches(&ATTENDANCE_PATTERN) {
        return intent(Intent::AttendanceRules);
    }
    if q.matches(&TRANSPORT_PATTERN) {
        return intent(Intent::TransportSchedule);
    }
    intent(Intent::WorkingHours)
}

fn hod_rule(q: &PreparedQuery, departments: &[DepartmentRecord]) -> Option<IntentResult> {
    if !(q.contains("hod") || q.contains("head of department") || q.contains("head")) {
        return None;
    }
    let department = match_department(&q.text, departments);
    Some(IntentResult::new(Intent::HodQuery).with_entity(EntityKind::Department, department))
}

fn branches_rule(q: &PreparedQuery, _: &[DepartmentRecord]) -> Option<IntentResult> {
    (q.matches(&COUNT_PATTERN) || q.contains("branches") || q.contains("departments"))
        .then(|| IntentResult::new(Intent::CollegeBranches))
}

fn pharmacy_rule(q: &PreparedQuery, _: &[DepartmentRecord]) -> Option<IntentResult> {
    (q.contains("pharmacy") || q.contains("pharm"))
        .then(|| IntentResult::new(Intent::CollegePharmacy))
}

fn college_info_rule(q: &PreparedQuery, _: &[DepartmentRecord]) -> Option<IntentResult> {
    (q.contains("college") && (q.contains("name") || q.contains("located") || q.contains("where")))
        .then(|| IntentResult::new(Intent::CollegeInfo))
}

fn facility_rule(q: &PreparedQuery, _: &[DepartmentRecord]) -> Option<IntentResult> {
    q.tokens
        .iter()
        .any(|t| FACILITY_WORDS.contains(&t.as_str()))
        .then(|| IntentResult::new(Intent::FacilityQuery))
}

fn department_rule(q: &PreparedQuery, departments: &[DepartmentRecord]) -> Option<IntentResult> {
    let department = match_department(&q.text, departments)?;
    Some(
        IntentResult::new(Intent::DepartmentQuery)
            .with_entity(EntityKind::Department, Some(department)),
    )
}

// ============================================================================
// Classifier
// ============================================================================

/// Classifies queries against a snapshot of the department listing, which
/// the HOD and department rules resolve entities from.
#[derive(Debug, Clone, Copy)]
pub struct IntentClassifier<'a> {
    departments: &'a [DepartmentRecord],
}

impl<'a> IntentClassifier<'a> {
    pub fn new(departments: &'a [DepartmentRecord]) -> Self {
        Self { departments }
    }

    /// Classify a raw query. Never fails; unmatched queries are `general`.
    pub fn classify(&self, query: &str) -> IntentResult {
        let prepared = PreparedQuery::new(query);

        for rule in RULES {
            if let Some(result) = (rule.apply)(&prepared, self.departments) {
                log::debug!(
                    "Query {:?} matched rule {} -> {}",
                    prepared.text,
                    rule.name,
                    result.intent.as_str()
                );
                return result;
            }
        }

        IntentResult::new(Intent::General)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::common::department_records;
    use rstest::rstest;

    fn classify(query: &str) -> IntentResult {
        let departments = department_records();
        IntentClassifier::new(&departments).classify(query)
    }

    #[test]
    fn test_all_greeting_words() {
        for word in GREETING_WORDS {
            assert_eq!(classify(word).intent, Intent::Greeting, "{word}");
        }
        assert_eq!(classify("Hello there!").intent, Intent::Greeting);
    }

    #[test]
    fn test_all_farewell_words() {
        for word in FAREWELL_WORDS {
            assert_eq!(classify(word).intent, Intent::Farewell, "{word}");
        }
        assert_eq!(classify("ok, thank you!").intent, Intent::Farewell);
    }

    #[test]
    fn test_greeting_needs_whole_token() {
        // "hi" inside "which" is not a greeting
        assert_ne!(classify("which exam is next").intent, Intent::Greeting);
    }

    #[test]
    fn test_greeting_preempts_farewell() {
        assert_eq!(classify("hi and bye").intent, Intent::Greeting);
    }

    #[rstest]
    #[case("Can you help me?", Intent::Help)]
    #[case("what can you do", Intent::Help)]
    #[case("when was the college established", Intent::CollegeEstablishment)]
    #[case("is the college naac accredited", Intent::CollegeAccreditation)]
    #[case("college phone number", Intent::CollegeContact)]
    #[case("college infrastructure", Intent::CollegeFacilities)]
    #[case("college admission process", Intent::CollegeAdmission)]
    #[case("college placement record", Intent::CollegePlacement)]
    #[case("where is the college", Intent::CollegeLocation)]
    #[case("what is the address", Intent::CollegeLocation)]
    #[case("who is the principal", Intent::FacultyQuery)]
    #[case("exam schedule", Intent::ExamSchedule)]
    #[case("attendance requirement", Intent::AttendanceRules)]
    #[case("bus timing", Intent::TransportSchedule)]
    #[case("library timings", Intent::WorkingHours)]
    #[case("head of department for mechanical", Intent::HodQuery)]
    #[case("how many branches do you have", Intent::CollegeBranches)]
    #[case("list the departments", Intent::CollegeBranches)]
    #[case("do you offer pharmacy", Intent::CollegePharmacy)]
    #[case("tell me the college name", Intent::CollegeInfo)]
    #[case("is there a hostel", Intent::FacilityQuery)]
    #[case("tell me about cse", Intent::DepartmentQuery)]
    #[case("xyz123", Intent::General)]
    fn test_classify(#[case] query: &str, #[case] expected: Intent) {
        assert_eq!(classify(query).intent, expected, "{query}");
    }

    #[test]
    fn test_faculty_rule_preempts_hod_rule() {
        let result = classify("who is the hod of cse");
        assert_eq!(result.intent, Intent::FacultyQuery);
        assert_eq!(result.role(), Some("hod"));
        assert!(result.department().is_none());
    }

    #[test]
    fn test_faculty_role_entity_is_optional() {
        let result = classify("list of faculty");
        assert_eq!(result.intent, Intent::FacultyQuery);
        assert!(result.role().is_none());
        assert_eq!(classify("who is the dean").role(), Some("dean"));
    }

    #[test]
    fn test_college_vocabulary_without_sub_match_falls_through() {
        // "college" alone has no sub-pattern; "name" leads to college_info
        assert_eq!(classify("college name please").intent, Intent::CollegeInfo);
    }

    #[test]
    fn test_location_preempts_facilities() {
        // "place" routes into the college rule before the facility keyword rule
        assert_eq!(classify("which place is the library").intent, Intent::CollegeLocation);
    }

    #[test]
    fn test_schedule_preempts_hod() {
        assert_eq!(classify("head of department office hours").intent, Intent::WorkingHours);
    }

    #[test]
    fn test_hod_rule_resolves_department() {
        let result = classify("head of the eee department");
        assert_eq!(result.intent, Intent::HodQuery);
        assert_eq!(result.department(), Some("eee"));

        let result = classify("who heads the department");
        assert_eq!(result.intent, Intent::HodQuery);
        assert!(result.department().is_none());
    }

    #[test]
    fn test_department_rule_uses_similarity() {
        let result = classify("civil engineering");
        assert_eq!(result.intent, Intent::DepartmentQuery);
        assert_eq!(result.department(), Some("civil"));
    }

    #[test]
    fn test_no_departments_falls_back_to_general() {
        let result = IntentClassifier::new(&[]).classify("tell me about cse");
        assert_eq!(result.intent, Intent::General);
    }
}
