//! Keyword Answers
//!
//! The keyword-driven answer path: find the first known keyword in the
//! query, resolve it to a section of the campus dataset, and phrase the
//! answer according to what the query asks about that section.

use serde::Serialize;
use serde_json::Value;

use crate::core::data::{
    CampusDataset, CampusDepartment, Canteen, Event, ExamSchedule, Hostel, Library, Placements,
    Wifi,
};

pub const NOT_SURE: &str =
    "I'm not sure about that — please check the college website or contact the office.";

// ============================================================================
// Routes
// ============================================================================

/// Dataset sections a keyword can point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Library,
    Hostel,
    Canteen,
    Wifi,
    Departments,
    Events,
    Placements,
    TopRecruiters,
    ExamSchedules,
}

/// Keywords in scan order. The first keyword found in the query whose
/// section resolves wins.
pub const KEYWORD_ROUTES: &[(&str, Section)] = &[
    ("library", Section::Library),
    ("hostel", Section::Hostel),
    ("canteen", Section::Canteen),
    ("wifi", Section::Wifi),
    ("department", Section::Departments),
    ("hod", Section::Departments),
    ("event", Section::Events),
    ("placement", Section::Placements),
    ("recruiter", Section::TopRecruiters),
    ("exam", Section::ExamSchedules),
];

/// A resolved piece of the campus dataset.
#[derive(Debug, Clone, Copy)]
pub enum Fragment<'a> {
    Library(&'a Library),
    Hostel(&'a Hostel),
    Canteen(&'a Canteen),
    Wifi(&'a Wifi),
    Department(&'a CampusDepartment),
    Event(&'a Event),
    Placements(&'a Placements),
    Recruiter(&'a str),
    Exam(&'a ExamSchedule),
}

impl Section {
    /// Resolve this section. List sections yield the first entry with a
    /// field whose displayed value contains the whole query.
    pub fn resolve<'a>(&self, campus: &'a CampusDataset, query: &str) -> Option<Fragment<'a>> {
        let facilities = &campus.facilities;
        match self {
            Self::Library => facilities.library.as_ref().map(Fragment::Library),
            Self::Hostel => facilities.hostel.as_ref().map(Fragment::Hostel),
            Self::Canteen => facilities.canteen.as_ref().map(Fragment::Canteen),
            Self::Wifi => facilities.wifi.as_ref().map(Fragment::Wifi),
            Self::Departments => scan(&campus.departments, query).map(Fragment::Department),
            Self::Events => scan(&campus.events, query).map(Fragment::Event),
            Self::Placements => campus.placements.as_ref().map(Fragment::Placements),
            Self::TopRecruiters => campus
                .placements
                .as_ref()
                .and_then(|p| scan(&p.top_recruiters, query))
                .map(|name| Fragment::Recruiter(name.as_str())),
            Self::ExamSchedules => scan(&campus.exam_schedules, query).map(Fragment::Exam),
        }
    }
}

/// Run the keyword scan over the dataset.
pub fn find_information<'a>(
    campus: &'a CampusDataset,
    query: &str,
) -> Option<(&'static str, Fragment<'a>)> {
    KEYWORD_ROUTES
        .iter()
        .filter(|(keyword, _)| query.contains(keyword))
        .find_map(|(keyword, section)| {
            let fragment = section.resolve(campus, query);
            if fragment.is_none() {
                log::debug!("Keyword '{keyword}' found but its section had no match");
            }
            fragment.map(|f| (*keyword, f))
        })
}

fn scan<'a, T: Serialize>(items: &'a [T], query: &str) -> Option<&'a T> {
    items.iter().find(|item| match serde_json::to_value(item) {
        Ok(value) => mentions(&value, query),
        Err(e) => {
            log::warn!("Skipping unserializable record during keyword scan: {e}");
            false
        }
    })
}

fn mentions(value: &Value, query: &str) -> bool {
    match value {
        Value::Object(fields) => fields
            .values()
            .any(|field| display_value(field).to_lowercase().contains(query)),
        other => display_value(other).to_lowercase().contains(query),
    }
}

/// Flatten a JSON value into the text a reader would see.
fn display_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(display_value).collect::<Vec<_>>().join(","),
        Value::Object(fields) => fields.values().map(display_value).collect::<Vec<_>>().join(","),
    }
}

// ============================================================================
// Formatting
// ============================================================================

fn asks(query: &str, words: &[&str]) -> bool {
    words.iter().any(|w| query.contains(w))
}

/// Phrase the answer for `keyword` from its resolved fragment.
pub fn format_keyword(keyword: &str, fragment: &Fragment<'_>, query: &str) -> String {
    let q = query.to_lowercase();

    match (keyword, fragment) {
        ("library", Fragment::Library(data)) => {
            if asks(&q, &["timing", "hour", "open", "when"]) {
                return format!("The library is open {}", data.timings);
            }
            if asks(&q, &["where", "location"]) {
                return format!("The library is located in the {}", data.location);
            }
            if asks(&q, &["resource", "book", "journal", "read"]) {
                return format!("Our library offers {}", data.resources.join(", "));
            }
            format!(
                "The {} is located in the {}. It's open {} and offers {}.",
                data.name,
                data.location,
                data.timings,
                data.resources.join(", ")
            )
        }

        ("hostel", Fragment::Hostel(data)) => {
            if asks(&q, &["facility", "amenity", "provide"]) {
                return format!("Our hostels provide: {}", data.facilities.join(", "));
            }
            if asks(&q, &["type", "available", "have"]) {
                return format!("We have {} facilities for students", data.types.join(" and "));
            }
            if asks(&q, &["security", "safe"]) {
                return format!(
                    "Yes, our hostels are equipped with security and other facilities including {}",
                    data.facilities.join(", ")
                );
            }
            format!(
                "We provide hostel facilities for both boys and girls. Available amenities include: {}.",
                data.facilities.join(", ")
            )
        }

        ("wifi", Fragment::Wifi(data)) => {
            if asks(&q, &["speed", "fast"]) {
                return format!("We provide {} with {} coverage", data.access, data.coverage);
            }
            if asks(&q, &["support", "help", "issue"]) {
                return format!("For WiFi support, please contact the {}", data.support);
            }
            format!(
                "We provide {} WiFi access {}. For support, contact {}.",
                data.coverage, data.access, data.support
            )
        }

        ("department" | "hod", Fragment::Department(data)) => {
            if asks(&q, &["hod", "head"]) {
                return format!(
                    "The Head of Department is {}, {}",
                    data.hod.name, data.hod.designation
                );
            }
            if asks(&q, &["course", "program", "branch"]) {
                return format!("{} department offers {}", data.name, data.programs.join(", "));
            }
            if asks(&q, &["contact", "email", "phone"]) {
                return format!(
                    "You can contact the {} department at {} or {}",
                    data.name, data.contact.email, data.contact.phone
                );
            }
            if asks(&q, &["where", "location", "block"]) {
                return format!("The {} department is located in {}", data.name, data.location);
            }
            format!(
                "{} Department is headed by {}. It's located in {} and offers {}.",
                data.name,
                data.hod.name,
                data.location,
                data.programs.join(", ")
            )
        }

        ("event", Fragment::Event(data)) => {
            if asks(&q, &["when", "date", "time"]) {
                return format!("{} is scheduled for {}", data.name, data.date);
            }
            if asks(&q, &["where", "venue", "location"]) {
                return format!("{} will be held at {}", data.name, data.venue);
            }
            if asks(&q, &["what", "detail", "about"]) {
                return data.description.clone();
            }
            format!(
                "{} will be held on {} at {}. {}",
                data.name, data.date, data.venue, data.description
            )
        }

        ("placement", Fragment::Placements(data)) => {
            let stats = &data.statistics;
            if asks(&q, &["package", "salary", "ctc"]) {
                return format!(
                    "Our placement packages range from average {} to highest {}",
                    stats.average_package, stats.highest_package
                );
            }
            if asks(&q, &["company", "recruiter"]) {
                return format!(
                    "{} companies visited for placements, including {} and more",
                    stats.companies_visited,
                    top_recruiters(data)
                );
            }
            if asks(&q, &["how many", "placed", "student"]) {
                return format!(
                    "{} students were placed with a placement rate of {}",
                    stats.students_placed, stats.placement_rate
                );
            }
            format!(
                "Last year, {} students were placed with packages ranging from {} to {}.",
                stats.students_placed, stats.average_package, stats.highest_package
            )
        }

        ("exam", Fragment::Exam(data)) => {
            if asks(&q, &["when", "date", "schedule"]) {
                return format!("{} is scheduled from {}", data.name, data.date);
            }
            if asks(&q, &["where", "venue", "hall"]) {
                return format!("{} will be conducted at {}", data.name, data.venue);
            }
            format!("{} will be held from {} at {}", data.name, data.date, data.venue)
        }

        _ => NOT_SURE.to_string(),
    }
}

/// First five recruiters, comma separated.
pub(crate) fn top_recruiters(placements: &Placements) -> String {
    placements
        .top_recruiters
        .iter()
        .take(5)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
