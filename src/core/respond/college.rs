//! College-Level Answers
//!
//! Handlers for questions about the institution as a whole: key personnel,
//! schedules, establishment, contact details, facilities, admissions,
//! placements, branches and location. Each handler answers `None` when the
//! question is not its concern or the data it needs is missing, letting
//! the caller move on to the next strategy.

use once_cell::sync::Lazy;
use regex::Regex;

use super::keyword::top_recruiters;
use crate::core::data::{CampusDataset, DataRepository, DepartmentRecord};
use crate::core::text::strip_line_indent;

// ============================================================================
// Compiled Patterns (lazy static)
// ============================================================================

static PERSONNEL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"principal|director").expect("Invalid personnel regex"));

static HOD_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"hod|head.*department").expect("Invalid hod regex"));

static WORKING_HOURS_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"working hours|college timing|time|when.*open")
        .expect("Invalid working hours regex")
});

static EXAM_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"exam|examination").expect("Invalid exam regex"));

static TRANSPORT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"transport|bus|route").expect("Invalid transport regex"));

static ATTENDANCE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"attendance|rules|leave").expect("Invalid attendance regex"));

static ESTABLISHED_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"when|which year|established|started").expect("Invalid established regex")
});

static ACCREDITATION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"accreditation|naac|grade").expect("Invalid accreditation regex"));

static CONTACT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"contact|phone|email|reach|office hours").expect("Invalid contact regex")
});

static FACILITIES_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"facilities|infrastructure|campus|amenities").expect("Invalid facilities regex")
});

static ADMISSION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"admission|how to apply|entrance|eligibility").expect("Invalid admission regex")
});

static PLACEMENT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"placement|package|job|recruitment|salary").expect("Invalid placement regex")
});

static BRANCH_COUNT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"how many|number of|how many branches|how many departments|count of departments")
        .expect("Invalid branch count regex")
});

static BRANCH_LIST_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"which branches|list branches|what branches|available branches|departments do you have",
    )
    .expect("Invalid branch list regex")
});

static COLLEGE_NAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"what is the name|college name|your college name|who are you")
        .expect("Invalid college name regex")
});

static LOCATION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"where|location|address|place|located").expect("Invalid location regex")
});

static AREA_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"village|area|mandal").expect("Invalid area regex"));

static REGION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"district|state").expect("Invalid region regex"));

static DIRECTIONS_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"where|how to reach|direction").expect("Invalid directions regex"));

// ============================================================================
// Fixed Text
// ============================================================================

const DEFAULT_EMAIL: &str = "info@gcet.edu.in";
const DEFAULT_OFFICE_HOURS: &str = "9:00 AM – 3:40 PM (Sunday closed)";

const ADMISSION_INFO: &str = "Admissions are primarily through state-level entrance exams (e.g., TS EAMCET).
    Eligibility:
    - For UG: 10+2
    - For PG: Graduation + entrance exams

    B.Tech first year fee range: ₹1.05 Lakh – ₹1.2 Lakhs (varies by course & year)";

pub const NO_LOCATION: &str = "I'm sorry — I don't have the college location on file.";

// ============================================================================
// Handlers
// ============================================================================

/// Principal, director and the CSE head.
pub fn faculty_answer(campus: &CampusDataset, query: &str) -> Option<String> {
    let q = query.to_lowercase();
    let personnel = &campus.college.key_personnel;

    if PERSONNEL_PATTERN.is_match(&q) {
        if q.contains("principal") {
            if let Some(principal) = &personnel.principal {
                return Some(format!(
                    "The Principal is {} ({}).",
                    principal.name,
                    principal.qualifications.join(", ")
                ));
            }
        }
        if q.contains("director") {
            if let Some(director) = &personnel.director {
                return Some(format!(
                    "The Director is {}. Teaching interests include {}.",
                    director.name,
                    director.interests.join(", ")
                ));
            }
        }
    }

    if HOD_PATTERN.is_match(&q) && (q.contains("cse") || q.contains("computer")) {
        let cse = campus
            .departments
            .iter()
            .find(|d| d.name.to_lowercase().contains("computer"))?;
        return Some(format!(
            "The HOD of CSE is {}, {}.",
            cse.hod.name, cse.hod.designation
        ));
    }

    None
}

/// Working hours, exam notices, transport and attendance rules.
pub fn schedule_answer(campus: &CampusDataset, query: &str) -> Option<String> {
    let q = query.to_lowercase();
    let schedules = campus.academic_schedules.as_ref();

    if WORKING_HOURS_PATTERN.is_match(&q) {
        if let Some(s) = schedules {
            return Some(format!(
                "College working hours are {}, {}. {} closed.",
                s.working_hours, s.working_days, s.holidays
            ));
        }
    }

    if EXAM_PATTERN.is_match(&q) {
        if let Some(s) = schedules {
            return Some(format!(
                "Recent exam schedules:\n{}",
                s.timetables.exam_branch.recent_notices.join("\n")
            ));
        }
    }

    if TRANSPORT_PATTERN.is_match(&q) {
        if let Some(transport) = &campus.transport {
            return Some(format!(
                "College provides transport service with buses arriving at campus by {}. \
                 Multiple routes are available including via Secunderabad and ECIL. \
                 Contact Transport Section Office for specific route details.",
                transport.arrival_time
            ));
        }
    }

    if ATTENDANCE_PATTERN.is_match(&q) {
        if let Some(s) = schedules {
            return Some(format!("Attendance Rules:\n{}", s.attendance_rules.join("\n")));
        }
    }

    None
}

/// Load what the college handlers need and answer, or `None` when the
/// campus dataset is unavailable or nothing applies.
pub async fn college_answer(repository: &DataRepository, query: &str) -> Option<String> {
    let campus = match repository.load_campus_dataset().await {
        Ok(campus) => campus,
        Err(e) => {
            log::warn!("College query skipped, campus data unavailable: {e}");
            return None;
        }
    };
    let departments = repository.list_departments().await;

    college_reply(&campus, &departments, query)
}

/// The college handler over already-loaded data. `departments` is the
/// directory listing used for branch questions.
pub fn college_reply(
    campus: &CampusDataset,
    departments: &[DepartmentRecord],
    query: &str,
) -> Option<String> {
    if let Some(answer) = faculty_answer(campus, query) {
        return Some(answer);
    }
    if let Some(answer) = schedule_answer(campus, query) {
        return Some(answer);
    }

    let q = query.to_lowercase();
    let college = &campus.college;

    if ESTABLISHED_PATTERN.is_match(&q) {
        let affiliation = college
            .affiliation
            .as_deref()
            .map(|a| format!("affiliated to {a}"))
            .unwrap_or_default();
        return Some(format!(
            "{} was established in {}. It is a {} {}.",
            college.name, college.established_year, college.kind, affiliation
        ));
    }

    if ACCREDITATION_PATTERN.is_match(&q) {
        return Some(format!(
            "The college holds {} accreditation.",
            college.accreditation
        ));
    }

    if CONTACT_PATTERN.is_match(&q) {
        if let Some(site) = &campus.config {
            let contact = college.contact.as_ref();
            let email = contact
                .and_then(|c| c.email.as_deref())
                .unwrap_or(DEFAULT_EMAIL);
            let hours = contact
                .and_then(|c| c.office_timing.as_deref())
                .unwrap_or(DEFAULT_OFFICE_HOURS);
            return Some(strip_line_indent(&format!(
                "Contact Information:
                Principal's Office: {}
                Email: {}
                Office Hours: {}
                Website: {}",
                site.emergency_contacts.principal_office, email, hours, college.website
            )));
        }
    }

    if FACILITIES_PATTERN.is_match(&q) {
        let f = &campus.facilities;
        if let Some(infrastructure) = &f.infrastructure {
            let transport = match &f.transport {
                Some(t) if t.available => "Available",
                _ => "Not available",
            };
            let hostel = match &f.hostel {
                Some(h) if h.available => "Available for both boys and girls",
                _ => "Not available",
            };
            let wifi = f.wifi.as_ref().map(|w| w.coverage.as_str()).unwrap_or("no");
            return Some(strip_line_indent(&format!(
                "Our {} campus features:
                {}

                We also provide:
                - Transport: {}
                - Hostel: {}
                - WiFi: {} coverage",
                infrastructure.campus_area,
                infrastructure.facilities.join(", "),
                transport,
                hostel,
                wifi
            )));
        }
    }

    if ADMISSION_PATTERN.is_match(&q) {
        return Some(strip_line_indent(ADMISSION_INFO));
    }

    if PLACEMENT_PATTERN.is_match(&q) {
        if let Some(placements) = &campus.placements {
            let stats = &placements.statistics;
            return Some(strip_line_indent(&format!(
                "Placement Highlights:
                - {} companies visited
                - {} students placed
                - Highest package: {}
                - Average package: {}

                Top recruiters include: {} and more.",
                stats.companies_visited,
                stats.students_placed,
                stats.highest_package,
                stats.average_package,
                top_recruiters(placements)
            )));
        }
    }

    let branch_names = || {
        departments
            .iter()
            .map(|d| d.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };

    if BRANCH_COUNT_PATTERN.is_match(&q) || q.contains("branches") {
        return Some(format!(
            "We offer {} branches: {}.",
            departments.len(),
            branch_names()
        ));
    }

    if BRANCH_LIST_PATTERN.is_match(&q) || q.contains("list of branches") {
        return Some(format!("Our branches are: {}.", branch_names()));
    }

    if q.contains("pharm") {
        let has_pharmacy = departments
            .iter()
            .any(|d| d.code == "pharmacy" || d.name.to_lowercase().contains("pharm"));
        let answer = if has_pharmacy {
            "Yes — the college has a Pharmacy department."
        } else {
            "No, there is no Pharmacy department listed."
        };
        return Some(answer.to_string());
    }

    if COLLEGE_NAME_PATTERN.is_match(&q) {
        return Some(format!("This is {}.", college.name));
    }

    if LOCATION_PATTERN.is_match(&q) {
        let Some(loc) = &college.location else {
            return Some(NO_LOCATION.to_string());
        };

        let answer = if q.contains("address") {
            format!(
                "The complete address is: {}, {}, {}, {}, {} - {}",
                loc.village, loc.mandal, loc.district, loc.state, loc.country, loc.pin_code
            )
        } else if AREA_PATTERN.is_match(&q) {
            format!("The college is situated in {}, {}", loc.village, loc.mandal)
        } else if REGION_PATTERN.is_match(&q) {
            format!("The college is in {}, {}", loc.district, loc.state)
        } else if DIRECTIONS_PATTERN.is_match(&q) {
            format!(
                "The college is located in {}, {}. It's in {}, {}. You can reach us at PIN: {}",
                loc.village, loc.mandal, loc.district, loc.state, loc.pin_code
            )
        } else {
            format!(
                "We are located in {}, {}, {}",
                loc.village, loc.mandal, loc.district
            )
        };
        return Some(answer);
    }

    None
}
