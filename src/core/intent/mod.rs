//! Intent Classification
//!
//! Query intents, extracted entities, and the ordered rule classifier.

mod classifier;

pub use classifier::IntentClassifier;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ============================================================================
// Types
// ============================================================================

/// Classified purpose of a user query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Greeting,
    Farewell,
    Help,
    CollegeEstablishment,
    CollegeAccreditation,
    CollegeContact,
    CollegeFacilities,
    CollegeAdmission,
    CollegePlacement,
    CollegeLocation,
    FacultyQuery,
    ExamSchedule,
    AttendanceRules,
    TransportSchedule,
    WorkingHours,
    HodQuery,
    CollegeBranches,
    CollegePharmacy,
    CollegeInfo,
    FacilityQuery,
    DepartmentQuery,
    General,
}

impl Intent {
    /// Wire name of this intent.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Greeting => "greeting",
            Self::Farewell => "farewell",
            Self::Help => "help",
            Self::CollegeEstablishment => "college_establishment",
            Self::CollegeAccreditation => "college_accreditation",
            Self::CollegeContact => "college_contact",
            Self::CollegeFacilities => "college_facilities",
            Self::CollegeAdmission => "college_admission",
            Self::CollegePlacement => "college_placement",
            Self::CollegeLocation => "college_location",
            Self::FacultyQuery => "faculty_query",
            Self::ExamSchedule => "exam_schedule",
            Self::AttendanceRules => "attendance_rules",
            Self::TransportSchedule => "transport_schedule",
            Self::WorkingHours => "working_hours",
            Self::HodQuery => "hod_query",
            Self::CollegeBranches => "college_branches",
            Self::CollegePharmacy => "college_pharmacy",
            Self::CollegeInfo => "college_info",
            Self::FacilityQuery => "facility_query",
            Self::DepartmentQuery => "department_query",
            Self::General => "general",
        }
    }

    /// Intents answered by the college-level handler.
    pub fn is_college_level(&self) -> bool {
        matches!(
            self,
            Self::CollegeLocation
                | Self::CollegeEstablishment
                | Self::CollegeAccreditation
                | Self::CollegeContact
                | Self::CollegeFacilities
                | Self::CollegeAdmission
                | Self::CollegePlacement
                | Self::CollegeBranches
                | Self::CollegePharmacy
                | Self::CollegeInfo
        )
    }
}

/// Names of values extracted from a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Department,
    Role,
}

/// Outcome of classifying one query. An empty entity map means no entity
/// was extracted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentResult {
    pub intent: Intent,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub entities: BTreeMap<EntityKind, String>,
}

impl IntentResult {
    pub fn new(intent: Intent) -> Self {
        Self {
            intent,
            entities: BTreeMap::new(),
        }
    }

    /// Attach an entity when one was found.
    pub fn with_entity(mut self, kind: EntityKind, value: Option<String>) -> Self {
        if let Some(value) = value {
            self.entities.insert(kind, value);
        }
        self
    }

    pub fn entity(&self, kind: EntityKind) -> Option<&str> {
        self.entities.get(&kind).map(String::as_str)
    }

    /// Resolved department code, if any.
    pub fn department(&self) -> Option<&str> {
        self.entity(EntityKind::Department)
    }

    /// Matched staff role, if any.
    pub fn role(&self) -> Option<&str> {
        self.entity(EntityKind::Role)
    }
}
