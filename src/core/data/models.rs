//! Document Models
//!
//! Typed views of the department directory and the campus dataset. Optional
//! sections are explicit `Option`s; a document that does not fit these
//! shapes is rejected at load time.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// ============================================================================
// Shared
// ============================================================================

/// A display value that the documents store either as a number or as text
/// (years, head counts, PIN codes). Rendered verbatim either way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Figure {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for Figure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

// ============================================================================
// Department Directory
// ============================================================================

/// Root of `departments.json`, keyed by lowercase department code in
/// document order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DepartmentDirectory {
    #[serde(default)]
    pub departments: IndexMap<String, DepartmentRecord>,
}

impl DepartmentDirectory {
    /// Lowercase every key and copy it into the record's `code`.
    pub(crate) fn normalized(self) -> Self {
        let departments = self
            .departments
            .into_iter()
            .map(|(code, mut record)| {
                let code = code.to_lowercase();
                record.code = code.clone();
                (code, record)
            })
            .collect();
        Self { departments }
    }

    /// Case-insensitive lookup by department code.
    pub fn get(&self, code: &str) -> Option<&DepartmentRecord> {
        self.departments.get(&code.to_lowercase())
    }

    /// Records in listing order.
    pub fn records(&self) -> impl Iterator<Item = &DepartmentRecord> {
        self.departments.values()
    }

    pub fn len(&self) -> usize {
        self.departments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.departments.is_empty()
    }
}

/// One academic department.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentRecord {
    /// Filled from the directory key.
    #[serde(default)]
    pub code: String,
    pub name: String,
    pub location: String,
    #[serde(default)]
    pub programs: Vec<String>,
    pub contact: DepartmentContact,
    pub hod: HodRecord,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentContact {
    pub email: String,
    pub phone: String,
    pub fax: String,
}

/// Head of a department. Only reachable through its department.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HodRecord {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub office: String,
    pub office_hours: String,
    #[serde(default)]
    pub qualifications: Vec<String>,
    #[serde(default)]
    pub specializations: Vec<String>,
    pub experience: String,
}

// ============================================================================
// Campus Dataset
// ============================================================================

/// Root of `campusData.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampusDataset {
    pub college: College,
    pub config: Option<SiteConfig>,
    pub academic_schedules: Option<AcademicSchedules>,
    pub transport: Option<TransportSchedule>,
    #[serde(default)]
    pub facilities: Facilities,
    pub placements: Option<Placements>,
    #[serde(default)]
    pub departments: Vec<CampusDepartment>,
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub exam_schedules: Vec<ExamSchedule>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct College {
    pub name: String,
    pub established_year: Figure,
    #[serde(rename = "type")]
    pub kind: String,
    pub affiliation: Option<String>,
    pub accreditation: String,
    pub website: String,
    pub contact: Option<CollegeContact>,
    pub location: Option<CollegeLocation>,
    #[serde(default)]
    pub key_personnel: KeyPersonnel,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollegeContact {
    pub email: Option<String>,
    pub office_timing: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollegeLocation {
    pub village: String,
    pub mandal: String,
    pub district: String,
    pub state: String,
    pub country: String,
    pub pin_code: Figure,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeyPersonnel {
    pub principal: Option<Principal>,
    pub director: Option<Director>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Principal {
    pub name: String,
    #[serde(default)]
    pub qualifications: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Director {
    pub name: String,
    #[serde(default)]
    pub interests: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub emergency_contacts: EmergencyContacts,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyContacts {
    pub principal_office: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcademicSchedules {
    pub working_hours: String,
    pub working_days: String,
    pub holidays: String,
    #[serde(default)]
    pub timetables: Timetables,
    #[serde(default)]
    pub attendance_rules: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Timetables {
    #[serde(default)]
    pub exam_branch: ExamBranch,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExamBranch {
    #[serde(default)]
    pub recent_notices: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportSchedule {
    pub arrival_time: String,
}

/// Facility sections; each may be missing from a given dataset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Facilities {
    pub infrastructure: Option<Infrastructure>,
    pub transport: Option<TransportFacility>,
    pub hostel: Option<Hostel>,
    pub wifi: Option<Wifi>,
    pub library: Option<Library>,
    pub canteen: Option<Canteen>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Infrastructure {
    pub campus_area: String,
    #[serde(default)]
    pub facilities: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransportFacility {
    #[serde(default)]
    pub available: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hostel {
    #[serde(default)]
    pub available: bool,
    #[serde(default)]
    pub facilities: Vec<String>,
    #[serde(default)]
    pub types: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wifi {
    pub coverage: String,
    pub access: String,
    pub support: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Library {
    pub name: String,
    pub location: String,
    pub timings: String,
    #[serde(default)]
    pub resources: Vec<String>,
}

/// The canteen entry is free-form: either a plain description or a
/// details object.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Canteen {
    Text(String),
    Details(CanteenDetails),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CanteenDetails {
    pub name: Option<String>,
    pub location: Option<String>,
    pub timings: Option<String>,
    #[serde(default)]
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Placements {
    pub statistics: PlacementStatistics,
    #[serde(default)]
    pub top_recruiters: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementStatistics {
    pub companies_visited: Figure,
    pub students_placed: Figure,
    pub highest_package: String,
    pub average_package: String,
    pub placement_rate: String,
}

/// Campus-level department summary (distinct from the directory record).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampusDepartment {
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub programs: Vec<String>,
    #[serde(default)]
    pub contact: CampusContact,
    pub hod: CampusHod,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CampusContact {
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampusHod {
    pub name: String,
    pub designation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub name: String,
    pub date: String,
    pub venue: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExamSchedule {
    pub name: String,
    pub date: String,
    pub venue: String,
}
