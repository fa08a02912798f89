//! Test Fixtures
//!
//! Parsed views of the bundled department directory and campus dataset.

use serde_json::Value;

use crate::core::data::{CampusDataset, DepartmentDirectory, DepartmentRecord};

const DEPARTMENTS_DOC: &str = include_str!("../../../data/departments.json");
const CAMPUS_DOC: &str = include_str!("../../../data/campusData.json");

// =============================================================================
// Raw Documents
// =============================================================================

/// `departments.json` as loaded JSON.
pub fn departments_json() -> Value {
    serde_json::from_str(DEPARTMENTS_DOC).expect("bundled departments.json is valid JSON")
}

/// `campusData.json` as loaded JSON.
pub fn campus_json() -> Value {
    serde_json::from_str(CAMPUS_DOC).expect("bundled campusData.json is valid JSON")
}

// =============================================================================
// Typed Documents
// =============================================================================

/// Directory records in listing order: cse, ece, eee, mech, civil.
pub fn department_records() -> Vec<DepartmentRecord> {
    let directory: DepartmentDirectory =
        serde_json::from_value(departments_json()).expect("departments fixture matches schema");
    directory.normalized().records().cloned().collect()
}

pub fn campus_dataset() -> CampusDataset {
    serde_json::from_value(campus_json()).expect("campus fixture matches schema")
}
