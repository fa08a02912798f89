//! Department and HOD answers rendered from the department directory.

use crate::core::data::DepartmentRecord;
use crate::core::text::strip_line_indent;

pub const NO_INFORMATION: &str = "I apologize, but I don't have that information.";

/// Render a directory record. Queries mentioning "hod" get the HOD profile,
/// anything else the department overview.
pub fn format_department(record: Option<&DepartmentRecord>, query: &str) -> String {
    let Some(info) = record else {
        return NO_INFORMATION.to_string();
    };

    if query.to_lowercase().contains("hod") {
        let hod = &info.hod;
        return strip_line_indent(&format!(
            "
            The Head of Department (HOD) for {} is {}.

            Contact Information:
            - Email: {}
            - Phone: {}
            - Office: {}
            - Office Hours: {}

            Qualifications:
            {}

            Specializations:
            {}

            Experience:
            {}
            ",
            info.name,
            hod.name,
            hod.email,
            hod.phone,
            hod.office,
            hod.office_hours,
            hod.qualifications.join(", "),
            hod.specializations.join(", "),
            hod.experience,
        ));
    }

    strip_line_indent(&format!(
        "
        Department: {}
        Location: {}

        Programs Offered:
        {}

        Contact Information:
        - Email: {}
        - Phone: {}
        - Fax: {}
        ",
        info.name,
        info.location,
        info.programs.join(", "),
        info.contact.email,
        info.contact.phone,
        info.contact.fax,
    ))
}
