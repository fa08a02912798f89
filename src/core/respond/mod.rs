//! Response Formatting
//!
//! Turns looked-up data into the reply text: directory templates, keyword
//! phrasing over the campus dataset, college-level handlers and canned
//! small talk.

pub mod college;
pub mod conversation;
pub mod department;
pub mod keyword;

pub use college::{college_answer, college_reply, faculty_answer, schedule_answer};
pub use department::{format_department, NO_INFORMATION};
pub use keyword::{find_information, format_keyword, Fragment, Section, KEYWORD_ROUTES, NOT_SURE};
