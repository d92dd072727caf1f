//! Field selection for person-record queries.
//!
//! Once a query is known to target a specific named person, these selectors
//! decide which single attribute the user wants, or `Full` when none of the
//! keywords appear. Tests run in fixed priority order.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Attribute of a faculty record a query can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FacultyField {
    Expertise,
    Email,
    Designation,
    Full,
}

/// Attribute of a student record a query can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StudentField {
    Elective,
    Branch,
    Enrollment,
    Email,
    Full,
}

static FACULTY_EXPERTISE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bexpertise\b|\barea(?:s)?\s+of\s+interest\b|\binterest\b|\bspecialization\b")
        .expect("Invalid regex: faculty expertise keywords")
});
static FACULTY_EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bemail\b|\bcontact\b|\bmail\b").expect("Invalid regex: faculty email keywords")
});
static FACULTY_DESIGNATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bdesignation\b|\bposition\b|\brole\b")
        .expect("Invalid regex: faculty designation keywords")
});

static STUDENT_ELECTIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\belective\b|\bsubject\b").expect("Invalid regex: student elective keywords")
});
static STUDENT_BRANCH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bbranch\b|\bprogram\b|\bcourse\b")
        .expect("Invalid regex: student branch keywords")
});
static STUDENT_ENROLLMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\benrollment\b|\broll\b").expect("Invalid regex: student enrollment keywords")
});
static STUDENT_EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bemail\b|\bcontact\b").expect("Invalid regex: student email keywords")
});

// Broad attribute probes, deliberately without word boundaries: they gate
// whether a query targets an attribute at all, not which one.
static FACULTY_ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)expertise|email|designation|area|interest|specialization")
        .expect("Invalid regex: faculty attribute probe")
});
static STUDENT_ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)elective|branch|enrollment|email")
        .expect("Invalid regex: student attribute probe")
});

/// Which faculty attribute does the query ask for?
pub fn faculty_field(query: &str) -> FacultyField {
    if FACULTY_EXPERTISE.is_match(query) {
        FacultyField::Expertise
    } else if FACULTY_EMAIL.is_match(query) {
        FacultyField::Email
    } else if FACULTY_DESIGNATION.is_match(query) {
        FacultyField::Designation
    } else {
        FacultyField::Full
    }
}

/// Which student attribute does the query ask for?
pub fn student_field(query: &str) -> StudentField {
    if STUDENT_ELECTIVE.is_match(query) {
        StudentField::Elective
    } else if STUDENT_BRANCH.is_match(query) {
        StudentField::Branch
    } else if STUDENT_ENROLLMENT.is_match(query) {
        StudentField::Enrollment
    } else if STUDENT_EMAIL.is_match(query) {
        StudentField::Email
    } else {
        StudentField::Full
    }
}

/// Does the query mention any faculty attribute keyword at all?
pub fn asks_faculty_attribute(query: &str) -> bool {
    FACULTY_ATTRIBUTE.is_match(query)
}

/// Does the query mention any student attribute keyword at all?
pub fn asks_student_attribute(query: &str) -> bool {
    STUDENT_ATTRIBUTE.is_match(query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faculty_field_priority() {
        assert_eq!(faculty_field("expertise of vidhi"), FacultyField::Expertise);
        assert_eq!(
            faculty_field("area of interest of vidhi"),
            FacultyField::Expertise
        );
        assert_eq!(faculty_field("email of vidhi"), FacultyField::Email);
        assert_eq!(
            faculty_field("what is the designation of jay"),
            FacultyField::Designation
        );
        assert_eq!(faculty_field("who is vidhi"), FacultyField::Full);
    }

    #[test]
    fn test_student_field_priority() {
        assert_eq!(student_field("elective of riya"), StudentField::Elective);
        assert_eq!(student_field("branch of riya"), StudentField::Branch);
        assert_eq!(
            student_field("enrollment no of riya"),
            StudentField::Enrollment
        );
        assert_eq!(student_field("email of riya"), StudentField::Email);
        assert_eq!(student_field("who is riya"), StudentField::Full);
    }

    #[test]
    fn test_attribute_probes_are_substring_based() {
        assert!(asks_faculty_attribute("her areas of interest"));
        assert!(asks_student_attribute("which electives"));
        assert!(!asks_faculty_attribute("who is vidhi"));
        assert!(!asks_student_attribute("who is vidhi"));
    }
}
