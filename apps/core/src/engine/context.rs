//! Per-query derived context.
//!
//! Everything the rule table and the responder need to know about a query is
//! computed once, up front: the lowered text, extracted entities, selected
//! fields and audience flags. The context is a pure function of the query
//! string; no dataset access happens here.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

use super::extract;
use super::fields::{self, FacultyField, StudentField};
use super::matching;

static SPECIFIC_PERSON: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)who is|tell me about|find|show|details of|information about")
        .expect("Invalid regex: specific person probe")
});

static LIST_WORDS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)list|all|every").expect("Invalid regex: list words probe"));

/// Everything derived from a single query string.
#[derive(Debug, Clone, Serialize)]
pub struct QueryContext {
    /// The query as received.
    pub raw: String,
    /// Lower-cased query, the form all keyword triggers test against.
    pub lowered: String,
    /// Extracted person name, if any pattern matched.
    pub name: Option<String>,
    /// Extracted program/elective name, if any pattern matched.
    pub program: Option<String>,
    /// Faculty attribute the query asks for.
    pub faculty_field: FacultyField,
    /// Student attribute the query asks for.
    pub student_field: StudentField,
    /// Query mentions some faculty attribute keyword.
    pub asks_faculty_attribute: bool,
    /// Query mentions some student attribute keyword.
    pub asks_student_attribute: bool,
    /// Query is scoped to students ("from students", or "student" without a
    /// faculty word).
    pub from_students: bool,
    /// Query is scoped to faculty ("from faculty", or a faculty word without
    /// a student scope).
    pub from_faculty: bool,
    /// Query asks about one specific person rather than a list.
    pub specific_person: bool,
    /// Query contains a listing word ("list"/"all").
    pub wants_list: bool,
    /// Enrollment-number token (≥10 digits) found in the query.
    pub enrollment: Option<String>,
    /// Fee threshold parsed from an "under ₹N" phrase.
    pub fee_threshold: Option<u64>,
}

impl QueryContext {
    /// Derive the full context for one query.
    pub fn parse(query: &str) -> Self {
        let raw = query.trim().to_string();
        let lowered = raw.to_lowercase();

        let from_students = lowered.contains("from students")
            || (lowered.contains("student")
                && !lowered.contains("faculty")
                && !lowered.contains("professor"));
        let from_faculty = lowered.contains("from faculty")
            || ((lowered.contains("faculty") || lowered.contains("professor"))
                && !lowered.contains("from students"));
        let specific_person =
            SPECIFIC_PERSON.is_match(&lowered) && !LIST_WORDS.is_match(&lowered);
        let wants_list = lowered.contains("list") || lowered.contains("all");

        Self {
            name: extract::person_name(&raw),
            program: extract::program_name(&raw),
            faculty_field: fields::faculty_field(&lowered),
            student_field: fields::student_field(&lowered),
            asks_faculty_attribute: fields::asks_faculty_attribute(&lowered),
            asks_student_attribute: fields::asks_student_attribute(&lowered),
            enrollment: matching::enrollment_token(&raw),
            fee_threshold: matching::fee_threshold(&lowered),
            from_students,
            from_faculty,
            specific_person,
            wants_list,
            raw,
            lowered,
        }
    }

    /// True when the query is empty or whitespace-only. Callers are expected
    /// to guard before invoking the engine; the engine still answers the
    /// capability menu if they do not.
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audience_flags() {
        let ctx = QueryContext::parse("who is vidhi from students");
        assert!(ctx.from_students);
        assert!(!ctx.from_faculty);

        let ctx = QueryContext::parse("who is vidhi from faculty");
        assert!(ctx.from_faculty);
        assert!(!ctx.from_students);

        // A bare faculty word scopes to faculty, a bare student word to students.
        let ctx = QueryContext::parse("professor vidhi details");
        assert!(ctx.from_faculty);
    }

    #[test]
    fn test_specific_person_excludes_lists() {
        assert!(QueryContext::parse("who is vidhi sutaria").specific_person);
        assert!(!QueryContext::parse("list all faculty").specific_person);
        assert!(!QueryContext::parse("show all events").specific_person);
    }

    #[test]
    fn test_entities_and_fields_populated() {
        let ctx = QueryContext::parse("what are expertise of ms vidhi sutaria");
        assert_eq!(ctx.name.as_deref(), Some("ms vidhi sutaria"));
        assert_eq!(ctx.faculty_field, FacultyField::Expertise);
        assert!(ctx.asks_faculty_attribute);
    }

    #[test]
    fn test_enrollment_and_threshold() {
        let ctx = QueryContext::parse("enrollment no 202403103510225");
        assert_eq!(ctx.enrollment.as_deref(), Some("202403103510225"));

        let ctx = QueryContext::parse("events under ₹100");
        assert_eq!(ctx.fee_threshold, Some(100));
    }
}
