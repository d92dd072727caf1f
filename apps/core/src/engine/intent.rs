//! Intent classification over an ordered rule table.
//!
//! Categories are tested in a fixed priority order; the first category whose
//! trigger passes on the derived query context wins. The order is
//! load-bearing: person-specific branches must precede generic list branches,
//! and the fee-threshold branch must precede the named-event branch. Treat
//! the table as data; tests pin the ordering.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

use super::context::QueryContext;
use crate::catalog;

/// Detected query category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Students enrolled in a named program/elective.
    ProgramEnrollment,
    /// "list all students" and friends.
    BulkStudentList,
    /// One attribute of a named person ("expertise of X").
    PersonAttribute,
    /// Full lookup of a named person ("who is X").
    PersonLookup,
    /// Who runs the institute.
    Director,
    /// Faculty roster listing.
    FacultyList,
    /// Academic programs and fees.
    ProgramFees,
    /// Events where AI tools are allowed.
    AiAllowed,
    /// Events cheaper than a stated amount.
    FeeThreshold,
    /// Detail card for one named event.
    EventLookup,
    /// Pointer to the side-by-side comparison page.
    Comparison,
    /// About the institute.
    InstituteAbout,
    /// Category-grouped event listing.
    EventList,
    /// Admission routes and eligibility.
    Admission,
    /// Coordinator/contact excerpt from the rules text.
    CoordinatorContact,
    /// Division student list and lookups.
    StudentList,
    /// Fixed capability menu.
    Fallback,
}

impl Intent {
    /// Returns a stable label for logging.
    pub fn label(&self) -> &'static str {
        match self {
            Intent::ProgramEnrollment => "program_enrollment",
            Intent::BulkStudentList => "bulk_student_list",
            Intent::PersonAttribute => "person_attribute",
            Intent::PersonLookup => "person_lookup",
            Intent::Director => "director",
            Intent::FacultyList => "faculty_list",
            Intent::ProgramFees => "program_fees",
            Intent::AiAllowed => "ai_allowed",
            Intent::FeeThreshold => "fee_threshold",
            Intent::EventLookup => "event_lookup",
            Intent::Comparison => "comparison",
            Intent::InstituteAbout => "institute_about",
            Intent::EventList => "event_list",
            Intent::Admission => "admission",
            Intent::CoordinatorContact => "coordinator_contact",
            Intent::StudentList => "student_list",
            Intent::Fallback => "fallback",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One row of the rule table: an intent and its trigger predicate.
pub struct Rule {
    pub intent: Intent,
    pub trigger: fn(&QueryContext) -> bool,
}

static BULK_STUDENTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)fetch\s+all\s+students|list\s+all\s+students|get\s+all\s+students")
        .expect("Invalid regex: bulk students pattern")
});

/// Does a student-records scan apply for a person lookup?
pub(super) fn student_scan_applies(ctx: &QueryContext) -> bool {
    ctx.from_students
        || (ctx.specific_person && !ctx.from_faculty && !ctx.asks_faculty_attribute)
}

/// Does a faculty-records scan apply for a person lookup?
pub(super) fn faculty_scan_applies(ctx: &QueryContext) -> bool {
    (ctx.from_faculty || (ctx.specific_person && !ctx.from_students)) && !ctx.wants_list
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

fn mentions_event_name(ctx: &QueryContext) -> bool {
    catalog::events().iter().any(|e| {
        ctx.lowered.contains(&e.name.to_lowercase()) || ctx.lowered.contains(&e.id.replace('-', " "))
    })
}

/// The ordered rule table. First trigger to pass decides the intent.
static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        Rule {
            intent: Intent::ProgramEnrollment,
            trigger: |ctx| ctx.program.is_some(),
        },
        Rule {
            intent: Intent::BulkStudentList,
            trigger: |ctx| BULK_STUDENTS.is_match(&ctx.lowered),
        },
        Rule {
            intent: Intent::PersonAttribute,
            trigger: |ctx| {
                ctx.name.is_some()
                    && (ctx.asks_faculty_attribute || ctx.asks_student_attribute)
                    && !ctx.wants_list
            },
        },
        Rule {
            intent: Intent::PersonLookup,
            trigger: |ctx| {
                ctx.name.is_some() && (student_scan_applies(ctx) || faculty_scan_applies(ctx))
            },
        },
        Rule {
            intent: Intent::Director,
            trigger: |ctx| contains_any(&ctx.lowered, &["director", "head"]),
        },
        Rule {
            intent: Intent::FacultyList,
            trigger: |ctx| {
                contains_any(&ctx.lowered, &["faculty", "professor", "teacher"])
                    && !ctx.specific_person
                    && (ctx.wants_list || (ctx.name.is_none() && !ctx.from_faculty))
            },
        },
        Rule {
            intent: Intent::ProgramFees,
            trigger: |ctx| {
                contains_any(
                    &ctx.lowered,
                    &["program", "course", "btech", "b.tech", "mtech", "m.tech", "fee"],
                )
            },
        },
        Rule {
            intent: Intent::AiAllowed,
            trigger: |ctx| contains_any(&ctx.lowered, &["ai allowed", "ai tool", "allow ai"]),
        },
        Rule {
            intent: Intent::FeeThreshold,
            trigger: |ctx| ctx.lowered.contains("under") && ctx.fee_threshold.is_some(),
        },
        Rule {
            intent: Intent::EventLookup,
            trigger: mentions_event_name,
        },
        Rule {
            intent: Intent::Comparison,
            trigger: |ctx| contains_any(&ctx.lowered, &["compare", "vs", "versus", "difference"]),
        },
        Rule {
            intent: Intent::InstituteAbout,
            trigger: |ctx| {
                contains_any(&ctx.lowered, &["amtics", "institute", "college", "about"])
            },
        },
        Rule {
            intent: Intent::EventList,
            trigger: |ctx| contains_any(&ctx.lowered, &["event", "tecxplore", "list"]),
        },
        Rule {
            intent: Intent::Admission,
            trigger: |ctx| contains_any(&ctx.lowered, &["admission", "eligib", "apply"]),
        },
        Rule {
            intent: Intent::CoordinatorContact,
            trigger: |ctx| {
                contains_any(
                    &ctx.lowered,
                    &["coordinator", "contact", "core member", "event head"],
                )
            },
        },
        Rule {
            intent: Intent::StudentList,
            trigger: |ctx| {
                contains_any(
                    &ctx.lowered,
                    &["student", "elective", "sem 4", "division", "enrollment"],
                )
            },
        },
        Rule {
            intent: Intent::Fallback,
            trigger: |_| true,
        },
    ]
});

/// The rule table in evaluation order.
pub fn rules() -> &'static [Rule] {
    &RULES
}

/// Intent classifier over the ordered rule table.
#[derive(Debug, Default)]
pub struct IntentClassifier;

impl IntentClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classify a derived query context. First matching rule wins; the table
    /// ends with an always-true fallback, so every query gets a category.
    pub fn classify(&self, ctx: &QueryContext) -> Intent {
        rules()
            .iter()
            .find(|rule| (rule.trigger)(ctx))
            .map(|rule| rule.intent)
            .unwrap_or(Intent::Fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(query: &str) -> Intent {
        IntentClassifier::new().classify(&QueryContext::parse(query))
    }

    #[test]
    fn test_program_enrollment_beats_student_list() {
        assert_eq!(
            classify("who are enrolled in cyber security program?"),
            Intent::ProgramEnrollment
        );
        assert_eq!(
            classify("students in machine learning"),
            Intent::ProgramEnrollment
        );
    }

    #[test]
    fn test_bulk_list_without_program() {
        assert_eq!(classify("list all students"), Intent::BulkStudentList);
        assert_eq!(classify("fetch all students"), Intent::BulkStudentList);
    }

    #[test]
    fn test_person_branches_precede_list_branches() {
        // A query with both a student word and a name must resolve to a
        // person branch, not the generic student list.
        assert_eq!(
            classify("who is vidhi from students"),
            Intent::PersonLookup
        );
        assert_eq!(
            classify("expertise of ms vidhi sutaria"),
            Intent::PersonAttribute
        );
    }

    #[test]
    fn test_director_and_faculty_list() {
        assert_eq!(classify("director of amtics contact"), Intent::Director);
        assert_eq!(classify("list faculty and their expertise"), Intent::FacultyList);
    }

    #[test]
    fn test_event_branches() {
        assert_eq!(classify("which events allow ai tools?"), Intent::AiAllowed);
        assert_eq!(classify("events under ₹100"), Intent::FeeThreshold);
        // Classified as a person lookup; the responder falls through to the
        // event card when no person matches.
        assert_eq!(
            classify("tell me about the chatbot challenge"),
            Intent::PersonLookup
        );
        assert_eq!(classify("chatbot challenge fee details"), Intent::ProgramFees);
        assert_eq!(classify("what events are available at tecxplore 3.0?"), Intent::EventList);
    }

    #[test]
    fn test_fallback_for_unrecognized() {
        assert_eq!(classify("tum tum tum"), Intent::Fallback);
        assert_eq!(classify(""), Intent::Fallback);
    }
}
