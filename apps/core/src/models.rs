use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Represents one faculty member as loaded from the faculty source.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FacultyRecord {
    /// Full name, usually with a title prefix ("Dr.", "Ms.", ...).
    pub name: String,
    /// Position at the institute (e.g. "Assistant Professor").
    pub designation: String,
    /// Institutional email address.
    pub email: String,
    /// Free-text list of expertise / areas of interest.
    pub expertise: String,
}

/// Represents one student row from the division source.
///
/// Identity is the enrollment number when present, else the name.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct StudentRecord {
    /// Serial number column, kept verbatim.
    pub sr_no: String,
    /// Institutional email address.
    pub email: String,
    /// Full student name.
    pub name: String,
    /// Enrollment number; stored values may contain stray whitespace.
    pub enrollment_no: String,
    /// Branch / admitted program.
    pub branch: String,
    /// Programme Elective IV.
    pub elective4: String,
    /// Programme Elective II.
    pub elective2: String,
    /// Industrial Practice & Skills elective.
    pub industrial_practice: String,
}

/// Category of a fest event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventCategory {
    Technical,
    NonTechnical,
    Robotics,
    Esports,
    Funzone,
}

impl EventCategory {
    /// Returns the display heading used when grouping events.
    pub fn heading(&self) -> &'static str {
        match self {
            EventCategory::Technical => "Technical",
            EventCategory::NonTechnical => "Non-Technical",
            EventCategory::Robotics => "Robotics",
            EventCategory::Esports => "E-Sports",
            EventCategory::Funzone => "Fun Zone",
        }
    }

    /// Returns the lowercase tag used in answer text.
    pub fn label(&self) -> &'static str {
        match self {
            EventCategory::Technical => "technical",
            EventCategory::NonTechnical => "non-technical",
            EventCategory::Robotics => "robotics",
            EventCategory::Esports => "esports",
            EventCategory::Funzone => "funzone",
        }
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Represents one fest event. Fully static, compiled into the catalog.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct EventRecord {
    /// Unique slug (e.g. "robo-soccer").
    pub id: String,
    /// Display name.
    pub name: String,
    /// Event category.
    pub category: EventCategory,
    /// Short description of the event.
    pub synopsis: String,
    /// Human-readable team size ("Individual", "2-3 members", ...).
    pub team_size: String,
    /// Entry fee as a currency-prefixed string (e.g. "₹70").
    pub fee: String,
    /// Whether AI tools are allowed.
    pub ai_allowed: bool,
    /// Whether the event is played individually.
    pub individual: bool,
    /// Judging criteria in presentation order.
    pub judging_criteria: Vec<String>,
    /// Event rules in presentation order.
    pub rules: Vec<String>,
    /// Contact person for the event, if published.
    pub contact_person: Option<String>,
    /// Contact phone for the event, if published.
    pub contact_phone: Option<String>,
    /// Extra key/value specifications (arena size, match duration, ...).
    pub additional_info: Option<BTreeMap<String, String>>,
}

/// Kind of academic program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProgramKind {
    Ug,
    Pg,
    Integrated,
}

/// Represents one academic program offered by the institute.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Program {
    /// Program name (e.g. "B.Tech Cyber Security").
    pub name: String,
    /// Duration ("4 Years", ...).
    pub duration: String,
    /// Fee as published.
    pub fee: String,
    /// UG / PG / Integrated.
    pub kind: ProgramKind,
    /// One-line description.
    pub description: String,
}

/// Static facts about the institute, compiled into the catalog.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct InstituteInfo {
    pub name: String,
    pub short_name: String,
    pub university: String,
    pub location: String,
    pub accreditation: String,
    pub overview: String,
    pub admission_routes: Vec<String>,
    pub eligibility: String,
}
