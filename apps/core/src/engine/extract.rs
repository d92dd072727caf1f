//! Entity extraction from free-text queries.
//!
//! Two ordered pattern lists: one for person names ("who is X", "expertise of
//! X", "X's email", "Ms X ..."), one for program/elective names ("enrolled in
//! X", "students in X", "X students"). The first pattern whose capture
//! survives the cleanup pass wins. Pattern order is load-bearing; treat the
//! lists as data and append with care.

use regex::Regex;
use std::sync::LazyLock;

static NAME_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"(?i)who is (.+?)(?:\s+from|\s+in|\s*$)")
            .expect("Invalid regex: who-is pattern"),
        Regex::new(r"(?i)tell me about (.+?)(?:\s+from|\s+in|\s*$)")
            .expect("Invalid regex: tell-me-about pattern"),
        Regex::new(r"(?i)find (.+?)(?:\s+from|\s+in|\s*$)").expect("Invalid regex: find pattern"),
        Regex::new(r"(?i)show (.+?)(?:\s+from|\s+in|\s*$)").expect("Invalid regex: show pattern"),
        Regex::new(r"(?i)(.+?)(?:\s+from|\s+in)\s+(?:students|faculty|student|professor)")
            .expect("Invalid regex: name-from-audience pattern"),
        // "what are expertise of ms vidhi sutaria", "give me the email of X"
        Regex::new(r"(?i)(?:what are|what is|tell me|get me|give me)\s+(?:the\s+)?(?:expertise|expertise of|email|email of|designation|designation of)\s+(?:of\s+)?(.+?)(?:\s*\?|\s*$)")
            .expect("Invalid regex: attribute-question pattern"),
        Regex::new(r"(?i)(?:expertise|email|designation|area|interest)s?\s+of\s+(.+?)(?:\s*\?|\s*$)")
            .expect("Invalid regex: attribute-of pattern"),
        Regex::new(r"(?i)(.+?)'s\s+(?:expertise|email|designation|areas?|interest)")
            .expect("Invalid regex: possessive-attribute pattern"),
        // "ms vidhi sutaria expertise", "dr. bakrola's email"
        Regex::new(r"(?i)(?:mr|mrs|ms|dr)\.?\s*(.+?)(?:\s+(?:expertise|email|designation)|\s*'s|\s*$)")
            .expect("Invalid regex: titled-name pattern"),
        Regex::new(r"(?i)^(.+?)\s+(?:expertise|email|designation)\s*$")
            .expect("Invalid regex: trailing-attribute pattern"),
    ]
});

static NAME_TRAILER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\s+(?:from|in|students|faculty|student|professor|designation|email|expertise|area|interest).*$")
        .expect("Invalid regex: name trailer")
});

static POSSESSIVE_TRAILER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)'s\s*$").expect("Invalid regex: possessive trailer"));

// Captures made of nothing but these words are noise, not names.
const NAME_STOPWORDS: &[&str] = &[
    "the", "a", "an", "of", "and", "or", "is", "are", "was", "were", "who", "what", "which", "all",
    "every", "list", "me", "my", "please",
];

static PROGRAM_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        // "who are enrolled in cyber security program"
        Regex::new(r"(?i)who\s+(?:are|is)\s+enrolled\s+in\s+(?:the\s+)?(.+?)(?:\s+program)?\s*$")
            .expect("Invalid regex: who-enrolled-in pattern"),
        // "students enrolled in X" / "list students enrolled in X"
        Regex::new(r"(?i)(?:fetch\s+all\s+)?(?:list\s+)?(?:all\s+)?students?\s+enrolled\s+in\s+(?:the\s+)?(.+?)(?:\s+program)?\s*$")
            .expect("Invalid regex: students-enrolled-in pattern"),
        Regex::new(r"(?i)enrolled\s+in\s+(?:the\s+)?(.+?)(?:\s+program)?\s*$")
            .expect("Invalid regex: enrolled-in pattern"),
        Regex::new(r"(?i)who\s+(?:are|is)\s+in\s+(?:the\s+)?(.+?)(?:\s+program)?\s*$")
            .expect("Invalid regex: who-are-in pattern"),
        // "fetch all students in cyber security program" / "students in CSE"
        Regex::new(r"(?i)(?:fetch\s+all\s+)?(?:list\s+)?(?:all\s+)?students?\s+in\s+(?:the\s+)?(.+?)(?:\s+program)?\s*$")
            .expect("Invalid regex: students-in pattern"),
        Regex::new(r"(?i)students?\s+in\s+(?:the\s+)?(.+?)(?:\s+program)?\s*$")
            .expect("Invalid regex: bare-students-in pattern"),
        // "cyber security students"
        Regex::new(r"(?i)(.+?)\s+students?\s*$").expect("Invalid regex: leading-program pattern"),
    ]
});

static TRAILING_PUNCT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[?.!]+$").expect("Invalid regex: trailing punctuation"));

static TRAILING_PROGRAM_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\s+program\s*$").expect("Invalid regex: trailing program word")
});

const PROGRAM_STOPWORDS: &[&str] = &[
    "the", "a", "an", "all", "list", "fetch", "show", "get", "who", "are", "is", "student",
    "students", "enrolled", "in",
];

// Person-query verbiage leaking into a program capture ("who is vidhi from"
// out of "who is vidhi from students") means the query targets a person, not
// a program.
static PERSON_PHRASING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)who is|who are|tell me about|find|show|details of|information about")
        .expect("Invalid regex: person phrasing probe")
});

fn is_stopword(word: &str, stoplist: &[&str]) -> bool {
    let lower = word.to_lowercase();
    stoplist.contains(&lower.as_str())
}

fn all_stopwords(capture: &str, stoplist: &[&str]) -> bool {
    capture
        .split_whitespace()
        .all(|word| is_stopword(word, stoplist))
}

fn clean_name(capture: &str) -> String {
    let stripped = NAME_TRAILER.replace(capture.trim(), "");
    let stripped = POSSESSIVE_TRAILER.replace(&stripped, "");
    stripped.trim().to_string()
}

/// Extracts a person name from the query, or `None` when no pattern yields a
/// usable capture. Captures of two characters or fewer, and captures made
/// entirely of determiner/verb noise, are rejected.
pub fn person_name(query: &str) -> Option<String> {
    for pattern in NAME_PATTERNS.iter() {
        if let Some(m) = pattern.captures(query).and_then(|c| c.get(1)) {
            let name = clean_name(m.as_str());
            if name.len() > 2 && !all_stopwords(&name, NAME_STOPWORDS) {
                return Some(name);
            }
        }
    }
    None
}

fn clean_program(capture: &str) -> String {
    let stripped = TRAILING_PUNCT.replace(capture.trim(), "");
    let stripped = TRAILING_PROGRAM_WORD.replace(stripped.trim(), "");
    stripped.trim().to_string()
}

/// Extracts a program/elective name from the query ("cyber security", "CSE",
/// "machine learning"), or `None`. Single stop words and captures made
/// entirely of stop words are rejected so "list all students" is not read as
/// a program called "list all".
pub fn program_name(query: &str) -> Option<String> {
    let clean_query = TRAILING_PUNCT.replace(query.trim(), "");
    for pattern in PROGRAM_PATTERNS.iter() {
        if let Some(m) = pattern.captures(&clean_query).and_then(|c| c.get(1)) {
            let program = clean_program(m.as_str());
            if program.len() > 1
                && !all_stopwords(&program, PROGRAM_STOPWORDS)
                && !PERSON_PHRASING.is_match(&program)
            {
                return Some(program);
            }
        }
    }
    None
}
