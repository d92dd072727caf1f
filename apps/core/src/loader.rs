//! Dataset snapshot and its owning loader.
//!
//! The loader reads the faculty CSV, the division CSV candidates and the raw
//! rules text once, caches the resulting snapshot, and hands out `Arc` clones
//! until the cache is cleared. Each source degrades independently: a missing
//! or unparsable file yields an empty collection and a note on the snapshot,
//! never a failed load.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};
use validator::Validate;

use crate::error::AppError;
use crate::models::{FacultyRecord, StudentRecord};

/// Where the data sources live. Loadable from JSON, validated before use.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SourcesConfig {
    /// Directory holding the data files.
    pub data_dir: PathBuf,
    /// Faculty CSV file name.
    #[validate(length(min = 1))]
    pub faculty_file: String,
    /// Raw events-rules text file name.
    #[validate(length(min = 1))]
    pub rules_file: String,
    /// Candidate division CSVs; the first yielding at least one row wins.
    #[validate(length(min = 1))]
    pub student_files: Vec<String>,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            faculty_file: "faculty.csv".to_string(),
            rules_file: "events_rules.txt".to_string(),
            student_files: vec![
                "sem4_division.csv".to_string(),
                "sem4_division_1.csv".to_string(),
                "sem4_division_2.csv".to_string(),
            ],
        }
    }
}

impl SourcesConfig {
    /// Load and validate a configuration from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self, AppError> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }
}

/// Immutable, point-in-time collection of campus data the engine answers from.
#[derive(Debug, Clone, Serialize)]
pub struct CampusSnapshot {
    /// Faculty records; empty when the faculty source degraded.
    pub faculty: Vec<FacultyRecord>,
    /// Student records; empty when no division source yielded rows.
    pub students: Vec<StudentRecord>,
    /// Raw events-rules text; empty when absent.
    pub events_rules_text: String,
    /// Whether a load completed (even a degraded one).
    pub loaded: bool,
    /// Non-fatal notes about sources that failed to load.
    pub error: Option<String>,
    /// When the load finished.
    pub loaded_at: DateTime<Utc>,
}

impl CampusSnapshot {
    /// A snapshot with no data, as before the first load.
    pub fn empty() -> Self {
        Self {
            faculty: Vec::new(),
            students: Vec::new(),
            events_rules_text: String::new(),
            loaded: false,
            error: None,
            loaded_at: Utc::now(),
        }
    }
}

/// Resolve a column by case-insensitive substring match on the header name.
fn header_index(headers: &csv::StringRecord, needles: &[&str]) -> Option<usize> {
    headers.iter().position(|header| {
        let lowered = header.to_lowercase();
        needles.iter().any(|needle| lowered.contains(needle))
    })
}

fn parse_faculty_csv(text: &str) -> Result<Vec<FacultyRecord>, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes());
    let headers = reader.headers()?.clone();
    let name_idx = header_index(&headers, &["name"]);
    let designation_idx = header_index(&headers, &["designation"]);
    let email_idx = header_index(&headers, &["email"]);
    let expertise_idx = header_index(&headers, &["interest", "expertise", "areas"]);
    let (Some(name_idx), Some(email_idx)) = (name_idx, email_idx) else {
        return Ok(Vec::new());
    };

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let cell = |idx: Option<usize>| -> String {
            idx.and_then(|i| row.get(i)).unwrap_or("").trim().to_string()
        };
        let name = cell(Some(name_idx));
        if name.is_empty() {
            continue;
        }
        let designation = cell(designation_idx);
        records.push(FacultyRecord {
            name,
            designation: if designation.is_empty() {
                "Assistant Professor".to_string()
            } else {
                designation
            },
            email: cell(Some(email_idx)),
            expertise: cell(expertise_idx),
        });
    }
    Ok(records)
}

fn parse_students_csv(text: &str) -> Result<Vec<StudentRecord>, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes());
    let headers = reader.headers()?.clone();

    // Value-level fallback: try each key set in turn until a non-empty cell
    // shows up, mirroring how messy division exports name their columns.
    let cell = |row: &csv::StringRecord, keysets: &[&[&str]]| -> String {
        for keys in keysets {
            if let Some(idx) = header_index(&headers, keys) {
                let value = row.get(idx).unwrap_or("").trim();
                if !value.is_empty() {
                    return value.to_string();
                }
            }
        }
        String::new()
    };

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let enrollment_no = cell(&row, &[&["enrollment"]]);
        let name = cell(&row, &[&["student name"], &["name"]]);
        if enrollment_no.is_empty() && name.is_empty() {
            continue;
        }
        records.push(StudentRecord {
            sr_no: cell(&row, &[&["sr"], &["no"]]),
            email: cell(&row, &[&["email"]]),
            name,
            enrollment_no,
            branch: cell(&row, &[&["branch"], &["admitted"]]),
            elective4: cell(&row, &[&["elective iv"], &["programme elective iv"]]),
            elective2: cell(&row, &[&["elective ii"], &["programme elective ii"]]),
            industrial_practice: cell(&row, &[&["industrial"], &["skills"]]),
        });
    }
    Ok(records)
}

async fn load_faculty(config: &SourcesConfig) -> Result<Vec<FacultyRecord>, AppError> {
    let path = config.data_dir.join(&config.faculty_file);
    let text = tokio::fs::read_to_string(&path).await?;
    parse_faculty_csv(&text)
}

async fn load_rules_text(config: &SourcesConfig) -> Result<String, AppError> {
    let path = config.data_dir.join(&config.rules_file);
    Ok(tokio::fs::read_to_string(&path).await?)
}

async fn load_students(config: &SourcesConfig) -> Result<Vec<StudentRecord>, AppError> {
    for name in &config.student_files {
        let path = config.data_dir.join(name);
        let parsed = match tokio::fs::read_to_string(&path).await {
            Ok(text) => parse_students_csv(&text),
            Err(err) => Err(err.into()),
        };
        match parsed {
            Ok(records) if !records.is_empty() => return Ok(records),
            Ok(_) => {}
            Err(err) => {
                debug!(file = %path.display(), error = %err, "division candidate unavailable");
            }
        }
    }
    Ok(Vec::new())
}

/// Owns the cached snapshot. Load once, hand out `Arc` clones, reset on
/// `clear`. Concurrent first callers serialize on the internal lock, so a
/// single in-flight load serves all of them.
pub struct SnapshotLoader {
    config: SourcesConfig,
    cached: Mutex<Option<Arc<CampusSnapshot>>>,
}

impl SnapshotLoader {
    pub fn new(config: SourcesConfig) -> Self {
        Self {
            config,
            cached: Mutex::new(None),
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(SourcesConfig::default())
    }

    /// Returns the cached snapshot, loading it first if necessary. A snapshot
    /// that carries a source error is not treated as authoritative: the next
    /// call retries the load.
    pub async fn load(&self) -> Arc<CampusSnapshot> {
        let mut cached = self.cached.lock().await;
        if let Some(snapshot) = cached.as_ref() {
            if snapshot.loaded && snapshot.error.is_none() {
                return Arc::clone(snapshot);
            }
        }
        let snapshot = Arc::new(self.fetch_all().await);
        *cached = Some(Arc::clone(&snapshot));
        snapshot
    }

    /// Returns the cached snapshot without loading.
    pub async fn cached(&self) -> Option<Arc<CampusSnapshot>> {
        self.cached.lock().await.clone()
    }

    /// Drops the cached snapshot; the next `load` fetches fresh data.
    pub async fn clear(&self) {
        *self.cached.lock().await = None;
    }

    async fn fetch_all(&self) -> CampusSnapshot {
        if let Err(err) = self.config.validate() {
            let err = AppError::Config(err.to_string());
            warn!(error = %err, "invalid data sources configuration");
            return CampusSnapshot {
                loaded: true,
                error: Some(err.to_string()),
                ..CampusSnapshot::empty()
            };
        }

        let (faculty, rules, students) = tokio::join!(
            load_faculty(&self.config),
            load_rules_text(&self.config),
            load_students(&self.config),
        );

        let mut notes = Vec::new();
        let faculty = faculty.unwrap_or_else(|err| {
            warn!(error = %err, "faculty source unavailable");
            notes.push(format!("faculty source unavailable: {}", err));
            Vec::new()
        });
        let events_rules_text = rules.unwrap_or_else(|err| {
            warn!(error = %err, "rules text unavailable");
            notes.push(format!("rules text unavailable: {}", err));
            String::new()
        });
        let students = students.unwrap_or_else(|err| {
            warn!(error = %err, "student source unavailable");
            notes.push(format!("student source unavailable: {}", err));
            Vec::new()
        });

        info!(
            faculty = faculty.len(),
            students = students.len(),
            rules_bytes = events_rules_text.len(),
            "campus data loaded"
        );

        CampusSnapshot {
            faculty,
            students,
            events_rules_text,
            loaded: true,
            error: if notes.is_empty() {
                None
            } else {
                Some(notes.join("; "))
            },
            loaded_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faculty_csv_header_resolution() {
        let csv = "Faculty Name,Designation,Email ID,Areas of Interest\n\
                   Dr. A B,Director,a.b@utu.ac.in,\"ML, NLP\"\n\
                   ,Assistant Professor,x@utu.ac.in,Networks\n";
        let records = parse_faculty_csv(csv).expect("well-formed csv");
        assert_eq!(records.len(), 1, "row without a name must be skipped");
        assert_eq!(records[0].name, "Dr. A B");
        assert_eq!(records[0].expertise, "ML, NLP");
    }

    #[test]
    fn test_faculty_csv_requires_name_and_email_columns() {
        let csv = "Designation,Expertise\nProfessor,ML\n";
        assert!(parse_faculty_csv(csv).expect("well-formed csv").is_empty());
    }

    #[test]
    fn test_faculty_default_designation() {
        let csv = "Name,Email\nMs. C D,c.d@utu.ac.in\n";
        let records = parse_faculty_csv(csv).expect("well-formed csv");
        assert_eq!(records[0].designation, "Assistant Professor");
    }

    #[test]
    fn test_students_csv_rows_and_fallback_columns() {
        let csv = "Sr No,Email,Student Name,Enrollment No,Branch Admitted,Programme Elective IV,Programme Elective II,Industrial Practice & Skills Elective II\n\
                   1,r@utu.ac.in,Riya Shah,202403103510225,CSE,Cyber Security,Machine Learning,Cloud Computing\n\
                   ,,,,,,,\n";
        let records = parse_students_csv(csv).expect("well-formed csv");
        assert_eq!(records.len(), 1, "row without enrollment and name skipped");
        let s = &records[0];
        assert_eq!(s.name, "Riya Shah");
        assert_eq!(s.enrollment_no, "202403103510225");
        assert_eq!(s.branch, "CSE");
        assert_eq!(s.elective4, "Cyber Security");
        assert_eq!(s.elective2, "Machine Learning");
        assert_eq!(s.industrial_practice, "Cloud Computing");
    }

    #[test]
    fn test_default_config_is_valid() {
        SourcesConfig::default().validate().expect("default config");
    }
}
