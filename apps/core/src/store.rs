//! Optional SQLite backing store.
//!
//! Mirrors the tabular sources into two tables and answers the same
//! substring lookups the in-memory path performs, via parameterized LIKE
//! queries. The engine treats the store as an accelerator: any failure here
//! degrades to the snapshot scan.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::FromRow;
use std::path::Path;
use std::str::FromStr;
use tracing::info;

use crate::error::AppError;
use crate::loader::CampusSnapshot;
use crate::models::{FacultyRecord, StudentRecord};

#[derive(Debug, FromRow)]
struct StudentRow {
    sr_no: String,
    email: String,
    name: String,
    enrollment_no: String,
    branch: String,
    elective_4: String,
    elective_2: String,
    industrial_practice: String,
}

impl From<StudentRow> for StudentRecord {
    fn from(row: StudentRow) -> Self {
        StudentRecord {
            sr_no: row.sr_no,
            email: row.email,
            name: row.name,
            enrollment_no: row.enrollment_no,
            branch: row.branch,
            elective4: row.elective_4,
            elective2: row.elective_2,
            industrial_practice: row.industrial_practice,
        }
    }
}

#[derive(Debug, FromRow)]
struct FacultyRow {
    name: String,
    designation: String,
    email: String,
    expertise: String,
}

impl From<FacultyRow> for FacultyRecord {
    fn from(row: FacultyRow) -> Self {
        FacultyRecord {
            name: row.name,
            designation: row.designation,
            email: row.email,
            expertise: row.expertise,
        }
    }
}

const STUDENT_COLUMNS: &str =
    "sr_no, email, name, enrollment_no, branch, elective_4, elective_2, industrial_practice";

/// SQLite-backed campus store.
pub struct CampusStore {
    pool: SqlitePool,
}

impl CampusStore {
    /// Open (or create) a store at the given path and apply the schema.
    pub async fn open(path: &Path) -> Result<Self, AppError> {
        let db_url = format!("sqlite://{}", path.to_string_lossy());
        let options = SqliteConnectOptions::from_str(&db_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;
        let store = Self { pool };
        store.migrate().await?;
        Ok(store)
    }

    /// Ephemeral in-memory store. A single connection keeps every query on
    /// the same in-memory database.
    pub async fn in_memory() -> Result<Self, AppError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;
        let store = Self { pool };
        store.migrate().await?;
        Ok(store)
    }

    async fn migrate(&self) -> Result<(), AppError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS faculty (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                designation TEXT NOT NULL,
                email TEXT NOT NULL,
                expertise TEXT NOT NULL
            );
            CREATE TABLE IF NOT EXISTS students (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                sr_no TEXT NOT NULL,
                email TEXT NOT NULL,
                name TEXT NOT NULL,
                enrollment_no TEXT NOT NULL,
                branch TEXT NOT NULL,
                elective_4 TEXT NOT NULL,
                elective_2 TEXT NOT NULL,
                industrial_practice TEXT NOT NULL
            );
            "#,
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Rebuild the store contents from a snapshot.
    pub async fn seed(&self, snapshot: &CampusSnapshot) -> Result<(), AppError> {
        sqlx::query("DELETE FROM faculty")
            .execute(&self.pool)
            .await?;
        sqlx::query("DELETE FROM students")
            .execute(&self.pool)
            .await?;

        for f in &snapshot.faculty {
            sqlx::query(
                "INSERT INTO faculty (name, designation, email, expertise) VALUES (?, ?, ?, ?)",
            )
            .bind(&f.name)
            .bind(&f.designation)
            .bind(&f.email)
            .bind(&f.expertise)
            .execute(&self.pool)
            .await?;
        }
        for s in &snapshot.students {
            sqlx::query(
                "INSERT INTO students (sr_no, email, name, enrollment_no, branch, elective_4, elective_2, industrial_practice) \
                 VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
            )
            .bind(&s.sr_no)
            .bind(&s.email)
            .bind(&s.name)
            .bind(&s.enrollment_no)
            .bind(&s.branch)
            .bind(&s.elective4)
            .bind(&s.elective2)
            .bind(&s.industrial_practice)
            .execute(&self.pool)
            .await?;
        }

        info!(
            faculty = snapshot.faculty.len(),
            students = snapshot.students.len(),
            "campus store seeded"
        );
        Ok(())
    }

    /// All students whose branch or any elective contains the given term.
    pub async fn students_by_program(
        &self,
        program_or_elective: &str,
    ) -> Result<Vec<StudentRecord>, AppError> {
        let like = format!("%{}%", program_or_elective);
        let rows = sqlx::query_as::<_, StudentRow>(&format!(
            "SELECT {STUDENT_COLUMNS} FROM students \
             WHERE branch LIKE ? OR elective_4 LIKE ? OR elective_2 LIKE ? OR industrial_practice LIKE ? \
             ORDER BY name"
        ))
        .bind(&like)
        .bind(&like)
        .bind(&like)
        .bind(&like)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// All students, sorted by name.
    pub async fn all_students(&self) -> Result<Vec<StudentRecord>, AppError> {
        let rows = sqlx::query_as::<_, StudentRow>(&format!(
            "SELECT {STUDENT_COLUMNS} FROM students ORDER BY name"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// One student by enrollment number, whitespace-insensitive.
    pub async fn student_by_enrollment(
        &self,
        enrollment_no: &str,
    ) -> Result<Option<StudentRecord>, AppError> {
        let normalized: String = enrollment_no
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        let row = sqlx::query_as::<_, StudentRow>(&format!(
            "SELECT {STUDENT_COLUMNS} FROM students WHERE REPLACE(enrollment_no, ' ', '') = ?"
        ))
        .bind(&normalized)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(Into::into))
    }

    /// Students whose name contains the given fragment, sorted by name.
    pub async fn students_by_name(&self, name: &str) -> Result<Vec<StudentRecord>, AppError> {
        let like = format!("%{}%", name);
        let rows = sqlx::query_as::<_, StudentRow>(&format!(
            "SELECT {STUDENT_COLUMNS} FROM students WHERE name LIKE ? ORDER BY name"
        ))
        .bind(&like)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// All faculty, sorted by name.
    pub async fn all_faculty(&self) -> Result<Vec<FacultyRecord>, AppError> {
        let rows = sqlx::query_as::<_, FacultyRow>(
            "SELECT name, designation, email, expertise FROM faculty ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Faculty whose name contains the given fragment, sorted by name.
    pub async fn faculty_by_name(&self, name: &str) -> Result<Vec<FacultyRecord>, AppError> {
        let like = format!("%{}%", name);
        let rows = sqlx::query_as::<_, FacultyRow>(
            "SELECT name, designation, email, expertise FROM faculty WHERE name LIKE ? ORDER BY name",
        )
        .bind(&like)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}
