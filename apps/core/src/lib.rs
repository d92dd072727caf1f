//! # Campus Assistant Core
//!
//! Rule-based question-answering engine over a small, locally-loaded campus
//! dataset: faculty, students, fest events and raw rules text. The engine
//! consumes a read-only [`loader::CampusSnapshot`] and returns one markdown
//! answer per query; rendering, navigation and data entry live elsewhere.
//!
//! ## Modules
//! - `catalog`: compiled-in static data (events, programs, institute facts)
//! - `loader`: dataset snapshot with load-once caching
//! - `engine`: intent classification, entity extraction and answer composition
//! - `store`: optional SQLite backing store for the tabular sources
//! - `transcript`: append-only chat history with export

pub mod catalog;
pub mod engine;
pub mod error;
pub mod loader;
pub mod models;
pub mod store;
pub mod transcript;

#[cfg(test)]
mod tests;

pub use engine::{CampusAssistant, Intent, CAPABILITY_MENU};
pub use error::AppError;
pub use loader::{CampusSnapshot, SnapshotLoader, SourcesConfig};
pub use models::{EventCategory, EventRecord, FacultyRecord, Program, StudentRecord};
pub use store::CampusStore;
pub use transcript::{ChatMessage, Role, Transcript};
