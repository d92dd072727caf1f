//! Test Module
//!
//! Test suite for the campus assistant core.
//!
//! ## Test Categories
//! - `engine_tests`: intent classification, entity extraction, matching and
//!   full answer composition over a fixture snapshot
//! - `loader_tests`: CSV source parsing, per-source degradation, load-once
//!   caching and cache clearing
//! - `store_tests`: SQLite store seeding, LIKE lookups and the store-backed
//!   answer path

pub mod engine_tests;
pub mod store_tests;
