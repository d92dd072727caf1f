//! # Query Engine
//!
//! Rule-based matching engine for the campus assistant. Analyzes free-text
//! queries against the loaded dataset snapshot and composes markdown answers.
//!
//! ## Components
//! - `context`: per-query derived context (entities, fields, audience flags)
//! - `intent`: intent classification over an ordered rule table
//! - `extract`: regex-based person-name and program extraction
//! - `fields`: attribute selection for person queries
//! - `matching`: name/fee/enrollment matching primitives
//! - `responder`: answer composition per intent

pub mod context;
pub mod extract;
pub mod fields;
pub mod intent;
pub mod matching;
pub mod responder;

pub use context::QueryContext;
pub use fields::{FacultyField, StudentField};
pub use intent::{Intent, IntentClassifier};
pub use responder::{Responder, CAPABILITY_MENU};

use tracing::{debug, info, warn};

use crate::loader::CampusSnapshot;
use crate::store::CampusStore;

/// The assistant: classifies a query and composes an answer from the current
/// snapshot. Stateless between queries; the snapshot is passed in explicitly.
#[derive(Debug, Default)]
pub struct CampusAssistant {
    classifier: IntentClassifier,
    responder: Responder,
}

impl CampusAssistant {
    pub fn new() -> Self {
        Self {
            classifier: IntentClassifier::new(),
            responder: Responder::new(),
        }
    }

    /// Classify a query without answering it.
    pub fn classify(&self, query: &str) -> Intent {
        self.classifier.classify(&QueryContext::parse(query))
    }

    /// Answer a query from the in-memory snapshot. Walks the rule table in
    /// priority order; the first handler that produces an answer wins. Always
    /// returns text; unanswerable queries get the capability menu.
    pub fn respond(&self, query: &str, snapshot: &CampusSnapshot) -> String {
        let ctx = QueryContext::parse(query);
        if ctx.is_empty() {
            return CAPABILITY_MENU.to_string();
        }
        for rule in intent::rules() {
            if !(rule.trigger)(&ctx) {
                continue;
            }
            if let Some(answer) = self.responder.handle(rule.intent, &ctx, snapshot) {
                info!(intent = rule.intent.label(), "answered query");
                return answer;
            }
            debug!(intent = rule.intent.label(), "handler declined, continuing");
        }
        CAPABILITY_MENU.to_string()
    }

    /// Answer a query, consulting the backing store for program-enrollment
    /// and bulk-list queries. Any store error degrades to the in-memory path.
    pub async fn respond_with_store(
        &self,
        query: &str,
        snapshot: &CampusSnapshot,
        store: &CampusStore,
    ) -> String {
        let ctx = QueryContext::parse(query);
        if ctx.is_empty() {
            return CAPABILITY_MENU.to_string();
        }
        for rule in intent::rules() {
            if !(rule.trigger)(&ctx) {
                continue;
            }
            let answer = match rule.intent {
                Intent::ProgramEnrollment => match self.store_program_enrollment(&ctx, store).await
                {
                    Some(answer) => Some(answer),
                    None => self.responder.handle(rule.intent, &ctx, snapshot),
                },
                Intent::BulkStudentList => match self.store_bulk_list(store).await {
                    Some(answer) => Some(answer),
                    None => self.responder.handle(rule.intent, &ctx, snapshot),
                },
                other => self.responder.handle(other, &ctx, snapshot),
            };
            if let Some(answer) = answer {
                info!(intent = rule.intent.label(), "answered query");
                return answer;
            }
            debug!(intent = rule.intent.label(), "handler declined, continuing");
        }
        CAPABILITY_MENU.to_string()
    }

    async fn store_program_enrollment(
        &self,
        ctx: &QueryContext,
        store: &CampusStore,
    ) -> Option<String> {
        let program = ctx.program.as_deref()?;
        match store.students_by_program(program).await {
            Ok(list) if list.is_empty() => Some(responder::no_program_students_answer(program)),
            Ok(list) => {
                let refs: Vec<_> = list.iter().collect();
                Some(responder::program_students_answer(program, &refs))
            }
            Err(err) => {
                warn!(error = %err, "store query failed, falling back to snapshot");
                None
            }
        }
    }

    async fn store_bulk_list(&self, store: &CampusStore) -> Option<String> {
        match store.all_students().await {
            Ok(list) if list.is_empty() => None,
            Ok(list) => {
                let refs: Vec<_> = list.iter().collect();
                Some(responder::all_students_answer(&refs))
            }
            Err(err) => {
                warn!(error = %err, "store query failed, falling back to snapshot");
                None
            }
        }
    }
}
