use std::sync::atomic::{AtomicBool, Ordering};

use explain_engine::{Engine, EngineOptions, ExplanationResult, Outcome};
use tracing::debug;

use crate::history::{HistoryEntry, SharedHistory};

/// An engine bound to a history. Every explained query is recorded.
#[derive(Debug, Default)]
pub struct Session {
    engine: Engine,
    history: SharedHistory,
    busy: AtomicBool,
}

/// Clears the busy flag on drop, so a panicking engine cannot leave it set.
struct BusyGuard<'a>(&'a AtomicBool);

impl<'a> BusyGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::SeqCst);
        Self(flag)
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_engine(engine: Engine) -> Self {
        Self {
            engine,
            history: SharedHistory::new(),
            busy: AtomicBool::new(false),
        }
    }

    pub fn with_options(options: EngineOptions) -> Self {
        Self::with_engine(Engine::with_options(options))
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Handle to the history; clones share the same entries.
    pub fn history(&self) -> SharedHistory {
        self.history.clone()
    }

    pub fn explain(&self, query: &str) -> ExplanationResult {
        self.run(query).result
    }

    /// Explain and record, keeping the route for callers that report it.
    pub fn run(&self, query: &str) -> Outcome {
        let outcome = {
            let _busy = BusyGuard::acquire(&self.busy);
            self.engine.run(query)
        };
        self.history.record(query, &outcome.result);
        debug!(
            route = outcome.route.name(),
            entries = self.history.len(),
            "query recorded"
        );
        outcome
    }

    pub fn history_list(&self) -> Vec<HistoryEntry> {
        self.history.list()
    }

    pub fn select(&self, index: usize) -> Option<ExplanationResult> {
        self.history.select(index)
    }

    /// True only while an explanation is being computed.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use explain_engine::Route;

    #[test]
    fn explain_records_query() {
        let session = Session::new();
        let trace = session.explain("sqrt(49)");
        let list = session.history_list();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].query, "sqrt(49)");
        assert_eq!(list[0].title, trace.title());
        assert!(!session.is_busy());
    }

    #[test]
    fn rejected_queries_are_recorded_too() {
        let session = Session::new();
        let outcome = session.run("2 ^^ 3");
        assert_eq!(outcome.route.name(), "rejected");
        assert_eq!(session.history_list()[0].title, "Could not parse as math");
        assert_ne!(outcome.route, Route::General);
    }

    #[test]
    fn select_redisplays_without_recomputing() {
        let session = Session::new();
        session.explain("12 * 3");
        session.explain("what is light");
        let older = session.select(1).unwrap();
        assert_eq!(older.final_result(), Some(36.0));
        assert_eq!(session.history_list().len(), 2);
    }
}
