//! Bounded explanation history.

use std::sync::{Arc, Mutex, MutexGuard};

use explain_engine::{ExplanationResult, Step};
use tracing::trace;

/// Maximum number of retained entries.
pub const HISTORY_CAPACITY: usize = 10;

/// Snapshot of one explained query.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub query: String,
    pub title: String,
    pub steps: Vec<Step>,
}

impl HistoryEntry {
    pub fn new(query: impl Into<String>, result: &ExplanationResult) -> Self {
        Self {
            query: query.into(),
            title: result.title().to_string(),
            steps: result.steps().to_vec(),
        }
    }

    /// Rebuild the trace for redisplay.
    pub fn to_result(&self) -> ExplanationResult {
        ExplanationResult::new(self.title.clone(), self.steps.clone())
    }
}

/// Newest-first list of at most [`HISTORY_CAPACITY`] entries.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend an entry, evicting the oldest past capacity.
    pub fn record(&mut self, query: &str, result: &ExplanationResult) {
        self.entries.insert(0, HistoryEntry::new(query, result));
        if self.entries.len() > HISTORY_CAPACITY {
            for evicted in self.entries.drain(HISTORY_CAPACITY..) {
                trace!(query = %evicted.query, "history entry evicted");
            }
        }
    }

    /// Entry at `index` (0 = newest) as a trace. Order is left untouched.
    pub fn select(&self, index: usize) -> Option<ExplanationResult> {
        self.entries.get(index).map(HistoryEntry::to_result)
    }

    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    pub fn list(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Cloneable handle to a [`History`] shared between threads.
#[derive(Debug, Clone, Default)]
pub struct SharedHistory(Arc<Mutex<History>>);

impl SharedHistory {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, History> {
        // A panic while holding the lock cannot leave History half-updated.
        self.0.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn record(&self, query: &str, result: &ExplanationResult) {
        self.lock().record(query, result);
    }

    pub fn select(&self, index: usize) -> Option<ExplanationResult> {
        self.lock().select(index)
    }

    /// Copy of the current entries, newest first.
    pub fn list(&self) -> Vec<HistoryEntry> {
        self.lock().list().to_vec()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trace(title: &str) -> ExplanationResult {
        ExplanationResult::new(title, vec![Step::new("only").with_result(1.0)])
    }

    #[test]
    fn newest_first() {
        let mut history = History::new();
        history.record("a", &trace("A"));
        history.record("b", &trace("B"));
        let queries: Vec<&str> = history.list().iter().map(|e| e.query.as_str()).collect();
        assert_eq!(queries, vec!["b", "a"]);
    }

    #[test]
    fn eleventh_record_evicts_oldest() {
        let mut history = History::new();
        for i in 1..=11 {
            history.record(&format!("q{i}"), &trace(&format!("T{i}")));
        }
        assert_eq!(history.len(), HISTORY_CAPACITY);
        assert_eq!(history.list()[0].query, "q11");
        assert_eq!(history.list()[9].query, "q2");
    }

    #[test]
    fn select_is_read_only() {
        let mut history = History::new();
        history.record("a", &trace("A"));
        history.record("b", &trace("B"));

        let selected = history.select(1).unwrap();
        assert_eq!(selected.title(), "A");
        assert_eq!(selected.final_result(), Some(1.0));
        assert_eq!(history.list()[0].query, "b");
        assert!(history.select(2).is_none());
    }

    #[test]
    fn clear_empties() {
        let shared = SharedHistory::new();
        shared.record("a", &trace("A"));
        assert!(!shared.is_empty());
        shared.clear();
        assert!(shared.is_empty());
    }

    #[test]
    fn shared_list_is_a_snapshot() {
        let shared = SharedHistory::new();
        shared.record("a", &trace("A"));
        let snapshot = shared.list();
        shared.record("b", &trace("B"));
        assert_eq!(snapshot.len(), 1);
        assert_eq!(shared.len(), 2);
    }
}
