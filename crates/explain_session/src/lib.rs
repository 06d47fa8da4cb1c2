//! Session state for interactive frontends: an [`Engine`] plus a bounded,
//! newest-first history of the traces it produced.
//!
//! [`Engine`]: explain_engine::Engine

pub mod history;
pub mod session;

pub use history::{History, HistoryEntry, SharedHistory, HISTORY_CAPACITY};
pub use session::Session;
