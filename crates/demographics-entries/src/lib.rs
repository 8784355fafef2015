//! Master-detail editing of demographics entries
//!
//! - [`EntryStore`]: ordered in-memory collection of submitted payloads
//! - [`EntriesApp`]: list/form workflow with an injected [`Navigator`]

pub mod coordinator;
pub mod store;

pub use coordinator::{AppState, EntriesApp, Navigator, Screen, ScreenRecorder};
pub use store::{EntryStore, EntrySummary, StoreError, StoreResult};
