//! Entry store and list/form workflow.
//!
//! # Examples
//!
//! ```rust,ignore
//! use demographics::entries::{EntriesApp, EntryStore};
//! ```

#[cfg(feature = "entries")]
pub use demographics_entries::*;
