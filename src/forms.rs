//! Form filtering, validation and submit-readiness.
//!
//! # Examples
//!
//! ```rust
//! use demographics::forms::{filters::filter_name, valid_name};
//!
//! assert_eq!(filter_name("Ann3"), "Ann");
//! assert!(valid_name("Ann"));
//! ```

#[cfg(feature = "forms")]
pub use demographics_forms::*;
