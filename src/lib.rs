//! # Demographics form
//!
//! A small data-entry form with inline validation, and a list/form workflow
//! for editing the entries it produces.
//!
//! The crate holds no UI code. A presentation layer forwards user events
//! (text edits, selections, checkbox toggles, focus loss, submit/cancel) to
//! the form and reads back the field values and the submit-ready flag.
//!
//! ## Feature Flags
//!
//! - `forms` - Filters, validators, phone normalization and the form state
//! - `entries` - In-memory entry store and list/form coordinator
//! - `full` (default) - Everything
//!
//! ## Quick Example
//!
//! ```
//! use demographics::prelude::*;
//!
//! let mut form = DemographicsForm::new();
//! form.on_text_inserted(TextField::FirstName, "Jane");
//! form.on_text_inserted(TextField::LastName, "Doe");
//! form.on_age_selected("25-34");
//! form.on_gender_toggled("Non-binary", true);
//! form.on_text_inserted(TextField::Phone, "5551234567");
//! form.on_phone_focus_lost();
//!
//! let payload = form.submit().unwrap();
//! assert_eq!(payload.phone_number, "(555) 123-4567");
//! ```

#[cfg(feature = "entries")]
pub mod entries;
#[cfg(feature = "forms")]
pub mod forms;

// Re-export forms (forms feature)
#[cfg(feature = "forms")]
pub use demographics_forms::{
	DemographicsForm, FieldError, FieldId, FormSettings, Payload, SettingsError, TextField,
};

// Re-export entries (entries feature)
#[cfg(feature = "entries")]
pub use demographics_entries::{EntriesApp, EntryStore, Navigator, StoreError};

pub mod prelude {
	#[cfg(feature = "forms")]
	pub use crate::{
		DemographicsForm, FieldError, FieldId, FormSettings, Payload, SettingsError, TextField,
	};

	#[cfg(feature = "forms")]
	pub use demographics_forms::{CancelHandler, JsonLinePrinter, SubmitHandler};

	#[cfg(feature = "entries")]
	pub use crate::{EntriesApp, EntryStore, Navigator, StoreError};

	#[cfg(feature = "entries")]
	pub use demographics_entries::{Screen, StoreResult};
}
