//! Field validation and submit-readiness for the demographics entry form
//!
//! This crate provides the logic behind the form, independent of any UI toolkit:
//! - Input filters that drop disallowed characters from each text edit
//! - Phone number digit extraction and `(AAA) PPP-LLLL` formatting
//! - Per-field validators for names, age range, gender selection and phone
//! - [`DemographicsForm`], which holds the field values and keeps the
//!   submit-ready flag in step with them
//! - The [`Payload`] produced on submit and the collaborators it is handed to
//! - [`FormSettings`] for the offered option sets, loadable from TOML

pub mod field;
pub mod filters;
pub mod form;
pub mod handler;
pub mod payload;
pub mod phone;
pub mod settings;
pub mod validators;

pub use field::{FieldError, FieldId, FieldResult, TextField};
pub use form::{DemographicsForm, FieldValues, FormSnapshot};
pub use handler::{CancelHandler, JsonLinePrinter, SubmitHandler};
pub use payload::Payload;
pub use phone::{PhoneError, extract_digits, format_phone, normalize_phone};
pub use settings::{FormSettings, SettingsError};
pub use validators::{
	AgeRangeValidator, GenderSelectionValidator, NameValidator, PhoneValidator, valid_age,
	valid_genders, valid_name, valid_phone,
};
