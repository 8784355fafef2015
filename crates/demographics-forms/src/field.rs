//! Field identifiers and field-level errors

use crate::filters::{filter_name, filter_phone};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one unit of user input on the demographics form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldId {
	FirstName,
	LastName,
	AgeRange,
	Phone,
	Genders,
}

impl FieldId {
	/// All fields, in the order they appear on the form.
	pub const ALL: [FieldId; 5] = [
		FieldId::FirstName,
		FieldId::LastName,
		FieldId::AgeRange,
		FieldId::Genders,
		FieldId::Phone,
	];

	/// Stable snake_case identifier of the field
	///
	/// # Examples
	///
	/// ```
	/// use demographics_forms::FieldId;
	///
	/// assert_eq!(FieldId::FirstName.as_str(), "first_name");
	/// assert_eq!(FieldId::AgeRange.as_str(), "age_range");
	/// ```
	pub fn as_str(&self) -> &'static str {
		match self {
			FieldId::FirstName => "first_name",
			FieldId::LastName => "last_name",
			FieldId::AgeRange => "age_range",
			FieldId::Phone => "phone",
			FieldId::Genders => "genders",
		}
	}
}

impl fmt::Display for FieldId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// The free-text fields, the only ones that receive keystroke edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextField {
	FirstName,
	LastName,
	Phone,
}

impl TextField {
	/// Strip the characters this field does not accept from an incoming edit.
	///
	/// # Examples
	///
	/// ```
	/// use demographics_forms::TextField;
	///
	/// assert_eq!(TextField::FirstName.filter("Ann3!"), "Ann");
	/// assert_eq!(TextField::Phone.filter("(555) x12"), "(555) 12");
	/// ```
	pub fn filter(&self, delta: &str) -> String {
		match self {
			TextField::FirstName | TextField::LastName => filter_name(delta),
			TextField::Phone => filter_phone(delta),
		}
	}
}

impl From<TextField> for FieldId {
	fn from(field: TextField) -> Self {
		match field {
			TextField::FirstName => FieldId::FirstName,
			TextField::LastName => FieldId::LastName,
			TextField::Phone => FieldId::Phone,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
	#[error("This field is required: {0}")]
	Required(FieldId),
	#[error("{0}")]
	Validation(String),
}

pub type FieldResult<T> = Result<T, FieldError>;
