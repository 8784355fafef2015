//! Submitted form data

use crate::form::FieldValues;
use crate::phone::normalize_phone;
use serde::{Deserialize, Serialize};

/// The data handed to the submit collaborator.
///
/// Serializes with camelCase keys:
///
/// ```
/// use demographics_forms::Payload;
///
/// let payload = Payload {
///     first_name: "Jane".to_string(),
///     last_name: "Doe".to_string(),
///     age_range: "25-34".to_string(),
///     genders_selected: vec!["Non-binary".to_string()],
///     phone_number: "(555) 123-4567".to_string(),
/// };
/// let json = serde_json::to_value(&payload).unwrap();
/// assert_eq!(json["firstName"], "Jane");
/// assert_eq!(json["gendersSelected"][0], "Non-binary");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payload {
	pub first_name: String,
	pub last_name: String,
	pub age_range: String,
	/// Sorted, without duplicates
	pub genders_selected: Vec<String>,
	pub phone_number: String,
}

impl Payload {
	/// Build a payload from the current field values.
	///
	/// Names are trimmed. The phone number is rendered canonically when it
	/// holds exactly ten digits and passed through untouched otherwise.
	pub fn from_values(values: &FieldValues) -> Self {
		let phone_number =
			normalize_phone(&values.phone).unwrap_or_else(|| values.phone.clone());

		Self {
			first_name: values.first_name.trim().to_string(),
			last_name: values.last_name.trim().to_string(),
			age_range: values.age_range.clone(),
			genders_selected: values.genders.iter().cloned().collect(),
			phone_number,
		}
	}

	/// Row title for list views: the full name, or `None` when both names
	/// are blank.
	///
	/// # Examples
	///
	/// ```
	/// use demographics_forms::Payload;
	///
	/// let mut payload = Payload {
	///     first_name: "Jane".to_string(),
	///     last_name: String::new(),
	///     age_range: "55+".to_string(),
	///     genders_selected: vec![],
	///     phone_number: String::new(),
	/// };
	/// assert_eq!(payload.display_name().as_deref(), Some("Jane"));
	///
	/// payload.first_name.clear();
	/// assert_eq!(payload.display_name(), None);
	/// ```
	pub fn display_name(&self) -> Option<String> {
		let name = format!("{} {}", self.first_name, self.last_name);
		let name = name.trim();
		if name.is_empty() {
			None
		} else {
			Some(name.to_string())
		}
	}

	pub fn to_json(&self) -> serde_json::Result<String> {
		serde_json::to_string(self)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::collections::BTreeSet;

	fn values(phone: &str) -> FieldValues {
		FieldValues {
			first_name: "  Jane ".to_string(),
			last_name: "Doe".to_string(),
			age_range: "25-34".to_string(),
			genders: BTreeSet::from(["Woman/girl".to_string(), "Non-binary".to_string()]),
			phone: phone.to_string(),
		}
	}

	#[rstest]
	fn test_payload_trims_names_and_sorts_genders() {
		// Act
		let payload = Payload::from_values(&values("5551234567"));

		// Assert
		assert_eq!(payload.first_name, "Jane");
		assert_eq!(payload.last_name, "Doe");
		assert_eq!(payload.genders_selected, vec!["Non-binary", "Woman/girl"]);
		assert_eq!(payload.phone_number, "(555) 123-4567");
	}

	#[rstest]
	fn test_payload_keeps_raw_phone_without_ten_digits() {
		// Act
		let payload = Payload::from_values(&values("555-123"));

		// Assert
		assert_eq!(payload.phone_number, "555-123");
	}

	#[rstest]
	fn test_payload_json_keys() {
		// Arrange
		let payload = Payload::from_values(&values("5551234567"));

		// Act
		let json: serde_json::Value = serde_json::from_str(&payload.to_json().unwrap()).unwrap();

		// Assert
		assert_eq!(
			json,
			serde_json::json!({
				"firstName": "Jane",
				"lastName": "Doe",
				"ageRange": "25-34",
				"gendersSelected": ["Non-binary", "Woman/girl"],
				"phoneNumber": "(555) 123-4567",
			})
		);
	}
}
