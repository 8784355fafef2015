//! Field validators for the demographics form
//!
//! Each validator checks one field's current value and reports a
//! [`FieldError::Validation`] on failure. The `valid_*` functions are the
//! boolean form used for submit-readiness.

use crate::field::{FieldError, FieldResult};
use crate::phone::{PHONE_DIGITS, extract_digits};
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

// A letter, then any mix of letters, whitespace, apostrophes and hyphens.
static NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[A-Za-z][A-Za-z\s'\-]*$").expect("NAME_REGEX: invalid regex pattern")
});

/// Validates a person's first or last name.
///
/// The trimmed value must be non-empty and start with a letter; the rest may
/// only contain letters, whitespace, apostrophes and hyphens.
///
/// # Examples
///
/// ```
/// use demographics_forms::validators::NameValidator;
///
/// let validator = NameValidator::new();
/// assert!(validator.validate("O'Brien").is_ok());
/// assert!(validator.validate("  Mary-Jane ").is_ok());
/// assert!(validator.validate("-Ann").is_err());
/// assert!(validator.validate("   ").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct NameValidator {
	message: Option<String>,
}

impl NameValidator {
	/// Creates a name validator with the default error message.
	pub fn new() -> Self {
		Self { message: None }
	}

	/// Sets a custom error message returned on validation failure.
	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());
		self
	}

	/// Validates a name, ignoring surrounding whitespace.
	///
	/// # Examples
	///
	/// ```
	/// use demographics_forms::FieldError;
	/// use demographics_forms::validators::NameValidator;
	///
	/// let validator = NameValidator::new().with_message("Bad name");
	/// assert!(validator.validate("Anna Maria").is_ok());
	/// assert_eq!(
	///     validator.validate("3rd"),
	///     Err(FieldError::Validation("Bad name".to_string()))
	/// );
	/// ```
	pub fn validate(&self, value: &str) -> FieldResult<()> {
		let trimmed = value.trim();
		if !trimmed.is_empty() && NAME_REGEX.is_match(trimmed) {
			Ok(())
		} else {
			let msg = self
				.message
				.as_deref()
				.unwrap_or("Enter a name starting with a letter");
			Err(FieldError::Validation(msg.to_string()))
		}
	}
}

/// Validates that the age selection is one of the offered options.
///
/// # Examples
///
/// ```
/// use demographics_forms::validators::AgeRangeValidator;
///
/// let options = vec!["18-24".to_string(), "55+".to_string()];
/// let validator = AgeRangeValidator::new(&options);
/// assert!(validator.validate("55+").is_ok());
/// assert!(validator.validate("Select age range").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct AgeRangeValidator<'a> {
	options: &'a [String],
	message: Option<String>,
}

impl<'a> AgeRangeValidator<'a> {
	/// Creates a validator accepting exactly the given `options`.
	pub fn new(options: &'a [String]) -> Self {
		Self {
			options,
			message: None,
		}
	}

	/// Sets a custom error message returned on validation failure.
	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());
		self
	}

	/// Validates an age selection against the offered options.
	///
	/// The match is exact; the prompt sentinel is never an option.
	///
	/// # Examples
	///
	/// ```
	/// use demographics_forms::validators::AgeRangeValidator;
	///
	/// let options = vec!["25-34".to_string()];
	/// let validator = AgeRangeValidator::new(&options);
	/// assert!(validator.validate("25-34").is_ok());
	/// assert!(validator.validate("25-34 ").is_err());
	/// ```
	pub fn validate(&self, selection: &str) -> FieldResult<()> {
		if self.options.iter().any(|option| option == selection) {
			Ok(())
		} else {
			let msg = self.message.as_deref().unwrap_or("Select an age range");
			Err(FieldError::Validation(msg.to_string()))
		}
	}
}

/// Validates that at least one gender label is selected.
///
/// # Examples
///
/// ```
/// use demographics_forms::validators::GenderSelectionValidator;
/// use std::collections::BTreeSet;
///
/// let validator = GenderSelectionValidator::new();
/// assert!(validator.validate(&BTreeSet::new()).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct GenderSelectionValidator {
	message: Option<String>,
}

impl GenderSelectionValidator {
	pub fn new() -> Self {
		Self { message: None }
	}

	/// Sets a custom error message returned on validation failure.
	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());
		self
	}

	/// Validates a gender selection.
	///
	/// # Examples
	///
	/// ```
	/// use demographics_forms::validators::GenderSelectionValidator;
	/// use std::collections::BTreeSet;
	///
	/// let selection = BTreeSet::from(["Two-Spirit".to_string()]);
	/// assert!(GenderSelectionValidator::new().validate(&selection).is_ok());
	/// ```
	pub fn validate(&self, selection: &BTreeSet<String>) -> FieldResult<()> {
		if selection.is_empty() {
			let msg = self
				.message
				.as_deref()
				.unwrap_or("Select at least one option");
			Err(FieldError::Validation(msg.to_string()))
		} else {
			Ok(())
		}
	}
}

/// Validates that the phone text holds exactly ten digits.
///
/// Punctuation is not checked; the phone input filter already limits it to
/// parentheses, hyphens and whitespace.
///
/// # Examples
///
/// ```
/// use demographics_forms::validators::PhoneValidator;
///
/// let validator = PhoneValidator::new();
/// assert!(validator.validate("(555) 123-4567").is_ok());
/// assert!(validator.validate("555-1234").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct PhoneValidator {
	message: Option<String>,
}

impl PhoneValidator {
	/// Creates a phone validator whose default message reports the digit count.
	pub fn new() -> Self {
		Self { message: None }
	}

	/// Sets a custom error message returned on validation failure.
	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());
		self
	}

	/// Validates phone text by counting its digits.
	///
	/// # Examples
	///
	/// ```
	/// use demographics_forms::FieldError;
	/// use demographics_forms::validators::PhoneValidator;
	///
	/// let validator = PhoneValidator::new();
	/// assert!(validator.validate("555 123 4567").is_ok());
	/// assert_eq!(
	///     validator.validate("1 555 123 4567"),
	///     Err(FieldError::Validation(
	///         "Enter a 10-digit phone number (it has 11)".to_string()
	///     ))
	/// );
	/// ```
	pub fn validate(&self, value: &str) -> FieldResult<()> {
		let digits = extract_digits(value);
		if digits.len() == PHONE_DIGITS {
			Ok(())
		} else {
			let msg = self.message.clone().unwrap_or_else(|| {
				format!(
					"Enter a {}-digit phone number (it has {})",
					PHONE_DIGITS,
					digits.len()
				)
			});
			Err(FieldError::Validation(msg))
		}
	}
}

pub fn valid_name(value: &str) -> bool {
	NameValidator::new().validate(value).is_ok()
}

pub fn valid_age(selection: &str, options: &[String]) -> bool {
	AgeRangeValidator::new(options).validate(selection).is_ok()
}

pub fn valid_genders(selection: &BTreeSet<String>) -> bool {
	!selection.is_empty()
}

pub fn valid_phone(value: &str) -> bool {
	extract_digits(value).len() == PHONE_DIGITS
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::settings::FormSettings;
	use rstest::rstest;

	#[rstest]
	#[case("Mary-Jane")]
	#[case("O'Brien")]
	#[case("Anna Maria")]
	#[case("  Jane  ")]
	#[case("x")]
	#[case("Jean-Luc O'Neil")]
	fn test_name_validator_valid(#[case] name: &str) {
		assert!(valid_name(name), "Expected '{name}' to be a valid name");
	}

	#[rstest]
	#[case("")]
	#[case("   ")]
	#[case("\t\n")]
	#[case("1Anna")]
	#[case("-Anna")]
	#[case("'Anna")]
	#[case("Ann4")]
	#[case("Ann.")]
	fn test_name_validator_invalid(#[case] name: &str) {
		assert!(!valid_name(name), "Expected '{name}' to be an invalid name");
	}

	#[rstest]
	fn test_name_validator_custom_message() {
		// Arrange
		let validator = NameValidator::new().with_message("Custom name error");

		// Act
		let result = validator.validate("");

		// Assert
		assert_eq!(
			result,
			Err(FieldError::Validation("Custom name error".to_string()))
		);
	}

	#[rstest]
	#[case("18-24", true)]
	#[case("25-34", true)]
	#[case("35-44", true)]
	#[case("45-54", true)]
	#[case("55+", true)]
	#[case("Select age range", false)]
	#[case("", false)]
	#[case("65+", false)]
	fn test_age_validator(#[case] selection: &str, #[case] expected: bool) {
		// Arrange
		let settings = FormSettings::default();

		// Act + Assert
		assert_eq!(valid_age(selection, &settings.age_options), expected);
	}

	#[rstest]
	fn test_gender_selection_validator() {
		// Arrange
		let validator = GenderSelectionValidator::new();
		let mut selection = BTreeSet::new();

		// Act + Assert
		assert!(validator.validate(&selection).is_err());
		assert!(!valid_genders(&selection));

		selection.insert("Two-Spirit".to_string());
		assert!(validator.validate(&selection).is_ok());
		assert!(valid_genders(&selection));
	}

	#[rstest]
	#[case("5551234567", true)]
	#[case("(555) 123-4567", true)]
	#[case("555 123 4567 ", true)]
	#[case("555123", false)]
	#[case("15551234567", false)]
	#[case("", false)]
	fn test_phone_validator(#[case] phone: &str, #[case] expected: bool) {
		assert_eq!(valid_phone(phone), expected);
		assert_eq!(PhoneValidator::new().validate(phone).is_ok(), expected);
	}

	#[rstest]
	fn test_phone_validator_reports_digit_count() {
		// Act
		let result = PhoneValidator::new().validate("555123");

		// Assert
		match result {
			Err(FieldError::Validation(msg)) => {
				assert_eq!(msg, "Enter a 10-digit phone number (it has 6)");
			}
			_ => panic!("Expected Validation error"),
		}
	}
}
