//! Phone number digit extraction and canonical formatting

/// Number of digits in a complete phone number.
pub const PHONE_DIGITS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PhoneError {
	#[error("Expected {expected} digits, got {actual}")]
	DigitCount { expected: usize, actual: usize },
	#[error("Expected only ASCII digits")]
	NonDigit,
}

/// Strip every non-digit character, preserving order.
///
/// # Examples
///
/// ```
/// use demographics_forms::phone::extract_digits;
///
/// assert_eq!(extract_digits("(555) 123-4567"), "5551234567");
/// assert_eq!(extract_digits("no digits"), "");
/// ```
pub fn extract_digits(text: &str) -> String {
	text.chars().filter(char::is_ascii_digit).collect()
}

/// Render exactly ten digits as `(AAA) PPP-LLLL`.
///
/// Callers are expected to gate on the digit count; anything else is
/// reported as an error rather than formatted.
///
/// # Examples
///
/// ```
/// use demographics_forms::phone::{format_phone, PhoneError};
///
/// assert_eq!(format_phone("5551234567").unwrap(), "(555) 123-4567");
/// assert_eq!(
///     format_phone("555123"),
///     Err(PhoneError::DigitCount { expected: 10, actual: 6 })
/// );
/// ```
pub fn format_phone(digits: &str) -> Result<String, PhoneError> {
	if !digits.chars().all(|c| c.is_ascii_digit()) {
		return Err(PhoneError::NonDigit);
	}
	if digits.len() != PHONE_DIGITS {
		return Err(PhoneError::DigitCount {
			expected: PHONE_DIGITS,
			actual: digits.len(),
		});
	}

	let (area, rest) = digits.split_at(3);
	let (prefix, line) = rest.split_at(3);
	Ok(format!("({area}) {prefix}-{line}"))
}

/// Canonical form of free-form phone text, or `None` unless it holds
/// exactly ten digits.
///
/// # Examples
///
/// ```
/// use demographics_forms::phone::normalize_phone;
///
/// assert_eq!(normalize_phone("555 123 4567").as_deref(), Some("(555) 123-4567"));
/// assert_eq!(normalize_phone("555123"), None);
/// ```
pub fn normalize_phone(text: &str) -> Option<String> {
	format_phone(&extract_digits(text)).ok()
}
