//! Input filters applied to text edits before they reach a field
//!
//! Filters operate on the incoming delta rather than the whole field value.
//! Every filter drops characters one at a time, so filtering two deltas
//! separately gives the same text as filtering their concatenation.

use regex::Regex;
use std::sync::LazyLock;

// Anything other than ASCII letters, whitespace, apostrophe and hyphen.
static INVALID_NAME_CHARS: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"[^A-Za-z\s'\-]").expect("INVALID_NAME_CHARS: invalid regex pattern")
});

// Anything other than digits, parentheses, hyphen and whitespace.
static INVALID_PHONE_CHARS: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"[^0-9()\-\s]").expect("INVALID_PHONE_CHARS: invalid regex pattern")
});

/// Remove every character a name field does not accept.
///
/// # Examples
///
/// ```
/// use demographics_forms::filters::filter_name;
///
/// assert_eq!(filter_name("O'Brien-2"), "O'Brien-");
/// assert_eq!(filter_name("Anna Maria!"), "Anna Maria");
/// assert_eq!(filter_name("123"), "");
/// ```
pub fn filter_name(delta: &str) -> String {
	INVALID_NAME_CHARS.replace_all(delta, "").into_owned()
}

/// Remove every character the phone field does not accept.
///
/// # Examples
///
/// ```
/// use demographics_forms::filters::filter_phone;
///
/// assert_eq!(filter_phone("(555) 123-4567"), "(555) 123-4567");
/// assert_eq!(filter_phone("555.123.4567 ext"), "5551234567 ");
/// ```
pub fn filter_phone(delta: &str) -> String {
	INVALID_PHONE_CHARS.replace_all(delta, "").into_owned()
}
