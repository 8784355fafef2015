//! Form settings
//!
//! The option sets offered by the form. Defaults match the standard
//! demographics form; a TOML document can override any of them.
//!
//! ```toml
//! age_prompt = "Pick one"
//! age_options = ["Under 30", "30+"]
//! gender_labels = ["Woman/girl", "Man/boy"]
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

pub const DEFAULT_AGE_PROMPT: &str = "Select age range";

pub const DEFAULT_AGE_OPTIONS: [&str; 5] = ["18-24", "25-34", "35-44", "45-54", "55+"];

pub const DEFAULT_GENDER_LABELS: [&str; 5] = [
	"Woman/girl",
	"Man/boy",
	"Non-binary",
	"Two-Spirit",
	"Prefer not to say",
];

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	#[error("Failed to read settings file: {0}")]
	Io(#[from] std::io::Error),
	#[error("Failed to parse settings: {0}")]
	Parse(#[from] toml::de::Error),
	#[error("Invalid settings: {0}")]
	Invalid(String),
}

/// Option sets and prompt text used by [`DemographicsForm`](crate::DemographicsForm)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormSettings {
	/// Sentinel shown while no age range is selected; never a valid selection
	pub age_prompt: String,

	/// Allowed age-range labels, in display order
	pub age_options: Vec<String>,

	/// Gender labels offered as checkboxes
	pub gender_labels: Vec<String>,
}

impl Default for FormSettings {
	fn default() -> Self {
		Self {
			age_prompt: DEFAULT_AGE_PROMPT.to_string(),
			age_options: DEFAULT_AGE_OPTIONS.iter().map(|s| s.to_string()).collect(),
			gender_labels: DEFAULT_GENDER_LABELS
				.iter()
				.map(|s| s.to_string())
				.collect(),
		}
	}
}

impl FormSettings {
	/// Parse and validate settings from a TOML document.
	///
	/// Keys that are absent keep their default values.
	///
	/// # Examples
	///
	/// ```
	/// use demographics_forms::FormSettings;
	///
	/// let settings = FormSettings::from_toml_str(r#"age_prompt = "Choose""#).unwrap();
	/// assert_eq!(settings.age_prompt, "Choose");
	/// assert_eq!(settings.age_options.len(), 5);
	/// ```
	pub fn from_toml_str(source: &str) -> Result<Self, SettingsError> {
		let settings: FormSettings = toml::from_str(source)?;
		settings.validate()?;
		Ok(settings)
	}

	/// Read, parse and validate a TOML settings file.
	pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
		let path = path.as_ref();
		let source = std::fs::read_to_string(path)?;
		let settings = Self::from_toml_str(&source)?;
		tracing::debug!(path = %path.display(), "Loaded form settings");
		Ok(settings)
	}

	/// Check the invariants the form relies on.
	pub fn validate(&self) -> Result<(), SettingsError> {
		if self.age_options.is_empty() {
			return Err(SettingsError::Invalid(
				"age_options must not be empty".to_string(),
			));
		}
		if self.age_options.contains(&self.age_prompt) {
			return Err(SettingsError::Invalid(format!(
				"age_prompt '{}' must not be one of the age options",
				self.age_prompt
			)));
		}
		if self.gender_labels.is_empty() {
			return Err(SettingsError::Invalid(
				"gender_labels must not be empty".to_string(),
			));
		}

		let mut seen = HashSet::new();
		for label in &self.gender_labels {
			if !seen.insert(label.as_str()) {
				return Err(SettingsError::Invalid(format!(
					"duplicate gender label '{}'",
					label
				)));
			}
		}
		Ok(())
	}

	pub fn is_age_option(&self, value: &str) -> bool {
		self.age_options.iter().any(|option| option == value)
	}

	pub fn is_gender_label(&self, label: &str) -> bool {
		self.gender_labels.iter().any(|known| known == label)
	}
}
