use crate::field::{FieldError, FieldId, TextField};
use crate::handler::{CancelHandler, SubmitHandler};
use crate::payload::Payload;
use crate::phone::normalize_phone;
use crate::settings::FormSettings;
use crate::validators::{
	AgeRangeValidator, GenderSelectionValidator, NameValidator, PhoneValidator, valid_age,
	valid_genders, valid_name, valid_phone,
};
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};

/// Current raw value of every field on the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldValues {
	pub first_name: String,
	pub last_name: String,
	/// One of the configured age options, or the prompt sentinel
	pub age_range: String,
	pub genders: BTreeSet<String>,
	pub phone: String,
}

impl FieldValues {
	/// Values of a freshly reset form: empty text, the age prompt and no
	/// genders selected.
	pub fn empty(settings: &FormSettings) -> Self {
		Self {
			first_name: String::new(),
			last_name: String::new(),
			age_range: settings.age_prompt.clone(),
			genders: BTreeSet::new(),
			phone: String::new(),
		}
	}
}

/// All field values together with the readiness derived from them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormSnapshot {
	pub values: FieldValues,
	pub submit_ready: bool,
}

/// The demographics entry form.
///
/// A presentation layer forwards every user interaction to one of the
/// `on_*` handlers and reads [`is_submit_ready`](Self::is_submit_ready) to
/// enable or disable its submit control. Readiness is recomputed
/// synchronously after each handler, except while
/// [`load_entry`](Self::load_entry) is populating the fields.
///
/// # Examples
///
/// ```
/// use demographics_forms::{DemographicsForm, TextField};
///
/// let mut form = DemographicsForm::new();
/// form.on_text_inserted(TextField::FirstName, "Jane");
/// form.on_text_inserted(TextField::LastName, "Doe");
/// form.on_age_selected("25-34");
/// form.on_gender_toggled("Non-binary", true);
/// form.on_text_inserted(TextField::Phone, "5551234567");
/// form.on_phone_focus_lost();
///
/// assert!(form.is_submit_ready());
/// assert_eq!(form.text(TextField::Phone), "(555) 123-4567");
///
/// let payload = form.submit().unwrap();
/// assert_eq!(payload.phone_number, "(555) 123-4567");
/// ```
pub struct DemographicsForm {
	settings: FormSettings,
	values: FieldValues,
	submit_ready: bool,
	loading: bool,
	revision: u64,
	submit_handler: Option<Box<dyn SubmitHandler>>,
	cancel_handler: Option<Box<dyn CancelHandler>>,
}

impl DemographicsForm {
	/// Create a form with the default option sets
	///
	/// # Examples
	///
	/// ```
	/// use demographics_forms::DemographicsForm;
	///
	/// let form = DemographicsForm::new();
	/// assert!(!form.is_submit_ready());
	/// assert_eq!(form.age_range(), "Select age range");
	/// ```
	pub fn new() -> Self {
		Self::with_settings(FormSettings::default())
	}

	pub fn with_settings(settings: FormSettings) -> Self {
		let values = FieldValues::empty(&settings);
		let mut form = Self {
			settings,
			values,
			submit_ready: false,
			loading: false,
			revision: 0,
			submit_handler: None,
			cancel_handler: None,
		};
		form.recompute_readiness();
		form
	}

	/// Forward successful submits to `handler`
	///
	/// # Examples
	///
	/// ```
	/// use demographics_forms::{DemographicsForm, Payload};
	/// use std::sync::{Arc, Mutex};
	///
	/// let submitted: Arc<Mutex<Vec<Payload>>> = Arc::default();
	/// let sink = Arc::clone(&submitted);
	/// let form = DemographicsForm::new()
	///     .with_submit_handler(move |payload: Payload| sink.lock().unwrap().push(payload));
	/// ```
	pub fn with_submit_handler(mut self, handler: impl SubmitHandler + 'static) -> Self {
		self.submit_handler = Some(Box::new(handler));
		self
	}

	pub fn with_cancel_handler(mut self, handler: impl CancelHandler + 'static) -> Self {
		self.cancel_handler = Some(Box::new(handler));
		self
	}

	pub fn settings(&self) -> &FormSettings {
		&self.settings
	}

	pub fn values(&self) -> &FieldValues {
		&self.values
	}

	pub fn text(&self, field: TextField) -> &str {
		match field {
			TextField::FirstName => &self.values.first_name,
			TextField::LastName => &self.values.last_name,
			TextField::Phone => &self.values.phone,
		}
	}

	pub fn age_range(&self) -> &str {
		&self.values.age_range
	}

	pub fn genders(&self) -> &BTreeSet<String> {
		&self.values.genders
	}

	pub fn is_submit_ready(&self) -> bool {
		self.submit_ready
	}

	pub fn is_submit_disabled(&self) -> bool {
		!self.submit_ready
	}

	/// Number of readiness recomputations performed so far.
	pub fn revision(&self) -> u64 {
		self.revision
	}

	pub fn snapshot(&self) -> FormSnapshot {
		FormSnapshot {
			values: self.values.clone(),
			submit_ready: self.submit_ready,
		}
	}

	/// Append an incoming edit to a text field.
	///
	/// Disallowed characters are dropped from the edit before it is stored.
	///
	/// # Examples
	///
	/// ```
	/// use demographics_forms::{DemographicsForm, TextField};
	///
	/// let mut form = DemographicsForm::new();
	/// form.on_text_inserted(TextField::FirstName, "Jo");
	/// form.on_text_inserted(TextField::FirstName, "3hn!");
	/// assert_eq!(form.text(TextField::FirstName), "John");
	/// ```
	pub fn on_text_inserted(&mut self, field: TextField, delta: &str) {
		let filtered = field.filter(delta);
		self.text_mut(field).push_str(&filtered);
		self.recompute_readiness();
	}

	/// Replace a text field's whole value, as after a deletion or paste.
	pub fn on_text_replaced(&mut self, field: TextField, text: &str) {
		let filtered = field.filter(text);
		*self.text_mut(field) = filtered;
		self.recompute_readiness();
	}

	pub fn on_age_selected(&mut self, value: impl Into<String>) {
		self.values.age_range = value.into();
		self.recompute_readiness();
	}

	/// Add or remove a gender label from the selection.
	///
	/// Labels that are not offered by the form are ignored.
	pub fn on_gender_toggled(&mut self, label: &str, active: bool) {
		if !self.settings.is_gender_label(label) {
			tracing::warn!(label, "Ignoring unknown gender label");
			return;
		}

		if active {
			self.values.genders.insert(label.to_string());
		} else {
			self.values.genders.remove(label);
		}
		self.recompute_readiness();
	}

	/// Normalize the phone text once the field loses focus.
	///
	/// Text with exactly ten digits is rewritten as `(AAA) PPP-LLLL`; any
	/// other text is left as typed.
	pub fn on_phone_focus_lost(&mut self) {
		if let Some(formatted) = normalize_phone(&self.values.phone) {
			if formatted != self.values.phone {
				tracing::debug!("Normalized phone number");
			}
			self.values.phone = formatted;
		}
		self.recompute_readiness();
	}

	/// Populate the form from a stored entry, or reset it with `None`.
	///
	/// Readiness is recomputed exactly once, after every field is in place.
	/// An age range the form does not offer falls back to the prompt, and
	/// unknown gender labels are dropped.
	///
	/// # Examples
	///
	/// ```
	/// use demographics_forms::{DemographicsForm, TextField};
	///
	/// let mut form = DemographicsForm::new();
	/// form.on_text_inserted(TextField::FirstName, "Jane");
	///
	/// form.load_entry(None);
	/// assert_eq!(form.text(TextField::FirstName), "");
	/// assert!(!form.is_submit_ready());
	/// ```
	pub fn load_entry(&mut self, entry: Option<&Payload>) {
		self.loading = true;

		match entry {
			Some(entry) => {
				// Stored text is copied as-is; input filters only apply to edits.
				self.values.first_name = entry.first_name.clone();
				self.values.last_name = entry.last_name.clone();

				let age = if self.settings.is_age_option(&entry.age_range) {
					entry.age_range.clone()
				} else {
					self.settings.age_prompt.clone()
				};
				self.on_age_selected(age);

				self.clear_genders();
				for label in &entry.genders_selected {
					self.on_gender_toggled(label, true);
				}

				self.values.phone = entry.phone_number.clone();
			}
			None => {
				self.on_text_replaced(TextField::FirstName, "");
				self.on_text_replaced(TextField::LastName, "");
				let prompt = self.settings.age_prompt.clone();
				self.on_age_selected(prompt);
				self.clear_genders();
				self.on_text_replaced(TextField::Phone, "");
			}
		}

		self.loading = false;
		tracing::debug!(populated = entry.is_some(), "Loaded form entry");
		self.recompute_readiness();
	}

	/// Build the payload and forward it to the submit handler.
	///
	/// Returns `None` without side effects while the form is not ready.
	pub fn submit(&mut self) -> Option<Payload> {
		let payload = self.payload()?;
		tracing::info!("Submitting demographics form");
		if let Some(handler) = self.submit_handler.as_mut() {
			handler.submit(payload.clone());
		}
		Some(payload)
	}

	/// Discard in-progress edits and signal the cancel handler.
	pub fn cancel(&mut self) {
		tracing::info!("Cancelled demographics form");
		self.load_entry(None);
		if let Some(handler) = self.cancel_handler.as_mut() {
			handler.cancel();
		}
	}

	/// The payload the form would submit, if it is ready.
	pub fn payload(&self) -> Option<Payload> {
		if !self.submit_ready {
			return None;
		}
		Some(Payload::from_values(&self.values))
	}

	pub fn is_field_valid(&self, field: FieldId) -> bool {
		match field {
			FieldId::FirstName => valid_name(&self.values.first_name),
			FieldId::LastName => valid_name(&self.values.last_name),
			FieldId::AgeRange => valid_age(&self.values.age_range, &self.settings.age_options),
			FieldId::Genders => valid_genders(&self.values.genders),
			FieldId::Phone => valid_phone(&self.values.phone),
		}
	}

	/// Describe why `field` is invalid, or `None` when it is valid.
	pub fn field_error(&self, field: FieldId) -> Option<FieldError> {
		let result = match field {
			FieldId::FirstName | FieldId::LastName => {
				let value = if field == FieldId::FirstName {
					&self.values.first_name
				} else {
					&self.values.last_name
				};
				if value.trim().is_empty() {
					return Some(FieldError::Required(field));
				}
				NameValidator::new().validate(value)
			}
			FieldId::AgeRange => {
				if self.values.age_range == self.settings.age_prompt {
					return Some(FieldError::Required(field));
				}
				AgeRangeValidator::new(&self.settings.age_options).validate(&self.values.age_range)
			}
			FieldId::Genders => {
				if self.values.genders.is_empty() {
					return Some(FieldError::Required(field));
				}
				GenderSelectionValidator::new().validate(&self.values.genders)
			}
			FieldId::Phone => {
				if self.values.phone.trim().is_empty() {
					return Some(FieldError::Required(field));
				}
				PhoneValidator::new().validate(&self.values.phone)
			}
		};
		result.err()
	}

	/// Errors for every currently invalid field.
	pub fn field_errors(&self) -> HashMap<FieldId, FieldError> {
		FieldId::ALL
			.into_iter()
			.filter_map(|field| self.field_error(field).map(|error| (field, error)))
			.collect()
	}

	fn text_mut(&mut self, field: TextField) -> &mut String {
		match field {
			TextField::FirstName => &mut self.values.first_name,
			TextField::LastName => &mut self.values.last_name,
			TextField::Phone => &mut self.values.phone,
		}
	}

	fn clear_genders(&mut self) {
		let selected: Vec<String> = self.values.genders.iter().cloned().collect();
		for label in selected {
			self.on_gender_toggled(&label, false);
		}
	}

	fn recompute_readiness(&mut self) {
		if self.loading {
			return;
		}

		let ready = FieldId::ALL
			.into_iter()
			.all(|field| self.is_field_valid(field));
		if ready != self.submit_ready {
			tracing::debug!(ready, "Submit readiness changed");
		}
		self.submit_ready = ready;
		self.revision += 1;
	}
}

impl Default for DemographicsForm {
	fn default() -> Self {
		Self::new()
	}
}
