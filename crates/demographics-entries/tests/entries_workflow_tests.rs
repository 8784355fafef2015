//! End-to-end list/form workflow

use demographics_entries::{EntriesApp, EntryStore, Navigator, Screen, StoreError};
use demographics_forms::{DemographicsForm, Payload, TextField};
use rstest::rstest;
use std::sync::{Arc, Mutex};

/// Navigator shared with the test so calls can be inspected after the app
/// takes ownership.
#[derive(Clone, Default)]
struct SharedNavigator(Arc<Mutex<Vec<Screen>>>);

impl Navigator for SharedNavigator {
	fn show_list(&mut self) {
		self.0.lock().unwrap().push(Screen::List);
	}

	fn show_form(&mut self) {
		self.0.lock().unwrap().push(Screen::Form);
	}
}

fn payload(first: &str, last: &str) -> Payload {
	Payload {
		first_name: first.to_string(),
		last_name: last.to_string(),
		age_range: "35-44".to_string(),
		genders_selected: vec!["Man/boy".to_string()],
		phone_number: "(555) 222-3333".to_string(),
	}
}

#[rstest]
fn test_append_update_get() {
	// Arrange
	let mut store = EntryStore::new();

	// Act
	store.append(payload("Ann", "Lee"));
	store.update(0, payload("Bo", "Kim")).unwrap();

	// Assert
	assert_eq!(store.get(0), Ok(&payload("Bo", "Kim")));
	assert_eq!(
		store.get(5),
		Err(StoreError::OutOfRange { index: 5, len: 1 })
	);
}

#[rstest]
fn test_two_entries_then_edit_second() {
	// Arrange
	let navigator = SharedNavigator::default();
	let mut app = EntriesApp::new(DemographicsForm::new(), navigator.clone());

	for (first, last) in [("Ann", "Lee"), ("Bo", "Kim")] {
		app.new_entry();
		let form = app.form_mut();
		form.on_text_inserted(TextField::FirstName, first);
		form.on_text_inserted(TextField::LastName, last);
		form.on_age_selected("18-24");
		form.on_gender_toggled("Woman/girl", true);
		form.on_text_inserted(TextField::Phone, "555.111.2222");
		form.on_phone_focus_lost();
		app.submit().unwrap();
	}

	// Act
	app.edit_entry(1).unwrap();
	app.form_mut().on_age_selected("55+");
	let written = app.submit().unwrap();

	// Assert
	assert_eq!(written, Some(1));
	let titles: Vec<String> = app.rows().into_iter().map(|row| row.title).collect();
	assert_eq!(titles, vec!["Ann Lee", "Bo Kim"]);
	let edited = app.store().get(1).unwrap();
	assert_eq!(edited.age_range, "55+");
	assert_eq!(edited.phone_number, "(555) 111-2222");
	assert_eq!(app.store().get(0).unwrap().age_range, "18-24");
	assert_eq!(
		*navigator.0.lock().unwrap(),
		vec![
			Screen::Form,
			Screen::List,
			Screen::Form,
			Screen::List,
			Screen::Form,
			Screen::List
		]
	);
}

#[rstest]
fn test_prefilled_store_is_editable() {
	// Arrange
	let mut store = EntryStore::new();
	store.append(payload("", ""));
	let mut app = EntriesApp::with_store(DemographicsForm::new(), store, SharedNavigator::default());

	// Act
	app.edit_entry(0).unwrap();

	// Assert
	assert_eq!(app.rows()[0].title, "Entry 1");
	assert!(!app.form().is_submit_ready());
	assert_eq!(app.form().age_range(), "35-44");
}
