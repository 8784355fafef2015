//! List/form coordination for editing stored entries
//!
//! [`EntriesApp`] owns the form, the entry store and the navigation state.
//! The presentation layer calls its actions and renders whichever screen
//! the injected [`Navigator`] is told to show.

use crate::store::{EntryStore, EntrySummary, StoreResult};
use demographics_forms::DemographicsForm;

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
	#[default]
	List,
	Form,
}

/// Navigation and editing state of the entries workflow.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
	pub screen: Screen,
	/// Index of the entry being edited, `None` for a new entry
	pub editing: Option<usize>,
}

/// Switches the visible screen.
pub trait Navigator: Send {
	fn show_list(&mut self);
	fn show_form(&mut self);
}

/// Records the requested screen without rendering anything.
#[derive(Debug, Clone, Default)]
pub struct ScreenRecorder {
	pub history: Vec<Screen>,
}

impl Navigator for ScreenRecorder {
	fn show_list(&mut self) {
		self.history.push(Screen::List);
	}

	fn show_form(&mut self) {
		self.history.push(Screen::Form);
	}
}

/// Master-detail workflow over an [`EntryStore`].
///
/// # Examples
///
/// ```
/// use demographics_entries::{EntriesApp, Screen, ScreenRecorder};
/// use demographics_forms::{DemographicsForm, TextField};
///
/// let mut app = EntriesApp::new(DemographicsForm::new(), ScreenRecorder::default());
/// app.new_entry();
/// assert_eq!(app.state().screen, Screen::Form);
///
/// let form = app.form_mut();
/// form.on_text_inserted(TextField::FirstName, "Jane");
/// form.on_text_inserted(TextField::LastName, "Doe");
/// form.on_age_selected("25-34");
/// form.on_gender_toggled("Non-binary", true);
/// form.on_text_inserted(TextField::Phone, "5551234567");
///
/// assert_eq!(app.submit().unwrap(), Some(0));
/// assert_eq!(app.state().screen, Screen::List);
/// assert_eq!(app.rows()[0].title, "Jane Doe");
/// ```
pub struct EntriesApp<N> {
	state: AppState,
	form: DemographicsForm,
	store: EntryStore,
	navigator: N,
}

impl<N: Navigator> EntriesApp<N> {
	pub fn new(form: DemographicsForm, navigator: N) -> Self {
		Self::with_store(form, EntryStore::new(), navigator)
	}

	pub fn with_store(form: DemographicsForm, store: EntryStore, navigator: N) -> Self {
		Self {
			state: AppState::default(),
			form,
			store,
			navigator,
		}
	}

	pub fn state(&self) -> &AppState {
		&self.state
	}

	pub fn form(&self) -> &DemographicsForm {
		&self.form
	}

	pub fn form_mut(&mut self) -> &mut DemographicsForm {
		&mut self.form
	}

	pub fn store(&self) -> &EntryStore {
		&self.store
	}

	pub fn navigator(&self) -> &N {
		&self.navigator
	}

	/// Rows for the list screen.
	pub fn rows(&self) -> Vec<EntrySummary> {
		self.store.list()
	}

	/// Open an empty form for a new entry.
	pub fn new_entry(&mut self) {
		self.state.editing = None;
		self.form.load_entry(None);
		self.show(Screen::Form);
	}

	/// Open the form on a copy of the entry at `index`.
	pub fn edit_entry(&mut self, index: usize) -> StoreResult<()> {
		let entry = self.store.get(index)?;
		self.form.load_entry(Some(entry));
		self.state.editing = Some(index);
		tracing::debug!(index, "Editing entry");
		self.show(Screen::Form);
		Ok(())
	}

	/// Commit the form to the store and return to the list.
	///
	/// Returns the index written, or `None` when the form is not ready, in
	/// which case nothing changes.
	pub fn submit(&mut self) -> StoreResult<Option<usize>> {
		let Some(payload) = self.form.submit() else {
			return Ok(None);
		};

		let index = match self.state.editing {
			Some(index) => {
				self.store.update(index, payload)?;
				index
			}
			None => self.store.append(payload),
		};

		self.state.editing = None;
		self.show(Screen::List);
		Ok(Some(index))
	}

	/// Drop the in-progress edits and return to the list.
	pub fn cancel(&mut self) {
		self.form.cancel();
		self.state.editing = None;
		self.show(Screen::List);
	}

	fn show(&mut self, screen: Screen) {
		self.state.screen = screen;
		match screen {
			Screen::List => self.navigator.show_list(),
			Screen::Form => self.navigator.show_form(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use demographics_forms::{Payload, TextField};
	use rstest::{fixture, rstest};

	fn fill(form: &mut DemographicsForm, first: &str) {
		form.on_text_replaced(TextField::FirstName, first);
		form.on_text_replaced(TextField::LastName, "Doe");
		form.on_age_selected("25-34");
		form.on_gender_toggled("Non-binary", true);
		form.on_text_replaced(TextField::Phone, "5551234567");
	}

	#[fixture]
	fn app() -> EntriesApp<ScreenRecorder> {
		EntriesApp::new(DemographicsForm::new(), ScreenRecorder::default())
	}

	#[rstest]
	fn test_starts_on_list(app: EntriesApp<ScreenRecorder>) {
		assert_eq!(app.state(), &AppState::default());
		assert!(app.rows().is_empty());
	}

	#[rstest]
	fn test_new_entry_resets_form(mut app: EntriesApp<ScreenRecorder>) {
		// Arrange
		app.form_mut().on_text_inserted(TextField::FirstName, "Stale");

		// Act
		app.new_entry();

		// Assert
		assert_eq!(app.form().text(TextField::FirstName), "");
		assert_eq!(app.state().screen, Screen::Form);
		assert_eq!(app.state().editing, None);
		assert_eq!(app.navigator().history, vec![Screen::Form]);
	}

	#[rstest]
	fn test_submit_not_ready_stays_on_form(mut app: EntriesApp<ScreenRecorder>) {
		// Arrange
		app.new_entry();

		// Act
		let result = app.submit();

		// Assert
		assert_eq!(result, Ok(None));
		assert_eq!(app.state().screen, Screen::Form);
		assert!(app.store().is_empty());
	}

	#[rstest]
	fn test_edit_then_resubmit_updates_in_place(mut app: EntriesApp<ScreenRecorder>) {
		// Arrange
		app.new_entry();
		fill(app.form_mut(), "Jane");
		app.submit().unwrap();

		// Act
		app.edit_entry(0).unwrap();
		let editing = app.state().editing;
		app.form_mut().on_text_replaced(TextField::FirstName, "Janet");
		let index = app.submit().unwrap();

		// Assert
		assert_eq!(editing, Some(0));
		assert_eq!(index, Some(0));
		assert_eq!(app.store().len(), 1);
		assert_eq!(app.store().get(0).unwrap().first_name, "Janet");
		assert_eq!(app.state().editing, None);
	}

	#[rstest]
	fn test_edit_missing_entry(mut app: EntriesApp<ScreenRecorder>) {
		// Act
		let result = app.edit_entry(3);

		// Assert
		assert!(result.is_err());
		assert_eq!(app.state().screen, Screen::List);
		assert!(app.navigator().history.is_empty());
	}

	#[rstest]
	fn test_cancel_returns_to_list_without_storing(mut app: EntriesApp<ScreenRecorder>) {
		// Arrange
		app.new_entry();
		fill(app.form_mut(), "Jane");

		// Act
		app.cancel();

		// Assert
		assert!(app.store().is_empty());
		assert!(!app.form().is_submit_ready());
		assert_eq!(app.navigator().history, vec![Screen::Form, Screen::List]);
	}

	#[rstest]
	fn test_edit_copies_entry_into_form(mut app: EntriesApp<ScreenRecorder>) {
		// Arrange
		app.new_entry();
		fill(app.form_mut(), "Jane");
		app.submit().unwrap();
		app.edit_entry(0).unwrap();

		// Act
		app.form_mut().on_text_replaced(TextField::LastName, "Smith");

		// Assert
		let stored: &Payload = app.store().get(0).unwrap();
		assert_eq!(stored.last_name, "Doe");
	}
}
