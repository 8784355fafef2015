use demographics_forms::Payload;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
	#[error("Entry index {index} out of range (store holds {len} entries)")]
	OutOfRange { index: usize, len: usize },
}

pub type StoreResult<T> = Result<T, StoreError>;

/// One row of the entry list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntrySummary {
	pub index: usize,
	pub title: String,
}

/// Ordered in-memory collection of submitted payloads.
///
/// Entries keep their position for the lifetime of the store; there is no
/// delete or reorder.
///
/// # Examples
///
/// ```
/// use demographics_entries::EntryStore;
/// use demographics_forms::Payload;
///
/// let mut store = EntryStore::new();
/// let index = store.append(Payload {
///     first_name: "Jane".to_string(),
///     last_name: "Doe".to_string(),
///     age_range: "25-34".to_string(),
///     genders_selected: vec!["Non-binary".to_string()],
///     phone_number: "(555) 123-4567".to_string(),
/// });
///
/// assert_eq!(index, 0);
/// assert_eq!(store.list()[0].title, "Jane Doe");
/// assert!(store.get(1).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct EntryStore {
	entries: Vec<Payload>,
}

impl EntryStore {
	pub fn new() -> Self {
		Self {
			entries: Vec::new(),
		}
	}

	/// Add an entry at the end and return its index.
	pub fn append(&mut self, payload: Payload) -> usize {
		self.entries.push(payload);
		let index = self.entries.len() - 1;
		tracing::info!(index, "Appended entry");
		index
	}

	/// Replace the entry at `index`.
	pub fn update(&mut self, index: usize, payload: Payload) -> StoreResult<()> {
		let len = self.entries.len();
		let slot = self
			.entries
			.get_mut(index)
			.ok_or(StoreError::OutOfRange { index, len })?;
		*slot = payload;
		tracing::info!(index, "Updated entry");
		Ok(())
	}

	pub fn get(&self, index: usize) -> StoreResult<&Payload> {
		self.entries.get(index).ok_or(StoreError::OutOfRange {
			index,
			len: self.entries.len(),
		})
	}

	/// Row summaries in index order.
	///
	/// The title is the trimmed full name, or `Entry {n}` (1-based) when both
	/// names are blank.
	pub fn list(&self) -> Vec<EntrySummary> {
		self.entries
			.iter()
			.enumerate()
			.map(|(index, payload)| EntrySummary {
				index,
				title: payload
					.display_name()
					.unwrap_or_else(|| format!("Entry {}", index + 1)),
			})
			.collect()
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = &Payload> {
		self.entries.iter()
	}
}
