//! Submit and cancel collaborators

use crate::payload::Payload;
use std::io::Write;

/// Receives the payload of a successful submit.
///
/// Implemented for any `FnMut(Payload)` closure.
pub trait SubmitHandler: Send {
	fn submit(&mut self, payload: Payload);
}

impl<F> SubmitHandler for F
where
	F: FnMut(Payload) + Send,
{
	fn submit(&mut self, payload: Payload) {
		self(payload)
	}
}

/// Receives the bare cancellation signal.
///
/// Implemented for any `FnMut()` closure.
pub trait CancelHandler: Send {
	fn cancel(&mut self);
}

impl<F> CancelHandler for F
where
	F: FnMut() + Send,
{
	fn cancel(&mut self) {
		self()
	}
}

/// Writes each submitted payload as one line of JSON.
///
/// # Examples
///
/// ```
/// use demographics_forms::{JsonLinePrinter, Payload, SubmitHandler};
///
/// let mut printer = JsonLinePrinter::new(Vec::new());
/// printer.submit(Payload {
///     first_name: "Jane".to_string(),
///     last_name: "Doe".to_string(),
///     age_range: "55+".to_string(),
///     genders_selected: vec!["Man/boy".to_string()],
///     phone_number: "(555) 123-4567".to_string(),
/// });
///
/// let out = String::from_utf8(printer.into_inner()).unwrap();
/// assert!(out.starts_with(r#"{"firstName":"Jane""#));
/// assert!(out.ends_with('\n'));
/// ```
#[derive(Debug)]
pub struct JsonLinePrinter<W> {
	writer: W,
}

impl<W: Write> JsonLinePrinter<W> {
	pub fn new(writer: W) -> Self {
		Self { writer }
	}

	pub fn into_inner(self) -> W {
		self.writer
	}

	fn print(&mut self, payload: &Payload) -> std::io::Result<()> {
		serde_json::to_writer(&mut self.writer, payload)?;
		self.writer.write_all(b"\n")?;
		self.writer.flush()
	}
}

impl JsonLinePrinter<std::io::Stdout> {
	pub fn stdout() -> Self {
		Self::new(std::io::stdout())
	}
}

impl<W: Write + Send> SubmitHandler for JsonLinePrinter<W> {
	fn submit(&mut self, payload: Payload) {
		if let Err(e) = self.print(&payload) {
			tracing::warn!("Failed to print submitted payload: {}", e);
		}
	}
}
