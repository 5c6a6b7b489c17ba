use thiserror::Error;

/// Reasons a batch of listings is rejected by
/// [`ListingStore::load`](crate::ListingStore::load).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ListingError {
	/// Two listings in the same batch share an identifier.
	#[error("listing id '{id}' appears more than once")]
	DuplicateId { id: String },

	/// A required text field is empty.
	#[error("listing at position {index} has an empty {field}")]
	EmptyField { index: usize, field: &'static str },
}

impl ListingError {
	pub fn empty_field(index: usize, field: &'static str) -> Self {
		Self::EmptyField { index, field }
	}
}
