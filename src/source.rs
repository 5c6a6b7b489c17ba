//! Read listing collections from JSON documents.
//!
//! A document is a JSON array of listing records. Categories are never read
//! from the document: each record is classified from its title as it is
//! ingested.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::types::Listing;

/// Parse a JSON array of listing records.
///
/// # Errors
///
/// Returns an error when the input is not valid JSON or a record is missing a
/// required field.
pub fn parse_listings<R: Read>(reader: R) -> Result<Vec<Listing>> {
	let listings: Vec<Listing> =
		serde_json::from_reader(reader).context("failed to parse listing records")?;
	Ok(listings)
}

/// Read the listings stored in the JSON file at `path`.
///
/// # Errors
///
/// Returns an error when the file cannot be opened or parsed.
pub fn read_listings(path: impl AsRef<Path>) -> Result<Vec<Listing>> {
	let path = path.as_ref();
	let file = File::open(path)
		.with_context(|| format!("failed to open listings file {}", path.display()))?;
	let listings = parse_listings(BufReader::new(file))
		.with_context(|| format!("failed to read listings from {}", path.display()))?;
	debug!(path = %path.display(), count = listings.len(), "read listings");
	Ok(listings)
}
