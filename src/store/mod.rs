//! In-memory listing store driving the browse experience.
//!
//! [`ListingStore`] owns the full listing collection plus a filtered view of it.
//! Searches and the show-only shortcuts rebuild the view from the full
//! collection, sorting reorders the view in place, and pagination reveals the
//! view one page at a time. Aggregates are always computed over the view.

mod aggregates;
mod sort;

use std::collections::HashSet;
use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::ListingError;
use crate::types::Listing;

pub use aggregates::Aggregates;
pub use sort::{ParseSortKeyError, SortKey};

/// Number of listings revealed per page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = NonZeroUsize::new(12).unwrap();

/// Free-text constraints applied by [`ListingStore::search`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchQuery {
	pub role: String,
	pub location: String,
}

impl SearchQuery {
	pub fn new(role: impl Into<String>, location: impl Into<String>) -> Self {
		Self {
			role: role.into(),
			location: location.into(),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.role.is_empty() && self.location.is_empty()
	}
}

/// Case-insensitive matcher built once per search.
struct QueryMatcher {
	role: Option<String>,
	location: Option<String>,
}

impl QueryMatcher {
	fn new(query: &SearchQuery) -> Self {
		let lowered = |value: &str| (!value.is_empty()).then(|| value.to_lowercase());
		Self {
			role: lowered(&query.role),
			location: lowered(&query.location),
		}
	}

	fn matches(&self, listing: &Listing) -> bool {
		self.matches_role(listing) && self.matches_location(listing)
	}

	fn matches_role(&self, listing: &Listing) -> bool {
		let Some(role) = self.role.as_deref() else {
			return true;
		};
		contains(listing.title(), role)
			|| contains(listing.company(), role)
			|| listing.skills().iter().any(|skill| contains(skill, role))
	}

	fn matches_location(&self, listing: &Listing) -> bool {
		self.location
			.as_deref()
			.is_none_or(|location| contains(listing.location(), location))
	}
}

fn contains(haystack: &str, lowered_needle: &str) -> bool {
	haystack.to_lowercase().contains(lowered_needle)
}

/// Predefined views reachable without typing a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShowOnly {
	All,
	Internship,
}

impl ShowOnly {
	pub fn id(self) -> &'static str {
		match self {
			Self::All => "all",
			Self::Internship => "internship",
		}
	}
}

impl fmt::Display for ShowOnly {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.id())
	}
}

/// Error returned when parsing an unknown view label.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown view '{0}' (expected all or internship)")]
pub struct ParseShowOnlyError(String);

impl FromStr for ShowOnly {
	type Err = ParseShowOnlyError;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		match value.trim().to_ascii_lowercase().as_str() {
			"all" => Ok(Self::All),
			"internship" | "internships" => Ok(Self::Internship),
			_ => Err(ParseShowOnlyError(value.to_string())),
		}
	}
}

/// The predicate that produced the current filtered view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ActiveFilter {
	#[default]
	All,
	Search(SearchQuery),
	Internship,
}

/// The currently revealed slice of the filtered listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VisiblePage<'a> {
	pub listings: &'a [Listing],
	/// Whether listings remain beyond the revealed window.
	pub has_more: bool,
}

impl VisiblePage<'_> {
	pub fn len(&self) -> usize {
		self.listings.len()
	}

	pub fn is_empty(&self) -> bool {
		self.listings.is_empty()
	}
}

/// Holds the listing collection and the filtered, sorted, paginated view of it.
#[derive(Debug, Clone)]
pub struct ListingStore {
	all: Vec<Listing>,
	filtered: Vec<Listing>,
	filter: ActiveFilter,
	page_size: NonZeroUsize,
	revealed_pages: usize,
}

impl Default for ListingStore {
	fn default() -> Self {
		Self::new(DEFAULT_PAGE_SIZE)
	}
}

impl ListingStore {
	/// Create an empty store revealing `page_size` listings per page.
	#[must_use]
	pub fn new(page_size: NonZeroUsize) -> Self {
		Self {
			all: Vec::new(),
			filtered: Vec::new(),
			filter: ActiveFilter::All,
			page_size,
			revealed_pages: 1,
		}
	}

	/// Replace the collection with `listings` and clear any filter.
	///
	/// # Errors
	///
	/// Rejects the whole batch, leaving the store untouched, when an id, title or
	/// company is empty or when two listings share an id.
	pub fn load(&mut self, listings: Vec<Listing>) -> Result<(), ListingError> {
		if let Err(err) = validate(&listings) {
			warn!(error = %err, count = listings.len(), "rejected listing batch");
			return Err(err);
		}

		debug!(count = listings.len(), "loaded listings");
		self.filtered = listings.clone();
		self.all = listings;
		self.filter = ActiveFilter::All;
		self.revealed_pages = 1;
		Ok(())
	}

	/// Filter the full collection by role and location.
	///
	/// Both queries are case-insensitive substrings and an empty query places no
	/// constraint. The role query matches the title, the company or any skill;
	/// the location query matches the location. The view is always rebuilt from
	/// the full collection in its load order, so an earlier sort is discarded.
	pub fn search(&mut self, role_query: &str, location_query: &str) {
		let query = SearchQuery::new(role_query, location_query);
		let matcher = QueryMatcher::new(&query);
		self.filtered = self
			.all
			.iter()
			.filter(|listing| matcher.matches(listing))
			.cloned()
			.collect();
		self.revealed_pages = 1;
		debug!(
			role = %query.role,
			location = %query.location,
			matched = self.filtered.len(),
			total = self.all.len(),
			"applied search"
		);
		self.filter = ActiveFilter::Search(query);
	}

	/// Reorder the filtered view. Ties keep their current relative order and the
	/// reveal progress is left as is.
	pub fn sort(&mut self, key: SortKey) {
		self.filtered.sort_by(|a, b| key.compare(a, b));
		debug!(key = %key, count = self.filtered.len(), "sorted listings");
	}

	/// Reveal one more page of the filtered view.
	pub fn reveal_more(&mut self) {
		self.revealed_pages = self.revealed_pages.saturating_add(1);
		debug!(revealed_pages = self.revealed_pages, "revealed another page");
	}

	/// Switch to one of the predefined views, discarding any free-text query.
	pub fn show_only(&mut self, view: ShowOnly) {
		match view {
			ShowOnly::All => {
				self.filtered = self.all.clone();
				self.filter = ActiveFilter::All;
			}
			ShowOnly::Internship => {
				self.filtered = self
					.all
					.iter()
					.filter(|listing| listing.employment_type().is_internship())
					.cloned()
					.collect();
				self.filter = ActiveFilter::Internship;
			}
		}
		self.revealed_pages = 1;
		debug!(view = %view, matched = self.filtered.len(), "switched view");
	}

	/// Return the revealed prefix of the filtered view.
	pub fn visible_page(&self) -> VisiblePage<'_> {
		let window = self.window_len();
		VisiblePage {
			listings: &self.filtered[..window.min(self.filtered.len())],
			has_more: window < self.filtered.len(),
		}
	}

	/// Summary counts over the filtered view.
	pub fn aggregates(&self) -> Aggregates {
		Aggregates::from_listings(&self.filtered)
	}

	pub fn all(&self) -> &[Listing] {
		&self.all
	}

	pub fn filtered(&self) -> &[Listing] {
		&self.filtered
	}

	pub fn filter(&self) -> &ActiveFilter {
		&self.filter
	}

	/// The free-text queries in effect, or `None` when a predefined view is shown.
	pub fn query(&self) -> Option<&SearchQuery> {
		match &self.filter {
			ActiveFilter::Search(query) => Some(query),
			ActiveFilter::All | ActiveFilter::Internship => None,
		}
	}

	/// Number of listings in the filtered view.
	pub fn len(&self) -> usize {
		self.filtered.len()
	}

	pub fn is_empty(&self) -> bool {
		self.filtered.is_empty()
	}

	pub fn page_size(&self) -> NonZeroUsize {
		self.page_size
	}

	pub fn revealed_pages(&self) -> usize {
		self.revealed_pages
	}

	/// Pages needed to show the whole filtered view; an empty view still has one.
	pub fn page_count(&self) -> usize {
		self.filtered.len().div_ceil(self.page_size.get()).max(1)
	}

	fn window_len(&self) -> usize {
		self.revealed_pages.saturating_mul(self.page_size.get())
	}
}

fn validate(listings: &[Listing]) -> Result<(), ListingError> {
	let mut seen = HashSet::with_capacity(listings.len());
	for (index, listing) in listings.iter().enumerate() {
		if listing.id().is_empty() {
			return Err(ListingError::empty_field(index, "id"));
		}
		if listing.title().is_empty() {
			return Err(ListingError::empty_field(index, "title"));
		}
		if listing.company().is_empty() {
			return Err(ListingError::empty_field(index, "company"));
		}
		if !seen.insert(listing.id()) {
			return Err(ListingError::DuplicateId {
				id: listing.id().to_string(),
			});
		}
	}
	Ok(())
}
