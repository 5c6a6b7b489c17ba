use std::collections::HashSet;

use serde::Serialize;

use crate::types::Listing;

/// Summary counts over the currently filtered listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Aggregates {
	/// Listings whose employment type is anything but internship.
	pub job_count: usize,
	pub internship_count: usize,
	/// Number of distinct company names.
	pub company_count: usize,
}

impl Aggregates {
	pub(crate) fn from_listings(listings: &[Listing]) -> Self {
		let internship_count = listings
			.iter()
			.filter(|listing| listing.employment_type().is_internship())
			.count();
		let company_count = listings
			.iter()
			.map(Listing::company)
			.collect::<HashSet<_>>()
			.len();

		Self {
			job_count: listings.len() - internship_count,
			internship_count,
			company_count,
		}
	}

	/// Total number of listings counted.
	#[must_use]
	pub fn total(&self) -> usize {
		self.job_count + self.internship_count
	}
}
