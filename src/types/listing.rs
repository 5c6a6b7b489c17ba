use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::category::{Category, classify};

/// Employment arrangement advertised by a listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmploymentType {
	#[default]
	FullTime,
	PartTime,
	Internship,
	Contract,
}

impl EmploymentType {
	/// Return the kebab-case identifier used in serialized output.
	#[must_use]
	pub fn id(self) -> &'static str {
		match self {
			Self::FullTime => "full-time",
			Self::PartTime => "part-time",
			Self::Internship => "internship",
			Self::Contract => "contract",
		}
	}

	#[must_use]
	pub fn is_internship(self) -> bool {
		self == Self::Internship
	}
}

/// A single job or internship posting.
///
/// Listings are immutable once built. The [`Category`] is derived from the
/// title when the listing is constructed and cannot be supplied by callers, so
/// it always agrees with [`classify`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ListingRecord")]
pub struct Listing {
	id: String,
	title: String,
	company: String,
	employment_type: EmploymentType,
	category: Category,
	description: String,
	skills: Vec<String>,
	posted_at: DateTime<Utc>,
	compensation: String,
	location: String,
	apply_url: String,
	is_remote: bool,
}

impl Listing {
	/// Create a listing with the required fields; everything else starts empty.
	#[must_use]
	pub fn new(
		id: impl Into<String>,
		title: impl Into<String>,
		company: impl Into<String>,
		employment_type: EmploymentType,
	) -> Self {
		let title = title.into();
		let category = classify(&title);
		Self {
			id: id.into(),
			title,
			company: company.into(),
			employment_type,
			category,
			description: String::new(),
			skills: Vec::new(),
			posted_at: DateTime::default(),
			compensation: String::new(),
			location: String::new(),
			apply_url: String::new(),
			is_remote: false,
		}
	}

	#[must_use]
	pub fn with_description(mut self, description: impl Into<String>) -> Self {
		self.description = description.into();
		self
	}

	/// Replace the skill tags. Order is kept as given and duplicates are allowed.
	#[must_use]
	pub fn with_skills<I, S>(mut self, skills: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.skills = skills.into_iter().map(Into::into).collect();
		self
	}

	#[must_use]
	pub fn with_posted_at(mut self, posted_at: DateTime<Utc>) -> Self {
		self.posted_at = posted_at;
		self
	}

	#[must_use]
	pub fn with_compensation(mut self, compensation: impl Into<String>) -> Self {
		self.compensation = compensation.into();
		self
	}

	#[must_use]
	pub fn with_location(mut self, location: impl Into<String>) -> Self {
		self.location = location.into();
		self
	}

	#[must_use]
	pub fn with_apply_url(mut self, apply_url: impl Into<String>) -> Self {
		self.apply_url = apply_url.into();
		self
	}

	#[must_use]
	pub fn with_remote(mut self, is_remote: bool) -> Self {
		self.is_remote = is_remote;
		self
	}

	pub fn id(&self) -> &str {
		&self.id
	}

	pub fn title(&self) -> &str {
		&self.title
	}

	pub fn company(&self) -> &str {
		&self.company
	}

	pub fn employment_type(&self) -> EmploymentType {
		self.employment_type
	}

	pub fn category(&self) -> Category {
		self.category
	}

	pub fn description(&self) -> &str {
		&self.description
	}

	pub fn skills(&self) -> &[String] {
		&self.skills
	}

	pub fn posted_at(&self) -> DateTime<Utc> {
		self.posted_at
	}

	pub fn compensation(&self) -> &str {
		&self.compensation
	}

	pub fn location(&self) -> &str {
		&self.location
	}

	pub fn apply_url(&self) -> &str {
		&self.apply_url
	}

	pub fn is_remote(&self) -> bool {
		self.is_remote
	}
}

/// Serialized shape of a listing as supplied by a data source.
///
/// There is no category field: it is recomputed from the title on conversion.
/// Aliases accept the field names used by the browser front end this data
/// format originated from.
#[derive(Debug, Clone, Deserialize)]
pub struct ListingRecord {
	pub id: String,
	pub title: String,
	pub company: String,
	#[serde(alias = "type")]
	pub employment_type: EmploymentType,
	#[serde(default)]
	pub description: String,
	#[serde(default)]
	pub skills: Vec<String>,
	#[serde(alias = "posted_date", alias = "postedDate")]
	pub posted_at: DateTime<Utc>,
	#[serde(default, alias = "salary")]
	pub compensation: String,
	#[serde(default)]
	pub location: String,
	#[serde(default, alias = "applyUrl")]
	pub apply_url: String,
	#[serde(default, alias = "isRemote")]
	pub is_remote: bool,
}

impl From<ListingRecord> for Listing {
	fn from(record: ListingRecord) -> Self {
		Listing::new(
			record.id,
			record.title,
			record.company,
			record.employment_type,
		)
		.with_description(record.description)
		.with_skills(record.skills)
		.with_posted_at(record.posted_at)
		.with_compensation(record.compensation)
		.with_location(record.location)
		.with_apply_url(record.apply_url)
		.with_remote(record.is_remote)
	}
}
