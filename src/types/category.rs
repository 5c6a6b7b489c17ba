use std::fmt;

use serde::{Deserialize, Serialize};

/// Classification tag derived from a listing title.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
	#[default]
	SoftwareDevelopment,
	Design,
	Marketing,
	DataScience,
	Writing,
	CustomerService,
	Sales,
	Management,
}

impl Category {
	/// Return the kebab-case identifier used in serialized output.
	#[must_use]
	pub fn id(self) -> &'static str {
		match self {
			Self::SoftwareDevelopment => "software-development",
			Self::Design => "design",
			Self::Marketing => "marketing",
			Self::DataScience => "data-science",
			Self::Writing => "writing",
			Self::CustomerService => "customer-service",
			Self::Sales => "sales",
			Self::Management => "management",
		}
	}
}

impl fmt::Display for Category {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.id())
	}
}

/// Keyword rules checked in order; the first rule with a matching keyword wins.
const RULES: &[(&[&str], Category)] = &[
	(
		&["developer", "engineer", "programmer"],
		Category::SoftwareDevelopment,
	),
	(&["design", "ui", "ux"], Category::Design),
	(&["marketing", "seo", "social"], Category::Marketing),
	(&["data", "analyst", "scientist"], Category::DataScience),
	(&["writer", "content"], Category::Writing),
	(&["support", "service", "success"], Category::CustomerService),
	(&["sales", "representative"], Category::Sales),
	(&["manager", "product"], Category::Management),
];

/// Derive the [`Category`] for a listing title.
///
/// Matching is a case-insensitive substring test against [`RULES`]. Titles that
/// hit several keyword sets take the earliest rule, so "Engineering Manager" is
/// software development rather than management. Titles matching nothing fall
/// back to [`Category::SoftwareDevelopment`].
#[must_use]
pub fn classify(title: &str) -> Category {
	let title = title.to_lowercase();
	RULES
		.iter()
		.find(|(keywords, _)| keywords.iter().any(|keyword| title.contains(keyword)))
		.map_or(Category::default(), |(_, category)| *category)
}
