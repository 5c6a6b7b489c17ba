use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::types::Listing;

/// Field used to order the filtered listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
	/// Most recent first.
	#[default]
	#[serde(rename = "date", alias = "posted-at")]
	PostedAt,
	Company,
	Title,
}

impl SortKey {
	pub fn id(self) -> &'static str {
		match self {
			Self::PostedAt => "date",
			Self::Company => "company",
			Self::Title => "title",
		}
	}

	/// Compare two listings under this key.
	pub(crate) fn compare(self, a: &Listing, b: &Listing) -> Ordering {
		match self {
			Self::PostedAt => b.posted_at().cmp(&a.posted_at()),
			Self::Company => locale_cmp(a.company(), b.company()),
			Self::Title => locale_cmp(a.title(), b.title()),
		}
	}
}

impl fmt::Display for SortKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.id())
	}
}

/// Error returned when parsing an unknown sort key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort key '{0}' (expected date, company or title)")]
pub struct ParseSortKeyError(String);

impl FromStr for SortKey {
	type Err = ParseSortKeyError;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		match value.trim().to_ascii_lowercase().as_str() {
			"date" | "posted-at" | "posted_at" => Ok(Self::PostedAt),
			"company" => Ok(Self::Company),
			"title" => Ok(Self::Title),
			_ => Err(ParseSortKeyError(value.to_string())),
		}
	}
}

/// Human-oriented string ordering.
///
/// Three levels, each consulted only when the previous one ties:
/// 1. base letters, ignoring accents and case (`"Éclair" < "Zeta"`)
/// 2. accents, ignoring case (`"abc" < "ábc"`)
/// 3. case, lower before upper (`"github" < "GitHub"`)
///
/// Identical strings compare equal, which keeps the surrounding stable sort
/// stable.
pub(crate) fn locale_cmp(a: &str, b: &str) -> Ordering {
	base_letters(a)
		.cmp(base_letters(b))
		.then_with(|| folded(a).cmp(folded(b)))
		.then_with(|| b.cmp(a))
}

fn base_letters(text: &str) -> impl Iterator<Item = char> + '_ {
	text.nfd()
		.filter(|ch| !is_combining_mark(*ch))
		.flat_map(char::to_lowercase)
}

fn folded(text: &str) -> impl Iterator<Item = char> + '_ {
	text.nfd().flat_map(char::to_lowercase)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn case_does_not_split_alphabetical_runs() {
		assert_eq!(locale_cmp("apple", "Banana"), Ordering::Less);
		assert_eq!(locale_cmp("Zoom", "adobe"), Ordering::Greater);
		assert_eq!(locale_cmp("Figma", "Figma"), Ordering::Equal);
	}

	#[test]
	fn lower_case_sorts_before_upper_case_on_ties() {
		assert_eq!(locale_cmp("github", "GitHub"), Ordering::Less);
		assert_eq!(locale_cmp("GitHub", "github"), Ordering::Greater);
	}

	#[test]
	fn accented_letters_sort_with_their_base_letter() {
		assert_eq!(locale_cmp("Éclair", "Zeta"), Ordering::Less);
		assert_eq!(locale_cmp("ábc", "abd"), Ordering::Less);
		assert_eq!(locale_cmp("Ørsted", "Oracle"), Ordering::Greater);
		assert_eq!(locale_cmp("abc", "ábc"), Ordering::Less);

		let mut companies = vec!["Zalando", "Émile Studio", "Adobe", "éclat", "Deezer"];
		companies.sort_by(|a, b| locale_cmp(a, b));
		assert_eq!(
			companies,
			["Adobe", "Deezer", "éclat", "Émile Studio", "Zalando"]
		);
	}

	#[test]
	fn composed_and_decomposed_forms_tie_on_letters() {
		assert_ne!(locale_cmp("Caf\u{e9}", "Cafe\u{301}"), Ordering::Equal);
		assert_eq!(locale_cmp("Caf\u{e9} Noir", "Cafe\u{301} Bleu"), Ordering::Greater);
	}

	#[test]
	fn posted_at_serializes_under_its_cli_name() {
		assert_eq!(serde_json::to_value(SortKey::PostedAt).unwrap(), "date");
		assert_eq!(serde_json::to_value(SortKey::Company).unwrap(), "company");
		let parsed: SortKey = serde_json::from_str("\"posted-at\"").unwrap();
		assert_eq!(parsed, SortKey::PostedAt);
	}

	#[test]
	fn sort_keys_parse_from_cli_names() {
		assert_eq!("date".parse::<SortKey>(), Ok(SortKey::PostedAt));
		assert_eq!("Company".parse::<SortKey>(), Ok(SortKey::Company));
		assert_eq!("title".parse::<SortKey>(), Ok(SortKey::Title));
		assert!("salary".parse::<SortKey>().is_err());
	}
}
