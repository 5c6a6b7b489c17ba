use std::fmt::Write;

use anyhow::Result;
use chrono::{DateTime, Utc};
use joblist::display::{fit_to_width, posted_ago, truncate_to_width};
use joblist::{Listing, Theme};

use crate::workflow::BrowseOutcome;

const COLUMNS: [(&str, usize); 6] = [
	("TITLE", 28),
	("COMPANY", 12),
	("TYPE", 10),
	("LOCATION", 17),
	("COMPENSATION", 20),
	("POSTED", 12),
];

const RESET: &str = "\x1b[0m";
const DETAIL_INDENT: &str = "    ";
const DETAIL_WIDTH: usize = 96;

/// Rendering options for the plain-text output.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PlainStyle {
	pub(crate) theme: Theme,
	pub(crate) color: bool,
	pub(crate) now: DateTime<Utc>,
	/// Follow each row with its description, skills, remote marker and apply link.
	pub(crate) wide: bool,
}

impl PlainStyle {
	fn accent(&self) -> &'static str {
		match (self.color, self.theme) {
			(false, _) => "",
			(true, Theme::Light) => "\x1b[1;34m",
			(true, Theme::Dark) => "\x1b[1;96m",
		}
	}

	fn muted(&self) -> &'static str {
		match (self.color, self.theme) {
			(false, _) => "",
			(true, Theme::Light) => "\x1b[90m",
			(true, Theme::Dark) => "\x1b[37m",
		}
	}

	fn reset(&self) -> &'static str {
		if self.color { RESET } else { "" }
	}
}

/// Format the browse outcome as an aligned text table.
pub(crate) fn format_plain(outcome: &BrowseOutcome, style: &PlainStyle) -> String {
	let mut out = String::new();
	let aggregates = &outcome.aggregates;
	let _ = writeln!(
		out,
		"{}Showing {} of {} listings{} | {} jobs | {} internships | {} companies",
		style.accent(),
		outcome.listings.len(),
		outcome.matched,
		style.reset(),
		aggregates.job_count,
		aggregates.internship_count,
		aggregates.company_count,
	);

	if outcome.listings.is_empty() {
		out.push_str("No jobs found\n");
		let _ = writeln!(
			out,
			"{}Try adjusting your search criteria{}",
			style.muted(),
			style.reset()
		);
		return out;
	}

	let header: Vec<String> = COLUMNS
		.iter()
		.map(|(name, width)| fit_to_width(name, *width))
		.collect();
	let _ = writeln!(
		out,
		"{}{}{}",
		style.muted(),
		header.join(" ").trim_end(),
		style.reset()
	);

	for listing in &outcome.listings {
		let posted = posted_ago(listing.posted_at(), style.now);
		let cells = [
			listing.title(),
			listing.company(),
			listing.employment_type().label(),
			listing.location(),
			listing.compensation(),
			posted.as_str(),
		];
		let row: Vec<String> = cells
			.iter()
			.zip(COLUMNS)
			.map(|(cell, (_, width))| fit_to_width(cell, width))
			.collect();
		let _ = writeln!(out, "{}", row.join(" ").trim_end());
		if style.wide {
			write_details(&mut out, listing, style);
		}
	}

	if outcome.has_more {
		let _ = writeln!(
			out,
			"{}{} more; pass --pages {} to reveal them{}",
			style.muted(),
			outcome.matched - outcome.listings.len(),
			outcome.revealed_pages + 1,
			style.reset()
		);
	}

	out
}

fn write_details(out: &mut String, listing: &Listing, style: &PlainStyle) {
	if !listing.description().is_empty() {
		let _ = writeln!(
			out,
			"{DETAIL_INDENT}{}",
			truncate_to_width(listing.description(), DETAIL_WIDTH)
		);
	}

	let mut facts = Vec::new();
	if listing.is_remote() {
		facts.push("Remote".to_string());
	}
	if !listing.skills().is_empty() {
		facts.push(format!("Skills: {}", listing.skills().join(", ")));
	}
	if !listing.apply_url().is_empty() {
		facts.push(format!("Apply: {}", listing.apply_url()));
	}
	if !facts.is_empty() {
		let _ = writeln!(
			out,
			"{DETAIL_INDENT}{}{}{}",
			style.muted(),
			facts.join(" | "),
			style.reset()
		);
	}
}

/// Print a plain-text representation of the browse outcome.
pub(crate) fn print_plain(outcome: &BrowseOutcome, style: &PlainStyle) {
	print!("{}", format_plain(outcome, style));
}

/// Format the browse outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &BrowseOutcome) -> Result<String> {
	Ok(serde_json::to_string_pretty(outcome)?)
}

/// Print the JSON representation of the browse outcome.
pub(crate) fn print_json(outcome: &BrowseOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}

#[cfg(test)]
mod tests {
	use chrono::{Duration, TimeZone};
	use joblist::{ActiveFilter, Aggregates, EmploymentType, SortKey};
	use serde_json::Value;

	use super::*;

	fn now() -> DateTime<Utc> {
		Utc.with_ymd_and_hms(2024, 6, 30, 12, 0, 0).unwrap()
	}

	fn outcome(has_more: bool) -> BrowseOutcome {
		let listing = Listing::new(
			"job_1",
			"Machine Learning Engineer",
			"Salesforce",
			EmploymentType::Contract,
		)
		.with_location("Remote Worldwide")
		.with_compensation("$80 - $120/hour")
		.with_posted_at(now() - Duration::days(3));
		BrowseOutcome {
			filter: ActiveFilter::All,
			sort: Some(SortKey::Company),
			aggregates: Aggregates {
				job_count: 1,
				internship_count: 0,
				company_count: 1,
			},
			matched: if has_more { 5 } else { 1 },
			revealed_pages: 1,
			has_more,
			listings: vec![listing],
		}
	}

	fn plain() -> PlainStyle {
		PlainStyle {
			theme: Theme::Light,
			color: false,
			now: now(),
			wide: false,
		}
	}

	#[test]
	fn plain_output_lists_rows_and_counts() {
		let text = format_plain(&outcome(false), &plain());
		let lines: Vec<&str> = text.lines().collect();
		assert_eq!(
			lines[0],
			"Showing 1 of 1 listings | 1 jobs | 0 internships | 1 companies"
		);
		assert!(lines[1].starts_with("TITLE"));
		assert!(lines[2].starts_with("Machine Learning Engineer"));
		assert!(lines[2].contains("Salesforce"));
		assert!(lines[2].contains("Contract"));
		assert!(lines[2].ends_with("3 days ago"));
		assert_eq!(lines.len(), 3);
		assert!(!text.contains('\x1b'));
	}

	#[test]
	fn wide_output_adds_detail_lines() {
		let mut outcome = outcome(false);
		outcome.listings[0] = outcome.listings[0]
			.clone()
			.with_description("Train ranking models for the sales cloud.")
			.with_skills(["Python", "PyTorch"])
			.with_remote(true)
			.with_apply_url("https://careers.salesforce.com");
		let style = PlainStyle {
			wide: true,
			..plain()
		};

		let text = format_plain(&outcome, &style);
		let lines: Vec<&str> = text.lines().collect();
		assert_eq!(lines.len(), 5);
		assert_eq!(lines[3], "    Train ranking models for the sales cloud.");
		assert_eq!(
			lines[4],
			"    Remote | Skills: Python, PyTorch | Apply: https://careers.salesforce.com"
		);

		let narrow = format_plain(&outcome, &plain());
		assert!(!narrow.contains("PyTorch"));
	}

	#[test]
	fn plain_output_hints_at_more_pages() {
		let text = format_plain(&outcome(true), &plain());
		assert!(text.contains("4 more; pass --pages 2 to reveal them"));
	}

	#[test]
	fn empty_results_print_a_message() {
		let mut outcome = outcome(false);
		outcome.listings.clear();
		outcome.matched = 0;
		let text = format_plain(&outcome, &plain());
		assert!(text.contains("No jobs found"));
	}

	#[test]
	fn colour_follows_the_theme() {
		let style = PlainStyle {
			theme: Theme::Dark,
			color: true,
			now: now(),
			wide: false,
		};
		let text = format_plain(&outcome(false), &style);
		assert!(text.starts_with("\x1b[1;96m"));
	}

	#[test]
	fn json_format_includes_listings_and_aggregates() {
		let json = format_outcome_json(&outcome(true)).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["aggregates"]["job_count"], 1);
		assert_eq!(value["has_more"], true);
		assert_eq!(value["sort"], "company");
		assert_eq!(value["filter"]["kind"], "all");
		assert_eq!(value["listings"][0]["category"], "software-development");
		assert_eq!(value["listings"][0]["employment_type"], "contract");
	}
}
