//! Presentation helpers shared by the plain-text renderer.

use chrono::{DateTime, Utc};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::types::EmploymentType;

impl EmploymentType {
	/// Human readable label, e.g. "Full Time".
	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			Self::FullTime => "Full Time",
			Self::PartTime => "Part Time",
			Self::Internship => "Internship",
			Self::Contract => "Contract",
		}
	}
}

/// Describe how long ago a listing was posted relative to `now`.
///
/// Days are whole elapsed days. Anything under a week is counted in days,
/// under thirty days in weeks and beyond that in thirty-day months. Timestamps
/// in the future are measured by their absolute distance.
#[must_use]
pub fn posted_ago(posted_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
	let days = (now - posted_at).num_days().unsigned_abs();
	match days {
		0 => "Today".to_string(),
		1 => "1 day ago".to_string(),
		2..=6 => format!("{days} days ago"),
		7..=29 => format!("{} weeks ago", days / 7),
		_ => format!("{} months ago", days / 30),
	}
}

/// Truncate `text` to at most `width` terminal columns, marking cuts with `…`.
#[must_use]
pub fn truncate_to_width(text: &str, width: usize) -> String {
	if text.width() <= width {
		return text.to_string();
	}
	if width == 0 {
		return String::new();
	}

	let mut out = String::new();
	let mut used = 0;
	for ch in text.chars() {
		let ch_width = ch.width().unwrap_or(0);
		if used + ch_width + 1 > width {
			break;
		}
		out.push(ch);
		used += ch_width;
	}
	out.push('…');
	out
}

/// Pad `text` with spaces to exactly `width` columns, truncating if needed.
#[must_use]
pub fn fit_to_width(text: &str, width: usize) -> String {
	let mut cell = truncate_to_width(text, width);
	let padding = width.saturating_sub(cell.width());
	cell.extend(std::iter::repeat_n(' ', padding));
	cell
}
