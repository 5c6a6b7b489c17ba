use std::fmt::Write;

use super::ResolvedConfig;

pub(super) fn format_summary(config: &ResolvedConfig) -> String {
	let mut out = String::from("Effective configuration:\n");
	match &config.listings_path {
		Some(path) => {
			let _ = writeln!(out, "  Listings file: {}", path.display());
		}
		None => out.push_str("  Listings file: (none)\n"),
	}
	let _ = writeln!(out, "  Page size: {}", config.page_size);
	let _ = writeln!(
		out,
		"  Sort: {}",
		config
			.sort
			.map(|key| key.to_string())
			.unwrap_or_else(|| "(load order)".to_string())
	);
	let _ = writeln!(
		out,
		"  Theme: {}",
		config
			.theme
			.map(|theme| theme.to_string())
			.unwrap_or_else(|| "(saved preference)".to_string())
	);
	let _ = writeln!(out, "  Output: {}", config.output.as_str());
	out
}
