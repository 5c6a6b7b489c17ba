use std::fmt::Write;

use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use joblist::{PreferenceStore, app_dirs, logging};

fn describe<T: std::fmt::Display>(value: anyhow::Result<T>) -> String {
	value.map_or_else(|err| format!("unavailable ({err})"), |value| value.to_string())
}

/// Version banner listing where configuration and saved preferences live.
pub(super) fn long_version() -> &'static str {
	let config_dir = describe(app_dirs::get_config_dir().map(|path| path.display().to_string()));
	let data_dir = describe(app_dirs::get_data_dir().map(|path| path.display().to_string()));
	let preferences =
		describe(PreferenceStore::open_default().map(|store| store.path().display().to_string()));

	let mut details = format!("joblist {}", env!("CARGO_PKG_VERSION"));
	let _ = writeln!(details);
	let _ = writeln!(details, "config directory: {config_dir}");
	let _ = writeln!(details, "data directory: {data_dir}");
	let _ = writeln!(details, "preferences: {preferences}");
	let _ = write!(details, "log filter variable: {}", logging::LOG_ENV);

	Box::leak(details.into_boxed_str())
}

pub(super) fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Blue.on_default().effects(Effects::BOLD | Effects::UNDERLINE))
		.usage(AnsiColor::Blue.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::BrightCyan.on_default())
		.placeholder(AnsiColor::Magenta.on_default())
		.error(AnsiColor::Red.on_default().effects(Effects::BOLD))
}
