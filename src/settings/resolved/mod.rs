use std::num::NonZeroUsize;
use std::path::PathBuf;

use joblist::{SortKey, Theme};

use crate::cli::OutputFormat;

mod errors;
mod sources;
mod summary;

pub(crate) use errors::{ConfigError, InvalidValue};
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub listings_path: Option<PathBuf>,
	pub page_size: NonZeroUsize,
	pub sort: Option<SortKey>,
	pub theme: Option<Theme>,
	pub output: OutputFormat,
}

impl ResolvedConfig {
	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		print!("{}", summary::format_summary(self));
	}
}
