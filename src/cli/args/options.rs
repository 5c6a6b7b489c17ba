use clap::ValueEnum;

use joblist::{ShowOnly, SortKey, Theme};

/// Sort orders accepted via the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum SortArg {
	/// Most recently posted first
	Date,
	Company,
	Title,
}

impl SortArg {
	/// Return the string representation consumed by configuration loading.
	pub(crate) fn as_str(self) -> &'static str {
		match self {
			SortArg::Date => "date",
			SortArg::Company => "company",
			SortArg::Title => "title",
		}
	}
}

impl From<SortArg> for SortKey {
	fn from(value: SortArg) -> Self {
		match value {
			SortArg::Date => SortKey::PostedAt,
			SortArg::Company => SortKey::Company,
			SortArg::Title => SortKey::Title,
		}
	}
}

/// Predefined views selectable from the CLI.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum ShowArg {
	All,
	Internship,
}

impl From<ShowArg> for ShowOnly {
	fn from(value: ShowArg) -> Self {
		match value {
			ShowArg::All => ShowOnly::All,
			ShowArg::Internship => ShowOnly::Internship,
		}
	}
}

/// Colour themes selectable from the CLI.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum ThemeArg {
	Light,
	Dark,
}

impl ThemeArg {
	pub(crate) fn as_str(self) -> &'static str {
		match self {
			ThemeArg::Light => "light",
			ThemeArg::Dark => "dark",
		}
	}
}

impl From<ThemeArg> for Theme {
	fn from(value: ThemeArg) -> Self {
		match value {
			ThemeArg::Light => Theme::Light,
			ThemeArg::Dark => Theme::Dark,
		}
	}
}

/// Output formats supported by the CLI utility.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
}

impl OutputFormat {
	pub(crate) fn as_str(self) -> &'static str {
		match self {
			OutputFormat::Plain => "plain",
			OutputFormat::Json => "json",
		}
	}

	/// Parse a format name as written in configuration files.
	pub(crate) fn from_id(value: &str) -> Option<Self> {
		<Self as ValueEnum>::from_str(value.trim(), true).ok()
	}
}
