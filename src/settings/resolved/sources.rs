use std::fmt;

/// Where a configuration value came from, used to point users at the culprit
/// when validation fails.
#[derive(Debug, Clone)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) page_size: Option<SettingSource>,
	pub(crate) sort: Option<SettingSource>,
	pub(crate) theme: Option<SettingSource>,
	pub(crate) output: Option<SettingSource>,
}

impl ConfigSources {
	pub(crate) fn source_for_page_size(&self) -> SettingSource {
		Self::or_key(&self.page_size, "listings.page_size")
	}

	pub(crate) fn source_for_sort(&self) -> SettingSource {
		Self::or_key(&self.sort, "listings.sort")
	}

	pub(crate) fn source_for_theme(&self) -> SettingSource {
		Self::or_key(&self.theme, "ui.theme")
	}

	pub(crate) fn source_for_output(&self) -> SettingSource {
		Self::or_key(&self.output, "ui.output")
	}

	fn or_key(source: &Option<SettingSource>, key: &'static str) -> SettingSource {
		source.clone().unwrap_or(SettingSource::ConfigKey(key))
	}
}
