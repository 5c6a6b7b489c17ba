use serde::Deserialize;

use joblist::Theme;

use super::super::resolved::{ConfigError, ConfigSources, InvalidValue};
use crate::cli::{CliArgs, OutputFormat};

/// Presentation options prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) theme: Option<String>,
	pub(super) output: Option<String>,
}

pub(super) struct UiResolution {
	pub(super) theme: Option<Theme>,
	pub(super) output: OutputFormat,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(theme) = cli.theme {
			self.theme = Some(theme.as_str().to_string());
		}
		if let Some(output) = cli.output {
			self.output = Some(output.as_str().to_string());
		}
	}

	pub(super) fn resolve(self, sources: &ConfigSources) -> Result<UiResolution, ConfigError> {
		let theme = self
			.theme
			.map(|value| {
				value.parse::<Theme>().map_err(|err| {
					ConfigError::new("ui.theme", value.as_str(), sources.source_for_theme(), err)
				})
			})
			.transpose()?;

		let output = match self.output {
			None => OutputFormat::Plain,
			Some(value) => OutputFormat::from_id(&value).ok_or_else(|| {
				ConfigError::new(
					"ui.output",
					value.as_str(),
					sources.source_for_output(),
					InvalidValue::Output,
				)
			})?,
		};

		Ok(UiResolution { theme, output })
	}
}

#[cfg(test)]
mod tests {
	use super::super::super::resolved::SettingSource;
	use super::*;

	#[test]
	fn output_defaults_to_plain() {
		let resolved = UiSection::default().resolve(&ConfigSources::default()).unwrap();
		assert_eq!(resolved.output, OutputFormat::Plain);
		assert_eq!(resolved.theme, None);
	}

	#[test]
	fn invalid_theme_names_its_source() {
		let section = UiSection {
			theme: Some("solarized".into()),
			..UiSection::default()
		};
		let sources = ConfigSources {
			theme: Some(SettingSource::Environment("JOBLIST__UI__THEME")),
			..ConfigSources::default()
		};
		let err = section.resolve(&sources).err().unwrap();
		assert!(matches!(err.key, "ui.theme"));
		assert!(matches!(err.reason, InvalidValue::Theme(_)));
		assert!(err.to_string().contains("environment variable"));
	}

	#[test]
	fn unknown_output_format_is_rejected() {
		let section = UiSection {
			output: Some("yaml".into()),
			..UiSection::default()
		};
		let err = section.resolve(&ConfigSources::default()).err().unwrap();
		assert!(matches!(err.reason, InvalidValue::Output));
		assert!(err.to_string().contains("(got \"yaml\")"));
	}

	#[test]
	fn output_names_are_case_insensitive() {
		let section = UiSection {
			output: Some("JSON".into()),
			..UiSection::default()
		};
		let resolved = section.resolve(&ConfigSources::default()).unwrap();
		assert_eq!(resolved.output, OutputFormat::Json);
	}
}
