use anyhow::{Error, Result};
use serde::Deserialize;
use std::env;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

mod listings;
mod ui;

use listings::ListingsSection;
use ui::UiSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	listings: ListingsSection,
	ui: UiSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.listings.apply_cli_overrides(cli);
		self.ui.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			page_size: detect_source(
				cli.page_size.is_some(),
				self.listings.page_size.is_some(),
				"JOBLIST__LISTINGS__PAGE_SIZE",
				"--page-size",
				"listings.page_size",
			),
			sort: detect_source(
				cli.sort.is_some(),
				self.listings.sort.is_some(),
				"JOBLIST__LISTINGS__SORT",
				"--sort",
				"listings.sort",
			),
			theme: detect_source(
				cli.theme.is_some(),
				self.ui.theme.is_some(),
				"JOBLIST__UI__THEME",
				"--theme",
				"ui.theme",
			),
			output: detect_source(
				cli.output.is_some(),
				self.ui.output.is_some(),
				"JOBLIST__UI__OUTPUT",
				"--output",
				"ui.output",
			),
		};

		let listings = self.listings.resolve(&sources).map_err(Error::new)?;
		let ui = self.ui.resolve(&sources).map_err(Error::new)?;

		Ok(ResolvedConfig {
			listings_path: listings.path,
			page_size: listings.page_size,
			sort: listings.sort,
			theme: ui.theme,
			output: ui.output,
		})
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}
