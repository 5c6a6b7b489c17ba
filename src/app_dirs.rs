//! Where `joblist` keeps its files.
//!
//! Each directory can be pinned with an environment variable; otherwise the
//! platform layout from the `directories` crate is used.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

pub const CONFIG_DIR_ENV: &str = "JOBLIST_CONFIG_DIR";
pub const DATA_DIR_ENV: &str = "JOBLIST_DATA_DIR";

/// Listings document read when neither `FILE` nor `listings.path` is given.
pub const DEFAULT_LISTINGS_FILE: &str = "listings.json";

fn resolve(env_name: &str, pick: fn(&ProjectDirs) -> &Path) -> Result<PathBuf> {
	// an empty override counts as unset
	if let Some(dir) = env::var_os(env_name).filter(|value| !value.is_empty()) {
		return Ok(PathBuf::from(dir));
	}

	let dirs = ProjectDirs::from("io", "joblist", "joblist")
		.ok_or_else(|| anyhow!("no home directory to place joblist files in"))?;
	Ok(pick(&dirs).to_path_buf())
}

/// Directory holding `config.toml` and the saved preferences.
pub fn get_config_dir() -> Result<PathBuf> {
	resolve(CONFIG_DIR_ENV, ProjectDirs::config_local_dir)
}

/// Directory holding the default listings document.
pub fn get_data_dir() -> Result<PathBuf> {
	resolve(DATA_DIR_ENV, ProjectDirs::data_local_dir)
}

/// Path of the listings document used when none is configured.
pub fn default_listings_file() -> Result<PathBuf> {
	Ok(get_data_dir()?.join(DEFAULT_LISTINGS_FILE))
}
