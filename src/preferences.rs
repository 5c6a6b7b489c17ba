//! Persisted display preferences.
//!
//! Preferences are unrelated to the listing data and live in their own small
//! JSON document inside the configuration directory.

use std::env;
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::app_dirs;

const FILE_NAME: &str = "preferences.json";

/// Set by many terminals to `"<fg>;<bg>"` palette indices.
const COLORFGBG_ENV: &str = "COLORFGBG";

/// Colour scheme used by the plain-text renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
	#[default]
	Light,
	Dark,
}

impl Theme {
	pub fn id(self) -> &'static str {
		match self {
			Self::Light => "light",
			Self::Dark => "dark",
		}
	}

	/// Theme matching the terminal background, when the terminal reports it.
	pub fn detect() -> Option<Self> {
		Self::from_colorfgbg(&env::var(COLORFGBG_ENV).ok()?)
	}

	/// Read the background from a `COLORFGBG` value such as `"15;0"`.
	///
	/// Only the 16 basic palette entries are understood; white and the bright
	/// colours other than bright black count as light backgrounds.
	pub fn from_colorfgbg(value: &str) -> Option<Self> {
		let background: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
		match background {
			0..=6 | 8 => Some(Self::Dark),
			7 | 9..=15 => Some(Self::Light),
			_ => None,
		}
	}

	#[must_use]
	pub fn toggled(self) -> Self {
		match self {
			Self::Light => Self::Dark,
			Self::Dark => Self::Light,
		}
	}
}

impl fmt::Display for Theme {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.id())
	}
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme '{0}' (expected light or dark)")]
pub struct ParseThemeError(String);

impl FromStr for Theme {
	type Err = ParseThemeError;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		match value.trim().to_ascii_lowercase().as_str() {
			"light" => Ok(Self::Light),
			"dark" => Ok(Self::Dark),
			_ => Err(ParseThemeError(value.to_string())),
		}
	}
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
struct PreferenceDocument {
	theme: Option<Theme>,
}

/// File-backed store for display preferences.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
	path: PathBuf,
}

impl PreferenceStore {
	/// Use the preference file inside the application config directory.
	///
	/// # Errors
	///
	/// Returns an error when the config directory cannot be determined.
	pub fn open_default() -> Result<Self> {
		Ok(Self::at(app_dirs::get_config_dir()?.join(FILE_NAME)))
	}

	/// Use the preference file at `path`. The file is created on first write.
	pub fn at(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	/// Return the saved theme, if one was ever stored.
	///
	/// # Errors
	///
	/// Returns an error when the preference file exists but cannot be read or
	/// parsed.
	pub fn theme(&self) -> Result<Option<Theme>> {
		Ok(self.read()?.theme)
	}

	/// Persist `theme` as the preferred theme.
	///
	/// # Errors
	///
	/// Returns an error when the preference file cannot be written.
	pub fn set_theme(&self, theme: Theme) -> Result<()> {
		let mut document = self.read()?;
		document.theme = Some(theme);
		self.write(&document)?;
		debug!(theme = %theme, path = %self.path.display(), "saved theme preference");
		Ok(())
	}

	fn read(&self) -> Result<PreferenceDocument> {
		match fs::read_to_string(&self.path) {
			Ok(contents) => serde_json::from_str(&contents).with_context(|| {
				format!("failed to parse preferences at {}", self.path.display())
			}),
			Err(err) if err.kind() == ErrorKind::NotFound => Ok(PreferenceDocument::default()),
			Err(err) => Err(err)
				.with_context(|| format!("failed to read preferences at {}", self.path.display())),
		}
	}

	fn write(&self, document: &PreferenceDocument) -> Result<()> {
		if let Some(parent) = self.path.parent() {
			fs::create_dir_all(parent)
				.with_context(|| format!("failed to create {}", parent.display()))?;
		}
		let contents = serde_json::to_string_pretty(document)?;
		fs::write(&self.path, contents)
			.with_context(|| format!("failed to write preferences to {}", self.path.display()))
	}
}

#[cfg(test)]
mod tests {
	use tempfile::tempdir;

	use super::*;

	#[test]
	fn missing_file_means_no_saved_theme() {
		let dir = tempdir().unwrap();
		let store = PreferenceStore::at(dir.path().join(FILE_NAME));
		assert_eq!(store.theme().unwrap(), None);
	}

	#[test]
	fn saved_theme_round_trips_through_disk() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("nested").join(FILE_NAME);
		PreferenceStore::at(&path).set_theme(Theme::Dark).unwrap();

		let reopened = PreferenceStore::at(&path);
		assert_eq!(reopened.theme().unwrap(), Some(Theme::Dark));
	}

	#[test]
	fn corrupt_file_is_reported() {
		let dir = tempdir().unwrap();
		let path = dir.path().join(FILE_NAME);
		fs::write(&path, "not json").unwrap();

		let err = PreferenceStore::at(&path).theme().unwrap_err();
		assert!(err.to_string().contains("failed to parse preferences"));
	}

	#[test]
	fn terminal_background_picks_the_theme() {
		assert_eq!(Theme::from_colorfgbg("15;0"), Some(Theme::Dark));
		assert_eq!(Theme::from_colorfgbg("0;15"), Some(Theme::Light));
		assert_eq!(Theme::from_colorfgbg("12;7"), Some(Theme::Light));
		assert_eq!(Theme::from_colorfgbg("7;default;8"), Some(Theme::Dark));
		assert_eq!(Theme::from_colorfgbg("15;default"), None);
		assert_eq!(Theme::from_colorfgbg("0;231"), None);
		assert_eq!(Theme::from_colorfgbg(""), None);
	}

	#[test]
	fn themes_parse_and_toggle() {
		assert_eq!("Dark".parse::<Theme>(), Ok(Theme::Dark));
		assert!("solarized".parse::<Theme>().is_err());
		assert_eq!(Theme::Light.toggled(), Theme::Dark);
	}
}
