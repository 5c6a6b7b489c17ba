use joblist::ParseSortKeyError;
use joblist::preferences::ParseThemeError;
use thiserror::Error;

use super::SettingSource;

/// Why a configured value was refused.
#[derive(Debug, Error)]
pub(crate) enum InvalidValue {
	#[error("page size must be greater than zero")]
	ZeroPageSize,
	#[error(transparent)]
	Sort(#[from] ParseSortKeyError),
	#[error(transparent)]
	Theme(#[from] ParseThemeError),
	#[error("unknown output format (expected plain or json)")]
	Output,
}

/// A setting that failed validation, with the layer it was read from.
#[derive(Debug, Error)]
#[error("invalid {key} from {origin}: {reason} (got {value:?})")]
pub(crate) struct ConfigError {
	pub(crate) key: &'static str,
	pub(crate) value: String,
	pub(crate) origin: SettingSource,
	pub(crate) reason: InvalidValue,
}

impl ConfigError {
	pub(crate) fn new(
		key: &'static str,
		value: impl Into<String>,
		origin: SettingSource,
		reason: impl Into<InvalidValue>,
	) -> Self {
		Self {
			key,
			value: value.into(),
			origin,
			reason: reason.into(),
		}
	}
}
