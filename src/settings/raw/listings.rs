use std::env;
use std::num::NonZeroUsize;
use std::path::PathBuf;

use serde::Deserialize;

use joblist::{DEFAULT_PAGE_SIZE, SortKey};

use super::super::resolved::{ConfigError, ConfigSources, InvalidValue};
use crate::cli::CliArgs;

/// Listing source and paging options as they are read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct ListingsSection {
	pub(super) path: Option<PathBuf>,
	pub(super) page_size: Option<usize>,
	pub(super) sort: Option<String>,
}

pub(super) struct ListingsResolution {
	pub(super) path: Option<PathBuf>,
	pub(super) page_size: NonZeroUsize,
	pub(super) sort: Option<SortKey>,
}

impl ListingsSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(path) = cli.listings.clone() {
			self.path = Some(path);
		}
		if let Some(size) = cli.page_size {
			self.page_size = Some(size);
		}
		if let Some(sort) = cli.sort {
			self.sort = Some(sort.as_str().to_string());
		}
	}

	pub(super) fn resolve(
		self,
		sources: &ConfigSources,
	) -> Result<ListingsResolution, ConfigError> {
		let page_size = match self.page_size {
			None => DEFAULT_PAGE_SIZE,
			Some(size) => NonZeroUsize::new(size).ok_or_else(|| {
				ConfigError::new(
					"listings.page_size",
					size.to_string(),
					sources.source_for_page_size(),
					InvalidValue::ZeroPageSize,
				)
			})?,
		};

		let sort = self
			.sort
			.map(|value| {
				value.parse::<SortKey>().map_err(|err| {
					let origin = sources.source_for_sort();
					ConfigError::new("listings.sort", value.as_str(), origin, err)
				})
			})
			.transpose()?;

		let path = self.path.map(|path| {
			if path.is_relative() {
				env::current_dir().map_or(path.clone(), |dir| dir.join(&path))
			} else {
				path
			}
		});

		Ok(ListingsResolution {
			path,
			page_size,
			sort,
		})
	}
}
