use std::num::NonZeroUsize;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use joblist::{
	ActiveFilter, Aggregates, Listing, ListingStore, ShowOnly, SortKey, app_dirs, source,
};

use crate::cli::CliArgs;
use crate::settings::ResolvedConfig;

/// The browse actions requested for a single run, in the order they apply.
#[derive(Debug, Clone, Default)]
pub(crate) struct BrowseRequest {
	pub(crate) role: Option<String>,
	pub(crate) location: Option<String>,
	pub(crate) show: Option<ShowOnly>,
	pub(crate) pages: usize,
}

impl BrowseRequest {
	pub(crate) fn from_cli(cli: &CliArgs) -> Self {
		Self {
			role: cli.role.clone(),
			location: cli.location.clone(),
			show: cli.show.map(ShowOnly::from),
			pages: cli.pages,
		}
	}
}

/// Everything the presentation layer needs after the actions were applied.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct BrowseOutcome {
	pub(crate) filter: ActiveFilter,
	pub(crate) sort: Option<SortKey>,
	pub(crate) aggregates: Aggregates,
	/// Listings in the filtered view, of which `listings` is the revealed prefix.
	pub(crate) matched: usize,
	pub(crate) revealed_pages: usize,
	pub(crate) has_more: bool,
	pub(crate) listings: Vec<Listing>,
}

/// Coordinates loading listings into a store and driving it from CLI input.
pub(crate) struct BrowseWorkflow {
	store: ListingStore,
	sort: Option<SortKey>,
	request: BrowseRequest,
}

impl BrowseWorkflow {
	pub(crate) fn from_config(config: &ResolvedConfig, request: BrowseRequest) -> Result<Self> {
		let (path, listings) = match &config.listings_path {
			Some(path) => (path.clone(), source::read_listings(path)?),
			None => {
				let path = app_dirs::default_listings_file()?;
				let listings = source::read_listings(&path)
					.context("no listings file given; pass FILE or set listings.path")?;
				(path, listings)
			}
		};
		Self::with_listings(listings, config.page_size, config.sort, request)
			.with_context(|| format!("invalid listings in {}", path.display()))
	}

	pub(crate) fn with_listings(
		listings: Vec<Listing>,
		page_size: NonZeroUsize,
		sort: Option<SortKey>,
		request: BrowseRequest,
	) -> Result<Self> {
		let mut store = ListingStore::new(page_size);
		store.load(listings)?;
		Ok(Self {
			store,
			sort,
			request,
		})
	}

	pub(crate) fn run(mut self) -> BrowseOutcome {
		let BrowseRequest {
			role,
			location,
			show,
			pages,
		} = self.request;

		if let Some(view) = show {
			self.store.show_only(view);
		} else if role.is_some() || location.is_some() {
			self.store.search(
				role.as_deref().unwrap_or_default(),
				location.as_deref().unwrap_or_default(),
			);
		}

		if let Some(key) = self.sort {
			self.store.sort(key);
		}

		// pages past the end would reveal nothing new
		let wanted = pages.min(self.store.page_count());
		while self.store.revealed_pages() < wanted {
			self.store.reveal_more();
		}

		let page = self.store.visible_page();
		info!(
			matched = self.store.len(),
			shown = page.len(),
			has_more = page.has_more,
			"browse complete"
		);

		BrowseOutcome {
			filter: self.store.filter().clone(),
			sort: self.sort,
			aggregates: self.store.aggregates(),
			matched: self.store.len(),
			revealed_pages: self.store.revealed_pages(),
			has_more: page.has_more,
			listings: page.listings.to_vec(),
		}
	}
}

#[cfg(test)]
mod tests {
	use chrono::{Duration, TimeZone, Utc};
	use joblist::EmploymentType;

	use super::*;

	fn listings() -> Vec<Listing> {
		let base = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
		let companies = ["Stripe", "Adobe", "Zoom", "Canva", "Figma"];
		let titles = [
			"Backend Developer",
			"UI/UX Designer",
			"Data Analyst",
			"Content Writer",
		];
		let types = [
			EmploymentType::FullTime,
			EmploymentType::Internship,
			EmploymentType::Contract,
		];
		(0..15)
			.map(|i| {
				Listing::new(
					format!("job_{i}"),
					titles[i % titles.len()],
					companies[i % companies.len()],
					types[i % types.len()],
				)
				.with_location(if i % 2 == 0 { "Remote US" } else { "Remote Europe" })
				.with_posted_at(base + Duration::days(i as i64))
			})
			.collect()
	}

	fn page_size(size: usize) -> NonZeroUsize {
		NonZeroUsize::new(size).unwrap()
	}

	#[test]
	fn empty_request_shows_the_first_page() {
		let request = BrowseRequest {
			pages: 1,
			..BrowseRequest::default()
		};
		let outcome = BrowseWorkflow::with_listings(listings(), page_size(4), None, request)
			.unwrap()
			.run();

		assert_eq!(outcome.filter, ActiveFilter::All);
		assert_eq!(outcome.matched, 15);
		assert_eq!(outcome.listings.len(), 4);
		assert!(outcome.has_more);
		assert_eq!(outcome.listings[0].id(), "job_0");
	}

	#[test]
	fn search_sort_and_pages_are_applied_in_order() {
		let request = BrowseRequest {
			role: Some("developer".into()),
			location: Some("us".into()),
			pages: 2,
			..BrowseRequest::default()
		};
		let outcome = BrowseWorkflow::with_listings(
			listings(),
			page_size(1),
			Some(SortKey::PostedAt),
			request,
		)
		.unwrap()
		.run();

		// developer roles sit on every fourth id and all of them are in the US
		assert_eq!(outcome.matched, 4);
		assert_eq!(outcome.revealed_pages, 2);
		assert!(outcome.has_more);
		let ids: Vec<&str> = outcome.listings.iter().map(Listing::id).collect();
		assert_eq!(ids, ["job_12", "job_8"]);
	}

	#[test]
	fn show_only_overrides_queries() {
		let request = BrowseRequest {
			role: Some("nothing".into()),
			show: Some(ShowOnly::Internship),
			pages: 1,
			..BrowseRequest::default()
		};
		let outcome = BrowseWorkflow::with_listings(listings(), page_size(12), None, request)
			.unwrap()
			.run();

		assert_eq!(outcome.filter, ActiveFilter::Internship);
		assert_eq!(outcome.matched, 5);
		assert_eq!(outcome.aggregates.internship_count, 5);
		assert_eq!(outcome.aggregates.job_count, 0);
	}

	#[test]
	fn oversized_page_request_reveals_everything_at_once() {
		let request = BrowseRequest {
			pages: usize::MAX,
			..BrowseRequest::default()
		};
		let outcome = BrowseWorkflow::with_listings(listings(), page_size(4), None, request)
			.unwrap()
			.run();

		assert_eq!(outcome.listings.len(), 15);
		assert_eq!(outcome.revealed_pages, 4);
		assert!(!outcome.has_more);
	}

	#[test]
	fn invalid_listings_are_rejected() {
		let mut batch = listings();
		batch.push(Listing::new("job_0", "Writer", "Notion", EmploymentType::FullTime));
		let result =
			BrowseWorkflow::with_listings(batch, page_size(12), None, BrowseRequest::default());
		let err = result.err().unwrap();
		assert!(err.to_string().contains("job_0"));
	}
}
