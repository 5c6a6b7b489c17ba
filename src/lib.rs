//! Core crate exports for the `joblist` listing browser.
//!
//! The heart of the crate is [`ListingStore`], an in-memory state machine that
//! filters, sorts, paginates and summarises job listings. The remaining modules
//! feed it (JSON [`source`]), present it ([`display`]) or keep unrelated user
//! settings ([`preferences`]).

pub mod app_dirs;
pub mod display;
mod error;
pub mod logging;
pub mod preferences;
pub mod source;
mod store;
mod types;

pub use error::ListingError;
pub use preferences::{PreferenceStore, Theme};
pub use store::{
	ActiveFilter, Aggregates, DEFAULT_PAGE_SIZE, ListingStore, ParseShowOnlyError,
	ParseSortKeyError, SearchQuery, ShowOnly, SortKey, VisiblePage,
};
pub use types::{Category, EmploymentType, Listing, ListingRecord, classify};
