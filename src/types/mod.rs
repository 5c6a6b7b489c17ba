//! Types shared between the listing store, the data source and the CLI.

mod category;
mod listing;

pub use category::{Category, classify};
pub use listing::{EmploymentType, Listing, ListingRecord};
