//! Domain layer for the CountryDeck plugin.
//!
//! Core types and pure logic, independent of Zellij APIs.
//!
//! - [`error`]: Error types and result alias
//! - [`country`]: Country records, the dataset, and number formatting
//! - [`view`]: Search term and sort order
//! - [`filter`]: The filter/sort engine

pub mod country;
pub mod error;
pub mod filter;
pub mod view;

pub use country::{Country, Dataset};
pub use error::{CountryDeckError, FetchError, Result};
pub use filter::apply_filters;
pub use view::{SortOrder, ViewState};
