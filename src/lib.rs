//! Per-country language statistics for an interactive world map.
//!
//! Raw country records are aggregated into a country index and a language
//! index ([`aggregation`]), queried through a [`store::LanguageStore`] and
//! served over HTTP by [`server`].

pub mod aggregation;
pub mod collation;
pub mod coloring;
pub mod config;
pub mod error;
pub mod format;
pub mod index;
pub mod loader;
pub mod model;
pub mod retry;
pub mod server;
pub mod sitemap;
pub mod slug;
pub mod snapshot;
pub mod store;
pub mod summary;

pub use aggregation::{aggregate, Indexes};
pub use coloring::ColorAssignment;
pub use error::DataError;
pub use model::{Country, CountryLanguage, Language, RawCountryRecord, Statistics};
pub use store::LanguageStore;
pub use summary::{filter_by_membership, summarize};
