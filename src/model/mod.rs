//! Data model for the language map.
//!
//! # Architecture
//!
//! - `statistics`: speaker and country counters rolled up per language
//! - `country`: immutable country records, shared between languages via `Arc`
//! - `language`: a language with its statistics and the countries that speak it
//! - `record`: the raw input shape produced by the upstream data source

mod country;
mod language;
mod record;
mod statistics;

pub use country::{Country, CountryLanguage};
pub use language::Language;
pub use record::{CountryName, RawCountryRecord};
pub use statistics::{Statistics, WORLD_POPULATION};
