//! Language aggregate: statistics plus the countries that speak it.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{Country, Statistics};

/// A language with its rolled-up statistics.
///
/// `countries` never contains the same country twice and, once aggregation
/// finishes, is ordered by common name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Language {
    pub name: String,
    #[serde(default)]
    pub statistics: Statistics,
    #[serde(default)]
    pub countries: Vec<Arc<Country>>,
}

impl Language {
    pub fn new(name: impl Into<String>, statistics: Statistics, countries: Vec<Arc<Country>>) -> Self {
        Self {
            name: name.into(),
            statistics,
            countries,
        }
    }

    /// An empty language, as created the first time a name is seen.
    pub fn empty(name: impl Into<String>) -> Self {
        Self::new(name, Statistics::default(), Vec::new())
    }

    /// Whether the country with the given ISO 3166-1 numeric id speaks this language.
    pub fn has_country_by_id(&self, country_id: &str) -> bool {
        self.countries
            .iter()
            .any(|country| country.country_id.as_deref() == Some(country_id))
    }

    pub fn has_non_un_countries(&self) -> bool {
        self.statistics.has_non_un_countries()
    }
}
