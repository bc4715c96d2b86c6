//! Aggregation of raw country records into the country and language indexes.
//!
//! The whole input is recomputed in one pass: every record becomes a shared
//! `Country`, every language it reports is created on first sight and has
//! its statistics incremented, and each language's country list is sorted
//! once at the very end.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::collation::locale_compare;
use crate::index::OrderedIndex;
use crate::model::{Country, Language, RawCountryRecord};

/// The two indexes produced by one aggregation run.
///
/// Both are read-only once built; derived languages (totals, filtered views)
/// are new values rather than edits of these entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Indexes {
    countries: OrderedIndex<Arc<Country>>,
    languages: OrderedIndex<Language>,
}

impl Indexes {
    pub(crate) fn from_parts(
        countries: OrderedIndex<Arc<Country>>,
        languages: OrderedIndex<Language>,
    ) -> Self {
        Self {
            countries,
            languages,
        }
    }

    /// Countries keyed by common name.
    pub fn countries(&self) -> &OrderedIndex<Arc<Country>> {
        &self.countries
    }

    /// Languages keyed by lowercased name.
    pub fn languages(&self) -> &OrderedIndex<Language> {
        &self.languages
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty() && self.languages.is_empty()
    }
}

/// Build the country and language indexes from raw records, in input order.
///
/// A record whose common name was already seen replaces the earlier country
/// in the country index (last write wins). Languages that already counted
/// the earlier record keep it; nothing is merged or subtracted.
pub fn aggregate(records: &[RawCountryRecord]) -> Indexes {
    let mut countries: OrderedIndex<Arc<Country>> = OrderedIndex::new();
    let mut languages: OrderedIndex<Language> = OrderedIndex::new();

    for record in records {
        let country = Arc::new(Country::from_record(record));

        if countries
            .insert(country.common_name.clone(), Arc::clone(&country))
            .is_some()
        {
            warn!(
                "Duplicate country '{}' in input, keeping the last record",
                country.common_name
            );
        }

        for entry in &record.languages {
            let key = entry.language.to_lowercase();

            if !languages.contains_key(&key) {
                languages.insert(key.clone(), Language::empty(key.clone()));
            }

            if let Some(language) = languages.get_mut(&key) {
                let speakers = record.population * entry.percentage;
                language.statistics.record_country(speakers, record.un_member);
                language.countries.push(Arc::clone(&country));
            }
        }
    }

    for language in languages.values_mut() {
        sort_countries(&mut language.countries);
    }

    debug!(
        "Aggregated {} records into {} countries and {} languages",
        records.len(),
        countries.len(),
        languages.len()
    );

    Indexes::from_parts(countries, languages)
}

/// Stable sort by common name using locale-aware collation.
pub fn sort_countries(countries: &mut [Arc<Country>]) {
    countries.sort_by(|a, b| locale_compare(&a.common_name, &b.common_name));
}
