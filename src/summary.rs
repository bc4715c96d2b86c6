//! Derived views over a selection of languages.

use std::collections::HashSet;
use std::sync::Arc;

use crate::model::{Country, Language, Statistics};

/// Name of the synthetic language produced by [`summarize`].
pub const TOTALS_NAME: &str = "Totals";

/// Merge a selection of languages into a single "Totals" language.
///
/// Speaker figures are summed per language, so a country speaking two
/// selected languages contributes its speakers of each. Country figures
/// count the union, so that same country is counted once. Countries are
/// deduplicated by common name and keep first-seen order.
pub fn summarize(languages: &[Language]) -> Language {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut countries: Vec<Arc<Country>> = Vec::new();
    let mut total_speakers = 0.0;
    let mut total_un_speakers = 0.0;

    for language in languages {
        total_speakers += language.statistics.total_speakers;
        total_un_speakers += language.statistics.total_un_speakers;

        for country in &language.countries {
            if seen.insert(country.common_name.as_str()) {
                countries.push(Arc::clone(country));
            }
        }
    }

    let un_countries = countries.iter().filter(|country| country.un_member).count();
    let statistics = Statistics::new(
        total_un_speakers,
        un_countries,
        total_speakers,
        countries.len(),
    );

    Language::new(TOTALS_NAME, statistics, countries)
}

/// Restrict each language's countries to those with the given UN membership.
///
/// Names and statistics are carried over untouched; use the UN fields of
/// [`Statistics`] for membership-specific figures. Languages whose filtered
/// list is empty are kept.
pub fn filter_by_membership(languages: &[Language], un_member: bool) -> Vec<Language> {
    languages
        .iter()
        .map(|language| {
            let countries = language
                .countries
                .iter()
                .filter(|country| country.un_member == un_member)
                .cloned()
                .collect();
            Language::new(language.name.clone(), language.statistics, countries)
        })
        .collect()
}
