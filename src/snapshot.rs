//! Persisted country and language maps.
//!
//! Both files hold a JSON array of `[key, value]` pairs:
//! `countryMap.json` maps common names to countries and `languageMap.json`
//! maps lowercased names to languages with their full country records.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use tracing::{info, warn};

use crate::aggregation::Indexes;
use crate::error::DataError;
use crate::index::OrderedIndex;
use crate::model::{Country, Language};

pub const COUNTRY_MAP_FILE: &str = "countryMap.json";
pub const LANGUAGE_MAP_FILE: &str = "languageMap.json";

/// Write both maps into `dir`, creating it if needed.
pub fn write_snapshots(dir: &Path, indexes: &Indexes) -> Result<(), DataError> {
    fs::create_dir_all(dir).map_err(|e| DataError::io(dir, e))?;

    let country_path = dir.join(COUNTRY_MAP_FILE);
    let country_json = serde_json::to_string(indexes.countries())?;
    fs::write(&country_path, country_json).map_err(|e| DataError::io(&country_path, e))?;

    let language_path = dir.join(LANGUAGE_MAP_FILE);
    let language_json = serde_json::to_string(indexes.languages())?;
    fs::write(&language_path, language_json).map_err(|e| DataError::io(&language_path, e))?;

    info!(
        "Wrote {} countries and {} languages to {}",
        indexes.countries().len(),
        indexes.languages().len(),
        dir.display()
    );

    Ok(())
}

/// Read both maps back from `dir`.
///
/// Countries inside the language map are replaced by the entry of the
/// country map with the same common name and id, so every language shares
/// one `Arc<Country>` per country just as after a fresh aggregation.
pub fn read_snapshots(dir: &Path) -> Result<Indexes, DataError> {
    let country_path = dir.join(COUNTRY_MAP_FILE);
    let country_json =
        fs::read_to_string(&country_path).map_err(|e| DataError::io(&country_path, e))?;
    let countries: OrderedIndex<Arc<Country>> = serde_json::from_str(&country_json)?;

    let language_path = dir.join(LANGUAGE_MAP_FILE);
    let language_json =
        fs::read_to_string(&language_path).map_err(|e| DataError::io(&language_path, e))?;
    let languages: OrderedIndex<Language> = serde_json::from_str(&language_json)?;

    let languages = relink(&countries, languages);

    info!(
        "Loaded {} countries and {} languages from {}",
        countries.len(),
        languages.len(),
        dir.display()
    );

    Ok(Indexes::from_parts(countries, languages))
}

fn relink(
    countries: &OrderedIndex<Arc<Country>>,
    languages: OrderedIndex<Language>,
) -> OrderedIndex<Language> {
    let mut orphans = 0usize;

    let relinked = languages
        .iter()
        .map(|(key, language)| {
            let linked = language
                .countries
                .iter()
                .map(|country| match countries.get(&country.common_name) {
                    Some(shared) if shared.country_id == country.country_id => {
                        Arc::clone(shared)
                    }
                    _ => {
                        orphans += 1;
                        Arc::clone(country)
                    }
                })
                .collect();

            let language = Language::new(language.name.clone(), language.statistics, linked);
            (key.to_string(), language)
        })
        .collect();

    if orphans > 0 {
        warn!(
            "{} language entries reference countries missing from {}",
            orphans, COUNTRY_MAP_FILE
        );
    }

    relinked
}
