//! Read-only query surface over an aggregation run.

use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::Arc;

use crate::aggregation::Indexes;
use crate::error::DataError;
use crate::index::OrderedIndex;
use crate::model::{Country, Language};
use crate::slug::{normalize_country_slug, to_country_slug};
use crate::snapshot;

/// The country and language indexes plus lookups derived from them.
///
/// An empty store answers every query with "not found", which is what the
/// server runs with when no data could be loaded.
#[derive(Debug, Clone, Default)]
pub struct LanguageStore {
    indexes: Indexes,
    by_id: HashMap<String, Arc<Country>>,
    by_slug: OrderedIndex<Arc<Country>>,
}

impl LanguageStore {
    pub fn new(indexes: Indexes) -> Self {
        let mut by_id = HashMap::new();
        let mut by_slug = OrderedIndex::new();

        for country in indexes.countries().values() {
            if let Some(country_id) = country.country_id.as_ref().filter(|id| !id.is_empty()) {
                by_id.insert(country_id.clone(), Arc::clone(country));
            }

            let slug = to_country_slug(&country.common_name);
            if !slug.is_empty() {
                by_slug.insert(slug, Arc::clone(country));
            }
        }

        Self {
            indexes,
            by_id,
            by_slug,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Load a store from the snapshot files in `data_dir`.
    pub fn load(data_dir: &Path) -> Result<Self, DataError> {
        snapshot::read_snapshots(data_dir).map(Self::new)
    }

    pub fn indexes(&self) -> &Indexes {
        &self.indexes
    }

    pub fn is_empty(&self) -> bool {
        self.indexes.is_empty()
    }

    /// Every language name, in index order.
    pub fn language_names(&self) -> Vec<&str> {
        self.indexes.languages().keys().collect()
    }

    /// Case-insensitive lookup of a single language.
    pub fn language(&self, name: &str) -> Option<&Language> {
        self.indexes.languages().get(&name.to_lowercase())
    }

    /// Resolve requested names to languages.
    ///
    /// Names are matched case-insensitively; repeats and unknown names are
    /// dropped. Request order is preserved.
    pub fn languages_by_name<S: AsRef<str>>(&self, names: &[S]) -> Vec<Language> {
        let mut seen = HashSet::new();

        names
            .iter()
            .map(|name| name.as_ref().to_lowercase())
            .filter(|name| seen.insert(name.clone()))
            .filter_map(|name| self.indexes.languages().get(&name).cloned())
            .collect()
    }

    /// Look up a country by its ISO 3166-1 numeric id.
    pub fn country_by_id(&self, country_id: &str) -> Option<&Arc<Country>> {
        self.by_id.get(country_id)
    }

    /// Look up a country by URL slug; the slug is normalized first.
    pub fn country_by_slug(&self, slug: &str) -> Option<&Arc<Country>> {
        let normalized = normalize_country_slug(slug);
        if normalized.is_empty() {
            return None;
        }
        self.by_slug.get(&normalized)
    }

    /// Every country slug, in country index order.
    pub fn country_slugs(&self) -> Vec<&str> {
        self.by_slug.keys().collect()
    }
}
