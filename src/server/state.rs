//! Shared application state.

use std::sync::Arc;

use crate::config::Config;
use crate::model::Country;
use crate::store::LanguageStore;

use super::error::ApiError;

/// Read-only state shared by every handler.
///
/// Nothing here is mutated after startup; per-selection data such as color
/// assignments is built inside each request.
#[derive(Clone)]
pub struct AppState {
    store: Arc<LanguageStore>,
    config: Arc<Config>,
}

impl AppState {
    pub fn new(store: LanguageStore, config: Config) -> Self {
        Self {
            store: Arc::new(store),
            config: Arc::new(config),
        }
    }

    pub fn store(&self) -> &LanguageStore {
        &self.store
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn country_by_id(&self, country_id: &str) -> Result<&Arc<Country>, ApiError> {
        self.store
            .country_by_id(country_id)
            .ok_or_else(|| ApiError::country_not_found(country_id))
    }

    pub fn country_by_slug(&self, slug: &str) -> Result<&Arc<Country>, ApiError> {
        self.store
            .country_by_slug(slug)
            .ok_or_else(|| ApiError::country_slug_not_found(slug))
    }
}
