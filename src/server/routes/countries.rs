//! Country lookup handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::instrument;

use crate::model::Country;

use super::super::{error::ApiError, state::AppState};

/// Country by ISO 3166-1 numeric id.
#[instrument(skip(state))]
pub async fn get_country(
    State(state): State<AppState>,
    Path(country_id): Path<String>,
) -> Result<Json<Arc<Country>>, ApiError> {
    state.country_by_id(&country_id).map(|country| Json(Arc::clone(country)))
}

/// Country by URL slug, normalized before matching.
#[instrument(skip(state))]
pub async fn get_country_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Arc<Country>>, ApiError> {
    state.country_by_slug(&slug).map(|country| Json(Arc::clone(country)))
}
