//! API routes and handlers.

mod countries;
mod languages;

use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::sitemap::build_sitemap;

use super::state::AppState;

pub use languages::{FormattedTotals, LanguagesRequest, SelectionRequest, SelectionResponse};

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/api/languages",
            get(languages::list_language_names).post(languages::get_languages),
        )
        .route("/api/selection", post(languages::selection))
        .route("/api/countries/:id", get(countries::get_country))
        .route("/api/countries/slug/:slug", get(countries::get_country_by_slug))
        .route("/sitemap.xml", get(sitemap))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn sitemap(State(state): State<AppState>) -> impl IntoResponse {
    let store = state.store();
    let xml = build_sitemap(
        &state.config().site_origin,
        &store.language_names(),
        &store.country_slugs(),
    );

    ([(header::CONTENT_TYPE, "application/xml")], xml)
}
