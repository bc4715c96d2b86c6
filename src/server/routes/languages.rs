//! Language lookup and selection handlers.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::coloring::ColorAssignment;
use crate::format::{format_number, format_percentage_number};
use crate::model::Language;
use crate::summary::{filter_by_membership, summarize};

use super::super::{error::ApiError, state::AppState};

#[derive(Debug, Deserialize)]
pub struct LanguagesRequest {
    #[serde(rename = "languageNames")]
    pub language_names: Vec<String>,
    #[serde(rename = "sessionID", default)]
    pub session_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionRequest {
    pub language_names: Vec<String>,
    #[serde(default)]
    pub un_member: Option<bool>,
    #[serde(default)]
    pub locale: Option<String>,
}

/// Totals rendered for display in the requested locale.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedTotals {
    pub speakers: String,
    pub countries: String,
    pub world_percentage: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionResponse {
    pub languages: Vec<Language>,
    pub totals: Language,
    #[serde(flatten)]
    pub colors: ColorAssignment,
    pub formatted: FormattedTotals,
}

/// Every known language name.
pub async fn list_language_names(State(state): State<AppState>) -> Json<Vec<String>> {
    let names = state
        .store()
        .language_names()
        .into_iter()
        .map(str::to_string)
        .collect();
    Json(names)
}

/// Resolve requested names to full language records.
#[instrument(skip_all)]
pub async fn get_languages(
    State(state): State<AppState>,
    payload: Result<Json<LanguagesRequest>, JsonRejection>,
) -> Result<Json<Vec<Language>>, ApiError> {
    let Json(request) = payload?;
    let languages = state.store().languages_by_name(&request.language_names);
    let valid: Vec<&str> = languages.iter().map(|l| l.name.as_str()).collect();

    info!(
        session_id = request.session_id.as_deref().unwrap_or(""),
        timestamp = %Utc::now().to_rfc3339(),
        number_of_original_languages = request.language_names.len(),
        original_languages = ?request.language_names,
        number_of_valid_languages = valid.len(),
        valid_languages = ?valid,
        "language request"
    );

    Ok(Json(languages))
}

/// Languages, totals, colors and formatted totals for one map selection.
///
/// Colors are assigned over the whole selection so they stay stable when
/// the membership filter is toggled.
#[instrument(skip_all)]
pub async fn selection(
    State(state): State<AppState>,
    payload: Result<Json<SelectionRequest>, JsonRejection>,
) -> Result<Json<SelectionResponse>, ApiError> {
    let Json(request) = payload?;
    let selected = state.store().languages_by_name(&request.language_names);

    let colors = ColorAssignment::assign(&selected);
    let totals = summarize(&selected);

    let un_only = request.un_member == Some(true);
    let locale = request
        .locale
        .as_deref()
        .unwrap_or(&state.config().default_locale);

    let formatted = FormattedTotals {
        speakers: format_number(totals.statistics.speakers(un_only), locale),
        countries: format_number(totals.statistics.countries(un_only) as f64, locale),
        world_percentage: format_percentage_number(
            totals.statistics.world_percentage(un_only),
            locale,
        ),
    };

    let languages = match request.un_member {
        Some(un_member) => filter_by_membership(&selected, un_member),
        None => selected,
    };

    debug!(
        requested = request.language_names.len(),
        resolved = languages.len(),
        "built selection"
    );

    Ok(Json(SelectionResponse {
        languages,
        totals,
        colors,
        formatted,
    }))
}
