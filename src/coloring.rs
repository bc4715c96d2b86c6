//! Color assignment for the selected languages and the countries they cover.
//!
//! Colors depend only on the position of each language in the selection:
//! the language at index `i` gets `PALETTE[i % PALETTE.len()]`. A country
//! spoken by several selected languages takes the color of the first one.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::Language;

/// Fixed palette, reused from the start once a selection outgrows it.
pub const PALETTE: [&str; 16] = [
    "#1976D2", // Blue
    "#FFEB3B", // Bright Yellow
    "#D32F2F", // Red
    "#32B600", // Green
    "#A6A6ED", // Lavender
    "#F57C00", // Orange
    "#00BCD4", // Cyan
    "#E91E96", // Hot Pink
    "#FFFB91", // Neon Yellow
    "#9E9E9E", // Grey
    "#FF5722", // Deep Orange
    "#009688", // Teal
    "#795548", // Brown
    "#3F51B5", // Indigo
    "#8BC34A", // Light Green
    "#FBC02D", // Yellow
];

/// Returned for languages and countries without an assigned color.
pub const NO_COLOR: &str = "none";

/// Palette color for the language at `index` in the selection.
pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// Language and country color lookups for one selection.
///
/// Owned by the caller; each selection gets its own value instead of
/// sharing process-wide maps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorAssignment {
    language_colors: BTreeMap<String, &'static str>,
    country_colors: BTreeMap<String, &'static str>,
}

impl ColorAssignment {
    /// Assign colors to `languages` in order.
    pub fn assign(languages: &[Language]) -> Self {
        let mut assignment = Self::default();
        assignment.reassign(languages);
        assignment
    }

    /// Replace every previous assignment with one for `languages`.
    pub fn reassign(&mut self, languages: &[Language]) {
        self.language_colors.clear();
        self.country_colors.clear();

        for (index, language) in languages.iter().enumerate() {
            let color = palette_color(index);
            self.language_colors.insert(language.name.clone(), color);

            for country in &language.countries {
                if let Some(country_id) = country.country_id.as_deref() {
                    self.country_colors
                        .entry(country_id.to_string())
                        .or_insert(color);
                }
            }
        }
    }

    pub fn color_for_language(&self, name: &str) -> &'static str {
        self.language_colors.get(name).copied().unwrap_or(NO_COLOR)
    }

    pub fn color_for_country(&self, country_id: &str) -> &'static str {
        self.country_colors.get(country_id).copied().unwrap_or(NO_COLOR)
    }

    /// Fill color for a map country given the current selection.
    ///
    /// Countries outside every selected language are left unfilled.
    pub fn fill_color(&self, country_id: &str, languages: &[Language]) -> &'static str {
        if languages
            .iter()
            .any(|language| language.has_country_by_id(country_id))
        {
            self.color_for_country(country_id)
        } else {
            NO_COLOR
        }
    }

    pub fn language_colors(&self) -> &BTreeMap<String, &'static str> {
        &self.language_colors
    }

    pub fn country_colors(&self) -> &BTreeMap<String, &'static str> {
        &self.country_colors
    }

    pub fn is_empty(&self) -> bool {
        self.language_colors.is_empty() && self.country_colors.is_empty()
    }
}
