//! URL-safe slugs for country pages.

use regex::Regex;
use std::sync::OnceLock;
use unicode_normalization::UnicodeNormalization;

// Patterns are compiled once and reused
static NAME_PUNCTUATION_REGEX: OnceLock<Regex> = OnceLock::new();
static SLUG_INVALID_REGEX: OnceLock<Regex> = OnceLock::new();
static WHITESPACE_REGEX: OnceLock<Regex> = OnceLock::new();
static DASHES_REGEX: OnceLock<Regex> = OnceLock::new();

/// Convert a display name into a slug, e.g. "Côte d'Ivoire" -> "cote-d-ivoire".
///
/// Punctuation turns into word breaks while internal hyphens survive.
pub fn to_country_slug(name: &str) -> String {
    let punctuation =
        NAME_PUNCTUATION_REGEX.get_or_init(|| Regex::new(r"[^a-zA-Z0-9\s-]").unwrap());
    let whitespace = WHITESPACE_REGEX.get_or_init(|| Regex::new(r"\s+").unwrap());
    let dashes = DASHES_REGEX.get_or_init(|| Regex::new(r"-+").unwrap());

    let stripped = remove_diacritics(name);
    let spaced = punctuation.replace_all(&stripped, " ");
    let dashed = whitespace.replace_all(spaced.trim(), "-");

    dashes.replace_all(&dashed, "-").to_lowercase()
}

/// Normalize an incoming slug path segment to the canonical form.
pub fn normalize_country_slug(slug: &str) -> String {
    let invalid = SLUG_INVALID_REGEX.get_or_init(|| Regex::new(r"[^a-zA-Z0-9-]").unwrap());
    let dashes = DASHES_REGEX.get_or_init(|| Regex::new(r"-+").unwrap());

    let stripped = remove_diacritics(slug);
    let cleaned = invalid.replace_all(&stripped, "");

    dashes.replace_all(&cleaned, "-").to_lowercase()
}

/// Drop combining diacritical marks (U+0300..U+036F) after decomposition.
fn remove_diacritics(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !('\u{0300}'..='\u{036f}').contains(c))
        .collect()
}
