//! Country records.

use serde::{Deserialize, Deserializer, Serialize};

use super::record::RawCountryRecord;
use crate::slug::to_country_slug;

/// One language entry reported by a country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryLanguage {
    pub language: String,

    /// Fraction of the population speaking the language, in `[0, 1]`
    #[serde(default = "missing_number", deserialize_with = "nullable_number")]
    pub percentage: f64,

    #[serde(default)]
    pub notes: String,
}

impl CountryLanguage {
    pub fn new(language: impl Into<String>, percentage: f64) -> Self {
        Self {
            language: language.into(),
            percentage,
            notes: String::new(),
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }
}

/// Absent numbers become NaN so they surface in the totals instead of
/// silently counting as zero.
pub(crate) fn missing_number() -> f64 {
    f64::NAN
}

/// Reads `null` as NaN; serde_json writes non-finite floats as `null`.
pub(crate) fn nullable_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<f64>::deserialize(deserializer).map(|value| value.unwrap_or(f64::NAN))
}

/// A country and the languages it reports.
///
/// Countries are created once per aggregation run and never mutated
/// afterwards; every language that includes a country holds the same
/// `Arc<Country>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    /// ISO 3166-1 numeric code
    #[serde(default)]
    pub country_id: Option<String>,

    /// ISO 3166-1 alpha-2 code
    #[serde(default)]
    pub cca2: Option<String>,

    pub common_name: String,

    #[serde(default)]
    pub official_name: Option<String>,

    #[serde(default)]
    pub flag: Option<String>,

    #[serde(default)]
    pub independent: bool,

    #[serde(default)]
    pub un_member: bool,

    #[serde(default = "missing_number", deserialize_with = "nullable_number")]
    pub population: f64,

    #[serde(default)]
    pub languages: Vec<CountryLanguage>,
}

impl Country {
    /// Create a country with the given identity; every other field takes its
    /// empty default and can be filled in with the `with_*` methods.
    pub fn new(country_id: impl Into<String>, common_name: impl Into<String>) -> Self {
        Self {
            country_id: Some(country_id.into()),
            cca2: None,
            common_name: common_name.into(),
            official_name: None,
            flag: None,
            independent: false,
            un_member: false,
            population: 0.0,
            languages: Vec::new(),
        }
    }

    pub fn with_cca2(mut self, cca2: impl Into<String>) -> Self {
        self.cca2 = Some(cca2.into());
        self
    }

    pub fn with_official_name(mut self, official_name: impl Into<String>) -> Self {
        self.official_name = Some(official_name.into());
        self
    }

    pub fn with_flag(mut self, flag: impl Into<String>) -> Self {
        self.flag = Some(flag.into());
        self
    }

    pub fn with_independent(mut self, independent: bool) -> Self {
        self.independent = independent;
        self
    }

    pub fn with_un_member(mut self, un_member: bool) -> Self {
        self.un_member = un_member;
        self
    }

    pub fn with_population(mut self, population: f64) -> Self {
        self.population = population;
        self
    }

    pub fn with_language(mut self, language: CountryLanguage) -> Self {
        self.languages.push(language);
        self
    }

    /// Build a country from a raw upstream record.
    pub fn from_record(record: &RawCountryRecord) -> Self {
        Self {
            country_id: record.ccn3.clone(),
            cca2: record.cca2.clone(),
            common_name: record.name.common.clone(),
            official_name: record.name.official.clone(),
            flag: record.flag.clone(),
            independent: record.independent.unwrap_or(false),
            un_member: record.un_member,
            population: record.population,
            languages: record.languages.clone(),
        }
    }

    /// Estimated speakers of `language_name` (case-insensitive), or 0 when
    /// the country does not report that language.
    pub fn speakers(&self, language_name: &str) -> f64 {
        let wanted = language_name.to_lowercase();

        self.languages
            .iter()
            .find(|entry| entry.language.to_lowercase() == wanted)
            .map(|entry| entry.percentage * self.population)
            .unwrap_or(0.0)
    }

    /// Whether the country reports `language_name` (case-insensitive).
    pub fn speaks(&self, language_name: &str) -> bool {
        let wanted = language_name.to_lowercase();
        self.languages
            .iter()
            .any(|entry| entry.language.to_lowercase() == wanted)
    }

    /// The flag emoji, derived from the alpha-2 code when the record has none.
    pub fn flag(&self) -> Option<String> {
        if let Some(flag) = self.flag.as_ref().filter(|f| !f.is_empty()) {
            return Some(flag.clone());
        }

        let cca2 = self.cca2.as_deref()?;
        if cca2.len() != 2 || !cca2.chars().all(|c| c.is_ascii_alphabetic()) {
            return None;
        }

        cca2.to_ascii_uppercase()
            .chars()
            .map(|c| char::from_u32(0x1F1E6 + (c as u32 - 'A' as u32)))
            .collect()
    }

    /// URL slug derived from the common name.
    pub fn slug(&self) -> String {
        to_country_slug(&self.common_name)
    }
}
