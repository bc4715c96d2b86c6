//! Raw country records as delivered by the upstream data source.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::country::{missing_number, nullable_number, CountryLanguage};
use crate::error::DataError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryName {
    pub common: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub official: Option<String>,
}

/// One entry of the upstream `countryData.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCountryRecord {
    pub name: CountryName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ccn3: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cca2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub independent: Option<bool>,
    #[serde(default)]
    pub un_member: bool,
    #[serde(default = "missing_number", deserialize_with = "nullable_number")]
    pub population: f64,
    #[serde(default)]
    pub languages: Vec<CountryLanguage>,
}

impl RawCountryRecord {
    pub fn new(common_name: impl Into<String>, population: f64, un_member: bool) -> Self {
        Self {
            name: CountryName {
                common: common_name.into(),
                official: None,
            },
            ccn3: None,
            cca2: None,
            flag: None,
            independent: None,
            un_member,
            population,
            languages: Vec::new(),
        }
    }

    pub fn with_ccn3(mut self, ccn3: impl Into<String>) -> Self {
        self.ccn3 = Some(ccn3.into());
        self
    }

    pub fn with_cca2(mut self, cca2: impl Into<String>) -> Self {
        self.cca2 = Some(cca2.into());
        self
    }

    pub fn with_official_name(mut self, official: impl Into<String>) -> Self {
        self.name.official = Some(official.into());
        self
    }

    pub fn with_language(mut self, language: impl Into<String>, percentage: f64) -> Self {
        self.languages.push(CountryLanguage::new(language, percentage));
        self
    }

    /// Check the record before it reaches aggregation.
    ///
    /// Aggregation itself accepts anything and lets NaN flow into the
    /// totals, so this is the place to reject records that would poison them.
    pub fn validate(&self) -> Result<(), DataError> {
        let invalid = |reason: String| DataError::InvalidRecord {
            name: self.name.common.clone(),
            reason,
        };

        if self.name.common.trim().is_empty() {
            return Err(invalid("common name is empty".to_string()));
        }

        if !self.population.is_finite() || self.population < 0.0 {
            return Err(invalid(format!("population {} is not a valid count", self.population)));
        }

        let mut seen = HashSet::new();
        for entry in &self.languages {
            if entry.language.trim().is_empty() {
                return Err(invalid("language name is empty".to_string()));
            }

            if !seen.insert(entry.language.to_lowercase()) {
                return Err(invalid(format!("language '{}' is listed twice", entry.language)));
            }

            if !entry.percentage.is_finite() || !(0.0..=1.0).contains(&entry.percentage) {
                return Err(invalid(format!(
                    "percentage {} for '{}' is outside [0, 1]",
                    entry.percentage, entry.language
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_upstream_shape() {
        let json = r#"{
            "name": {"common": "Taiwan", "official": "Republic of China (Taiwan)"},
            "ccn3": "158",
            "cca2": "TW",
            "flag": "🇹🇼",
            "independent": false,
            "unMember": false,
            "population": 23570000,
            "languages": [{"language": "Chinese", "percentage": 0.95, "notes": "Mandarin"}]
        }"#;
        let record: RawCountryRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.name.common, "Taiwan");
        assert_eq!(record.ccn3.as_deref(), Some("158"));
        assert!(!record.un_member);
        assert_eq!(record.population, 23_570_000.0);
        assert_eq!(record.languages[0].notes, "Mandarin");
        assert!(record.validate().is_ok());
    }

    #[test]
    fn test_missing_population_becomes_nan() {
        let record: RawCountryRecord =
            serde_json::from_str(r#"{"name": {"common": "Atlantis"}}"#).unwrap();
        assert!(record.population.is_nan());
        assert!(record.validate().is_err());
    }

    #[test]
    fn test_null_population_becomes_nan() {
        let record: RawCountryRecord = serde_json::from_str(
            r#"{"name": {"common": "Atlantis"}, "population": null,
                "languages": [{"language": "Atlantean", "percentage": null}]}"#,
        )
        .unwrap();

        assert!(record.population.is_nan());
        assert!(record.languages[0].percentage.is_nan());
        assert!(matches!(
            record.validate(),
            Err(DataError::InvalidRecord { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_empty_name() {
        let record = RawCountryRecord::new("  ", 10.0, true);
        let err = record.validate().unwrap_err();
        assert!(err.to_string().contains("common name"));
    }

    #[test]
    fn test_validate_rejects_negative_population() {
        let record = RawCountryRecord::new("Nowhere", -1.0, false);
        assert!(record.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_out_of_range_percentage() {
        let record = RawCountryRecord::new("Nowhere", 10.0, false).with_language("esperanto", 1.5);
        let err = record.validate().unwrap_err();
        assert!(err.to_string().contains("esperanto"));
    }

    #[test]
    fn test_validate_rejects_repeated_language() {
        let record = RawCountryRecord::new("Nowhere", 10.0, false)
            .with_language("English", 0.5)
            .with_language("english", 0.2);
        let err = record.validate().unwrap_err();
        assert!(err.to_string().contains("listed twice"));
    }

    #[test]
    fn test_validate_accepts_overlapping_percentages() {
        let record = RawCountryRecord::new("Switzerland", 8_700_000.0, true)
            .with_language("german", 0.62)
            .with_language("french", 0.23)
            .with_language("english", 0.45);
        assert!(record.validate().is_ok());
    }
}
