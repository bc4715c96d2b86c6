//! Rolled-up speaker statistics for a language.

use serde::{Deserialize, Serialize};

use super::country::nullable_number;

/// World population used as the denominator for world percentages.
pub const WORLD_POPULATION: f64 = 8_085_627_000.0;

/// Speaker and country counters for one language.
///
/// UN figures are always a subset of the overall figures: a country that
/// contributes to `total_un_speakers` also contributes to `total_speakers`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Statistics {
    /// Speakers living in UN member countries
    #[serde(rename = "totalUNSpeakers", deserialize_with = "nullable_number")]
    pub total_un_speakers: f64,

    /// Number of UN member countries where the language is spoken
    #[serde(rename = "numberOfUNCountries")]
    pub number_of_un_countries: usize,

    /// Speakers across every country
    #[serde(rename = "totalSpeakers", deserialize_with = "nullable_number")]
    pub total_speakers: f64,

    /// Number of countries where the language is spoken
    #[serde(rename = "numberOfCountries")]
    pub number_of_countries: usize,
}

impl Statistics {
    pub fn new(
        total_un_speakers: f64,
        number_of_un_countries: usize,
        total_speakers: f64,
        number_of_countries: usize,
    ) -> Self {
        Self {
            total_un_speakers,
            number_of_un_countries,
            total_speakers,
            number_of_countries,
        }
    }

    /// Set the UN figures, keeping the overall figures.
    pub fn with_un(mut self, speakers: f64, countries: usize) -> Self {
        self.total_un_speakers = speakers;
        self.number_of_un_countries = countries;
        self
    }

    /// Set the overall figures, keeping the UN figures.
    pub fn with_totals(mut self, speakers: f64, countries: usize) -> Self {
        self.total_speakers = speakers;
        self.number_of_countries = countries;
        self
    }

    /// Count one country's speakers towards these statistics.
    pub(crate) fn record_country(&mut self, speakers: f64, un_member: bool) {
        if un_member {
            self.total_un_speakers += speakers;
            self.number_of_un_countries += 1;
        }

        self.total_speakers += speakers;
        self.number_of_countries += 1;
    }

    /// Speakers, restricted to UN members when `un_only` is set.
    pub fn speakers(&self, un_only: bool) -> f64 {
        if un_only {
            self.total_un_speakers
        } else {
            self.total_speakers
        }
    }

    /// Country count, restricted to UN members when `un_only` is set.
    pub fn countries(&self, un_only: bool) -> usize {
        if un_only {
            self.number_of_un_countries
        } else {
            self.number_of_countries
        }
    }

    /// Share of the world population speaking the language, in percent.
    pub fn world_percentage(&self, un_only: bool) -> f64 {
        self.speakers(un_only) * 100.0 / WORLD_POPULATION
    }

    pub fn has_non_un_countries(&self) -> bool {
        self.number_of_countries > self.number_of_un_countries
    }
}
