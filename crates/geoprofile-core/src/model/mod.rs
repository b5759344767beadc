// crates/geoprofile-core/src/model/mod.rs

//! # Data Model
//!
//! Everything here is built fresh per request and owned by the call that built
//! it. Optional fields are `Option`s: "absent" is always explicit, never an
//! empty string standing in for missing data.

pub mod convert;

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Canonical country data as served by the country directory.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CountryRecord {
    /// Common name, e.g. "France".
    pub name: String,
    pub official_name: Option<String>,
    /// ISO 3166-1 alpha-3 code, when the directory sends one.
    pub code: Option<String>,
    pub flag_url: Option<String>,
    pub population: Option<u64>,
    pub area_km2: Option<f64>,
    pub languages: BTreeSet<String>,
    /// Neighbor ISO codes, in directory order.
    pub borders: Vec<String>,
    pub coordinates: Option<Coordinates>,
    pub timezones: Vec<String>,
    pub capitals: Vec<String>,
}

impl CountryRecord {
    /// First listed capital, if any.
    pub fn capital(&self) -> Option<&str> {
        self.capitals.first().map(String::as_str)
    }

    pub fn is_island_nation(&self) -> bool {
        self.borders.is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// A resolved encyclopedia summary that already passed its quality check.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResult {
    pub extract: Option<String>,
    pub image_url: Option<String>,
}

impl SummaryResult {
    pub fn extract_len(&self) -> usize {
        self.extract.as_deref().map_or(0, |s| s.chars().count())
    }

    /// Acceptable means: extract present and strictly longer than `min_chars`.
    pub fn is_acceptable(&self, min_chars: usize) -> bool {
        self.extract.is_some() && self.extract_len() > min_chars
    }
}

/// Current conditions for one city. Every field may be missing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub temp_c: Option<f64>,
    pub description: Option<String>,
    pub humidity_pct: Option<u8>,
}

/// Placeholder printed for a snapshot field the provider did not send.
pub const MISSING_FIELD: &str = "N/A";

impl fmt::Display for WeatherSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let temp = self
            .temp_c
            .map_or_else(|| MISSING_FIELD.to_string(), |t| t.to_string());
        let desc = self.description.as_deref().unwrap_or(MISSING_FIELD);
        let humidity = self
            .humidity_pct
            .map_or_else(|| MISSING_FIELD.to_string(), |h| h.to_string());
        write!(f, "{temp}°C, {desc}, Humidity: {humidity}%")
    }
}

/// Weather line for the primary capital.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapitalWeather {
    /// `None` when the country lists no capital.
    pub capital: Option<String>,
    /// Formatted conditions or one of the fixed fallback messages.
    pub report: String,
}

/// Local time in one of the country's time zones.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneClock {
    pub zone: String,
    /// `None` when the zone identifier could not be converted.
    pub local_time: Option<String>,
}

/// The aggregate returned for one query.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CountryProfile {
    pub country: CountryRecord,
    /// Same length and order as `country.borders`.
    pub neighbors: Vec<String>,
    pub weather: CapitalWeather,
    pub clocks: Vec<ZoneClock>,
    pub culture: Option<SummaryResult>,
    pub landmarks: Option<SummaryResult>,
    pub fun_facts: Option<String>,
    pub travel_tip: String,
}
