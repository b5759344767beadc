// crates/geoprofile-core/src/raw.rs

//! Raw provider payloads, exactly as they come over the wire.
//!
//! NOTE: These types mirror the external services and are converted into the
//! model types right after decoding. Unknown keys are ignored and every field
//! is optional, so a sparse payload still decodes.

use serde::Deserialize;
use std::collections::BTreeMap;

// -----------------------------------------------------------------------------
// COUNTRY DIRECTORY
// -----------------------------------------------------------------------------

/// `GET /name/{name}` and `GET /alpha/{code}` both answer with an array.
pub type CountriesRaw = Vec<CountryRaw>;

#[derive(Debug, Default, Deserialize)]
pub struct CountryNameRaw {
    #[serde(default)]
    pub common: Option<String>,
    #[serde(default)]
    pub official: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct FlagsRaw {
    #[serde(default)]
    pub png: Option<String>,
    #[serde(default)]
    pub svg: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CountryRaw {
    #[serde(default)]
    pub name: CountryNameRaw,
    #[serde(default)]
    pub cca3: Option<String>,
    #[serde(default)]
    pub flags: FlagsRaw,
    #[serde(default)]
    pub population: Option<u64>,
    #[serde(default)]
    pub area: Option<f64>,
    /// languages: { "fra": "French", ... }
    #[serde(default)]
    pub languages: BTreeMap<String, String>,
    #[serde(default)]
    pub borders: Vec<String>,
    #[serde(default)]
    pub latlng: Vec<f64>,
    #[serde(default)]
    pub timezones: Vec<String>,
    #[serde(default)]
    pub capital: Vec<String>,
}

// -----------------------------------------------------------------------------
// ENCYCLOPEDIA SUMMARY
// -----------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
pub struct ImageRaw {
    #[serde(default)]
    pub source: Option<String>,
}

/// `GET /page/summary/{title}`
#[derive(Debug, Default, Deserialize)]
pub struct PageSummaryRaw {
    #[serde(default)]
    pub extract: Option<String>,
    #[serde(default)]
    pub originalimage: Option<ImageRaw>,
    #[serde(default)]
    pub thumbnail: Option<ImageRaw>,
}

// -----------------------------------------------------------------------------
// WEATHER
// -----------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
pub struct ValueRaw {
    #[serde(default)]
    pub value: Option<String>,
}

/// One entry of `current_condition`. The service sends numbers as strings.
#[derive(Debug, Default, Deserialize)]
pub struct CurrentConditionRaw {
    #[serde(rename = "temp_C", default)]
    pub temp_c: Option<String>,
    #[serde(rename = "weatherDesc", default)]
    pub weather_desc: Vec<ValueRaw>,
    #[serde(default)]
    pub humidity: Option<String>,
}

/// `GET /{city}?format=j1`
#[derive(Debug, Default, Deserialize)]
pub struct WeatherReportRaw {
    #[serde(default)]
    pub current_condition: Vec<CurrentConditionRaw>,
}
