// crates/geoprofile-core/src/weather.rs

//! # Weather Resolver
//!
//! Current conditions for a city as one short line. The string form never
//! fails: anything short of a usable current condition becomes
//! [`WEATHER_UNAVAILABLE`].

use crate::config::Config;
use crate::error::Unavailable;
use crate::model::convert::weather_from_raw;
use crate::model::{CapitalWeather, WeatherSnapshot};
use crate::raw::WeatherReportRaw;
use crate::source::{encode_segment, SourceClient};
use tracing::{debug, warn};

pub const WEATHER_UNAVAILABLE: &str = "Weather data not available.";
pub const CAPITAL_NOT_FOUND: &str = "Capital city not found, cannot fetch weather.";

#[derive(Debug, Clone)]
pub struct WeatherResolver {
    client: SourceClient,
    config: Config,
}

impl WeatherResolver {
    pub fn new(client: SourceClient, config: Config) -> Self {
        Self { client, config }
    }

    /// `"<temp>°C, <description>, Humidity: <pct>%"` or [`WEATHER_UNAVAILABLE`].
    pub fn resolve(&self, city: &str) -> String {
        match self.snapshot(city) {
            Some(snapshot) => snapshot.to_string(),
            None => WEATHER_UNAVAILABLE.to_string(),
        }
    }

    /// Typed conditions, `None` when nothing usable came back.
    pub fn snapshot(&self, city: &str) -> Option<WeatherSnapshot> {
        match self.lookup(city) {
            Ok(snapshot) => Some(snapshot),
            Err(reason) => {
                warn!(city, %reason, "weather unavailable");
                None
            }
        }
    }

    /// Weather for the first listed capital, or the fixed no-capital line.
    pub fn for_capital(&self, capital: Option<&str>) -> CapitalWeather {
        match capital.map(str::trim).filter(|c| !c.is_empty()) {
            Some(city) => CapitalWeather {
                capital: Some(city.to_string()),
                report: self.resolve(city),
            },
            None => CapitalWeather {
                capital: None,
                report: CAPITAL_NOT_FOUND.to_string(),
            },
        }
    }

    fn lookup(&self, city: &str) -> Result<WeatherSnapshot, Unavailable> {
        let city = city.trim();
        if city.is_empty() {
            return Err(Unavailable::ProviderMiss("empty city name".into()));
        }
        let url = self
            .config
            .weather_endpoint(&format!("{}?format=j1", encode_segment(city)));
        let raw: WeatherReportRaw = self.client.fetch_json(&url)?;
        let snapshot = weather_from_raw(raw)
            .ok_or_else(|| Unavailable::ProviderMiss("no current_condition".into()))?;
        debug!(city, ?snapshot, "weather resolved");
        Ok(snapshot)
    }
}
