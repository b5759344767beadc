// crates/geoprofile-core/src/config.rs

//! # Configuration
//!
//! Base URLs of the three providers, the per-request timeout and the
//! quality heuristics. Every field has a default, so a partial JSON document
//! is a valid config.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_COUNTRIES_URL: &str = "https://restcountries.com/v3.1";
pub const DEFAULT_SUMMARY_URL: &str = "https://en.wikipedia.org/api/rest_v1";
pub const DEFAULT_WEATHER_URL: &str = "https://wttr.in";
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Minimum summary length heuristics.
///
/// A summary is acceptable only if its extract is *longer* than the
/// threshold (strictly greater).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// Single-topic summaries (culture, landmarks, plain lookups).
    pub summary_min_chars: usize,
    /// Summaries used as the source for fun facts.
    pub facts_min_chars: usize,
    /// How many sentence units the fun facts keep.
    pub facts_sentences: usize,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            summary_min_chars: 20,
            facts_min_chars: 200,
            facts_sentences: 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub countries_url: String,
    pub summary_url: String,
    pub weather_url: String,
    pub timeout_secs: u64,
    pub user_agent: String,
    pub thresholds: Thresholds,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            countries_url: DEFAULT_COUNTRIES_URL.to_string(),
            summary_url: DEFAULT_SUMMARY_URL.to_string(),
            weather_url: DEFAULT_WEATHER_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: concat!("geoprofile/", env!("CARGO_PKG_VERSION")).to_string(),
            thresholds: Thresholds::default(),
        }
    }
}

impl Config {
    /// Parses a (possibly partial) JSON config; missing keys take defaults.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: Config = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (source_name, url) in [
            ("countries", &self.countries_url),
            ("summary", &self.summary_url),
            ("weather", &self.weather_url),
        ] {
            let ok = url.starts_with("http://") || url.starts_with("https://");
            if !ok {
                return Err(ConfigError::InvalidUrl {
                    source_name,
                    url: url.clone(),
                });
            }
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        let t = self.thresholds;
        if t.facts_min_chars < t.summary_min_chars {
            return Err(ConfigError::ThresholdOrder {
                summary: t.summary_min_chars,
                facts: t.facts_min_chars,
            });
        }
        Ok(())
    }

    // Joins without doubling the slash; base URLs are often given with one.
    pub(crate) fn countries_endpoint(&self, path: &str) -> String {
        join_url(&self.countries_url, path)
    }

    pub(crate) fn summary_endpoint(&self, path: &str) -> String {
        join_url(&self.summary_url, path)
    }

    pub(crate) fn weather_endpoint(&self, path: &str) -> String {
        join_url(&self.weather_url, path)
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let cfg = Config::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.thresholds.summary_min_chars, 20);
        assert_eq!(cfg.thresholds.facts_min_chars, 200);
        assert_eq!(cfg.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let cfg = Config::from_json_str(
            r#"{ "weather_url": "http://localhost:9000/", "thresholds": { "facts_min_chars": 500 } }"#,
        )
        .unwrap();
        assert_eq!(cfg.weather_url, "http://localhost:9000/");
        assert_eq!(cfg.countries_url, DEFAULT_COUNTRIES_URL);
        assert_eq!(cfg.thresholds.facts_min_chars, 500);
        assert_eq!(cfg.thresholds.summary_min_chars, 20);
        assert_eq!(
            cfg.weather_endpoint("Paris?format=j1"),
            "http://localhost:9000/Paris?format=j1"
        );
    }

    #[test]
    fn rejects_bad_values() {
        let cfg = Config {
            summary_url: "ftp://example.org".into(),
            ..Config::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvalidUrl { source_name: "summary", .. })
        ));

        let cfg = Config {
            timeout_secs: 0,
            ..Config::default()
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::ZeroTimeout)));

        let mut cfg = Config::default();
        cfg.thresholds.facts_min_chars = 10;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::ThresholdOrder { .. })
        ));

        assert!(matches!(
            Config::from_json_str("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }
}
