// crates/geoprofile-core/src/explorer.rs

//! # Aggregation Orchestrator
//!
//! One pass per query:
//!
//! 1. Resolve the country by name. This is the only step allowed to fail the
//!    request ([`ProfileError::CountryNotFound`]).
//! 2. Fan out everything that only depends on that record: neighbors,
//!    culture, landmarks, fun facts, capital weather and clocks. They run on a
//!    rayon pool with one thread per sub-step and per neighbor, so latency is
//!    that of the slowest chain, not the sum.
//! 3. Assemble a [`CountryProfile`] from whatever each step produced.
//!
//! Sub-steps share nothing mutable and cannot cancel each other; a slow one is
//! bounded by the transport timeout.

use crate::clock::render_zones;
use crate::config::Config;
use crate::country::CountryResolver;
use crate::error::{ConfigError, ProfileError, Result};
use crate::model::{CapitalWeather, CountryProfile, CountryRecord, SummaryResult, ZoneClock};
use crate::neighbors::NeighborExpander;
use crate::source::{SourceClient, Transport};
use crate::summary::SummaryResolver;
use crate::tips::travel_tip;
use crate::topics::{Subject, TopicResolver};
use crate::weather::WeatherResolver;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{info, info_span, warn};

#[derive(Debug, Clone)]
pub struct Explorer {
    config: Config,
    countries: CountryResolver,
    neighbors: NeighborExpander,
    summaries: SummaryResolver,
    topics: TopicResolver,
    weather: WeatherResolver,
}

impl Explorer {
    /// Explorer backed by the `reqwest` transport.
    #[cfg(feature = "http")]
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        let transport = crate::source::HttpTransport::from_config(&config)?;
        Self::with_transport(config, Arc::new(transport))
    }

    /// Explorer backed by any [`Transport`].
    pub fn with_transport(
        config: Config,
        transport: Arc<dyn Transport>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let client = SourceClient::new(transport);
        let countries = CountryResolver::new(client.clone(), config.clone());
        let summaries = SummaryResolver::new(client.clone(), config.clone());
        Ok(Self {
            neighbors: NeighborExpander::new(countries.clone()),
            topics: TopicResolver::new(summaries.clone(), config.thresholds),
            weather: WeatherResolver::new(client, config.clone()),
            countries,
            summaries,
            config,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn countries(&self) -> &CountryResolver {
        &self.countries
    }

    pub fn summaries(&self) -> &SummaryResolver {
        &self.summaries
    }

    pub fn topics(&self) -> &TopicResolver {
        &self.topics
    }

    pub fn weather(&self) -> &WeatherResolver {
        &self.weather
    }

    /// Builds the profile for `name` with clocks set to the current time.
    pub fn explore(&self, name: &str) -> Result<CountryProfile> {
        self.explore_at(name, Utc::now())
    }

    /// Same as [`Explorer::explore`] with an explicit "now".
    pub fn explore_at(&self, name: &str, now: DateTime<Utc>) -> Result<CountryProfile> {
        let query = name.trim();
        if query.is_empty() {
            return Err(ProfileError::EmptyQuery);
        }
        let span = info_span!("explore", query);
        let _guard = span.enter();

        let country = self
            .countries
            .resolve_by_name(query)
            .ok_or_else(|| ProfileError::CountryNotFound(query.to_string()))?;
        let common = country.name.as_str();

        // Sub-steps block on I/O, so give every one of them its own thread
        // instead of sharing the CPU-sized global pool.
        let threads = country.borders.len() + FAN_OUT_STEPS;
        let fan_out = || self.fan_out(&country, now);
        let Enrichment {
            neighbors,
            clocks,
            culture,
            landmarks,
            fun_facts,
            weather,
        } = match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
            Ok(pool) => pool.install(fan_out),
            Err(e) => {
                warn!(error = %e, threads, "could not build I/O pool, using the global pool");
                fan_out()
            }
        };

        info!(
            country = common,
            neighbors = neighbors.len(),
            culture = culture.is_some(),
            landmarks = landmarks.is_some(),
            fun_facts = fun_facts.is_some(),
            "profile assembled"
        );

        Ok(CountryProfile {
            travel_tip: travel_tip(common).to_string(),
            neighbors,
            weather,
            clocks,
            culture,
            landmarks,
            fun_facts,
            country,
        })
    }

    fn fan_out(&self, country: &CountryRecord, now: DateTime<Utc>) -> Enrichment {
        let common = country.name.as_str();
        let ((neighbors, clocks), ((culture, landmarks), (fun_facts, weather))) = rayon::join(
            || {
                rayon::join(
                    || self.neighbors.expand(&country.borders),
                    || render_zones(&country.timezones, now),
                )
            },
            || {
                rayon::join(
                    || {
                        rayon::join(
                            || self.topics.resolve_subject(common, Subject::Culture),
                            || self.topics.resolve_subject(common, Subject::Landmarks),
                        )
                    },
                    || {
                        rayon::join(
                            || self.topics.fun_facts(common),
                            || self.weather.for_capital(country.capital()),
                        )
                    },
                )
            },
        );
        Enrichment {
            neighbors,
            clocks,
            culture,
            landmarks,
            fun_facts,
            weather,
        }
    }
}

/// Independent sub-steps besides the per-neighbor lookups.
const FAN_OUT_STEPS: usize = 6;

/// Everything resolved after the primary lookup.
struct Enrichment {
    neighbors: Vec<String>,
    clocks: Vec<ZoneClock>,
    culture: Option<SummaryResult>,
    landmarks: Option<SummaryResult>,
    fun_facts: Option<String>,
    weather: CapitalWeather,
}
