// crates/geoprofile-core/src/country.rs

//! # Country Resolver
//!
//! Looks a country up by free-text name (`/name/{name}`) or ISO code
//! (`/alpha/{code}`). The directory answers with an array; the first element
//! wins. "Provider said no" and "network broke" are both plain `None` here.

use crate::config::Config;
use crate::error::Unavailable;
use crate::model::convert::country_from_raw;
use crate::model::CountryRecord;
use crate::raw::CountriesRaw;
use crate::source::{encode_segment, SourceClient};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct CountryResolver {
    client: SourceClient,
    config: Config,
}

impl CountryResolver {
    pub fn new(client: SourceClient, config: Config) -> Self {
        Self { client, config }
    }

    /// `None` for an empty name, a non-success answer or a transport failure.
    pub fn resolve_by_name(&self, name: &str) -> Option<CountryRecord> {
        self.resolve("name", name)
    }

    /// `None` for an empty code, a non-success answer or a transport failure.
    pub fn resolve_by_code(&self, code: &str) -> Option<CountryRecord> {
        self.resolve("alpha", code)
    }

    fn resolve(&self, kind: &str, key: &str) -> Option<CountryRecord> {
        let key = key.trim();
        if key.is_empty() {
            return None;
        }
        match self.lookup(kind, key) {
            Ok(record) => Some(record),
            Err(reason) => {
                debug!(kind, key, %reason, "country lookup came back empty");
                None
            }
        }
    }

    fn lookup(&self, kind: &str, key: &str) -> Result<CountryRecord, Unavailable> {
        let url = self
            .config
            .countries_endpoint(&format!("{kind}/{}", encode_segment(key)));
        let raw: CountriesRaw = self.client.fetch_json(&url)?;
        let first = raw
            .into_iter()
            .next()
            .ok_or_else(|| Unavailable::ProviderMiss("empty result array".into()))?;
        country_from_raw(first)
    }
}
