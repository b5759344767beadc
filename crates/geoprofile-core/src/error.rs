// crates/geoprofile-core/src/error.rs

//! # Errors
//!
//! Three layers, from the wire up:
//!
//! - [`FetchError`]: what a single GET produced when it did not produce a body.
//! - [`Unavailable`]: why a sub-resolution has no usable data. Resolvers log it
//!   and collapse it into their own "no data" outcome; it never crosses a
//!   resolver boundary.
//! - [`ProfileError`]: the only failures a caller of
//!   [`Explorer::explore`](crate::explorer::Explorer::explore) ever sees.

use thiserror::Error;

/// Outcome of a transport-level GET that did not yield a usable response.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Timeout, DNS failure, refused connection, TLS error…
    #[error("transport error: {0}")]
    Transport(String),

    /// The provider answered with a non-success status.
    #[error("provider returned HTTP {0}")]
    Status(u16),

    /// The body was not the JSON shape we expected.
    #[error("could not decode provider payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Why a sub-resolution produced no usable data.
#[derive(Debug, Error)]
pub enum Unavailable {
    #[error("transport failure: {0}")]
    TransportFailure(String),

    #[error("provider miss: {0}")]
    ProviderMiss(String),

    #[error("quality reject: {len} chars, need more than {threshold}")]
    QualityReject { len: usize, threshold: usize },
}

impl From<FetchError> for Unavailable {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::Transport(msg) => Unavailable::TransportFailure(msg),
            FetchError::Status(code) => Unavailable::ProviderMiss(format!("HTTP {code}")),
            FetchError::Decode(e) => Unavailable::ProviderMiss(e.to_string()),
        }
    }
}

/// Request-level failures. Everything else degrades inside the profile.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("country name must not be empty")]
    EmptyQuery,

    #[error("country not found: {0}")]
    CountryNotFound(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Invalid [`Config`](crate::config::Config) values.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid base URL for {source_name}: {url:?}")]
    InvalidUrl { source_name: &'static str, url: String },

    #[error("timeout must be at least one second")]
    ZeroTimeout,

    #[error("facts threshold ({facts}) must not be below the summary threshold ({summary})")]
    ThresholdOrder { summary: usize, facts: usize },

    #[error("could not parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("could not build HTTP client: {0}")]
    Client(String),
}

pub type Result<T, E = ProfileError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_errors_map_onto_the_taxonomy() {
        let t: Unavailable = FetchError::Transport("timed out".into()).into();
        assert!(matches!(t, Unavailable::TransportFailure(_)));

        let s: Unavailable = FetchError::Status(404).into();
        match s {
            Unavailable::ProviderMiss(msg) => assert_eq!(msg, "HTTP 404"),
            other => panic!("unexpected {other:?}"),
        }

        let bad = serde_json::from_str::<u8>("nope").unwrap_err();
        let d: Unavailable = FetchError::from(bad).into();
        assert!(matches!(d, Unavailable::ProviderMiss(_)));
    }
}
