// crates/geoprofile-core/src/source.rs

//! # Source Client
//!
//! Handles the physical layer (one GET against one provider) and hands typed
//! payloads to the resolvers. Anything that goes wrong on the way is returned
//! as an [`Unavailable`] value, never raised.

use crate::error::{FetchError, Unavailable};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::debug;

/// Raw response as seen by the pipeline: status code and body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// One blocking GET. Implementations must enforce their own timeout.
///
/// The shipped implementation is [`HttpTransport`]; tests plug in an
/// in-memory route table instead.
pub trait Transport: Send + Sync {
    fn get(&self, url: &str) -> Result<HttpResponse, FetchError>;
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        (**self).get(url)
    }
}

// -----------------------------------------------------------------------------
// REQWEST TRANSPORT
// -----------------------------------------------------------------------------

#[cfg(feature = "http")]
pub use http::HttpTransport;

#[cfg(feature = "http")]
mod http {
    use super::{HttpResponse, Transport};
    use crate::config::Config;
    use crate::error::{ConfigError, FetchError};

    /// Blocking `reqwest` client with the configured timeout and user agent.
    ///
    /// The client is cheap to share: concurrent sub-resolutions each check a
    /// connection out of its pool.
    #[derive(Debug, Clone)]
    pub struct HttpTransport {
        client: reqwest::blocking::Client,
    }

    impl HttpTransport {
        pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
            let client = reqwest::blocking::Client::builder()
                .timeout(config.timeout())
                .user_agent(config.user_agent.clone())
                .build()
                .map_err(|e| ConfigError::Client(e.to_string()))?;
            Ok(Self { client })
        }
    }

    impl Transport for HttpTransport {
        fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
            let resp = self
                .client
                .get(url)
                .send()
                .map_err(|e| FetchError::Transport(e.to_string()))?;
            let status = resp.status().as_u16();
            let body = resp
                .text()
                .map_err(|e| FetchError::Transport(e.to_string()))?;
            Ok(HttpResponse { status, body })
        }
    }
}

// -----------------------------------------------------------------------------
// TYPED FETCH
// -----------------------------------------------------------------------------

/// Typed front for a [`Transport`], shared by every resolver.
#[derive(Clone)]
pub struct SourceClient {
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for SourceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceClient").finish_non_exhaustive()
    }
}

impl SourceClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// GET `url` and decode the body as `T`.
    ///
    /// Transport errors become [`Unavailable::TransportFailure`]; a non-2xx
    /// status or a body of the wrong shape becomes [`Unavailable::ProviderMiss`].
    pub fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, Unavailable> {
        let resp = self.transport.get(url).map_err(|e| {
            debug!(%url, error = %e, "fetch failed");
            Unavailable::from(e)
        })?;
        debug!(%url, status = resp.status, "fetched");
        if !resp.is_success() {
            return Err(FetchError::Status(resp.status).into());
        }
        let payload = serde_json::from_str(&resp.body).map_err(FetchError::from)?;
        Ok(payload)
    }
}

/// Percent-encodes a single path segment.
pub fn encode_segment(raw: &str) -> String {
    urlencoding::encode(raw).into_owned()
}

/// Encyclopedia page titles use underscores for spaces.
pub fn topic_title(raw: &str) -> String {
    raw.trim().replace(' ', "_")
}
