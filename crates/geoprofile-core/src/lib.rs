// crates/geoprofile-core/src/lib.rs

//! geoprofile-core
//! ===============
//!
//! Builds a composite profile for a country from three independent public
//! services: a country directory, an encyclopedia summary service and a
//! weather service.
//!
//! Only the primary country lookup can fail a request. Every other piece
//! (neighbors, culture, landmarks, fun facts, weather, clocks) degrades to an
//! explicit "not available" value inside the [`CountryProfile`].
//!
//! ```no_run
//! use geoprofile_core::prelude::*;
//!
//! let explorer = Explorer::new(Config::default())?;
//! let profile = explorer.explore("France")?;
//! println!("{} borders {}", profile.country.name, profile.neighbors.join(", "));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod clock;
pub mod config;
pub mod country;
pub mod error;
pub mod explorer;
pub mod model;
pub mod neighbors;
// Wire payloads; converted to `model` right after decoding.
#[doc(hidden)]
pub mod raw;
pub mod source;
pub mod summary;
pub mod text;
pub mod tips;
pub mod topics;
pub mod weather;

// Re-exports
pub use crate::config::{Config, Thresholds};
pub use crate::error::{ConfigError, FetchError, ProfileError, Result, Unavailable};
pub use crate::explorer::Explorer;
pub use crate::model::{
    CapitalWeather, Coordinates, CountryProfile, CountryRecord, SummaryResult, WeatherSnapshot,
    ZoneClock,
};
#[cfg(feature = "http")]
pub use crate::source::HttpTransport;
pub use crate::source::{HttpResponse, SourceClient, Transport};
pub use crate::topics::{FallbackChain, Subject};

pub mod prelude {
    pub use crate::clock::TIMEZONE_UNAVAILABLE;
    pub use crate::weather::{CAPITAL_NOT_FOUND, WEATHER_UNAVAILABLE};
    pub use crate::{
        CapitalWeather, Config, CountryProfile, CountryRecord, Explorer, ProfileError, Result,
        Subject, SummaryResult, Thresholds, Transport, ZoneClock,
    };
}
