// crates/geoprofile-core/tests/common/mod.rs
#![allow(dead_code)]

use geoprofile_core::{FetchError, HttpResponse, Transport};
use std::collections::HashMap;
use std::sync::Mutex;

pub const COUNTRIES: &str = "http://countries.test";
pub const SUMMARY: &str = "http://summary.test";
pub const WEATHER: &str = "http://weather.test";

enum Route {
    Reply(u16, String),
    Broken,
}

/// In-memory provider: exact URL -> canned reply. Unknown URLs are 404s.
#[derive(Default)]
pub struct FakeWeb {
    routes: HashMap<String, Route>,
    hits: Mutex<Vec<String>>,
}

impl FakeWeb {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(mut self, url: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        self.routes.insert(url.into(), Route::Reply(status, body.into()));
        self
    }

    /// Simulates a timeout / refused connection for `url`.
    pub fn broken(mut self, url: impl Into<String>) -> Self {
        self.routes.insert(url.into(), Route::Broken);
        self
    }

    pub fn country(self, path: &str, body: serde_json::Value) -> Self {
        self.reply(format!("{COUNTRIES}/{path}"), 200, format!("[{body}]"))
    }

    pub fn page(self, title: &str, extract: &str) -> Self {
        let body = serde_json::json!({
            "extract": extract,
            "originalimage": { "source": format!("https://img.test/{title}.jpg") },
        });
        self.reply(format!("{SUMMARY}/page/summary/{title}"), 200, body.to_string())
    }

    pub fn weather(self, city: &str, temp: &str, desc: &str, humidity: &str) -> Self {
        let body = serde_json::json!({
            "current_condition": [
                { "temp_C": temp, "weatherDesc": [ { "value": desc } ], "humidity": humidity }
            ]
        });
        self.reply(format!("{WEATHER}/{city}?format=j1"), 200, body.to_string())
    }

    pub fn hits(&self) -> Vec<String> {
        self.hits.lock().unwrap().clone()
    }
}

impl Transport for FakeWeb {
    fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        self.hits.lock().unwrap().push(url.to_string());
        match self.routes.get(url) {
            Some(Route::Reply(status, body)) => Ok(HttpResponse {
                status: *status,
                body: body.clone(),
            }),
            Some(Route::Broken) => Err(FetchError::Transport("connection timed out".into())),
            None => Ok(HttpResponse {
                status: 404,
                body: r#"{"status":404,"message":"Not Found"}"#.into(),
            }),
        }
    }
}

pub fn config() -> geoprofile_core::Config {
    geoprofile_core::Config {
        countries_url: COUNTRIES.into(),
        summary_url: SUMMARY.into(),
        weather_url: WEATHER.into(),
        ..Default::default()
    }
}
