// crates/geoprofile-core/src/neighbors.rs

//! # Neighbor Expander
//!
//! Turns border codes into display names, one independent lookup per code.
//! A code that does not resolve is echoed back verbatim, so the output always
//! has the same length and order as the input.

use crate::country::CountryResolver;
use rayon::prelude::*;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct NeighborExpander {
    countries: CountryResolver,
}

impl NeighborExpander {
    pub fn new(countries: CountryResolver) -> Self {
        Self { countries }
    }

    pub fn expand(&self, border_codes: &[String]) -> Vec<String> {
        // Indexed parallel collect keeps input order. One code per task so
        // each blocking lookup can land on its own thread.
        border_codes
            .par_iter()
            .with_max_len(1)
            .map(|code| self.display_name(code))
            .collect()
    }

    fn display_name(&self, code: &str) -> String {
        match self.countries.resolve_by_code(code) {
            Some(record) => record.name,
            None => {
                warn!(code, "neighbor did not resolve, echoing code");
                code.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::error::FetchError;
    use crate::source::{HttpResponse, SourceClient, Transport};
    use proptest::prelude::*;
    use std::sync::Arc;

    /// Knows a handful of codes; "ERR" simulates a broken connection.
    struct Directory;

    impl Transport for Directory {
        fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
            let code = url.rsplit('/').next().unwrap_or_default();
            let name = match code {
                "DEU" => "Germany",
                "ESP" => "Spain",
                "ITA" => "Italy",
                "CHE" => "Switzerland",
                "ERR" => return Err(FetchError::Transport("connection reset".into())),
                _ => {
                    return Ok(HttpResponse {
                        status: 404,
                        body: String::new(),
                    })
                }
            };
            Ok(HttpResponse {
                status: 200,
                body: format!(r#"[{{ "name": {{ "common": "{name}" }} }}]"#),
            })
        }
    }

    fn expander() -> NeighborExpander {
        let client = SourceClient::new(Arc::new(Directory));
        NeighborExpander::new(CountryResolver::new(client, Config::default()))
    }

    fn codes(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn resolves_and_echoes_in_order() {
        let out = expander().expand(&codes(&["DEU", "XYZ", "ESP", "ERR", "ITA"]));
        assert_eq!(out, vec!["Germany", "XYZ", "Spain", "ERR", "Italy"]);
    }

    #[test]
    fn empty_input_is_empty_output() {
        assert!(expander().expand(&[]).is_empty());
    }

    fn code_strategy() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("DEU".to_string()),
            Just("ESP".to_string()),
            Just("ITA".to_string()),
            Just("CHE".to_string()),
            Just("ERR".to_string()),
            "[A-Z]{3}",
        ]
    }

    proptest! {
        #[test]
        fn output_mirrors_input(input in prop::collection::vec(code_strategy(), 1..12)) {
            let out = expander().expand(&input);
            prop_assert_eq!(out.len(), input.len());
            for (code, name) in input.iter().zip(&out) {
                let expected = match code.as_str() {
                    "DEU" => "Germany",
                    "ESP" => "Spain",
                    "ITA" => "Italy",
                    "CHE" => "Switzerland",
                    other => other,
                };
                prop_assert_eq!(name.as_str(), expected);
            }
        }
    }
}
