// crates/geoprofile-core/src/model/convert.rs
use super::{Coordinates, CountryRecord, SummaryResult, WeatherSnapshot};
use crate::error::Unavailable;
use crate::raw::{CountryRaw, PageSummaryRaw, WeatherReportRaw};

/// **Directory Converter:** Raw -> CountryRecord.
///
/// A record without a common name is useless to every consumer, so that is
/// the one field whose absence rejects the payload.
pub fn country_from_raw(raw: CountryRaw) -> Result<CountryRecord, Unavailable> {
    let name = raw
        .name
        .common
        .filter(|n| !n.trim().is_empty())
        .ok_or_else(|| Unavailable::ProviderMiss("country payload without name.common".into()))?;

    let coordinates = match raw.latlng.as_slice() {
        [lat, lng] => Some(Coordinates {
            lat: *lat,
            lng: *lng,
        }),
        _ => None,
    };

    Ok(CountryRecord {
        name,
        official_name: raw.name.official,
        code: raw.cca3,
        flag_url: raw.flags.png.or(raw.flags.svg),
        population: raw.population,
        area_km2: raw.area.filter(|a| *a >= 0.0),
        languages: raw.languages.into_values().collect(),
        borders: raw.borders,
        coordinates,
        timezones: raw.timezones,
        capitals: raw.capital,
    })
}

/// **Summary Converter:** prefers the full-resolution image over the thumbnail.
pub fn summary_from_raw(raw: PageSummaryRaw) -> SummaryResult {
    let original = raw.originalimage.and_then(|i| i.source);
    let thumbnail = raw.thumbnail.and_then(|i| i.source);
    SummaryResult {
        extract: raw.extract,
        image_url: original.or(thumbnail),
    }
}

/// **Weather Converter:** `None` when there is no current condition at all.
///
/// Individual fields that fail to parse are dropped, not fatal.
pub fn weather_from_raw(raw: WeatherReportRaw) -> Option<WeatherSnapshot> {
    let current = raw.current_condition.into_iter().next()?;
    Some(WeatherSnapshot {
        temp_c: current.temp_c.and_then(|t| t.trim().parse().ok()),
        description: current
            .weather_desc
            .into_iter()
            .next()
            .and_then(|d| d.value)
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty()),
        humidity_pct: current.humidity.and_then(|h| h.trim().parse().ok()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raw::CountriesRaw;

    #[test]
    fn converts_a_directory_entry() {
        let raw: CountriesRaw = serde_json::from_str(
            r#"[{
                "name": { "common": "France", "official": "French Republic" },
                "cca3": "FRA",
                "flags": { "png": "https://flags/fr.png", "svg": "https://flags/fr.svg" },
                "population": 67391582,
                "area": 551695.0,
                "languages": { "fra": "French" },
                "borders": ["AND", "BEL", "DEU"],
                "latlng": [46.0, 2.0],
                "timezones": ["UTC-10:00", "UTC+01:00"],
                "capital": ["Paris"]
            }]"#,
        )
        .unwrap();
        let c = country_from_raw(raw.into_iter().next().unwrap()).unwrap();
        assert_eq!(c.name, "France");
        assert_eq!(c.official_name.as_deref(), Some("French Republic"));
        assert_eq!(c.flag_url.as_deref(), Some("https://flags/fr.png"));
        assert_eq!(c.population, Some(67_391_582));
        assert_eq!(c.borders, vec!["AND", "BEL", "DEU"]);
        assert_eq!(c.coordinates, Some(Coordinates { lat: 46.0, lng: 2.0 }));
        assert_eq!(c.capital(), Some("Paris"));
        assert!(c.languages.contains("French"));
    }

    #[test]
    fn sparse_entry_keeps_explicit_absence() {
        let raw: CountryRaw = serde_json::from_str(
            r#"{ "name": { "common": "Nauru" }, "flags": { "svg": "https://flags/nr.svg" }, "latlng": [1.0] }"#,
        )
        .unwrap();
        let c = country_from_raw(raw).unwrap();
        assert_eq!(c.flag_url.as_deref(), Some("https://flags/nr.svg"));
        assert_eq!(c.coordinates, None);
        assert_eq!(c.population, None);
        assert!(c.is_island_nation());
        assert_eq!(c.capital(), None);
    }

    #[test]
    fn nameless_entry_is_a_miss() {
        let raw: CountryRaw = serde_json::from_str(r#"{ "population": 5 }"#).unwrap();
        assert!(matches!(
            country_from_raw(raw),
            Err(Unavailable::ProviderMiss(_))
        ));
    }

    #[test]
    fn summary_prefers_original_image() {
        let raw: PageSummaryRaw = serde_json::from_str(
            r#"{ "extract": "text", "thumbnail": { "source": "thumb" }, "originalimage": { "source": "full" } }"#,
        )
        .unwrap();
        assert_eq!(summary_from_raw(raw).image_url.as_deref(), Some("full"));

        let raw: PageSummaryRaw =
            serde_json::from_str(r#"{ "extract": "text", "thumbnail": { "source": "thumb" } }"#)
                .unwrap();
        assert_eq!(summary_from_raw(raw).image_url.as_deref(), Some("thumb"));
    }

    #[test]
    fn weather_fields_parse_independently() {
        let raw: WeatherReportRaw = serde_json::from_str(
            r#"{ "current_condition": [ { "temp_C": "21", "weatherDesc": [ { "value": "Sunny " } ], "humidity": "abc" } ] }"#,
        )
        .unwrap();
        let s = weather_from_raw(raw).unwrap();
        assert_eq!(s.temp_c, Some(21.0));
        assert_eq!(s.description.as_deref(), Some("Sunny"));
        assert_eq!(s.humidity_pct, None);

        let empty: WeatherReportRaw =
            serde_json::from_str(r#"{ "current_condition": [] }"#).unwrap();
        assert!(weather_from_raw(empty).is_none());
    }
}
