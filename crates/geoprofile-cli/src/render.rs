//! Stateless text rendering of a [`CountryProfile`].
//!
//! Every call takes its [`RenderOptions`]; nothing is configured globally.
//! Each optional part of the profile has its own fallback line.

use geoprofile_core::prelude::*;
use std::fmt::Write;

pub const NO_NEIGHBORS: &str = "No neighboring countries or island nation.";
pub const NO_LOCATION: &str = "No location data available.";
pub const NO_LANDMARKS: &str = "No landmark data found.";
pub const NO_CULTURE: &str = "No cultural data found.";
pub const NO_FUN_FACTS: &str = "No fun facts available.";
pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HeadingStyle {
    /// Title underlined with dashes.
    #[default]
    Plain,
    /// `## Title`
    Markdown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub headings: HeadingStyle,
    pub show_images: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            headings: HeadingStyle::Plain,
            show_images: true,
        }
    }
}

pub fn render_profile(p: &CountryProfile, opts: &RenderOptions) -> String {
    let mut out = render_country(&p.country, opts);

    section(&mut out, "Neighboring Countries", opts);
    if p.country.is_island_nation() {
        line(&mut out, NO_NEIGHBORS);
    } else {
        line(&mut out, &p.neighbors.join(", "));
    }

    section(&mut out, "Location", opts);
    match p.country.coordinates {
        Some(c) => line(&mut out, &format!("Latitude {}, Longitude {}", c.lat, c.lng)),
        None => line(&mut out, NO_LOCATION),
    }

    section(&mut out, "Local Time & Timezones", opts);
    if p.clocks.is_empty() {
        line(&mut out, TIMEZONE_UNAVAILABLE);
    }
    for clock in &p.clocks {
        let time = clock.local_time.as_deref().unwrap_or(TIMEZONE_UNAVAILABLE);
        line(&mut out, &format!("{}: {}", clock.zone, time));
    }

    section(&mut out, "Famous Landmarks & Photos", opts);
    summary(&mut out, p.landmarks.as_ref(), NO_LANDMARKS, opts);

    section(&mut out, "Cultural Highlights", opts);
    summary(&mut out, p.culture.as_ref(), NO_CULTURE, opts);

    section(&mut out, "Current Weather in Capital", opts);
    match &p.weather.capital {
        Some(capital) => line(&mut out, &format!("{capital}: {}", p.weather.report)),
        None => line(&mut out, &p.weather.report),
    }

    section(&mut out, "Travel Tips", opts);
    line(&mut out, &p.travel_tip);

    section(&mut out, "Fun Facts", opts);
    line(&mut out, p.fun_facts.as_deref().unwrap_or(NO_FUN_FACTS));

    out
}

/// Basic facts block; also used on its own by the `country` command.
pub fn render_country(c: &CountryRecord, opts: &RenderOptions) -> String {
    let mut out = String::new();
    heading(&mut out, &format!("Name: {}", c.name), opts);
    if let Some(official) = &c.official_name {
        line(&mut out, &format!("Official Name: {official}"));
    }
    if let Some(code) = &c.code {
        line(&mut out, &format!("Code: {code}"));
    }
    if opts.show_images {
        if let Some(flag) = &c.flag_url {
            line(&mut out, &format!("Flag: {flag}"));
        }
    }
    let population = c
        .population
        .map_or_else(|| NOT_AVAILABLE.to_string(), group_digits);
    line(&mut out, &format!("Population: {population}"));
    let area = c
        .area_km2
        .map_or_else(|| NOT_AVAILABLE.to_string(), |a| format!("{} km²", format_area(a)));
    line(&mut out, &format!("Area: {area}"));
    if !c.languages.is_empty() {
        let langs: Vec<&str> = c.languages.iter().map(String::as_str).collect();
        line(&mut out, &format!("Languages: {}", langs.join(", ")));
    }
    if !c.capitals.is_empty() {
        line(&mut out, &format!("Capital: {}", c.capitals.join(", ")));
    }
    out
}

/// Extract (plus image URL when enabled) or the given fallback line.
pub fn render_summary(s: Option<&SummaryResult>, fallback: &str, opts: &RenderOptions) -> String {
    let mut out = String::new();
    summary(&mut out, s, fallback, opts);
    out
}

// -----------------------------------------------------------------------------
// HELPERS
// -----------------------------------------------------------------------------

fn summary(out: &mut String, s: Option<&SummaryResult>, fallback: &str, opts: &RenderOptions) {
    match s.and_then(|s| s.extract.as_deref().map(|text| (text, s.image_url.as_deref()))) {
        Some((text, image)) => {
            if opts.show_images {
                if let Some(url) = image {
                    line(out, &format!("Image: {url}"));
                }
            }
            line(out, text);
        }
        None => line(out, fallback),
    }
}

fn heading(out: &mut String, title: &str, opts: &RenderOptions) {
    match opts.headings {
        HeadingStyle::Plain => {
            line(out, title);
            line(out, &"-".repeat(title.chars().count()));
        }
        HeadingStyle::Markdown => line(out, &format!("## {title}")),
    }
}

fn section(out: &mut String, title: &str, opts: &RenderOptions) {
    out.push('\n');
    heading(out, title, opts);
}

fn line(out: &mut String, text: &str) {
    let _ = writeln!(out, "{text}");
}

/// 67000000 -> "67,000,000"
pub fn group_digits(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn format_area(a: f64) -> String {
    let s = a.to_string();
    match s.split_once('.') {
        Some((int, frac)) => match int.parse::<u64>() {
            Ok(n) => format!("{}.{frac}", group_digits(n)),
            Err(_) => s.clone(),
        },
        None => s.parse::<u64>().map(group_digits).unwrap_or(s),
    }
}
