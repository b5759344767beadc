//! Basic usage example for geoprofile-rs
//!
//! This example demonstrates how to:
//! - Build an explorer against the live services
//! - Run the individual resolvers on their own
//! - Build a full country profile and inspect the degraded parts
//!
//! Run with `cargo run --example basic_usage -- Japan`

use geoprofile_rs::prelude::*;

fn main() -> anyhow::Result<()> {
    println!("=== geoprofile-rs Basic Usage Example ===\n");

    let name = std::env::args().nth(1).unwrap_or_else(|| "Japan".to_string());
    let explorer = Explorer::new(Config::default())?;

    // Example 1: Single lookups
    println!("--- Example 1: Resolve a country by ISO code ---");
    match explorer.countries().resolve_by_code("CHE") {
        Some(c) => println!("CHE -> {} ({:?})", c.name, c.capital()),
        None => println!("CHE did not resolve"),
    }
    println!();

    println!("--- Example 2: Weather for a city ---");
    println!("Reykjavik: {}", explorer.weather().resolve("Reykjavik"));
    println!();

    println!("--- Example 3: Topic fallback chain ---");
    match explorer.topics().resolve_subject(&name, Subject::Culture) {
        Some(s) => println!("Culture of {name}: {} chars", s.extract_len()),
        None => println!("No cultural data found for {name}"),
    }
    println!();

    // Example 4: Full profile
    println!("--- Example 4: Full profile for {name} ---");
    match explorer.explore(&name) {
        Ok(profile) => {
            println!("Name: {}", profile.country.name);
            println!("Neighbors: {}", profile.neighbors.join(", "));
            println!("Weather: {}", profile.weather.report);
            for clock in &profile.clocks {
                let time = clock.local_time.as_deref().unwrap_or(TIMEZONE_UNAVAILABLE);
                println!("{}: {}", clock.zone, time);
            }
            println!(
                "Fun facts: {}",
                profile.fun_facts.as_deref().unwrap_or("No fun facts available.")
            );
        }
        Err(ProfileError::CountryNotFound(q)) => println!("Country not found: {q}"),
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
