//! geoprofile — Command-line interface for geoprofile-core
//!
//! This binary builds a country profile from three public services and
//! prints it to your terminal. Each enrichment (neighbors, culture,
//! landmarks, weather, fun facts, clocks) degrades on its own; only an
//! unknown country fails the command.
//!
//! Usage examples
//! --------------
//!
//! - Full profile
//!   $ geoprofile profile france
//!   $ geoprofile profile south korea --markdown
//!   $ geoprofile profile japan --json
//!
//! - Single lookups
//!   $ geoprofile country DEU
//!   $ geoprofile summary Culture of Japan
//!   $ geoprofile weather Buenos Aires
//!
//! Configuration
//! -------------
//!
//! Base URLs and the timeout come from (in increasing priority) the
//! defaults, a JSON file given with `--config`, and the
//! `--countries-url`/`--summary-url`/`--weather-url`/`--timeout` flags or
//! their `GEOPROFILE_*` environment variables. Logs go to stderr; raise
//! them with `-v` or `RUST_LOG`.
mod args;
mod render;

use crate::args::{CliArgs, Commands};
use crate::render::{render_country, render_profile, render_summary, HeadingStyle, RenderOptions};
use anyhow::Context;
use clap::Parser;
use geoprofile_core::{Config, Explorer, ProfileError};
use tracing_subscriber::EnvFilter;

const NOT_FOUND_MESSAGE: &str = "Country not found. Please try another name.";

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    let config = load_config(&args)?;
    let explorer = Explorer::new(config).context("invalid configuration")?;

    match args.command {
        Commands::Profile {
            name,
            json,
            markdown,
            no_images,
        } => {
            let name = name.join(" ");
            match explorer.explore(&name) {
                Ok(profile) if json => {
                    println!("{}", serde_json::to_string_pretty(&profile)?);
                }
                Ok(profile) => {
                    let opts = RenderOptions {
                        headings: if markdown {
                            HeadingStyle::Markdown
                        } else {
                            HeadingStyle::Plain
                        },
                        show_images: !no_images,
                    };
                    print!("{}", render_profile(&profile, &opts));
                }
                Err(ProfileError::CountryNotFound(_)) | Err(ProfileError::EmptyQuery) => {
                    eprintln!("{NOT_FOUND_MESSAGE}");
                    std::process::exit(1);
                }
                Err(e) => return Err(e.into()),
            }
        }

        Commands::Country { code } => match explorer.countries().resolve_by_code(&code) {
            Some(c) => print!("{}", render_country(&c, &RenderOptions::default())),
            None => {
                eprintln!("No country found for: {code}");
                std::process::exit(1);
            }
        },

        Commands::Summary { title } => {
            let title = title.join(" ");
            let found = explorer.summaries().resolve(&title);
            let fallback = format!("No summary found for: {title}");
            print!(
                "{}",
                render_summary(found.as_ref(), &fallback, &RenderOptions::default())
            );
        }

        Commands::Weather { city } => {
            let city = city.join(" ");
            println!("{city}: {}", explorer.weather().resolve(&city));
        }
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "warn,geoprofile_core=info",
        _ => "info,geoprofile_core=debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Defaults, then the JSON file, then flags / environment.
fn load_config(args: &CliArgs) -> anyhow::Result<Config> {
    let mut config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            Config::from_json_str(&text)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => Config::default(),
    };
    if let Some(url) = &args.countries_url {
        config.countries_url = url.clone();
    }
    if let Some(url) = &args.summary_url {
        config.summary_url = url.clone();
    }
    if let Some(url) = &args.weather_url {
        config.weather_url = url.clone();
    }
    if let Some(secs) = args.timeout {
        config.timeout_secs = secs;
    }
    Ok(config)
}
