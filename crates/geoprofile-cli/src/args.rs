use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for geoprofile-cli
#[derive(Debug, Parser)]
#[command(
    name = "geoprofile",
    version,
    about = "Country details, weather, travel tips & fun facts from public web services"
)]
pub struct CliArgs {
    /// JSON config file (partial files are fine; missing keys use defaults)
    #[arg(short = 'c', long = "config", env = "GEOPROFILE_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Base URL of the country directory (default: https://restcountries.com/v3.1)
    #[arg(long, env = "GEOPROFILE_COUNTRIES_URL", global = true)]
    pub countries_url: Option<String>,

    /// Base URL of the encyclopedia summary service (default: https://en.wikipedia.org/api/rest_v1)
    #[arg(long, env = "GEOPROFILE_SUMMARY_URL", global = true)]
    pub summary_url: Option<String>,

    /// Base URL of the weather service (default: https://wttr.in)
    #[arg(long, env = "GEOPROFILE_WEATHER_URL", global = true)]
    pub weather_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(short = 't', long = "timeout", env = "GEOPROFILE_TIMEOUT", global = true)]
    pub timeout: Option<u64>,

    /// More log output on stderr (-v, -vv). RUST_LOG takes precedence.
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Full profile for a country name (e.g. "South Korea")
    Profile {
        /// Country name; several words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,

        /// Print the profile as JSON instead of text
        #[arg(long)]
        json: bool,

        /// Markdown headings instead of underlined ones
        #[arg(long, conflicts_with = "json")]
        markdown: bool,

        /// Leave out flag and image URLs
        #[arg(long)]
        no_images: bool,
    },

    /// Lookup a single country by ISO code (e.g. DE, FRA)
    Country {
        /// ISO 3166-1 alpha-2 or alpha-3 code
        code: String,
    },

    /// Fetch one encyclopedia summary by page title
    Summary {
        /// Page title (e.g. "Culture of Japan")
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },

    /// Current weather for a city
    Weather {
        /// City name (e.g. "Buenos Aires")
        #[arg(required = true, num_args = 1..)]
        city: Vec<String>,
    },
}
