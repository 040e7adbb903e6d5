//! Command-line front end: is the Galactic Center visible tonight?

use anyhow::Context;
use chrono::{Local, NaiveDate};
use clap::{ArgGroup, Parser};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gcvis::render::{render, Format};
use gcvis::weather::{OpenMeteo, WeatherConfig};
use gcvis::{find_visibility, Ephemeris, Site, Target, VisibilityConfig};

fn parse_latitude(value: &str) -> Result<f64, String> {
    parse_in_range(value, 90.0, "latitude")
}

fn parse_longitude(value: &str) -> Result<f64, String> {
    parse_in_range(value, 180.0, "longitude")
}

fn parse_in_range(value: &str, limit: f64, what: &str) -> Result<f64, String> {
    match value.parse::<f64>() {
        Ok(v) if (-limit..=limit).contains(&v) => Ok(v),
        _ => Err(format!(
            "Invalid {what}. Must be float between -{limit} and {limit}"
        )),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "gcvis",
    version,
    about = "Determine whether the galactic center is visible on a given day at given \
             coordinates. Takes into account sun, moon, and weather",
    after_help = "Examples:\n\n  \
        gcvis --latitude 50.11 --longitude 8.68\n  \
        gcvis -l 50.111234 -L 9.234 -H 200 -d 2024-11-14 --json\n  \
        gcvis -l 50.111234 -L 9.234 --ics > file.ics\n  \
        gcvis -l 50.111234 -L 9.234 --cloudiness 100 --moon 100 --precipitation 100",
    group(ArgGroup::new("format").args(["json", "ics"]))
)]
struct Cli {
    /// Geographic latitude in degrees north of the equator, -90 to +90
    #[arg(short = 'l', long, value_parser = parse_latitude, allow_negative_numbers = true)]
    latitude: f64,

    /// Geographic longitude in degrees east of the prime meridian, -180 to +180
    #[arg(short = 'L', long, value_parser = parse_longitude, allow_negative_numbers = true)]
    longitude: f64,

    /// Observer's elevation above mean sea level in metres
    #[arg(short = 'H', long, default_value_t = 0.0, allow_negative_numbers = true)]
    height: f64,

    /// Date to check (YYYY-MM-DD), defaults to today
    #[arg(short, long)]
    date: Option<NaiveDate>,

    /// Maximum cloudiness in percent to accept as visible
    #[arg(short, long, default_value_t = 30.0)]
    cloudiness: f64,

    /// Maximum precipitation probability in percent to accept as visible
    #[arg(short, long, default_value_t = 30.0)]
    precipitation: f64,

    /// Maximum moon illumination in percent to accept
    #[arg(short, long, default_value_t = 50.0)]
    moon: f64,

    /// Output JSON
    #[arg(long)]
    json: bool,

    /// Output ICS, can be piped into a file
    #[arg(long)]
    ics: bool,
}

impl Cli {
    fn format(&self) -> Format {
        match (self.json, self.ics) {
            (true, _) => Format::Json,
            (_, true) => Format::Ics,
            _ => Format::Text,
        }
    }

    fn config(&self) -> VisibilityConfig {
        VisibilityConfig {
            cloud_threshold: self.cloudiness,
            precipitation_threshold: self.precipitation,
            moon_threshold: self.moon,
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<String> {
    let site = Site::new(cli.latitude, cli.longitude, cli.height)?;
    let date = cli.date.unwrap_or_else(|| Local::now().date_naive());

    let astro = Ephemeris::new(site, Target::galactic_center());
    let weather =
        OpenMeteo::new(&WeatherConfig::default()).context("failed to set up weather client")?;

    tracing::info!(
        %date,
        latitude = cli.latitude,
        longitude = cli.longitude,
        "computing visibility"
    );
    let report = find_visibility(&astro, &weather, &site, date, &Local, &cli.config()).await?;

    Ok(render(&report, cli.format(), &Local)?)
}

#[tokio::main]
async fn main() {
    // Logs go to stderr so stdout stays clean for --json and --ics.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gcvis=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(output) => println!("{output}"),
        Err(err) => {
            eprintln!("{err:#}");
            std::process::exit(1);
        }
    }
}
