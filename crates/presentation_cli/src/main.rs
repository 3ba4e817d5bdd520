//! WeatherWise CLI
//!
//! Terminal front end for the prediction service: single predictions,
//! simulated scenario batches, and the condition code table.

#![allow(clippy::print_stdout, clippy::print_stderr)]

mod notify;
mod render;

use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use application::{PredictionReport, PredictionView, SimulationView};
use domain::{BasicFeatures, Season, SimulationRequest, StationFeatures, WeatherFeatures};
use integration_predictor::{PredictorClient, PredictorConfig};
use notify::TermNotifier;

/// WeatherWise CLI
#[derive(Parser)]
#[command(name = "weatherwise")]
#[command(author, version, about = "WeatherWise prediction CLI", long_about = None)]
struct Cli {
    /// Prediction service URL
    #[arg(
        short,
        long,
        env = "WEATHERWISE_URL",
        default_value = "http://localhost:8000",
        global = true
    )]
    url: String,

    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a single feature vector
    Predict {
        /// Temperature in Celsius
        #[arg(long, default_value_t = 25.0)]
        temperature: f64,

        /// Relative humidity percentage (0-100)
        #[arg(long, default_value_t = 65.0)]
        humidity: f64,

        /// Wind speed in km/h
        #[arg(long, default_value_t = 10.0)]
        wind_speed: f64,

        /// Precipitation in mm
        #[arg(long, default_value_t = 0.0)]
        precipitation: f64,

        /// Surface pressure in hPa
        #[arg(long, default_value_t = 1013.0)]
        pressure: f64,

        /// Cloud cover percentage (0-100)
        #[arg(long, default_value_t = 30.0)]
        cloud_cover: f64,

        /// Send the station-style vector instead of the basic one
        #[arg(long)]
        station: bool,

        /// Dew point in Celsius (station vector only)
        #[arg(long, default_value_t = 12.0)]
        dew_point: f64,

        /// Snowfall in mm (station vector only)
        #[arg(long, default_value_t = 0.0)]
        snow: f64,

        /// Wind direction in degrees, 0-360 (station vector only)
        #[arg(long, default_value_t = 180.0)]
        wind_direction: f64,

        /// Wind gust speed in km/h (station vector only)
        #[arg(long, default_value_t = 15.0)]
        wind_gust: f64,
    },

    /// Generate and classify a batch of simulated scenarios
    Simulate {
        /// Number of scenarios to generate (1-50)
        #[arg(short = 'n', long, default_value_t = 5)]
        samples: u8,

        /// Season to sample from
        #[arg(short, long, default_value = "summer")]
        season: Season,

        /// Show one scenario in detail instead of the table
        #[arg(short, long)]
        detail: Option<usize>,
    },

    /// Print the condition code table
    Conditions,
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = log_filter_from_verbosity(cli.verbose);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = PredictorConfig {
        base_url: cli.url,
        ..PredictorConfig::default()
    };
    let client = Arc::new(PredictorClient::new(config)?);
    let notifier = Arc::new(TermNotifier);

    match cli.command {
        Commands::Predict {
            temperature,
            humidity,
            wind_speed,
            precipitation,
            pressure,
            cloud_cover,
            station,
            dew_point,
            snow,
            wind_direction,
            wind_gust,
        } => {
            let features = if station {
                WeatherFeatures::from(StationFeatures::now(
                    temperature,
                    dew_point,
                    humidity,
                    precipitation,
                    snow,
                    wind_direction,
                    wind_speed,
                    wind_gust,
                    pressure,
                ))
            } else {
                WeatherFeatures::from(BasicFeatures {
                    temperature,
                    humidity,
                    wind_speed,
                    precipitation,
                    pressure,
                    cloud_cover,
                })
            };

            let mut view = PredictionView::new(client, notifier);
            view.submit(features).await;

            match view.outcome() {
                Some(outcome) => {
                    let report = PredictionReport::from_outcome(outcome);
                    print!("{}", render::render_report(&report));
                },
                None => std::process::exit(1),
            }
        },

        Commands::Simulate {
            samples,
            season,
            detail,
        } => {
            let mut view = SimulationView::new(client, notifier);
            view.run(SimulationRequest { samples, season }).await;

            if view.batch().is_none() {
                std::process::exit(1);
            }

            if let Some(index) = detail {
                view.select(index);
                match view.selected() {
                    Some(sample) => print!("{}", render::render_sample(index, sample)),
                    None => {
                        eprintln!("❌ No scenario at index {index}");
                        std::process::exit(1);
                    },
                }
            } else if let Some(batch) = view.batch() {
                print!("{}", render::render_batch(batch));
            }
        },

        Commands::Conditions => {
            print!("{}", render::render_conditions());
        },
    }

    Ok(())
}
