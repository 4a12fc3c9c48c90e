// ABOUTME: Skycast CLI - classify atmospheric observations into weather categories
// ABOUTME: Reads observations from flags or JSON, prints predictions, batches, and rule tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Classify from flags
//! skycast classify --temperature 72 --humidity 65 --pressure 1012 --wind-speed 8
//!
//! # Classify a JSON payload from stdin, with the rule-by-rule explanation
//! echo '{"temperature":30,"humidity":40,"pressure":1020,"windSpeed":5}' | skycast classify --input - --explain
//!
//! # Classify a JSON array of observations
//! skycast batch --input observations.json --format text
//!
//! # Show the active rule set
//! skycast rules --rules custom-rules.json
//! ```

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use chrono::Utc;
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::{Map, Value};
use skycast::config::{LogLevel, OutputFormat, SkycastConfig};
use skycast::errors::{AppError, AppResult};
use skycast::formatters::{
    render_batch, render_error, render_prediction, render_rules, BatchEntry, PredictionResponse,
};
use skycast::intelligence::WeatherClassifier;
use skycast::logging::LoggingConfig;
use skycast::models::{Observation, ObservationInput};
use skycast::observation::{merge_observation, observation_from_value};
use tracing::{debug, info};

#[derive(Parser)]
#[command(
    name = "skycast",
    version,
    about = "Classify atmospheric observations into weather categories",
    long_about = "Scores an observation against weighted rules for Sunny, Rainy, Cloudy, and Partly Cloudy weather and reports the winner with a confidence in [0, 1]."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output format (overrides SKYCAST_OUTPUT_FORMAT)
    #[arg(long, short = 'f', global = true, value_enum)]
    format: Option<FormatArg>,

    /// JSON rules file replacing the built-in rule set (overrides SKYCAST_RULES_FILE)
    #[arg(long, global = true)]
    rules: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Json,
    Text,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => Self::Json,
            FormatArg::Text => Self::Text,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Classify a single observation
    Classify {
        /// JSON observation file, or `-` for stdin
        #[arg(long, short = 'i')]
        input: Option<PathBuf>,

        /// Air temperature
        #[arg(long, allow_negative_numbers = true)]
        temperature: Option<f64>,

        /// Relative humidity percentage
        #[arg(long, allow_negative_numbers = true)]
        humidity: Option<f64>,

        /// Barometric pressure in hPa
        #[arg(long, allow_negative_numbers = true)]
        pressure: Option<f64>,

        /// Wind speed
        #[arg(long, allow_negative_numbers = true)]
        wind_speed: Option<f64>,

        /// Include per-category scores and per-rule outcomes
        #[arg(long, short = 'e')]
        explain: bool,
    },

    /// Classify a JSON array of observations
    Batch {
        /// JSON file holding an array of observations, or `-` for stdin
        #[arg(long, short = 'i')]
        input: PathBuf,
    },

    /// Print the active rule set
    Rules,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level(LogLevel::Debug);
    }
    if let Err(e) = logging.init() {
        eprintln!("{e}");
    }

    let config = SkycastConfig::from_env().with_overrides(cli.format.map(Into::into), cli.rules);
    let format = config.output_format;

    match run(cli.command, &config) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            info!(code = ?error.code, "Command failed: {}", error.message);
            println!("{}", render_error(error, format));
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command, config: &SkycastConfig) -> AppResult<String> {
    let classifier = WeatherClassifier::new(config.load_rules()?)?;

    match command {
        Command::Classify {
            input,
            temperature,
            humidity,
            pressure,
            wind_speed,
            explain,
        } => {
            let payload = match input {
                Some(path) => read_object(&path)?,
                None => Map::new(),
            };
            let flags = ObservationInput {
                temperature,
                humidity,
                pressure,
                wind_speed,
            };

            let observation = merge_observation(&payload, &flags)?;
            classify(&classifier, &observation, explain, config.output_format)
        }
        Command::Batch { input } => batch(&classifier, &input, config.output_format),
        Command::Rules => render_rules(classifier.config(), config.output_format),
    }
}

fn classify(
    classifier: &WeatherClassifier,
    observation: &Observation,
    explain: bool,
    format: OutputFormat,
) -> AppResult<String> {
    debug!(?observation, explain, "Classifying observation");
    let response = if explain {
        PredictionResponse::from_report(classifier.explain(observation)?, Utc::now())
    } else {
        PredictionResponse::from_result(classifier.classify(observation)?, Utc::now())
    };
    render_prediction(&response, format)
}

fn batch(classifier: &WeatherClassifier, input: &Path, format: OutputFormat) -> AppResult<String> {
    let items = match serde_json::from_str::<Value>(&read_source(input)?) {
        Ok(Value::Array(items)) => items,
        Ok(_) => return Err(AppError::invalid_format("Batch payload must be a JSON array")),
        Err(e) => return Err(AppError::invalid_format(format!("Invalid batch JSON: {e}"))),
    };

    let parsed: Vec<AppResult<Observation>> = items.iter().map(observation_from_value).collect();
    let valid: Vec<Observation> = parsed
        .iter()
        .filter_map(|p| p.as_ref().ok().copied())
        .collect();
    let mut classified = classifier.classify_batch(&valid).into_iter();

    let entries: Vec<BatchEntry> = parsed
        .into_iter()
        .enumerate()
        .map(|(index, parsed)| {
            let outcome = parsed.and_then(|_| match classified.next() {
                Some(result) => result.map_err(AppError::from),
                None => Err(AppError::internal("Batch result count mismatch")),
            });
            BatchEntry::new(index, outcome)
        })
        .collect();

    info!(total = entries.len(), valid = valid.len(), "Batch classified");
    render_batch(&entries, format)
}

fn read_object(path: &Path) -> AppResult<Map<String, Value>> {
    // Kept as a raw object so flags can fill in or override individual readings
    match serde_json::from_str::<Value>(&read_source(path)?) {
        Ok(Value::Object(object)) => Ok(object),
        Ok(_) => Err(AppError::invalid_format("Observation payload must be a JSON object")),
        Err(e) => Err(AppError::invalid_format(format!("Invalid observation JSON: {e}"))),
    }
}

fn read_source(path: &Path) -> AppResult<String> {
    if path == Path::new("-") {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Ok(fs::read_to_string(path)?)
    }
}
