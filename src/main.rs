use clap::Parser;
use elo_change::{args::Args, EloError, EloModel, ScoringConstants};
use std::{fs, path::Path, process::ExitCode};
use thiserror::Error;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Elo(#[from] EloError),

    #[error("Failed to read constants file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error)
}

fn main() -> ExitCode {
    dotenv::dotenv().ok();
    let args = Args::parse();

    let filter = match &args.log_level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    match run(&args) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<String, CliError> {
    let constants = match &args.constants {
        Some(path) => load_constants(path)?,
        None => ScoringConstants::default()
    };

    let model = EloModel::new(constants, args.validation_mode());
    let report = model.elo_change_scores(&args.match_context(), &args.performance())?;

    let output = match args.outcome {
        Some(outcome) => to_json(&report[outcome], args.pretty)?,
        None => to_json(&report, args.pretty)?
    };

    Ok(output)
}

fn load_constants(path: &Path) -> Result<ScoringConstants, CliError> {
    info!("Loading scoring constants from {}", path.display());
    let contents = fs::read_to_string(path)?;

    Ok(serde_json::from_str(&contents)?)
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<String, serde_json::Error> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}
