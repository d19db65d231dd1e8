//! # navdrift
//!
//! Runs the IMU position error models on a TOML scenario and writes the
//! resulting series to stdout for plotting. Logs go to stderr.
//!
//! # Usage
//!
//! ```bash
//! # Reference scenario (0.3 deg/hr BI, 0.03 deg/rt(hr) ARW, 30 mph, 50 min)
//! navdrift
//!
//! # Scenario file, CSV output
//! navdrift --config navdrift.toml --format csv
//!
//! # Scale-factor turn error scan
//! navdrift --model scale-factor
//! ```

#![deny(warnings)]

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use navdrift_common::consts::DEFAULT_CONFIG_FILE;
use navdrift_common::prelude::ConfigLoader;
use navdrift_model::config::ScenarioConfig;
use navdrift_model::report::{self, OutputFormat};
use navdrift_model::{scale_factor_sweep, sweep};
use tracing::{Level, error, info};
use tracing_subscriber::EnvFilter;

/// Which model to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Model {
    /// Cross-track error from bias instability and angle random walk.
    Accumulator,
    /// Turn end-point error from gyro scale-factor error.
    ScaleFactor,
}

/// navdrift - IMU position error simulator
#[derive(Parser, Debug)]
#[command(name = "navdrift")]
#[command(version)]
#[command(about = "Simulate IMU cross-track and scale-factor position error")]
#[command(long_about = None)]
struct Args {
    /// Scenario file. Falls back to ./navdrift.toml, then to the built-in
    /// reference scenario.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Model to run.
    #[arg(short, long, value_enum, default_value = "accumulator")]
    model: Model,

    /// Output encoding.
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long)]
    json_logs: bool,
}

fn main() {
    let args = Args::parse();

    let default_path = Path::new(DEFAULT_CONFIG_FILE);
    let scenario = match &args.config {
        Some(path) => ScenarioConfig::load(path),
        None if default_path.exists() => ScenarioConfig::load(default_path),
        None => Ok(ScenarioConfig::default()),
    };
    let scenario = match scenario {
        Ok(scenario) => scenario,
        Err(e) => {
            setup_tracing(&args, Level::INFO);
            error!("Failed to load scenario: {}", e);
            std::process::exit(1);
        }
    };

    setup_tracing(&args, scenario.shared.log_level.into());

    if let Err(e) = run(&args, &scenario) {
        error!("navdrift failed: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args, scenario: &ScenarioConfig) -> Result<(), Box<dyn std::error::Error>> {
    info!(
        "navdrift v{} scenario '{}'",
        env!("CARGO_PKG_VERSION"),
        scenario.shared.service_name
    );
    scenario.validate()?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match args.model {
        Model::Accumulator => {
            let sim = scenario.accumulator.to_simulation_config()?;
            let results = sweep(&sim)?;
            info!("Computed {} series", results.len());
            let labelled = report::label_results(&sim, &results);
            report::write_series(&mut out, &labelled, args.format)?;
        }
        Model::ScaleFactor => {
            let turn = scenario.scale_factor.turn_params();
            let errors = scenario.scale_factor.error_values()?;
            let points = scale_factor_sweep(&turn, &errors)?;
            info!("Computed {} scale-factor points", points.len());
            report::write_scale_factor(&mut out, &points, args.format)?;
        }
    }
    out.flush()?;

    Ok(())
}

/// Setup tracing subscriber on stderr. `-v` forces DEBUG, otherwise the
/// scenario's log level applies. `RUST_LOG` directives are honoured.
fn setup_tracing(args: &Args, scenario_level: Level) {
    let level = if args.verbose {
        Level::DEBUG
    } else {
        scenario_level
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    if args.json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}
