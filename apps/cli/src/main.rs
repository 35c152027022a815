//! Vitalis CLI
//!
//! Builds a FHIR vital-sign Observation from a patient id and a measured
//! value and writes the canonical JSON to stdout or a file. Submission to
//! an exchange endpoint is left to the caller.

mod config;
mod logging;

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use vitalis_models::{ObservationBuilder, ObservationKind, PhysiologicalRange};

use crate::config::Config;

#[derive(Parser, Debug)]
#[command(name = "vitalis")]
#[command(version, about = "Build FHIR vital-sign Observation resources")]
struct Cli {
    /// Configuration file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build a body-temperature observation in degrees Celsius
    Temperature {
        /// Patient logical id
        #[arg(long)]
        patient: String,
        /// Temperature in degrees Celsius
        #[arg(long, allow_negative_numbers = true)]
        value: f64,
        /// Write to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
        /// Reject values outside plausible physiological bounds
        #[arg(long)]
        check_range: bool,
    },
    /// Build an observation of any supported kind
    Observe {
        /// Observation kind (see `vitalis kinds`)
        #[arg(long)]
        kind: ObservationKind,
        /// Patient logical id
        #[arg(long)]
        patient: String,
        /// Measured value, in the kind's unit
        #[arg(long, allow_negative_numbers = true)]
        value: f64,
        /// Write to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
        /// Reject values outside plausible physiological bounds
        #[arg(long)]
        check_range: bool,
    },
    /// List supported observation kinds
    Kinds,
}

impl Cli {
    fn apply_overrides(&self, config: &mut Config) {
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        if self.log_json {
            config.logging.json = true;
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config =
        Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    cli.apply_overrides(&mut config);
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {e}"))?;

    logging::init_logging(&config.logging).context("Failed to initialize logging")?;

    run(cli.command, &config)
}

fn run(command: Commands, config: &Config) -> anyhow::Result<()> {
    match command {
        Commands::Temperature {
            patient,
            value,
            output,
            check_range,
        } => emit(
            ObservationKind::BodyTemperature,
            &patient,
            value,
            output,
            check_range || config.observation.check_range,
        ),
        Commands::Observe {
            kind,
            patient,
            value,
            output,
            check_range,
        } => emit(
            kind,
            &patient,
            value,
            output,
            check_range || config.observation.check_range,
        ),
        Commands::Kinds => {
            print!("{}", kinds_table());
            Ok(())
        }
    }
}

fn emit(
    kind: ObservationKind,
    patient: &str,
    value: f64,
    output: Option<PathBuf>,
    check_range: bool,
) -> anyhow::Result<()> {
    tracing::info!(%kind, patient_id = patient, check_range, "Building observation");

    let json = render(kind, patient, value, check_range)
        .with_context(|| format!("Failed to build {kind} observation for patient '{patient}'"))?;

    match output {
        Some(path) => {
            fs::write(&path, format!("{json}\n"))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "Observation written");
        }
        None => println!("{json}"),
    }

    Ok(())
}

fn render(
    kind: ObservationKind,
    patient: &str,
    value: f64,
    check_range: bool,
) -> vitalis_models::Result<String> {
    let mut builder = ObservationBuilder::new(kind)
        .subject_patient(patient)
        .value(value);
    if check_range {
        builder = builder.with_check(PhysiologicalRange::default());
    }
    builder.build()?.to_json_pretty()
}

fn kinds_table() -> String {
    let mut out = String::new();
    for kind in ObservationKind::ALL {
        let profile = kind.profile();
        out.push_str(&format!(
            "{:<18} {:<8} {:<36} {}\n",
            kind.as_str(),
            profile.code.code,
            profile.code.display,
            profile.unit.code
        ));
    }
    out
}
