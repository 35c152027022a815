//! Layered CLI configuration
//!
//! Sources, lowest precedence first: built-in defaults, an optional TOML file
//! (`vitalis.toml` in the working directory, or `--config`), then environment
//! variables such as `VITALIS__LOGGING__LEVEL=debug`.

use anyhow::Context;
use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, File};
use serde::Deserialize;
use std::path::Path;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub logging: LoggingConfig,
    pub observation: ObservationConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Level for the `vitalis` target when `RUST_LOG` is unset
    pub level: String,
    /// Emit JSON log lines instead of human-readable ones
    pub json: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ObservationConfig {
    /// Reject values outside plausible physiological bounds
    pub check_range: bool,
}

impl Config {
    /// Load configuration from `.env`, file and environment
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        load_dotenv(dotenvy::dotenv())?;

        let builder = match path {
            Some(path) => defaults()?.add_source(File::from(path).required(true)),
            None => defaults()?.add_source(File::with_name("vitalis").required(false)),
        };
        let builder = builder.add_source(
            Environment::with_prefix("VITALIS")
                .separator("__")
                .try_parsing(true),
        );

        Ok(builder.build()?.try_deserialize()?)
    }

    pub fn validate(&self) -> Result<(), String> {
        let level = self.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(format!(
                "logging.level must be one of {}, got '{}'",
                LOG_LEVELS.join(", "),
                self.logging.level
            ));
        }
        Ok(())
    }
}

/// A missing `.env` file is fine; an unreadable or malformed one is not.
fn load_dotenv<T>(result: dotenvy::Result<T>) -> anyhow::Result<()> {
    match result {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(e).context("Failed to load .env file"),
    }
}

fn defaults() -> Result<ConfigBuilder<DefaultState>, config::ConfigError> {
    config::Config::builder()
        .set_default("logging.level", "info")?
        .set_default("logging.json", false)?
        .set_default("observation.check_range", false)
}
