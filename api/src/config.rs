use std::env;
use std::time::Duration;

use anyhow::{bail, Context};
use tracing_subscriber::EnvFilter;

pub const DEFAULT_LOG_LEVEL: &str = "info,fleetlease_api=debug";

#[derive(Clone, Debug)]
pub struct Config {
    /// PostgreSQL URL; in-memory repositories are used when unset
    pub database_url: Option<String>,
    pub port: u16,
    /// Default tracing filter when RUST_LOG is not set
    pub log_level: String,
    /// Base URL of the license validation service
    pub license_validator_url: Option<String>,
    pub license_validator_timeout: Duration,
    /// Create missing tables on startup
    pub run_migrations: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let port = match env::var("PORT") {
            Ok(value) => value
                .parse()
                .with_context(|| format!("PORT must be a port number, got {:?}", value))?,
            Err(_) => 8080,
        };
        let timeout_secs = match env::var("LICENSE_VALIDATOR_TIMEOUT_SECS") {
            Ok(value) => value.parse().with_context(|| {
                format!(
                    "LICENSE_VALIDATOR_TIMEOUT_SECS must be a whole number, got {:?}",
                    value
                )
            })?,
            Err(_) => 5,
        };

        Ok(Self {
            database_url: non_empty_var("DATABASE_URL"),
            port,
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string()),
            license_validator_url: non_empty_var("LICENSE_VALIDATOR_URL"),
            license_validator_timeout: Duration::from_secs(timeout_secs),
            run_migrations: env::var("RUN_MIGRATIONS")
                .map(|v| parse_flag(&v))
                .unwrap_or(true),
        })
    }

    /// Reject settings the server cannot start with
    pub fn validate(&self) -> anyhow::Result<()> {
        EnvFilter::try_new(&self.log_level)
            .with_context(|| format!("LOG_LEVEL is not a valid filter: {:?}", self.log_level))?;
        if self.license_validator_timeout.is_zero() {
            bail!("LICENSE_VALIDATOR_TIMEOUT_SECS must be greater than zero");
        }
        Ok(())
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}
