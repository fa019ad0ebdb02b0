//! Runtime configuration read from the environment (and `.env`, if present).

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{bail, Context};
use tracing::level_filters::LevelFilter;

const LOGGER_STDOUT: &str = "LOGGER_STDOUT";
const LOGGER_FILE_LOCATION: &str = "LOGGER_FILE_LOCATION";
const LOGGER_FILE_MAX_AGE: &str = "LOGGER_FILE_MAX_AGE";
const LOGGER_LEVEL: &str = "LOGGER_LEVEL";

const SECONDS_PER_DAY: u64 = 24 * 60 * 60;
const DEFAULT_FILE_MAX_AGE_DAYS: u64 = 7;

#[allow(missing_docs)]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    pub logger: LoggerConfig,
}

/// Where and what to log.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoggerConfig {
    /// Write logs to stderr (stdout is taken by the board).
    pub stdout: bool,
    /// Directory for the log file. No file is written if unset.
    pub file_location: Option<PathBuf>,
    /// Log files older than this are removed on startup.
    pub file_max_age: Duration,
    #[allow(missing_docs)]
    pub level: LevelFilter,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            stdout: false,
            file_location: None,
            file_max_age: Duration::from_secs(DEFAULT_FILE_MAX_AGE_DAYS * SECONDS_PER_DAY),
            level: LevelFilter::INFO,
        }
    }
}

impl Config {
    /// Loads `.env` from the working directory (if it exists) and reads the
    /// configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Malformed `.env` file or invalid variable values.
    pub fn from_env() -> anyhow::Result<Self> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(e).context("failed to load .env");
            }
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, which returns the value of a
    /// variable or `None` if it is not set. Unset variables take the defaults.
    ///
    /// # Errors
    ///
    /// A variable is set to a value that can not be parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut logger = LoggerConfig::default();
        if let Some(value) = lookup(LOGGER_STDOUT) {
            logger.stdout = parse_bool(&value).context(LOGGER_STDOUT)?;
        }
        logger.file_location = lookup(LOGGER_FILE_LOCATION)
            .filter(|location| !location.is_empty())
            .map(PathBuf::from);
        if let Some(value) = lookup(LOGGER_FILE_MAX_AGE) {
            let days: u64 = value
                .trim()
                .parse()
                .with_context(|| format!("{LOGGER_FILE_MAX_AGE}: expected days, got '{value}'"))?;
            logger.file_max_age = Duration::from_secs(days.saturating_mul(SECONDS_PER_DAY));
        }
        if let Some(value) = lookup(LOGGER_LEVEL) {
            logger.level = parse_level(&value)
                .with_context(|| format!("{LOGGER_LEVEL}: unknown level '{value}'"))?;
        }
        Ok(Self { logger })
    }
}

/// Accepts a level name (`error`, `warn`, `info`, `debug`, `trace`, `off`) or
/// a numeric severity threshold: `-4` and below is debug, up to `0` is info, up
/// to `4` is warn, up to `8` is error and anything higher turns logging off.
fn parse_level(value: &str) -> anyhow::Result<LevelFilter> {
    let value = value.trim();
    if let Ok(threshold) = value.parse::<i8>() {
        return Ok(match threshold {
            ..=-4 => LevelFilter::DEBUG,
            -3..=0 => LevelFilter::INFO,
            1..=4 => LevelFilter::WARN,
            5..=8 => LevelFilter::ERROR,
            _ => LevelFilter::OFF,
        });
    }
    Ok(LevelFilter::from_str(value)?)
}

/// Accepts `1`, `t`, `true` and their negations in lower, upper and title
/// case.
fn parse_bool(value: &str) -> anyhow::Result<bool> {
    match value.trim() {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Ok(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Ok(false),
        _ => bail!("expected a boolean, got '{value}'"),
    }
}
