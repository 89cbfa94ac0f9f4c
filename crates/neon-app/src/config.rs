//! Command-line options and configuration loading.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use neon_core::error::ConfigError;
use neon_sim::SimConfig;

/// Ticks simulated when `--ticks` is not given (one minute at 60 Hz).
pub const DEFAULT_SESSION_TICKS: u64 = 3600;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid simulation config: {0}")]
    Config(#[from] ConfigError),
    #[error("usage: {0}")]
    Usage(String),
}

/// Options for one headless session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionOptions {
    pub config_path: Option<PathBuf>,
    pub ticks: u64,
    /// Fire the ultimate volley every this many ticks.
    pub ultimate_every: Option<u64>,
    /// Print the final frame after the summary.
    pub print_frame: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            config_path: None,
            ticks: DEFAULT_SESSION_TICKS,
            ultimate_every: None,
            print_frame: false,
        }
    }
}

impl SessionOptions {
    /// Parse `--config <path>`, `--ticks <n>`, `--ultimate-every <n>` and
    /// `--frame`. The program name must already be stripped.
    pub fn from_args<I>(args: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut options = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => {
                    let path = value_for(&arg, args.next())?;
                    options.config_path = Some(PathBuf::from(path));
                }
                "--ticks" => {
                    options.ticks = parse_count(&arg, args.next())?;
                }
                "--ultimate-every" => {
                    let every = parse_count(&arg, args.next())?;
                    if every == 0 {
                        return Err(AppError::Usage(format!("{arg} must be positive")));
                    }
                    options.ultimate_every = Some(every);
                }
                "--frame" => options.print_frame = true,
                other => return Err(AppError::Usage(format!("unknown argument `{other}`"))),
            }
        }

        Ok(options)
    }
}

fn value_for(flag: &str, value: Option<String>) -> Result<String, AppError> {
    value.ok_or_else(|| AppError::Usage(format!("{flag} needs a value")))
}

fn parse_count(flag: &str, value: Option<String>) -> Result<u64, AppError> {
    let value = value_for(flag, value)?;
    value
        .parse()
        .map_err(|_| AppError::Usage(format!("{flag} expects a whole number, got `{value}`")))
}

/// Load and validate a `SimConfig` from JSON. Missing fields take defaults.
pub fn load_config(path: &Path) -> Result<SimConfig, AppError> {
    let text = fs::read_to_string(path).map_err(|source| AppError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&text)
}

pub fn parse_config(text: &str) -> Result<SimConfig, AppError> {
    let config: SimConfig = serde_json::from_str(text)?;
    config.validate()?;
    Ok(config)
}
