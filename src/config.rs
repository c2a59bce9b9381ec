use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

use crate::compiler::NameSource;
use crate::constants::{defaults, envvars};
use crate::helpers::{base_path, RetryPolicy};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value '{value}' for {var}: {reason}")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Everything the binding generator needs to know about its environment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub compiler: String,
    pub plugin_dir: Option<PathBuf>,
    pub artifact_path: PathBuf,
    pub name_source: NameSource,
    pub retry: RetryPolicy,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            compiler: defaults::COMPILER.to_string(),
            plugin_dir: None,
            artifact_path: PathBuf::from(defaults::DATA_DIR).join(defaults::ARTIFACT_FILE),
            name_source: NameSource::default(),
            retry: RetryPolicy::default(),
        }
    }
}

impl GeneratorConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut retry = RetryPolicy::default();
        if let Some(attempts) = parse_var::<u32>(envvars::RETRY_ATTEMPTS)? {
            retry.attempts = attempts;
        }
        if let Some(interval_ms) = parse_var::<u64>(envvars::RETRY_INTERVAL_MS)? {
            retry.interval = Duration::from_millis(interval_ms);
        }

        Ok(GeneratorConfig {
            compiler: env::var(envvars::COMPILER).unwrap_or_else(|_| defaults::COMPILER.into()),
            plugin_dir: env::var_os(envvars::PLUGIN_DIR).map(PathBuf::from),
            artifact_path: env::var_os(envvars::ARTIFACT_PATH)
                .map(PathBuf::from)
                .unwrap_or_else(base_path::default_artifact_path),
            name_source: parse_var(envvars::NAME_SOURCE)?.unwrap_or_default(),
            retry,
        })
    }
}

fn parse_var<T>(var: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: ToString,
{
    match env::var(var) {
        Ok(value) => value
            .parse()
            .map(Some)
            .map_err(|e: T::Err| ConfigError::InvalidValue {
                var,
                value,
                reason: e.to_string(),
            }),
        Err(_) => Ok(None),
    }
}
