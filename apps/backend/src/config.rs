//! Service configuration read from the environment.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{var} has invalid value {value:?}")]
    Invalid { var: &'static str, value: String },
    #[error("{var} must be within {range}, got {value}")]
    OutOfRange {
        var: &'static str,
        range: &'static str,
        value: String,
    },
}

/// Runtime settings.
///
/// Env vars:
/// - HOST: bind host (default 0.0.0.0)
/// - PORT: bind port (default 3000)
/// - QUESTIONS_PATH: corpus file (default data/questions.json)
/// - DEDUP_THRESHOLD: Jaccard threshold in [0, 1] (default 0.65)
/// - PASS_THRESHOLD: short-answer pass mark in percent (default 70)
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub questions_path: PathBuf,
    pub dedup_threshold: f64,
    pub pass_threshold: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            questions_path: PathBuf::from("data/questions.json"),
            dedup_threshold: quiz_core::DEFAULT_THRESHOLD,
            pass_threshold: quiz_core::DEFAULT_PASS_THRESHOLD,
        }
    }
}

impl Config {
    /// Load from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load using an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = lookup("HOST").unwrap_or(defaults.host);
        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { var: "PORT", value })?,
            None => defaults.port,
        };
        let questions_path = lookup("QUESTIONS_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.questions_path);

        let dedup_threshold = match lookup("DEDUP_THRESHOLD") {
            Some(value) => {
                let parsed = value.trim().parse::<f64>().map_err(|_| ConfigError::Invalid {
                    var: "DEDUP_THRESHOLD",
                    value: value.clone(),
                })?;
                if !(0.0..=1.0).contains(&parsed) {
                    return Err(ConfigError::OutOfRange {
                        var: "DEDUP_THRESHOLD",
                        range: "[0, 1]",
                        value,
                    });
                }
                parsed
            }
            None => defaults.dedup_threshold,
        };

        let pass_threshold = match lookup("PASS_THRESHOLD") {
            Some(value) => {
                let parsed = value.trim().parse::<u8>().map_err(|_| ConfigError::Invalid {
                    var: "PASS_THRESHOLD",
                    value: value.clone(),
                })?;
                if parsed > 100 {
                    return Err(ConfigError::OutOfRange {
                        var: "PASS_THRESHOLD",
                        range: "0..=100",
                        value,
                    });
                }
                parsed
            }
            None => defaults.pass_threshold,
        };

        Ok(Self {
            host,
            port,
            questions_path,
            dedup_threshold,
            pass_threshold,
        })
    }

    /// `host:port` for the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
