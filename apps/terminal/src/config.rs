//! Host configuration read from the environment.

use std::path::PathBuf;

use thiserror::Error;

/// Environment variable naming the dataset file.
pub const DATASET_VAR: &str = "PHRASE_GAME_DATASET";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("no dataset given: pass a path or set PHRASE_GAME_DATASET")]
    MissingDataset,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub dataset_path: PathBuf,
}

impl Config {
    /// Build from the process environment. A command-line path wins over the variable.
    pub fn from_env(arg: Option<String>) -> Result<Self, ConfigError> {
        Self::resolve(arg, std::env::var(DATASET_VAR).ok())
    }

    pub fn resolve(arg: Option<String>, env: Option<String>) -> Result<Self, ConfigError> {
        let path = arg
            .or(env)
            .filter(|p| !p.trim().is_empty())
            .ok_or(ConfigError::MissingDataset)?;

        Ok(Self {
            dataset_path: PathBuf::from(path),
        })
    }
}
