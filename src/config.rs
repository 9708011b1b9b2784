use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use crate::error::{LexanError, Result};

pub const CONFIG_ENV: &str = "LEXAN_CONFIG";
pub const LOCAL_CONFIG: &str = "lexan.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Driver settings. Every field is optional in the file; command line flags
/// are layered on top by the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub verbose: bool,
    pub format: OutputFormat,
    pub ids: bool,
    pub iconsts: bool,
    pub rconsts: bool,
    pub sconsts: bool,
    pub log_level: Option<String>,
}

impl Config {
    /// Resolves the config file: explicit path, then `LEXAN_CONFIG`, then
    /// `./lexan.json`. Falls back to defaults when none exists.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match Self::get_config_path(explicit) {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Config::default()),
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| LexanError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        serde_json::from_str(&contents).map_err(|e| LexanError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    pub fn get_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }
        if let Ok(path) = env::var(CONFIG_ENV) {
            if !path.is_empty() {
                return Some(PathBuf::from(path));
            }
        }
        let local = Path::new(LOCAL_CONFIG);
        if local.is_file() {
            Some(local.to_path_buf())
        } else {
            None
        }
    }
}
