use crate::error::{ArborError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

const CONFIG_FILENAME: &str = "config.json";

/// Layout of the tree listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Table,
    Grid,
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMode::Table => f.write_str("table"),
            ViewMode::Grid => f.write_str("grid"),
        }
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "table" => Ok(ViewMode::Table),
            "grid" => Ok(ViewMode::Grid),
            other => Err(format!("Invalid view '{}': expected table or grid", other)),
        }
    }
}

/// Configuration for arbor, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct ArborConfig {
    /// Start every session with the demo trees
    #[serde(default = "default_seed_demo")]
    pub seed_demo: bool,

    /// Listing layout used when `list` gets no `--view`
    #[serde(default)]
    pub view: ViewMode,
}

fn default_seed_demo() -> bool {
    true
}

impl Default for ArborConfig {
    fn default() -> Self {
        Self {
            seed_demo: default_seed_demo(),
            view: ViewMode::default(),
        }
    }
}

impl ArborConfig {
    pub const KEYS: &'static [&'static str] = &["seed-demo", "view"];

    pub fn path<P: AsRef<Path>>(config_dir: P) -> PathBuf {
        config_dir.as_ref().join(CONFIG_FILENAME)
    }

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = Self::path(config_dir);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: ArborConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory, creating it if needed
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        fs::create_dir_all(config_dir)?;

        let content = serde_json::to_string_pretty(self)?;
        fs::write(Self::path(config_dir), content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "seed-demo" => Some(self.seed_demo.to_string()),
            "view" => Some(self.view.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "seed-demo" => {
                self.seed_demo = parse_bool(value).ok_or_else(|| {
                    ArborError::Config(format!(
                        "Invalid value '{}' for seed-demo: expected true or false",
                        value
                    ))
                })?;
            }
            "view" => {
                self.view = value.parse().map_err(ArborError::Config)?;
            }
            other => {
                return Err(ArborError::Config(format!("Unknown config key: {}", other)));
            }
        }
        Ok(())
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}
