//! Scratchpad configuration.
//!
//! Loaded from `~/.config/yabai-scratchpad/config.json`.  Top-level
//! `launchTimeout` and `scratchpadSpace` are defaults that every scratchpad
//! may override.
//!
//! # Example
//!
//! ```json
//! {
//!   "launchTimeout": 5,
//!   "scratchpadSpace": 9,
//!   "scratchpads": [
//!     {
//!       "name": "notes",
//!       "target": "Notes.app",
//!       "position": [100, 80],
//!       "size": [900, 700],
//!       "launch": "open -a Notes",
//!       "launchTimeout": 10
//!     }
//!   ]
//! }
//! ```

use crate::error::{Error, Result};
use crate::model::{Coordinate, LaunchOption, Target};
use crate::traits::Environment;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEFAULT_LAUNCH_TIMEOUT: u8 = 5;
const DEFAULT_SCRATCHPAD_SPACE: u8 = 9;

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawConfig")]
pub struct Config {
    /// Seconds to wait for a launched scratchpad's window.
    pub launch_timeout: u8,
    /// Space index that hidden scratchpads are parked on.
    pub scratchpad_space: u8,
    pub scratchpads: Vec<Scratchpad>,
}

/// One scratchpad definition, with config defaults already applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Scratchpad {
    pub name: String,
    pub target: Target,
    pub position: Coordinate,
    pub size: Coordinate,
    pub launch: LaunchOption,
    /// Seconds to wait for the window after launching.
    pub launch_timeout: u8,
    /// Space index to park the window on when hidden.
    pub space: u8,
}

//  On-disk shape

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawConfig {
    #[serde(default = "default_launch_timeout")]
    launch_timeout: u8,
    #[serde(default = "default_scratchpad_space")]
    scratchpad_space: u8,
    #[serde(default)]
    scratchpads: Vec<RawScratchpad>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawScratchpad {
    name: String,
    target: Target,
    position: Coordinate,
    size: Coordinate,
    launch: LaunchOption,
    launch_timeout: Option<u8>,
    space: Option<u8>,
}

fn default_launch_timeout() -> u8 {
    DEFAULT_LAUNCH_TIMEOUT
}

fn default_scratchpad_space() -> u8 {
    DEFAULT_SCRATCHPAD_SPACE
}

impl From<RawConfig> for Config {
    fn from(raw: RawConfig) -> Self {
        let scratchpads = raw
            .scratchpads
            .into_iter()
            .map(|s| Scratchpad {
                name: s.name,
                target: s.target,
                position: s.position,
                size: s.size,
                launch: s.launch,
                launch_timeout: s.launch_timeout.unwrap_or(raw.launch_timeout),
                space: s.space.unwrap_or(raw.scratchpad_space),
            })
            .collect();
        Self {
            launch_timeout: raw.launch_timeout,
            scratchpad_space: raw.scratchpad_space,
            scratchpads,
        }
    }
}

impl Config {
    /// Load configuration from a JSON file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read {}: {}", path.display(), e)))?;
        serde_json::from_str(&contents)
            .map_err(|e| Error::Config(format!("failed to parse {}: {}", path.display(), e)))
    }

    /// Load from the default location for `env`.
    pub fn load_default(env: &impl Environment) -> Result<Self> {
        Self::load(&config_path(env)?)
    }

    /// The first scratchpad called `name`.
    pub fn scratchpad(&self, name: &str) -> Result<&Scratchpad> {
        self.scratchpads
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| Error::ScratchpadNotFound(name.to_string()))
    }
}

/// `<home>/.config/yabai-scratchpad/config.json`
pub fn config_path(env: &impl Environment) -> Result<PathBuf> {
    let home = env
        .home_dir()
        .ok_or_else(|| Error::Config("cannot determine home directory".into()))?;
    Ok(home
        .join(".config")
        .join("yabai-scratchpad")
        .join("config.json"))
}
