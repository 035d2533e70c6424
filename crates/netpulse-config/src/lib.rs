//! Host configuration for the netpulse terminal background.
//!
//! Settings live in `config.toml` under the platform config directory
//! (for example `~/.config/netpulse/config.toml` on Linux). The
//! `NETPULSE_CONFIG` environment variable points at a different file. Every
//! field is optional and a missing file means defaults.
//!
//! ```toml
//! fps = 30
//! marker = "half-block"
//! log_file = "/tmp/netpulse.log"
//! log_level = "debug"
//! ```

use std::{
    fs, io,
    path::{Path, PathBuf},
    time::Duration,
};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "NETPULSE_CONFIG";

const MIN_FPS: u32 = 1;
const MAX_FPS: u32 = 240;

/// Errors raised while loading the configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Canvas marker used to plot points in terminal cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MarkerStyle {
    /// 2x4 dots per cell.
    #[default]
    Braille,
    /// One dot character per cell.
    Dot,
    /// Two vertical pixels per cell.
    HalfBlock,
    /// Full block per cell.
    Block,
}

/// Host settings. The animation itself has no tunables here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Target frames per second.
    pub fps: u32,
    /// How canvas points are drawn.
    pub marker: MarkerStyle,
    /// File receiving log output. Logging is off without one.
    pub log_file: Option<PathBuf>,
    /// `env_logger` filter directives, e.g. `info` or `netpulse_background=trace`.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fps: 60,
            marker: MarkerStyle::default(),
            log_file: None,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load from `NETPULSE_CONFIG` or the default location.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .or_else(default_path);

        match path {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load from a specific file. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("no config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let config = Self::parse(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse TOML text, applying defaults for absent fields.
    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Frame rate clamped to the supported range.
    pub fn effective_fps(&self) -> u32 {
        self.fps.clamp(MIN_FPS, MAX_FPS)
    }

    /// Time between two frames at the effective frame rate.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.effective_fps() as f64)
    }
}

/// `<config dir>/netpulse/config.toml`, if a home directory can be found.
pub fn default_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "netpulse").map(|dirs| dirs.config_dir().join("config.toml"))
}
