//! User configuration.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;

use crate::error::{MeetbookError, MeetbookResult};

const DEFAULT_MAX_LINE_LENGTH: usize = 1000;

fn default_max_line_length() -> usize {
    DEFAULT_MAX_LINE_LENGTH
}

fn default_color() -> bool {
    true
}

/// Configuration at ~/.config/meetbook/config.toml
///
/// Every key is optional. `MEETBOOK_*` environment variables override the
/// file, e.g. `MEETBOOK_MAX_LINE_LENGTH=200`.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct MeetbookConfig {
    /// Schedule file to load before the first command
    #[serde(default)]
    pub autoload: Option<PathBuf>,

    /// Longest command line accepted, in characters
    #[serde(default = "default_max_line_length")]
    pub max_line_length: usize,

    #[serde(default = "default_color")]
    pub color: bool,
}

impl Default for MeetbookConfig {
    fn default() -> Self {
        MeetbookConfig {
            autoload: None,
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
            color: true,
        }
    }
}

impl MeetbookConfig {
    pub fn config_path() -> MeetbookResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| MeetbookError::Config("Could not determine config directory".into()))?
            .join("meetbook");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location. A missing file yields the defaults.
    pub fn load() -> MeetbookResult<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> MeetbookResult<Self> {
        let config: MeetbookConfig = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(false))
            .add_source(Environment::with_prefix("MEETBOOK").try_parsing(true))
            .build()
            .map_err(|e| MeetbookError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| MeetbookError::Config(e.to_string()))?;

        if config.max_line_length == 0 {
            return Err(MeetbookError::Config(
                "max_line_length must be greater than 0".into(),
            ));
        }

        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// The autoload path with `~` expanded.
    pub fn autoload_path(&self) -> Option<PathBuf> {
        self.autoload.as_ref().map(|p| {
            PathBuf::from(shellexpand::tilde(&p.to_string_lossy()).into_owned())
        })
    }
}
