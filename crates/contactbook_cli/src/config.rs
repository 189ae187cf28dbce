//! Runtime configuration for the `contactbook` binary.
//!
//! Values come from an optional TOML file; command-line flags override them.

use contactbook_core::default_log_level;
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_FILE: &str = "data/contactbook.json";

/// Contents of the TOML config file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub data_file: Option<PathBuf>,
    #[serde(default)]
    pub logging: LoggingSection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingSection {
    pub level: Option<String>,
    pub dir: Option<PathBuf>,
}

/// Values supplied on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub data_file: Option<PathBuf>,
    pub log_level: Option<String>,
    pub log_dir: Option<PathBuf>,
}

/// Effective settings after merging file, flags and defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_file: PathBuf,
    pub log_level: String,
    /// Absolute log directory; `None` disables file logging.
    pub log_dir: Option<PathBuf>,
}

#[derive(Debug)]
pub enum ConfigError {
    Read { path: PathBuf, source: std::io::Error },
    Parse { path: PathBuf, source: toml::de::Error },
    CurrentDir(std::io::Error),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "cannot read config file `{}`: {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "invalid config file `{}`: {source}", path.display())
            }
            Self::CurrentDir(source) => {
                write!(f, "cannot resolve current directory: {source}")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::CurrentDir(source) => Some(source),
        }
    }
}

impl FileConfig {
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl AppConfig {
    /// Loads the optional config file and applies command-line overrides.
    pub fn resolve(config_file: Option<&Path>, overrides: Overrides) -> Result<Self, ConfigError> {
        let file = match config_file {
            Some(path) => FileConfig::load_from_file(path)?,
            None => FileConfig::default(),
        };
        let cwd = std::env::current_dir().map_err(ConfigError::CurrentDir)?;
        Ok(Self::merge(file, overrides, &cwd))
    }

    /// Merges file values with overrides. Relative log directories are
    /// anchored at `cwd`.
    pub fn merge(file: FileConfig, overrides: Overrides, cwd: &Path) -> Self {
        let data_file = overrides
            .data_file
            .or(file.data_file)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));
        let log_level = overrides
            .log_level
            .or(file.logging.level)
            .unwrap_or_else(|| default_log_level().to_string());
        let log_dir = overrides.log_dir.or(file.logging.dir).map(|dir| {
            if dir.is_absolute() {
                dir
            } else {
                cwd.join(dir)
            }
        });

        Self {
            data_file,
            log_level,
            log_dir,
        }
    }
}
