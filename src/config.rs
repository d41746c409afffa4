//! Optional TOML configuration.
//!
//! Looked up at `<config dir>/lsclip/config.toml`:
//!
//! ```toml
//! bare_cite = "keep"   # or "swallow"
//! line_ending = "lf"   # or "crlf"
//! ```

use crate::error::{Error, Result};
use crate::transform::{BareCite, LineEnding, TransformOptions};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub bare_cite: BareCite,
    pub line_ending: LineEnding,
}

impl Config {
    /// Default location of the config file, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("lsclip").join("config.toml"))
    }

    /// Parse a config from TOML text.
    pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Read and parse the config at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::parse(&content).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Load `explicit` if given, otherwise the default file if it exists,
    /// otherwise the defaults.
    ///
    /// An explicit path that does not exist is an error.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        Self::resolve_in(explicit, Self::default_path())
    }

    /// [`Config::resolve`] with the fallback location passed in.
    fn resolve_in(explicit: Option<&Path>, default: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match default {
            Some(path) if path.is_file() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn options(&self) -> TransformOptions {
        TransformOptions {
            bare_cite: self.bare_cite,
            line_ending: self.line_ending,
        }
    }
}
