//! Configuration loading for Miniturbo.
//!
//! The config file lives at `~/.miniturbo/config.toml` unless
//! `MINITURBO_CONFIG` points elsewhere. A missing file is not an error; every
//! field is optional and falls back to the built-in defaults.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use toml::de::Error as TomlError;

use miniturbo_types::{GenerationDefaults, ImageOptions, VideoOptions};

/// Environment variable overriding the config file location.
pub const CONFIG_PATH_ENV: &str = "MINITURBO_CONFIG";

#[derive(Debug, Default, Deserialize)]
pub struct MiniturboConfig {
    pub generation: Option<GenerationConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct GenerationConfig {
    /// Image edge length used when a request does not specify one.
    pub image_resolution: Option<i64>,
    /// Video frame rate used when a request does not specify one.
    pub video_fps: Option<i64>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config at {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: TomlError,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

impl MiniturboConfig {
    /// Load the config from [`config_path`].
    ///
    /// Returns `Ok(None)` when no path can be determined or the file does not exist.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let Some(path) = config_path() else {
            return Ok(None);
        };
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file found");
            return Ok(None);
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        Self::parse(&content).map(Some).map_err(|source| {
            tracing::warn!("Failed to parse config at {:?}: {}", path, source);
            ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            }
        })
    }

    pub fn parse(content: &str) -> Result<Self, TomlError> {
        toml::from_str(content)
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    /// Generation defaults with any configured values applied over the built-in ones.
    #[must_use]
    pub fn generation_defaults(&self) -> GenerationDefaults {
        let mut defaults = GenerationDefaults::default();
        if let Some(generation) = self.generation.as_ref() {
            if let Some(resolution) = generation.image_resolution {
                defaults.image = ImageOptions::new(resolution);
            }
            if let Some(fps) = generation.video_fps {
                defaults.video = VideoOptions::new(fps);
            }
        }
        defaults
    }
}

/// Resolve the config file path.
///
/// `MINITURBO_CONFIG` wins when set and non-empty, otherwise `~/.miniturbo/config.toml`.
#[must_use]
pub fn config_path() -> Option<PathBuf> {
    if let Ok(raw) = env::var(CONFIG_PATH_ENV)
        && !raw.trim().is_empty()
    {
        return Some(PathBuf::from(raw.trim()));
    }
    dirs::home_dir().map(|home| home.join(".miniturbo").join("config.toml"))
}
