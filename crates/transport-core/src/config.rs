//! Repository definition loading and saving
//!
//! Orchestrators bootstrap providers from definition files kept next to
//! their own configuration. The store is format-agnostic: the file
//! extension picks the serializer.

use std::fs;
use std::path::{Path, PathBuf};

use crate::Repository;

/// Result type for definition store operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Errors raised while loading or saving repository definitions
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} repository definition at {path}: {message}")]
    Parse {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Failed to serialize {format} repository definition for {path}: {message}")]
    Serialize {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Unsupported repository definition format: {extension}")]
    UnsupportedFormat { extension: String },
}

/// Format-agnostic store for [`Repository`] definitions.
///
/// Format is detected from the file extension:
/// - `.toml` -> TOML
/// - `.json` -> JSON
/// - `.yaml`, `.yml` -> YAML
#[derive(Debug, Default)]
pub struct RepositoryStore;

impl RepositoryStore {
    pub fn new() -> Self {
        Self
    }

    /// Load a repository definition from a file.
    pub fn load(&self, path: &Path) -> ConfigResult<Repository> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        match detect_format(path)? {
            Format::Toml => toml::from_str(&content).map_err(|e| ConfigError::Parse {
                path: path.to_path_buf(),
                format: "TOML".into(),
                message: e.to_string(),
            }),
            Format::Json => serde_json::from_str(&content).map_err(|e| ConfigError::Parse {
                path: path.to_path_buf(),
                format: "JSON".into(),
                message: e.to_string(),
            }),
            Format::Yaml => serde_yaml::from_str(&content).map_err(|e| ConfigError::Parse {
                path: path.to_path_buf(),
                format: "YAML".into(),
                message: e.to_string(),
            }),
        }
    }

    /// Save a repository definition to a file.
    ///
    /// Format is determined from the file extension.
    pub fn save(&self, path: &Path, repository: &Repository) -> ConfigResult<()> {
        let content = match detect_format(path)? {
            Format::Toml => {
                toml::to_string_pretty(repository).map_err(|e| ConfigError::Serialize {
                    path: path.to_path_buf(),
                    format: "TOML".into(),
                    message: e.to_string(),
                })?
            }
            Format::Json => {
                serde_json::to_string_pretty(repository).map_err(|e| ConfigError::Serialize {
                    path: path.to_path_buf(),
                    format: "JSON".into(),
                    message: e.to_string(),
                })?
            }
            Format::Yaml => {
                serde_yaml::to_string(repository).map_err(|e| ConfigError::Serialize {
                    path: path.to_path_buf(),
                    format: "YAML".into(),
                    message: e.to_string(),
                })?
            }
        };

        fs::write(path, content).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

enum Format {
    Toml,
    Json,
    Yaml,
}

fn detect_format(path: &Path) -> ConfigResult<Format> {
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "toml" => Ok(Format::Toml),
        "json" => Ok(Format::Json),
        "yaml" | "yml" => Ok(Format::Yaml),
        _ => Err(ConfigError::UnsupportedFormat { extension }),
    }
}
