//! Error taxonomy presented to the transfer orchestrator
//!
//! Three kinds cross the provider boundary: connection-time failures
//! (fatal to the session), missing resources (recoverable by the caller),
//! and transfer failures (I/O or violated per-operation preconditions).

use std::path::PathBuf;

/// Result type for transport operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can cross the provider boundary
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration or environment problem discovered at connection time.
    /// Fatal to the session; never retried at this layer.
    #[error("Connection failed: {message}")]
    Connection { message: String },

    /// The requested resource or directory is absent or of the wrong kind.
    /// The caller may decide to skip or create.
    #[error("{message}")]
    ResourceNotFound { message: String },

    /// I/O failure during read/write/copy, or a missing base-directory
    /// precondition on a per-operation call.
    #[error("Transfer failed at {path}: {message}")]
    Transfer {
        path: PathBuf,
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },
}

impl Error {
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::ResourceNotFound {
            message: message.into(),
        }
    }

    pub fn transfer(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Transfer {
            path: path.into(),
            message: message.into(),
            source: None,
        }
    }

    pub fn transfer_io(
        path: impl Into<PathBuf>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        Self::Transfer {
            path: path.into(),
            message: message.into(),
            source: Some(source),
        }
    }
}

impl From<transport_fs::Error> for Error {
    fn from(err: transport_fs::Error) -> Self {
        match err {
            transport_fs::Error::Io { path, source } => Self::Transfer {
                path,
                message: "I/O failure".to_string(),
                source: Some(source),
            },
            transport_fs::Error::NotADirectory { path } => Self::ResourceNotFound {
                message: format!("Path is not a directory: {}", path.display()),
            },
        }
    }
}
