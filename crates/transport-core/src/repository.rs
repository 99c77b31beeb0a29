//! Repository descriptor
//!
//! A repository is the root a provider resolves every resource and
//! directory name against. The base directory is optional: integration
//! harnesses bootstrap providers without one, and connection validation
//! short-circuits in that state.

use serde::{Deserialize, Serialize};

/// Description of an artifact repository a provider serves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    /// Filesystem root all resource and directory names resolve against.
    /// `None` is a legal degraded mode used during bootstrapping; every
    /// operation except connection open/close requires a value.
    #[serde(default)]
    pub base_dir: Option<String>,

    /// Optional identifier used by orchestrators to tell repositories
    /// apart in logs and reports.
    #[serde(default)]
    pub id: Option<String>,
}

impl Repository {
    /// Create a repository rooted at `base_dir`.
    pub fn new(base_dir: impl Into<String>) -> Self {
        Self {
            base_dir: Some(base_dir.into()),
            id: None,
        }
    }

    /// Create a repository with no base directory (bootstrap mode).
    pub fn unrooted() -> Self {
        Self::default()
    }

    /// Attach an identifier.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// The configured base directory, if any.
    pub fn base_dir(&self) -> Option<&str> {
        self.base_dir.as_deref()
    }
}
