//! Provider contract for the artifact transport layer
//!
//! This crate defines the surface a transfer orchestrator programs
//! against, independent of which protocol backs it:
//!
//! - **Repository / Resource descriptors**: where artifacts live and what
//!   a single artifact looks like to the transfer layer
//! - **TransportProvider trait**: open/close a session, stream reads and
//!   writes, list and probe directories, bulk-copy directory trees
//! - **Error taxonomy**: the three failure kinds orchestrators interpret
//!   (connection, resource-not-found, transfer)
//! - **RepositoryStore**: format-agnostic loading of repository
//!   definitions used to bootstrap providers
//!
//! Concrete providers live in sibling crates; `transport-file` implements
//! this contract for a local filesystem tree.

pub mod config;
pub mod error;
pub mod provider;
pub mod repository;
pub mod resource;

pub use config::{ConfigError, ConfigResult, RepositoryStore};
pub use error::{Error, Result};
pub use provider::TransportProvider;
pub use repository::Repository;
pub use resource::Resource;
