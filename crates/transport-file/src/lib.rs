//! Local-filesystem implementation of the artifact transport contract
//!
//! [`FileProvider`] serves a repository rooted at a directory on disk. The
//! transfer orchestrator drives it through the same
//! [`TransportProvider`](transport_core::TransportProvider) surface it
//! would use for a remote protocol; the only protocol here is the
//! filesystem itself.

pub mod provider;

pub use provider::FileProvider;
