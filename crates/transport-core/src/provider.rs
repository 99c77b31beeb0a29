//! Transport provider abstraction
//!
//! The uniform contract a transfer orchestrator drives, whatever protocol
//! sits behind it. Providers are per-session: one instance serves one
//! logical session, synchronously and without internal locking. Streams
//! handed out are owned by the caller, who is responsible for closing
//! them.

use std::io::{Read, Write};
use std::path::Path;

use crate::{Resource, Result};

/// Trait for protocol-specific repository access.
///
/// This trait abstracts the differences between transport backends,
/// presenting the same get/put/list/exists surface for a local directory
/// as for a remote endpoint.
pub trait TransportProvider {
    /// Validate the session against the configured repository.
    ///
    /// May create the repository root as a side effect. A repository with
    /// no base directory is accepted without checks (bootstrap mode).
    fn open_connection(&self) -> Result<()>;

    /// Release session resources. Stateless providers always succeed.
    fn close_connection(&self) -> Result<()>;

    /// Open a read stream on a resource and populate its content length
    /// and last-modified metadata.
    fn open_read(&self, resource: &mut Resource) -> Result<Box<dyn Read + Send>>;

    /// Open a write stream for a resource, creating missing parent
    /// directories.
    ///
    /// The stream must not create or truncate the destination file before
    /// the first byte is written; overwrite of an existing file is
    /// implicit and unconditional.
    fn open_write(&self, resource: &Resource) -> Result<Box<dyn Write + Send>>;

    /// List the immediate children of a repository directory.
    ///
    /// Directory names carry a trailing `/`; plain files are bare. Order
    /// follows the underlying enumeration and is not guaranteed stable.
    fn file_list(&self, destination_directory: &str) -> Result<Vec<String>>;

    /// Whether a resource exists.
    ///
    /// A name ending in `/` asks "is this a directory"; any other name
    /// asks "does this path exist" regardless of kind.
    fn resource_exists(&self, resource_name: &str) -> Result<bool>;

    /// Recursively copy a local source tree into a repository directory,
    /// preserving relative structure including empty subdirectories.
    fn put_directory(&self, source_directory: &Path, destination_directory: &str) -> Result<()>;

    /// Whether this provider implements [`put_directory`].
    ///
    /// [`put_directory`]: TransportProvider::put_directory
    fn supports_directory_copy(&self) -> bool {
        false
    }
}
