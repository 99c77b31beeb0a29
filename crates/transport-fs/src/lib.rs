//! Filesystem primitives for the artifact transport provider
//!
//! Provides portable path handling and the low-level I/O building blocks
//! (lazy-open writes, directory creation with fallback, recursive copy)
//! that the local repository provider is built on.

pub mod error;
pub mod io;
pub mod path;

pub use error::{Error, Result};
pub use io::LazyFile;
pub use path::{PortablePath, resolve};
