//! Portable path handling for cross-platform repository layouts
//!
//! Paths are stored with forward slashes internally and converted to the
//! platform-native form only at I/O boundaries. Destination paths handed to
//! the provider may use either separator and may contain `.`/`..` segments;
//! [`resolve`] folds both quirks away before anything touches the disk.

use std::path::{Path, PathBuf};

/// A path normalized to forward slashes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PortablePath {
    inner: String,
}

impl PortablePath {
    /// Create a new portable path from any path-like input.
    ///
    /// Backslashes are converted to forward slashes; nothing else changes.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let inner = path.as_ref().to_string_lossy().replace('\\', "/");
        Self { inner }
    }

    /// The internal forward-slash representation.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Append a relative segment (single- or multi-level).
    ///
    /// The segment is separator-normalized first; leading slashes are
    /// stripped so it is always treated as relative to `self`.
    pub fn join(&self, segment: impl AsRef<str>) -> Self {
        let segment = segment.as_ref().replace('\\', "/");
        let segment = segment.trim_start_matches('/');
        if segment.is_empty() {
            return self.clone();
        }
        let mut inner = self.inner.clone();
        if !inner.is_empty() && !inner.ends_with('/') {
            inner.push('/');
        }
        inner.push_str(segment);
        Self { inner }
    }

    /// Collapse `.` and `..` segments without touching the filesystem.
    ///
    /// Duplicate and trailing slashes are dropped. A `..` cannot climb above
    /// the filesystem root or a drive root; on a relative path it is kept if
    /// there is nothing left to pop. An empty or fully-collapsed relative
    /// path normalizes to `.`.
    pub fn lexical_normalize(&self) -> Self {
        let absolute = self.inner.starts_with('/');
        let mut out: Vec<&str> = Vec::new();

        for segment in self.inner.split('/') {
            match segment {
                "" | "." => {}
                ".." => {
                    let tail_is_dot_dot = out.last().is_some_and(|s| *s == "..");
                    let at_drive_root = out.len() == 1 && out.first().is_some_and(|s| is_drive_root(s));
                    if tail_is_dot_dot {
                        out.push("..");
                    } else if at_drive_root {
                        // cannot climb above a drive root
                    } else if !out.is_empty() {
                        out.pop();
                    } else if !absolute {
                        out.push("..");
                    }
                }
                seg => out.push(seg),
            }
        }

        let mut inner = String::new();
        if absolute {
            inner.push('/');
        }
        inner.push_str(&out.join("/"));
        if inner.is_empty() {
            inner.push('.');
        }
        Self { inner }
    }

    /// The parent path, if any.
    pub fn parent(&self) -> Option<Self> {
        let trimmed = self.inner.trim_end_matches('/');
        let idx = trimmed.rfind('/')?;
        let parent = if idx == 0 { "/" } else { &trimmed[..idx] };
        Some(Self {
            inner: parent.to_string(),
        })
    }

    /// The final path segment, if any.
    pub fn file_name(&self) -> Option<&str> {
        let trimmed = self.inner.trim_end_matches('/');
        let name = trimmed.rsplit('/').next()?;
        if name.is_empty() { None } else { Some(name) }
    }

    /// Convert to a platform-native `PathBuf` for I/O.
    ///
    /// On Windows this also strips the `\\?\` extended-length prefix.
    pub fn to_native(&self) -> PathBuf {
        dunce::simplified(Path::new(&self.inner)).to_path_buf()
    }

    /// Whether a filesystem entry exists at this path.
    pub fn exists(&self) -> bool {
        self.to_native().exists()
    }

    /// Whether this path is an existing directory.
    pub fn is_dir(&self) -> bool {
        self.to_native().is_dir()
    }

    /// Whether this path is an existing regular file.
    pub fn is_file(&self) -> bool {
        self.to_native().is_file()
    }
}

/// A leading `C:`-style segment anchors the path on Windows and is never
/// popped by `..`.
fn is_drive_root(segment: &str) -> bool {
    segment.len() == 2 && segment.ends_with(':') && segment.starts_with(|c: char| c.is_ascii_alphabetic())
}

/// Resolve `relative` against `base`: separator-normalize, join, then
/// collapse `.`/`..` segments. Pure and deterministic.
pub fn resolve(base: impl AsRef<str>, relative: impl AsRef<str>) -> PortablePath {
    PortablePath::new(base.as_ref())
        .join(relative)
        .lexical_normalize()
}

impl AsRef<Path> for PortablePath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.inner)
    }
}

impl std::fmt::Display for PortablePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<&str> for PortablePath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for PortablePath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&Path> for PortablePath {
    fn from(p: &Path) -> Self {
        Self::new(p)
    }
}

impl From<PathBuf> for PortablePath {
    fn from(p: PathBuf) -> Self {
        Self::new(p)
    }
}
