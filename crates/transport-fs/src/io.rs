//! Low-level I/O building blocks for the file provider
//!
//! Covers the three quirky pieces of the transport contract: write streams
//! that must not leave an empty file behind when nothing was written,
//! directory creation that tolerates platform path-normalization failures,
//! and recursive directory copy without rollback.

use std::fs::{self, File};
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

use crate::path::PortablePath;
use crate::{Error, Result};

/// A write stream that defers creating its backing file until the first
/// write call.
///
/// An aborted upload that never produced a byte must not leave an empty
/// file behind; wrapping the open call instead of performing it upfront
/// preserves that guarantee. Callers are expected to wrap this in a
/// `BufWriter`.
#[derive(Debug)]
pub struct LazyFile {
    path: PathBuf,
    file: Option<File>,
}

impl LazyFile {
    /// Create a lazy writer for `path`. No filesystem access happens here.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            file: None,
        }
    }

    /// The destination path this stream will write to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn backing(&mut self) -> std::io::Result<&mut File> {
        if self.file.is_none() {
            self.file = Some(File::create(&self.path)?);
        }
        Ok(self.file.as_mut().expect("backing file opened above"))
    }
}

impl Write for LazyFile {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.backing()?.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match self.file {
            Some(ref mut file) => file.flush(),
            None => Ok(()),
        }
    }
}

/// Open a buffered read stream on `path` together with its metadata
/// snapshot (length, modification time).
pub fn open_buffered(path: &Path) -> Result<(BufReader<File>, fs::Metadata)> {
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    let metadata = file.metadata().map_err(|e| Error::io(path, e))?;
    Ok((BufReader::new(file), metadata))
}

/// Create a directory chain, tolerating path-normalization quirks.
///
/// The first attempt uses the normalized form of the destination. Some
/// platforms reject creation through `.`-laden paths that the normalized
/// form handles, and vice versa, so a failure triggers a second attempt
/// with the raw joined form. Neither attempt's error is propagated: the
/// returned flag reflects a post-hoc check of the normalized path, which
/// is the only reliable signal of whether the directory is usable.
pub fn ensure_dir(normalized: &PortablePath, raw: &PortablePath) -> bool {
    if let Err(first) = fs::create_dir_all(normalized.to_native()) {
        tracing::debug!(
            path = %normalized,
            error = %first,
            "directory creation on normalized path failed, retrying raw form"
        );
        if let Err(second) = fs::create_dir_all(raw.to_native()) {
            tracing::debug!(path = %raw, error = %second, "raw-form directory creation failed");
        }
    }

    normalized.is_dir()
}

/// Recursively copy the contents of `source` into `dest`, preserving the
/// relative structure including empty subdirectories.
///
/// Existing destination files are overwritten; unrelated destination
/// entries are left alone. A mid-copy failure aborts without rolling back
/// files already copied.
pub fn copy_dir_all(source: &Path, dest: &Path) -> Result<()> {
    if !source.is_dir() {
        return Err(Error::NotADirectory {
            path: source.to_path_buf(),
        });
    }
    fs::create_dir_all(dest).map_err(|e| Error::io(dest, e))?;

    let entries = fs::read_dir(source).map_err(|e| Error::io(source, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(source, e))?;
        let file_type = entry.file_type().map_err(|e| Error::io(entry.path(), e))?;
        let target = dest.join(entry.file_name());

        if file_type.is_dir() {
            copy_dir_all(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target).map_err(|e| Error::io(entry.path(), e))?;
        }
    }

    Ok(())
}
