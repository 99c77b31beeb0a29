//! File-backed transport provider

use std::fs;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use transport_core::{Error, Repository, Resource, Result, TransportProvider};
use transport_fs::io::{self, LazyFile};
use transport_fs::path::{PortablePath, resolve};

/// Transport provider backed by a local filesystem tree.
///
/// Holds the repository it serves and nothing else: every operation is a
/// direct sequence of blocking filesystem calls, and no state survives
/// between operations. Instantiate one provider per logical session.
pub struct FileProvider {
    repository: Repository,
}

impl FileProvider {
    /// Create a provider serving `repository`.
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// The repository this provider serves.
    pub fn repository(&self) -> &Repository {
        &self.repository
    }

    /// The configured base directory, or the per-operation precondition
    /// error naming the target the caller asked about.
    fn require_base_dir(&self, target: &str) -> Result<&str> {
        self.repository
            .base_dir()
            .ok_or_else(|| Error::transfer(target, "unable to operate with a null base directory"))
    }
}

impl TransportProvider for FileProvider {
    fn open_connection(&self) -> Result<()> {
        let Some(base_dir) = self.repository.base_dir() else {
            // Integration harnesses bootstrap providers without a base
            // directory; connection validation short-circuits.
            tracing::debug!("using a null base directory");
            return Ok(());
        };

        let base = PortablePath::new(base_dir);
        let native = base.to_native();

        if !native.exists() {
            fs::create_dir_all(&native).map_err(|_| {
                Error::connection(format!(
                    "repository path {} does not exist and cannot be created",
                    base
                ))
            })?;
        }

        // Enumeration doubles as the readability probe; std has no
        // access(2) equivalent.
        match fs::read_dir(&native) {
            Ok(_) => Ok(()),
            Err(_) => Err(Error::connection(format!(
                "repository path {} cannot be read",
                base
            ))),
        }
    }

    fn close_connection(&self) -> Result<()> {
        Ok(())
    }

    fn open_read(&self, resource: &mut Resource) -> Result<Box<dyn Read + Send>> {
        let base_dir = self.require_base_dir(resource.name())?;

        // Resource names are followed literally; only destination-path
        // resolution collapses dot segments.
        let file = PortablePath::new(base_dir).join(resource.name());
        let native = file.to_native();

        if !native.exists() {
            return Err(Error::not_found(format!("File {} does not exist", file)));
        }

        let (reader, metadata) =
            io::open_buffered(&native).map_err(|e| transfer_with(e, "could not read from file"))?;

        resource.set_content_length(metadata.len());
        let modified = metadata
            .modified()
            .map_err(|e| Error::transfer_io(&native, "could not read file metadata", e))?;
        resource.set_last_modified(modified);

        Ok(Box::new(reader))
    }

    fn open_write(&self, resource: &Resource) -> Result<Box<dyn Write + Send>> {
        let base_dir = self.require_base_dir(resource.name())?;

        let file = PortablePath::new(base_dir).join(resource.name());
        let native = file.to_native();

        if let Some(parent) = native.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| Error::transfer_io(parent, "could not create parent directories", e))?;
        }

        // The backing file must not appear until the first byte arrives.
        Ok(Box::new(BufWriter::new(LazyFile::new(native))))
    }

    fn file_list(&self, destination_directory: &str) -> Result<Vec<String>> {
        let base_dir = self.require_base_dir(destination_directory)?;

        let path = resolve(base_dir, destination_directory);
        let native = path.to_native();

        if !native.exists() {
            return Err(Error::not_found(format!(
                "Directory does not exist: {destination_directory}"
            )));
        }
        if !native.is_dir() {
            return Err(Error::not_found(format!(
                "Path is not a directory: {destination_directory}"
            )));
        }

        let entries = fs::read_dir(&native)
            .map_err(|e| Error::transfer_io(&native, "could not list directory", e))?;

        let mut list = Vec::new();
        for entry in entries {
            let entry =
                entry.map_err(|e| Error::transfer_io(&native, "could not list directory", e))?;
            let mut name = entry.file_name().to_string_lossy().into_owned();
            if entry.file_type().is_ok_and(|t| t.is_dir()) && !name.ends_with('/') {
                name.push('/');
            }
            list.push(name);
        }

        Ok(list)
    }

    fn resource_exists(&self, resource_name: &str) -> Result<bool> {
        let base_dir = self.require_base_dir(resource_name)?;

        let path = resolve(base_dir, resource_name);

        // A trailing slash narrows the question to "is this a directory".
        if resource_name.ends_with('/') {
            return Ok(path.is_dir());
        }

        Ok(path.exists())
    }

    fn put_directory(&self, source_directory: &Path, destination_directory: &str) -> Result<()> {
        let base_dir = self.require_base_dir(destination_directory)?;

        let raw = PortablePath::new(base_dir).join(destination_directory);
        let destination = raw.lexical_normalize();

        // Creation is attempted on the normalized path first, then the raw
        // joined form; the post-hoc check decides, not either attempt.
        if !io::ensure_dir(&destination, &raw) {
            let mut message = format!("could not make directory '{}'", destination);

            let base = PortablePath::new(base_dir);
            if is_read_only(&base.to_native()) {
                message.push_str(&format!(". The base directory {} is read-only", base));
            }

            return Err(Error::transfer(destination.to_native(), message));
        }

        io::copy_dir_all(source_directory, &destination.to_native())
            .map_err(|e| transfer_with(e, "error copying directory structure"))
    }

    fn supports_directory_copy(&self) -> bool {
        true
    }
}

/// Re-shape a transport-fs I/O error into the boundary taxonomy with an
/// operation-specific message.
fn transfer_with(err: transport_fs::Error, message: &str) -> Error {
    match err {
        transport_fs::Error::Io { path, source } => Error::transfer_io(path, message, source),
        other => other.into(),
    }
}

/// Best-effort writability probe used only for the assistive note in
/// put_directory failures.
fn is_read_only(path: &Path) -> bool {
    fs::metadata(path).is_ok_and(|m| m.permissions().readonly())
}
