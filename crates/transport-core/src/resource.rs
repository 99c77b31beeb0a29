//! Resource descriptor
//!
//! A resource is a logical name inside a repository plus metadata filled
//! in when the backing file is opened for reading. It describes the file;
//! it does not own it.

use std::time::SystemTime;

use chrono::{DateTime, Utc};

/// A logical named artifact within a repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    name: String,
    content_length: Option<u64>,
    last_modified: Option<DateTime<Utc>>,
}

impl Resource {
    /// Create a resource from its slash-separated relative name.
    ///
    /// Backslashes are normalized to forward slashes so the name resolves
    /// identically regardless of which platform produced it.
    pub fn new(name: impl AsRef<str>) -> Self {
        Self {
            name: name.as_ref().replace('\\', "/"),
            content_length: None,
            last_modified: None,
        }
    }

    /// The normalized resource name. Resource identity is this string.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Content length in bytes, populated on read.
    pub fn content_length(&self) -> Option<u64> {
        self.content_length
    }

    /// Last-modified timestamp, populated on read.
    pub fn last_modified(&self) -> Option<DateTime<Utc>> {
        self.last_modified
    }

    /// Last-modified timestamp as epoch milliseconds, the unit transfer
    /// orchestrators exchange.
    pub fn last_modified_millis(&self) -> Option<i64> {
        self.last_modified.map(|ts| ts.timestamp_millis())
    }

    pub fn set_content_length(&mut self, length: u64) {
        self.content_length = Some(length);
    }

    pub fn set_last_modified(&mut self, time: SystemTime) {
        self.last_modified = Some(DateTime::<Utc>::from(time));
    }
}
