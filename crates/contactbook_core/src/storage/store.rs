//! Byte-level roster stores.
//!
//! # Responsibility
//! - Abstract where roster bytes live so services stay storage-agnostic.
//!
//! # Invariants
//! - `read` returns `Ok(None)` when nothing has been stored yet.
//! - File writes go through a sibling temp file and a rename, so a crash
//!   never leaves a half-written roster file behind.

use log::info;
use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

/// Storage backend for the serialized roster.
pub trait RosterStore {
    /// Reads stored bytes, or `None` when the store is empty.
    fn read(&self) -> io::Result<Option<Vec<u8>>>;
    /// Replaces stored bytes.
    fn write(&mut self, bytes: &[u8]) -> io::Result<()>;
    /// Short human-readable location for messages.
    fn location(&self) -> String;
}

/// Roster stored in one JSON file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileRosterStore {
    path: PathBuf,
}

impl JsonFileRosterStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl RosterStore for JsonFileRosterStore {
    fn read(&self) -> io::Result<Option<Vec<u8>>> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    "event=store_read module=storage status=ok result=absent path={}",
                    self.path.display()
                );
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    fn write(&mut self, bytes: &[u8]) -> io::Result<()> {
        if let Some(parent) = self
            .path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
        {
            fs::create_dir_all(parent)?;
        }
        let temp_path = self.temp_path();
        fs::write(&temp_path, bytes)?;
        fs::rename(&temp_path, &self.path)
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// In-memory store, used by tests and ephemeral sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryRosterStore {
    bytes: Option<Vec<u8>>,
}

impl MemoryRosterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: Some(bytes.into()),
        }
    }

    pub fn bytes(&self) -> Option<&[u8]> {
        self.bytes.as_deref()
    }
}

impl RosterStore for MemoryRosterStore {
    fn read(&self) -> io::Result<Option<Vec<u8>>> {
        Ok(self.bytes.clone())
    }

    fn write(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.bytes = Some(bytes.to_vec());
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
