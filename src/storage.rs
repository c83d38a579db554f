// Storage backends for the persisted snapshot

use fs2::FileExt;
use std::collections::HashMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Fixed key the task snapshot is stored under
pub const STORAGE_KEY: &str = "tasklist";

/// Key-value string store holding the persisted snapshot
///
/// The store writes the whole snapshot under a single fixed key after every
/// mutation; there are no partial or incremental writes.
pub trait Storage {
    /// Returns the previously written value, or None if never written
    fn read(&self, key: &str) -> io::Result<Option<String>>;

    /// Overwrites any prior value under the key
    fn write(&mut self, key: &str, value: &str) -> io::Result<()>;
}

/// In-memory storage
///
/// Backs tests and throwaway sessions; nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> io::Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> io::Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed storage: each key maps to `<dir>/<key>.json`
#[derive(Debug)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Open storage rooted at the given directory, creating it if needed
    pub fn open<P: AsRef<Path>>(dir: P) -> io::Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Platform data directory used when no path is given
    pub fn default_dir() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tasklist")
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl Storage for FileStorage {
    fn read(&self, key: &str) -> io::Result<Option<String>> {
        match fs::read_to_string(self.key_path(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> io::Result<()> {
        let path = self.key_path(key);

        let mut file = fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&path)?;

        // Acquire exclusive lock before writing
        file.lock_exclusive()?;

        file.write_all(value.as_bytes())?;
        file.sync_all()?;

        debug!(path = ?path, bytes = value.len(), "Snapshot written");

        // Lock is automatically released when file is dropped
        Ok(())
    }
}
