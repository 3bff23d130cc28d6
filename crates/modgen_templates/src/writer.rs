//! File writing collaborators.
//!
//! Generation only ever writes through [`FileWriter`], so the same generator
//! can target the real filesystem or an in-memory map.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::debug;

/// Persists rendered artifacts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FileWriter: Send + Sync {
    /// Create or overwrite the file at `path`.
    async fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()>;
}

/// Writes to the local filesystem, creating parent directories as needed.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsFileWriter;

#[async_trait]
impl FileWriter for FsFileWriter {
    async fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(path, contents).await?;
        debug!("Wrote {} bytes to {:?}", contents.len(), path);
        Ok(())
    }
}

/// Keeps written files in memory.
///
/// Clones share the same storage, so a test can hand one clone to the
/// generator and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct MemoryFileWriter {
    files: Arc<RwLock<BTreeMap<PathBuf, Vec<u8>>>>,
    write_count: Arc<RwLock<usize>>,
}

impl MemoryFileWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Contents of a written file, if it is valid UTF-8.
    pub fn read_to_string(&self, path: &Path) -> Option<String> {
        self.files
            .read()
            .get(path)
            .and_then(|bytes| String::from_utf8(bytes.clone()).ok())
    }

    /// Paths written so far, in sorted order.
    pub fn paths(&self) -> Vec<PathBuf> {
        self.files.read().keys().cloned().collect()
    }

    /// Number of `write` calls received, including overwrites.
    pub fn write_count(&self) -> usize {
        *self.write_count.read()
    }
}

#[async_trait]
impl FileWriter for MemoryFileWriter {
    async fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        self.files
            .write()
            .insert(path.to_path_buf(), contents.to_vec());
        *self.write_count.write() += 1;
        Ok(())
    }
}
