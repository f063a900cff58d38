//! Atomic JSON array files.
//!
//! Each collection lives in one file holding a top-level JSON array. Writers
//! replace the whole file through a temporary sibling and a rename, and
//! read-modify-write cycles run under an exclusive advisory lock.

use serde::{Serialize, de::DeserializeOwned};
use std::fs::{self, File, OpenOptions};
use std::io::Write as IoWrite;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use suzuran_core::error::{Result, SuzuranError};
use tracing::debug;

/// Result of an update closure: whether the collection must be written back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation<O> {
    /// The records changed; persist them and return the value.
    Write(O),
    /// Nothing changed; return the value without touching the file.
    Skip(O),
}

impl<O> Mutation<O> {
    pub fn into_inner(self) -> O {
        match self {
            Mutation::Write(value) | Mutation::Skip(value) => value,
        }
    }

    fn needs_write(&self) -> bool {
        matches!(self, Mutation::Write(_))
    }
}

/// A handle to one JSON array file.
///
/// Provides:
/// - **Atomicity**: Writes go to `.<name>.tmp` and are renamed over the target
/// - **Consistency**: A file that does not parse as an array is `CorruptData`, never empty
/// - **Isolation**: `update` holds an exclusive lock on `<name>.lock`
/// - **Durability**: Explicit fsync before rename
///
/// The handle is cheap to clone and holds no open file.
#[derive(Debug)]
pub struct JsonCollection<T> {
    path: PathBuf,
    _phantom: PhantomData<fn() -> T>,
}

impl<T> Clone for JsonCollection<T> {
    fn clone(&self) -> Self {
        Self {
            path: self.path.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<T> JsonCollection<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _phantom: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the parent directory and an empty array file when absent.
    ///
    /// Creation happens under the collection lock, so it never races a
    /// locked writer for the temporary file.
    pub fn ensure_exists(&self) -> Result<()> {
        if self.path.exists() {
            return Ok(());
        }
        let _lock = FileLock::acquire(&self.path)?;
        self.create_if_absent()
    }

    /// Reads every record in file order.
    ///
    /// An absent file is created first. A blank file, malformed JSON or a
    /// non-array top level fails with `CorruptData`.
    pub fn read_all(&self) -> Result<Vec<T>> {
        self.ensure_exists()?;
        self.read_existing()
    }

    /// Replaces the file contents with `records`, pretty-printed.
    pub fn write_all(&self, records: &[T]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(records)?;
        self.write_bytes(json.as_bytes())?;
        debug!(path = %self.path.display(), count = records.len(), "Wrote collection");
        Ok(())
    }

    /// Read-modify-write under the collection lock.
    ///
    /// `f` sees the current records and decides through [`Mutation`] whether
    /// they are written back. Errors from `f` abort without writing.
    pub fn update<F, O>(&self, f: F) -> Result<O>
    where
        F: FnOnce(&mut Vec<T>) -> Result<Mutation<O>>,
    {
        let _lock = FileLock::acquire(&self.path)?;
        self.create_if_absent()?;
        let mut records = self.read_existing()?;
        let mutation = f(&mut records)?;
        if mutation.needs_write() {
            self.write_all(&records)?;
        }
        Ok(mutation.into_inner())
    }

    /// Caller must hold the collection lock.
    fn create_if_absent(&self) -> Result<()> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "Creating empty collection file");
            self.write_bytes(b"[]")?;
        }
        Ok(())
    }

    fn read_existing(&self) -> Result<Vec<T>> {
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Err(self.corrupt("file is empty"));
        }
        serde_json::from_str(&content).map_err(|e| self.corrupt(e.to_string()))
    }

    fn write_bytes(&self, bytes: &[u8]) -> Result<()> {
        let tmp_path = self.temp_path()?;
        let mut tmp_file = File::create(&tmp_path)?;
        tmp_file.write_all(bytes)?;
        tmp_file.sync_all()?;
        drop(tmp_file);

        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }

    fn temp_path(&self) -> Result<PathBuf> {
        let file_name = self
            .path
            .file_name()
            .ok_or_else(|| SuzuranError::io(format!("{} has no file name", self.path.display())))?;
        let tmp_name = format!(".{}.tmp", file_name.to_string_lossy());
        Ok(self.path.with_file_name(tmp_name))
    }

    fn corrupt(&self, message: impl Into<String>) -> SuzuranError {
        SuzuranError::corrupt(self.path.display().to_string(), message)
    }
}

/// Exclusive advisory lock held for the lifetime of the guard.
///
/// The lock is released when the handle closes. The lock file itself stays
/// on disk; unlinking it would let a waiter and a newcomer lock different
/// inodes.
struct FileLock {
    #[allow(dead_code)]
    file: File,
}

impl FileLock {
    fn acquire(path: &Path) -> Result<Self> {
        let lock_path = path.with_extension("lock");

        if let Some(parent) = lock_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;

        use fs2::FileExt;
        file.lock_exclusive().map_err(|e| {
            SuzuranError::Lock(format!(
                "Failed to acquire lock {}: {}",
                lock_path.display(),
                e
            ))
        })?;
        debug!(path = %lock_path.display(), "Acquired collection lock");

        Ok(FileLock { file })
    }
}
