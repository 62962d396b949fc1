use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::storage::{StateStorage, StorageError, STORAGE_KEY};

/// JSON snapshot on the local filesystem.
///
/// Writes go to a sibling `.tmp` file which is synced and renamed over the
/// snapshot, so a crash mid-write leaves the previous snapshot intact. Reads
/// and writes hold an advisory lock on a sibling `.lock` file so two running
/// instances never interleave.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<data_dir>/vibenotes/vibenotes-storage.json`, falling back to the
    /// current directory when the platform has no data directory.
    pub fn default_path() -> PathBuf {
        let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        data_dir
            .join("vibenotes")
            .join(format!("{}.json", STORAGE_KEY))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn sibling(&self, suffix: &str) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_else(|| STORAGE_KEY.into());
        name.push(suffix);
        self.path.with_file_name(name)
    }

    fn open_lock(&self) -> Result<File, StorageError> {
        let lock_path = self.sibling(".lock");
        OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&lock_path)
            .map_err(|source| StorageError::Lock {
                path: lock_path,
                source,
            })
    }
}

impl StateStorage for JsonFileStorage {
    fn read(&self) -> Result<Option<String>, StorageError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let lock = self.open_lock()?;
        lock.lock_shared().map_err(|source| StorageError::Lock {
            path: self.sibling(".lock"),
            source,
        })?;

        let contents = fs::read_to_string(&self.path).map_err(|source| StorageError::Read {
            path: self.path.clone(),
            source,
        })?;

        let _ = FileExt::unlock(&lock);
        Ok(Some(contents))
    }

    fn write(&self, contents: &str) -> Result<(), StorageError> {
        let write_err = |source: std::io::Error| StorageError::Write {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_err)?;
        }

        let lock = self.open_lock()?;
        lock.lock_exclusive().map_err(|source| StorageError::Lock {
            path: self.sibling(".lock"),
            source,
        })?;

        let tmp_path = self.sibling(".tmp");
        let cleanup = scopeguard::guard(tmp_path.clone(), |path| {
            let _ = fs::remove_file(path);
        });

        let mut tmp = File::create(&tmp_path).map_err(write_err)?;
        tmp.write_all(contents.as_bytes()).map_err(write_err)?;
        tmp.sync_all().map_err(write_err)?;
        drop(tmp);

        fs::rename(&tmp_path, &self.path).map_err(write_err)?;
        scopeguard::ScopeGuard::into_inner(cleanup);

        let _ = FileExt::unlock(&lock);
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
