use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io;
use std::marker::PhantomData;
use std::path::PathBuf;
use tracing::debug;

use super::error::StorageError;

/// A file holding a single JSON array of `T` records.
///
/// Every operation opens the file, does its work and closes it again. There
/// is no locking: two processes appending at the same time will lose writes.
pub struct JsonFile<T> {
    path: PathBuf,
    _records: PhantomData<fn() -> T>,
}

impl<T> JsonFile<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _records: PhantomData,
        }
    }

    /// Read every record. A missing file is reported as [`StorageError::NotFound`].
    pub fn read_all(&self) -> Result<Vec<T>, StorageError> {
        let records: Vec<T> = self.read_array()?;
        debug!(path = %self.path.display(), count = records.len(), "read records");
        Ok(records)
    }

    /// Like [`read_all`](Self::read_all), but a missing file reads as empty.
    pub fn read_all_or_default(&self) -> Result<Vec<T>, StorageError> {
        match self.read_all() {
            Err(StorageError::NotFound { .. }) => {
                debug!(path = %self.path.display(), "file missing, starting empty");
                Ok(Vec::new())
            }
            other => other,
        }
    }

    /// Add one record to the end of the array, creating the file if needed.
    ///
    /// Existing entries go through `T` like on [`rewrite`](Self::rewrite), so
    /// fields `T` does not declare are dropped.
    pub fn append(&self, record: &T) -> Result<(), StorageError> {
        let existing = self.read_all_or_default()?;
        let mut records: Vec<&T> = existing.iter().collect();
        records.push(record);
        self.write_array(&records)
    }

    /// Replace the file contents with `records`.
    pub fn rewrite(&self, records: &[T]) -> Result<(), StorageError> {
        self.write_array(records)
    }

    fn read_array<S: DeserializeOwned>(&self) -> Result<Vec<S>, StorageError> {
        let content = fs::read_to_string(&self.path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                StorageError::NotFound {
                    path: self.path.clone(),
                }
            } else {
                StorageError::Io {
                    path: self.path.clone(),
                    source,
                }
            }
        })?;

        serde_json::from_str(&content).map_err(|source| StorageError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    fn write_array<S: Serialize>(&self, records: &[S]) -> Result<(), StorageError> {
        let content =
            serde_json::to_string_pretty(records).map_err(|source| StorageError::Serialize {
                path: self.path.clone(),
                source,
            })?;
        fs::write(&self.path, content).map_err(|source| StorageError::Io {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), count = records.len(), "wrote records");
        Ok(())
    }
}
