use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};
use tokio::sync::Mutex;

use crate::errors::{AppError, AppResult};

/// One JSON document on disk plus the lock that serializes access to it.
/// Each file-backed repository owns its own store file under the configured
/// data directory; a missing file reads as the document's `Default`.
pub struct LocalKvStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl LocalKvStore {
    pub fn new(dir: &Path, file_name: &str) -> Self {
        Self {
            path: dir.join(file_name),
            lock: Mutex::new(()),
        }
    }

    pub async fn read<T>(&self) -> AppResult<T>
    where
        T: DeserializeOwned + Default,
    {
        let _guard = self.lock.lock().await;
        self.read_unlocked().await
    }

    /// Read, apply `apply`, write the result back. The lock is held across
    /// the whole cycle so concurrent updates cannot clobber each other.
    pub async fn modify<T, F, R>(&self, apply: F) -> AppResult<R>
    where
        T: DeserializeOwned + Serialize + Default,
        F: FnOnce(&mut T) -> R + Send,
    {
        let _guard = self.lock.lock().await;
        let mut document: T = self.read_unlocked().await?;
        let result = apply(&mut document);
        self.write_unlocked(&document).await?;
        Ok(result)
    }

    async fn read_unlocked<T>(&self) -> AppResult<T>
    where
        T: DeserializeOwned + Default,
    {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(T::default()),
            Err(err) => {
                return Err(AppError::InternalError(format!(
                    "Failed to read store file {}: {}",
                    self.path.display(),
                    err
                )))
            }
        };

        serde_json::from_slice(&bytes).map_err(|err| {
            AppError::InternalError(format!(
                "Corrupt store file {}: {}",
                self.path.display(),
                err
            ))
        })
    }

    async fn write_unlocked<T: Serialize>(&self, document: &T) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|err| {
                AppError::StorageWriteError(format!(
                    "Failed to create store directory {}: {}",
                    parent.display(),
                    err
                ))
            })?;
        }

        let bytes = serde_json::to_vec_pretty(document).map_err(|err| {
            AppError::StorageWriteError(format!("Failed to encode store document: {}", err))
        })?;

        tokio::fs::write(&self.path, bytes).await.map_err(|err| {
            AppError::StorageWriteError(format!(
                "Failed to write store file {}: {}",
                self.path.display(),
                err
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    type Doc = HashMap<String, Vec<String>>;

    #[tokio::test]
    async fn missing_file_reads_as_default() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalKvStore::new(dir.path(), "absent.json");

        let document: Doc = store.read().await.unwrap();
        assert!(document.is_empty());
    }

    #[tokio::test]
    async fn modify_persists_across_reads() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalKvStore::new(dir.path(), "doc.json");

        store
            .modify(|document: &mut Doc| {
                document.insert("Water".to_string(), vec!["Vraag 1?".to_string()]);
            })
            .await
            .unwrap();

        let document: Doc = store.read().await.unwrap();
        assert_eq!(document["Water"], vec!["Vraag 1?".to_string()]);
    }

    #[tokio::test]
    async fn modify_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("data").join("inner");
        let store = LocalKvStore::new(&nested, "doc.json");

        store
            .modify(|document: &mut Doc| {
                document.insert("Lug".to_string(), Vec::new());
            })
            .await
            .unwrap();

        assert!(nested.join("doc.json").exists());
    }

    #[tokio::test]
    async fn corrupt_file_reads_as_internal_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("doc.json"), b"not json").unwrap();
        let store = LocalKvStore::new(dir.path(), "doc.json");

        let err = store.read::<Doc>().await.unwrap_err();
        match err {
            AppError::InternalError(message) => assert!(message.contains("Corrupt store file")),
            other => panic!("expected InternalError, got {:?}", other),
        }
    }
}
