use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::store::{KvStore, StoreError};

/// Stores each key as `<data_dir>/<key>.json`.
///
/// Writes go to a temp file in the same directory and are renamed over the
/// target, so readers see either the old blob or the new one.
#[derive(Debug, Clone)]
pub struct FileKvStore {
    data_dir: PathBuf,
}

impl FileKvStore {
    /// Creates the data directory if it does not exist yet.
    pub fn open(data_dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let data_dir = data_dir.into();
        std::fs::create_dir_all(&data_dir)?;
        Ok(Self { data_dir })
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.data_dir.join(format!("{key}.json")))
    }
}

#[async_trait]
impl KvStore for FileKvStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let path = self.path_for(key)?;
        match tokio::fs::read(&path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        let dir = self.data_dir.clone();
        let value = value.to_string();

        tokio::task::spawn_blocking(move || write_atomically(&dir, &path, &value))
            .await
            .map_err(|e| StoreError::Io(std::io::Error::new(std::io::ErrorKind::Other, e)))??;

        debug!("Wrote key '{key}' to {}", self.data_dir.display());
        Ok(())
    }
}

fn write_atomically(dir: &Path, target: &Path, value: &str) -> Result<(), StoreError> {
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(value.as_bytes())?;
    tmp.as_file().sync_all()?;
    tmp.persist(target).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_round_trip_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileKvStore::open(dir.path()).unwrap();

        store.set("history", "[1,2,3]").await.unwrap();
        assert_eq!(store.get("history").await.unwrap().as_deref(), Some(b"[1,2,3]".as_slice()));
        assert!(dir.path().join("history.json").exists());
    }

    #[tokio::test]
    async fn test_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileKvStore::open(dir.path()).unwrap();
        assert!(store.get("history").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_reopen_sees_previous_writes() {
        let dir = tempfile::tempdir().unwrap();
        FileKvStore::open(dir.path())
            .unwrap()
            .set("k", "persisted")
            .await
            .unwrap();

        let reopened = FileKvStore::open(dir.path()).unwrap();
        assert_eq!(reopened.get("k").await.unwrap().as_deref(), Some(b"persisted".as_slice()));
    }

    #[tokio::test]
    async fn test_open_creates_nested_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        FileKvStore::open(&nested).unwrap();
        assert!(nested.is_dir());
    }

    #[tokio::test]
    async fn test_rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileKvStore::open(dir.path()).unwrap();
        assert!(matches!(
            store.set("../escape", "x").await,
            Err(StoreError::InvalidKey(_))
        ));
        assert!(matches!(store.get("").await, Err(StoreError::InvalidKey(_))));
    }
}
