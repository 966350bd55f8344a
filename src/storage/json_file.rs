// src/storage/json_file.rs

use std::ffi::OsString;
use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};

use super::Repository;
use crate::error::AppError;

/// Stores a value as pretty-printed JSON in a single file.
///
/// Writes go to `<path>.tmp` first and are renamed over the target, so a
/// failed save never leaves a truncated file behind.
#[derive(Debug)]
pub struct JsonFileRepository<T> {
    path: PathBuf,
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonFileRepository<T> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _marker: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(".tmp");
        PathBuf::from(name)
    }
}

#[async_trait]
impl<T> Repository<T> for JsonFileRepository<T>
where
    T: Serialize + DeserializeOwned + Sync,
{
    async fn load_all(&self) -> Result<Option<T>, AppError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(AppError::Persistence(format!(
                    "Failed to read {}: {}",
                    self.path.display(),
                    e
                )));
            }
        };

        serde_json::from_slice(&bytes).map(Some).map_err(|e| {
            AppError::Persistence(format!("Corrupt content in {}: {}", self.path.display(), e))
        })
    }

    async fn save_all(&self, value: &T) -> Result<(), AppError> {
        let json = serde_json::to_vec_pretty(value)
            .map_err(|e| AppError::Persistence(e.to_string()))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let temp = self.temp_path();
        tokio::fs::write(&temp, &json).await.map_err(|e| {
            AppError::Persistence(format!("Failed to write {}: {}", temp.display(), e))
        })?;
        tokio::fs::rename(&temp, &self.path).await.map_err(|e| {
            AppError::Persistence(format!("Failed to replace {}: {}", self.path.display(), e))
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_file_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileRepository::<Vec<u32>>::new(dir.path().join("absent.json"));

        assert_eq!(repo.load_all().await.unwrap(), None);
    }

    #[tokio::test]
    async fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileRepository::<Vec<String>>::new(dir.path().join("nested/data.json"));

        let value = vec!["a".to_string(), "b".to_string()];
        repo.save_all(&value).await.unwrap();

        assert_eq!(repo.load_all().await.unwrap(), Some(value));
        assert!(!repo.temp_path().exists());

        let raw = std::fs::read_to_string(repo.path()).unwrap();
        assert!(raw.contains("\n  \"a\""), "expected two-space indentation: {raw}");
    }

    #[tokio::test]
    async fn corrupt_file_is_a_persistence_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{ not json").unwrap();

        let repo = JsonFileRepository::<Vec<u32>>::new(path);
        assert!(matches!(repo.load_all().await, Err(AppError::Persistence(_))));
    }

    #[tokio::test]
    async fn failed_save_keeps_previous_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        let repo = JsonFileRepository::<Vec<u32>>::new(&path);
        repo.save_all(&vec![1, 2]).await.unwrap();

        // A directory squatting on the temp path makes the write fail.
        std::fs::create_dir(repo.temp_path()).unwrap();

        assert!(repo.save_all(&vec![1, 2, 3]).await.is_err());
        assert_eq!(repo.load_all().await.unwrap(), Some(vec![1, 2]));
    }
}
