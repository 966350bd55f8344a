// src/storage/memory.rs

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;

use super::Repository;
use crate::error::AppError;

/// Test double that keeps the value in process memory. Writes can be
/// switched to fail, which lets the stores exercise their persistence
/// error paths. Only compiled for tests.
#[derive(Debug, Default)]
pub struct MemoryRepository<T> {
    value: Mutex<Option<T>>,
    fail_writes: AtomicBool,
}

impl<T> MemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            value: Mutex::new(None),
            fail_writes: AtomicBool::new(false),
        }
    }

    /// Starts out as if `value` had already been saved.
    pub fn with_value(value: T) -> Self {
        Self {
            value: Mutex::new(Some(value)),
            fail_writes: AtomicBool::new(false),
        }
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl<T> Repository<T> for MemoryRepository<T>
where
    T: Clone + Send + Sync,
{
    async fn load_all(&self) -> Result<Option<T>, AppError> {
        let guard = self
            .value
            .lock()
            .map_err(|e| AppError::InternalServerError(e.to_string()))?;
        Ok(guard.clone())
    }

    async fn save_all(&self, value: &T) -> Result<(), AppError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(AppError::Persistence("write rejected".to_string()));
        }

        let mut guard = self
            .value
            .lock()
            .map_err(|e| AppError::InternalServerError(e.to_string()))?;
        *guard = Some(value.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn rejected_write_keeps_previous_value() {
        let repo = MemoryRepository::with_value(vec![1u32]);
        repo.set_fail_writes(true);

        assert!(matches!(
            repo.save_all(&vec![2]).await,
            Err(AppError::Persistence(_))
        ));
        assert_eq!(repo.load_all().await.unwrap(), Some(vec![1]));
    }
}
