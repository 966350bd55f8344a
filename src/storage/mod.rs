// src/storage/mod.rs

//! Whole-collection persistence behind a small trait, so the stores never
//! touch files directly.

pub mod json_file;
#[cfg(test)]
pub mod memory;

use async_trait::async_trait;

use crate::error::AppError;

pub use json_file::JsonFileRepository;
#[cfg(test)]
pub use memory::MemoryRepository;

/// Loads and replaces an entire persisted value.
#[async_trait]
pub trait Repository<T>: Send + Sync {
    /// `None` when nothing has been persisted yet.
    async fn load_all(&self) -> Result<Option<T>, AppError>;

    /// Replaces the persisted value. On error the previous value is left as it was.
    async fn save_all(&self, value: &T) -> Result<(), AppError>;
}
