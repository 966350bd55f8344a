// src/store/result_log.rs

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{error::AppError, models::exam_record::GradingResult, storage::Repository};

/// Append-only history of grading results.
///
/// Every append reloads the whole history, adds one record and writes it
/// back. The mutex queues appends so two submissions cannot overwrite each
/// other's record.
#[derive(Clone)]
pub struct ResultLog {
    repo: Arc<dyn Repository<Vec<GradingResult>>>,
    writer: Arc<Mutex<()>>,
}

impl ResultLog {
    pub fn new(repo: Arc<dyn Repository<Vec<GradingResult>>>) -> Self {
        Self {
            repo,
            writer: Arc::new(Mutex::new(())),
        }
    }

    pub async fn append(&self, result: &GradingResult) -> Result<(), AppError> {
        let _writer = self.writer.lock().await;

        let mut history = self.repo.load_all().await?.unwrap_or_default();
        history.push(result.clone());

        self.repo.save_all(&history).await.inspect_err(|e| {
            tracing::error!("Failed to persist result for {:?}: {}", result.student_name, e)
        })?;

        tracing::info!(
            "Recorded result for {:?}: {}/{} ({} entries in log)",
            result.student_name,
            result.score,
            result.total_marks,
            history.len()
        );
        Ok(())
    }

    /// Full persisted history, oldest first.
    pub async fn history(&self) -> Result<Vec<GradingResult>, AppError> {
        Ok(self.repo.load_all().await?.unwrap_or_default())
    }
}
