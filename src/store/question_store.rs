// src/store/question_store.rs

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::{
    error::AppError,
    models::question::{CreateQuestionRequest, Question},
    storage::Repository,
    utils::clock,
};

/// Persisted form of the question bank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionBank {
    /// Id handed to the next created question.
    pub next_id: u64,
    pub questions: Vec<Question>,
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self {
            next_id: 1,
            questions: Vec::new(),
        }
    }
}

/// What a backing file may contain: the current envelope, or the bare
/// array written by earlier versions of the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoredQuestions {
    Bank(QuestionBank),
    Legacy(Vec<Question>),
}

impl From<StoredQuestions> for QuestionBank {
    fn from(stored: StoredQuestions) -> Self {
        let (next_id, questions) = match stored {
            StoredQuestions::Bank(bank) => (bank.next_id, bank.questions),
            StoredQuestions::Legacy(questions) => (1, questions),
        };

        // Never hand out an id that is already taken.
        let max_id = questions.iter().map(|q| q.id).max().unwrap_or(0);
        let floor = max_id.max(questions.len() as u64) + 1;

        Self {
            next_id: next_id.max(floor),
            questions,
        }
    }
}

/// Append-only, ordered collection of questions mirrored to a repository.
///
/// All mutations run under the write lock including their flush, so
/// concurrent creates are applied one after another and none is lost.
#[derive(Clone)]
pub struct QuestionStore {
    bank: Arc<RwLock<QuestionBank>>,
    repo: Arc<dyn Repository<StoredQuestions>>,
}

impl QuestionStore {
    /// Loads the persisted bank. A missing resource is an empty store.
    pub async fn load(repo: Arc<dyn Repository<StoredQuestions>>) -> Result<Self, AppError> {
        let bank: QuestionBank = repo.load_all().await?.map(Into::into).unwrap_or_default();

        tracing::info!(
            "Loaded {} questions (next id {})",
            bank.questions.len(),
            bank.next_id
        );

        Ok(Self {
            bank: Arc::new(RwLock::new(bank)),
            repo,
        })
    }

    /// Creates a question with the next id and the current time, then flushes.
    ///
    /// If the flush fails, nothing changes in memory and the id is not consumed.
    pub async fn append(&self, req: CreateQuestionRequest) -> Result<Question, AppError> {
        let mut bank = self.bank.write().await;

        let marks = req.effective_marks();
        let question = Question {
            id: bank.next_id,
            question: req.question,
            options: req.options,
            correct_answer: req.correct_answer,
            marks,
            file_url: req.file_url,
            created_at: clock::now(),
        };

        let mut next = bank.clone();
        next.questions.push(question.clone());
        next.next_id += 1;

        self.repo
            .save_all(&StoredQuestions::Bank(next.clone()))
            .await
            .inspect_err(|e| tracing::error!("Failed to persist question {}: {}", question.id, e))?;

        *bank = next;
        tracing::info!("Created question {}", question.id);

        Ok(question)
    }

    /// Snapshot of every question in creation order.
    pub async fn list(&self) -> Vec<Question> {
        self.bank.read().await.questions.clone()
    }

    pub async fn get(&self, id: u64) -> Result<Question, AppError> {
        self.bank
            .read()
            .await
            .questions
            .iter()
            .find(|q| q.id == id)
            .cloned()
            .ok_or(AppError::NotFound("Question not found".to_string()))
    }
}
