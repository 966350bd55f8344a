use std::sync::Arc;

use axum::extract::FromRef;

use crate::{
    config::Config,
    error::AppError,
    models::exam_record::GradingResult,
    storage::JsonFileRepository,
    store::{QuestionStore, ResultLog, question_store::StoredQuestions},
};

#[derive(Clone)]
pub struct AppState {
    pub questions: QuestionStore,
    pub results: ResultLog,
    pub config: Config,
}

impl AppState {
    /// Opens the file-backed question store and result log named in `config`.
    pub async fn from_config(config: Config) -> Result<Self, AppError> {
        let questions_repo = JsonFileRepository::<StoredQuestions>::new(&config.questions_file);
        let questions = QuestionStore::load(Arc::new(questions_repo)).await?;

        let results_repo = JsonFileRepository::<Vec<GradingResult>>::new(&config.results_file);
        let results = ResultLog::new(Arc::new(results_repo));

        Ok(Self {
            questions,
            results,
            config,
        })
    }
}

impl FromRef<AppState> for QuestionStore {
    fn from_ref(state: &AppState) -> Self {
        state.questions.clone()
    }
}

impl FromRef<AppState> for ResultLog {
    fn from_ref(state: &AppState) -> Self {
        state.results.clone()
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}
