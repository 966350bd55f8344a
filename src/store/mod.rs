// src/store/mod.rs

pub mod question_store;
pub mod result_log;

pub use question_store::QuestionStore;
pub use result_log::ResultLog;
