use std::sync::Arc;

use qna_db::repositories::{
    AnswerRepository, PgAnswerRepo, PgQuestionRepo, QuestionRepository,
};

use crate::config::AppConfig;
use crate::services::{AnswerService, QuestionService};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, used directly only by the health check.
    pub pool: qna_db::DbPool,
    /// Configuration loaded at startup.
    pub config: Arc<AppConfig>,
    pub questions: QuestionService,
    pub answers: AnswerService,
}

impl AppState {
    /// Wire the services to PostgreSQL repositories sharing `pool`.
    pub fn new(pool: qna_db::DbPool, config: AppConfig) -> Self {
        let questions: Arc<dyn QuestionRepository> =
            Arc::new(PgQuestionRepo::new(pool.clone()));
        let answers: Arc<dyn AnswerRepository> = Arc::new(PgAnswerRepo::new(pool.clone()));
        Self::with_repositories(pool, config, questions, answers)
    }

    /// Wire the services to the given repositories.
    pub fn with_repositories(
        pool: qna_db::DbPool,
        config: AppConfig,
        questions: Arc<dyn QuestionRepository>,
        answers: Arc<dyn AnswerRepository>,
    ) -> Self {
        Self {
            pool,
            config: Arc::new(config),
            questions: QuestionService::new(Arc::clone(&questions)),
            answers: AnswerService::new(questions, answers),
        }
    }
}
