use std::sync::Arc;

use qna_core::types::DbId;
use qna_db::models::answer::{Answer, CreateAnswer, NewAnswer};
use qna_db::repositories::{AnswerRepository, QuestionRepository};

use super::{ServiceError, ServiceResult};

/// Answer use cases. Creating an answer requires its question to exist.
#[derive(Clone)]
pub struct AnswerService {
    questions: Arc<dyn QuestionRepository>,
    answers: Arc<dyn AnswerRepository>,
}

impl AnswerService {
    pub fn new(
        questions: Arc<dyn QuestionRepository>,
        answers: Arc<dyn AnswerRepository>,
    ) -> Self {
        Self { questions, answers }
    }

    /// Create an answer for `question_id`.
    ///
    /// Fails with [`ServiceError::QuestionNotFound`] when the question is
    /// absent, so callers can tell a missing question apart from a missing
    /// answer.
    pub async fn create_answer(
        &self,
        question_id: DbId,
        input: CreateAnswer,
    ) -> ServiceResult<Answer> {
        match self.questions.find_by_id(question_id).await {
            Ok(_) => {}
            Err(sqlx::Error::RowNotFound) => {
                tracing::debug!(question_id, "Answer submitted for missing question");
                return Err(ServiceError::QuestionNotFound { question_id });
            }
            Err(e) => return Err(e.into()),
        }

        let answer = NewAnswer::for_question(question_id, input);
        Ok(self.answers.create(&answer).await?)
    }

    pub async fn get_answer(&self, id: DbId) -> ServiceResult<Answer> {
        Ok(self.answers.find_by_id(id).await?)
    }

    pub async fn delete_answer(&self, id: DbId) -> ServiceResult<()> {
        Ok(self.answers.delete_by_id(id).await?)
    }
}
