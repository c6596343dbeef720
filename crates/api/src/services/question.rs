use std::sync::Arc;

use qna_core::types::DbId;
use qna_db::models::question::{CreateQuestion, Question};
use qna_db::repositories::QuestionRepository;

use super::ServiceResult;

/// Question use cases. Input is validated by the handler before it gets here.
#[derive(Clone)]
pub struct QuestionService {
    questions: Arc<dyn QuestionRepository>,
}

impl QuestionService {
    pub fn new(questions: Arc<dyn QuestionRepository>) -> Self {
        Self { questions }
    }

    pub async fn get_all_questions(&self) -> ServiceResult<Vec<Question>> {
        Ok(self.questions.find_all().await?)
    }

    pub async fn create_question(&self, input: &CreateQuestion) -> ServiceResult<Question> {
        Ok(self.questions.create(input).await?)
    }

    /// The returned question has its answers loaded.
    pub async fn get_question(&self, id: DbId) -> ServiceResult<Question> {
        Ok(self.questions.find_by_id(id).await?)
    }

    pub async fn delete_question(&self, id: DbId) -> ServiceResult<()> {
        Ok(self.questions.delete(id).await?)
    }
}
