//! Repository for the `questions` table.

use async_trait::async_trait;
use qna_core::types::DbId;
use sqlx::PgPool;

use crate::models::answer::Answer;
use crate::models::question::{CreateQuestion, Question};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, text, created_at";

/// Persistence operations for questions.
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// All questions ordered by id. Answers are not loaded.
    async fn find_all(&self) -> Result<Vec<Question>, sqlx::Error>;

    /// A single question with its answers eager-loaded.
    async fn find_by_id(&self, id: DbId) -> Result<Question, sqlx::Error>;

    /// Insert a new question, returning the created row.
    async fn create(&self, input: &CreateQuestion) -> Result<Question, sqlx::Error>;

    /// Delete a question. Its answers go with it via `ON DELETE CASCADE`.
    async fn delete(&self, id: DbId) -> Result<(), sqlx::Error>;
}

/// PostgreSQL-backed [`QuestionRepository`].
#[derive(Debug, Clone)]
pub struct PgQuestionRepo {
    pool: PgPool,
}

impl PgQuestionRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QuestionRepository for PgQuestionRepo {
    async fn find_all(&self) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM questions ORDER BY id");
        sqlx::query_as::<_, Question>(&query)
            .fetch_all(&self.pool)
            .await
    }

    async fn find_by_id(&self, id: DbId) -> Result<Question, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM questions WHERE id = $1");
        let mut question = sqlx::query_as::<_, Question>(&query)
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        let answers = sqlx::query_as::<_, Answer>(
            "SELECT id, question_id, user_id, text, created_at
             FROM answers WHERE question_id = $1 ORDER BY id",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        question.answers = Some(answers);
        Ok(question)
    }

    async fn create(&self, input: &CreateQuestion) -> Result<Question, sqlx::Error> {
        let query = format!("INSERT INTO questions (text) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Question>(&query)
            .bind(&input.text)
            .fetch_one(&self.pool)
            .await
    }

    async fn delete(&self, id: DbId) -> Result<(), sqlx::Error> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(sqlx::Error::RowNotFound);
        }
        Ok(())
    }
}
