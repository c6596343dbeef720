//! Repository for the `answers` table.

use async_trait::async_trait;
use qna_core::types::DbId;
use sqlx::PgPool;

use crate::models::answer::{Answer, NewAnswer};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, question_id, user_id, text, created_at";

/// Persistence operations for answers.
#[async_trait]
pub trait AnswerRepository: Send + Sync {
    /// Insert a new answer, returning the created row.
    ///
    /// The owning question is not checked here beyond the foreign key.
    async fn create(&self, input: &NewAnswer) -> Result<Answer, sqlx::Error>;

    async fn find_by_id(&self, id: DbId) -> Result<Answer, sqlx::Error>;

    async fn delete_by_id(&self, id: DbId) -> Result<(), sqlx::Error>;
}

/// PostgreSQL-backed [`AnswerRepository`].
#[derive(Debug, Clone)]
pub struct PgAnswerRepo {
    pool: PgPool,
}

impl PgAnswerRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AnswerRepository for PgAnswerRepo {
    async fn create(&self, input: &NewAnswer) -> Result<Answer, sqlx::Error> {
        let query = format!(
            "INSERT INTO answers (question_id, user_id, text, created_at)
             VALUES ($1, $2, $3, COALESCE($4, NOW()))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Answer>(&query)
            .bind(input.question_id)
            .bind(input.user_id)
            .bind(&input.text)
            .bind(input.created_at)
            .fetch_one(&self.pool)
            .await
    }

    async fn find_by_id(&self, id: DbId) -> Result<Answer, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM answers WHERE id = $1");
        sqlx::query_as::<_, Answer>(&query)
            .bind(id)
            .fetch_one(&self.pool)
            .await
    }

    async fn delete_by_id(&self, id: DbId) -> Result<(), sqlx::Error> {
        let result = sqlx::query("DELETE FROM answers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(sqlx::Error::RowNotFound);
        }
        Ok(())
    }
}
