//! Shared helpers for API integration tests.
//!
//! The app is built with the production router and middleware stack, but the
//! services run over [`MemoryStore`], an in-memory stand-in for both
//! repositories, so the tests need no database. The pool in `AppState` is
//! lazy and points at a closed port; only the health check touches it.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use qna_api::config::AppConfig;
use qna_api::router::build_app_router;
use qna_api::state::AppState;
use qna_core::types::DbId;
use qna_db::models::answer::{Answer, NewAnswer};
use qna_db::models::question::{CreateQuestion, Question};
use qna_db::repositories::{AnswerRepository, QuestionRepository};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// In-memory repositories
// ---------------------------------------------------------------------------

#[derive(Default)]
struct Tables {
    next_question_id: DbId,
    next_answer_id: DbId,
    questions: BTreeMap<DbId, Question>,
    answers: BTreeMap<DbId, Answer>,
}

/// In-memory implementation of both repository traits.
///
/// Mirrors the PostgreSQL behaviour the services rely on: `RowNotFound` for
/// absent rows, eager answers only on single lookup, and cascade delete.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
    failing: AtomicBool,
}

impl MemoryStore {
    /// Make every subsequent operation fail with a non-`RowNotFound` error.
    pub fn fail_all(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    pub fn answer_count(&self) -> usize {
        self.tables.lock().unwrap().answers.len()
    }

    fn check(&self) -> Result<(), sqlx::Error> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(sqlx::Error::PoolTimedOut);
        }
        Ok(())
    }
}

#[async_trait]
impl QuestionRepository for MemoryStore {
    async fn find_all(&self) -> Result<Vec<Question>, sqlx::Error> {
        self.check()?;
        let tables = self.tables.lock().unwrap();
        Ok(tables.questions.values().cloned().collect())
    }

    async fn find_by_id(&self, id: DbId) -> Result<Question, sqlx::Error> {
        self.check()?;
        let tables = self.tables.lock().unwrap();
        let mut question = tables
            .questions
            .get(&id)
            .cloned()
            .ok_or(sqlx::Error::RowNotFound)?;
        question.answers = Some(
            tables
                .answers
                .values()
                .filter(|a| a.question_id == id)
                .cloned()
                .collect(),
        );
        Ok(question)
    }

    async fn create(&self, input: &CreateQuestion) -> Result<Question, sqlx::Error> {
        self.check()?;
        let mut tables = self.tables.lock().unwrap();
        tables.next_question_id += 1;
        let question = Question {
            id: tables.next_question_id,
            text: input.text.clone(),
            created_at: chrono::Utc::now(),
            answers: None,
        };
        tables.questions.insert(question.id, question.clone());
        Ok(question)
    }

    async fn delete(&self, id: DbId) -> Result<(), sqlx::Error> {
        self.check()?;
        let mut tables = self.tables.lock().unwrap();
        tables
            .questions
            .remove(&id)
            .ok_or(sqlx::Error::RowNotFound)?;
        tables.answers.retain(|_, a| a.question_id != id);
        Ok(())
    }
}

#[async_trait]
impl AnswerRepository for MemoryStore {
    async fn create(&self, input: &NewAnswer) -> Result<Answer, sqlx::Error> {
        self.check()?;
        let mut tables = self.tables.lock().unwrap();
        if !tables.questions.contains_key(&input.question_id) {
            return Err(sqlx::Error::Protocol(
                "foreign key violation on answers.question_id".into(),
            ));
        }
        tables.next_answer_id += 1;
        let answer = Answer {
            id: tables.next_answer_id,
            question_id: input.question_id,
            user_id: input.user_id,
            text: input.text.clone(),
            created_at: input.created_at.unwrap_or_else(chrono::Utc::now),
        };
        tables.answers.insert(answer.id, answer.clone());
        Ok(answer)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Answer, sqlx::Error> {
        self.check()?;
        let tables = self.tables.lock().unwrap();
        tables
            .answers
            .get(&id)
            .cloned()
            .ok_or(sqlx::Error::RowNotFound)
    }

    async fn delete_by_id(&self, id: DbId) -> Result<(), sqlx::Error> {
        self.check()?;
        let mut tables = self.tables.lock().unwrap();
        tables
            .answers
            .remove(&id)
            .map(|_| ())
            .ok_or(sqlx::Error::RowNotFound)
    }
}

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Build a test `AppConfig` with safe defaults.
pub fn test_config() -> AppConfig {
    AppConfig {
        env: "test".to_string(),
        ..AppConfig::default()
    }
}

/// A pool that never connects successfully: port 1 on loopback, short timeout.
pub fn unreachable_pool() -> sqlx::PgPool {
    let options = PgConnectOptions::new().host("127.0.0.1").port(1);
    PgPoolOptions::new()
        .acquire_timeout(Duration::from_millis(250))
        .connect_lazy_with(options)
}

/// Build the full application router over a fresh [`MemoryStore`].
///
/// Must be called from within a Tokio runtime (the lazy pool needs one).
pub fn build_test_app() -> (Router, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::default());
    let config = test_config();
    let http = config.http_server.clone();
    let state = AppState::with_repositories(
        unreachable_pool(),
        config,
        store.clone(),
        store.clone(),
    );
    (build_app_router(state, &http), store)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<String>) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json)
        }
        None => Body::empty(),
    };
    app.clone().oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None).await
}

pub async fn delete(app: &Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, None).await
}

pub async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::POST, uri, Some(body.to_string())).await
}

pub async fn put_json(app: &Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::PUT, uri, Some(body.to_string())).await
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// Create a question through the API and return its id.
pub async fn create_question(app: &Router, text: &str) -> i64 {
    let response = post_json(app, "/api/questions", serde_json::json!({ "text": text })).await;
    body_json(response).await["id"].as_i64().unwrap()
}

/// Create an answer through the API and return its id.
pub async fn create_answer(app: &Router, question_id: i64, text: &str) -> i64 {
    let response = post_json(
        app,
        &format!("/api/questions/{question_id}/answers"),
        serde_json::json!({ "text": text, "user_id": uuid::Uuid::new_v4() }),
    )
    .await;
    body_json(response).await["id"].as_i64().unwrap()
}
