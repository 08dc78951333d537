use async_trait::async_trait;
use sqlx::{sqlite::SqliteRow, Row};

use crate::{db::Database, errors::AppResult, models::domain::Question};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    async fn create(&self, question: &Question) -> AppResult<i64>;
    /// The authoritative question set, answer key included. Grading reads
    /// this; public handlers must strip it before responding.
    async fn find_by_exam(&self, exam_id: i64) -> AppResult<Vec<Question>>;
}

pub struct SqlxQuestionRepository {
    db: Database,
}

impl SqlxQuestionRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

fn row_to_question(row: &SqliteRow) -> AppResult<Question> {
    let choices: String = row.try_get("choices")?;

    Ok(Question {
        id: row.try_get("id")?,
        exam_id: row.try_get("exam_id")?,
        text: row.try_get("text")?,
        image_key: row.try_get("image_key")?,
        // A question whose choice blob cannot be read grades as
        // guaranteed-wrong rather than failing the whole exam fetch.
        choices: serde_json::from_str(&choices).unwrap_or_default(),
    })
}

#[async_trait]
impl QuestionRepository for SqlxQuestionRepository {
    async fn create(&self, question: &Question) -> AppResult<i64> {
        let choices = serde_json::to_string(&question.choices)?;

        let result = sqlx::query(
            "INSERT INTO questions (exam_id, text, image_key, choices) VALUES (?, ?, ?, ?)",
        )
        .bind(question.exam_id)
        .bind(&question.text)
        .bind(&question.image_key)
        .bind(choices)
        .execute(self.db.pool())
        .await?;

        Ok(result.last_insert_rowid())
    }

    async fn find_by_exam(&self, exam_id: i64) -> AppResult<Vec<Question>> {
        let rows = sqlx::query("SELECT * FROM questions WHERE exam_id = ? ORDER BY id")
            .bind(exam_id)
            .fetch_all(self.db.pool())
            .await?;

        rows.iter().map(row_to_question).collect()
    }
}
