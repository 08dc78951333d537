use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{sqlite::SqliteRow, Row};

use crate::{db::Database, errors::AppResult, models::domain::Attempt};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AttemptRepository: Send + Sync {
    async fn create(&self, attempt: &Attempt) -> AppResult<i64>;
    async fn exists(&self, exam_id: i64, student_id: i64) -> AppResult<bool>;
    async fn find_by_exam(&self, exam_id: i64) -> AppResult<Vec<Attempt>>;
}

pub struct SqlxAttemptRepository {
    db: Database,
}

impl SqlxAttemptRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

fn row_to_attempt(row: &SqliteRow) -> AppResult<Attempt> {
    let details: String = row.try_get("details")?;

    Ok(Attempt {
        id: row.try_get("id")?,
        exam_id: row.try_get("exam_id")?,
        student_id: row.try_get("student_id")?,
        score: row.try_get("score")?,
        total: row.try_get("total")?,
        details: serde_json::from_str(&details).unwrap_or_default(),
        submitted_at: row.try_get::<DateTime<Utc>, _>("submitted_at")?,
    })
}

#[async_trait]
impl AttemptRepository for SqlxAttemptRepository {
    async fn create(&self, attempt: &Attempt) -> AppResult<i64> {
        let details = serde_json::to_string(&attempt.details)?;

        let result = sqlx::query(
            "INSERT INTO attempts (exam_id, student_id, score, total, details, submitted_at)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(attempt.exam_id)
        .bind(attempt.student_id)
        .bind(attempt.score)
        .bind(attempt.total)
        .bind(details)
        .bind(attempt.submitted_at)
        .execute(self.db.pool())
        .await?;

        Ok(result.last_insert_rowid())
    }

    async fn exists(&self, exam_id: i64, student_id: i64) -> AppResult<bool> {
        let row = sqlx::query(
            "SELECT 1 AS present FROM attempts WHERE exam_id = ? AND student_id = ? LIMIT 1",
        )
        .bind(exam_id)
        .bind(student_id)
        .fetch_optional(self.db.pool())
        .await?;

        Ok(row.is_some())
    }

    async fn find_by_exam(&self, exam_id: i64) -> AppResult<Vec<Attempt>> {
        let rows =
            sqlx::query("SELECT * FROM attempts WHERE exam_id = ? ORDER BY submitted_at DESC")
                .bind(exam_id)
                .fetch_all(self.db.pool())
                .await?;

        rows.iter().map(row_to_attempt).collect()
    }
}
