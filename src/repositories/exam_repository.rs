use async_trait::async_trait;
use sqlx::{sqlite::SqliteRow, Row};

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::Exam,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExamRepository: Send + Sync {
    async fn create(&self, exam: &Exam) -> AppResult<i64>;
    async fn find_by_link_id(&self, link_id: &str) -> AppResult<Option<Exam>>;
    async fn set_active(&self, id: i64, is_active: bool) -> AppResult<()>;
}

pub struct SqlxExamRepository {
    db: Database,
}

impl SqlxExamRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

fn row_to_exam(row: &SqliteRow) -> AppResult<Exam> {
    let settings: String = row.try_get("settings")?;

    Ok(Exam {
        id: row.try_get("id")?,
        link_id: row.try_get("link_id")?,
        title: row.try_get("title")?,
        teacher_id: row.try_get("teacher_id")?,
        // Settings are an opaque blob; a row with an unreadable blob still
        // resolves, with everything defaulted (retakes off).
        settings: serde_json::from_str(&settings).unwrap_or_default(),
        is_active: row.try_get("is_active")?,
    })
}

#[async_trait]
impl ExamRepository for SqlxExamRepository {
    async fn create(&self, exam: &Exam) -> AppResult<i64> {
        let settings = serde_json::to_string(&exam.settings)?;

        let result = sqlx::query(
            "INSERT INTO exams (link_id, title, teacher_id, settings, is_active)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&exam.link_id)
        .bind(&exam.title)
        .bind(exam.teacher_id)
        .bind(settings)
        .bind(exam.is_active)
        .execute(self.db.pool())
        .await?;

        Ok(result.last_insert_rowid())
    }

    async fn find_by_link_id(&self, link_id: &str) -> AppResult<Option<Exam>> {
        let row = sqlx::query("SELECT * FROM exams WHERE link_id = ? LIMIT 1")
            .bind(link_id)
            .fetch_optional(self.db.pool())
            .await?;

        row.as_ref().map(row_to_exam).transpose()
    }

    async fn set_active(&self, id: i64, is_active: bool) -> AppResult<()> {
        let result = sqlx::query("UPDATE exams SET is_active = ? WHERE id = ?")
            .bind(is_active)
            .bind(id)
            .execute(self.db.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Exam with id {} not found", id)));
        }
        Ok(())
    }
}
