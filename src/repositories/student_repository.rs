use async_trait::async_trait;
use sqlx::{sqlite::SqliteRow, Row};

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::Student,
    models::dto::request::StudentProfileInput,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StudentRepository: Send + Sync {
    async fn find_by_school_id(&self, school_id: &str) -> AppResult<Option<Student>>;
    /// Fails with `AlreadyExists` when another writer inserted the same
    /// school_id first; callers recover by re-reading.
    async fn insert(&self, profile: &StudentProfileInput) -> AppResult<i64>;
    async fn update_profile(&self, id: i64, profile: &StudentProfileInput) -> AppResult<()>;
}

pub struct SqlxStudentRepository {
    db: Database,
}

impl SqlxStudentRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

fn row_to_student(row: &SqliteRow) -> AppResult<Student> {
    Ok(Student {
        id: row.try_get("id")?,
        school_id: row.try_get("school_id")?,
        name: row.try_get("name")?,
        roll: row.try_get("roll")?,
        class_name: row.try_get("class_name")?,
        section: row.try_get("section")?,
    })
}

#[async_trait]
impl StudentRepository for SqlxStudentRepository {
    async fn find_by_school_id(&self, school_id: &str) -> AppResult<Option<Student>> {
        let row = sqlx::query("SELECT * FROM students WHERE school_id = ? LIMIT 1")
            .bind(school_id)
            .fetch_optional(self.db.pool())
            .await?;

        row.as_ref().map(row_to_student).transpose()
    }

    async fn insert(&self, profile: &StudentProfileInput) -> AppResult<i64> {
        let result = sqlx::query(
            "INSERT INTO students (school_id, name, roll, class_name, section)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&profile.school_id)
        .bind(&profile.name)
        .bind(&profile.roll)
        .bind(&profile.class)
        .bind(&profile.section)
        .execute(self.db.pool())
        .await;

        match result {
            Ok(done) => Ok(done.last_insert_rowid()),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(AppError::AlreadyExists(format!(
                    "Student with school_id '{}' already exists",
                    profile.school_id
                )))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn update_profile(&self, id: i64, profile: &StudentProfileInput) -> AppResult<()> {
        sqlx::query(
            "UPDATE students SET name = ?, roll = ?, class_name = ?, section = ? WHERE id = ?",
        )
        .bind(&profile.name)
        .bind(&profile.roll)
        .bind(&profile.class)
        .bind(&profile.section)
        .bind(id)
        .execute(self.db.pool())
        .await?;

        Ok(())
    }
}
