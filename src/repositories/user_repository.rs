use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{sqlite::SqliteRow, Row};

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::{Role, User},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: &User) -> AppResult<i64>;
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;
    async fn update_password(&self, id: i64, password_hash: &str) -> AppResult<()>;
}

pub struct SqlxUserRepository {
    db: Database,
}

impl SqlxUserRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

fn row_to_user(row: &SqliteRow) -> AppResult<User> {
    Ok(User {
        id: row.try_get("id")?,
        username: row.try_get("username")?,
        name: row.try_get("name")?,
        password_hash: row.try_get("password_hash")?,
        role: Role::parse(&row.try_get::<String, _>("role")?),
        created_at: row.try_get::<DateTime<Utc>, _>("created_at").ok(),
    })
}

#[async_trait]
impl UserRepository for SqlxUserRepository {
    async fn create(&self, user: &User) -> AppResult<i64> {
        let result = sqlx::query(
            "INSERT INTO users (username, name, password_hash, role, created_at)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&user.username)
        .bind(&user.name)
        .bind(&user.password_hash)
        .bind(user.role.as_str())
        .bind(user.created_at.unwrap_or_else(Utc::now))
        .execute(self.db.pool())
        .await;

        match result {
            Ok(done) => Ok(done.last_insert_rowid()),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => Err(
                AppError::AlreadyExists(format!("User '{}' already exists", user.username)),
            ),
            Err(e) => Err(e.into()),
        }
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let row = sqlx::query("SELECT * FROM users WHERE username = ? LIMIT 1")
            .bind(username)
            .fetch_optional(self.db.pool())
            .await?;

        row.as_ref().map(row_to_user).transpose()
    }

    async fn update_password(&self, id: i64, password_hash: &str) -> AppResult<()> {
        let result = sqlx::query("UPDATE users SET password_hash = ? WHERE id = ?")
            .bind(password_hash)
            .bind(id)
            .execute(self.db.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("User with id {} not found", id)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::memory_db;

    #[actix_web::test]
    async fn test_create_and_find_user() {
        let db = memory_db().await;
        let repo = SqlxUserRepository::new(db);

        let user = User::new("amina", "Amina Rahman", "$pbkdf2-sha256$...", Role::Teacher);
        let id = repo.create(&user).await.unwrap();
        assert!(id > 0);

        let found = repo.find_by_username("amina").await.unwrap().unwrap();
        assert_eq!(found.id, id);
        assert_eq!(found.role, Role::Teacher);
        assert!(repo.find_by_username("nobody").await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn test_duplicate_username_is_conflict() {
        let db = memory_db().await;
        let repo = SqlxUserRepository::new(db);

        let user = User::new("amina", "Amina Rahman", "hash", Role::Teacher);
        repo.create(&user).await.unwrap();

        let result = repo.create(&user).await;
        assert!(matches!(result, Err(AppError::AlreadyExists(_))));
    }

    #[actix_web::test]
    async fn test_update_password() {
        let db = memory_db().await;
        let repo = SqlxUserRepository::new(db);

        let id = repo
            .create(&User::new("amina", "Amina Rahman", "plaintext", Role::Teacher))
            .await
            .unwrap();

        repo.update_password(id, "$pbkdf2-sha256$upgraded").await.unwrap();
        let found = repo.find_by_username("amina").await.unwrap().unwrap();
        assert_eq!(found.password_hash, "$pbkdf2-sha256$upgraded");

        assert!(matches!(
            repo.update_password(9999, "x").await,
            Err(AppError::NotFound(_))
        ));
    }
}
