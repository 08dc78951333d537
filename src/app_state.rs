use std::sync::Arc;

use crate::{
    auth::JwtService,
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{
        SqlxAttemptRepository, SqlxExamRepository, SqlxQuestionRepository, SqlxStudentRepository,
        SqlxUserRepository,
    },
    services::{AuthService, ExamService, IdentityService, SubmissionService},
};

#[derive(Clone)]
pub struct AppState {
    pub auth_service: AuthService,
    pub exam_service: ExamService,
    pub submission_service: SubmissionService,
    pub jwt_service: JwtService,
    pub db: Database,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;
        db.ensure_schema().await?;

        Ok(Self::with_database(config, db))
    }

    pub fn with_database(config: Config, db: Database) -> Self {
        let users = Arc::new(SqlxUserRepository::new(db.clone()));
        let students = Arc::new(SqlxStudentRepository::new(db.clone()));
        let exams = Arc::new(SqlxExamRepository::new(db.clone()));
        let questions = Arc::new(SqlxQuestionRepository::new(db.clone()));
        let attempts = Arc::new(SqlxAttemptRepository::new(db.clone()));

        let jwt_service = JwtService::new(&config.jwt_secret, config.jwt_expiration_hours);
        let auth_service = AuthService::new(users, jwt_service.clone());
        let identity_service = IdentityService::new(students);
        let exam_service = ExamService::new(exams.clone(), questions.clone(), attempts.clone());
        let submission_service =
            SubmissionService::new(exams, questions, attempts, identity_service);

        Self {
            auth_service,
            exam_service,
            submission_service,
            jwt_service,
            db,
            config: Arc::new(config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }
}
