#[cfg(test)]
pub mod fixtures {
    use sqlx::sqlite::SqlitePoolOptions;

    use crate::{
        app_state::AppState,
        auth::PasswordCodec,
        config::Config,
        db::Database,
        models::domain::{Choice, Exam, ExamSettings, Question, Role, User},
        models::dto::request::StudentProfileInput,
        repositories::{
            ExamRepository, QuestionRepository, SqlxExamRepository, SqlxQuestionRepository,
            SqlxUserRepository, UserRepository,
        },
    };

    /// Fresh in-memory store with the schema in place. A single connection
    /// keeps every query in the test on the same database.
    pub async fn memory_db() -> Database {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("in-memory database should open");
        let db = Database::from_pool(pool);
        db.ensure_schema().await.expect("schema bootstrap");
        db
    }

    pub async fn test_app_state() -> AppState {
        AppState::with_database(Config::test_config(), memory_db().await)
    }

    pub fn student_profile(school_id: &str) -> StudentProfileInput {
        StudentProfileInput {
            school_id: school_id.to_string(),
            name: "Rafi Islam".to_string(),
            roll: "17".to_string(),
            class: "10".to_string(),
            section: "B".to_string(),
        }
    }

    pub async fn seed_teacher(state: &AppState, username: &str, password: &str) -> i64 {
        let repo = SqlxUserRepository::new(state.db.clone());
        let hash = PasswordCodec::encode(password).expect("password encodes");
        repo.create(&User::new(username, "Amina Rahman", &hash, Role::Teacher))
            .await
            .expect("teacher row inserts")
    }

    /// Seeds one exam with two questions: question 1 has correct choice 1,
    /// question 2 has correct choice 5. Returns the capability link.
    pub async fn seed_exam_with_questions(
        state: &AppState,
        teacher_id: i64,
        allow_retakes: bool,
    ) -> String {
        let exams = SqlxExamRepository::new(state.db.clone());
        let questions = SqlxQuestionRepository::new(state.db.clone());

        let exam = Exam::new(
            "Algebra midterm",
            teacher_id,
            ExamSettings {
                allow_retakes,
                ..Default::default()
            },
        );
        let exam_id = exams.create(&exam).await.expect("exam row inserts");

        let choice = |id: i64, text: &str, is_correct: bool| Choice {
            id,
            text: text.to_string(),
            is_correct,
        };

        questions
            .create(&Question {
                id: 0,
                exam_id,
                text: "2 + 2 = ?".to_string(),
                image_key: None,
                choices: vec![choice(1, "4", true), choice(2, "5", false)],
            })
            .await
            .expect("question inserts");
        questions
            .create(&Question {
                id: 0,
                exam_id,
                text: "Capital of France?".to_string(),
                image_key: None,
                choices: vec![
                    choice(3, "Berlin", false),
                    choice(4, "Madrid", false),
                    choice(5, "Paris", true),
                ],
            })
            .await
            .expect("question inserts");

        exam.link_id
    }
}
