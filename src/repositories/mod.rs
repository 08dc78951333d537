pub mod attempt_repository;
pub mod exam_repository;
pub mod question_repository;
pub mod student_repository;
pub mod user_repository;

pub use attempt_repository::{AttemptRepository, SqlxAttemptRepository};
pub use exam_repository::{ExamRepository, SqlxExamRepository};
pub use question_repository::{QuestionRepository, SqlxQuestionRepository};
pub use student_repository::{SqlxStudentRepository, StudentRepository};
pub use user_repository::{SqlxUserRepository, UserRepository};
