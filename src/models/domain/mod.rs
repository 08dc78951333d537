pub mod attempt;
pub mod exam;
pub mod question;
pub mod student;
pub mod user;

pub use attempt::{AnswerDetail, Attempt};
pub use exam::{Exam, ExamSettings};
pub use question::{Choice, Question};
pub use student::Student;
pub use user::{Role, User};
