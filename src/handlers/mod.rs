pub mod auth_handler;
pub mod exam_handler;
pub mod submission_handler;

pub use auth_handler::login;
pub use exam_handler::{exam_attempts, get_exam, health_check};
pub use submission_handler::submit_exam;
