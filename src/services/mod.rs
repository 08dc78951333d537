pub mod auth_service;
pub mod exam_service;
pub mod identity_service;
pub mod scoring_service;
pub mod submission_service;

pub use auth_service::AuthService;
pub use exam_service::ExamService;
pub use identity_service::IdentityService;
pub use scoring_service::ScoringService;
pub use submission_service::SubmissionService;
