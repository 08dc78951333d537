use std::sync::Arc;
use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::domain::Attempt,
    models::dto::{request::SubmitExamRequest, response::ScoreReport},
    repositories::{AttemptRepository, ExamRepository, QuestionRepository},
    services::{identity_service::IdentityService, scoring_service::ScoringService},
};

/// Orchestrates one submission end to end: resolve the exam by its
/// capability link, resolve the student identity, grade server-side,
/// record exactly one attempt, and hand the report back.
#[derive(Clone)]
pub struct SubmissionService {
    exams: Arc<dyn ExamRepository>,
    questions: Arc<dyn QuestionRepository>,
    attempts: Arc<dyn AttemptRepository>,
    identity: IdentityService,
}

impl SubmissionService {
    pub fn new(
        exams: Arc<dyn ExamRepository>,
        questions: Arc<dyn QuestionRepository>,
        attempts: Arc<dyn AttemptRepository>,
        identity: IdentityService,
    ) -> Self {
        Self {
            exams,
            questions,
            attempts,
            identity,
        }
    }

    pub async fn submit(&self, link_id: &str, request: SubmitExamRequest) -> AppResult<ScoreReport> {
        request.validate()?;

        let exam = self
            .exams
            .find_by_link_id(link_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No exam for link '{}'", link_id)))?;

        if !exam.is_active {
            return Err(AppError::ExamClosed);
        }

        let student_id = self.identity.resolve_or_create(&request.student).await?;

        // The one retake guard. Evaluated once, before any scoring work;
        // retakes (where allowed) append rows, they never overwrite.
        if !exam.settings.allow_retakes && self.attempts.exists(exam.id, student_id).await? {
            return Err(AppError::AlreadyAttempted);
        }

        let questions = self.questions.find_by_exam(exam.id).await?;
        let report = ScoringService::score(&questions, &request.answers);

        let attempt = Attempt::new(
            exam.id,
            student_id,
            report.score,
            report.total,
            report.details.clone(),
        );
        self.attempts.create(&attempt).await?;

        log::info!(
            "recorded attempt for exam {} student {}: {}/{}",
            exam.id,
            student_id,
            report.score,
            report.total
        );

        Ok(report)
    }
}
