use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::domain::Exam,
    models::dto::response::{AttemptSummary, PublicExam},
    repositories::{AttemptRepository, ExamRepository, QuestionRepository},
};

#[derive(Clone)]
pub struct ExamService {
    exams: Arc<dyn ExamRepository>,
    questions: Arc<dyn QuestionRepository>,
    attempts: Arc<dyn AttemptRepository>,
}

impl ExamService {
    pub fn new(
        exams: Arc<dyn ExamRepository>,
        questions: Arc<dyn QuestionRepository>,
        attempts: Arc<dyn AttemptRepository>,
    ) -> Self {
        Self {
            exams,
            questions,
            attempts,
        }
    }

    pub async fn find_by_link_id(&self, link_id: &str) -> AppResult<Exam> {
        self.exams
            .find_by_link_id(link_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No exam for link '{}'", link_id)))
    }

    /// The exam as the taking client sees it: answer key stripped.
    pub async fn get_public_exam(&self, link_id: &str) -> AppResult<PublicExam> {
        let exam = self.find_by_link_id(link_id).await?;

        if !exam.is_active {
            return Err(AppError::ExamClosed);
        }

        let questions = self.questions.find_by_exam(exam.id).await?;
        Ok(PublicExam::new(exam, questions))
    }

    pub async fn list_attempts(&self, exam_id: i64) -> AppResult<Vec<AttemptSummary>> {
        let attempts = self.attempts.find_by_exam(exam_id).await?;
        Ok(attempts.into_iter().map(AttemptSummary::from).collect())
    }
}
