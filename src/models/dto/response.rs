use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::domain::{AnswerDetail, Attempt, Exam, Question, Role, User};

#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
    pub name: String,
    pub role: Role,
}

impl LoginResponse {
    pub fn new(token: String, user: &User) -> Self {
        LoginResponse {
            token,
            username: user.username.clone(),
            name: user.name.clone(),
            role: user.role,
        }
    }
}

/// The graded result of one submission, returned to the exam taker so the
/// report renders without a second query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreReport {
    pub score: i64,
    pub total: i64,
    pub details: Vec<AnswerDetail>,
}

/// Choice as the exam-taking client sees it: no answer key.
#[derive(Debug, Clone, Serialize)]
pub struct PublicChoice {
    pub id: i64,
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PublicQuestion {
    pub id: i64,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_key: Option<String>,
    pub choices: Vec<PublicChoice>,
}

impl From<Question> for PublicQuestion {
    fn from(question: Question) -> Self {
        PublicQuestion {
            id: question.id,
            text: question.text,
            image_key: question.image_key,
            choices: question
                .choices
                .into_iter()
                .map(|c| PublicChoice {
                    id: c.id,
                    text: c.text,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PublicExam {
    pub link_id: String,
    pub title: String,
    pub settings: crate::models::domain::ExamSettings,
    pub questions: Vec<PublicQuestion>,
}

impl PublicExam {
    pub fn new(exam: Exam, questions: Vec<Question>) -> Self {
        PublicExam {
            link_id: exam.link_id,
            title: exam.title,
            settings: exam.settings,
            questions: questions.into_iter().map(PublicQuestion::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AttemptSummary {
    pub id: i64,
    pub student_id: i64,
    pub score: i64,
    pub total: i64,
    pub details: Vec<AnswerDetail>,
    pub submitted_at: DateTime<Utc>,
}

impl From<Attempt> for AttemptSummary {
    fn from(attempt: Attempt) -> Self {
        AttemptSummary {
            id: attempt.id,
            student_id: attempt.student_id,
            score: attempt.score,
            total: attempt.total,
            details: attempt.details,
            submitted_at: attempt.submitted_at,
        }
    }
}
