use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct AnswerDetail {
    pub question_text: String,
    /// Text of the chosen option, or the skipped sentinel.
    pub selected_text: String,
    pub correct_text: String,
    pub is_correct: bool,
}

/// One recorded submission. Append-only; retakes (where allowed) add rows
/// rather than overwriting.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Attempt {
    pub id: i64,
    pub exam_id: i64,
    pub student_id: i64,
    pub score: i64,
    pub total: i64,
    pub details: Vec<AnswerDetail>,
    pub submitted_at: DateTime<Utc>,
}

impl Attempt {
    pub fn new(
        exam_id: i64,
        student_id: i64,
        score: i64,
        total: i64,
        details: Vec<AnswerDetail>,
    ) -> Self {
        Attempt {
            id: 0,
            exam_id,
            student_id,
            score,
            total,
            details,
            submitted_at: Utc::now(),
        }
    }
}
