use std::collections::HashMap;

use crate::models::domain::{AnswerDetail, Question};
use crate::models::dto::response::ScoreReport;

/// Shown in the per-question report when the student left a question
/// blank or submitted a choice id the question does not have.
pub const SKIPPED: &str = "Not answered";

pub struct ScoringService;

impl ScoringService {
    /// Grade a submission against the authoritative question list.
    ///
    /// Pure and fully reconstructable from its inputs: the denominator is
    /// the authoritative question count and nothing client-supplied beyond
    /// the choice map can influence the result. A question with no correct
    /// choice on record grades as wrong instead of failing.
    pub fn score(questions: &[Question], answers: &HashMap<i64, i64>) -> ScoreReport {
        let mut details = Vec::with_capacity(questions.len());
        let mut score: i64 = 0;

        for question in questions {
            let correct = question.correct_choice();
            let selected = answers
                .get(&question.id)
                .and_then(|choice_id| question.choice(*choice_id));

            let is_correct = match (correct, selected) {
                (Some(c), Some(s)) => c.id == s.id,
                _ => false,
            };
            if is_correct {
                score += 1;
            }

            details.push(AnswerDetail {
                question_text: question.text.clone(),
                selected_text: selected
                    .map(|c| c.text.clone())
                    .unwrap_or_else(|| SKIPPED.to_string()),
                correct_text: correct.map(|c| c.text.clone()).unwrap_or_default(),
                is_correct,
            });
        }

        ScoreReport {
            score,
            total: questions.len() as i64,
            details,
        }
    }
}
