use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Choice {
    pub id: i64,
    pub text: String,
    #[serde(default)]
    pub is_correct: bool,
}

/// The authoritative copy of a question, answer key included. This type
/// never crosses the public wire as-is; the exam-taking client receives a
/// stripped DTO without `is_correct`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    pub id: i64,
    pub exam_id: i64,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_key: Option<String>,
    pub choices: Vec<Choice>,
}

impl Question {
    pub fn correct_choice(&self) -> Option<&Choice> {
        self.choices.iter().find(|c| c.is_correct)
    }

    pub fn choice(&self, choice_id: i64) -> Option<&Choice> {
        self.choices.iter().find(|c| c.id == choice_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_question() -> Question {
        Question {
            id: 1,
            exam_id: 1,
            text: "2 + 2 = ?".to_string(),
            image_key: None,
            choices: vec![
                Choice {
                    id: 1,
                    text: "3".to_string(),
                    is_correct: false,
                },
                Choice {
                    id: 2,
                    text: "4".to_string(),
                    is_correct: true,
                },
            ],
        }
    }

    #[test]
    fn test_correct_choice_lookup() {
        let question = make_question();
        assert_eq!(question.correct_choice().unwrap().id, 2);
        assert_eq!(question.choice(1).unwrap().text, "3");
        assert!(question.choice(99).is_none());
    }

    #[test]
    fn test_question_without_answer_key() {
        let mut question = make_question();
        for choice in &mut question.choices {
            choice.is_correct = false;
        }
        assert!(question.correct_choice().is_none());
    }

    #[test]
    fn test_choice_is_correct_defaults_to_false() {
        let choice: Choice = serde_json::from_str(r#"{"id":1,"text":"3"}"#).unwrap();
        assert!(!choice.is_correct);
    }
}
