use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Default)]
pub struct Quiz {
    pub questions: Vec<QuizQuestion>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizQuestion {
    pub id: String,
    pub text: String,
    pub options: Vec<QuizOption>,
    pub correct_option_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    /// Feedback shown when a specific incorrect option was picked,
    /// keyed by option id.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub incorrect_feedback: HashMap<String, OptionFeedback>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizOption {
    pub id: String,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct OptionFeedback {
    pub explanation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_link_label: Option<String>,
}

impl QuizQuestion {
    pub fn has_option(&self, option_id: &str) -> bool {
        self.options.iter().any(|o| o.id == option_id)
    }
}

impl Quiz {
    /// Checks that every question's `correct_option_id` references one of
    /// its own options. Run before an attempt is started so a malformed
    /// quiz never reaches the scoring path.
    pub fn validate_structure(&self) -> AppResult<()> {
        for question in &self.questions {
            if !question.has_option(&question.correct_option_id) {
                return Err(AppError::ValidationError(format!(
                    "question '{}' marks '{}' correct but has no such option",
                    question.id, question.correct_option_id
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_question(id: &str, correct: &str) -> QuizQuestion {
        QuizQuestion {
            id: id.to_string(),
            text: "Sample question?".to_string(),
            options: vec![
                QuizOption {
                    id: "a".to_string(),
                    text: "First".to_string(),
                },
                QuizOption {
                    id: "b".to_string(),
                    text: "Second".to_string(),
                },
            ],
            correct_option_id: correct.to_string(),
            explanation: None,
            incorrect_feedback: HashMap::new(),
        }
    }

    #[test]
    fn validate_structure_accepts_well_formed_quiz() {
        let quiz = Quiz {
            questions: vec![make_question("q1", "a"), make_question("q2", "b")],
        };
        assert!(quiz.validate_structure().is_ok());
    }

    #[test]
    fn validate_structure_rejects_dangling_correct_option() {
        let quiz = Quiz {
            questions: vec![make_question("q1", "z")],
        };
        let result = quiz.validate_structure();
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[test]
    fn question_round_trip_preserves_feedback_map() {
        let mut question = make_question("q1", "a");
        question.incorrect_feedback.insert(
            "b".to_string(),
            OptionFeedback {
                explanation: "Second is a common mix-up".to_string(),
                review_link: Some("/library/articles/a1".to_string()),
                review_link_label: Some("Review the basics".to_string()),
            },
        );

        let json = serde_json::to_string(&question).expect("question should serialize");
        let parsed: QuizQuestion =
            serde_json::from_str(&json).expect("question should deserialize");

        assert_eq!(parsed.incorrect_feedback.len(), 1);
        assert_eq!(
            parsed.incorrect_feedback["b"].review_link.as_deref(),
            Some("/library/articles/a1")
        );
    }
}
