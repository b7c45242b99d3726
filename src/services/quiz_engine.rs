use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};
use crate::models::domain::quiz::{OptionFeedback, Quiz, QuizQuestion};
use crate::models::dto::response::QuizOutcome;

/// Where a single attempt currently stands. `Feedback` is entered as soon
/// as an option is recorded for the current question and is the only state
/// `advance` moves on from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum AttemptPhase {
    Answering { question_index: usize },
    Feedback { question_index: usize },
    Completed { score: u32, total_questions: u32 },
}

/// One quiz attempt as an explicit, serializable state object with pure
/// transitions, so it can be driven and tested without a rendering
/// environment.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct QuizAttempt {
    module_id: String,
    quiz: Quiz,
    /// question id -> selected option id; an entry, once written, is final.
    answers: HashMap<String, String>,
    phase: AttemptPhase,
}

impl QuizAttempt {
    /// Starts an attempt at the first question. A quiz with no questions
    /// completes immediately with a (0, 0) outcome.
    pub fn new(module_id: &str, quiz: Quiz) -> AppResult<Self> {
        quiz.validate_structure()?;

        let phase = if quiz.questions.is_empty() {
            AttemptPhase::Completed {
                score: 0,
                total_questions: 0,
            }
        } else {
            AttemptPhase::Answering { question_index: 0 }
        };

        Ok(Self {
            module_id: module_id.to_string(),
            quiz,
            answers: HashMap::new(),
            phase,
        })
    }

    pub fn phase(&self) -> AttemptPhase {
        self.phase
    }

    pub fn module_id(&self) -> &str {
        &self.module_id
    }

    pub fn current_question(&self) -> Option<&QuizQuestion> {
        match self.phase {
            AttemptPhase::Answering { question_index }
            | AttemptPhase::Feedback { question_index } => {
                self.quiz.questions.get(question_index)
            }
            AttemptPhase::Completed { .. } => None,
        }
    }

    /// Records the selected option for the current question and moves to
    /// feedback. Re-selecting while feedback is showing is a no-op; the
    /// first submitted answer stands.
    pub fn select_option(&mut self, option_id: &str) -> AppResult<()> {
        let question_index = match self.phase {
            AttemptPhase::Answering { question_index } => question_index,
            AttemptPhase::Feedback { .. } => return Ok(()),
            AttemptPhase::Completed { .. } => {
                return Err(AppError::InvalidState(
                    "attempt is already completed".to_string(),
                ))
            }
        };

        let question = self.quiz.questions.get(question_index).ok_or_else(|| {
            AppError::InvalidState(format!(
                "question index {} is out of bounds",
                question_index
            ))
        })?;

        if !question.has_option(option_id) {
            return Err(AppError::ValidationError(format!(
                "option '{}' is not part of question '{}'",
                option_id, question.id
            )));
        }

        self.answers
            .insert(question.id.clone(), option_id.to_string());
        self.phase = AttemptPhase::Feedback { question_index };
        Ok(())
    }

    /// Moves to the next question, or finalizes the score after the last
    /// one. Requires the current question to have a recorded answer.
    pub fn advance(&mut self) -> AppResult<Option<QuizOutcome>> {
        let question_index = match self.phase {
            AttemptPhase::Feedback { question_index } => question_index,
            AttemptPhase::Answering { .. } => {
                return Err(AppError::InvalidState(
                    "current question has no recorded answer".to_string(),
                ))
            }
            AttemptPhase::Completed { .. } => {
                return Err(AppError::InvalidState(
                    "attempt is already completed".to_string(),
                ))
            }
        };

        if question_index + 1 < self.quiz.questions.len() {
            self.phase = AttemptPhase::Answering {
                question_index: question_index + 1,
            };
            return Ok(None);
        }

        let score = self.compute_score();
        let total_questions = self.quiz.questions.len() as u32;
        self.phase = AttemptPhase::Completed {
            score,
            total_questions,
        };
        log::info!(
            "quiz attempt for module '{}' completed: {}/{}",
            self.module_id,
            score,
            total_questions
        );
        Ok(Some(QuizOutcome {
            module_id: self.module_id.clone(),
            score,
            total_questions,
        }))
    }

    /// Number of questions whose recorded answer is the correct option.
    fn compute_score(&self) -> u32 {
        self.quiz
            .questions
            .iter()
            .filter(|q| {
                self.answers
                    .get(&q.id)
                    .map(|selected| *selected == q.correct_option_id)
                    .unwrap_or(false)
            })
            .count() as u32
    }

    pub fn outcome(&self) -> Option<QuizOutcome> {
        match self.phase {
            AttemptPhase::Completed {
                score,
                total_questions,
            } => Some(QuizOutcome {
                module_id: self.module_id.clone(),
                score,
                total_questions,
            }),
            _ => None,
        }
    }

    /// Whether the answer recorded for the current question is correct.
    /// Only meaningful while feedback is showing.
    pub fn is_current_answer_correct(&self) -> Option<bool> {
        let question = self.current_question()?;
        let selected = self.answers.get(&question.id)?;
        Some(*selected == question.correct_option_id)
    }

    /// Targeted feedback for the incorrect option picked on the current
    /// question, when the quiz author supplied one.
    pub fn current_feedback(&self) -> Option<&OptionFeedback> {
        let question = self.current_question()?;
        let selected = self.answers.get(&question.id)?;
        if *selected == question.correct_option_id {
            return None;
        }
        question.incorrect_feedback.get(selected)
    }
}
