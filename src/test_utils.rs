#[cfg(test)]
pub mod fixtures {
    use std::collections::HashMap;

    use crate::models::domain::{
        DifficultyLevel, LearningModule, LearningPath, Quiz, QuizOption, QuizQuestion,
    };

    /// A two-question quiz where "a" answers q1 and "b" answers q2.
    pub fn test_quiz() -> Quiz {
        Quiz {
            questions: vec![test_question("q1", "a"), test_question("q2", "b")],
        }
    }

    pub fn test_question(id: &str, correct: &str) -> QuizQuestion {
        QuizQuestion {
            id: id.to_string(),
            text: format!("Question {}?", id),
            options: vec![
                QuizOption {
                    id: "a".to_string(),
                    text: "First option".to_string(),
                },
                QuizOption {
                    id: "b".to_string(),
                    text: "Second option".to_string(),
                },
            ],
            correct_option_id: correct.to_string(),
            explanation: None,
            incorrect_feedback: HashMap::new(),
        }
    }

    pub fn test_module(id: &str, points: Option<u32>) -> LearningModule {
        LearningModule {
            id: id.to_string(),
            title: format!("Module {}", id),
            description: "A test module".to_string(),
            estimated_time: "1h".to_string(),
            content_ids: vec![],
            progress: 0,
            completed: false,
            quiz: Some(test_quiz()),
            practical_exercise_id: None,
            points,
            ai_suggested: false,
            skippable: false,
        }
    }

    pub fn test_path(id: &str, modules: Vec<LearningModule>) -> LearningPath {
        let mut path = LearningPath {
            id: id.to_string(),
            title: format!("Path {}", id),
            description: "A test path".to_string(),
            category_ids: vec!["cat-1".to_string()],
            goal_relevance_ids: vec!["goal-1".to_string()],
            modules,
            overall_progress: 0,
            difficulty_level: DifficultyLevel::Beginner,
            estimated_time: "4h".to_string(),
            prerequisites: None,
            thumbnail_url: None,
        };
        path.recompute_overall_progress();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_test_quiz() {
        let quiz = test_quiz();
        assert_eq!(quiz.questions.len(), 2);
        assert!(quiz.validate_structure().is_ok());
    }

    #[test]
    fn test_fixtures_test_path() {
        let path = test_path("p1", vec![test_module("m1", Some(50))]);
        assert_eq!(path.modules.len(), 1);
        assert_eq!(path.overall_progress, 0);
    }
}
