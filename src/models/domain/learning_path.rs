use serde::{Deserialize, Serialize};

use crate::models::domain::quiz::Quiz;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DifficultyLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl DifficultyLevel {
    /// The tier user-submitted items default to when merged into the library.
    pub fn easiest() -> Self {
        DifficultyLevel::Beginner
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct LearningModule {
    pub id: String,
    pub title: String,
    pub description: String,
    pub estimated_time: String,
    pub content_ids: Vec<String>,
    /// 0..=100; invariant: `completed` implies `progress == 100`.
    pub progress: u8,
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quiz: Option<Quiz>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub practical_exercise_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<u32>,
    #[serde(default)]
    pub ai_suggested: bool,
    #[serde(default)]
    pub skippable: bool,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct LearningPath {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category_ids: Vec<String>,
    pub goal_relevance_ids: Vec<String>,
    pub modules: Vec<LearningModule>,
    /// Always the rounded mean of the modules' `progress` values.
    pub overall_progress: u8,
    pub difficulty_level: DifficultyLevel,
    pub estimated_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prerequisites: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
}

impl LearningPath {
    /// Recomputes `overall_progress` as the rounded mean of module
    /// progress, 0 for a path with no modules.
    pub fn recompute_overall_progress(&mut self) {
        self.overall_progress = if self.modules.is_empty() {
            0
        } else {
            let sum: u32 = self.modules.iter().map(|m| u32::from(m.progress)).sum();
            (f64::from(sum) / self.modules.len() as f64).round() as u8
        };
    }

    pub fn find_module(&self, module_id: &str) -> Option<&LearningModule> {
        self.modules.iter().find(|m| m.id == module_id)
    }

    pub fn is_completed(&self) -> bool {
        !self.modules.is_empty() && self.modules.iter().all(|m| m.completed)
    }
}
