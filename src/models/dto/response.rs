use serde::{Deserialize, Serialize};

use crate::models::domain::content::LearningContent;

/// One library search result. `snippet` is only present when the active
/// search term matched inside the description; the view falls back to the
/// plain description otherwise.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SearchHit {
    pub item: LearningContent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionKind {
    Path,
    Content,
    Ugc,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SearchSuggestion {
    pub id: String,
    pub title: String,
    pub kind: SuggestionKind,
}

/// Terminal result of a quiz attempt, reported upward to the progress layer.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizOutcome {
    pub module_id: String,
    pub score: u32,
    pub total_questions: u32,
}

impl QuizOutcome {
    /// 0 for an empty quiz rather than a division error.
    pub fn percentage(&self) -> u32 {
        if self.total_questions == 0 {
            0
        } else {
            (f64::from(self.score) / f64::from(self.total_questions) * 100.0).round() as u32
        }
    }
}

/// Notification event consumed by the view layer for the confirmation toast.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PointAward {
    pub points: u32,
    pub action_description: String,
}
