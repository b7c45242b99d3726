use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::domain::learning_path::DifficultyLevel;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Category {
    pub id: String,
    pub name: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    Article,
    Video,
    Infographic,
    Quiz,
    InteractiveSimulation,
    Course,
}

impl ContentType {
    /// Lenient parse used at the filter boundary; the UI vocabulary is
    /// closed upstream, so unknown strings are not an error here.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "article" => Some(ContentType::Article),
            "video" => Some(ContentType::Video),
            "infographic" => Some(ContentType::Infographic),
            "quiz" => Some(ContentType::Quiz),
            "interactive_simulation" => Some(ContentType::InteractiveSimulation),
            "course" => Some(ContentType::Course),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct LearningContent {
    pub id: String,
    pub content_type: ContentType,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub category_ids: Vec<String>,
    pub goal_relevance_ids: Vec<String>,
    pub difficulty_level: DifficultyLevel,
    pub estimated_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publish_date: Option<DateTime<Utc>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ModerationStatus {
    PendingApproval,
    Approved,
    Rejected,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct UserGeneratedContent {
    pub id: String,
    pub author_id: String,
    pub author_name: String,
    pub content_type: ContentType,
    pub title: String,
    pub description: String,
    /// Free-form payload (text, embedded links); opaque to the engine.
    pub content: String,
    pub tags: Vec<String>,
    pub submission_date: DateTime<Utc>,
    pub status: ModerationStatus,
}

impl UserGeneratedContent {
    /// Re-maps an approved submission into the curated-content shape so the
    /// library can render both collections uniformly. Submissions carry no
    /// category or goal taxonomy and no reviewed time estimate.
    pub fn to_library_item(&self) -> LearningContent {
        LearningContent {
            id: self.id.clone(),
            content_type: self.content_type,
            title: self.title.clone(),
            description: self.description.clone(),
            tags: self.tags.clone(),
            category_ids: vec![],
            goal_relevance_ids: vec![],
            difficulty_level: DifficultyLevel::easiest(),
            estimated_time: "variable".to_string(),
            author: Some(self.author_name.clone()),
            publish_date: Some(self.submission_date),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_type_parse_accepts_known_values() {
        assert_eq!(ContentType::parse("article"), Some(ContentType::Article));
        assert_eq!(
            ContentType::parse("interactive_simulation"),
            Some(ContentType::InteractiveSimulation)
        );
        assert_eq!(ContentType::parse(" Video "), Some(ContentType::Video));
    }

    #[test]
    fn content_type_parse_rejects_unknown_values() {
        assert_eq!(ContentType::parse("podcast"), None);
        assert_eq!(ContentType::parse(""), None);
    }

    #[test]
    fn moderation_status_serializes_snake_case() {
        let json = serde_json::to_string(&ModerationStatus::PendingApproval)
            .expect("status should serialize");
        assert_eq!(json, "\"pending_approval\"");
    }

    #[test]
    fn to_library_item_defaults_taxonomy_and_difficulty() {
        let ugc = UserGeneratedContent {
            id: "ugc-1".to_string(),
            author_id: "u1".to_string(),
            author_name: "Sara".to_string(),
            content_type: ContentType::Article,
            title: "My study notes".to_string(),
            description: "Notes from last week".to_string(),
            content: "…".to_string(),
            tags: vec!["notes".to_string()],
            submission_date: Utc::now(),
            status: ModerationStatus::Approved,
        };

        let item = ugc.to_library_item();
        assert_eq!(item.id, "ugc-1");
        assert!(item.category_ids.is_empty());
        assert!(item.goal_relevance_ids.is_empty());
        assert_eq!(item.difficulty_level, DifficultyLevel::Beginner);
        assert_eq!(item.estimated_time, "variable");
        assert_eq!(item.author.as_deref(), Some("Sara"));
        assert_eq!(item.publish_date, Some(ugc.submission_date));
    }
}
