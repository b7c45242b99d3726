pub mod content;
pub mod learning_path;
pub mod progress;
pub mod quiz;

pub use content::{Category, ContentType, LearningContent, ModerationStatus, UserGeneratedContent};
pub use learning_path::{DifficultyLevel, LearningModule, LearningPath};
pub use progress::{Badge, BadgeCondition, UserProgress, WeeklyChallenge};
pub use quiz::{OptionFeedback, Quiz, QuizOption, QuizQuestion};
