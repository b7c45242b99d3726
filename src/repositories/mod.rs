pub mod learning_repository;

pub use learning_repository::{InMemoryLearningRepository, LearningRepository, SessionSnapshot};

#[cfg(test)]
pub use learning_repository::MockLearningRepository;
