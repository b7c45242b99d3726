pub mod discovery_service;
pub mod progress_service;
pub mod quiz_engine;
pub mod snippet;

pub use discovery_service::DiscoveryService;
pub use progress_service::{LevelPolicy, PointThresholdPolicy, ProgressService};
pub use quiz_engine::{AttemptPhase, QuizAttempt};
