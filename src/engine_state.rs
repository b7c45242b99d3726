use std::sync::Arc;

use crate::{
    config::Config,
    repositories::{InMemoryLearningRepository, LearningRepository, SessionSnapshot},
    services::{DiscoveryService, ProgressService},
};

/// Wires the session snapshot and services together for the hosting view
/// layer. One instance per user session.
#[derive(Clone)]
pub struct EngineState {
    pub repository: Arc<dyn LearningRepository>,
    pub progress_service: Arc<ProgressService>,
    pub discovery_service: Arc<DiscoveryService>,
    pub config: Arc<Config>,
}

impl EngineState {
    pub fn new(config: Config, snapshot: SessionSnapshot) -> Self {
        let repository: Arc<dyn LearningRepository> =
            Arc::new(InMemoryLearningRepository::new(snapshot));

        let progress_service = Arc::new(ProgressService::new(repository.clone(), &config));
        let discovery_service = Arc::new(DiscoveryService::new(repository.clone(), &config));

        Self {
            repository,
            progress_service,
            discovery_service,
            config: Arc::new(config),
        }
    }
}
