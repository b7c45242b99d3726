use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};
use crate::models::domain::{
    Badge, Category, LearningContent, LearningPath, ModerationStatus, UserGeneratedContent,
    UserProgress,
};

/// Data collaborator for the current session. The engine reads the learning
/// snapshot through this trait and writes progress, point, badge, and
/// submission updates back through it.
#[cfg_attr(test, mockall::automock)]
pub trait LearningRepository: Send + Sync {
    fn categories(&self) -> AppResult<Vec<Category>>;
    fn learning_paths(&self) -> AppResult<Vec<LearningPath>>;
    fn find_path(&self, path_id: &str) -> AppResult<Option<LearningPath>>;
    fn learning_content(&self) -> AppResult<Vec<LearningContent>>;
    fn user_generated_content(&self) -> AppResult<Vec<UserGeneratedContent>>;
    fn badges(&self) -> AppResult<Vec<Badge>>;
    fn user_progress(&self) -> AppResult<UserProgress>;

    fn update_path(&self, path: LearningPath) -> AppResult<LearningPath>;
    fn update_user_progress(&self, progress: UserProgress) -> AppResult<UserProgress>;
    fn update_badge(&self, badge: Badge) -> AppResult<Badge>;
    fn insert_user_content(
        &self,
        item: UserGeneratedContent,
    ) -> AppResult<UserGeneratedContent>;
    fn update_user_content_status(
        &self,
        id: &str,
        status: ModerationStatus,
    ) -> AppResult<UserGeneratedContent>;
}

/// Everything the data collaborator supplies for one user session.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct SessionSnapshot {
    pub categories: Vec<Category>,
    pub paths: Vec<LearningPath>,
    pub content: Vec<LearningContent>,
    pub user_content: Vec<UserGeneratedContent>,
    pub badges: Vec<Badge>,
    pub progress: UserProgress,
}

/// In-memory store backing [`LearningRepository`]; state lives only for the
/// session, persistence is the collaborator's concern.
pub struct InMemoryLearningRepository {
    inner: RwLock<SessionSnapshot>,
}

impl InMemoryLearningRepository {
    pub fn new(snapshot: SessionSnapshot) -> Self {
        Self {
            inner: RwLock::new(snapshot),
        }
    }

    fn read(&self) -> AppResult<RwLockReadGuard<'_, SessionSnapshot>> {
        self.inner
            .read()
            .map_err(|_| AppError::InternalError("session state lock poisoned".to_string()))
    }

    fn write(&self) -> AppResult<RwLockWriteGuard<'_, SessionSnapshot>> {
        self.inner
            .write()
            .map_err(|_| AppError::InternalError("session state lock poisoned".to_string()))
    }
}

impl Default for InMemoryLearningRepository {
    fn default() -> Self {
        Self::new(SessionSnapshot::default())
    }
}

impl LearningRepository for InMemoryLearningRepository {
    fn categories(&self) -> AppResult<Vec<Category>> {
        Ok(self.read()?.categories.clone())
    }

    fn learning_paths(&self) -> AppResult<Vec<LearningPath>> {
        Ok(self.read()?.paths.clone())
    }

    fn find_path(&self, path_id: &str) -> AppResult<Option<LearningPath>> {
        Ok(self.read()?.paths.iter().find(|p| p.id == path_id).cloned())
    }

    fn learning_content(&self) -> AppResult<Vec<LearningContent>> {
        Ok(self.read()?.content.clone())
    }

    fn user_generated_content(&self) -> AppResult<Vec<UserGeneratedContent>> {
        Ok(self.read()?.user_content.clone())
    }

    fn badges(&self) -> AppResult<Vec<Badge>> {
        Ok(self.read()?.badges.clone())
    }

    fn user_progress(&self) -> AppResult<UserProgress> {
        Ok(self.read()?.progress.clone())
    }

    fn update_path(&self, path: LearningPath) -> AppResult<LearningPath> {
        let mut state = self.write()?;
        let slot = state
            .paths
            .iter_mut()
            .find(|p| p.id == path.id)
            .ok_or_else(|| AppError::NotFound(format!("Path with id '{}' not found", path.id)))?;
        *slot = path.clone();
        Ok(path)
    }

    fn update_user_progress(&self, progress: UserProgress) -> AppResult<UserProgress> {
        let mut state = self.write()?;
        if progress.points < state.progress.points {
            return Err(AppError::InvalidState(format!(
                "points may not decrease ({} -> {})",
                state.progress.points, progress.points
            )));
        }
        state.progress = progress.clone();
        Ok(progress)
    }

    fn update_badge(&self, badge: Badge) -> AppResult<Badge> {
        let mut state = self.write()?;
        let slot = state
            .badges
            .iter_mut()
            .find(|b| b.id == badge.id)
            .ok_or_else(|| AppError::NotFound(format!("Badge with id '{}' not found", badge.id)))?;
        if slot.earned_date.is_some() && badge.earned_date.is_none() {
            return Err(AppError::InvalidState(format!(
                "badge '{}' is already earned and may not be revoked",
                badge.id
            )));
        }
        *slot = badge.clone();
        Ok(badge)
    }

    fn insert_user_content(
        &self,
        item: UserGeneratedContent,
    ) -> AppResult<UserGeneratedContent> {
        let mut state = self.write()?;
        if state.user_content.iter().any(|c| c.id == item.id) {
            return Err(AppError::ValidationError(format!(
                "Submission with id '{}' already exists",
                item.id
            )));
        }
        state.user_content.push(item.clone());
        Ok(item)
    }

    fn update_user_content_status(
        &self,
        id: &str,
        status: ModerationStatus,
    ) -> AppResult<UserGeneratedContent> {
        let mut state = self.write()?;
        let item = state
            .user_content
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Submission with id '{}' not found", id)))?;
        item.status = status;
        log::debug!("submission '{}' moderated to {:?}", id, status);
        Ok(item.clone())
    }
}
