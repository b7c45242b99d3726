use std::sync::Arc;

use chrono::Utc;
use once_cell::sync::Lazy;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::domain::progress::BadgeCondition;
use crate::models::domain::{Badge, LearningPath, UserProgress};
use crate::models::dto::response::PointAward;
use crate::repositories::LearningRepository;

/// Maps a point total to a level number and display label. The mapping is
/// product policy, not engine logic, so it stays swappable.
pub trait LevelPolicy: Send + Sync {
    fn level_for(&self, points: u32) -> (u32, String);
}

struct LevelTier {
    min_points: u32,
    name_fa: &'static str,
}

static LEVEL_TABLE: Lazy<Vec<LevelTier>> = Lazy::new(|| {
    vec![
        LevelTier { min_points: 0, name_fa: "نوآموز" },
        LevelTier { min_points: 100, name_fa: "کاوشگر" },
        LevelTier { min_points: 250, name_fa: "رهجو" },
        LevelTier { min_points: 500, name_fa: "پیشرو" },
        LevelTier { min_points: 1000, name_fa: "استاد" },
    ]
});

/// Default policy: highest tier whose threshold the point total reaches.
pub struct PointThresholdPolicy;

impl LevelPolicy for PointThresholdPolicy {
    fn level_for(&self, points: u32) -> (u32, String) {
        let index = LEVEL_TABLE
            .iter()
            .rposition(|tier| points >= tier.min_points)
            .unwrap_or(0);
        (index as u32 + 1, LEVEL_TABLE[index].name_fa.to_string())
    }
}

/// Rolls quiz outcomes up into module/path completion and point awards, and
/// settles badge conditions against the updated totals.
pub struct ProgressService {
    repository: Arc<dyn LearningRepository>,
    level_policy: Arc<dyn LevelPolicy>,
    pass_threshold: f64,
}

impl ProgressService {
    pub fn new(repository: Arc<dyn LearningRepository>, config: &Config) -> Self {
        Self {
            repository,
            level_policy: Arc::new(PointThresholdPolicy),
            pass_threshold: config.pass_threshold,
        }
    }

    pub fn with_level_policy(mut self, policy: Arc<dyn LevelPolicy>) -> Self {
        self.level_policy = policy;
        self
    }

    /// Marks the module completed at 100% regardless of score, recomputes
    /// the path's overall progress, and awards the module's points when the
    /// score clears the pass threshold. The returned award (if any) is the
    /// notification event for the view layer.
    ///
    /// Completion and reward are deliberately decoupled: a failing score
    /// still consumes the module. See DESIGN.md.
    pub fn complete_module_quiz(
        &self,
        path_id: &str,
        module_id: &str,
        score: u32,
        total_questions: u32,
    ) -> AppResult<Option<PointAward>> {
        let mut path = self
            .repository
            .find_path(path_id)?
            .ok_or_else(|| AppError::NotFound(format!("Path with id '{}' not found", path_id)))?;

        let module = path
            .modules
            .iter_mut()
            .find(|m| m.id == module_id)
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Module with id '{}' not found in path '{}'",
                    module_id, path_id
                ))
            })?;

        module.completed = true;
        module.progress = 100;
        let module_title = module.title.clone();
        let module_points = module.points;

        // Module update and path roll-up land in one write
        path.recompute_overall_progress();
        self.repository.update_path(path)?;

        log::info!(
            "module '{}' completed with {}/{} in path '{}'",
            module_id,
            score,
            total_questions,
            path_id
        );

        if !self.passes_threshold(score, total_questions) {
            return Ok(None);
        }
        let points = match module_points {
            Some(points) if points > 0 => points,
            _ => return Ok(None),
        };

        let award = self.award_points(
            points,
            &format!("Completed the \"{}\" module quiz", module_title),
        )?;
        Ok(Some(award))
    }

    fn passes_threshold(&self, score: u32, total_questions: u32) -> bool {
        total_questions > 0
            && f64::from(score) / f64::from(total_questions) >= self.pass_threshold
    }

    /// Adds to the cumulative point total, re-derives the level from the
    /// configured policy, and returns the confirmation event.
    pub fn award_points(&self, points: u32, action_description: &str) -> AppResult<PointAward> {
        let mut progress = self.repository.user_progress()?;
        progress.points += points;
        let (level, name_fa) = self.level_policy.level_for(progress.points);
        progress.level = level;
        progress.level_name_fa = name_fa;
        self.repository.update_user_progress(progress)?;

        log::info!("awarded {} points: {}", points, action_description);
        Ok(PointAward {
            points,
            action_description: action_description.to_string(),
        })
    }

    /// Settles every unearned badge with an evaluable condition against the
    /// current totals and returns the ones earned by this pass. Already
    /// earned badges are skipped, so repeated evaluation is idempotent.
    pub fn evaluate_badges(&self) -> AppResult<Vec<Badge>> {
        let progress = self.repository.user_progress()?;
        let paths = self.repository.learning_paths()?;

        let mut newly_earned = Vec::new();
        for badge in self.repository.badges()? {
            if badge.is_earned() {
                continue;
            }
            let Some(condition) = &badge.condition else {
                continue;
            };
            if Self::condition_met(condition, &progress, &paths) {
                let mut earned = badge;
                earned.earned_date = Some(Utc::now());
                let earned = self.repository.update_badge(earned)?;
                log::info!("badge '{}' earned", earned.id);
                newly_earned.push(earned);
            }
        }
        Ok(newly_earned)
    }

    fn condition_met(
        condition: &BadgeCondition,
        progress: &UserProgress,
        paths: &[LearningPath],
    ) -> bool {
        match condition {
            BadgeCondition::PointsAtLeast { points } => progress.points >= *points,
            BadgeCondition::ModulesCompletedAtLeast { count } => {
                let completed: u32 = paths
                    .iter()
                    .flat_map(|p| &p.modules)
                    .filter(|m| m.completed)
                    .count() as u32;
                completed >= *count
            }
            BadgeCondition::PathCompleted { path_id } => paths
                .iter()
                .find(|p| p.id == *path_id)
                .map(|p| p.is_completed())
                .unwrap_or(false),
        }
    }
}
