use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct UserProgress {
    /// Cumulative reward points; never decreases.
    pub points: u32,
    pub level: u32,
    pub level_name_fa: String,
}

impl Default for UserProgress {
    fn default() -> Self {
        Self {
            points: 0,
            level: 1,
            level_name_fa: "نوآموز".to_string(),
        }
    }
}

/// Machine-evaluable unlock condition; `condition_text` on [`Badge`] is the
/// display copy and may describe conditions the engine cannot evaluate.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BadgeCondition {
    PointsAtLeast { points: u32 },
    ModulesCompletedAtLeast { count: u32 },
    PathCompleted { path_id: String },
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Badge {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Set exactly once; an earned badge is never un-earned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub earned_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<BadgeCondition>,
}

impl Badge {
    pub fn is_earned(&self) -> bool {
        self.earned_date.is_some()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct WeeklyChallenge {
    pub id: String,
    pub title: String,
    pub description: String,
    pub points: u32,
    pub deadline: DateTime<Utc>,
}

impl WeeklyChallenge {
    /// Time left before the deadline, clamped to zero once it has passed.
    /// Pure computation; the view calls this on demand instead of running
    /// a countdown timer.
    pub fn time_remaining(&self, now: DateTime<Utc>) -> Duration {
        (self.deadline - now).max(Duration::zero())
    }
}
