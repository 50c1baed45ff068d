//! Achievement catalog and unlock records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unlockable study milestones
///
/// The catalog is fixed; unlocks are persisted and never revoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementKind {
    FirstWord,
    Words50,
    Words250,
    FirstReview,
    Reviews100,
    Reviews1000,
    Streak7,
    Streak30,
    Mastered10,
    Mastered50,
    Xp1000,
}

impl AchievementKind {
    pub const ALL: [AchievementKind; 11] = [
        AchievementKind::FirstWord,
        AchievementKind::Words50,
        AchievementKind::Words250,
        AchievementKind::FirstReview,
        AchievementKind::Reviews100,
        AchievementKind::Reviews1000,
        AchievementKind::Streak7,
        AchievementKind::Streak30,
        AchievementKind::Mastered10,
        AchievementKind::Mastered50,
        AchievementKind::Xp1000,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            AchievementKind::FirstWord => "First Steps",
            AchievementKind::Words50 => "Word Collector",
            AchievementKind::Words250 => "Lexicon Builder",
            AchievementKind::FirstReview => "Warming Up",
            AchievementKind::Reviews100 => "Reviewer",
            AchievementKind::Reviews1000 => "Review Machine",
            AchievementKind::Streak7 => "One Week Streak",
            AchievementKind::Streak30 => "One Month Streak",
            AchievementKind::Mastered10 => "Rising Scholar",
            AchievementKind::Mastered50 => "Kotoba Master",
            AchievementKind::Xp1000 => "XP Grinder",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            AchievementKind::FirstWord => "Add your first word",
            AchievementKind::Words50 => "Grow the collection to 50 words",
            AchievementKind::Words250 => "Grow the collection to 250 words",
            AchievementKind::FirstReview => "Complete your first review",
            AchievementKind::Reviews100 => "Complete 100 reviews",
            AchievementKind::Reviews1000 => "Complete 1000 reviews",
            AchievementKind::Streak7 => "Study 7 days in a row",
            AchievementKind::Streak30 => "Study 30 days in a row",
            AchievementKind::Mastered10 => "Bring 10 words to the top level",
            AchievementKind::Mastered50 => "Bring 50 words to the top level",
            AchievementKind::Xp1000 => "Earn 1000 XP",
        }
    }
}

/// A persisted unlock: which achievement, and when it was first earned
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Unlock {
    pub kind: AchievementKind,
    pub unlocked_at: DateTime<Utc>,
}
