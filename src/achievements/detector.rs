//! Achievement condition checks

use chrono::NaiveDate;

use super::models::AchievementKind;
use crate::srs::algorithm::MAX_LEVEL;
use crate::srs::stats::effective_streak;
use crate::vocab::{StudyProfile, Word};

/// All achievements whose condition holds right now
///
/// Pure check over the collection and profile; diffing against the
/// already-unlocked set is the storage layer's job.
pub fn satisfied(words: &[Word], profile: &StudyProfile, today: NaiveDate) -> Vec<AchievementKind> {
    let total_words = words.len();
    let total_reviews: u64 = words.iter().map(|w| w.total_reviews() as u64).sum();
    let mastered = words.iter().filter(|w| w.srs_level >= MAX_LEVEL).count();
    let streak = effective_streak(profile, today);

    AchievementKind::ALL
        .into_iter()
        .filter(|kind| match kind {
            AchievementKind::FirstWord => total_words >= 1,
            AchievementKind::Words50 => total_words >= 50,
            AchievementKind::Words250 => total_words >= 250,
            AchievementKind::FirstReview => total_reviews >= 1,
            AchievementKind::Reviews100 => total_reviews >= 100,
            AchievementKind::Reviews1000 => total_reviews >= 1000,
            AchievementKind::Streak7 => streak >= 7,
            AchievementKind::Streak30 => streak >= 30,
            AchievementKind::Mastered10 => mastered >= 10,
            AchievementKind::Mastered50 => mastered >= 50,
            AchievementKind::Xp1000 => profile.total_xp >= 1000,
        })
        .collect()
}
