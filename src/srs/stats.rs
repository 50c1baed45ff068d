//! Derived statistics and streak arithmetic
//!
//! Pure functions over the word collection plus the persisted profile.
//! Time comes in as an explicit `DateTime<Local>` so "today" and the
//! local-day due window are deterministic under test.

use chrono::{DateTime, Local, NaiveDate};

use crate::vocab::{StudyProfile, UserStats, Word};

/// Compute user statistics at a given local time
///
/// "Due today" counts words whose next review falls on the local calendar
/// day of `now`, i.e. within `[start of day, start of day + 24h)`.
pub fn compute_stats(words: &[Word], profile: &StudyProfile, now: DateTime<Local>) -> UserStats {
    let today = now.date_naive();

    let mut correct: u64 = 0;
    let mut incorrect: u64 = 0;
    let mut level_counts = [0usize; 6];
    let mut words_due_today = 0;

    for word in words {
        correct += word.correct_count as u64;
        incorrect += word.incorrect_count as u64;

        let level = (word.srs_level as usize).min(level_counts.len() - 1);
        level_counts[level] += 1;

        if word.next_review_at.with_timezone(&Local).date_naive() == today {
            words_due_today += 1;
        }
    }

    let total_reviews = correct + incorrect;
    let success_rate = if total_reviews == 0 {
        0
    } else {
        (100.0 * correct as f64 / total_reviews as f64).round() as u32
    };

    UserStats {
        total_words: words.len(),
        words_due_today,
        success_rate,
        streak_days: effective_streak(profile, today),
        total_xp: profile.total_xp,
        last_studied_on: profile.last_studied_on,
        level_counts,
    }
}

/// Streak as of `today`, applying decay without mutating the profile
///
/// A gap of more than one day since the last studied date breaks the
/// streak; studying yesterday (or already today) carries it forward.
pub fn effective_streak(profile: &StudyProfile, today: NaiveDate) -> u32 {
    match profile.last_studied_on {
        Some(date) if date == today || date.succ_opt() == Some(today) => profile.streak_days,
        _ => 0,
    }
}

/// Mark `today` as studied, incrementing the streak at most once per
/// calendar day
///
/// Returns true when the profile changed. A same-day repeat is a no-op; a
/// lapse of more than one day restarts the streak at 1.
pub fn mark_studied(profile: &mut StudyProfile, today: NaiveDate) -> bool {
    match profile.last_studied_on {
        Some(date) if date == today => false,
        Some(date) if date.succ_opt() == Some(today) => {
            profile.streak_days += 1;
            profile.last_studied_on = Some(today);
            true
        }
        _ => {
            profile.streak_days = 1;
            profile.last_studied_on = Some(today);
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn local_now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 3, 14, 15, 0, 0).unwrap()
    }

    fn word_due_at(at: DateTime<Local>) -> Word {
        let created = Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap();
        let mut w = Word::new("語".to_string(), "ご".to_string(), "word".to_string(), created);
        w.next_review_at = at.with_timezone(&Utc);
        w
    }

    #[test]
    fn empty_store_yields_zeroed_stats() {
        let stats = compute_stats(&[], &StudyProfile::default(), local_now());
        assert_eq!(stats.total_words, 0);
        assert_eq!(stats.words_due_today, 0);
        assert_eq!(stats.success_rate, 0);
        assert_eq!(stats.streak_days, 0);
        assert_eq!(stats.level_counts, [0; 6]);
    }

    #[test]
    fn due_today_uses_the_local_day_window() {
        let now = local_now();
        let start = Local.with_ymd_and_hms(2026, 3, 14, 0, 0, 0).unwrap();
        let words = vec![
            word_due_at(start),
            word_due_at(start + Duration::hours(23) + Duration::minutes(59)),
            word_due_at(start - Duration::seconds(1)),
            word_due_at(start + Duration::hours(24)),
        ];

        let stats = compute_stats(&words, &StudyProfile::default(), now);
        assert_eq!(stats.total_words, 4);
        assert_eq!(stats.words_due_today, 2);
    }

    #[test]
    fn success_rate_rounds_to_whole_percent() {
        let mut one_of_three = word_due_at(local_now());
        one_of_three.correct_count = 1;
        one_of_three.incorrect_count = 2;
        let stats = compute_stats(&[one_of_three], &StudyProfile::default(), local_now());
        assert_eq!(stats.success_rate, 33);

        // 1/8 = 12.5% rounds half-up to 13
        let mut one_of_eight = word_due_at(local_now());
        one_of_eight.correct_count = 1;
        one_of_eight.incorrect_count = 7;
        let stats = compute_stats(&[one_of_eight], &StudyProfile::default(), local_now());
        assert_eq!(stats.success_rate, 13);
    }

    #[test]
    fn success_rate_aggregates_across_words() {
        let mut a = word_due_at(local_now());
        a.correct_count = 3;
        let mut b = word_due_at(local_now());
        b.incorrect_count = 1;

        let stats = compute_stats(&[a, b], &StudyProfile::default(), local_now());
        assert_eq!(stats.success_rate, 75);
    }

    #[test]
    fn streak_carries_for_one_day_then_breaks() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
        let profile = StudyProfile {
            streak_days: 5,
            last_studied_on: Some(today.pred_opt().unwrap()),
            total_xp: 0,
        };
        assert_eq!(effective_streak(&profile, today), 5);

        let lapsed = StudyProfile {
            streak_days: 5,
            last_studied_on: Some(today - Duration::days(2)),
            total_xp: 0,
        };
        assert_eq!(effective_streak(&lapsed, today), 0);
    }

    #[test]
    fn mark_studied_increments_once_per_day() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
        let mut profile = StudyProfile {
            streak_days: 3,
            last_studied_on: Some(today.pred_opt().unwrap()),
            total_xp: 0,
        };

        assert!(mark_studied(&mut profile, today));
        assert_eq!(profile.streak_days, 4);
        assert_eq!(profile.last_studied_on, Some(today));

        // Second mark on the same day changes nothing
        assert!(!mark_studied(&mut profile, today));
        assert_eq!(profile.streak_days, 4);
    }

    #[test]
    fn mark_studied_restarts_after_a_lapse() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
        let mut profile = StudyProfile {
            streak_days: 9,
            last_studied_on: Some(today - Duration::days(3)),
            total_xp: 0,
        };

        assert!(mark_studied(&mut profile, today));
        assert_eq!(profile.streak_days, 1);
    }

    #[test]
    fn first_mark_starts_the_streak() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
        let mut profile = StudyProfile::default();
        assert!(mark_studied(&mut profile, today));
        assert_eq!(profile.streak_days, 1);
    }
}
