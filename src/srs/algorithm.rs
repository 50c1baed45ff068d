//! Level-based spaced repetition scheduling
//!
//! Each word carries an SRS level from 0 (new) to 5 (mastered). A correct
//! review advances the level one step; an incorrect review drops the word
//! back to level 1 ("relearning"), never to 0. The next review time comes
//! from a fixed level → interval table.
//!
//! All functions take the review time explicitly so they stay pure and
//! deterministic under test.

use chrono::{DateTime, Duration, Utc};

/// Lowest level: a word that has never been promoted
pub const MIN_LEVEL: u8 = 0;

/// Highest level: mastered
pub const MAX_LEVEL: u8 = 5;

/// Level a word falls back to on an incorrect answer
pub const RELEARN_LEVEL: u8 = 1;

/// Grading signal for a single review
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewOutcome {
    Correct,
    Incorrect,
}

/// Four-point rating used by the study flow
///
/// Ratings are a policy layer over [`ReviewOutcome`]: Again is a failure,
/// the other three are successes with different interval multipliers and
/// XP amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rating {
    Again,
    Hard,
    Good,
    Easy,
}

impl Rating {
    pub fn outcome(self) -> ReviewOutcome {
        match self {
            Rating::Again => ReviewOutcome::Incorrect,
            Rating::Hard | Rating::Good | Rating::Easy => ReviewOutcome::Correct,
        }
    }

    /// Multiplier applied to the success interval
    pub fn interval_multiplier(self) -> f64 {
        match self {
            Rating::Again => 1.0,
            Rating::Hard => 0.5,
            Rating::Good => 1.0,
            Rating::Easy => 2.0,
        }
    }

    /// XP awarded for a review with this rating
    pub fn xp(self) -> u32 {
        match self {
            Rating::Again => 0,
            Rating::Hard => 5,
            Rating::Good => 10,
            Rating::Easy => 15,
        }
    }

    /// Parse a study-prompt answer: "1".."4", or "y"/"n" shorthand
    /// (y = Good, n = Again)
    pub fn parse(input: &str) -> Option<Rating> {
        match input.trim().to_lowercase().as_str() {
            "1" | "again" => Some(Rating::Again),
            "2" | "hard" => Some(Rating::Hard),
            "3" | "good" | "y" => Some(Rating::Good),
            "4" | "easy" => Some(Rating::Easy),
            "n" => Some(Rating::Again),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Rating::Again => "again",
            Rating::Hard => "hard",
            Rating::Good => "good",
            Rating::Easy => "easy",
        }
    }
}

/// Result of evaluating one review
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReviewResult {
    pub srs_level: u8,
    pub next_review_at: DateTime<Utc>,
}

/// Review interval for a level
///
/// The table is monotonically increasing; levels above [`MAX_LEVEL`] are
/// clamped down.
pub fn interval(level: u8) -> Duration {
    match level {
        0 => Duration::zero(),
        1 => Duration::hours(4),
        2 => Duration::hours(8),
        3 => Duration::hours(24),
        4 => Duration::days(3),
        _ => Duration::days(7),
    }
}

/// Evaluate a boolean review outcome
///
/// Correct: advance one level, clamped to [`MAX_LEVEL`]. Incorrect: reset
/// to [`RELEARN_LEVEL`] regardless of the prior level. The next review
/// time is `now` plus the new level's interval.
pub fn evaluate(srs_level: u8, outcome: ReviewOutcome, now: DateTime<Utc>) -> ReviewResult {
    let srs_level = srs_level.min(MAX_LEVEL);

    let new_level = match outcome {
        ReviewOutcome::Correct => (srs_level + 1).min(MAX_LEVEL),
        ReviewOutcome::Incorrect => RELEARN_LEVEL,
    };

    ReviewResult {
        srs_level: new_level,
        next_review_at: now + interval(new_level),
    }
}

/// Evaluate a four-point rating
///
/// Same level transition as [`evaluate`]; on success the interval is
/// scaled by the rating's multiplier, floored at the relearning interval
/// so schedules never invert.
pub fn evaluate_rated(srs_level: u8, rating: Rating, now: DateTime<Utc>) -> ReviewResult {
    let result = evaluate(srs_level, rating.outcome(), now);

    if rating.outcome() == ReviewOutcome::Incorrect {
        return result;
    }

    let base = interval(result.srs_level);
    let scaled_ms = (base.num_milliseconds() as f64 * rating.interval_multiplier()) as i64;
    let scaled = Duration::milliseconds(scaled_ms).max(interval(RELEARN_LEVEL));

    ReviewResult {
        srs_level: result.srs_level,
        next_review_at: now + scaled,
    }
}

/// Preview the next-review delay for each rating option
///
/// Returned in rating order: Again, Hard, Good, Easy.
pub fn preview_intervals(srs_level: u8, now: DateTime<Utc>) -> [Duration; 4] {
    [Rating::Again, Rating::Hard, Rating::Good, Rating::Easy]
        .map(|rating| evaluate_rated(srs_level, rating, now).next_review_at - now)
}

/// Format an interval as a short human-readable string
pub fn format_interval(interval: Duration) -> String {
    let hours = interval.num_hours();
    if hours < 1 {
        "now".to_string()
    } else if hours < 24 {
        format!("{}h", hours)
    } else if hours < 24 * 7 {
        format!("{}d", hours / 24)
    } else {
        format!("{}w", hours / (24 * 7))
    }
}
