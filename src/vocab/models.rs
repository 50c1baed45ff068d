//! Data models for the vocabulary collection

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::srs::algorithm::{self, Rating, ReviewOutcome};

/// What kind of learning item a word is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WordKind {
    Vocabulary,
    Kanji,
    Grammar,
}

impl Default for WordKind {
    fn default() -> Self {
        Self::Vocabulary
    }
}

impl WordKind {
    pub fn label(&self) -> &'static str {
        match self {
            WordKind::Vocabulary => "vocabulary",
            WordKind::Kanji => "kanji",
            WordKind::Grammar => "grammar",
        }
    }
}

/// A learning item: a vocabulary word, kanji, or grammar point
///
/// Carries its own SRS state. The scheduling fields (`srs_level`,
/// `next_review_at`, counters, `last_reviewed_at`) only change through
/// [`Word::reviewed`] / [`Word::reviewed_rated`]; edits touch content
/// fields only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Word {
    pub id: Uuid,
    /// Prompt text shown during study (usually the written form)
    pub term: String,
    /// Kana reading
    pub reading: String,
    pub meaning: String,
    #[serde(default)]
    pub kind: WordKind,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Current SRS level, 0 (new) ..= 5 (mastered)
    #[serde(default)]
    pub srs_level: u8,
    /// When the word next becomes due
    pub next_review_at: DateTime<Utc>,
    #[serde(default)]
    pub correct_count: u32,
    #[serde(default)]
    pub incorrect_count: u32,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_reviewed_at: Option<DateTime<Utc>>,
}

impl Word {
    /// Create a new word, due immediately
    pub fn new(term: String, reading: String, meaning: String, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            term,
            reading,
            meaning,
            kind: WordKind::default(),
            tags: Vec::new(),
            srs_level: algorithm::MIN_LEVEL,
            next_review_at: now,
            correct_count: 0,
            incorrect_count: 0,
            created_at: now,
            last_reviewed_at: None,
        }
    }

    /// Check whether the word is due at `now` (boundary inclusive)
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.next_review_at <= now
    }

    /// A word that has never been reviewed
    pub fn is_new(&self) -> bool {
        self.total_reviews() == 0
    }

    pub fn total_reviews(&self) -> u32 {
        self.correct_count + self.incorrect_count
    }

    /// Apply a boolean review outcome, returning the updated word
    pub fn reviewed(&self, outcome: ReviewOutcome, now: DateTime<Utc>) -> Word {
        let result = algorithm::evaluate(self.srs_level, outcome, now);
        self.with_review(result, outcome, now)
    }

    /// Apply a four-point rating, returning the updated word
    pub fn reviewed_rated(&self, rating: Rating, now: DateTime<Utc>) -> Word {
        let result = algorithm::evaluate_rated(self.srs_level, rating, now);
        self.with_review(result, rating.outcome(), now)
    }

    fn with_review(
        &self,
        result: algorithm::ReviewResult,
        outcome: ReviewOutcome,
        now: DateTime<Utc>,
    ) -> Word {
        let mut word = self.clone();
        word.srs_level = result.srs_level;
        word.next_review_at = result.next_review_at;
        word.last_reviewed_at = Some(now);
        match outcome {
            ReviewOutcome::Correct => word.correct_count += 1,
            ReviewOutcome::Incorrect => word.incorrect_count += 1,
        }
        word
    }
}

/// Request to add a new word
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWordRequest {
    pub term: String,
    pub reading: String,
    pub meaning: String,
    #[serde(default)]
    pub kind: WordKind,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Request to edit a word's content fields
///
/// SRS state is deliberately absent; it moves only through reviews.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWordRequest {
    pub term: Option<String>,
    pub reading: Option<String>,
    pub meaning: Option<String>,
    pub kind: Option<WordKind>,
    pub tags: Option<Vec<String>>,
}

/// Persisted study-day state
///
/// The one piece of statistics that cannot be rebuilt from the word
/// collection: which calendar day was last studied and how long the
/// current streak is.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyProfile {
    #[serde(default)]
    pub streak_days: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_studied_on: Option<NaiveDate>,
    #[serde(default)]
    pub total_xp: u32,
}

/// Derived statistics over the collection
///
/// Never persisted; rebuilt on demand from the words plus the profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub total_words: usize,
    pub words_due_today: usize,
    /// Rounded percentage of correct answers across all words, 0 with no
    /// reviews
    pub success_rate: u32,
    pub streak_days: u32,
    pub total_xp: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_studied_on: Option<NaiveDate>,
    /// Word counts per SRS level, index 0 ..= 5
    pub level_counts: [usize; 6],
}
