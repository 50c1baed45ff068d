//! Word store: CRUD, reviews, and statistics over a repository

use chrono::{DateTime, Local, NaiveDate, Utc};
use uuid::Uuid;

use super::models::*;
use crate::srs::algorithm::{Rating, ReviewOutcome};
use crate::srs::queue::{self, QueueLimits};
use crate::srs::stats;
use crate::storage::{ProfileStore, Result, WordRepository};

/// The word collection behind a repository
///
/// All mutation of SRS state funnels through [`WordStore::review`] /
/// [`WordStore::review_rated`]; edits only touch content fields.
pub struct WordStore<R> {
    repo: R,
}

impl<R: WordRepository + ProfileStore> WordStore<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    // ==================== Word Operations ====================

    /// Add a new word; it is due immediately
    pub fn add(&self, request: CreateWordRequest, now: DateTime<Utc>) -> Result<Word> {
        let mut word = Word::new(request.term, request.reading, request.meaning, now);
        word.kind = request.kind;
        word.tags = request.tags;

        self.repo.put(&word)?;
        log::info!("Added {} word {}", word.kind.label(), word.term);
        Ok(word)
    }

    pub fn get(&self, id: Uuid) -> Result<Option<Word>> {
        self.repo.get(id)
    }

    pub fn list(&self) -> Result<Vec<Word>> {
        self.repo.list()
    }

    /// Edit content fields; returns None when the id no longer exists
    pub fn update(&self, id: Uuid, updates: UpdateWordRequest) -> Result<Option<Word>> {
        let Some(mut word) = self.repo.get(id)? else {
            return Ok(None);
        };

        if let Some(term) = updates.term {
            word.term = term;
        }
        if let Some(reading) = updates.reading {
            word.reading = reading;
        }
        if let Some(meaning) = updates.meaning {
            word.meaning = meaning;
        }
        if let Some(kind) = updates.kind {
            word.kind = kind;
        }
        if let Some(tags) = updates.tags {
            word.tags = tags;
        }

        self.repo.put(&word)?;
        Ok(Some(word))
    }

    pub fn delete(&self, id: Uuid) -> Result<bool> {
        self.repo.delete(id)
    }

    // ==================== Review Operations ====================

    /// Apply a boolean review outcome and persist the result
    ///
    /// Returns None when the id no longer exists; callers must check.
    pub fn review(
        &self,
        id: Uuid,
        outcome: ReviewOutcome,
        now: DateTime<Utc>,
    ) -> Result<Option<Word>> {
        let Some(word) = self.repo.get(id)? else {
            return Ok(None);
        };

        let updated = word.reviewed(outcome, now);
        self.repo.put(&updated)?;
        Ok(Some(updated))
    }

    /// Apply a four-point rating; returns the updated word and XP earned
    pub fn review_rated(
        &self,
        id: Uuid,
        rating: Rating,
        now: DateTime<Utc>,
    ) -> Result<Option<(Word, u32)>> {
        let Some(word) = self.repo.get(id)? else {
            return Ok(None);
        };

        let updated = word.reviewed_rated(rating, now);
        self.repo.put(&updated)?;
        Ok(Some((updated, rating.xp())))
    }

    /// All due words at `now`, in store order
    pub fn due(&self, now: DateTime<Utc>) -> Result<Vec<Word>> {
        Ok(queue::due_words(&self.repo.list()?, now))
    }

    /// Assemble a study queue (due reviews first, then capped new words)
    pub fn study_queue(
        &self,
        now: DateTime<Utc>,
        limits: QueueLimits,
        shuffle: bool,
    ) -> Result<Vec<Word>> {
        Ok(queue::build_queue(&self.repo.list()?, now, limits, shuffle))
    }

    // ==================== Statistics ====================

    /// Compute statistics; storage failures degrade to zeroed stats
    pub fn stats(&self, now: DateTime<Local>) -> UserStats {
        let words = self.repo.list().unwrap_or_else(|e| {
            log::warn!("Falling back to empty collection for stats: {}", e);
            Vec::new()
        });
        let profile = self.repo.load_profile();
        stats::compute_stats(&words, &profile, now)
    }

    pub fn profile(&self) -> StudyProfile {
        self.repo.load_profile()
    }

    /// Record that `today` was studied; at most one increment per day
    pub fn mark_studied(&self, today: NaiveDate) -> Result<StudyProfile> {
        let mut profile = self.repo.load_profile();
        if stats::mark_studied(&mut profile, today) {
            self.repo.save_profile(&profile)?;
        }
        Ok(profile)
    }

    /// Add earned XP to the profile
    pub fn add_xp(&self, amount: u32) -> Result<StudyProfile> {
        let mut profile = self.repo.load_profile();
        profile.total_xp += amount;
        self.repo.save_profile(&profile)?;
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use chrono::{Duration, TimeZone};

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, 12, 0, 0).unwrap()
    }

    fn store() -> WordStore<MemoryStore> {
        WordStore::new(MemoryStore::new())
    }

    fn request(term: &str) -> CreateWordRequest {
        CreateWordRequest {
            term: term.to_string(),
            reading: "よみ".to_string(),
            meaning: "meaning".to_string(),
            kind: WordKind::Vocabulary,
            tags: Vec::new(),
        }
    }

    #[test]
    fn new_words_are_immediately_due() {
        let store = store();
        let now = at();
        let word = store.add(request("勉強"), now).unwrap();

        assert_eq!(word.srs_level, 0);
        assert_eq!(word.next_review_at, now);
        assert_eq!(store.due(now).unwrap().len(), 1);
    }

    #[test]
    fn review_walks_the_interval_table() {
        let store = store();
        let now = at();
        let word = store.add(request("漢字"), now).unwrap();

        // Correct: level 1, due in 4 hours
        let word = store
            .review(word.id, ReviewOutcome::Correct, now)
            .unwrap()
            .unwrap();
        assert_eq!(word.srs_level, 1);
        assert_eq!(word.next_review_at, now + Duration::hours(4));

        // Correct again: level 2, due in 8 hours
        let later = now + Duration::hours(4);
        let word = store
            .review(word.id, ReviewOutcome::Correct, later)
            .unwrap()
            .unwrap();
        assert_eq!(word.srs_level, 2);
        assert_eq!(word.next_review_at, later + Duration::hours(8));

        // Incorrect: back to level 1, due in 4 hours
        let even_later = later + Duration::hours(8);
        let word = store
            .review(word.id, ReviewOutcome::Incorrect, even_later)
            .unwrap()
            .unwrap();
        assert_eq!(word.srs_level, 1);
        assert_eq!(word.next_review_at, even_later + Duration::hours(4));
    }

    #[test]
    fn counters_account_for_every_review() {
        let store = store();
        let now = at();
        let word = store.add(request("数"), now).unwrap();

        store.review(word.id, ReviewOutcome::Correct, now).unwrap();
        store.review(word.id, ReviewOutcome::Incorrect, now).unwrap();
        store.review(word.id, ReviewOutcome::Correct, now).unwrap();

        let word = store.get(word.id).unwrap().unwrap();
        assert_eq!(word.correct_count, 2);
        assert_eq!(word.incorrect_count, 1);
        assert_eq!(word.total_reviews(), 3);
        assert_eq!(word.last_reviewed_at, Some(now));
    }

    #[test]
    fn review_of_unknown_id_signals_not_found() {
        let store = store();
        let result = store
            .review(Uuid::new_v4(), ReviewOutcome::Correct, at())
            .unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn rated_review_reports_xp() {
        let store = store();
        let now = at();
        let word = store.add(request("点"), now).unwrap();

        let (updated, xp) = store
            .review_rated(word.id, Rating::Easy, now)
            .unwrap()
            .unwrap();
        assert_eq!(xp, 15);
        assert_eq!(updated.srs_level, 1);
        // Easy doubles the 4h base interval
        assert_eq!(updated.next_review_at, now + Duration::hours(8));
    }

    #[test]
    fn update_touches_content_but_not_srs_state() {
        let store = store();
        let now = at();
        let word = store.add(request("旧"), now).unwrap();
        let word = store
            .review(word.id, ReviewOutcome::Correct, now)
            .unwrap()
            .unwrap();

        let updated = store
            .update(
                word.id,
                UpdateWordRequest {
                    meaning: Some("old".to_string()),
                    tags: Some(vec!["n5".to_string()]),
                    ..Default::default()
                },
            )
            .unwrap()
            .unwrap();

        assert_eq!(updated.meaning, "old");
        assert_eq!(updated.tags, vec!["n5"]);
        assert_eq!(updated.srs_level, word.srs_level);
        assert_eq!(updated.next_review_at, word.next_review_at);
    }

    #[test]
    fn stats_reflect_profile_and_collection() {
        let store = store();
        let now = at();
        let word = store.add(request("統計"), now).unwrap();
        store.review(word.id, ReviewOutcome::Correct, now).unwrap();

        let today = Local.with_ymd_and_hms(2026, 3, 14, 12, 0, 0).unwrap();
        store.mark_studied(today.date_naive()).unwrap();
        store.add_xp(25).unwrap();

        let stats = store.stats(today);
        assert_eq!(stats.total_words, 1);
        assert_eq!(stats.success_rate, 100);
        assert_eq!(stats.streak_days, 1);
        assert_eq!(stats.total_xp, 25);
    }
}
