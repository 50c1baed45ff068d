//! In-memory study session state

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::algorithm::Rating;
use crate::vocab::Word;

/// Counters reported at the end of a session
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub total: usize,
    pub answered: usize,
    pub correct: usize,
    pub incorrect: usize,
    pub xp_earned: u32,
}

/// One pass over a study queue
///
/// Holds the queue and a cursor plus per-session counters. Persistence is
/// the caller's job: record an answer here and submit the matching review
/// to the store.
#[derive(Debug, Clone)]
pub struct StudySession {
    queue: Vec<Word>,
    position: usize,
    correct: usize,
    incorrect: usize,
    xp_earned: u32,
    started_at: DateTime<Utc>,
}

impl StudySession {
    pub fn new(queue: Vec<Word>, started_at: DateTime<Utc>) -> Self {
        Self {
            queue,
            position: 0,
            correct: 0,
            incorrect: 0,
            xp_earned: 0,
            started_at,
        }
    }

    /// The word currently shown, or None once the queue is exhausted
    pub fn current(&self) -> Option<&Word> {
        self.queue.get(self.position)
    }

    pub fn is_finished(&self) -> bool {
        self.position >= self.queue.len()
    }

    pub fn remaining(&self) -> usize {
        self.queue.len().saturating_sub(self.position)
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Record an answer for the current word and advance the cursor
    ///
    /// No-op once the session is finished.
    pub fn record(&mut self, rating: Rating) {
        if self.is_finished() {
            return;
        }
        match rating {
            Rating::Again => self.incorrect += 1,
            _ => self.correct += 1,
        }
        self.xp_earned += rating.xp();
        self.position += 1;
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            total: self.queue.len(),
            answered: self.position,
            correct: self.correct,
            incorrect: self.incorrect,
            xp_earned: self.xp_earned,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, 12, 0, 0).unwrap()
    }

    fn words(n: usize) -> Vec<Word> {
        (0..n)
            .map(|i| Word::new(format!("w{}", i), String::new(), String::new(), at()))
            .collect()
    }

    #[test]
    fn answers_sum_to_queue_length() {
        let mut session = StudySession::new(words(3), at());
        session.record(Rating::Good);
        session.record(Rating::Again);
        session.record(Rating::Easy);

        assert!(session.is_finished());
        let summary = session.summary();
        assert_eq!(summary.correct + summary.incorrect, 3);
        assert_eq!(summary.correct, 2);
        assert_eq!(summary.incorrect, 1);
    }

    #[test]
    fn xp_accumulates_per_rating() {
        let mut session = StudySession::new(words(3), at());
        session.record(Rating::Again);
        session.record(Rating::Hard);
        session.record(Rating::Easy);
        assert_eq!(session.summary().xp_earned, 0 + 5 + 15);
    }

    #[test]
    fn record_after_finish_is_ignored() {
        let mut session = StudySession::new(words(1), at());
        session.record(Rating::Good);
        session.record(Rating::Good);

        let summary = session.summary();
        assert_eq!(summary.answered, 1);
        assert_eq!(summary.correct, 1);
    }

    #[test]
    fn cursor_walks_the_queue_in_order() {
        let mut session = StudySession::new(words(2), at());
        assert_eq!(session.current().unwrap().term, "w0");
        assert_eq!(session.remaining(), 2);
        session.record(Rating::Good);
        assert_eq!(session.current().unwrap().term, "w1");
        session.record(Rating::Good);
        assert!(session.current().is_none());
    }
}
