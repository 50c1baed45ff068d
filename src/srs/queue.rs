//! Due-word selection and study queue assembly

use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;

use crate::vocab::Word;

/// Per-session queue limits, usually taken from the app config
#[derive(Debug, Clone, Copy)]
pub struct QueueLimits {
    /// Maximum previously-seen words per session
    pub max_reviews: usize,
    /// Maximum never-reviewed words per session
    pub max_new: usize,
}

/// All words due at `now`, in store order
///
/// The boundary is inclusive: a word whose `next_review_at` equals `now`
/// is due. No ordering beyond "due" is guaranteed; callers shuffle or
/// sort as they see fit.
pub fn due_words(words: &[Word], now: DateTime<Utc>) -> Vec<Word> {
    words.iter().filter(|w| w.is_due(now)).cloned().collect()
}

/// Assemble a study queue: due review words first, then new words
///
/// New words are due from the moment they are added, so they are split
/// out of the due set and capped separately; a large backlog of fresh
/// additions should not crowd out scheduled reviews.
pub fn build_queue(
    words: &[Word],
    now: DateTime<Utc>,
    limits: QueueLimits,
    shuffle: bool,
) -> Vec<Word> {
    let mut reviews = Vec::new();
    let mut fresh = Vec::new();

    for word in words.iter().filter(|w| w.is_due(now)) {
        if word.is_new() {
            fresh.push(word.clone());
        } else {
            reviews.push(word.clone());
        }
    }

    if shuffle {
        let mut rng = rand::thread_rng();
        reviews.shuffle(&mut rng);
        fresh.shuffle(&mut rng);
    }

    reviews.truncate(limits.max_reviews);
    fresh.truncate(limits.max_new);

    reviews.extend(fresh);
    reviews
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, 12, 0, 0).unwrap()
    }

    fn word(term: &str, next_review_at: DateTime<Utc>) -> Word {
        let mut w = Word::new(
            term.to_string(),
            String::new(),
            String::new(),
            at() - Duration::days(1),
        );
        w.next_review_at = next_review_at;
        w
    }

    #[test]
    fn due_is_exactly_the_elapsed_subset() {
        let now = at();
        let words = vec![
            word("past", now - Duration::hours(1)),
            word("boundary", now),
            word("future", now + Duration::seconds(1)),
        ];

        let due = due_words(&words, now);
        let terms: Vec<&str> = due.iter().map(|w| w.term.as_str()).collect();
        assert_eq!(terms, vec!["past", "boundary"]);
    }

    #[test]
    fn due_preserves_store_order() {
        let now = at();
        let words = vec![
            word("c", now - Duration::hours(3)),
            word("a", now - Duration::hours(1)),
            word("b", now - Duration::hours(2)),
        ];

        let due = due_words(&words, now);
        let terms: Vec<&str> = due.iter().map(|w| w.term.as_str()).collect();
        assert_eq!(terms, vec!["c", "a", "b"]);
    }

    #[test]
    fn queue_caps_new_words_separately() {
        let now = at();
        let mut words = Vec::new();
        for i in 0..5 {
            // Seen before: one prior correct answer
            let mut w = word(&format!("seen{}", i), now - Duration::hours(1));
            w.correct_count = 1;
            words.push(w);
        }
        for i in 0..5 {
            words.push(word(&format!("new{}", i), now));
        }

        let queue = build_queue(
            &words,
            now,
            QueueLimits {
                max_reviews: 3,
                max_new: 2,
            },
            false,
        );

        assert_eq!(queue.len(), 5);
        assert!(queue[..3].iter().all(|w| w.term.starts_with("seen")));
        assert!(queue[3..].iter().all(|w| w.term.starts_with("new")));
    }

    #[test]
    fn queue_excludes_words_not_due() {
        let now = at();
        let words = vec![word("later", now + Duration::hours(1))];
        let queue = build_queue(
            &words,
            now,
            QueueLimits {
                max_reviews: 10,
                max_new: 10,
            },
            false,
        );
        assert!(queue.is_empty());
    }
}
