//! Terminal rendering helpers

use chrono::{DateTime, Utc};

use kotoba_lib::furigana;
use kotoba_lib::srs::algorithm::format_interval;
use kotoba_lib::vocab::Word;

/// ANSI color codes
#[allow(dead_code)]
pub struct Color;

#[allow(dead_code)]
impl Color {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const MAGENTA: &str = "\x1b[35m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";
}

/// Term with bracket furigana, e.g. `食【た】べる`
///
/// Kana-only terms render as themselves.
pub fn ruby(word: &Word) -> String {
    furigana::format_ruby(&furigana::align(&word.term, &word.reading))
}

/// When a word is next due, relative to `now`
pub fn due_in(word: &Word, now: DateTime<Utc>) -> String {
    if word.is_due(now) {
        "due now".to_string()
    } else {
        format!("due in {}", format_interval(word.next_review_at - now))
    }
}

/// One summary line for list output
pub fn word_line(word: &Word, now: DateTime<Utc>, use_color: bool) -> String {
    let due = due_in(word, now);
    if use_color {
        let due_color = if word.is_due(now) {
            Color::YELLOW
        } else {
            Color::GRAY
        };
        format!(
            "{}{}{}  {}  {}L{}{}  {}{}{}",
            Color::BOLD,
            ruby(word),
            Color::RESET,
            word.meaning,
            Color::CYAN,
            word.srs_level,
            Color::RESET,
            due_color,
            due,
            Color::RESET,
        )
    } else {
        format!("{}  {}  L{}  {}", ruby(word), word.meaning, word.srs_level, due)
    }
}

/// Bold heading when colors are on
pub fn heading(text: &str, use_color: bool) -> String {
    if use_color {
        format!("{}{}{}", Color::BOLD, text, Color::RESET)
    } else {
        text.to_string()
    }
}
