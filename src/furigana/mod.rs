//! Heuristic furigana alignment
//!
//! Maps a term containing kanji to its kana reading by anchoring the
//! term's kana runs inside the reading and assigning the spans between
//! anchors to the kanji runs. Ambiguous or contradictory input falls
//! back to a single whole-term annotation rather than guessing.

use wana_kana::{IsJapaneseChar, IsJapaneseStr};

/// One run of the term, optionally annotated with its reading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RubySegment {
    pub text: String,
    /// None for kana runs, which read as themselves
    pub reading: Option<String>,
}

impl RubySegment {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            reading: None,
        }
    }

    fn annotated(text: impl Into<String>, reading: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            reading: Some(reading.into()),
        }
    }
}

/// Align a term with its kana reading into ruby segments
///
/// Kana-only terms (and terms equal to their reading) come back as a
/// single unannotated segment. When the kana anchors cannot be matched
/// against the reading, the whole term is annotated with the whole
/// reading.
pub fn align(term: &str, reading: &str) -> Vec<RubySegment> {
    if term.is_empty() || reading.is_empty() || term == reading || term.is_kana() {
        return vec![RubySegment::plain(term)];
    }

    let reading_chars: Vec<char> = reading.chars().collect();
    let mut segments = Vec::new();
    let mut cursor = 0;
    // Non-kana run waiting for the span up to the next kana anchor
    let mut pending: Option<String> = None;

    for (run, run_is_kana) in split_runs(term) {
        if run_is_kana {
            let anchor: Vec<char> = run.chars().collect();
            let Some(found) = find_from(&reading_chars, &anchor, cursor) else {
                return fallback(term, reading);
            };

            match pending.take() {
                Some(text) => {
                    // A kanji run with no reading span means the anchor
                    // matched too early
                    if found == cursor {
                        return fallback(term, reading);
                    }
                    let span: String = reading_chars[cursor..found].iter().collect();
                    segments.push(RubySegment::annotated(text, span));
                }
                None => {
                    if found != cursor {
                        return fallback(term, reading);
                    }
                }
            }

            segments.push(RubySegment::plain(run));
            cursor = found + anchor.len();
        } else {
            pending = Some(run);
        }
    }

    match pending {
        Some(text) => {
            if cursor >= reading_chars.len() {
                return fallback(term, reading);
            }
            let span: String = reading_chars[cursor..].iter().collect();
            segments.push(RubySegment::annotated(text, span));
        }
        None => {
            if cursor != reading_chars.len() {
                return fallback(term, reading);
            }
        }
    }

    segments
}

/// Render segments in bracket notation, e.g. `食【た】べる`
pub fn format_ruby(segments: &[RubySegment]) -> String {
    let mut out = String::new();
    for segment in segments {
        out.push_str(&segment.text);
        if let Some(ref reading) = segment.reading {
            out.push('【');
            out.push_str(reading);
            out.push('】');
        }
    }
    out
}

fn fallback(term: &str, reading: &str) -> Vec<RubySegment> {
    vec![RubySegment::annotated(term, reading)]
}

/// Split a term into maximal runs of kana / non-kana characters
fn split_runs(term: &str) -> Vec<(String, bool)> {
    let mut runs: Vec<(String, bool)> = Vec::new();

    for c in term.chars() {
        let is_kana = c.is_kana();
        match runs.last_mut() {
            Some((run, run_is_kana)) if *run_is_kana == is_kana => run.push(c),
            _ => runs.push((c.to_string(), is_kana)),
        }
    }

    runs
}

/// First occurrence of `needle` in `haystack` at or after `from`
fn find_from(haystack: &[char], needle: &[char], from: usize) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    let last_start = haystack.len() - needle.len();
    if from > last_start {
        return None;
    }
    (from..=last_start).find(|&i| &haystack[i..i + needle.len()] == needle)
}
