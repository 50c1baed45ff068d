//! kotoba: a Japanese vocabulary trainer with spaced repetition
//!
//! The library side of the app: the word collection and its repository,
//! the SRS scheduling core, statistics, achievements, furigana alignment,
//! configuration, and backup. The `kotoba-cli` binary drives it.

pub mod achievements;
pub mod config;
pub mod furigana;
pub mod srs;
pub mod storage;
pub mod vocab;
