pub mod achievements;
pub mod add;
pub mod backup;
pub mod list;
pub mod remove;
pub mod show;
pub mod stats;
pub mod study;
