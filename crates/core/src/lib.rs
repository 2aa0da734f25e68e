#![warn(clippy::all, missing_docs)]

//! Core scoring engine for the yachtscore terminal scorekeeper.
//!
//! This crate hosts the category catalog, per-player score records, totals
//! derivation, roster management, win detection, and the board snapshot
//! export used by the terminal UI and any future frontends.

pub mod board;
pub mod catalog;
pub mod config;
pub mod roster;
pub mod score;
pub mod snapshot;
pub mod totals;
pub mod winner;

pub use board::{BoardSnapshot, PlayerSnapshot, Scoreboard, WinnerSummary};
pub use catalog::{Category, Section, NUM_CATEGORIES};
pub use config::AppConfig;
pub use roster::{Player, PlayerId, Roster, MAX_PLAYERS, MIN_PLAYERS};
pub use score::{parse_score, ScoreRecord};
pub use snapshot::SnapshotExporter;
pub use totals::{Totals, UPPER_BONUS, UPPER_BONUS_THRESHOLD};
pub use winner::{Fingerprint, WinCheck, WinDetector, WinnerAnnouncement};
