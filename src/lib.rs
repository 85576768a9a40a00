//! Matchday: match voting, penalties and statistics for an amateur team
//!
//! Teammates rate each other after every finished match. Skipping a vote
//! locks the following matches until the vote is cast or an administrator
//! pardons it, and the hall of fame stays hidden while the viewer's latest
//! match is locked. Alongside the voting engine the crate aggregates season
//! statistics and fantasy credits from the same match records.
//!
//! ## Features
//!
//! - **Voting & penalties**: eligibility, vote submission, finalization,
//!   pardons and derived penalty locks
//! - **Voting room**: per-match vote state for a viewing player
//! - **Statistics**: per-player totals, win/draw/loss record, average rating
//! - **Fantasy credits**: weighted match stats, clean sheets, rating podiums
//! - **Database Storage**: local SQLite store with cell-level rating writes
//!
//! ## Quick Start
//!
//! ```rust
//! use matchday::models::{AttendanceStatus, Match, MatchStatus, Player, Roster, RatingStatus};
//! use matchday::voting::{compute_penalties, finalize_vote, submit_vote};
//! use matchday::PlayerId;
//!
//! # fn example() -> matchday::Result<()> {
//! let players = vec![
//!     Player::new("ana", "Ana", "Delantero"),
//!     Player::new("luis", "Luis", "Portero"),
//! ];
//! let roster = Roster::new(&players);
//!
//! let mut m = Match::new("m1", "2024-03-02", MatchStatus::Finalizado);
//! m.rating_status = RatingStatus::Open;
//! for p in &players {
//!     let status = m.status_entry(&p.id);
//!     status.attendance_status = AttendanceStatus::Confirmed;
//!     status.quarters_played = 4;
//! }
//!
//! let ana = PlayerId::new("ana");
//! let luis = PlayerId::new("luis");
//! submit_vote(&mut m, &roster, &ana, &luis, 4)?;
//! finalize_vote(&mut m, &ana, &[luis.clone()])?;
//!
//! let matches = vec![m];
//! assert!(compute_penalties(&matches, &ana).is_empty());
//! assert!(!compute_penalties(&matches, &luis).is_empty());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Environment Configuration
//!
//! Set your player ID to avoid passing it in every command:
//! ```bash
//! export MATCHDAY_PLAYER_ID=ana
//! export MATCHDAY_DB_PATH=/path/to/matchday.db
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod models;
pub mod stats;
pub mod storage;
pub mod voting;

// Re-export commonly used types
pub use cli::types::{MatchDate, MatchId, PlayerId, Role};
pub use error::{MatchdayError, Result};
pub use models::{Match, Player, Snapshot};

pub const DB_PATH_ENV_VAR: &str = "MATCHDAY_DB_PATH";
pub const PLAYER_ID_ENV_VAR: &str = "MATCHDAY_PLAYER_ID";
