//! Data model shared by the voting and statistics engines.
//!
//! Shapes follow the documents the store keeps (camelCase JSON):
//! - `player`: squad members and the id-indexed [`Roster`]
//! - `fixture`: matches, per-player match records and their enums

pub mod fixture;
pub mod player;


pub use fixture::{
    AttendanceStatus, Match, MatchOutcome, MatchStatus, PaymentStatus, PlayerMatchStatus,
    RatingStatus,
};
pub use player::{Player, Roster};

use crate::cli::types::MatchId;
use crate::error::{MatchdayError, Result};
use serde::{Deserialize, Serialize};

/// Materialized players and matches, as exported from the document store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub players: Vec<Player>,
    #[serde(default)]
    pub matches: Vec<Match>,
}

impl Snapshot {
    /// Parse and validate a snapshot document.
    pub fn from_json(json: &str) -> Result<Self> {
        let snapshot: Self = serde_json::from_str(json)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Reject ratings outside the star range in any match.
    pub fn validate(&self) -> Result<()> {
        self.matches.iter().try_for_each(Match::check_ratings)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn roster(&self) -> Roster {
        Roster::new(&self.players)
    }

    pub fn find_match(&self, id: &MatchId) -> Result<&Match> {
        find_match(&self.matches, id)
    }

    pub fn find_match_mut(&mut self, id: &MatchId) -> Result<&mut Match> {
        self.matches
            .iter_mut()
            .find(|m| &m.id == id)
            .ok_or_else(|| MatchdayError::match_not_found(id))
    }
}

/// Look a match up by id, `NotFound` when absent.
pub fn find_match<'a>(matches: &'a [Match], id: &MatchId) -> Result<&'a Match> {
    matches
        .iter()
        .find(|m| &m.id == id)
        .ok_or_else(|| MatchdayError::match_not_found(id))
}

/// Finished matches in ascending chronological order.
///
/// The sort is stable, so matches on the same date keep their input order.
pub fn finished_ascending(matches: &[Match]) -> Vec<&Match> {
    let mut finished: Vec<&Match> = matches.iter().filter(|m| m.is_finished()).collect();
    finished.sort_by(|a, b| a.date.cmp(&b.date));
    finished
}
