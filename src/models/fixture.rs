//! Matches and the per-player records attached to them.

use crate::cli::types::{MatchDate, MatchId, PlayerId};
use crate::config::{MAX_STARS, MIN_STARS};
use crate::error::{MatchdayError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Lifecycle state of a fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchStatus {
    Programado,
    Finalizado,
    Suspendido,
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MatchStatus::Programado => "PROGRAMADO",
            MatchStatus::Finalizado => "FINALIZADO",
            MatchStatus::Suspendido => "SUSPENDIDO",
        };
        write!(f, "{}", s)
    }
}

/// Whether the match still accepts ratings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RatingStatus {
    Open,
    #[default]
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttendanceStatus {
    Confirmed,
    Doubtful,
    Absent,
    #[default]
    Pending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Paid,
    #[default]
    Unpaid,
}

/// Win/draw/loss from the team's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchOutcome {
    #[serde(rename = "V")]
    Win,
    #[serde(rename = "E")]
    Draw,
    #[serde(rename = "D")]
    Loss,
}

/// One player's record for one match.
///
/// Every counter defaults to zero so a freshly referenced player starts
/// as `PENDING` / `UNPAID` with nothing recorded.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerMatchStatus {
    pub player_id: PlayerId,
    pub attendance_status: AttendanceStatus,
    pub payment_status: PaymentStatus,
    pub amount_paid: f64,
    pub quarters_played: u32,
    pub goals_play: u32,
    pub goals_header: u32,
    pub goals_penalty: u32,
    pub goals_set_piece: u32,
    pub assists: u32,
    pub yellow_cards: u32,
    pub red_cards: u32,
    pub own_goals: u32,
    pub penalties_missed: u32,
    pub bad_throw_ins: u32,
    pub bad_free_kicks: u32,
    pub major_errors: u32,
}

impl PlayerMatchStatus {
    pub fn new(player_id: PlayerId) -> Self {
        Self {
            player_id,
            ..Self::default()
        }
    }

    pub fn is_confirmed(&self) -> bool {
        self.attendance_status == AttendanceStatus::Confirmed
    }

    /// Goals for the team. Own goals count for the opponent and are excluded.
    pub fn total_goals(&self) -> u32 {
        self.goals_play + self.goals_header + self.goals_penalty + self.goals_set_piece
    }
}

/// A scheduled or completed fixture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: MatchId,
    pub date: MatchDate,
    pub status: MatchStatus,
    #[serde(default)]
    pub opponent: String,
    #[serde(default)]
    pub opponent_score: u32,
    #[serde(default)]
    pub player_statuses: Vec<PlayerMatchStatus>,
    #[serde(default)]
    pub rating_status: RatingStatus,
    /// rater -> ratee -> stars
    #[serde(default)]
    pub ratings: BTreeMap<PlayerId, BTreeMap<PlayerId, u8>>,
    #[serde(default)]
    pub finished_voters: BTreeSet<PlayerId>,
    #[serde(default)]
    pub pardoned_voters: BTreeSet<PlayerId>,
}

impl Match {
    pub fn new(id: impl Into<String>, date: impl Into<String>, status: MatchStatus) -> Self {
        Self {
            id: MatchId::new(id),
            date: MatchDate::new(date),
            status,
            opponent: String::new(),
            opponent_score: 0,
            player_statuses: Vec::new(),
            rating_status: RatingStatus::Closed,
            ratings: BTreeMap::new(),
            finished_voters: BTreeSet::new(),
            pardoned_voters: BTreeSet::new(),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.status == MatchStatus::Finalizado
    }

    pub fn is_rating_open(&self) -> bool {
        self.rating_status == RatingStatus::Open
    }

    pub fn status_of(&self, player_id: &PlayerId) -> Option<&PlayerMatchStatus> {
        self.player_statuses
            .iter()
            .find(|s| &s.player_id == player_id)
    }

    /// Status for `player_id`, created with defaults on first reference.
    pub fn status_entry(&mut self, player_id: &PlayerId) -> &mut PlayerMatchStatus {
        let idx = match self
            .player_statuses
            .iter()
            .position(|s| &s.player_id == player_id)
        {
            Some(idx) => idx,
            None => {
                self.player_statuses
                    .push(PlayerMatchStatus::new(player_id.clone()));
                self.player_statuses.len() - 1
            }
        };
        &mut self.player_statuses[idx]
    }

    pub fn is_confirmed(&self, player_id: &PlayerId) -> bool {
        self.status_of(player_id)
            .is_some_and(PlayerMatchStatus::is_confirmed)
    }

    pub fn confirmed_statuses(&self) -> impl Iterator<Item = &PlayerMatchStatus> {
        self.player_statuses.iter().filter(|s| s.is_confirmed())
    }

    /// Team score: goals of every confirmed player.
    pub fn own_score(&self) -> u32 {
        self.confirmed_statuses().map(|s| s.total_goals()).sum()
    }

    /// Result of a finished match; `None` while not `FINALIZADO`.
    pub fn outcome(&self) -> Option<MatchOutcome> {
        if !self.is_finished() {
            return None;
        }
        let own = self.own_score();
        Some(match own.cmp(&self.opponent_score) {
            std::cmp::Ordering::Greater => MatchOutcome::Win,
            std::cmp::Ordering::Equal => MatchOutcome::Draw,
            std::cmp::Ordering::Less => MatchOutcome::Loss,
        })
    }

    pub fn has_finished_vote(&self, player_id: &PlayerId) -> bool {
        self.finished_voters.contains(player_id)
    }

    pub fn is_pardoned(&self, player_id: &PlayerId) -> bool {
        self.pardoned_voters.contains(player_id)
    }

    /// Finished voting or exempted from it.
    pub fn has_voted(&self, player_id: &PlayerId) -> bool {
        self.has_finished_vote(player_id) || self.is_pardoned(player_id)
    }

    pub fn rating(&self, rater: &PlayerId, ratee: &PlayerId) -> Option<u8> {
        self.ratings.get(rater).and_then(|r| r.get(ratee)).copied()
    }

    /// Every star value `ratee` received in this match, one per rater.
    pub fn ratings_received<'a>(&'a self, ratee: &'a PlayerId) -> impl Iterator<Item = u8> + 'a {
        self.ratings
            .values()
            .filter_map(move |given| given.get(ratee).copied())
    }

    /// Fails with `Validation` on the first stored rating outside the star range.
    pub fn check_ratings(&self) -> Result<()> {
        for (rater, given) in &self.ratings {
            for (ratee, stars) in given {
                if !(MIN_STARS..=MAX_STARS).contains(stars) {
                    return Err(MatchdayError::validation(format!(
                        "match {} holds {} stars from {} for {}, expected {} to {}",
                        self.id, stars, rater, ratee, MIN_STARS, MAX_STARS
                    )));
                }
            }
        }
        Ok(())
    }

    /// Mean stars for `ratee` in this match, `None` when nobody rated them.
    pub fn average_rating_for(&self, ratee: &PlayerId) -> Option<f64> {
        let (sum, count) = self
            .ratings_received(ratee)
            .fold((0u32, 0u32), |(sum, count), stars| (sum + stars as u32, count + 1));
        (count > 0).then(|| sum as f64 / count as f64)
    }
}
