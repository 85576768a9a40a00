//! Rating leaderboard, gated by the viewer's penalty state.

use log::debug;
use serde::Serialize;
use std::cmp::Ordering;

use crate::{
    cli::types::{MatchId, PlayerId},
    models::{finished_ascending, Match},
    voting::{compute_penalties, PenaltyReason},
};

use super::aggregate::PlayerStats;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HallOfFameEntry {
    pub rank: usize,
    pub player_id: PlayerId,
    pub name: String,
    pub avg_rating: f64,
    pub votes_received: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "code", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HiddenReason {
    /// The viewer's latest played match is under a penalty lock.
    PenaltyLocked {
        match_id: MatchId,
        penalty: PenaltyReason,
    },
}

impl HiddenReason {
    pub fn code(&self) -> &'static str {
        match self {
            HiddenReason::PenaltyLocked { .. } => "PENALTY_LOCKED",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HallOfFame {
    Visible(Vec<HallOfFameEntry>),
    Hidden(HiddenReason),
}

impl HallOfFame {
    pub fn is_visible(&self) -> bool {
        matches!(self, HallOfFame::Visible(_))
    }

    /// Ranked entries; empty when hidden.
    pub fn entries(&self) -> &[HallOfFameEntry] {
        match self {
            HallOfFame::Visible(entries) => entries,
            HallOfFame::Hidden(_) => &[],
        }
    }
}

/// Why `viewer` may not see the leaderboard right now, if anything.
///
/// Only the viewer's most recently played finished match matters: a lock
/// there hides the ranking until a vote or pardon clears it.
pub fn visibility_lock(matches: &[Match], viewer: &PlayerId) -> Option<HiddenReason> {
    let latest = finished_ascending(matches)
        .into_iter()
        .rev()
        .find(|m| m.is_confirmed(viewer))?;

    let penalties = compute_penalties(matches, viewer);
    penalties
        .reason(&latest.id)
        .map(|penalty| HiddenReason::PenaltyLocked {
            match_id: latest.id.clone(),
            penalty: penalty.clone(),
        })
}

/// Players with at least one rating, best average first, as seen by `viewer`.
pub fn hall_of_fame(stats: &[PlayerStats], matches: &[Match], viewer: &PlayerId) -> HallOfFame {
    if let Some(reason) = visibility_lock(matches, viewer) {
        debug!("hall of fame hidden for {}: {}", viewer, reason.code());
        return HallOfFame::Hidden(reason);
    }

    let mut rated: Vec<&PlayerStats> = stats.iter().filter(|s| s.votes_received > 0).collect();
    rated.sort_by(|a, b| {
        b.avg_rating
            .partial_cmp(&a.avg_rating)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.player_id.cmp(&b.player_id))
    });

    HallOfFame::Visible(
        rated
            .into_iter()
            .enumerate()
            .map(|(idx, s)| HallOfFameEntry {
                rank: idx + 1,
                player_id: s.player_id.clone(),
                name: s.name.clone(),
                avg_rating: s.avg_rating,
                votes_received: s.votes_received,
            })
            .collect(),
    )
}
