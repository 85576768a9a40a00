//! Missed votes and the locks they cascade onto later matches.
//!
//! Penalties are derived, never stored: every call recomputes them from the
//! current `finished_voters` / `pardoned_voters`, so a pardon takes effect on
//! the next computation without any invalidation step.

use log::debug;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use crate::{
    cli::types::{MatchDate, MatchId, PlayerId},
    config::VotingPolicy,
    models::{finished_ascending, Match},
};

/// The missed match a lock originates from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PenaltyReason {
    pub origin_match: MatchId,
    pub origin_date: MatchDate,
}

impl fmt::Display for PenaltyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Missed vote for match {} on {}",
            self.origin_match, self.origin_date
        )
    }
}

/// Locked matches for one player, with the first reason assigned to each.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PenaltyReport {
    pub player_id: PlayerId,
    /// Confirmed matches left unvoted and unpardoned, ascending by date.
    pub missed: Vec<MatchId>,
    pub locks: BTreeMap<MatchId, PenaltyReason>,
}

impl PenaltyReport {
    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.locks.len()
    }

    pub fn is_locked(&self, match_id: &MatchId) -> bool {
        self.locks.contains_key(match_id)
    }

    pub fn reason(&self, match_id: &MatchId) -> Option<&PenaltyReason> {
        self.locks.get(match_id)
    }

    pub fn locked_ids(&self) -> impl Iterator<Item = &MatchId> {
        self.locks.keys()
    }
}

/// Penalty locks for `player` under the default policy.
pub fn compute_penalties(matches: &[Match], player: &PlayerId) -> PenaltyReport {
    compute_penalties_with(matches, player, &VotingPolicy::default())
}

/// Each confirmed finished match the player neither voted nor was pardoned for
/// locks itself plus the next `penalty_window` finished matches, counted over
/// every finished match whether the player took part or not.
pub fn compute_penalties_with(
    matches: &[Match],
    player: &PlayerId,
    policy: &VotingPolicy,
) -> PenaltyReport {
    let finished = finished_ascending(matches);
    let mut report = PenaltyReport {
        player_id: player.clone(),
        missed: Vec::new(),
        locks: BTreeMap::new(),
    };

    for (idx, m) in finished.iter().enumerate() {
        if !m.is_confirmed(player) || m.has_voted(player) {
            continue;
        }

        let reason = PenaltyReason {
            origin_match: m.id.clone(),
            origin_date: m.date.clone(),
        };
        report.missed.push(m.id.clone());

        for locked in finished.iter().skip(idx).take(policy.penalty_window + 1) {
            report
                .locks
                .entry(locked.id.clone())
                .or_insert_with(|| reason.clone());
        }
    }

    debug!(
        "penalties for {}: {} missed, {} locked",
        player,
        report.missed.len(),
        report.locks.len()
    );
    report
}

/// Confirmed players of a finished match who neither voted nor were pardoned.
pub fn missed_voters(m: &Match) -> Vec<PlayerId> {
    if !m.is_finished() {
        return Vec::new();
    }
    m.confirmed_statuses()
        .filter(|s| !m.has_voted(&s.player_id))
        .map(|s| s.player_id.clone())
        .collect()
}

/// One row of the admin pardon panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PardonCandidate {
    pub match_id: MatchId,
    pub match_date: MatchDate,
    pub player_id: PlayerId,
    /// Already pardoned; the admin may revoke it.
    pub pardoned: bool,
}

/// Everyone an admin may pardon or un-pardon, most recent match first.
///
/// Lists confirmed players of finished matches who did not finish their vote,
/// both those still missing and those already pardoned.
pub fn pardon_panel(matches: &[Match]) -> Vec<PardonCandidate> {
    let mut finished = finished_ascending(matches);
    finished.reverse();

    finished
        .into_iter()
        .flat_map(|m| {
            m.confirmed_statuses()
                .filter(|s| !m.has_finished_vote(&s.player_id))
                .map(|s| PardonCandidate {
                    match_id: m.id.clone(),
                    match_date: m.date.clone(),
                    player_id: s.player_id.clone(),
                    pardoned: m.is_pardoned(&s.player_id),
                })
                .collect::<Vec<_>>()
        })
        .collect()
}
