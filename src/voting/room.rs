//! The voting room: every finished match with the viewer's vote state.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

use crate::{
    cli::types::PlayerId,
    config::VotingPolicy,
    models::{finished_ascending, Match},
};

use super::penalties::{compute_penalties_with, PenaltyReason};

/// Where a finished match stands for one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VoteState {
    /// Player was not confirmed for the match.
    NotParticipated,
    /// Voting is open and the player still owes a vote.
    PendingVote,
    /// Vote finished, or pardoned.
    Voted,
    /// Voted, but the match sits under a penalty from an earlier miss.
    Locked,
    /// Still unvoted and the voting window is over.
    Expired,
}

impl fmt::Display for VoteState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            VoteState::NotParticipated => "NOT_PARTICIPATED",
            VoteState::PendingVote => "PENDING_VOTE",
            VoteState::Voted => "VOTED",
            VoteState::Locked => "LOCKED",
            VoteState::Expired => "EXPIRED",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct VotingRoomEntry<'a> {
    pub fixture: &'a Match,
    pub state: VoteState,
    /// Set when the match is penalty locked for the player.
    pub penalty: Option<PenaltyReason>,
}

/// Finished matches, most recent first, classified for `player` as of `today`.
pub fn compute_eligible_matches<'a>(
    matches: &'a [Match],
    player: &PlayerId,
    today: NaiveDate,
) -> Vec<VotingRoomEntry<'a>> {
    compute_eligible_matches_with(matches, player, today, &VotingPolicy::default())
}

pub fn compute_eligible_matches_with<'a>(
    matches: &'a [Match],
    player: &PlayerId,
    today: NaiveDate,
    policy: &VotingPolicy,
) -> Vec<VotingRoomEntry<'a>> {
    let penalties = compute_penalties_with(matches, player, policy);

    let mut finished = finished_ascending(matches);
    finished.reverse();

    finished
        .into_iter()
        .map(|m| {
            let penalty = penalties.reason(&m.id).cloned();
            let state = classify(m, player, today, policy, penalty.is_some());
            VotingRoomEntry {
                fixture: m,
                state,
                penalty,
            }
        })
        .collect()
}

fn classify(
    m: &Match,
    player: &PlayerId,
    today: NaiveDate,
    policy: &VotingPolicy,
    locked: bool,
) -> VoteState {
    if !m.is_confirmed(player) {
        return VoteState::NotParticipated;
    }
    if m.has_voted(player) {
        return if locked {
            VoteState::Locked
        } else {
            VoteState::Voted
        };
    }

    let past_window = m
        .date
        .days_until(today)
        .is_some_and(|days| days > policy.expiry_days);
    if past_window || !m.is_rating_open() {
        VoteState::Expired
    } else {
        VoteState::PendingVote
    }
}
