//! Voting & penalty engine
//!
//! Pure functions over match history plus the small set of vote mutations:
//! - `eligibility`: who must be rated, vote completeness
//! - `penalties`: missed votes and the locks they cascade onto later matches
//! - `room`: per-match vote state for a viewing player
//! - `ballot`: submit, finalize, abstain, pardon, revoke pardon

pub mod ballot;
pub mod eligibility;
pub mod penalties;
pub mod room;


pub use ballot::{abstain, finalize_vote, pardon, revoke_pardon, submit_vote};
pub use eligibility::{eligible_ratees, is_vote_eligible, vote_progress, VoteProgress};
pub use penalties::{
    compute_penalties, compute_penalties_with, missed_voters, pardon_panel, PardonCandidate,
    PenaltyReason, PenaltyReport,
};
pub use room::{compute_eligible_matches, compute_eligible_matches_with, VoteState, VotingRoomEntry};
