//! Statistics aggregation engine
//!
//! - `aggregate`: per-player totals, win/draw/loss record, average rating
//! - `credits`: fantasy credits and per-match rating podiums
//! - `hall_of_fame`: rating leaderboard behind the penalty visibility gate

pub mod aggregate;
pub mod credits;
pub mod hall_of_fame;

#[cfg(test)]
mod tests;

pub use aggregate::{aggregate_player_stats, PlayerStats};
pub use credits::{
    compute_fantasy_credits, compute_fantasy_credits_with, match_rating_ranking, CreditBreakdown,
    FantasyCredits, MatchRatingEntry,
};
pub use hall_of_fame::{hall_of_fame, visibility_lock, HallOfFame, HallOfFameEntry, HiddenReason};
