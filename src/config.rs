//! Policy constants and tunable settings for the engines.

/// Finished matches after a missed vote that stay locked.
pub const PENALTY_WINDOW: usize = 2;
/// Days after the match date before an unvoted match shows as expired.
pub const VOTE_EXPIRY_DAYS: i64 = 14;
pub const MIN_STARS: u8 = 1;
pub const MAX_STARS: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VotingPolicy {
    pub penalty_window: usize,
    pub expiry_days: i64,
}

impl Default for VotingPolicy {
    fn default() -> Self {
        Self {
            penalty_window: PENALTY_WINDOW,
            expiry_days: VOTE_EXPIRY_DAYS,
        }
    }
}

/// Fantasy credit weights. Penalties are stored as positive magnitudes.
#[derive(Debug, Clone, PartialEq)]
pub struct CreditRules {
    pub per_match_played: i64,
    pub goal_play: i64,
    pub goal_header: i64,
    pub goal_penalty: i64,
    pub goal_set_piece: i64,
    pub assist: i64,
    pub yellow_card: i64,
    pub red_card: i64,
    pub own_goal: i64,
    pub penalty_missed: i64,
    pub bad_throw_in: i64,
    pub bad_free_kick: i64,
    pub major_error: i64,
    /// Arcade points per credit, rounded half away from zero.
    pub game_points_divisor: f64,
    pub clean_sheet: i64,
    /// Bonus for rank 1, 2 and 3 of each match's rating table.
    pub rating_podium: [i64; 3],
}

impl Default for CreditRules {
    fn default() -> Self {
        Self {
            per_match_played: 2,
            goal_play: 3,
            goal_header: 5,
            goal_penalty: 3,
            goal_set_piece: 4,
            assist: 2,
            yellow_card: 2,
            red_card: 5,
            own_goal: 5,
            penalty_missed: 3,
            bad_throw_in: 1,
            bad_free_kick: 1,
            major_error: 2,
            game_points_divisor: 10.0,
            clean_sheet: 5,
            rating_podium: [5, 3, 1],
        }
    }
}
