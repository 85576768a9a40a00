//! Per-player cumulative statistics folded from the match history.

use log::debug;
use serde::Serialize;

use crate::{
    cli::types::{PlayerId, Role},
    models::{Match, MatchOutcome, Player, PlayerMatchStatus},
};

/// Season totals for one player.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerStats {
    pub player_id: PlayerId,
    pub name: String,
    pub role: Role,
    pub game_points: u32,
    /// Confirmed appearances in finished matches.
    #[serde(rename = "pj")]
    pub matches_played: u32,
    #[serde(rename = "pg")]
    pub wins: u32,
    #[serde(rename = "pe")]
    pub draws: u32,
    #[serde(rename = "pp")]
    pub losses: u32,
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
    pub quarters_played: u32,
    pub amount_paid: f64,
    pub votes_received: u32,
    /// Mean stars over every rating received, 0 when never rated.
    pub avg_rating: f64,
}

impl PlayerStats {
    pub fn new(player: &Player) -> Self {
        Self {
            player_id: player.id.clone(),
            name: player.display_name().to_string(),
            role: player.role.clone(),
            game_points: player.game_points,
            matches_played: 0,
            wins: 0,
            draws: 0,
            losses: 0,
            goals_play: 0,
            goals_header: 0,
            goals_penalty: 0,
            goals_set_piece: 0,
            assists: 0,
            yellow_cards: 0,
            red_cards: 0,
            own_goals: 0,
            penalties_missed: 0,
            bad_throw_ins: 0,
            bad_free_kicks: 0,
            major_errors: 0,
            quarters_played: 0,
            amount_paid: 0.0,
            votes_received: 0,
            avg_rating: 0.0,
        }
    }

    pub fn total_goals(&self) -> u32 {
        self.goals_play + self.goals_header + self.goals_penalty + self.goals_set_piece
    }

    fn absorb(&mut self, status: &PlayerMatchStatus) {
        self.goals_play += status.goals_play;
        self.goals_header += status.goals_header;
        self.goals_penalty += status.goals_penalty;
        self.goals_set_piece += status.goals_set_piece;
        self.assists += status.assists;
        self.yellow_cards += status.yellow_cards;
        self.red_cards += status.red_cards;
        self.own_goals += status.own_goals;
        self.penalties_missed += status.penalties_missed;
        self.bad_throw_ins += status.bad_throw_ins;
        self.bad_free_kicks += status.bad_free_kicks;
        self.major_errors += status.major_errors;
        self.quarters_played += status.quarters_played;
        self.amount_paid += status.amount_paid;
    }

    fn record(&mut self, outcome: MatchOutcome) {
        match outcome {
            MatchOutcome::Win => self.wins += 1,
            MatchOutcome::Draw => self.draws += 1,
            MatchOutcome::Loss => self.losses += 1,
        }
    }
}

/// One stats record per player, in the order the players were supplied.
pub fn aggregate_player_stats(matches: &[Match], players: &[Player]) -> Vec<PlayerStats> {
    let stats: Vec<PlayerStats> = players
        .iter()
        .map(|player| aggregate_one(matches, player))
        .collect();
    debug!(
        "aggregated stats for {} players over {} matches",
        stats.len(),
        matches.len()
    );
    stats
}

fn aggregate_one(matches: &[Match], player: &Player) -> PlayerStats {
    let mut stats = PlayerStats::new(player);
    let mut star_sum = 0u32;

    for m in matches {
        if let Some(status) = m.status_of(&player.id) {
            stats.absorb(status);
            if status.is_confirmed() {
                if let Some(outcome) = m.outcome() {
                    stats.matches_played += 1;
                    stats.record(outcome);
                }
            }
        }

        for stars in m.ratings_received(&player.id) {
            star_sum += stars as u32;
            stats.votes_received += 1;
        }
    }

    if stats.votes_received > 0 {
        stats.avg_rating = star_sum as f64 / stats.votes_received as f64;
    }
    stats
}
