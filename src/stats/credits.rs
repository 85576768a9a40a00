//! Fantasy credits: match stats, clean sheets, rating podiums and arcade points.

use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;

use crate::{
    cli::types::PlayerId,
    config::CreditRules,
    models::Match,
};

use super::aggregate::PlayerStats;

/// One rated player's standing within a single match.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchRatingEntry {
    pub player_id: PlayerId,
    pub average: f64,
    pub votes: u32,
}

/// Confirmed players of `m` with at least one rating, best average first.
///
/// Equal averages are ordered by player id so the ranking never depends on
/// the order ratings were stored in.
pub fn match_rating_ranking(m: &Match) -> Vec<MatchRatingEntry> {
    let mut ranking: Vec<MatchRatingEntry> = m
        .confirmed_statuses()
        .filter_map(|status| {
            let votes = m.ratings_received(&status.player_id).count() as u32;
            m.average_rating_for(&status.player_id)
                .map(|average| MatchRatingEntry {
                    player_id: status.player_id.clone(),
                    average,
                    votes,
                })
        })
        .collect();

    ranking.sort_by(|a, b| {
        b.average
            .partial_cmp(&a.average)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.player_id.cmp(&b.player_id))
    });
    ranking
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CreditBreakdown {
    /// Appearances, goals, assists, cards and errors.
    pub base: i64,
    pub arcade: i64,
    pub clean_sheets: i64,
    pub rating_podiums: i64,
}

impl CreditBreakdown {
    pub fn total(&self) -> i64 {
        self.base + self.arcade + self.clean_sheets + self.rating_podiums
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FantasyCredits {
    pub player_id: PlayerId,
    pub name: String,
    pub credits: i64,
    pub breakdown: CreditBreakdown,
}

pub fn compute_fantasy_credits(stats: &[PlayerStats], matches: &[Match]) -> Vec<FantasyCredits> {
    compute_fantasy_credits_with(stats, matches, &CreditRules::default())
}

/// Credits per player, highest first; ties ordered by player id.
pub fn compute_fantasy_credits_with(
    stats: &[PlayerStats],
    matches: &[Match],
    rules: &CreditRules,
) -> Vec<FantasyCredits> {
    let podiums = podium_bonuses(matches, rules);

    let mut credits: Vec<FantasyCredits> = stats
        .iter()
        .map(|s| {
            let breakdown = CreditBreakdown {
                base: base_credits(s, rules),
                arcade: arcade_credits(s.game_points, rules),
                clean_sheets: clean_sheets(s, matches) as i64 * rules.clean_sheet,
                rating_podiums: podiums.get(&s.player_id).copied().unwrap_or(0),
            };
            FantasyCredits {
                player_id: s.player_id.clone(),
                name: s.name.clone(),
                credits: breakdown.total(),
                breakdown,
            }
        })
        .collect();

    credits.sort_by(|a, b| {
        b.credits
            .cmp(&a.credits)
            .then_with(|| a.player_id.cmp(&b.player_id))
    });
    credits
}

fn base_credits(s: &PlayerStats, rules: &CreditRules) -> i64 {
    let n = |v: u32| v as i64;

    n(s.matches_played) * rules.per_match_played
        + n(s.goals_play) * rules.goal_play
        + n(s.goals_header) * rules.goal_header
        + n(s.goals_penalty) * rules.goal_penalty
        + n(s.goals_set_piece) * rules.goal_set_piece
        + n(s.assists) * rules.assist
        - n(s.yellow_cards) * rules.yellow_card
        - n(s.red_cards) * rules.red_card
        - n(s.own_goals) * rules.own_goal
        - n(s.penalties_missed) * rules.penalty_missed
        - n(s.bad_throw_ins) * rules.bad_throw_in
        - n(s.bad_free_kicks) * rules.bad_free_kick
        - n(s.major_errors) * rules.major_error
}

fn arcade_credits(game_points: u32, rules: &CreditRules) -> i64 {
    if rules.game_points_divisor <= 0.0 {
        return 0;
    }
    (game_points as f64 / rules.game_points_divisor).round() as i64
}

/// Finished matches with no goals conceded, for defensive roles only.
fn clean_sheets(s: &PlayerStats, matches: &[Match]) -> u32 {
    if !s.role.is_defensive() {
        return 0;
    }
    matches
        .iter()
        .filter(|m| m.is_finished() && m.opponent_score == 0 && m.is_confirmed(&s.player_id))
        .count() as u32
}

fn podium_bonuses(matches: &[Match], rules: &CreditRules) -> HashMap<PlayerId, i64> {
    let mut bonuses: HashMap<PlayerId, i64> = HashMap::new();

    for m in matches.iter().filter(|m| m.is_finished()) {
        for (entry, bonus) in match_rating_ranking(m).into_iter().zip(rules.rating_podium) {
            *bonuses.entry(entry.player_id).or_insert(0) += bonus;
        }
    }
    bonuses
}
