//! Who may be rated by whom, and how far along a rater's vote is.

use serde::Serialize;

use crate::{
    cli::types::PlayerId,
    error::Result,
    models::{Match, Roster},
};

/// Why `ratee` cannot receive a rating from `rater` in `m`, or `None` when eligible.
///
/// Fails with `NotFound` when a confirmed ratee is missing from the roster.
pub(crate) fn ineligibility_reason(
    m: &Match,
    roster: &Roster,
    rater: &PlayerId,
    ratee: &PlayerId,
) -> Result<Option<String>> {
    if rater == ratee {
        return Ok(Some("players cannot rate themselves".to_string()));
    }
    let Some(status) = m.status_of(ratee).filter(|s| s.is_confirmed()) else {
        return Ok(Some(format!("{} was not confirmed for match {}", ratee, m.id)));
    };
    if roster.get(ratee)?.role.is_staff() {
        return Ok(Some(format!("{} is staff and is not rated", ratee)));
    }
    if status.quarters_played == 0 {
        return Ok(Some(format!("{} did not play in match {}", ratee, m.id)));
    }
    Ok(None)
}

/// Confirmed, field role, played at least one quarter, and not the rater.
pub fn is_vote_eligible(
    m: &Match,
    roster: &Roster,
    rater: &PlayerId,
    ratee: &PlayerId,
) -> Result<bool> {
    Ok(ineligibility_reason(m, roster, rater, ratee)?.is_none())
}

/// Every player `rater` must rate for a complete vote, in match order.
pub fn eligible_ratees(m: &Match, roster: &Roster, rater: &PlayerId) -> Result<Vec<PlayerId>> {
    let mut ratees = Vec::new();
    for status in m.confirmed_statuses() {
        if is_vote_eligible(m, roster, rater, &status.player_id)? {
            ratees.push(status.player_id.clone());
        }
    }
    Ok(ratees)
}

/// How many eligible ratees already carry a rating from the rater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VoteProgress {
    pub rated: usize,
    pub total: usize,
}

impl VoteProgress {
    pub fn is_complete(&self) -> bool {
        self.rated == self.total
    }

    /// Share of ratees rated, 1.0 when there is nobody to rate.
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            self.rated as f64 / self.total as f64
        }
    }
}

pub fn vote_progress(m: &Match, roster: &Roster, rater: &PlayerId) -> Result<VoteProgress> {
    let ratees = eligible_ratees(m, roster, rater)?;
    let rated = ratees
        .iter()
        .filter(|ratee| m.rating(rater, ratee).is_some_and(|stars| stars >= 1))
        .count();
    Ok(VoteProgress {
        rated,
        total: ratees.len(),
    })
}
