//! Vote-recording mutations: ratings, finishing, abstaining, pardons.
//!
//! Each mutation touches a single field of the match (one rating cell, or
//! one member of a voter set) so a store can apply it as a partial update.

use log::info;

use crate::{
    cli::types::PlayerId,
    config::{MAX_STARS, MIN_STARS},
    error::{MatchdayError, Result},
    models::{Match, Roster},
};

use super::eligibility::ineligibility_reason;

/// Record `rater`'s stars for `ratee`, overwriting any earlier value.
///
/// Does not mark the rater as finished; see [`finalize_vote`].
pub fn submit_vote(
    m: &mut Match,
    roster: &Roster,
    rater: &PlayerId,
    ratee: &PlayerId,
    stars: u8,
) -> Result<()> {
    if !m.is_rating_open() {
        return Err(MatchdayError::validation(format!(
            "ratings for match {} are closed",
            m.id
        )));
    }
    if !(MIN_STARS..=MAX_STARS).contains(&stars) {
        return Err(MatchdayError::validation(format!(
            "stars must be between {} and {}, got {}",
            MIN_STARS, MAX_STARS, stars
        )));
    }
    roster.get(rater)?;
    if let Some(reason) = ineligibility_reason(m, roster, rater, ratee)? {
        return Err(MatchdayError::validation(reason));
    }

    m.ratings
        .entry(rater.clone())
        .or_default()
        .insert(ratee.clone(), stars);
    info!("{} rated {} with {} stars in match {}", rater, ratee, stars, m.id);
    Ok(())
}

/// Mark `rater` as finished once every id in `eligible` carries a rating.
///
/// Returns `true` when the rater was newly added, `false` when already
/// finished (resubmitting an edited vote is a no-op here).
pub fn finalize_vote(m: &mut Match, rater: &PlayerId, eligible: &[PlayerId]) -> Result<bool> {
    let missing: Vec<PlayerId> = eligible
        .iter()
        .filter(|ratee| !m.rating(rater, ratee).is_some_and(|stars| stars >= MIN_STARS))
        .cloned()
        .collect();
    if !missing.is_empty() {
        return Err(MatchdayError::IncompleteVote { missing });
    }

    let added = m.finished_voters.insert(rater.clone());
    if added {
        info!("{} finished voting for match {}", rater, m.id);
    }
    Ok(added)
}

/// Explicitly decline to vote.
///
/// Nothing is written: the player stays out of `finished_voters`, so the
/// missed vote keeps counting towards penalties.
pub fn abstain(m: &Match, rater: &PlayerId) -> Result<()> {
    if !m.is_confirmed(rater) {
        return Err(MatchdayError::validation(format!(
            "{} was not confirmed for match {}",
            rater, m.id
        )));
    }
    info!("{} abstained from voting in match {}", rater, m.id);
    Ok(())
}

/// Exempt `player` from voting on `m`. Returns whether anything changed.
pub fn pardon(m: &mut Match, player: &PlayerId) -> bool {
    let added = m.pardoned_voters.insert(player.clone());
    if added {
        info!("{} pardoned for match {}", player, m.id);
    }
    added
}

/// Withdraw a pardon. Returns whether anything changed.
pub fn revoke_pardon(m: &mut Match, player: &PlayerId) -> bool {
    let removed = m.pardoned_voters.remove(player);
    if removed {
        info!("pardon revoked for {} in match {}", player, m.id);
    }
    removed
}
