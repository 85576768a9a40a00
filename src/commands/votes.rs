//! Voting room, penalties and vote mutations

use chrono::NaiveDate;
use serde::Serialize;

use crate::{
    cli::types::{MatchDate, MatchId, PlayerId},
    voting::{
        abstain, compute_eligible_matches, compute_penalties, eligible_ratees, finalize_vote,
        submit_vote, vote_progress, PenaltyReason, VoteProgress, VoteState,
    },
    Result,
};

use super::{common::print_json, common::CommandContext, resolve_player_id};

/// One line of the voting room as printed or serialized.
#[derive(Debug, Serialize)]
pub struct RoomRow {
    pub match_id: MatchId,
    pub date: MatchDate,
    pub opponent: String,
    pub state: VoteState,
    pub penalty: Option<PenaltyReason>,
    /// Only for matches still waiting on the player's vote.
    pub progress: Option<VoteProgress>,
}

/// Build the voting room for `player` as of `today`
pub fn room_rows(ctx: &CommandContext, player: &PlayerId, today: NaiveDate) -> Result<Vec<RoomRow>> {
    let roster = ctx.roster();
    compute_eligible_matches(&ctx.snapshot.matches, player, today)
        .into_iter()
        .map(|entry| -> Result<RoomRow> {
            let progress = match entry.state {
                VoteState::PendingVote => Some(vote_progress(entry.fixture, &roster, player)?),
                _ => None,
            };
            Ok(RoomRow {
                match_id: entry.fixture.id.clone(),
                date: entry.fixture.date.clone(),
                opponent: entry.fixture.opponent.clone(),
                state: entry.state,
                penalty: entry.penalty,
                progress,
            })
        })
        .collect()
}

/// Handle the room command
pub fn handle_room(
    ctx: &CommandContext,
    player: Option<PlayerId>,
    today: NaiveDate,
    as_json: bool,
) -> Result<()> {
    let player = resolve_player_id(player)?;
    let rows = room_rows(ctx, &player, today)?;

    if as_json {
        return print_json(&rows);
    }
    if rows.is_empty() {
        println!("No finished matches yet");
        return Ok(());
    }
    for row in &rows {
        let mut line = format!(
            "{}  {:<12} vs {:<20} {}",
            row.date,
            row.match_id.as_str(),
            row.opponent,
            row.state
        );
        if let Some(progress) = &row.progress {
            line.push_str(&format!(" ({}/{} rated)", progress.rated, progress.total));
        }
        if let Some(penalty) = &row.penalty {
            line.push_str(&format!(" [{}]", penalty));
        }
        println!("{}", line);
    }
    Ok(())
}

/// Handle the penalties command
pub fn handle_penalties(ctx: &CommandContext, player: Option<PlayerId>, as_json: bool) -> Result<()> {
    let player = resolve_player_id(player)?;
    let report = compute_penalties(&ctx.snapshot.matches, &player);

    if as_json {
        return print_json(&report);
    }
    if report.missed.is_empty() {
        println!("✓ {} has no missed votes", player);
        return Ok(());
    }
    println!("Missed votes: {}", report.missed.len());
    for match_id in &report.missed {
        println!("  - {}", match_id);
    }
    println!("Locked matches: {}", report.len());
    for (match_id, reason) in &report.locks {
        println!("  {}  {}", match_id, reason);
    }
    Ok(())
}

/// Parameters for the vote command
#[derive(Debug)]
pub struct VoteParams {
    pub match_id: MatchId,
    pub player: Option<PlayerId>,
    pub ratee: PlayerId,
    pub stars: u8,
}

/// Handle the vote command: validate, then store the single rating cell
pub fn handle_vote(ctx: &mut CommandContext, params: VoteParams) -> Result<()> {
    let rater = resolve_player_id(params.player)?;
    let roster = ctx.roster();
    let m = ctx.snapshot.find_match_mut(&params.match_id)?;

    submit_vote(m, &roster, &rater, &params.ratee, params.stars)?;
    ctx.db
        .record_rating(&params.match_id, &rater, &params.ratee, params.stars)?;

    let progress = vote_progress(m, &roster, &rater)?;
    println!(
        "✓ Rated {} with {} stars ({}/{} rated)",
        params.ratee, params.stars, progress.rated, progress.total
    );
    if progress.is_complete() {
        println!("All players rated, run `finalize {}` to submit", params.match_id);
    }
    Ok(())
}

/// Handle the finalize command
pub fn handle_finalize(ctx: &mut CommandContext, match_id: MatchId, player: Option<PlayerId>) -> Result<()> {
    let rater = resolve_player_id(player)?;
    let roster = ctx.roster();
    let m = ctx.snapshot.find_match_mut(&match_id)?;

    let eligible = eligible_ratees(m, &roster, &rater)?;
    if finalize_vote(m, &rater, &eligible)? {
        ctx.db.add_finished_voter(&match_id, &rater)?;
        println!("✓ Vote for match {} submitted", match_id);
    } else {
        println!("Vote for match {} was already submitted, ratings updated", match_id);
    }
    Ok(())
}

/// Handle the abstain command. Nothing is stored.
pub fn handle_abstain(ctx: &CommandContext, match_id: MatchId, player: Option<PlayerId>) -> Result<()> {
    let rater = resolve_player_id(player)?;
    let m = ctx.snapshot.find_match(&match_id)?;

    abstain(m, &rater)?;
    println!(
        "Abstention noted for match {}; it still counts as a missed vote",
        match_id
    );
    Ok(())
}
