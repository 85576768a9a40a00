//! Statistics, fantasy credits, rating rankings and the hall of fame

use crate::{
    cli::types::{MatchId, PlayerId},
    stats::{
        aggregate_player_stats, compute_fantasy_credits, hall_of_fame, match_rating_ranking,
        HallOfFame, HiddenReason,
    },
    Result,
};

use super::{common::print_json, common::CommandContext, resolve_player_id};

/// Handle the stats command
pub fn handle_stats(ctx: &CommandContext, as_json: bool) -> Result<()> {
    let stats = aggregate_player_stats(&ctx.snapshot.matches, &ctx.snapshot.players);

    if as_json {
        return print_json(&stats);
    }
    println!(
        "{:<20} {:>3} {:>3} {:>3} {:>3} {:>5} {:>4} {:>5}",
        "Player", "PJ", "PG", "PE", "PP", "Goals", "Ast", "Avg"
    );
    for s in &stats {
        println!(
            "{:<20} {:>3} {:>3} {:>3} {:>3} {:>5} {:>4} {:>5.2}",
            s.name,
            s.matches_played,
            s.wins,
            s.draws,
            s.losses,
            s.total_goals(),
            s.assists,
            s.avg_rating
        );
    }
    Ok(())
}

/// Handle the credits command
pub fn handle_credits(ctx: &CommandContext, as_json: bool) -> Result<()> {
    let stats = aggregate_player_stats(&ctx.snapshot.matches, &ctx.snapshot.players);
    let credits = compute_fantasy_credits(&stats, &ctx.snapshot.matches);

    if as_json {
        return print_json(&credits);
    }
    for (idx, c) in credits.iter().enumerate() {
        println!(
            "{:>2}. {:<20} {:>5}  (base {}, arcade {}, clean sheets {}, podiums {})",
            idx + 1,
            c.name,
            c.credits,
            c.breakdown.base,
            c.breakdown.arcade,
            c.breakdown.clean_sheets,
            c.breakdown.rating_podiums
        );
    }
    Ok(())
}

/// Handle the ranking command: rating table of a single match
pub fn handle_ranking(ctx: &CommandContext, match_id: MatchId, as_json: bool) -> Result<()> {
    let m = ctx.snapshot.find_match(&match_id)?;
    let ranking = match_rating_ranking(m);

    if as_json {
        return print_json(&ranking);
    }
    if ranking.is_empty() {
        println!("No ratings for match {} yet", match_id);
        return Ok(());
    }
    for (idx, entry) in ranking.iter().enumerate() {
        println!(
            "{:>2}. {:<12} {:.2} ({} votes)",
            idx + 1,
            entry.player_id.as_str(),
            entry.average,
            entry.votes
        );
    }
    Ok(())
}

/// Handle the hall-of-fame command for the viewing player
pub fn handle_hall_of_fame(ctx: &CommandContext, viewer: Option<PlayerId>, as_json: bool) -> Result<()> {
    let viewer = resolve_player_id(viewer)?;
    let stats = aggregate_player_stats(&ctx.snapshot.matches, &ctx.snapshot.players);
    let board = hall_of_fame(&stats, &ctx.snapshot.matches, &viewer);

    if as_json {
        return print_json(&board);
    }
    match &board {
        HallOfFame::Hidden(reason) => {
            println!("Hall of fame hidden ({})", reason.code());
            let HiddenReason::PenaltyLocked { match_id, penalty } = reason;
            println!("Match {} is locked: {}", match_id, penalty);
            println!("Vote for the missed match or ask an admin for a pardon");
        }
        HallOfFame::Visible(entries) => {
            for e in entries {
                println!(
                    "{:>2}. {:<20} {:.2} ({} votes)",
                    e.rank, e.name, e.avg_rating, e.votes_received
                );
            }
        }
    }
    Ok(())
}
