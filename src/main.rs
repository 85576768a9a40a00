//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use matchday::{
    cli::{Commands, Matchday},
    commands::{
        common::CommandContext,
        data::{handle_export, handle_import},
        pardons::{handle_pardon, handle_pardons},
        standings::{handle_credits, handle_hall_of_fame, handle_ranking, handle_stats},
        votes::{
            handle_abstain, handle_finalize, handle_penalties, handle_room, handle_vote, VoteParams,
        },
    },
    Result,
};

/// Run the CLI.
fn main() -> Result<()> {
    sensible_env_logger::init!();

    let app = Matchday::parse();
    let mut ctx = CommandContext::open(app.db)?;

    match app.command {
        Commands::Import { path } => handle_import(&mut ctx, &path)?,
        Commands::Export { output } => handle_export(&ctx, output)?,

        Commands::Room {
            player,
            today,
            json,
        } => {
            let today = today.unwrap_or_else(|| chrono::Local::now().date_naive());
            handle_room(&ctx, player.player, today, json)?
        }
        Commands::Penalties { player, json } => handle_penalties(&ctx, player.player, json)?,

        Commands::Vote {
            match_id,
            ratee,
            stars,
            player,
        } => handle_vote(
            &mut ctx,
            VoteParams {
                match_id,
                player: player.player,
                ratee,
                stars,
            },
        )?,
        Commands::Finalize { match_id, player } => {
            handle_finalize(&mut ctx, match_id, player.player)?
        }
        Commands::Abstain { match_id, player } => handle_abstain(&ctx, match_id, player.player)?,

        Commands::Pardon {
            match_id,
            target,
            player,
        } => handle_pardon(&mut ctx, match_id, target, player.player, true)?,
        Commands::RevokePardon {
            match_id,
            target,
            player,
        } => handle_pardon(&mut ctx, match_id, target, player.player, false)?,
        Commands::Pardons { player, json } => handle_pardons(&ctx, player.player, json)?,

        Commands::Stats { json } => handle_stats(&ctx, json)?,
        Commands::Credits { json } => handle_credits(&ctx, json)?,
        Commands::Ranking { match_id, json } => handle_ranking(&ctx, match_id, json)?,
        Commands::HallOfFame { player, json } => handle_hall_of_fame(&ctx, player.player, json)?,
    }

    Ok(())
}
