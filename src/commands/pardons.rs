//! Admin pardon panel

use crate::{
    cli::types::{MatchId, PlayerId},
    voting::{pardon, pardon_panel, revoke_pardon},
    Result,
};

use super::{common::print_json, common::CommandContext, resolve_player_id};

/// Handle the pardon and revoke-pardon commands
///
/// `grant` selects between pardoning and revoking. The acting player must
/// be an administrator.
pub fn handle_pardon(
    ctx: &mut CommandContext,
    match_id: MatchId,
    target: PlayerId,
    admin: Option<PlayerId>,
    grant: bool,
) -> Result<()> {
    let admin = resolve_player_id(admin)?;
    let roster = ctx.roster();
    roster.require_admin(&admin)?;
    roster.get(&target)?;

    let m = ctx.snapshot.find_match_mut(&match_id)?;
    let changed = if grant {
        pardon(m, &target)
    } else {
        revoke_pardon(m, &target)
    };
    if changed {
        ctx.db.set_pardon(&match_id, &target, grant)?;
    }

    match (grant, changed) {
        (true, true) => println!("✓ {} pardoned for match {}", target, match_id),
        (true, false) => println!("{} was already pardoned for match {}", target, match_id),
        (false, true) => println!("✓ Pardon revoked for {} in match {}", target, match_id),
        (false, false) => println!("{} had no pardon for match {}", target, match_id),
    }
    Ok(())
}

/// Handle the pardons command: list missed voters and current pardons
pub fn handle_pardons(ctx: &CommandContext, admin: Option<PlayerId>, as_json: bool) -> Result<()> {
    let admin = resolve_player_id(admin)?;
    ctx.roster().require_admin(&admin)?;

    let panel = pardon_panel(&ctx.snapshot.matches);
    if as_json {
        return print_json(&panel);
    }
    if panel.is_empty() {
        println!("✓ Nobody is missing a vote");
        return Ok(());
    }
    for row in &panel {
        let mark = if row.pardoned { "pardoned" } else { "missing" };
        println!(
            "{}  {:<12} {:<12} {}",
            row.match_date,
            row.match_id.as_str(),
            row.player_id.as_str(),
            mark
        );
    }
    Ok(())
}
