//! Snapshot import and export

use std::path::{Path, PathBuf};

use crate::{models::Snapshot, Result};

use super::common::CommandContext;

/// Replace the store content with the snapshot document at `path`
pub fn handle_import(ctx: &mut CommandContext, path: &Path) -> Result<()> {
    let json = std::fs::read_to_string(path)?;
    let snapshot = Snapshot::from_json(&json)?;

    ctx.db.import_snapshot(&snapshot)?;
    println!(
        "✓ Imported {} players and {} matches from {}",
        snapshot.players.len(),
        snapshot.matches.len(),
        path.display()
    );
    ctx.snapshot = snapshot;
    Ok(())
}

/// Write the stored snapshot to `output`, or stdout when not given
pub fn handle_export(ctx: &CommandContext, output: Option<PathBuf>) -> Result<()> {
    let json = ctx.db.load_snapshot()?.to_json()?;
    match output {
        Some(path) => {
            std::fs::write(&path, json)?;
            println!("✓ Snapshot written to {}", path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}
