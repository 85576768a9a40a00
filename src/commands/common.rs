//! Resources shared by every command handler.

use std::path::PathBuf;

use log::debug;
use serde::Serialize;

use crate::{
    models::{Roster, Snapshot},
    storage::MatchDatabase,
    Result,
};

use super::resolve_db_path;

/// Open store plus the snapshot loaded from it at startup.
pub struct CommandContext {
    pub db: MatchDatabase,
    pub snapshot: Snapshot,
}

impl CommandContext {
    /// Open the database (see [`resolve_db_path`]) and load its content
    pub fn open(db_path: Option<PathBuf>) -> Result<Self> {
        let path = resolve_db_path(db_path)?;
        debug!("opening match store at {}", path.display());
        Self::from_database(MatchDatabase::open(&path)?)
    }

    pub fn from_database(db: MatchDatabase) -> Result<Self> {
        let snapshot = db.load_snapshot()?;
        Ok(Self { db, snapshot })
    }

    pub fn roster(&self) -> Roster {
        self.snapshot.roster()
    }
}

/// Pretty JSON to stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
