//! Command implementations for the matchday CLI

pub mod common;
pub mod data;
pub mod pardons;
pub mod standings;
pub mod votes;


use std::path::PathBuf;

use crate::{
    cli::types::PlayerId, error::MatchdayError, storage::MatchDatabase, Result,
    DB_PATH_ENV_VAR, PLAYER_ID_ENV_VAR,
};

/// Database file from the command line, then `MATCHDAY_DB_PATH`, then the default location.
pub fn resolve_db_path(db_path: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = db_path.or_else(|| {
        std::env::var(DB_PATH_ENV_VAR)
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
    }) {
        return Ok(path);
    }
    Ok(MatchDatabase::database_path()?)
}

/// Acting player from the command line, falling back to `MATCHDAY_PLAYER_ID`.
pub fn resolve_player_id(player_id: Option<PlayerId>) -> Result<PlayerId> {
    player_id
        .or_else(|| {
            std::env::var(PLAYER_ID_ENV_VAR)
                .ok()
                .and_then(|s| s.parse::<PlayerId>().ok())
        })
        .ok_or_else(|| MatchdayError::MissingPlayerId {
            env_var: PLAYER_ID_ENV_VAR.to_string(),
        })
}
