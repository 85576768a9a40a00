//! Error types for the matchday library and CLI

use crate::cli::types::PlayerId;
use thiserror::Error;


pub type Result<T> = std::result::Result<T, MatchdayError>;

#[derive(Error, Debug)]
pub enum MatchdayError {
    #[error("Vote rejected: {message}")]
    Validation { message: String },

    #[error("Vote is incomplete, {} player(s) still unrated: {}", missing.len(), join_ids(missing))]
    IncompleteVote { missing: Vec<PlayerId> },

    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    #[error("Player {player_id} is not an administrator")]
    NotAuthorized { player_id: PlayerId },

    #[error("Player ID not provided and {env_var} environment variable not set")]
    MissingPlayerId { env_var: String },

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage error: {message}")]
    Storage { message: String },
}

impl MatchdayError {
    pub fn validation(message: impl Into<String>) -> Self {
        MatchdayError::Validation {
            message: message.into(),
        }
    }

    pub fn match_not_found(id: impl ToString) -> Self {
        MatchdayError::NotFound {
            kind: "Match",
            id: id.to_string(),
        }
    }

    pub fn player_not_found(id: impl ToString) -> Self {
        MatchdayError::NotFound {
            kind: "Player",
            id: id.to_string(),
        }
    }
}

impl From<anyhow::Error> for MatchdayError {
    fn from(err: anyhow::Error) -> Self {
        MatchdayError::Storage {
            message: err.to_string(),
        }
    }
}

fn join_ids(ids: &[PlayerId]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
