//! Squad members and the roster lookup.

use crate::cli::types::{PlayerId, Role};
use crate::error::{MatchdayError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Squad member as maintained by roster management.
///
/// The engines only read `id`, `role`, `is_admin` and `game_points`;
/// the remaining profile fields ride along for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub skill_level: u8,
    #[serde(default)]
    pub number: Option<u32>,
    #[serde(default)]
    pub is_admin: bool,
    /// Arcade score from the mini-games, opaque to the engines.
    #[serde(default)]
    pub game_points: u32,
}

impl Player {
    pub fn new(id: impl Into<String>, name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            id: PlayerId::new(id),
            name: name.into(),
            nickname: None,
            role: Role::new(role),
            skill_level: 0,
            number: None,
            is_admin: false,
            game_points: 0,
        }
    }

    /// Nickname when set, otherwise the full name.
    pub fn display_name(&self) -> &str {
        self.nickname
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.name)
    }
}

/// Id-indexed view over the supplied players.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    players: HashMap<PlayerId, Player>,
}

impl Roster {
    pub fn new(players: &[Player]) -> Self {
        Self {
            players: players.iter().map(|p| (p.id.clone(), p.clone())).collect(),
        }
    }

    pub fn get(&self, id: &PlayerId) -> Result<&Player> {
        self.players
            .get(id)
            .ok_or_else(|| MatchdayError::player_not_found(id))
    }

    pub fn contains(&self, id: &PlayerId) -> bool {
        self.players.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Fails with `NotAuthorized` unless the player exists and is an admin.
    pub fn require_admin(&self, id: &PlayerId) -> Result<&Player> {
        let player = self.get(id)?;
        if player.is_admin {
            Ok(player)
        } else {
            Err(MatchdayError::NotAuthorized {
                player_id: id.clone(),
            })
        }
    }
}
