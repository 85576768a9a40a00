//! Database query operations

use super::schema::MatchDatabase;
use crate::cli::types::{MatchDate, MatchId, PlayerId};
use crate::models::{Match, Player, PlayerMatchStatus, Snapshot};
use anyhow::{anyhow, Result};
use log::info;
use rusqlite::params;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};

/// Text form of a unit enum, as serde writes it (`"FINALIZADO"`, `"OPEN"`...)
fn enum_text<T: Serialize>(value: &T) -> Result<String> {
    match serde_json::to_value(value)? {
        Value::String(s) => Ok(s),
        other => Err(anyhow!("expected a string enum, got {}", other)),
    }
}

fn enum_from_text<T: DeserializeOwned>(text: String) -> Result<T> {
    Ok(serde_json::from_value(Value::String(text))?)
}

impl MatchDatabase {
    /// Insert or replace a player document
    pub fn upsert_player(&self, player: &Player) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO players (player_id, name, doc) VALUES (?, ?, ?)",
            params![
                player.id.as_str(),
                player.name,
                serde_json::to_string(player)?
            ],
        )?;
        Ok(())
    }

    /// Replace every stored row of `m` with its current content
    pub fn upsert_match(&mut self, m: &Match) -> Result<()> {
        let tx = self.conn.transaction()?;

        // Cascades clear statuses, ratings and voter sets
        tx.execute("DELETE FROM matches WHERE match_id = ?", [m.id.as_str()])?;
        tx.execute(
            "INSERT INTO matches
                (match_id, match_date, status, rating_status, opponent, opponent_score)
             VALUES (?, ?, ?, ?, ?, ?)",
            params![
                m.id.as_str(),
                m.date.as_str(),
                enum_text(&m.status)?,
                enum_text(&m.rating_status)?,
                m.opponent,
                m.opponent_score
            ],
        )?;

        for (position, status) in m.player_statuses.iter().enumerate() {
            tx.execute(
                "INSERT OR REPLACE INTO match_player_status (match_id, player_id, position, doc)
                 VALUES (?, ?, ?, ?)",
                params![
                    m.id.as_str(),
                    status.player_id.as_str(),
                    position as i64,
                    serde_json::to_string(status)?
                ],
            )?;
        }

        let now = chrono::Utc::now().timestamp();
        for (rater, given) in &m.ratings {
            for (ratee, stars) in given {
                tx.execute(
                    "INSERT OR REPLACE INTO match_ratings
                        (match_id, rater_id, ratee_id, stars, updated_at)
                     VALUES (?, ?, ?, ?, ?)",
                    params![m.id.as_str(), rater.as_str(), ratee.as_str(), stars, now],
                )?;
            }
        }

        for voter in &m.finished_voters {
            tx.execute(
                "INSERT OR IGNORE INTO finished_voters (match_id, player_id) VALUES (?, ?)",
                params![m.id.as_str(), voter.as_str()],
            )?;
        }
        for voter in &m.pardoned_voters {
            tx.execute(
                "INSERT OR IGNORE INTO pardoned_voters (match_id, player_id) VALUES (?, ?)",
                params![m.id.as_str(), voter.as_str()],
            )?;
        }

        tx.commit()?;
        Ok(())
    }

    /// Load a whole snapshot document into the store, replacing what was there.
    /// An invalid snapshot leaves the store untouched.
    pub fn import_snapshot(&mut self, snapshot: &Snapshot) -> Result<()> {
        snapshot.validate()?;
        self.clear_all()?;
        for player in &snapshot.players {
            self.upsert_player(player)?;
        }
        for m in &snapshot.matches {
            self.upsert_match(m)?;
        }
        info!(
            "imported {} players and {} matches",
            snapshot.players.len(),
            snapshot.matches.len()
        );
        Ok(())
    }

    pub fn load_players(&self) -> Result<Vec<Player>> {
        let mut stmt = self
            .conn
            .prepare("SELECT doc FROM players ORDER BY player_id")?;
        let docs = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        docs.iter()
            .map(|doc| Ok(serde_json::from_str(doc)?))
            .collect()
    }

    /// Every stored match in date order, with statuses, ratings and voter sets
    pub fn load_matches(&self) -> Result<Vec<Match>> {
        self.query_matches(None)
    }

    pub fn load_match(&self, match_id: &MatchId) -> Result<Option<Match>> {
        Ok(self.query_matches(Some(match_id))?.into_iter().next())
    }

    fn query_matches(&self, only: Option<&MatchId>) -> Result<Vec<Match>> {
        let mut stmt = self.conn.prepare(
            "SELECT match_id, match_date, status, rating_status, opponent, opponent_score
             FROM matches
             WHERE ?1 IS NULL OR match_id = ?1
             ORDER BY match_date, match_id",
        )?;
        let rows = stmt
            .query_map([only.map(MatchId::as_str)], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, String>(3)?,
                    row.get::<_, String>(4)?,
                    row.get::<_, u32>(5)?,
                ))
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        let mut matches = Vec::with_capacity(rows.len());
        for (id, date, status, rating_status, opponent, opponent_score) in rows {
            let id = MatchId::new(id);
            matches.push(Match {
                player_statuses: self.load_player_statuses(&id)?,
                ratings: self.load_ratings(&id)?,
                finished_voters: self.load_voters("finished_voters", &id)?,
                pardoned_voters: self.load_voters("pardoned_voters", &id)?,
                date: MatchDate::new(date),
                status: enum_from_text(status)?,
                rating_status: enum_from_text(rating_status)?,
                opponent,
                opponent_score,
                id,
            });
        }
        Ok(matches)
    }

    pub fn load_snapshot(&self) -> Result<Snapshot> {
        Ok(Snapshot {
            players: self.load_players()?,
            matches: self.load_matches()?,
        })
    }

    fn load_player_statuses(&self, match_id: &MatchId) -> Result<Vec<PlayerMatchStatus>> {
        let mut stmt = self.conn.prepare(
            "SELECT doc FROM match_player_status WHERE match_id = ? ORDER BY position",
        )?;
        let docs = stmt
            .query_map([match_id.as_str()], |row| row.get::<_, String>(0))?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        docs.iter()
            .map(|doc| Ok(serde_json::from_str(doc)?))
            .collect()
    }

    fn load_ratings(&self, match_id: &MatchId) -> Result<BTreeMap<PlayerId, BTreeMap<PlayerId, u8>>> {
        let mut stmt = self.conn.prepare(
            "SELECT rater_id, ratee_id, stars FROM match_ratings WHERE match_id = ?",
        )?;
        let rows = stmt.query_map([match_id.as_str()], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, u8>(2)?,
            ))
        })?;

        let mut ratings: BTreeMap<PlayerId, BTreeMap<PlayerId, u8>> = BTreeMap::new();
        for row in rows {
            let (rater, ratee, stars) = row?;
            ratings
                .entry(PlayerId::new(rater))
                .or_default()
                .insert(PlayerId::new(ratee), stars);
        }
        Ok(ratings)
    }

    fn load_voters(&self, table: &str, match_id: &MatchId) -> Result<BTreeSet<PlayerId>> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT player_id FROM {table} WHERE match_id = ?"))?;
        let voters = stmt
            .query_map([match_id.as_str()], |row| row.get::<_, String>(0))?
            .map(|r| r.map(PlayerId::new))
            .collect::<rusqlite::Result<BTreeSet<_>>>()?;
        Ok(voters)
    }

    /// Store a single rating cell without touching any other rater's data
    pub fn record_rating(
        &self,
        match_id: &MatchId,
        rater: &PlayerId,
        ratee: &PlayerId,
        stars: u8,
    ) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO match_ratings
                (match_id, rater_id, ratee_id, stars, updated_at)
             VALUES (?, ?, ?, ?, ?)",
            params![
                match_id.as_str(),
                rater.as_str(),
                ratee.as_str(),
                stars,
                chrono::Utc::now().timestamp()
            ],
        )?;
        Ok(())
    }

    /// Add `player` to the finished voters. Returns false when already present.
    pub fn add_finished_voter(&self, match_id: &MatchId, player: &PlayerId) -> Result<bool> {
        let inserted = self.conn.execute(
            "INSERT OR IGNORE INTO finished_voters (match_id, player_id) VALUES (?, ?)",
            params![match_id.as_str(), player.as_str()],
        )?;
        Ok(inserted > 0)
    }

    /// Grant or revoke a pardon. Returns whether the stored set changed.
    pub fn set_pardon(&self, match_id: &MatchId, player: &PlayerId, pardoned: bool) -> Result<bool> {
        let changed = if pardoned {
            self.conn.execute(
                "INSERT OR IGNORE INTO pardoned_voters (match_id, player_id) VALUES (?, ?)",
                params![match_id.as_str(), player.as_str()],
            )?
        } else {
            self.conn.execute(
                "DELETE FROM pardoned_voters WHERE match_id = ? AND player_id = ?",
                params![match_id.as_str(), player.as_str()],
            )?
        };
        Ok(changed > 0)
    }

    /// Remove all stored data
    pub fn clear_all(&mut self) -> Result<()> {
        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM match_ratings", [])?;
        tx.execute("DELETE FROM finished_voters", [])?;
        tx.execute("DELETE FROM pardoned_voters", [])?;
        tx.execute("DELETE FROM match_player_status", [])?;
        tx.execute("DELETE FROM matches", [])?;
        tx.execute("DELETE FROM players", [])?;
        tx.commit()?;
        Ok(())
    }
}
