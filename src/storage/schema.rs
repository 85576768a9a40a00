//! Database schema and connection management

use crate::error::MatchdayError;
use anyhow::Result;
use dirs::data_dir;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

/// Connection manager for the local match store
pub struct MatchDatabase {
    pub(crate) conn: Connection,
}

impl MatchDatabase {
    /// Open the database at the default location and ensure tables exist
    pub fn new() -> Result<Self> {
        Self::open(&Self::database_path()?)
    }

    /// Open (or create) the database at `path`
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        conn.execute("PRAGMA foreign_keys = ON", [])?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// In-memory database, for tests and dry runs
    pub fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute("PRAGMA foreign_keys = ON", [])?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Get the path to the database file
    pub fn database_path() -> Result<PathBuf> {
        let data_dir = data_dir().ok_or_else(|| MatchdayError::Storage {
            message: "Could not determine data directory".to_string(),
        })?;
        Ok(data_dir.join("matchday").join("matchday.db"))
    }

    /// Initialize the database schema
    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS players (
                player_id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                doc TEXT NOT NULL
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS matches (
                match_id TEXT PRIMARY KEY,
                match_date TEXT NOT NULL,
                status TEXT NOT NULL,
                rating_status TEXT NOT NULL,
                opponent TEXT NOT NULL,
                opponent_score INTEGER NOT NULL
            )",
            [],
        )?;

        // One row per player record, kept in the order the match lists them
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS match_player_status (
                match_id TEXT NOT NULL,
                player_id TEXT NOT NULL,
                position INTEGER NOT NULL,
                doc TEXT NOT NULL,
                PRIMARY KEY (match_id, player_id),
                FOREIGN KEY (match_id) REFERENCES matches(match_id) ON DELETE CASCADE
            )",
            [],
        )?;

        // Each (rater, ratee) cell is its own row so concurrent raters never clash
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS match_ratings (
                match_id TEXT NOT NULL,
                rater_id TEXT NOT NULL,
                ratee_id TEXT NOT NULL,
                stars INTEGER NOT NULL,
                updated_at INTEGER NOT NULL,
                PRIMARY KEY (match_id, rater_id, ratee_id),
                FOREIGN KEY (match_id) REFERENCES matches(match_id) ON DELETE CASCADE
            )",
            [],
        )?;

        for table in ["finished_voters", "pardoned_voters"] {
            self.conn.execute(
                &format!(
                    "CREATE TABLE IF NOT EXISTS {table} (
                        match_id TEXT NOT NULL,
                        player_id TEXT NOT NULL,
                        PRIMARY KEY (match_id, player_id),
                        FOREIGN KEY (match_id) REFERENCES matches(match_id) ON DELETE CASCADE
                    )"
                ),
                [],
            )?;
        }

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_ratings_ratee
             ON match_ratings(ratee_id)",
            [],
        )?;

        Ok(())
    }
}
