//! CLI argument definitions and parsing.

pub mod types;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::{MatchId, PlayerId};

/// Acting player shared between commands
#[derive(Debug, Args)]
pub struct PlayerArg {
    /// Acting player ID (or set `MATCHDAY_PLAYER_ID` env var).
    #[clap(long, short)]
    pub player: Option<PlayerId>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Load a snapshot document (players + matches) into the local store,
    /// replacing its content.
    Import {
        /// Path to the snapshot JSON file.
        path: PathBuf,
    },

    /// Write the stored snapshot as JSON.
    Export {
        /// Output file; stdout when omitted.
        #[clap(long, short)]
        output: Option<PathBuf>,
    },

    /// List finished matches with your vote state, most recent first.
    Room {
        #[clap(flatten)]
        player: PlayerArg,

        /// Reference date for expiry (YYYY-MM-DD); defaults to today.
        #[clap(long)]
        today: Option<NaiveDate>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Show missed votes and the matches they lock.
    Penalties {
        #[clap(flatten)]
        player: PlayerArg,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Rate a teammate for a match (1 to 5 stars).
    Vote {
        match_id: MatchId,
        ratee: PlayerId,
        stars: u8,

        #[clap(flatten)]
        player: PlayerArg,
    },

    /// Submit your vote once every eligible teammate is rated.
    Finalize {
        match_id: MatchId,

        #[clap(flatten)]
        player: PlayerArg,
    },

    /// Decline to vote. The missed vote still counts towards penalties.
    Abstain {
        match_id: MatchId,

        #[clap(flatten)]
        player: PlayerArg,
    },

    /// Exempt a player from voting on a match (admin only).
    Pardon {
        match_id: MatchId,
        target: PlayerId,

        #[clap(flatten)]
        player: PlayerArg,
    },

    /// Withdraw a pardon (admin only).
    RevokePardon {
        match_id: MatchId,
        target: PlayerId,

        #[clap(flatten)]
        player: PlayerArg,
    },

    /// List players who did not finish a vote, with their pardon state (admin only).
    Pardons {
        #[clap(flatten)]
        player: PlayerArg,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Per-player totals across all matches.
    Stats {
        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Fantasy credits leaderboard.
    Credits {
        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Rating table of a single match.
    Ranking {
        match_id: MatchId,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Average rating leaderboard; hidden while your latest match is locked.
    HallOfFame {
        #[clap(flatten)]
        player: PlayerArg,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "matchday", about = "Team match voting, penalties and statistics")]
pub struct Matchday {
    /// Database file (or set `MATCHDAY_DB_PATH` env var).
    #[clap(long, global = true)]
    pub db: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Commands,
}
