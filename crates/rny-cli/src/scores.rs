//! High-score persistence.
//!
//! Scores are kept per game, then per guild, then per player. A player's entry
//! only changes when they beat their own best.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from reading or writing the score file.
#[derive(Debug, Error)]
pub enum ScoreError {
    /// The file could not be read or written.
    #[error("cannot access {path}: {source}")]
    Io {
        /// File involved.
        path: PathBuf,
        /// Underlying error.
        source: io::Error,
    },

    /// The file is not a valid score table.
    #[error("invalid score file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for score operations.
pub type ScoreResult<T> = Result<T, ScoreError>;

/// A player's best result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScore {
    /// Display name at the time of the score.
    pub name: String,
    /// Final score.
    pub score: u32,
    /// When it was achieved.
    pub achieved_at: DateTime<Utc>,
}

/// game name -> guild id -> player id -> best score.
pub type HighScores = BTreeMap<String, BTreeMap<String, BTreeMap<String, HighScore>>>;

/// Somewhere high scores are kept.
pub trait ScoreStore {
    /// Record a final score. Returns whether it replaced the player's best.
    fn submit(
        &mut self,
        game: &str,
        player_id: &str,
        player_name: &str,
        score: u32,
        guild_id: &str,
    ) -> ScoreResult<bool>;

    /// Entries of one guild, best first.
    fn top(&self, game: &str, guild_id: &str) -> ScoreResult<Vec<HighScore>>;
}

/// Score table stored as one JSON file.
pub struct JsonScoreStore {
    path: PathBuf,
}

impl JsonScoreStore {
    /// Use the file at `path`. It is created on the first submit.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load(&self) -> ScoreResult<HighScores> {
        match fs::read_to_string(&self.path) {
            Ok(json) => Ok(serde_json::from_str(&json)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("no score file at {}", self.path.display());
                Ok(HighScores::new())
            }
            Err(source) => Err(io_error(&self.path, source)),
        }
    }

    fn save(&self, scores: &HighScores) -> ScoreResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| io_error(parent, e))?;
        }
        let json = serde_json::to_string_pretty(scores)?;
        fs::write(&self.path, json).map_err(|e| io_error(&self.path, e))
    }
}

fn io_error(path: &Path, source: io::Error) -> ScoreError {
    ScoreError::Io {
        path: path.to_path_buf(),
        source,
    }
}

impl ScoreStore for JsonScoreStore {
    fn submit(
        &mut self,
        game: &str,
        player_id: &str,
        player_name: &str,
        score: u32,
        guild_id: &str,
    ) -> ScoreResult<bool> {
        let mut scores = self.load()?;
        let players = scores
            .entry(game.to_string())
            .or_default()
            .entry(guild_id.to_string())
            .or_default();

        if players.get(player_id).is_some_and(|best| best.score >= score) {
            return Ok(false);
        }
        players.insert(
            player_id.to_string(),
            HighScore {
                name: player_name.to_string(),
                score,
                achieved_at: Utc::now(),
            },
        );
        self.save(&scores)?;
        log::info!("new high score {score} for {player_id} in {game}/{guild_id}");
        Ok(true)
    }

    fn top(&self, game: &str, guild_id: &str) -> ScoreResult<Vec<HighScore>> {
        let scores = self.load()?;
        let mut entries: Vec<HighScore> = scores
            .get(game)
            .and_then(|guilds| guilds.get(guild_id))
            .map(|players| players.values().cloned().collect())
            .unwrap_or_default();
        entries.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.name.cmp(&b.name)));
        Ok(entries)
    }
}
