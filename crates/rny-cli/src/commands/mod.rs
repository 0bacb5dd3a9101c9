pub mod play;
pub mod scores;

use std::path::PathBuf;

/// Name the high scores are filed under.
pub const GAME_NAME: &str = "ruins_of_new_york";

/// Per-user data directory for scores and saves.
fn data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ruins-of-new-york")
}

pub fn default_scores_path() -> PathBuf {
    data_dir().join("scores.json")
}

pub fn default_saves_dir() -> PathBuf {
    data_dir().join("saves")
}
