//! CLI frontend for the Ruins of New York text adventure.

mod commands;
mod scores;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "rny",
    about = "Ruins of New York, a post-apocalyptic text adventure",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the adventure, reading commands from stdin
    Play {
        /// Name shown in the high-score table
        #[arg(short, long, default_value = "Wanderer")]
        name: String,

        /// Stable player id the high score is kept under
        #[arg(long, default_value = "local")]
        player_id: String,

        /// Guild (server) the high score belongs to
        #[arg(short, long, default_value = "local")]
        guild: String,

        /// Turn limit for a new game
        #[arg(long, conflicts_with = "resume")]
        max_turns: Option<u32>,

        /// High-score file (default: <data dir>/ruins-of-new-york/scores.json)
        #[arg(long)]
        scores: Option<PathBuf>,

        /// Directory for saved games (default: <data dir>/ruins-of-new-york/saves)
        #[arg(long)]
        saves: Option<PathBuf>,

        /// Continue from a saved game
        #[arg(short, long)]
        resume: Option<PathBuf>,
    },

    /// Show the high-score table
    Scores {
        /// Guild (server) to show
        #[arg(short, long, default_value = "local")]
        guild: String,

        /// High-score file (default: <data dir>/ruins-of-new-york/scores.json)
        #[arg(long)]
        scores: Option<PathBuf>,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            name,
            player_id,
            guild,
            max_turns,
            scores,
            saves,
            resume,
        } => commands::play::run(commands::play::PlayOptions {
            name,
            player_id,
            guild,
            max_turns,
            scores: scores.unwrap_or_else(commands::default_scores_path),
            saves: saves.unwrap_or_else(commands::default_saves_dir),
            resume,
        }),
        Commands::Scores { guild, scores } => commands::scores::run(
            &scores.unwrap_or_else(commands::default_scores_path),
            &guild,
        ),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
