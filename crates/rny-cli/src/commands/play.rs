//! Interactive play loop over stdin.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use colored::Colorize;

use rny_engine::{EngineConfig, Response, ResponseKind, SaveGame, Session};

use crate::scores::{JsonScoreStore, ScoreStore};

/// Everything `rny play` was asked to do.
pub struct PlayOptions {
    pub name: String,
    pub player_id: String,
    pub guild: String,
    pub max_turns: Option<u32>,
    pub scores: PathBuf,
    pub saves: PathBuf,
    pub resume: Option<PathBuf>,
}

pub fn run(options: PlayOptions) -> Result<(), String> {
    check_player_id(&options.player_id)?;

    let mut session = match &options.resume {
        Some(path) => resume(path)?,
        None => {
            let mut config = EngineConfig::default();
            if let Some(turns) = options.max_turns {
                config = config.with_max_turns(turns);
            }
            Session::new(config).map_err(|e| format!("failed to start game: {e}"))?
        }
    };

    if options.resume.is_some() {
        println!("  {} saved game\n", "Resuming".bold());
        print_response(&session.describe());
    } else {
        print_response(&session.intro());
    }

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    while !session.is_game_over() {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let response = session.process_command(input);
        print_response(&response);

        if let Some(save) = session.take_save_request() {
            let path = write_save(&options.saves, &options.player_id, &save)?;
            println!("  Saved to {}\n", path.display());
        }
    }

    finish(&session, &options)
}

fn print_response(response: &Response) {
    let text = match response.kind {
        ResponseKind::Ok => response.text.normal(),
        ResponseKind::InvalidInput | ResponseKind::PreconditionNotMet => {
            response.text.yellow()
        }
        ResponseKind::TerminalSuccess => response.text.green().bold(),
        ResponseKind::TurnLimitReached | ResponseKind::GameOver => response.text.red(),
    };
    println!("{text}");
    if let Some(image) = &response.image {
        println!("{}", format!("[image: {image}]").dimmed());
    }
    println!();
}

fn resume(path: &Path) -> Result<Session, String> {
    let json = fs::read_to_string(path)
        .map_err(|e| format!("cannot read save {}: {e}", path.display()))?;
    let save: SaveGame =
        serde_json::from_str(&json).map_err(|e| format!("invalid save {}: {e}", path.display()))?;
    Session::restore(save).map_err(|e| format!("cannot restore save: {e}"))
}

/// Player ids name save files, so they must stay inside the saves directory.
fn check_player_id(player_id: &str) -> Result<(), String> {
    let valid = !player_id.is_empty()
        && player_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(format!(
            "invalid player id '{player_id}': use letters, digits, '-' or '_'"
        ))
    }
}

fn write_save(dir: &Path, player_id: &str, save: &SaveGame) -> Result<PathBuf, String> {
    fs::create_dir_all(dir).map_err(|e| format!("cannot create {}: {e}", dir.display()))?;
    let path = dir.join(format!("{player_id}.json"));
    let json = serde_json::to_string_pretty(save).map_err(|e| e.to_string())?;
    fs::write(&path, json).map_err(|e| format!("cannot write {}: {e}", path.display()))?;
    log::info!("saved game to {}", path.display());
    Ok(path)
}

fn finish(session: &Session, options: &PlayOptions) -> Result<(), String> {
    let total = session.score().total();
    println!("  {}", format!("Final score: {total}").bold());

    let mut store = JsonScoreStore::new(&options.scores);
    let improved = store
        .submit(
            super::GAME_NAME,
            &options.player_id,
            &options.name,
            total,
            &options.guild,
        )
        .map_err(|e| e.to_string())?;
    if improved {
        println!("  {}", "New high score!".green());
    }
    Ok(())
}
