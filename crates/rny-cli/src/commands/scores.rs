use std::path::Path;

use comfy_table::{ContentArrangement, Table};

use crate::scores::{JsonScoreStore, ScoreStore};

pub fn run(path: &Path, guild: &str) -> Result<(), String> {
    let store = JsonScoreStore::new(path);
    let entries = store
        .top(super::GAME_NAME, guild)
        .map_err(|e| e.to_string())?;

    if entries.is_empty() {
        println!("  No scores yet.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Player", "Score", "Achieved"]);

    for (rank, entry) in entries.iter().enumerate() {
        table.add_row(vec![
            (rank + 1).to_string(),
            entry.name.clone(),
            entry.score.to_string(),
            entry.achieved_at.format("%Y-%m-%d %H:%M").to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!(
        "  {} player{}",
        entries.len(),
        if entries.len() == 1 { "" } else { "s" }
    );

    Ok(())
}
