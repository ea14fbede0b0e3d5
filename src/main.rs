mod db;
mod feed;
mod ledger;
mod models;
mod run;
mod stats;
mod ui;
mod window;

use anyhow::{Context, Result};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let db_path = get_db_path()?;
    let mut db = db::Database::open(&db_path)?;
    let ledger = load_ledger(&db);

    match args.len() {
        1 => run::as_tui(&mut db, ledger),
        _ => run::as_cli(&args, &mut db, ledger),
    }
}

/// Build the in-memory ledger from storage. A damaged store degrades to the
/// documented defaults instead of failing startup.
fn load_ledger(db: &db::Database) -> ledger::Ledger {
    let entries = db.load_entries().unwrap_or_default();
    let budget = db.load_budget().unwrap_or_default();
    let next_id = db
        .next_entry_id()
        .unwrap_or_else(|_| entries.first().map_or(1, |e| e.id + 1));
    ledger::Ledger::with(entries, budget, next_id)
}

fn get_db_path() -> Result<std::path::PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("dk", "sparetui", "SpareTUI")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;
    Ok(data_dir.join("sparetui.db"))
}
