use std::collections::HashMap;
use std::str::FromStr;
use std::sync::LazyLock;

use rust_decimal::Decimal;

use super::app::{App, InputMode, Screen};
use crate::db::Database;
use crate::models::EntryKind;

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App, &mut Database) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit SpareTUI", cmd_quit, r);
    register_command!("quit", "Quit SpareTUI", cmd_quit, r);
    register_command!("d", "Go to Dashboard", cmd_dashboard, r);
    register_command!("dashboard", "Go to Dashboard", cmd_dashboard, r);
    register_command!("e", "Go to Entries", cmd_entries, r);
    register_command!("entries", "Go to Entries", cmd_entries, r);
    register_command!("b", "Go to Budget", cmd_budget_screen, r);
    register_command!(
        "essential",
        "Log an essential purchase (e.g. :essential 149.50 groceries)",
        cmd_essential,
        r
    );
    register_command!(
        "ess",
        "Log an essential purchase (e.g. :ess 149.50 groceries)",
        cmd_essential,
        r
    );
    register_command!(
        "skip",
        "Log a skipped temptation (e.g. :skip 300 concert tickets)",
        cmd_skip,
        r
    );
    register_command!(
        "budget",
        "Set the monthly budget (e.g. :budget 4500)",
        cmd_set_budget,
        r
    );
    register_command!("reset", "Delete all entries (asks first)", cmd_reset, r);
    register_command!("refresh", "Fetch a fresh tip and quote", cmd_refresh, r);
    register_command!("motivation", "Fetch a fresh tip and quote", cmd_refresh, r);
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!("h", "Show available commands", cmd_help, r);

    r
});

pub(crate) fn handle_command(input: &str, app: &mut App, db: &mut Database) -> anyhow::Result<()> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(());
    }

    let (name, args) = match input.split_once(char::is_whitespace) {
        Some((name, args)) => (name, args.trim()),
        None => (input, ""),
    };

    match COMMANDS.get(name) {
        Some(cmd) => (cmd.run)(args, app, db),
        None => {
            app.set_status(format!("Unknown command: {name} (:help lists commands)"));
            Ok(())
        }
    }
}

// ── Command handlers ─────────────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App, _db: &mut Database) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_dashboard(_args: &str, app: &mut App, _db: &mut Database) -> anyhow::Result<()> {
    app.screen = Screen::Dashboard;
    app.refresh();
    Ok(())
}

fn cmd_entries(_args: &str, app: &mut App, _db: &mut Database) -> anyhow::Result<()> {
    app.screen = Screen::Entries;
    app.refresh();
    Ok(())
}

fn cmd_budget_screen(_args: &str, app: &mut App, _db: &mut Database) -> anyhow::Result<()> {
    app.screen = Screen::Budget;
    app.refresh();
    Ok(())
}

fn cmd_essential(args: &str, app: &mut App, db: &mut Database) -> anyhow::Result<()> {
    add_entry_command(EntryKind::Essential, args, app, db)
}

fn cmd_skip(args: &str, app: &mut App, db: &mut Database) -> anyhow::Result<()> {
    add_entry_command(EntryKind::Skip, args, app, db)
}

fn add_entry_command(
    kind: EntryKind,
    args: &str,
    app: &mut App,
    db: &mut Database,
) -> anyhow::Result<()> {
    if args.is_empty() {
        let name = match kind {
            EntryKind::Essential => "essential",
            EntryKind::Skip => "skip",
        };
        app.set_status(format!("Usage: :{name} <amount> <note>"));
        return Ok(());
    }

    let (amount, note) = match args.split_once(char::is_whitespace) {
        Some((amount, note)) => (amount, note),
        None => (args, ""),
    };
    app.add_entry(kind, amount, note, db);
    Ok(())
}

fn cmd_set_budget(args: &str, app: &mut App, db: &mut Database) -> anyhow::Result<()> {
    if args.is_empty() {
        app.set_status("Usage: :budget <amount>");
        return Ok(());
    }
    match Decimal::from_str(args) {
        Ok(amount) => app.set_budget(amount, db),
        Err(_) => app.set_status("Budget must be a number (e.g. :budget 4500)"),
    }
    Ok(())
}

fn cmd_reset(_args: &str, app: &mut App, _db: &mut Database) -> anyhow::Result<()> {
    app.request_reset();
    Ok(())
}

fn cmd_refresh(_args: &str, app: &mut App, _db: &mut Database) -> anyhow::Result<()> {
    app.request_motivation();
    app.set_status("Fetching fresh motivation...");
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App, _db: &mut Database) -> anyhow::Result<()> {
    app.show_help = true;
    app.input_mode = InputMode::Normal;
    Ok(())
}
