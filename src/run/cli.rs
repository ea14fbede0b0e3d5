use std::thread;

use anyhow::Result;
use chrono::Local;

use crate::db::Database;
use crate::feed::{FallbackPool, MotivationFeed};
use crate::ledger::Ledger;
use crate::models::EntryKind;
use crate::stats::StatsSnapshot;
use crate::ui::util::{format_entry_date, format_kroner, format_kroner_delta};
use crate::window::ChallengeWindow;

pub(crate) fn as_cli(args: &[String], db: &mut Database, mut ledger: Ledger) -> Result<()> {
    match args[1].as_str() {
        "add" | "essential" => cli_add(EntryKind::Essential, &args[2..], db, &mut ledger),
        "skip" => cli_add(EntryKind::Skip, &args[2..], db, &mut ledger),
        "budget" => cli_budget(&args[2..], db, &mut ledger),
        "summary" | "s" => cli_summary(&ledger),
        "entries" | "list" => cli_entries(&ledger),
        "reset" => cli_reset(&args[2..], db, &mut ledger),
        "motivation" | "m" => cli_motivation(),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("sparetui {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("SpareTUI - essentials-only February challenge tracker");
    println!();
    println!("Usage: sparetui [command]");
    println!();
    println!("Commands:");
    println!("  (none)                        Launch interactive TUI");
    println!("  add <amount> <note...>        Log an essential purchase");
    println!("  skip <amount> <note...>       Log a skipped temptation");
    println!("  budget <amount>               Set the monthly budget (1500-12000)");
    println!("  summary                       Print the challenge summary");
    println!("  entries                       List all logged entries");
    println!("  reset --yes                   Delete all entries (budget stays)");
    println!("  motivation                    Print a tip and a quote");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
}

fn cli_add(
    kind: EntryKind,
    args: &[String],
    db: &mut Database,
    ledger: &mut Ledger,
) -> Result<()> {
    if args.is_empty() {
        let name = kind.as_str();
        anyhow::bail!("Usage: sparetui {name} <amount> <note...>");
    }

    let amount = &args[0];
    let note = args[1..].join(" ");

    let entry = match ledger.add_entry(kind, amount, &note) {
        Ok(entry) => entry,
        Err(e) => anyhow::bail!("{e}"),
    };
    if let Err(e) = db.insert_entry(&entry) {
        eprintln!("Warning: entry not saved: {e}");
    }

    println!(
        "{}: {} - {}",
        entry.kind,
        format_kroner(entry.amount),
        entry.note
    );

    let window = ChallengeWindow::compute(Local::now().date_naive());
    let stats = StatsSnapshot::compute(ledger.entries(), ledger.budget(), &window);
    println!("Saved so far: {}", format_kroner(stats.saved_amount));
    Ok(())
}

fn cli_budget(args: &[String], db: &mut Database, ledger: &mut Ledger) -> Result<()> {
    let raw = args
        .first()
        .ok_or_else(|| anyhow::anyhow!("Usage: sparetui budget <amount>"))?;
    let amount = raw
        .parse::<rust_decimal::Decimal>()
        .map_err(|_| anyhow::anyhow!("Budget must be a number, got '{raw}'"))?;

    if let Err(e) = ledger.set_budget(amount) {
        anyhow::bail!("{e}");
    }
    if let Err(e) = db.save_budget(ledger.budget()) {
        eprintln!("Warning: budget not saved: {e}");
    }

    let window = ChallengeWindow::compute(Local::now().date_naive());
    let stats = StatsSnapshot::compute(ledger.entries(), ledger.budget(), &window);
    println!(
        "Budget set to {} ({}/day across {} days)",
        format_kroner(ledger.budget().monthly),
        format_kroner(stats.daily_allowance),
        window.days_in_month
    );
    Ok(())
}

fn cli_summary(ledger: &Ledger) -> Result<()> {
    let window = ChallengeWindow::compute(Local::now().date_naive());
    let stats = StatsSnapshot::compute(ledger.entries(), ledger.budget(), &window);

    println!("SpareTUI - February {} challenge", window.year);
    println!("{}", "─".repeat(44));
    if window.is_active {
        println!(
            "  Day:             {} of {} ({} left)",
            window.day_of_month, window.days_in_month, window.days_left
        );
    } else {
        println!("  Starts in:       {} days", window.days_until_start);
    }
    println!(
        "  Budget:          {}",
        format_kroner(ledger.budget().monthly)
    );
    println!(
        "  Daily allowance: {}",
        format_kroner(stats.daily_allowance)
    );
    println!(
        "  Essentials:      {} ({} entries)",
        format_kroner(stats.essential_total),
        stats.essential_count
    );
    println!(
        "  Skipped:         {} ({} temptations)",
        format_kroner(stats.skip_total),
        stats.skip_count
    );
    if window.is_active {
        let pace = if stats.budget_delta >= rust_decimal::Decimal::ZERO {
            "under pace"
        } else {
            "over pace"
        };
        println!(
            "  Pace target:     {}",
            format_kroner(stats.budget_target_so_far)
        );
        println!(
            "  Pace delta:      {} ({pace})",
            format_kroner_delta(stats.budget_delta)
        );
    }
    println!("  Saved:           {}", format_kroner(stats.saved_amount));
    Ok(())
}

fn cli_entries(ledger: &Ledger) -> Result<()> {
    let entries = ledger.entries();
    if entries.is_empty() {
        println!("No entries yet");
        return Ok(());
    }

    println!("{:<5} {:<9} {:<10} {:<12} Note", "ID", "Date", "Kind", "Amount");
    println!("{}", "─".repeat(60));
    for entry in entries {
        println!(
            "{:<5} {:<9} {:<10} {:<12} {}",
            entry.id,
            format_entry_date(&entry.created_at),
            entry.kind.to_string(),
            format_kroner(entry.amount),
            entry.note,
        );
    }
    Ok(())
}

fn cli_reset(args: &[String], db: &mut Database, ledger: &mut Ledger) -> Result<()> {
    let count = ledger.entries().len();
    let confirmed = args.iter().any(|a| a == "--yes" || a == "-y");
    if !confirmed {
        anyhow::bail!("Refusing to delete {count} entries without --yes");
    }

    ledger.reset();
    if let Err(e) = db.clear_entries() {
        eprintln!("Warning: entries cleared in memory, but not on disk: {e}");
    }
    println!("Cleared {count} entries");
    Ok(())
}

fn cli_motivation() -> Result<()> {
    let feed = MotivationFeed::new();

    let tip_feed = feed.clone();
    let tip_handle = thread::spawn(move || tip_feed.tip(&mut FallbackPool::new()));
    let quote = feed.quote(&mut FallbackPool::new());
    let tip = tip_handle
        .join()
        .unwrap_or_else(|_| FallbackPool::new().tip().to_string());

    println!("Tip:   {tip}");
    println!("Quote: {quote}");
    Ok(())
}
