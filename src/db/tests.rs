#![allow(clippy::unwrap_used)]

use rusqlite::params;
use rust_decimal_macros::dec;

use super::*;

fn make_entry(id: i64, kind: EntryKind, amount: Decimal, note: &str) -> Entry {
    Entry {
        id,
        kind,
        amount,
        note: note.into(),
        created_at: "2026-02-07T12:00:00+00:00".into(),
    }
}

// ── Entries ───────────────────────────────────────────────────

#[test]
fn test_entry_roundtrip() {
    let db = Database::open_in_memory().unwrap();
    let entry = make_entry(1, EntryKind::Essential, dec!(149.50), "Groceries");
    db.insert_entry(&entry).unwrap();

    let loaded = db.load_entries().unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].id, 1);
    assert_eq!(loaded[0].kind, EntryKind::Essential);
    assert_eq!(loaded[0].amount, dec!(149.50));
    assert_eq!(loaded[0].note, "Groceries");
    assert_eq!(loaded[0].created_at, "2026-02-07T12:00:00+00:00");
}

#[test]
fn test_load_entries_newest_first() {
    let db = Database::open_in_memory().unwrap();
    db.insert_entry(&make_entry(1, EntryKind::Essential, dec!(10), "first"))
        .unwrap();
    db.insert_entry(&make_entry(2, EntryKind::Skip, dec!(20), "second"))
        .unwrap();
    db.insert_entry(&make_entry(3, EntryKind::Essential, dec!(30), "third"))
        .unwrap();

    let notes: Vec<String> = db
        .load_entries()
        .unwrap()
        .into_iter()
        .map(|e| e.note)
        .collect();
    assert_eq!(notes, vec!["third", "second", "first"]);
}

#[test]
fn test_malformed_rows_are_skipped() {
    let db = Database::open_in_memory().unwrap();
    db.insert_entry(&make_entry(1, EntryKind::Skip, dec!(25), "good"))
        .unwrap();
    // Damage the store directly: unknown kind, garbage amount, zero amount, blank note
    for (id, kind, amount, note) in [
        (2, "groceries", "10", "unknown kind"),
        (3, "essential", "banana", "bad amount"),
        (4, "essential", "0", "zero amount"),
        (5, "skip", "-5", "negative amount"),
        (6, "essential", "10", "   "),
    ] {
        db.conn
            .execute(
                "INSERT INTO entries (id, kind, amount, note, created_at) VALUES (?1, ?2, ?3, ?4, '')",
                params![id, kind, amount, note],
            )
            .unwrap();
    }

    let loaded = db.load_entries().unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].note, "good");
}

#[test]
fn test_clear_entries() {
    let db = Database::open_in_memory().unwrap();
    db.insert_entry(&make_entry(1, EntryKind::Essential, dec!(10), "a"))
        .unwrap();
    db.clear_entries().unwrap();
    assert!(db.load_entries().unwrap().is_empty());
    // Idempotent
    db.clear_entries().unwrap();
    assert!(db.load_entries().unwrap().is_empty());
}

// ── Id high-water mark ────────────────────────────────────────

#[test]
fn test_next_entry_id_empty_store() {
    let db = Database::open_in_memory().unwrap();
    assert_eq!(db.next_entry_id().unwrap(), 1);
}

#[test]
fn test_next_entry_id_after_inserts() {
    let db = Database::open_in_memory().unwrap();
    db.insert_entry(&make_entry(1, EntryKind::Essential, dec!(10), "a"))
        .unwrap();
    db.insert_entry(&make_entry(2, EntryKind::Skip, dec!(20), "b"))
        .unwrap();
    assert_eq!(db.next_entry_id().unwrap(), 3);
}

#[test]
fn test_ids_not_recycled_after_clear() {
    let db = Database::open_in_memory().unwrap();
    db.insert_entry(&make_entry(1, EntryKind::Essential, dec!(10), "a"))
        .unwrap();
    db.insert_entry(&make_entry(2, EntryKind::Skip, dec!(20), "b"))
        .unwrap();
    db.clear_entries().unwrap();
    assert_eq!(db.next_entry_id().unwrap(), 3);
}

// ── Budget slot ───────────────────────────────────────────────

#[test]
fn test_budget_default_when_absent() {
    let db = Database::open_in_memory().unwrap();
    assert_eq!(db.load_budget().unwrap().monthly, dec!(4500));
}

#[test]
fn test_budget_roundtrip() {
    let db = Database::open_in_memory().unwrap();
    db.save_budget(&Budget::new(dec!(6000))).unwrap();
    assert_eq!(db.load_budget().unwrap().monthly, dec!(6000));

    db.save_budget(&Budget::new(dec!(2500))).unwrap();
    assert_eq!(db.load_budget().unwrap().monthly, dec!(2500));
}

#[test]
fn test_budget_default_on_garbage() {
    let db = Database::open_in_memory().unwrap();
    db.conn
        .execute(
            "INSERT INTO settings (key, value) VALUES ('monthly_budget', 'banana')",
            [],
        )
        .unwrap();
    assert_eq!(db.load_budget().unwrap().monthly, dec!(4500));
}

#[test]
fn test_budget_default_when_out_of_range() {
    let db = Database::open_in_memory().unwrap();
    db.conn
        .execute(
            "INSERT INTO settings (key, value) VALUES ('monthly_budget', '999999')",
            [],
        )
        .unwrap();
    assert_eq!(db.load_budget().unwrap().monthly, dec!(4500));
}

#[test]
fn test_reset_leaves_budget_untouched() {
    let db = Database::open_in_memory().unwrap();
    db.save_budget(&Budget::new(dec!(3000))).unwrap();
    db.insert_entry(&make_entry(1, EntryKind::Essential, dec!(10), "a"))
        .unwrap();
    db.clear_entries().unwrap();
    assert_eq!(db.load_budget().unwrap().monthly, dec!(3000));
}

// ── On-disk persistence ───────────────────────────────────────

#[test]
fn test_reopen_preserves_state() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sparetui.db");

    {
        let db = Database::open(&path).unwrap();
        db.insert_entry(&make_entry(1, EntryKind::Skip, dec!(300), "impulse buy"))
            .unwrap();
        db.save_budget(&Budget::new(dec!(5000))).unwrap();
    }

    let db = Database::open(&path).unwrap();
    let entries = db.load_entries().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].note, "impulse buy");
    assert_eq!(db.load_budget().unwrap().monthly, dec!(5000));
    assert_eq!(db.next_entry_id().unwrap(), 2);
}
