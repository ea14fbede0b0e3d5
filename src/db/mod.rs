mod schema;

use anyhow::{Context, Result};
use rusqlite::{params, Connection};
use rust_decimal::Decimal;
use std::path::Path;
use std::str::FromStr;

use crate::models::{Budget, Entry, EntryKind, BUDGET_DEFAULT};

const BUDGET_KEY: &str = "monthly_budget";

pub(crate) struct Database {
    conn: Connection,
}

impl Database {
    pub(crate) fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open database: {}", path.display()))?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")
            .context("Failed to set database pragmas")?;
        let mut db = Self { conn };
        db.migrate().context("Database migration failed")?;
        Ok(db)
    }

    #[cfg(test)]
    pub(crate) fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&mut self) -> Result<()> {
        let has_version_table: bool = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version')",
            [],
            |row| row.get(0),
        )?;

        if !has_version_table {
            self.conn.execute_batch(schema::SCHEMA_V1)?;
            self.conn.execute(
                "INSERT INTO schema_version (version) VALUES (?1)",
                params![schema::CURRENT_VERSION],
            )?;
            return Ok(());
        }

        let current: i32 = self
            .conn
            .query_row("SELECT version FROM schema_version LIMIT 1", [], |row| {
                row.get(0)
            })
            .unwrap_or(0);

        for &(from_version, sql) in schema::MIGRATIONS {
            if current <= from_version {
                self.conn.execute_batch(sql)?;
            }
        }

        if current < schema::CURRENT_VERSION {
            self.conn.execute(
                "UPDATE schema_version SET version = ?1",
                params![schema::CURRENT_VERSION],
            )?;
        }

        Ok(())
    }

    // ── Entries ───────────────────────────────────────────────

    pub(crate) fn insert_entry(&self, entry: &Entry) -> Result<()> {
        self.conn.execute(
            "INSERT INTO entries (id, kind, amount, note, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                entry.id,
                entry.kind.as_str(),
                entry.amount.to_string(),
                entry.note,
                entry.created_at,
            ],
        )?;
        Ok(())
    }

    /// Load every stored entry, newest first. Rows that no longer decode to
    /// a valid entry (unknown kind, non-positive or unparseable amount,
    /// blank note) are skipped so a damaged store never blocks startup.
    pub(crate) fn load_entries(&self) -> Result<Vec<Entry>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, kind, amount, note, created_at FROM entries ORDER BY id DESC")?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, String>(4)?,
            ))
        })?;

        let mut entries = Vec::new();
        for row in rows {
            let (id, kind, amount, note, created_at) = row?;
            if let Some(entry) = decode_entry(id, &kind, &amount, &note, created_at) {
                entries.push(entry);
            }
        }
        Ok(entries)
    }

    /// First id that has never been handed out. Backed by sqlite_sequence,
    /// which survives DELETE, so a reset does not recycle ids.
    pub(crate) fn next_entry_id(&self) -> Result<i64> {
        let seq = match self.conn.query_row(
            "SELECT seq FROM sqlite_sequence WHERE name = 'entries'",
            [],
            |row| row.get::<_, i64>(0),
        ) {
            Ok(v) => v,
            Err(rusqlite::Error::QueryReturnedNoRows) => 0,
            Err(e) => return Err(e.into()),
        };
        Ok(seq + 1)
    }

    pub(crate) fn clear_entries(&self) -> Result<()> {
        self.conn.execute("DELETE FROM entries", [])?;
        Ok(())
    }

    // ── Budget ────────────────────────────────────────────────

    /// The stored budget, or the default when the slot is absent, garbage,
    /// or outside the policy range.
    pub(crate) fn load_budget(&self) -> Result<Budget> {
        let stored = match self.conn.query_row(
            "SELECT value FROM settings WHERE key = ?1",
            params![BUDGET_KEY],
            |row| row.get::<_, String>(0),
        ) {
            Ok(v) => Some(v),
            Err(rusqlite::Error::QueryReturnedNoRows) => None,
            Err(e) => return Err(e.into()),
        };

        let monthly = stored
            .and_then(|v| Decimal::from_str(&v).ok())
            .filter(|m| Budget::in_range(*m))
            .unwrap_or_else(|| Decimal::from(BUDGET_DEFAULT));
        Ok(Budget::new(monthly))
    }

    pub(crate) fn save_budget(&self, budget: &Budget) -> Result<()> {
        self.conn.execute(
            "INSERT INTO settings (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = ?2",
            params![BUDGET_KEY, budget.monthly.to_string()],
        )?;
        Ok(())
    }
}

fn decode_entry(
    id: i64,
    kind: &str,
    amount: &str,
    note: &str,
    created_at: String,
) -> Option<Entry> {
    let kind = EntryKind::parse(kind)?;
    let amount = Decimal::from_str(amount).ok()?;
    if amount <= Decimal::ZERO {
        return None;
    }
    let note = note.trim();
    if note.is_empty() {
        return None;
    }
    Some(Entry {
        id,
        kind,
        amount,
        note: note.to_string(),
        created_at,
    })
}

#[cfg(test)]
mod tests;
