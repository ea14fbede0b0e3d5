use std::str::FromStr;

use chrono::Utc;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::{Budget, Entry, EntryKind, BUDGET_MAX, BUDGET_MIN};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub(crate) enum ValidationError {
    #[error("Amount must be a positive number")]
    InvalidAmount,
    #[error("Note cannot be empty")]
    MissingNote,
    #[error("Budget must be between {min} and {max} kr.")]
    OutOfRange { min: i64, max: i64 },
}

/// The in-memory ledger: every challenge entry (newest first) plus the
/// configured budget. All validation happens here, before an `Entry` is
/// constructed; persistence is the caller's concern.
pub(crate) struct Ledger {
    entries: Vec<Entry>,
    budget: Budget,
    next_id: i64,
}

impl Ledger {
    pub(crate) fn new() -> Self {
        Self::with(Vec::new(), Budget::default(), 1)
    }

    /// Rebuild from persisted state. `next_id` must be above every id in
    /// `entries` so ids are never reused across restarts.
    pub(crate) fn with(entries: Vec<Entry>, budget: Budget, next_id: i64) -> Self {
        Self {
            entries,
            budget,
            next_id,
        }
    }

    pub(crate) fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub(crate) fn budget(&self) -> &Budget {
        &self.budget
    }

    /// Validate and record a new entry at the head of the list.
    ///
    /// The raw amount is parsed as a decimal and rounded to two places; the
    /// raw note is trimmed. On failure nothing is mutated and the error is
    /// directly displayable to the user.
    pub(crate) fn add_entry(
        &mut self,
        kind: EntryKind,
        raw_amount: &str,
        raw_note: &str,
    ) -> Result<Entry, ValidationError> {
        let amount = parse_amount(raw_amount)?;
        let note = raw_note.trim();
        if note.is_empty() {
            return Err(ValidationError::MissingNote);
        }

        let entry = Entry {
            id: self.next_id,
            kind,
            amount,
            note: note.to_string(),
            created_at: Utc::now().to_rfc3339(),
        };
        self.next_id += 1;
        self.entries.insert(0, entry.clone());
        Ok(entry)
    }

    /// Replace the monthly budget. Bounds are enforced here regardless of
    /// input source; the budget screen's stepper merely makes the error
    /// unreachable from the keyboard.
    pub(crate) fn set_budget(&mut self, amount: Decimal) -> Result<(), ValidationError> {
        if !Budget::in_range(amount) {
            return Err(ValidationError::OutOfRange {
                min: BUDGET_MIN,
                max: BUDGET_MAX,
            });
        }
        self.budget = Budget::new(amount);
        Ok(())
    }

    /// Empty the entry list. Idempotent. Confirmation is the caller's
    /// contract; this call never asks. The id counter is not rewound.
    pub(crate) fn reset(&mut self) {
        self.entries.clear();
    }
}

fn parse_amount(raw: &str) -> Result<Decimal, ValidationError> {
    let amount = Decimal::from_str(raw.trim()).map_err(|_| ValidationError::InvalidAmount)?;
    if amount <= Decimal::ZERO {
        return Err(ValidationError::InvalidAmount);
    }
    Ok(amount.round_dp(2))
}
