use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use chrono::Local;
use rust_decimal::Decimal;

use crate::db::Database;
use crate::feed::{FallbackPool, MotivationFeed};
use crate::ledger::Ledger;
use crate::models::{EntryKind, BUDGET_MAX, BUDGET_MIN, BUDGET_STEP};
use crate::stats::StatsSnapshot;
use crate::ui::util::format_kroner;
use crate::window::ChallengeWindow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Dashboard,
    Entries,
    Budget,
}

impl Screen {
    pub(crate) fn all() -> &'static [Screen] {
        &[Self::Dashboard, Self::Entries, Self::Budget]
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dashboard => write!(f, "Dashboard"),
            Self::Entries => write!(f, "Entries"),
            Self::Budget => write!(f, "Budget"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Command,
    Confirm,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
            Self::Confirm => write!(f, "CONFIRM"),
        }
    }
}

/// Pending action that requires user confirmation.
#[derive(Debug, Clone, Copy)]
pub(crate) enum PendingAction {
    Reset,
}

/// Result of a background motivation fetch, tagged with the generation that
/// requested it so a superseded fetch can be discarded.
pub(crate) enum FeedMsg {
    Tip(u64, String),
    Quote(u64, String),
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) screen: Screen,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,

    // Core state
    pub(crate) ledger: Ledger,
    pub(crate) window: ChallengeWindow,
    pub(crate) stats: StatsSnapshot,

    // Entries list
    pub(crate) entry_index: usize,
    pub(crate) entry_scroll: usize,

    // Motivation feed
    feed: MotivationFeed,
    feed_tx: Sender<FeedMsg>,
    feed_rx: Receiver<FeedMsg>,
    feed_gen: u64,
    pub(crate) tip: Option<String>,
    pub(crate) quote: Option<String>,
    pub(crate) tip_loading: bool,
    pub(crate) quote_loading: bool,

    // Confirmation
    pub(crate) pending_action: Option<PendingAction>,
    pub(crate) confirm_message: String,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new(ledger: Ledger) -> Self {
        let (feed_tx, feed_rx) = mpsc::channel();
        let window = ChallengeWindow::compute(Local::now().date_naive());
        let stats = StatsSnapshot::compute(ledger.entries(), ledger.budget(), &window);

        Self {
            running: true,
            screen: Screen::Dashboard,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            status_message: String::new(),
            show_help: false,

            ledger,
            window,
            stats,

            entry_index: 0,
            entry_scroll: 0,

            feed: MotivationFeed::new(),
            feed_tx,
            feed_rx,
            feed_gen: 0,
            tip: None,
            quote: None,
            tip_loading: false,
            quote_loading: false,

            pending_action: None,
            confirm_message: String::new(),

            visible_rows: 20,
        }
    }

    /// Recompute the window from the wall clock and the stats from the
    /// current ledger snapshot.
    pub(crate) fn refresh(&mut self) {
        self.window = ChallengeWindow::compute(Local::now().date_naive());
        self.stats = StatsSnapshot::compute(self.ledger.entries(), self.ledger.budget(), &self.window);
        if self.entry_index >= self.ledger.entries().len() {
            self.entry_index = self.ledger.entries().len().saturating_sub(1);
        }
    }

    // ── Mutations (persisted best-effort) ─────────────────────

    pub(crate) fn add_entry(
        &mut self,
        kind: EntryKind,
        raw_amount: &str,
        raw_note: &str,
        db: &Database,
    ) {
        match self.ledger.add_entry(kind, raw_amount, raw_note) {
            Ok(entry) => {
                let saved = db.insert_entry(&entry);
                self.refresh();
                match saved {
                    Ok(()) => self.set_status(format!(
                        "{}: {} - {}",
                        entry.kind,
                        format_kroner(entry.amount),
                        entry.note
                    )),
                    Err(e) => self.set_status(format!("Logged in memory, but not saved: {e}")),
                }
            }
            Err(e) => self.set_status(e.to_string()),
        }
    }

    pub(crate) fn set_budget(&mut self, amount: Decimal, db: &Database) {
        match self.ledger.set_budget(amount) {
            Ok(()) => {
                let saved = db.save_budget(self.ledger.budget());
                self.refresh();
                match saved {
                    Ok(()) => self.set_status(format!(
                        "Budget set to {}",
                        format_kroner(self.ledger.budget().monthly)
                    )),
                    Err(e) => self.set_status(format!("Budget changed, but not saved: {e}")),
                }
            }
            Err(e) => self.set_status(e.to_string()),
        }
    }

    /// Step the budget by `steps * 100`, clamped to the policy bounds, so
    /// the keyboard stepper can never trip the range error.
    pub(crate) fn adjust_budget(&mut self, steps: i64, db: &Database) {
        let current = self.ledger.budget().monthly;
        let next = (current + Decimal::from(steps * BUDGET_STEP))
            .clamp(Decimal::from(BUDGET_MIN), Decimal::from(BUDGET_MAX));
        if next != current {
            self.set_budget(next, db);
        }
    }

    pub(crate) fn request_reset(&mut self) {
        let count = self.ledger.entries().len();
        self.confirm_message = format!("Delete all {count} entries and start over?");
        self.pending_action = Some(PendingAction::Reset);
        self.input_mode = InputMode::Confirm;
    }

    /// Only reachable after the confirm prompt answered yes.
    pub(crate) fn perform_reset(&mut self, db: &Database) {
        let count = self.ledger.entries().len();
        self.ledger.reset();
        let cleared = db.clear_entries();
        self.entry_index = 0;
        self.entry_scroll = 0;
        self.refresh();
        match cleared {
            Ok(()) => self.set_status(format!("Cleared {count} entries")),
            Err(e) => self.set_status(format!("Cleared in memory, but not saved: {e}")),
        }
    }

    // ── Motivation feed ───────────────────────────────────────

    /// Kick off both fetches on background threads. A newer request bumps
    /// the generation; stale results are dropped in `poll_feed`, so there is
    /// nothing to cancel.
    pub(crate) fn request_motivation(&mut self) {
        self.feed_gen += 1;
        let generation = self.feed_gen;
        self.tip_loading = true;
        self.quote_loading = true;

        let feed = self.feed.clone();
        let tx = self.feed_tx.clone();
        thread::spawn(move || {
            let tip = feed.tip(&mut FallbackPool::new());
            let _ = tx.send(FeedMsg::Tip(generation, tip));
        });

        let feed = self.feed.clone();
        let tx = self.feed_tx.clone();
        thread::spawn(move || {
            let quote = feed.quote(&mut FallbackPool::new());
            let _ = tx.send(FeedMsg::Quote(generation, quote));
        });
    }

    /// Drain finished fetches; last write for the current generation wins.
    pub(crate) fn poll_feed(&mut self) {
        while let Ok(msg) = self.feed_rx.try_recv() {
            match msg {
                FeedMsg::Tip(generation, tip) if generation == self.feed_gen => {
                    self.tip = Some(tip);
                    self.tip_loading = false;
                }
                FeedMsg::Quote(generation, quote) if generation == self.feed_gen => {
                    self.quote = Some(quote);
                    self.quote_loading = false;
                }
                _ => {}
            }
        }
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}
