#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::StatsSnapshot;
use crate::models::{Budget, Entry, EntryKind};
use crate::window::ChallengeWindow;

fn entry(kind: EntryKind, amount: Decimal) -> Entry {
    Entry {
        id: 0,
        kind,
        amount,
        note: "Test".into(),
        created_at: "2026-02-07T12:00:00+00:00".into(),
    }
}

fn window_on(y: i32, m: u32, d: u32) -> ChallengeWindow {
    ChallengeWindow::compute(NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

#[test]
fn test_empty_ledger() {
    let stats = StatsSnapshot::compute(&[], &Budget::default(), &window_on(2025, 2, 10));
    assert_eq!(stats.essential_total, Decimal::ZERO);
    assert_eq!(stats.skip_total, Decimal::ZERO);
    assert_eq!(stats.essential_count, 0);
    assert_eq!(stats.skip_count, 0);
    assert_eq!(stats.average_spend, Decimal::ZERO);
    assert_eq!(stats.saved_amount, dec!(4500));
    assert_eq!(stats.progress, Decimal::ZERO);
}

#[test]
fn test_partition_totals() {
    let entries = [
        entry(EntryKind::Essential, dec!(100.50)),
        entry(EntryKind::Skip, dec!(75)),
        entry(EntryKind::Essential, dec!(49.50)),
        entry(EntryKind::Skip, dec!(25)),
    ];
    let stats = StatsSnapshot::compute(&entries, &Budget::default(), &window_on(2025, 2, 10));
    assert_eq!(stats.essential_total, dec!(150.00));
    assert_eq!(stats.skip_total, dec!(100));
    assert_eq!(stats.essential_count, 2);
    assert_eq!(stats.skip_count, 2);
}

#[test]
fn test_pacing_scenario_day_10() {
    // budget 4500, 28-day February, day 10, 1400 spent
    let entries = [entry(EntryKind::Essential, dec!(1400))];
    let stats = StatsSnapshot::compute(&entries, &Budget::default(), &window_on(2025, 2, 10));
    assert_eq!(stats.daily_allowance.round_dp(2), dec!(160.71));
    assert_eq!(stats.budget_target_so_far.round_dp(2), dec!(1607.14));
    assert_eq!(stats.budget_delta.round_dp(2), dec!(207.14));
    assert_eq!(stats.average_spend, dec!(140));
}

#[test]
fn test_saved_amount_includes_skips() {
    let entries = [entry(EntryKind::Skip, dec!(300))];
    let stats = StatsSnapshot::compute(&entries, &Budget::default(), &window_on(2025, 2, 10));
    assert_eq!(stats.saved_amount, dec!(4800));
}

#[test]
fn test_saved_amount_never_negative() {
    // Essentials exceed the budget; headroom floors at zero
    let entries = [
        entry(EntryKind::Essential, dec!(2000)),
        entry(EntryKind::Skip, dec!(120)),
    ];
    let budget = Budget::new(dec!(1500));
    let stats = StatsSnapshot::compute(&entries, &budget, &window_on(2025, 2, 20));
    assert_eq!(stats.saved_amount, dec!(120));
}

#[test]
fn test_inactive_window_has_no_pacing_target() {
    let entries = [entry(EntryKind::Essential, dec!(200))];
    let window = window_on(2025, 6, 15);
    assert!(!window.is_active);
    let stats = StatsSnapshot::compute(&entries, &Budget::default(), &window);
    assert_eq!(stats.budget_target_so_far, Decimal::ZERO);
    assert_eq!(stats.budget_delta, dec!(-200));
    // active_day pins to 1 before the window opens
    assert_eq!(stats.average_spend, dec!(200));
}

#[test]
fn test_progress_before_window_uses_monthly_budget() {
    let entries = [entry(EntryKind::Essential, dec!(1125))];
    let stats = StatsSnapshot::compute(&entries, &Budget::default(), &window_on(2025, 1, 15));
    assert_eq!(stats.progress, dec!(0.25));
}

#[test]
fn test_progress_clamped_to_one() {
    let entries = [entry(EntryKind::Essential, dec!(9000))];
    let stats = StatsSnapshot::compute(&entries, &Budget::default(), &window_on(2025, 2, 28));
    assert_eq!(stats.progress, Decimal::ONE);
}

#[test]
fn test_leap_year_daily_allowance() {
    let stats = StatsSnapshot::compute(&[], &Budget::new(dec!(2900)), &window_on(2024, 2, 1));
    assert_eq!(stats.daily_allowance, dec!(100));
}

#[test]
fn test_stats_after_reset() {
    let mut ledger = crate::ledger::Ledger::new();
    ledger
        .add_entry(EntryKind::Essential, "250", "groceries")
        .unwrap();
    ledger.add_entry(EntryKind::Skip, "99", "cinema").unwrap();
    ledger.reset();

    let window = window_on(2026, 2, 14);
    let stats = StatsSnapshot::compute(ledger.entries(), ledger.budget(), &window);
    assert_eq!(stats.essential_total, Decimal::ZERO);
    assert_eq!(stats.skip_total, Decimal::ZERO);
    assert_eq!(stats.saved_amount, ledger.budget().monthly);
}

#[test]
fn test_recompute_is_identical() {
    let entries = [
        entry(EntryKind::Essential, dec!(123.45)),
        entry(EntryKind::Skip, dec!(67.89)),
    ];
    let budget = Budget::new(dec!(5200));
    let window = window_on(2026, 2, 14);
    let a = StatsSnapshot::compute(&entries, &budget, &window);
    let b = StatsSnapshot::compute(&entries, &budget, &window);
    assert_eq!(a, b);
}
