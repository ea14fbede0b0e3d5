#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;

use super::ChallengeWindow;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ── Leap years ────────────────────────────────────────────────

#[test]
fn test_leap_year_has_29_days() {
    let window = ChallengeWindow::compute(date(2024, 2, 1));
    assert_eq!(window.days_in_month, 29);
    assert_eq!(window.year, 2024);
}

#[test]
fn test_common_year_has_28_days() {
    let window = ChallengeWindow::compute(date(2025, 2, 1));
    assert_eq!(window.days_in_month, 28);
}

#[test]
fn test_century_rule() {
    // 2100 is not a leap year, 2000 was
    assert_eq!(ChallengeWindow::compute(date(2100, 2, 1)).days_in_month, 28);
    assert_eq!(ChallengeWindow::compute(date(2000, 2, 1)).days_in_month, 29);
}

// ── Window boundaries ─────────────────────────────────────────

#[test]
fn test_jan_31_is_one_day_before_start() {
    let window = ChallengeWindow::compute(date(2025, 1, 31));
    assert!(!window.is_active);
    assert_eq!(window.year, 2025);
    assert_eq!(window.days_until_start, 1);
    assert_eq!(window.day_of_month, 0);
    assert_eq!(window.days_left, 28);
}

#[test]
fn test_feb_1_is_active() {
    let window = ChallengeWindow::compute(date(2025, 2, 1));
    assert!(window.is_active);
    assert_eq!(window.day_of_month, 1);
    assert_eq!(window.days_left, 27);
    assert_eq!(window.days_until_start, 0);
}

#[test]
fn test_last_day_is_active() {
    let window = ChallengeWindow::compute(date(2024, 2, 29));
    assert!(window.is_active);
    assert_eq!(window.day_of_month, 29);
    assert_eq!(window.days_left, 0);
}

#[test]
fn test_march_1_targets_next_year() {
    let window = ChallengeWindow::compute(date(2025, 3, 1));
    assert!(!window.is_active);
    assert_eq!(window.year, 2026);
    assert_eq!(window.days_in_month, 28);
    // Mar 1 2025 -> Feb 1 2026
    assert_eq!(window.days_until_start, 337);
}

#[test]
fn test_mid_window() {
    let window = ChallengeWindow::compute(date(2026, 2, 10));
    assert!(window.is_active);
    assert_eq!(window.year, 2026);
    assert_eq!(window.day_of_month, 10);
    assert_eq!(window.days_left, 18);
    assert_eq!(window.days_until_start, 0);
}

#[test]
fn test_early_january_targets_current_year() {
    let window = ChallengeWindow::compute(date(2026, 1, 1));
    assert!(!window.is_active);
    assert_eq!(window.year, 2026);
    assert_eq!(window.days_until_start, 31);
}

#[test]
fn test_december_targets_next_year() {
    let window = ChallengeWindow::compute(date(2025, 12, 15));
    assert_eq!(window.year, 2026);
    assert!(!window.is_active);
    // Dec 15 -> Dec 31 is 16 days, plus 31 days of January
    assert_eq!(window.days_until_start, 48);
}

#[test]
fn test_recompute_is_stable() {
    let a = ChallengeWindow::compute(date(2026, 2, 7));
    let b = ChallengeWindow::compute(date(2026, 2, 7));
    assert_eq!(a, b);
}
