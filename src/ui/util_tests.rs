#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::util::*;

// ── format_kroner ─────────────────────────────────────────────

#[test]
fn test_kroner_whole_amounts() {
    assert_eq!(format_kroner(Decimal::ZERO), "0 kr.");
    assert_eq!(format_kroner(dec!(123)), "123 kr.");
    assert_eq!(format_kroner(dec!(4500)), "4.500 kr.");
    assert_eq!(format_kroner(dec!(12000)), "12.000 kr.");
    assert_eq!(format_kroner(dec!(1234567)), "1.234.567 kr.");
}

#[test]
fn test_kroner_rounds_decimals_away() {
    assert_eq!(format_kroner(dec!(160.71)), "161 kr.");
    assert_eq!(format_kroner(dec!(160.49)), "160 kr.");
}

#[test]
fn test_kroner_negative() {
    assert_eq!(format_kroner(dec!(-207.14)), "-207 kr.");
    assert_eq!(format_kroner(dec!(-4500)), "-4.500 kr.");
}

#[test]
fn test_kroner_delta_sign() {
    assert_eq!(format_kroner_delta(dec!(207.14)), "+207 kr.");
    assert_eq!(format_kroner_delta(Decimal::ZERO), "+0 kr.");
    assert_eq!(format_kroner_delta(dec!(-300)), "-300 kr.");
}

// ── format_percent ────────────────────────────────────────────

#[test]
fn test_percent() {
    assert_eq!(format_percent(Decimal::ZERO), "0%");
    assert_eq!(format_percent(dec!(0.25)), "25%");
    assert_eq!(format_percent(Decimal::ONE), "100%");
}

// ── format_entry_date ─────────────────────────────────────────

#[test]
fn test_entry_date_danish() {
    assert_eq!(format_entry_date("2026-02-07T12:30:00+00:00"), "7. feb");
    assert_eq!(format_entry_date("2026-12-24T00:00:00+00:00"), "24. dec");
    assert_eq!(format_entry_date("2026-05-01T08:00:00+01:00"), "1. maj");
}

#[test]
fn test_entry_date_unparseable_degrades() {
    assert_eq!(format_entry_date("2026-02-07"), "2026-02-07");
    assert_eq!(format_entry_date("garbage"), "garbage");
}

// ── truncate ──────────────────────────────────────────────────

#[test]
fn test_truncate_short_string() {
    assert_eq!(truncate("hello", 10), "hello");
}

#[test]
fn test_truncate_long_string() {
    assert_eq!(truncate("hello world", 8), "hello w…");
}

#[test]
fn test_truncate_zero_max() {
    assert_eq!(truncate("hello", 0), "");
}

#[test]
fn test_truncate_multibyte() {
    assert_eq!(truncate("smørrebrød", 5), "smør…");
}

// ── scroll helpers ────────────────────────────────────────────

#[test]
fn test_scroll_down_moves_cursor_and_scroll() {
    let (mut index, mut scroll) = (0, 0);
    for _ in 0..5 {
        scroll_down(&mut index, &mut scroll, 10, 3);
    }
    assert_eq!(index, 5);
    assert_eq!(scroll, 3);
}

#[test]
fn test_scroll_down_stops_at_end() {
    let (mut index, mut scroll) = (9, 7);
    scroll_down(&mut index, &mut scroll, 10, 3);
    assert_eq!(index, 9);
}

#[test]
fn test_scroll_up_and_bounds() {
    let (mut index, mut scroll) = (5, 5);
    scroll_up(&mut index, &mut scroll);
    assert_eq!((index, scroll), (4, 4));

    let (mut index, mut scroll) = (0, 0);
    scroll_up(&mut index, &mut scroll);
    assert_eq!((index, scroll), (0, 0));
}

#[test]
fn test_scroll_to_top_and_bottom() {
    let (mut index, mut scroll) = (5, 4);
    scroll_to_top(&mut index, &mut scroll);
    assert_eq!((index, scroll), (0, 0));

    scroll_to_bottom(&mut index, &mut scroll, 10, 4);
    assert_eq!((index, scroll), (9, 6));
}
