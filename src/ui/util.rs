use chrono::Datelike;
use rust_decimal::Decimal;

const MONTHS_DA: [&str; 12] = [
    "jan", "feb", "mar", "apr", "maj", "jun", "jul", "aug", "sep", "okt", "nov", "dec",
];

/// Format an amount as Danish kroner: no decimals, `.` thousand separators.
/// e.g. `4500` → `"4.500 kr."`, `-1234567.89` → `"-1.234.568 kr."`
pub(crate) fn format_kroner(val: Decimal) -> String {
    let rounded = val.round_dp(0);
    let digits = rounded.abs().to_string();

    let with_dots: String = digits
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(".");

    if rounded < Decimal::ZERO {
        format!("-{with_dots} kr.")
    } else {
        format!("{with_dots} kr.")
    }
}

/// Signed variant for pace deltas: a leading `+` marks being under pace.
pub(crate) fn format_kroner_delta(val: Decimal) -> String {
    if val >= Decimal::ZERO {
        format!("+{}", format_kroner(val))
    } else {
        format_kroner(val)
    }
}

/// Render a clamped [0, 1] ratio as a whole percentage, e.g. `"32%"`.
pub(crate) fn format_percent(ratio: Decimal) -> String {
    format!("{}%", (ratio * Decimal::from(100)).round_dp(0))
}

/// Day + abbreviated Danish month from an RFC 3339 timestamp, e.g. `"7. feb"`.
/// An unparseable timestamp degrades to its first ten characters.
pub(crate) fn format_entry_date(created_at: &str) -> String {
    match chrono::DateTime::parse_from_rfc3339(created_at) {
        Ok(dt) => {
            let month = MONTHS_DA
                .get(dt.month0() as usize)
                .copied()
                .unwrap_or("???");
            format!("{}. {}", dt.day(), month)
        }
        Err(_) => created_at.chars().take(10).collect(),
    }
}

/// Truncate a string to `max` visible characters, appending "…" if truncated.
/// Safe for multi-byte UTF-8 characters.
pub(crate) fn truncate(s: &str, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    if s.chars().count() <= max {
        return s.to_string();
    }
    let truncated: String = s.chars().take(max.saturating_sub(1)).collect();
    format!("{truncated}…")
}

/// Move a list cursor down by one, adjusting scroll to keep cursor visible.
pub(crate) fn scroll_down(index: &mut usize, scroll: &mut usize, len: usize, page: usize) {
    if *index + 1 < len {
        *index += 1;
        if *index >= *scroll + page {
            *scroll = index.saturating_sub(page - 1);
        }
    }
}

/// Move a list cursor up by one, adjusting scroll to keep cursor visible.
pub(crate) fn scroll_up(index: &mut usize, scroll: &mut usize) {
    *index = index.saturating_sub(1);
    if *index < *scroll {
        *scroll = *index;
    }
}

/// Jump cursor to the top of a list.
pub(crate) fn scroll_to_top(index: &mut usize, scroll: &mut usize) {
    *index = 0;
    *scroll = 0;
}

/// Jump cursor to the bottom of a list.
pub(crate) fn scroll_to_bottom(index: &mut usize, scroll: &mut usize, len: usize, page: usize) {
    if len > 0 {
        *index = len - 1;
        *scroll = index.saturating_sub(page.saturating_sub(1));
    }
}
