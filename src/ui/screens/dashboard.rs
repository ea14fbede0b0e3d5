use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_kroner, format_kroner_delta, format_percent};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Summary cards
            Constraint::Length(3), // Pace gauge
            Constraint::Min(6),    // Motivation
        ])
        .split(area);

    render_summary_cards(f, chunks[0], app);
    render_pace_gauge(f, chunks[1], app);
    render_motivation(f, chunks[2], app);
}

fn render_summary_cards(f: &mut Frame, area: Rect, app: &App) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let stats = &app.stats;
    let monthly = app.ledger.budget().monthly;

    render_card(
        f,
        cards[0],
        "Saved",
        format_kroner(stats.saved_amount),
        theme::GREEN,
        format!("of {} budget", format_kroner(monthly)),
    );
    render_card(
        f,
        cards[1],
        "Essentials",
        format_kroner(stats.essential_total),
        theme::RED,
        format!(
            "{} entries, avg {}/day",
            stats.essential_count,
            format_kroner(stats.average_spend)
        ),
    );
    render_card(
        f,
        cards[2],
        "Skipped",
        format_kroner(stats.skip_total),
        theme::GREEN,
        format!("{} temptations resisted", stats.skip_count),
    );
    let pace_color = if stats.budget_delta >= Decimal::ZERO {
        theme::GREEN
    } else {
        theme::RED
    };
    let pace_sub = if app.window.is_active {
        format!("target {}", format_kroner(stats.budget_target_so_far))
    } else {
        "window not active".into()
    };
    render_card(
        f,
        cards[3],
        "Pace",
        format_kroner_delta(stats.budget_delta),
        pace_color,
        pace_sub,
    );
}

fn render_card(
    f: &mut Frame,
    area: Rect,
    title: &str,
    value: String,
    color: ratatui::style::Color,
    subtitle: String,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(
            format!(" {title} "),
            Style::default()
                .fg(theme::TEXT_DIM)
                .add_modifier(Modifier::BOLD),
        ));

    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            value,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(subtitle, theme::dim_style())),
    ])
    .centered()
    .block(block);

    f.render_widget(text, area);
}

fn render_pace_gauge(f: &mut Frame, area: Rect, app: &App) {
    let window = &app.window;
    let stats = &app.stats;

    let title = if window.is_active {
        format!(
            " Day {} of {} - {} days left - allowance {}/day ",
            window.day_of_month,
            window.days_in_month,
            window.days_left,
            format_kroner(stats.daily_allowance)
        )
    } else {
        format!(
            " Starts in {} days (February {}) - allowance {}/day ",
            window.days_until_start,
            window.year,
            format_kroner(stats.daily_allowance)
        )
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme::OVERLAY))
                .title(Span::styled(
                    title,
                    Style::default()
                        .fg(theme::TEXT_DIM)
                        .add_modifier(Modifier::BOLD),
                )),
        )
        .gauge_style(Style::default().fg(theme::ACCENT).bg(theme::SURFACE))
        .ratio(stats.progress.to_f64().unwrap_or(0.0).clamp(0.0, 1.0))
        .label(format!(
            "{} spent ({})",
            format_kroner(stats.essential_total),
            format_percent(stats.progress)
        ));

    f.render_widget(gauge, area);
}

fn render_motivation(f: &mut Frame, area: Rect, app: &App) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_feed_panel(
        f,
        halves[0],
        " Tip of the day ",
        app.tip.as_deref(),
        app.tip_loading,
        "Press :refresh to fetch a tip",
    );
    render_feed_panel(
        f,
        halves[1],
        " Quote ",
        app.quote.as_deref(),
        app.quote_loading,
        "Press :refresh to fetch a quote",
    );
}

fn render_feed_panel(
    f: &mut Frame,
    area: Rect,
    title: &str,
    content: Option<&str>,
    loading: bool,
    hint: &str,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(
            title,
            Style::default()
                .fg(theme::TEXT_DIM)
                .add_modifier(Modifier::BOLD),
        ));

    let (text, style) = if loading {
        ("Fetching...".to_string(), theme::dim_style())
    } else {
        match content {
            Some(s) => (s.to_string(), theme::normal_style()),
            None => (hint.to_string(), theme::dim_style()),
        }
    };

    let paragraph = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(text, style)),
    ])
    .wrap(Wrap { trim: true })
    .centered()
    .block(block);

    f.render_widget(paragraph, area);
}
