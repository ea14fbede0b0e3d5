use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::models::{BUDGET_MAX, BUDGET_MIN, BUDGET_STEP};
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::format_kroner;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Current amount
            Constraint::Length(3), // Range slider
            Constraint::Min(5),    // Hints
        ])
        .split(area);

    let monthly = app.ledger.budget().monthly;

    let amount = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            format_kroner(monthly),
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled("per month of February", theme::dim_style())),
    ])
    .centered()
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(
                " Monthly budget ",
                Style::default()
                    .fg(theme::TEXT_DIM)
                    .add_modifier(Modifier::BOLD),
            )),
    );
    f.render_widget(amount, chunks[0]);

    let min = Decimal::from(BUDGET_MIN);
    let max = Decimal::from(BUDGET_MAX);
    let ratio = ((monthly - min) / (max - min))
        .to_f64()
        .unwrap_or(0.0)
        .clamp(0.0, 1.0);

    let slider = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme::OVERLAY))
                .title(Span::styled(
                    format!(
                        " {} to {} ",
                        format_kroner(min),
                        format_kroner(max)
                    ),
                    Style::default()
                        .fg(theme::TEXT_DIM)
                        .add_modifier(Modifier::BOLD),
                )),
        )
        .gauge_style(Style::default().fg(theme::ACCENT).bg(theme::SURFACE))
        .ratio(ratio)
        .label(format_kroner(monthly));
    f.render_widget(slider, chunks[1]);

    let allowance = app.stats.daily_allowance;
    let hints = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "Daily allowance: {}/day across {} days",
                format_kroner(allowance),
                app.window.days_in_month
            ),
            theme::normal_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("+/- adjusts by {BUDGET_STEP} kr."),
            theme::dim_style(),
        )),
        Line::from(Span::styled(
            ":budget <amount> sets it directly",
            theme::dim_style(),
        )),
    ])
    .centered();
    f.render_widget(hints, chunks[2]);
}
