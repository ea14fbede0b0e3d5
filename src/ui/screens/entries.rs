use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_entry_date, format_kroner, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let entries = app.ledger.entries();

    if entries.is_empty() {
        let msg = vec![
            Line::from(""),
            Line::from(Span::styled("No entries yet", theme::dim_style())),
            Line::from(""),
            Line::from(Span::styled(
                "Log one with :essential 149.50 groceries or :skip 300 concert tickets",
                theme::dim_style(),
            )),
        ];
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(
                " Entries (0) ",
                Style::default()
                    .fg(theme::TEXT_DIM)
                    .add_modifier(Modifier::BOLD),
            ));
        f.render_widget(Paragraph::new(msg).centered().block(block), area);
        return;
    }

    let header_cells = ["Date", "Kind", "Note", "Amount"]
        .iter()
        .map(|h| Cell::from(*h).style(theme::header_style()));
    let header = Row::new(header_cells).height(1);

    let rows: Vec<Row> = entries
        .iter()
        .enumerate()
        .skip(app.entry_scroll)
        .take(area.height.saturating_sub(3) as usize)
        .map(|(i, entry)| {
            let is_cursor = i == app.entry_index;

            let kind_style = if entry.is_skip() {
                theme::saving_style()
            } else {
                theme::spending_style()
            };

            let style = if is_cursor {
                theme::selected_style()
            } else if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };

            Row::new(vec![
                Cell::from(format_entry_date(&entry.created_at)),
                Cell::from(Span::styled(entry.kind.to_string(), kind_style)),
                Cell::from(truncate(&entry.note, 48)),
                Cell::from(Span::styled(format_kroner(entry.amount), kind_style)),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(9),
        Constraint::Length(10),
        Constraint::Min(20),
        Constraint::Length(13),
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(
                format!(" Entries ({}) ", entries.len()),
                Style::default()
                    .fg(theme::TEXT_DIM)
                    .add_modifier(Modifier::BOLD),
            )),
    );

    f.render_widget(table, area);
}
