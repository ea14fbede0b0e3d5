use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::db::Database;
use crate::ledger::Ledger;
use crate::ui::app::{App, InputMode, PendingAction, Screen};
use crate::ui::commands;
use crate::ui::util::{scroll_down, scroll_to_bottom, scroll_to_top, scroll_up};

pub(crate) fn as_tui(db: &mut Database, ledger: Ledger) -> Result<()> {
    let mut app = App::new(ledger);
    app.request_motivation();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, db);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        eprintln!("Error: {e:?}");
    }

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    db: &mut Database,
) -> Result<()> {
    while app.running {
        terminal.draw(|f| {
            // 1 tab + 1 status + 1 cmd + 2 borders + 1 header
            let content_height = f.area().height.saturating_sub(6) as usize;
            app.visible_rows = content_height.max(1);
            crate::ui::render::render(f, app);
        })?;

        app.poll_feed();

        // Short poll so finished fetches show up without a keypress
        if !event::poll(Duration::from_millis(200))? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            if app.show_help {
                app.show_help = false;
                continue;
            }
            match app.input_mode {
                InputMode::Normal => handle_normal_input(key, app, db)?,
                InputMode::Command => handle_command_input(key, app, db)?,
                InputMode::Confirm => handle_confirm_input(key, app, db)?,
            }
        }
    }
    Ok(())
}

// ── Input handlers ───────────────────────────────────────────

fn handle_normal_input(key: event::KeyEvent, app: &mut App, db: &mut Database) -> Result<()> {
    match key.code {
        KeyCode::Char(':') => {
            app.input_mode = InputMode::Command;
            app.command_input.clear();
        }
        KeyCode::Char('q') | KeyCode::Char('c')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            app.running = false;
        }
        KeyCode::Char('j') | KeyCode::Down => handle_move_down(app),
        KeyCode::Char('k') | KeyCode::Up => handle_move_up(app),
        KeyCode::Char('1') => switch_screen(app, Screen::Dashboard),
        KeyCode::Char('2') => switch_screen(app, Screen::Entries),
        KeyCode::Char('3') => switch_screen(app, Screen::Budget),
        KeyCode::Tab => {
            let screens = Screen::all();
            let idx = screens.iter().position(|s| *s == app.screen).unwrap_or(0);
            let next = (idx + 1) % screens.len();
            switch_screen(app, screens[next]);
        }
        KeyCode::BackTab => {
            let screens = Screen::all();
            let idx = screens.iter().position(|s| *s == app.screen).unwrap_or(0);
            let prev = if idx == 0 { screens.len() - 1 } else { idx - 1 };
            switch_screen(app, screens[prev]);
        }
        KeyCode::Char('a') => {
            app.input_mode = InputMode::Command;
            app.command_input = "essential ".into();
        }
        KeyCode::Char('s') => {
            app.input_mode = InputMode::Command;
            app.command_input = "skip ".into();
        }
        KeyCode::Char('+') | KeyCode::Char('=') if app.screen == Screen::Budget => {
            app.adjust_budget(1, db);
        }
        KeyCode::Char('-') if app.screen == Screen::Budget => {
            app.adjust_budget(-1, db);
        }
        KeyCode::Char('r') if app.screen == Screen::Dashboard => {
            app.request_motivation();
            app.set_status("Fetching fresh motivation...");
        }
        KeyCode::Char('g') => {
            if app.screen == Screen::Entries {
                scroll_to_top(&mut app.entry_index, &mut app.entry_scroll);
            }
        }
        KeyCode::Char('G') => {
            if app.screen == Screen::Entries {
                let len = app.ledger.entries().len();
                let page = app.visible_rows.max(1);
                scroll_to_bottom(&mut app.entry_index, &mut app.entry_scroll, len, page);
            }
        }
        KeyCode::Char('?') => {
            app.show_help = true;
        }
        KeyCode::Esc => {
            app.status_message.clear();
        }
        _ => {}
    }
    Ok(())
}

fn handle_command_input(key: event::KeyEvent, app: &mut App, db: &mut Database) -> Result<()> {
    match key.code {
        KeyCode::Enter => {
            let input = app.command_input.clone();
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
            commands::handle_command(&input, app, db)?;
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
        }
        KeyCode::Backspace => {
            app.command_input.pop();
            if app.command_input.is_empty() {
                app.input_mode = InputMode::Normal;
            }
        }
        KeyCode::Char(c) => {
            app.command_input.push(c);
        }
        _ => {}
    }
    Ok(())
}

fn handle_confirm_input(key: event::KeyEvent, app: &mut App, db: &mut Database) -> Result<()> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            if let Some(action) = app.pending_action.take() {
                match action {
                    PendingAction::Reset => app.perform_reset(db),
                }
            }
            app.input_mode = InputMode::Normal;
            app.confirm_message.clear();
        }
        _ => {
            // Any other key = cancel
            app.pending_action = None;
            app.input_mode = InputMode::Normal;
            app.confirm_message.clear();
            app.set_status("Cancelled");
        }
    }
    Ok(())
}

// ── Navigation helpers ───────────────────────────────────────

fn switch_screen(app: &mut App, screen: Screen) {
    app.screen = screen;
    app.refresh();
}

fn handle_move_down(app: &mut App) {
    if app.screen == Screen::Entries {
        let len = app.ledger.entries().len();
        let page = app.visible_rows.max(1);
        scroll_down(&mut app.entry_index, &mut app.entry_scroll, len, page);
    }
}

fn handle_move_up(app: &mut App) {
    if app.screen == Screen::Entries {
        scroll_up(&mut app.entry_index, &mut app.entry_scroll);
    }
}
