//! Interactive search box: looks up the query on every keystroke.

mod app;
mod ui;

pub use app::{App, Mode, ResultRow};

use crate::index::types::DocRecord;
use crate::index::SearchIndexTable;
use crate::query::LookupOptions;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Duration;

/// Run the search UI. Returns the record picked with Enter, if any.
pub fn run(
    table: Arc<SearchIndexTable>,
    options: LookupOptions,
    initial_query: Option<String>,
) -> Result<Option<DocRecord>> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut app = App::new(table, options);
    app.set_query(initial_query.as_deref().unwrap_or(""));

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result.map(|_| app.chosen)
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }

        // Only handle key press events, not release or repeat
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        // Global keybindings
        match (key.modifiers, key.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => return Ok(()),
            (KeyModifiers::CONTROL, KeyCode::Char('q')) => return Ok(()),
            _ => {}
        }

        match app.mode {
            Mode::Help => {
                // Any key closes help
                app.hide_help();
            }
            Mode::Search => match (key.modifiers, key.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('j'))
                | (KeyModifiers::CONTROL, KeyCode::Char('n')) => app.select_next(),
                (KeyModifiers::CONTROL, KeyCode::Char('k'))
                | (KeyModifiers::CONTROL, KeyCode::Char('p')) => app.select_prev(),
                (KeyModifiers::CONTROL, KeyCode::Char('d')) => app.select_page_down(),
                (KeyModifiers::CONTROL, KeyCode::Char('u')) => app.select_page_up(),
                (KeyModifiers::CONTROL, KeyCode::Char('a')) => app.select_first(),
                (KeyModifiers::CONTROL, KeyCode::Char('e')) => app.select_last(),
                (KeyModifiers::CONTROL, KeyCode::Char('w')) => app.delete_word(),
                (KeyModifiers::CONTROL, KeyCode::Char('h')) => app.pop_char(),
                (KeyModifiers::NONE | KeyModifiers::SHIFT, code) => match code {
                    KeyCode::Esc => {
                        if app.query.is_empty() {
                            return Ok(());
                        }
                        app.clear_query();
                    }
                    KeyCode::Enter => {
                        if app.choose_selected() {
                            return Ok(());
                        }
                    }
                    KeyCode::Down | KeyCode::Tab => app.select_next(),
                    KeyCode::Up | KeyCode::BackTab => app.select_prev(),
                    KeyCode::PageDown => app.select_page_down(),
                    KeyCode::PageUp => app.select_page_up(),
                    KeyCode::Home => app.select_first(),
                    KeyCode::End => app.select_last(),
                    KeyCode::F(1) => app.show_help(),
                    KeyCode::Char(c) => app.push_char(c),
                    KeyCode::Backspace => app.pop_char(),
                    _ => {}
                },
                _ => {}
            },
        }
    }
}
