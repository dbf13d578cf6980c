use crate::query::decode_key;
use crate::tui::app::{App, Mode};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Query input
            Constraint::Min(10),   // Results / Details
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    draw_query_input(f, app, chunks[0]);
    draw_main_area(f, app, chunks[1]);
    draw_status_bar(f, app, chunks[2]);

    if app.mode == Mode::Help {
        draw_help(f, f.area());
    }
}

fn draw_query_input(f: &mut Frame, app: &App, area: Rect) {
    let input = Paragraph::new(app.query.as_str())
        .style(Style::default().fg(Color::Yellow))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Search (Enter: pick, F1: help, Esc: quit) "),
        );

    f.render_widget(input, area);

    if app.mode == Mode::Search {
        f.set_cursor_position((cursor_x(area, &app.query), area.y + 1));
    }
}

/// Cursor column after the query text, kept inside the input box
fn cursor_x(area: Rect, query: &str) -> u16 {
    let typed = u16::try_from(query.chars().count()).unwrap_or(u16::MAX);
    let max_offset = area.width.saturating_sub(2);
    area.x + typed.saturating_add(1).min(max_offset)
}

fn draw_main_area(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    draw_results_list(f, app, chunks[0]);
    draw_details(f, app, chunks[1]);
}

fn draw_results_list(f: &mut Frame, app: &App, area: Rect) {
    let label_style = Style::default().fg(Color::Green);
    let scope_style = Style::default().fg(Color::Cyan);

    let items: Vec<ListItem> = app
        .results
        .iter()
        .map(|row| {
            let mut spans = vec![Span::styled(row.record.label.clone(), label_style)];
            if !row.record.scope_label.is_empty() {
                spans.push(Span::raw("  "));
                spans.push(Span::styled(row.record.scope_label.clone(), scope_style));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Results ({}) ", app.results.len())),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        );

    let mut state = ListState::default().with_selected(if app.results.is_empty() {
        None
    } else {
        Some(app.selected)
    });

    f.render_stateful_widget(list, area, &mut state);
}

fn draw_details(f: &mut Frame, app: &App, area: Rect) {
    let heading = Style::default().fg(Color::DarkGray);

    let content = match app.selected_result() {
        Some(row) => {
            let record = &row.record;
            let mut lines = vec![
                Line::from(vec![Span::styled("Key     ", heading), Span::raw(decode_key(&row.key))]),
                Line::from(vec![
                    Span::styled("Label   ", heading),
                    Span::styled(
                        record.label.clone(),
                        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(vec![Span::styled("Scope   ", heading), Span::raw(record.scope_label.clone())]),
                Line::from(vec![Span::styled("Page    ", heading), Span::raw(record.page().to_string())]),
            ];
            if let Some(fragment) = record.fragment() {
                lines.push(Line::from(vec![
                    Span::styled("Anchor  ", heading),
                    Span::raw(format!("#{}", fragment)),
                ]));
            }
            if row.siblings > 1 {
                lines.push(Line::raw(""));
                lines.push(Line::styled(
                    format!("{} overloads share this key", row.siblings),
                    Style::default().fg(Color::Yellow),
                ));
            }
            Text::from(lines)
        }
        None => Text::raw("No result selected"),
    };

    let details = Paragraph::new(content)
        .block(Block::default().borders(Borders::ALL).title(" Details "))
        .wrap(Wrap { trim: false });

    f.render_widget(details, area);
}

fn draw_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let status = Paragraph::new(app.status_message.as_str())
        .style(Style::default().fg(Color::Cyan));

    f.render_widget(status, area);
}

fn draw_help(f: &mut Frame, area: Rect) {
    let width = area.width.min(52);
    let height = area.height.min(14);
    let popup = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };

    let lines = vec![
        Line::raw("Type to search, matches update per keystroke"),
        Line::raw(""),
        Line::raw("Up / Down, Tab, Ctrl+J / Ctrl+K   move"),
        Line::raw("PageUp / PageDown                  page"),
        Line::raw("Ctrl+A / Ctrl+E                    first / last"),
        Line::raw("Ctrl+W                             delete word"),
        Line::raw("Enter                              pick and exit"),
        Line::raw("Esc                                clear / quit"),
        Line::raw("Ctrl+C, Ctrl+Q                     quit"),
        Line::raw(""),
        Line::raw("Press any key to close"),
    ];

    let help = Paragraph::new(Text::from(lines))
        .block(Block::default().borders(Borders::ALL).title(" Help "));

    f.render_widget(Clear, popup);
    f.render_widget(help, popup);
}
