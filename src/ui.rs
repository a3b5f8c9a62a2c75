//! The UI renders the browser state into something visible.
//!
//! The outline sits on the left with one row per visible section, the document body on the
//! right, and a help bar along the bottom that doubles as the status line.

use crate::app_state::{AppState, Focus, LineStyle};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

const HELP: &str =
    "↑/↓: Navigate | Space: Toggle | Enter: Select | ←: Parent | Tab: Switch pane | PgUp/PgDn: Scroll | q: Quit";

/// Renders the outline, the content pane and the help bar.
pub fn draw(f: &mut Frame, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(f.area());

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(app.outline_width.min(100)),
            Constraint::Min(0),
        ])
        .split(chunks[0]);

    draw_outline(f, app, panes[0]);
    draw_content(f, app, panes[1]);

    let help = app.message.as_deref().unwrap_or(HELP);
    let help_widget = Paragraph::new(help).block(Block::default().borders(Borders::ALL));
    f.render_widget(help_widget, chunks[1]);
}

fn pane_block(title: String, focused: bool) -> Block<'static> {
    let block = Block::default().borders(Borders::ALL).title(title);
    if focused {
        block.border_style(Style::default().fg(Color::Cyan))
    } else {
        block
    }
}

fn draw_outline(f: &mut Frame, app: &AppState, area: ratatui::layout::Rect) {
    let items: Vec<ListItem> = app
        .rows()
        .into_iter()
        .enumerate()
        .map(|(i, row)| {
            let indent = "  ".repeat(row.depth);
            let glyph = row.glyph.unwrap_or(" ");
            let label_style = if row.active {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let line = Line::from(vec![
                Span::raw(indent),
                Span::styled(format!("{glyph} "), Style::default().fg(Color::DarkGray)),
                Span::styled(row.label, label_style),
            ]);

            let style = if i == app.cursor {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };
            ListItem::new(line).style(style)
        })
        .collect();

    let title = format!("Sections ({})", app.title);
    let list = List::new(items).block(pane_block(title, app.focus == Focus::Outline));
    f.render_widget(list, area);
}

fn heading_color(level: usize) -> Color {
    match level {
        1 => Color::Cyan,
        2 => Color::Green,
        3 => Color::Yellow,
        4 => Color::Magenta,
        _ => Color::Blue,
    }
}

fn draw_content(f: &mut Frame, app: &AppState, area: ratatui::layout::Rect) {
    let lines: Vec<Line> = app
        .content_lines()
        .into_iter()
        .map(|line| match line.style {
            LineStyle::Heading(level) => Line::from(Span::styled(
                line.text,
                Style::default()
                    .fg(heading_color(level))
                    .add_modifier(Modifier::BOLD),
            )),
            LineStyle::Body => Line::from(line.text),
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .block(pane_block(
            "Content".to_string(),
            app.focus == Focus::Content,
        ))
        .wrap(Wrap { trim: false })
        .scroll((app.content_scroll, 0));
    f.render_widget(paragraph, area);
}
