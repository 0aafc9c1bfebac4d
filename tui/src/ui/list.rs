use crate::app::{App, Mode};
use ratatui::{
    layout::{Alignment, Constraint, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

pub fn render_list(f: &mut Frame, app: &mut App) {
    // 3-part layout: header bar | body (list) | footer bar
    let chunks = Layout::vertical([
        Constraint::Length(1), // header bar
        Constraint::Min(5),    // body (list)
        Constraint::Length(1), // footer bar
    ])
    .split(f.area());

    // ── Header bar ────────────────────────────────────────────────────────────
    let (open, done) = app.counts();
    let header_style = Style::default()
        .fg(Color::White)
        .bg(Color::DarkGray)
        .add_modifier(Modifier::BOLD);
    let header = Paragraph::new(Line::from(Span::styled(
        format!(" listahan  open: {}  done: {}", open, done),
        header_style,
    )))
    .style(Style::default().bg(Color::DarkGray));
    f.render_widget(header, chunks[0]);

    // ── Task rows ─────────────────────────────────────────────────────────────
    if app.todos.is_empty() {
        let empty = Paragraph::new("\nNo tasks yet.\n\nPress a to add one.")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::TOP));
        f.render_widget(empty, chunks[1]);
    } else {
        let items: Vec<ListItem> = app
            .todos
            .iter()
            .map(|todo| {
                // Completed rows are muted as a whole; open rows get a
                // yellow marker.
                let (glyph_style, text_style) = if todo.completed {
                    (
                        Style::default().fg(Color::Gray),
                        Style::default().fg(Color::Gray),
                    )
                } else {
                    (Style::default().fg(Color::Yellow), Style::default())
                };
                let mut spans = vec![
                    Span::styled(format!("{} ", todo.glyph()), glyph_style),
                    Span::styled(todo.task.clone(), text_style),
                ];
                if !todo.date.is_empty() {
                    spans.push(Span::styled(
                        format!("  ({})", todo.date),
                        Style::default().fg(Color::DarkGray),
                    ));
                }
                ListItem::new(Line::from(spans))
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::TOP))
            .highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("  > ");
        f.render_stateful_widget(list, chunks[1], &mut app.list_state);
    }

    // ── Footer bar ────────────────────────────────────────────────────────────
    let footer_text = match app.mode {
        Mode::Normal => " [a] add  [space] toggle  [d] delete  [↑↓/jk] nav  [q] quit",
        Mode::EditTask => " [Enter] next: date  [Esc] cancel",
        Mode::EditDate => " [Enter] add task  [Esc] skip date",
        Mode::ConfirmDelete => " [y] delete  [n] keep",
    };
    let footer = Paragraph::new(Line::from(footer_text))
        .style(Style::default().fg(Color::White).bg(Color::DarkGray));
    f.render_widget(footer, chunks[2]);
}
