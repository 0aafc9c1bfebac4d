/// Modal overlays: the add-task inputs, the delete confirmation, and
/// blocking notices.
use chrono::Local;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, Notice, NoticeKind};

/// Centered rect taking `percent_x` / `percent_y` of the given area.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

fn render_input(f: &mut Frame, title: &str, value: &str, placeholder: &str) {
    let area = centered_rect(60, 20, f.area());
    f.render_widget(Clear, area);
    let content = if value.is_empty() && !placeholder.is_empty() {
        Line::from(Span::styled(
            placeholder.to_string(),
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(value.to_string())
    };
    let input = Paragraph::new(content).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(input, area);
    // Cursor sits just past the typed text.
    f.set_cursor_position((area.x + 1 + value.chars().count() as u16, area.y + 1));
}

pub fn render_task_input(f: &mut Frame, app: &App) {
    render_input(f, " New task ", &app.task_input, "");
}

pub fn render_date_input(f: &mut Frame, app: &App) {
    let example = format!("e.g. {}", Local::now().format("%Y-%m-%d"));
    render_input(f, " Date (optional) ", &app.date_input, &example);
}

pub fn render_confirm(f: &mut Frame, app: &App) {
    let task = app.selected_todo().map(|t| t.task.as_str()).unwrap_or("");
    let area = centered_rect(60, 25, f.area());
    f.render_widget(Clear, area);
    let lines = vec![
        Line::from(format!("Delete '{}'?", task)),
        Line::from(""),
        Line::from(Span::styled(
            "[y] delete   [n] keep",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let dialog = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Confirm ")
                .border_style(Style::default().fg(Color::Red)),
        );
    f.render_widget(dialog, area);
}

pub fn render_notice(f: &mut Frame, notice: &Notice) {
    let border_style = match notice.kind {
        NoticeKind::Info => Style::default().fg(Color::Cyan),
        NoticeKind::Warning => Style::default().fg(Color::Yellow),
        NoticeKind::Error => Style::default().fg(Color::Red),
    };
    let area = centered_rect(60, 25, f.area());
    f.render_widget(Clear, area);
    let lines = vec![
        Line::from(notice.text.clone()),
        Line::from(""),
        Line::from(Span::styled(
            "press any key",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let popup = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(notice.title())
                .border_style(border_style),
        );
    f.render_widget(popup, area);
}
