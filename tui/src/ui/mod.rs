mod dialog;
mod list;

use crate::app::{App, Mode};
use ratatui::Frame;

/// Top-level render dispatcher: the list first, then any modal overlay.
pub fn render(f: &mut Frame, app: &mut App) {
    list::render_list(f, app);
    match app.mode {
        Mode::Normal => {}
        Mode::EditTask => dialog::render_task_input(f, app),
        Mode::EditDate => dialog::render_date_input(f, app),
        Mode::ConfirmDelete => dialog::render_confirm(f, app),
    }
    if let Some(ref notice) = app.notice {
        dialog::render_notice(f, notice);
    }
}
