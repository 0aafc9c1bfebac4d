/// Key event handling and mode-specific dispatch.
use listahan_core::Todo;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{App, Mode, Notice};

impl App {
    /// Dispatch a key event to the handler for the current mode.
    /// Returns `true` if the app should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        // A pending notice blocks everything else: any key dismisses it.
        if self.notice.is_some() {
            self.notice = None;
            return false;
        }
        match self.mode {
            Mode::Normal => self.handle_list_key(key),
            Mode::EditTask => {
                self.handle_task_input_key(key);
                false
            }
            Mode::EditDate => {
                self.handle_date_input_key(key);
                false
            }
            Mode::ConfirmDelete => {
                self.handle_confirm_key(key);
                false
            }
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers != KeyModifiers::NONE && key.modifiers != KeyModifiers::SHIFT {
            return false;
        }
        match key.code {
            KeyCode::Char('q') => return true,
            KeyCode::Char('j') | KeyCode::Down => self.select_next(),
            KeyCode::Char('k') | KeyCode::Up => self.select_prev(),
            KeyCode::Char('a') => self.mode = Mode::EditTask,
            KeyCode::Char(' ') | KeyCode::Char('c') => self.toggle_selected(),
            KeyCode::Char('d') => self.request_delete(),
            _ => {}
        }
        false
    }

    fn handle_task_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                if self.task_input.trim().is_empty() {
                    self.notice = Some(Notice::warning("Enter a task first"));
                } else {
                    self.mode = Mode::EditDate;
                }
            }
            KeyCode::Esc => {
                self.task_input.clear();
                self.mode = Mode::Normal;
            }
            KeyCode::Backspace => {
                self.task_input.pop();
            }
            KeyCode::Char(c) => self.task_input.push(c),
            _ => {}
        }
    }

    fn handle_date_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.commit_add(),
            KeyCode::Esc => {
                // Esc skips the date; the task is still added, dateless.
                self.date_input.clear();
                self.commit_add();
            }
            KeyCode::Backspace => {
                self.date_input.pop();
            }
            KeyCode::Char(c) => self.date_input.push(c),
            _ => {}
        }
    }

    fn handle_confirm_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Enter => self.delete_selected(),
            KeyCode::Char('n') | KeyCode::Esc => self.mode = Mode::Normal,
            _ => {}
        }
    }

    // ── Mutations ─────────────────────────────────────────────────────────────

    fn commit_add(&mut self) {
        let task = self.task_input.trim().to_string();
        // The date is stored as entered; only the task text is trimmed.
        let date = self.date_input.clone();
        let id = self.todos.len() as u32 + 1;
        self.todos.push(Todo::new(task, date, id));
        self.task_input.clear();
        self.date_input.clear();
        self.mode = Mode::Normal;
        self.list_state.select(Some(self.todos.len() - 1));
        self.persist();
    }

    fn toggle_selected(&mut self) {
        let Some(idx) = self.list_state.selected() else {
            self.notice = Some(Notice::info("Select a task first"));
            return;
        };
        if let Some(todo) = self.todos.get_mut(idx) {
            todo.completed = !todo.completed;
            self.persist();
        }
    }

    fn request_delete(&mut self) {
        if self.selected_todo().is_none() {
            self.notice = Some(Notice::info("Select a task first"));
            return;
        }
        self.mode = Mode::ConfirmDelete;
    }

    fn delete_selected(&mut self) {
        self.mode = Mode::Normal;
        let Some(idx) = self.list_state.selected() else {
            return;
        };
        if idx >= self.todos.len() {
            return;
        }
        self.todos.remove(idx);
        // Rows after `idx` shift up; ids are not renumbered.
        if self.todos.is_empty() {
            self.list_state.select(None);
        } else if idx >= self.todos.len() {
            self.list_state.select(Some(self.todos.len() - 1));
        }
        self.persist();
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
