mod input;

use listahan_core::{Store, Todo};
use ratatui::widgets::ListState;

// ── Mode ──────────────────────────────────────────────────────────────────────

/// Which surface currently receives key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Navigating the task list.
    Normal,
    /// Typing the text of a new task.
    EditTask,
    /// Typing the optional date for the task text just entered.
    EditDate,
    /// Confirming deletion of the selected task.
    ConfirmDelete,
}

// ── Notice ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Warning,
    Error,
}

/// A blocking notification shown over the list; any key dismisses it.
#[derive(Debug)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Notice {
            kind: NoticeKind::Info,
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Notice {
            kind: NoticeKind::Warning,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Notice {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self.kind {
            NoticeKind::Info => " Info ",
            NoticeKind::Warning => " Warning ",
            NoticeKind::Error => " Error ",
        }
    }
}

// ── App ───────────────────────────────────────────────────────────────────────

pub struct App {
    pub store: Store,
    pub todos: Vec<Todo>,
    pub list_state: ListState,
    pub mode: Mode,
    /// Buffer for the task text while adding.
    pub task_input: String,
    /// Buffer for the optional date prompt.
    pub date_input: String,
    pub notice: Option<Notice>,
}

impl App {
    pub fn new(store: Store) -> Self {
        let todos = store.load();
        let mut list_state = ListState::default();
        if !todos.is_empty() {
            list_state.select(Some(0));
        }
        App {
            store,
            todos,
            list_state,
            mode: Mode::Normal,
            task_input: String::new(),
            date_input: String::new(),
            notice: None,
        }
    }

    pub fn selected_todo(&self) -> Option<&Todo> {
        self.list_state.selected().and_then(|i| self.todos.get(i))
    }

    /// Returns `(open, done)` counts for the header bar.
    pub fn counts(&self) -> (usize, usize) {
        let done = self.todos.iter().filter(|t| t.completed).count();
        (self.todos.len() - done, done)
    }

    pub fn select_next(&mut self) {
        let len = self.todos.len();
        if len == 0 {
            return;
        }
        let next = self
            .list_state
            .selected()
            .map(|i| (i + 1).min(len - 1))
            .unwrap_or(0);
        self.list_state.select(Some(next));
    }

    pub fn select_prev(&mut self) {
        if self.todos.is_empty() {
            return;
        }
        let prev = self
            .list_state
            .selected()
            .map(|i| i.saturating_sub(1))
            .unwrap_or(0);
        self.list_state.select(Some(prev));
    }

    /// Write-through save. On failure the error becomes a blocking notice
    /// and the in-memory list stays authoritative; there is no retry.
    pub(crate) fn persist(&mut self) {
        if let Err(err) = self.store.save(&self.todos) {
            self.notice = Some(Notice::error(format!("{err:#}")));
        }
    }
}
