use serde::{Deserialize, Serialize};

/// A single to-do entry.
///
/// Field order matches the on-disk JSON key order: `task`, `completed`,
/// `id`, `date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub task: String,
    pub completed: bool,
    /// Assigned at creation as list length + 1. Display metadata only:
    /// never used for lookup, never reassigned on delete, so ids can repeat
    /// after deletions.
    pub id: u32,
    /// Free-form user-entered string; empty when not supplied.
    pub date: String,
}

impl Todo {
    pub fn new(task: String, date: String, id: u32) -> Self {
        Todo {
            task,
            completed: false,
            id,
            date,
        }
    }

    /// Single-character marker for list views.
    pub fn glyph(&self) -> &'static str {
        if self.completed {
            "✓"
        } else {
            "○"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_open() {
        let todo = Todo::new("Buy milk".to_string(), "2024-06-01".to_string(), 1);
        assert!(!todo.completed);
        assert_eq!(todo.id, 1);
        assert_eq!(todo.glyph(), "○");
    }

    #[test]
    fn test_glyph_tracks_completion() {
        let mut todo = Todo::new("Call mom".to_string(), String::new(), 1);
        todo.completed = true;
        assert_eq!(todo.glyph(), "✓");
    }

    #[test]
    fn test_json_key_order() {
        let todo = Todo::new("Buy milk".to_string(), "2024-06-01".to_string(), 1);
        let json = serde_json::to_string(&todo).unwrap();
        assert_eq!(
            json,
            r#"{"task":"Buy milk","completed":false,"id":1,"date":"2024-06-01"}"#
        );
    }
}
