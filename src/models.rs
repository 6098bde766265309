//! Frontend Models
//!
//! The todo record and the id assignment rule.

use serde::{Deserialize, Serialize};

/// Todo identifier, serialized as a plain JSON number.
///
/// Signed so lists written with negative or large ids still load.
pub type TodoId = i64;

/// A single task (matches the persisted JSON shape)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub text: String,
    pub complete: bool,
}

impl Todo {
    /// Create a new, incomplete todo
    pub fn new(id: TodoId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            complete: false,
        }
    }

    /// Same record with replaced text
    pub fn with_text(&self, text: impl Into<String>) -> Self {
        Self {
            id: self.id,
            text: text.into(),
            complete: self.complete,
        }
    }

    /// Same record with `complete` flipped
    pub fn toggled(&self) -> Self {
        Self {
            id: self.id,
            text: self.text.clone(),
            complete: !self.complete,
        }
    }
}

/// Next id for a new todo: highest existing id + 1, or 1 for an empty list.
///
/// Deleting the todo holding the highest id frees that id for the next add.
/// `None` once the highest id is `TodoId::MAX`; ids are never repeated.
pub fn next_id(todos: &[Todo]) -> Option<TodoId> {
    match todos.iter().map(|todo| todo.id).max() {
        Some(max) => max.checked_add(1),
        None => Some(1),
    }
}
