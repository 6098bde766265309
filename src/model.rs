//! Todo Model
//!
//! Owns the todo list. Every mutation commits: the change listener is
//! called with the full list, then the list is written to storage.

use crate::error::StorageError;
use crate::models::{next_id, Todo, TodoId};
use crate::storage::KeyValueStore;

/// Change listener, called on every commit
pub type ChangeListener = Box<dyn FnMut(&[Todo])>;

pub struct Model<S: KeyValueStore> {
    todos: Vec<Todo>,
    store: S,
    key: String,
    listener: Option<ChangeListener>,
}

impl<S: KeyValueStore> Model<S> {
    /// Load the list stored under `key`; anything unreadable loads as empty
    pub fn new(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let todos = load_todos(&store, &key);
        log::debug!("[MODEL] Loaded {} todos from '{}'", todos.len(), key);
        Self {
            todos,
            store,
            key,
            listener: None,
        }
    }

    /// Current list, in insertion order
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    /// Register the change listener, replacing any previous one
    pub fn bind_change_listener(&mut self, listener: impl FnMut(&[Todo]) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Append a new todo; skipped (but still committed) when no id is left
    pub fn add_todo(&mut self, text: impl Into<String>) {
        match next_id(&self.todos) {
            Some(id) => self.todos.push(Todo::new(id, text)),
            None => log::error!("[MODEL] No todo id left above {}; add skipped", TodoId::MAX),
        }
        self.commit();
    }

    /// Replace the text of the todo with `id`, keeping its flag and position
    pub fn edit_todo(&mut self, id: TodoId, text: &str) {
        for todo in self.todos.iter_mut().filter(|todo| todo.id == id) {
            *todo = todo.with_text(text);
        }
        self.commit();
    }

    pub fn delete_todo(&mut self, id: TodoId) {
        self.todos.retain(|todo| todo.id != id);
        self.commit();
    }

    /// Flip the complete flag on the todo with `id`
    pub fn toggle_todo(&mut self, id: TodoId) {
        for todo in self.todos.iter_mut().filter(|todo| todo.id == id) {
            *todo = todo.toggled();
        }
        self.commit();
    }

    fn commit(&mut self) {
        if let Some(listener) = self.listener.as_mut() {
            listener(&self.todos);
        }

        let result = serde_json::to_string(&self.todos)
            .map_err(StorageError::from)
            .and_then(|json| self.store.set(&self.key, &json));
        match result {
            Ok(()) => log::debug!("[MODEL] Committed {} todos", self.todos.len()),
            Err(e) => log::error!("[MODEL] Failed to persist todos: {}", e),
        }
    }
}

fn load_todos<S: KeyValueStore>(store: &S, key: &str) -> Vec<Todo> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            log::warn!("[MODEL] {}; starting with an empty list", e);
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<Todo>>(&raw) {
        Ok(todos) => todos,
        Err(e) => {
            log::warn!("[MODEL] Discarding unparsable todos under '{}': {}", key, e);
            Vec::new()
        }
    }
}
