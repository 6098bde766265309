//! UI Components
//!
//! Leptos components rendering the todo app, and the signal-backed render target.

mod new_todo_form;
mod todo_app;
mod todo_row;

pub use new_todo_form::NewTodoForm;
pub use todo_app::{EventSink, SignalTarget, TodoApp};
pub use todo_row::TodoRow;
