//! Rendering Target
//!
//! What the View draws and the raw UI events it receives back.
//! The browser implementation lives in `components`; tests use a recording fake.

use crate::models::TodoId;

/// Static texts mounted once into the root container
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub title: String,
    pub input_placeholder: String,
    pub input_name: String,
    pub submit_label: String,
    pub delete_label: String,
    pub empty_message: String,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            title: "Todos".to_string(),
            input_placeholder: "Add todo".to_string(),
            input_name: "todo".to_string(),
            submit_label: "Submit".to_string(),
            delete_label: "Delete".to_string(),
            empty_message: "Nothing to do! Add a task?".to_string(),
        }
    }
}

/// How a row's text is decorated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoration {
    Plain,
    Strikethrough,
}

/// One rendered todo row, tagged with its todo id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowContent {
    pub id: TodoId,
    pub checked: bool,
    pub text: String,
    pub decoration: Decoration,
    pub delete_label: String,
}

/// Full content of the todo list container
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListContent {
    /// Shown instead of rows when there is nothing to do
    Placeholder(String),
    Rows(Vec<RowContent>),
}

impl Default for ListContent {
    fn default() -> Self {
        ListContent::Rows(Vec::new())
    }
}

/// Raw UI events, before the View turns them into intents
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Add form submitted (default navigation already suppressed)
    Submit,
    /// Input inside an editable text region, with the region's current text
    EditableInput(String),
    /// A row lost focus
    FocusOut(TodoId),
    /// Delete control clicked on a row
    DeleteClicked(TodoId),
    /// Checkbox changed on a row
    CheckboxChanged(TodoId),
}

/// Handle to the place the View renders into
pub trait RenderTarget {
    /// Mount title, add form and list container
    fn mount(&self, layout: &Layout);

    /// Replace everything inside the list container
    fn replace_list(&self, content: ListContent);

    /// Current value of the add form's text input
    fn input_value(&self) -> String;

    fn clear_input(&self);
}
