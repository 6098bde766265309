//! Todo View
//!
//! Renders todo snapshots into a `RenderTarget` and turns raw UI events
//! into add/edit/delete/toggle intents for whoever bound a handler.

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::{Todo, TodoId};
use crate::render::{Decoration, Layout, ListContent, RenderTarget, RowContent, UiEvent};

/// Single handler registration; binding again replaces the previous handler
struct Slot<F: ?Sized>(RefCell<Option<Rc<F>>>);

impl<F: ?Sized> Slot<F> {
    fn empty() -> Self {
        Slot(RefCell::new(None))
    }

    fn set(&self, handler: Rc<F>) {
        *self.0.borrow_mut() = Some(handler);
    }

    /// Cloned out so no borrow is held while the handler runs
    fn get(&self) -> Option<Rc<F>> {
        self.0.borrow().clone()
    }
}

pub struct View<T: RenderTarget> {
    target: T,
    layout: Layout,
    /// Edit-in-progress text, committed on focus loss
    provisional_text: RefCell<String>,
    on_add: Slot<dyn Fn(String)>,
    on_edit: Slot<dyn Fn(TodoId, String)>,
    on_delete: Slot<dyn Fn(TodoId)>,
    on_toggle: Slot<dyn Fn(TodoId)>,
}

impl<T: RenderTarget> View<T> {
    /// Mount the layout into `target`
    pub fn new(target: T, layout: Layout) -> Self {
        target.mount(&layout);
        Self {
            target,
            layout,
            provisional_text: RefCell::new(String::new()),
            on_add: Slot::empty(),
            on_edit: Slot::empty(),
            on_delete: Slot::empty(),
            on_toggle: Slot::empty(),
        }
    }

    #[cfg(test)]
    pub(crate) fn target(&self) -> &T {
        &self.target
    }

    /// Replace the rendered list with `todos`
    pub fn display_todos(&self, todos: &[Todo]) {
        let content = if todos.is_empty() {
            ListContent::Placeholder(self.layout.empty_message.clone())
        } else {
            ListContent::Rows(todos.iter().map(|todo| self.row(todo)).collect())
        };
        self.target.replace_list(content);
    }

    fn row(&self, todo: &Todo) -> RowContent {
        RowContent {
            id: todo.id,
            checked: todo.complete,
            text: todo.text.clone(),
            decoration: if todo.complete { Decoration::Strikethrough } else { Decoration::Plain },
            delete_label: self.layout.delete_label.clone(),
        }
    }

    pub fn bind_add_todo(&self, handler: impl Fn(String) + 'static) {
        self.on_add.set(Rc::new(handler));
    }

    pub fn bind_edit_todo(&self, handler: impl Fn(TodoId, String) + 'static) {
        self.on_edit.set(Rc::new(handler));
    }

    pub fn bind_delete_todo(&self, handler: impl Fn(TodoId) + 'static) {
        self.on_delete.set(Rc::new(handler));
    }

    pub fn bind_toggle_todo(&self, handler: impl Fn(TodoId) + 'static) {
        self.on_toggle.set(Rc::new(handler));
    }

    /// Translate a raw UI event into at most one intent
    pub fn handle_event(&self, event: UiEvent) {
        match event {
            UiEvent::Submit => self.submit(),
            UiEvent::EditableInput(text) => {
                *self.provisional_text.borrow_mut() = text;
            }
            UiEvent::FocusOut(id) => self.finish_edit(id),
            UiEvent::DeleteClicked(id) => match self.on_delete.get() {
                Some(handler) => handler(id),
                None => log::debug!("[VIEW] Delete #{} ignored, no handler bound", id),
            },
            UiEvent::CheckboxChanged(id) => match self.on_toggle.get() {
                Some(handler) => handler(id),
                None => log::debug!("[VIEW] Toggle #{} ignored, no handler bound", id),
            },
        }
    }

    fn submit(&self) {
        let text = self.target.input_value();
        if text.is_empty() {
            return;
        }
        let Some(handler) = self.on_add.get() else {
            log::debug!("[VIEW] Add ignored, no handler bound");
            return;
        };
        handler(text);
        self.target.clear_input();
    }

    fn finish_edit(&self, id: TodoId) {
        let text = std::mem::take(&mut *self.provisional_text.borrow_mut());
        if text.is_empty() {
            return;
        }
        match self.on_edit.get() {
            Some(handler) => handler(id, text),
            None => log::debug!("[VIEW] Edit #{} ignored, no handler bound", id),
        }
    }
}
