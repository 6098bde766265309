//! Controller
//!
//! Wires View intents to Model operations and Model commits to View renders.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::model::Model;
use crate::render::{RenderTarget, UiEvent};
use crate::storage::KeyValueStore;
use crate::view::View;

pub struct Controller<S: KeyValueStore, T: RenderTarget> {
    model: Rc<RefCell<Model<S>>>,
    view: Rc<View<T>>,
}

impl<S: KeyValueStore + 'static, T: RenderTarget + 'static> Controller<S, T> {
    pub fn new(model: Model<S>, view: View<T>) -> Self {
        let model = Rc::new(RefCell::new(model));
        let view = Rc::new(view);

        let render_to = view.clone();
        model
            .borrow_mut()
            .bind_change_listener(move |todos| render_to.display_todos(todos));

        // View handlers only hold weak references; the model already owns the view
        let target = Rc::downgrade(&model);
        view.bind_add_todo(move |text| with_model(&target, |m| m.add_todo(text)));
        let target = Rc::downgrade(&model);
        view.bind_edit_todo(move |id, text| with_model(&target, |m| m.edit_todo(id, &text)));
        let target = Rc::downgrade(&model);
        view.bind_delete_todo(move |id| with_model(&target, |m| m.delete_todo(id)));
        let target = Rc::downgrade(&model);
        view.bind_toggle_todo(move |id| with_model(&target, |m| m.toggle_todo(id)));

        view.display_todos(model.borrow().todos());

        Self { model, view }
    }

    /// Route a raw UI event through the View
    pub fn dispatch(&self, event: UiEvent) {
        log::debug!("[CONTROLLER] {:?}", event);
        self.view.handle_event(event);
    }

    #[cfg(test)]
    pub(crate) fn model(&self) -> &Rc<RefCell<Model<S>>> {
        &self.model
    }

    #[cfg(test)]
    pub(crate) fn view(&self) -> &Rc<View<T>> {
        &self.view
    }
}

fn with_model<S: KeyValueStore>(model: &Weak<RefCell<Model<S>>>, f: impl FnOnce(&mut Model<S>)) {
    match model.upgrade() {
        Some(model) => f(&mut model.borrow_mut()),
        None => log::warn!("[CONTROLLER] Intent after model was dropped"),
    }
}
