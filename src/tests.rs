//! App Integration Tests
//!
//! Model, View and Controller wired together over an in-memory store and a
//! recording render target, driven by raw UI events.

use std::cell::{Cell, RefCell};

use crate::controller::Controller;
use crate::model::Model;
use crate::models::{Todo, TodoId};
use crate::render::{Layout, ListContent, RenderTarget};
use crate::storage::{KeyValueStore, MemoryStore};
use crate::view::View;

/// Render target that keeps what was drawn and simulates the add input
#[derive(Default)]
pub(crate) struct RecordingTarget {
    layout: RefCell<Option<Layout>>,
    list: RefCell<Option<ListContent>>,
    renders: Cell<usize>,
    input: RefCell<String>,
}

impl RecordingTarget {
    pub(crate) fn mounted(&self) -> Option<Layout> {
        self.layout.borrow().clone()
    }

    pub(crate) fn last_list(&self) -> Option<ListContent> {
        self.list.borrow().clone()
    }

    pub(crate) fn render_count(&self) -> usize {
        self.renders.get()
    }

    /// Simulate typing into the add input
    pub(crate) fn type_input(&self, text: &str) {
        *self.input.borrow_mut() = text.to_string();
    }

    /// (id, text, complete) for every rendered row
    pub(crate) fn rendered_rows(&self) -> Vec<(TodoId, String, bool)> {
        match self.last_list() {
            Some(ListContent::Rows(rows)) => rows
                .into_iter()
                .map(|row| (row.id, row.text, row.checked))
                .collect(),
            _ => Vec::new(),
        }
    }
}

impl RenderTarget for RecordingTarget {
    fn mount(&self, layout: &Layout) {
        *self.layout.borrow_mut() = Some(layout.clone());
    }

    fn replace_list(&self, content: ListContent) {
        self.renders.set(self.renders.get() + 1);
        *self.list.borrow_mut() = Some(content);
    }

    fn input_value(&self) -> String {
        self.input.borrow().clone()
    }

    fn clear_input(&self) {
        self.input.borrow_mut().clear();
    }
}

mod tests {
    use super::*;
    use crate::render::UiEvent;
    use std::rc::Rc;

    const KEY: &str = "todos";

    fn setup_with(store: Rc<MemoryStore>) -> Controller<Rc<MemoryStore>, RecordingTarget> {
        let model = Model::new(store, KEY);
        let view = View::new(RecordingTarget::default(), Layout::default());
        Controller::new(model, view)
    }

    fn setup() -> (Controller<Rc<MemoryStore>, RecordingTarget>, Rc<MemoryStore>) {
        let store = Rc::new(MemoryStore::new());
        (setup_with(store.clone()), store)
    }

    fn add(app: &Controller<Rc<MemoryStore>, RecordingTarget>, text: &str) {
        app.view().target().type_input(text);
        app.dispatch(UiEvent::Submit);
    }

    fn snapshot(app: &Controller<Rc<MemoryStore>, RecordingTarget>) -> Vec<Todo> {
        app.model().borrow().todos().to_vec()
    }

    fn stored(store: &MemoryStore) -> Vec<Todo> {
        let raw = store.get(KEY).unwrap().expect("todos persisted");
        serde_json::from_str(&raw).unwrap()
    }

    #[test]
    fn test_initial_render_shows_placeholder() {
        let (app, _) = setup();
        assert_eq!(app.view().target().render_count(), 1);
        assert!(matches!(app.view().target().last_list(), Some(ListContent::Placeholder(_))));
    }

    #[test]
    fn test_initial_render_shows_persisted_todos() {
        let store = Rc::new(MemoryStore::with_entry(
            KEY,
            r#"[{"id":1,"text":"Run a marathon","complete":false},{"id":2,"text":"Plant a garden","complete":true}]"#,
        ));
        let app = setup_with(store);

        assert_eq!(
            app.view().target().rendered_rows(),
            vec![(1, "Run a marathon".to_string(), false), (2, "Plant a garden".to_string(), true)]
        );
    }

    #[test]
    fn test_buy_milk_lifecycle() {
        let (app, store) = setup();

        add(&app, "Buy milk");
        assert_eq!(snapshot(&app), vec![Todo::new(1, "Buy milk")]);
        assert_eq!(app.view().target().input_value(), "");

        app.dispatch(UiEvent::CheckboxChanged(1));
        let done = Todo { id: 1, text: "Buy milk".into(), complete: true };
        assert_eq!(snapshot(&app), vec![done.clone()]);

        app.dispatch(UiEvent::EditableInput("Buy oat milk".into()));
        app.dispatch(UiEvent::FocusOut(1));
        let edited = Todo { id: 1, text: "Buy oat milk".into(), complete: true };
        assert_eq!(snapshot(&app), vec![edited.clone()]);
        assert_eq!(stored(&store), vec![edited]);
        assert_eq!(app.view().target().rendered_rows(), vec![(1, "Buy oat milk".to_string(), true)]);

        app.dispatch(UiEvent::DeleteClicked(1));
        assert!(snapshot(&app).is_empty());
        assert!(stored(&store).is_empty());
        assert!(matches!(app.view().target().last_list(), Some(ListContent::Placeholder(_))));
    }

    #[test]
    fn test_delete_first_then_add() {
        let (app, _) = setup();
        add(&app, "A");
        add(&app, "B");
        app.dispatch(UiEvent::DeleteClicked(1));
        add(&app, "C");

        let ids: Vec<TodoId> = snapshot(&app).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_every_mutation_renders_once() {
        let (app, _) = setup();
        let initial = app.view().target().render_count();

        add(&app, "A");
        app.dispatch(UiEvent::CheckboxChanged(1));
        app.dispatch(UiEvent::DeleteClicked(99));

        assert_eq!(app.view().target().render_count(), initial + 3);
    }

    #[test]
    fn test_ignored_events_do_not_render() {
        let (app, _) = setup();
        let initial = app.view().target().render_count();

        app.dispatch(UiEvent::Submit);
        app.dispatch(UiEvent::FocusOut(1));

        assert_eq!(app.view().target().render_count(), initial);
    }

    #[test]
    fn test_state_survives_reload() {
        let (app, store) = setup();
        add(&app, "A");
        add(&app, "B");
        app.dispatch(UiEvent::CheckboxChanged(2));
        let before = snapshot(&app);
        drop(app);

        let reloaded = setup_with(store);
        assert_eq!(snapshot(&reloaded), before);
        assert_eq!(
            reloaded.view().target().rendered_rows(),
            vec![(1, "A".to_string(), false), (2, "B".to_string(), true)]
        );
    }
}
