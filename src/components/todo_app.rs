//! Todo App Component
//!
//! Root component: title, add form and the todo list container.
//! Reads everything it draws from a `SignalTarget`.

use std::rc::Rc;

use leptos::either::Either;
use leptos::prelude::*;

use crate::components::{NewTodoForm, TodoRow};
use crate::render::{Layout, ListContent, RenderTarget, UiEvent};

/// Where components send raw UI events
pub type EventSink = StoredValue<Rc<dyn Fn(UiEvent)>, LocalStorage>;

/// Render target backed by Leptos signals
#[derive(Clone, Copy)]
pub struct SignalTarget {
    pub layout: RwSignal<Layout>,
    pub list: RwSignal<ListContent>,
    /// Value of the add form's text input
    pub input: RwSignal<String>,
}

impl SignalTarget {
    pub fn new() -> Self {
        Self {
            layout: RwSignal::new(Layout::default()),
            list: RwSignal::new(ListContent::default()),
            input: RwSignal::new(String::new()),
        }
    }
}

impl RenderTarget for SignalTarget {
    fn mount(&self, layout: &Layout) {
        self.layout.set(layout.clone());
    }

    fn replace_list(&self, content: ListContent) {
        self.list.set(content);
    }

    fn input_value(&self) -> String {
        self.input.get_untracked()
    }

    fn clear_input(&self) {
        self.input.set(String::new());
    }
}

#[component]
pub fn TodoApp(target: SignalTarget, events: EventSink) -> impl IntoView {
    view! {
        <h1>{move || target.layout.with(|layout| layout.title.clone())}</h1>

        <NewTodoForm target=target events=events />

        <ul class="todo-list">
            {move || match target.list.get() {
                ListContent::Placeholder(message) => Either::Left(view! { <p>{message}</p> }),
                ListContent::Rows(rows) => Either::Right(
                    rows.into_iter()
                        .map(|row| view! { <TodoRow row=row events=events /> })
                        .collect_view()
                ),
            }}
        </ul>
    }
}
