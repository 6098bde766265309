//! Todo Row Component
//!
//! One `li` per todo, its `id` attribute set to the todo id.

use leptos::either::Either;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::EventSink;
use crate::render::{Decoration, RowContent, UiEvent};

#[component]
pub fn TodoRow(row: RowContent, events: EventSink) -> impl IntoView {
    let id = row.id;
    let dispatch = move |event: UiEvent| (events.get_value())(event);

    // Completed todos get a strikethrough
    let text = match row.decoration {
        Decoration::Strikethrough => Either::Left(view! { <s>{row.text}</s> }),
        Decoration::Plain => Either::Right(row.text),
    };

    view! {
        <li id=id.to_string()>
            <input
                type="checkbox"
                prop:checked=row.checked
                on:change=move |_| dispatch(UiEvent::CheckboxChanged(id))
            />
            <span
                class="editable"
                contenteditable="true"
                on:input=move |ev| {
                    if let Some(text) = editable_text(&ev) {
                        dispatch(UiEvent::EditableInput(text));
                    }
                }
                on:blur=move |_| dispatch(UiEvent::FocusOut(id))
            >
                {text}
            </span>
            <button class="delete" on:click=move |_| dispatch(UiEvent::DeleteClicked(id))>
                {row.delete_label}
            </button>
        </li>
    }
}

/// Current visible text of the editable span that fired `ev`
fn editable_text(ev: &web_sys::Event) -> Option<String> {
    ev.target()?
        .dyn_into::<web_sys::HtmlElement>()
        .ok()
        .map(|element| element.inner_text())
}
