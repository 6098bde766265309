//! New Todo Form Component
//!
//! Text input plus submit button. Submitting never navigates.

use leptos::prelude::*;

use crate::components::{EventSink, SignalTarget};
use crate::render::UiEvent;

#[component]
pub fn NewTodoForm(target: SignalTarget, events: EventSink) -> impl IntoView {
    let layout = target.layout.get_untracked();

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        (events.get_value())(UiEvent::Submit);
    };

    view! {
        <form on:submit=submit>
            <input
                type="text"
                name=layout.input_name
                placeholder=layout.input_placeholder
                prop:value=move || target.input.get()
                on:input=move |ev| target.input.set(event_target_value(&ev))
            />
            <button type="submit">{layout.submit_label}</button>
        </form>
    }
}
