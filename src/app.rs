//! Todo App
//!
//! Composition root: opens storage, builds Model, View and Controller,
//! and mounts the components into the root container.

use std::rc::Rc;

use leptos::mount::mount_to;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::{EventSink, SignalTarget, TodoApp};
use crate::config::AppConfig;
use crate::controller::Controller;
use crate::error::AppError;
use crate::model::Model;
use crate::render::UiEvent;
use crate::storage::{BrowserStore, KeyValueStore, MemoryStore};
use crate::view::View;

/// Start the app inside the element matching `config.root_selector`
pub fn start(config: AppConfig) -> Result<(), AppError> {
    let root = find_root(&config.root_selector)?;

    let model = Model::new(open_store(), config.storage_key.as_str());
    let target = SignalTarget::new();
    let todo_view = View::new(target, config.layout.clone());
    let controller = Controller::new(model, todo_view);

    let dispatch: Rc<dyn Fn(UiEvent)> = Rc::new(move |event: UiEvent| controller.dispatch(event));
    let events: EventSink = StoredValue::new_local(dispatch);

    mount_to(root, move || view! { <TodoApp target=target events=events /> }).forget();
    log::info!("[APP] Mounted into {}", config.root_selector);
    Ok(())
}

/// Browser localStorage, or an in-memory store if it cannot be opened
fn open_store() -> Box<dyn KeyValueStore> {
    match BrowserStore::open() {
        Ok(store) => Box::new(store),
        Err(e) => {
            log::warn!("[APP] {}; todos will not survive a reload", e);
            Box::new(MemoryStore::new())
        }
    }
}

fn find_root(selector: &str) -> Result<web_sys::HtmlElement, AppError> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or(AppError::NoDocument)?;

    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok())
        .ok_or_else(|| AppError::RootNotFound(selector.to_string()))
}
