//! Browser entry point. Built for `wasm32-unknown-unknown` with the `web`
//! feature and loaded by the page shell served at `/page`.

use crate::display::LOG_PREFIX;
use crate::document::{ClickListener, Document, ScrollBehavior, ScrollBlock, ScrollIntoViewOptions};
use crate::lifecycle::{PageLifecycle, register_page_tasks};
use crate::source::{HttpCountSource, LoadError};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

pub struct WebDocument {
    inner: web_sys::Document,
}

impl WebDocument {
    pub fn new(inner: web_sys::Document) -> Self {
        Self { inner }
    }
}

impl Document for WebDocument {
    fn has_element(&self, id: &str) -> bool {
        self.inner.get_element_by_id(id).is_some()
    }

    fn text_content(&self, id: &str) -> Option<String> {
        self.inner
            .get_element_by_id(id)
            .and_then(|element| element.text_content())
    }

    fn set_text_content(&self, id: &str, text: &str) -> bool {
        match self.inner.get_element_by_id(id) {
            Some(element) => {
                element.set_text_content(Some(text));
                true
            }
            None => false,
        }
    }

    fn scroll_into_view(&self, id: &str, options: ScrollIntoViewOptions) -> bool {
        let Some(element) = self.inner.get_element_by_id(id) else {
            return false;
        };
        let web_options = web_sys::ScrollIntoViewOptions::new();
        web_options.set_behavior(match options.behavior {
            ScrollBehavior::Auto => web_sys::ScrollBehavior::Auto,
            ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
            ScrollBehavior::Instant => web_sys::ScrollBehavior::Instant,
        });
        web_options.set_block(match options.block {
            ScrollBlock::Start => web_sys::ScrollLogicalPosition::Start,
            ScrollBlock::Center => web_sys::ScrollLogicalPosition::Center,
            ScrollBlock::End => web_sys::ScrollLogicalPosition::End,
            ScrollBlock::Nearest => web_sys::ScrollLogicalPosition::Nearest,
        });
        element.scroll_into_view_with_scroll_into_view_options(&web_options);
        true
    }

    fn add_click_listener(&self, id: &str, listener: ClickListener) -> bool {
        let Some(element) = self.inner.get_element_by_id(id) else {
            return false;
        };
        let closure = Closure::wrap(listener);
        let attached = element
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
            .is_ok();
        // The listener lives as long as the page.
        closure.forget();
        attached
    }
}

pub(crate) fn console_error(err: &LoadError) {
    web_sys::console::error_2(
        &JsValue::from_str(LOG_PREFIX),
        &JsValue::from_str(&err.to_string()),
    );
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let lifecycle = Rc::new(PageLifecycle::new());
    register_page_tasks(
        &lifecycle,
        Rc::new(WebDocument::new(document.clone())),
        Rc::new(HttpCountSource::default()),
    );

    if document.ready_state() != "loading" {
        lifecycle.content_ready();
        return Ok(());
    }

    let ready = Rc::clone(&lifecycle);
    let on_ready = Closure::once(move || {
        ready.content_ready();
    });
    document.add_event_listener_with_callback(
        "DOMContentLoaded",
        on_ready.as_ref().unchecked_ref(),
    )?;
    on_ready.forget();
    Ok(())
}
