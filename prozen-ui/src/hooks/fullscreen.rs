// prozen-ui/src/hooks/fullscreen.rs
use crate::config::FULLSCREEN_CHANGE_EVENT;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Document;

/// Check if the document currently has a fullscreen element
pub fn is_fullscreen(document: &Document) -> bool {
    document.fullscreen_element().is_some()
}

/// `fullscreenchange` listener on the document, removed again on drop.
/// The callback receives the fullscreen state after the change.
pub struct FullscreenListener {
    document: Document,
    closure: Closure<dyn FnMut(web_sys::Event)>,
}

impl FullscreenListener {
    pub fn install<F>(document: Document, mut on_change: F) -> Result<Self, JsValue>
    where
        F: FnMut(bool) + 'static,
    {
        let closure = Closure::wrap(Box::new(move |_: web_sys::Event| {
            if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
                on_change(is_fullscreen(&doc));
            }
        }) as Box<dyn FnMut(web_sys::Event)>);

        document.add_event_listener_with_callback(
            FULLSCREEN_CHANGE_EVENT,
            closure.as_ref().unchecked_ref(),
        )?;

        Ok(Self { document, closure })
    }
}

impl Drop for FullscreenListener {
    fn drop(&mut self) {
        let _ = self.document.remove_event_listener_with_callback(
            FULLSCREEN_CHANGE_EVENT,
            self.closure.as_ref().unchecked_ref(),
        );
    }
}
