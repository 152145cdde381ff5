//! Client-side page enhancements for the mailreg letter registry.
//!
//! The registry's pages are rendered server-side; this module loads alongside
//! them and wires a fixed set of behaviors onto the markup: copying a letter's
//! phone number to the clipboard, auto-dismissing flash banners, generating a
//! one-off password for new accounts, toggling password visibility, and warning
//! about an active Caps Lock.
//!
//! Every hook is optional: a page that lacks an element simply does not get the
//! corresponding behavior. Nothing here holds state outside the DOM itself.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::console;
use web_sys::{Document, Window};

pub mod behaviors;
pub mod clipboard;
pub mod page;
pub mod password;
mod timers;

use page::Page;

/// Module entry point, invoked by the JS glue when the wasm module loads.
///
/// The flash-dismiss timer is armed immediately (it counts from script
/// evaluation, not from DOM readiness); everything else waits for the document
/// to finish parsing so the elements it hooks are present.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    behaviors::flash::install(&window, &document);

    if document.ready_state() == "loading" {
        let win = window.clone();
        let doc = document.clone();
        let on_ready = Closure::once(move || enhance_page(&win, &doc));
        let _ = document
            .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref());
        on_ready.forget();
    } else {
        enhance_page(&window, &document);
    }
}

/// Resolve the page's hook elements and install every behavior whose elements
/// are present. Absent elements are skipped silently.
pub fn enhance_page(window: &Window, document: &Document) {
    let page = Page::new(document.clone());

    if let Some(button) = page.copy_number_button() {
        behaviors::copy_number::install(window, &button);
    }

    if let (Some(button), Some(field)) = (page.gen_password_button(), page.password_input()) {
        behaviors::password_gen::install(window, &button, &field, page.gen_status());
    }

    if let (Some(toggle), Some(field)) = (page.toggle_control(), page.password_field()) {
        behaviors::password_toggle::install(&toggle, &field);
    }

    if let Some(field) = page.password_field() {
        if let Err(err) = behaviors::caps_lock::install(page.document(), &field) {
            console::error_2(&JsValue::from_str("caps lock indicator install failed:"), &err);
        }
    }
}
