//! Copy a letter's phone number to the clipboard.
//!
//! The button carries the number in `data-number`. The async Clipboard API is
//! preferred; when it is missing or its promise rejects, the legacy
//! textarea-plus-`execCommand` path runs once. Either way a successful copy
//! swaps the button label to a confirmation for a moment.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::console;
use web_sys::{HtmlElement, Window};

use crate::{clipboard, timers};

const DEFAULT_LABEL: &str = "📋 Копировать";
const COPIED_LABEL: &str = "✅ Скопировано!";
const COPY_FAILED_ALERT: &str = "Не удалось скопировать номер.";
const LABEL_RESTORE_MS: i32 = 1500;

/// Attach the copy handler to `button`. A button without a `data-number`
/// attribute is left alone.
pub fn install(window: &Window, button: &HtmlElement) {
    let Some(number) = button.dataset().get("number") else {
        return;
    };

    let window = window.clone();
    let btn = button.clone();
    let on_click = Closure::<dyn FnMut()>::wrap(Box::new(move || {
        copy_number(&window, &btn, &number);
    }));
    let _ = button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
    on_click.forget();
}

fn copy_number(window: &Window, button: &HtmlElement, number: &str) {
    if clipboard::available(window) {
        let window = window.clone();
        let button = button.clone();
        let number = number.to_owned();
        spawn_local(async move {
            match clipboard::write_text(&window, &number).await {
                Ok(()) => confirm_copied(&window, &button),
                Err(err) => {
                    console::error_2(&JsValue::from_str("Clipboard error:"), &err);
                    fallback_copy(&window, &button, &number);
                }
            }
        });
    } else {
        fallback_copy(window, button, number);
    }
}

fn fallback_copy(window: &Window, button: &HtmlElement, number: &str) {
    match clipboard::legacy_copy(window, number) {
        Ok(()) => confirm_copied(window, button),
        Err(err) => {
            console::error_2(&JsValue::from_str("Fallback copy error:"), &err);
            let _ = window.alert_with_message(COPY_FAILED_ALERT);
        }
    }
}

/// Swap the label to the confirmation, then restore the default label.
/// Rapid double clicks leave two restore timers racing; the last to fire wins.
fn confirm_copied(window: &Window, button: &HtmlElement) {
    button.set_text_content(Some(COPIED_LABEL));
    let btn = button.clone();
    timers::set_timeout(
        window,
        move || btn.set_text_content(Some(DEFAULT_LABEL)),
        LABEL_RESTORE_MS,
    );
}
