//! Generate a provisional password on the user-creation form.
//!
//! One click fills the password input with a fresh 8-character password,
//! selects it, and pushes it to the clipboard so the administrator can paste
//! it straight into a message to the new user. The status indicator blinks on
//! for a few seconds when the clipboard write lands.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlElement, HtmlInputElement, Window};

use crate::{clipboard, password, timers};

const COPY_FAILED_ALERT: &str = "Не удалось скопировать пароль в буфер обмена.";
const STATUS_VISIBLE_MS: i32 = 3000;

/// Attach the generate handler to `button`. The status indicator is optional;
/// without it a successful copy simply has no visible acknowledgement.
pub fn install(
    window: &Window,
    button: &HtmlElement,
    field: &HtmlInputElement,
    status: Option<HtmlElement>,
) {
    let window = window.clone();
    let field = field.clone();
    let on_click = Closure::<dyn FnMut()>::wrap(Box::new(move || {
        let generated = password::generate();
        fill_field(&field, &generated);

        let window = window.clone();
        let status = status.clone();
        spawn_local(async move {
            if !clipboard::available(&window) {
                let _ = window.alert_with_message(COPY_FAILED_ALERT);
                return;
            }
            match clipboard::write_text(&window, &generated).await {
                Ok(()) => {
                    if let Some(status) = &status {
                        show_status(&window, status);
                    }
                }
                Err(_) => {
                    let _ = window.alert_with_message(COPY_FAILED_ALERT);
                }
            }
        });
    }));
    let _ = button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
    on_click.forget();
}

/// Put `generated` into the field and leave it focused and selected, ready to
/// be overwritten or copied by hand.
pub fn fill_field(field: &HtmlInputElement, generated: &str) {
    field.set_value(generated);
    let _ = field.focus();
    field.select();
}

fn show_status(window: &Window, status: &HtmlElement) {
    let _ = status.style().set_property("display", "inline");
    let status = status.clone();
    timers::set_timeout(
        window,
        move || {
            let _ = status.style().set_property("display", "none");
        },
        STATUS_VISIBLE_MS,
    );
}
