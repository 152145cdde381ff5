//! Caps Lock warning next to the password field.
//!
//! The warning element is created here rather than by the templates, hidden
//! until the first key event. Visibility is recomputed from each `keyup`'s
//! modifier state only; it can lag the physical keyboard if focus moves
//! without a key event.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, HtmlInputElement, KeyboardEvent};

const WARNING_CLASS: &str = "text-warning small mt-1";
const WARNING_TEXT: &str = "⚠️ Включён Caps Lock";

/// Create the hidden warning element beside `field` and start tracking the
/// Caps Lock modifier on every key release inside it.
pub fn install(document: &Document, field: &HtmlInputElement) -> Result<(), JsValue> {
    let warning: HtmlElement = document
        .create_element("div")?
        .dyn_into()
        .map_err(|_| JsValue::from_str("warning element is not HtmlElement"))?;
    warning.set_class_name(WARNING_CLASS);
    warning.set_text_content(Some(WARNING_TEXT));
    warning.style().set_property("display", "none")?;

    let parent = field
        .parent_node()
        .ok_or_else(|| JsValue::from_str("password field has no parent"))?;
    parent.append_child(&warning)?;

    let on_keyup = Closure::wrap(Box::new(move |event: KeyboardEvent| {
        let caps_on = event.get_modifier_state("CapsLock");
        let _ = warning
            .style()
            .set_property("display", if caps_on { "block" } else { "none" });
    }) as Box<dyn FnMut(_)>);
    let _ = field.add_event_listener_with_callback("keyup", on_keyup.as_ref().unchecked_ref());
    on_keyup.forget();

    Ok(())
}
