//! Show/hide toggle for the login password field.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlInputElement};

const SHOW_LABEL: &str = "👁 Показать";
const HIDE_LABEL: &str = "🙈 Скрыть";

/// Attach the toggle handler. Each click flips the field's `type` attribute
/// between `password` and `text` and relabels the control to match.
pub fn install(toggle: &HtmlElement, field: &HtmlInputElement) {
    let control = toggle.clone();
    let field = field.clone();
    let on_click = Closure::<dyn FnMut()>::wrap(Box::new(move || {
        let hidden = field.get_attribute("type").as_deref() == Some("password");
        let _ = field.set_attribute("type", if hidden { "text" } else { "password" });
        control.set_text_content(Some(if hidden { HIDE_LABEL } else { SHOW_LABEL }));
    }));
    let _ = toggle.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
    on_click.forget();
}
