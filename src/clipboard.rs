//! Clipboard access: the async Clipboard API plus the legacy
//! `execCommand("copy")` technique for environments without it.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlTextAreaElement, Window};

/// Whether the async Clipboard API is exposed on this page.
///
/// Probes the `navigator.clipboard` property directly; the binding itself
/// always hands back an object, even on insecure origins where the property is
/// undefined.
pub fn available(window: &Window) -> bool {
    js_sys::Reflect::get(window.navigator().as_ref(), &JsValue::from_str("clipboard"))
        .map(|v| !v.is_undefined() && !v.is_null())
        .unwrap_or(false)
}

/// Write `text` to the system clipboard through the async Clipboard API.
pub async fn write_text(window: &Window, text: &str) -> Result<(), JsValue> {
    let promise = window.navigator().clipboard().write_text(text);
    JsFuture::from(promise).await.map(|_| ())
}

/// Legacy copy: park the text in an off-screen textarea, select it and invoke
/// the synchronous copy command. The textarea is removed whether or not the
/// command succeeds.
pub fn legacy_copy(window: &Window, text: &str) -> Result<(), JsValue> {
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("document is unavailable"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document body is unavailable"))?;

    let temp: HtmlTextAreaElement = document
        .create_element("textarea")?
        .dyn_into()
        .map_err(|_| JsValue::from_str("textarea is not HtmlTextAreaElement"))?;
    temp.set_value(text);
    body.append_child(&temp)?;
    let _ = temp.focus();
    temp.select();

    let copied = document.exec_command("copy");
    temp.remove();

    match copied {
        Ok(true) => Ok(()),
        Ok(false) => Err(JsValue::from_str("execCommand copy was refused")),
        Err(err) => Err(err),
    }
}
