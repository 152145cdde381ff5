//! One-shot timer plumbing over `window.setTimeout`.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

/// Run `f` once after `ms` milliseconds.
pub(crate) fn set_timeout<F>(window: &Window, f: F, ms: i32)
where
    F: FnOnce() + 'static,
{
    let closure = Closure::once(f);
    let _ = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(closure.as_ref().unchecked_ref(), ms);
    closure.forget(); // handed to the JS timer queue
}
