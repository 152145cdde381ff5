//! Auto-dismiss for flash banners.
//!
//! Four seconds after the module loads, every alert then present in the flash
//! container starts its fade transition and is removed half a second later.
//! Alerts that appear after the snapshot are not touched.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Window};

use crate::timers;

const ALERT_SELECTOR: &str = "#flash-container .alert";
const DISMISS_DELAY_MS: i32 = 4000;
const REMOVE_DELAY_MS: i32 = 500;

/// Arm the one-shot dismiss timer.
pub fn install(window: &Window, document: &Document) {
    let win = window.clone();
    let document = document.clone();
    timers::set_timeout(
        window,
        move || dismiss_present_alerts(&win, &document),
        DISMISS_DELAY_MS,
    );
}

fn dismiss_present_alerts(window: &Window, document: &Document) {
    let Ok(alerts) = document.query_selector_all(ALERT_SELECTOR) else {
        return;
    };

    for i in 0..alerts.length() {
        let Some(node) = alerts.item(i) else {
            continue;
        };
        let Ok(alert) = node.dyn_into::<Element>() else {
            continue;
        };

        let _ = alert.class_list().remove_1("show");
        let _ = alert.class_list().add_1("fade");

        let doomed = alert.clone();
        timers::set_timeout(window, move || doomed.remove(), REMOVE_DELAY_MS);
    }
}
