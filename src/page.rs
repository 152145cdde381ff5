//! Typed access to the hook elements the server-rendered templates provide.
//!
//! Every getter resolves at most one element and returns `None` when the page
//! does not carry it, so callers can wire behaviors without scattering raw id
//! lookups. An element that exists under the expected id but has the wrong
//! concrete type counts as absent.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlInputElement};

/// The fixed element contract between this module and the rendered markup.
pub struct Page {
    document: Document,
}

impl Page {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    fn by_id<T: JsCast>(&self, id: &str) -> Option<T> {
        self.document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<T>().ok())
    }

    fn by_selector<T: JsCast>(&self, selector: &str) -> Option<T> {
        self.document
            .query_selector(selector)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<T>().ok())
    }

    /// Button that carries the phone number to copy in `data-number`.
    pub fn copy_number_button(&self) -> Option<HtmlElement> {
        self.by_id("copyNumber")
    }

    /// Button that triggers password generation on the user-creation form.
    pub fn gen_password_button(&self) -> Option<HtmlElement> {
        self.by_id("genPassword")
    }

    /// Indicator shown after the generated password lands in the clipboard.
    pub fn gen_status(&self) -> Option<HtmlElement> {
        self.by_id("genStatus")
    }

    /// Password input on the user-creation form.
    pub fn password_input(&self) -> Option<HtmlInputElement> {
        self.by_selector("input[name=\"password\"]")
    }

    /// Control that flips the login password field between hidden and plain.
    pub fn toggle_control(&self) -> Option<HtmlElement> {
        self.by_id("togglePassword")
    }

    /// Login password field, also monitored for Caps Lock.
    pub fn password_field(&self) -> Option<HtmlInputElement> {
        self.by_id("passwordField")
    }
}
