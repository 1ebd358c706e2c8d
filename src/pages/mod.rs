pub mod admin;
pub mod login;
pub mod student_dashboard;
pub mod teacher_dashboard;

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::dom_utils::{append_text, el};

/// Title bar shared by the student and teacher dashboards.
pub(crate) fn page_header(document: &Document, title: &str) -> Result<Element, JsValue> {
    let header = el(document, "header", "page-header")?;
    append_text(&header, document, "h1", "page-title", title)?;
    let logout = append_text(&header, document, "button", "btn btn-secondary", "Sign out")?;
    logout.set_attribute("type", "button")?;
    logout.set_attribute("data-action", "logout")?;
    Ok(header)
}
