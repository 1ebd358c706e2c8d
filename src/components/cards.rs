//! Small presentational building blocks shared by the dashboards.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::constants::CSS_CARD;
use crate::dom_utils::{append, append_text, el, text_el};

/// Card with a heading; returns `(card, body)` so callers fill the body.
pub fn section(document: &Document, title: &str) -> Result<(Element, Element), JsValue> {
    let card = el(document, "section", CSS_CARD)?;
    append_text(&card, document, "h2", "card-title", title)?;
    let body = append(&card, document, "div", "card-body")?;
    Ok((card, body))
}

/// Big number with a label underneath.
pub fn stat_card(document: &Document, label: &str, value: &str) -> Result<Element, JsValue> {
    let card = el(document, "div", &format!("{} stat-card", CSS_CARD))?;
    append_text(&card, document, "div", "stat-value", value)?;
    append_text(&card, document, "div", "stat-label", label)?;
    Ok(card)
}

/// Horizontal bar filled to `percent` (clamped to 100).
pub fn progress_bar(document: &Document, percent: u32) -> Result<Element, JsValue> {
    let track = el(document, "div", "progress")?;
    let fill = append(&track, document, "div", "progress-fill")?;
    fill.set_attribute("style", &format!("width: {}%;", percent.min(100)))?;
    track.set_attribute("role", "progressbar")?;
    track.set_attribute("aria-valuenow", &percent.min(100).to_string())?;
    Ok(track)
}

pub fn badge(document: &Document, text: &str, class: &str) -> Result<Element, JsValue> {
    text_el(document, "span", &format!("badge {}", class), text)
}

/// One enrolled subject.
pub fn subject_card(document: &Document, name: &str) -> Result<Element, JsValue> {
    let card = el(document, "div", &format!("{} subject-card", CSS_CARD))?;
    append_text(&card, document, "div", "subject-icon", &subject_initial(name))?;
    append_text(&card, document, "div", "subject-name", name)?;
    Ok(card)
}

/// Link-styled button; the click is routed by its `data-route`.
pub fn nav_button(document: &Document, label: &str, path: &str, class: &str) -> Result<Element, JsValue> {
    let link = text_el(document, "a", class, label)?;
    link.set_attribute("href", path)?;
    link.set_attribute("data-route", path)?;
    Ok(link)
}

fn subject_initial(name: &str) -> String {
    name.trim()
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| "?".to_string())
}
