//! Labelled form controls with inline error text.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlInputElement};

use crate::constants::{CSS_FIELD_ERROR, CSS_FORM_ROW, CSS_INPUT_INVALID, CSS_SPINNER};
use crate::dom_utils::{append, append_text, class_with, el};

/// Label, control and (when present) the error line underneath.
fn row(document: &Document, id: &str, label: &str) -> Result<Element, JsValue> {
    let row = el(document, "div", CSS_FORM_ROW)?;
    let label_el = append_text(&row, document, "label", "form-label", label)?;
    label_el.set_attribute("for", id)?;
    Ok(row)
}

fn error_line(row: &Element, document: &Document, id: &str, error: Option<&str>) -> Result<(), JsValue> {
    if let Some(message) = error {
        let line = append_text(row, document, "p", CSS_FIELD_ERROR, message)?;
        line.set_id(&format!("{}-error", id));
        line.set_attribute("role", "alert")?;
    }
    Ok(())
}

fn input(
    document: &Document,
    id: &str,
    input_type: &str,
    value: &str,
    error: Option<&str>,
) -> Result<HtmlInputElement, JsValue> {
    let input: HtmlInputElement = el(document, "input", &class_with("form-input", CSS_INPUT_INVALID, error.is_some()))?
        .dyn_into()?;
    input.set_id(id);
    input.set_name(id);
    input.set_type(input_type);
    input.set_value(value);
    if error.is_some() {
        input.set_attribute("aria-invalid", "true")?;
        input.set_attribute("aria-describedby", &format!("{}-error", id))?;
    }
    Ok(input)
}

pub fn text_field(
    document: &Document,
    id: &str,
    label: &str,
    input_type: &str,
    value: &str,
    error: Option<&str>,
) -> Result<Element, JsValue> {
    let row = row(document, id, label)?;
    let control = input(document, id, input_type, value, error)?;
    row.append_child(&control)?;
    error_line(&row, document, id, error)?;
    Ok(row)
}

/// Password input with a show/hide button carrying `toggle_action`.
pub fn password_field(
    document: &Document,
    id: &str,
    label: &str,
    value: &str,
    visible: bool,
    toggle_action: &str,
    error: Option<&str>,
) -> Result<Element, JsValue> {
    let row = row(document, id, label)?;
    let wrap = append(&row, document, "div", "password-wrap")?;
    let input_type = if visible { "text" } else { "password" };
    let control = input(document, id, input_type, value, error)?;
    wrap.append_child(&control)?;

    let toggle = append_text(
        &wrap,
        document,
        "button",
        "password-toggle",
        if visible { "Hide" } else { "Show" },
    )?;
    toggle.set_attribute("type", "button")?;
    toggle.set_attribute("data-action", toggle_action)?;

    error_line(&row, document, id, error)?;
    Ok(row)
}

/// `<select>` whose first option is an empty placeholder.
pub fn select_field(
    document: &Document,
    id: &str,
    label: &str,
    placeholder: &str,
    options: &[(String, String)],
    selected: &str,
    error: Option<&str>,
) -> Result<Element, JsValue> {
    let row = row(document, id, label)?;
    let select = append(&row, document, "select", &class_with("form-input", CSS_INPUT_INVALID, error.is_some()))?;
    select.set_id(id);
    select.set_attribute("name", id)?;

    let blank = append_text(&select, document, "option", "", placeholder)?;
    blank.set_attribute("value", "")?;
    if selected.is_empty() {
        blank.set_attribute("selected", "")?;
    }
    for (value, text) in options {
        let option = append_text(&select, document, "option", "", text)?;
        option.set_attribute("value", value)?;
        if value == selected {
            option.set_attribute("selected", "")?;
        }
    }

    error_line(&row, document, id, error)?;
    Ok(row)
}

pub fn checkbox_field(
    document: &Document,
    id: &str,
    label: &str,
    checked: bool,
    error: Option<&str>,
) -> Result<Element, JsValue> {
    let row = el(document, "div", &format!("{} checkbox-row", CSS_FORM_ROW))?;
    let checkbox = input(document, id, "checkbox", "", error)?;
    checkbox.set_checked(checked);
    row.append_child(&checkbox)?;
    let label_el = append_text(&row, document, "label", "form-label", label)?;
    label_el.set_attribute("for", id)?;
    error_line(&row, document, id, error)?;
    Ok(row)
}

/// Submit button; while `busy` it is disabled and shows a spinner.
pub fn submit_button(document: &Document, label: &str, busy_label: &str, busy: bool) -> Result<Element, JsValue> {
    let button = el(document, "button", "btn btn-primary")?;
    button.set_attribute("type", "submit")?;
    if busy {
        button.set_attribute("disabled", "")?;
        button.set_attribute("aria-busy", "true")?;
        append(&button, document, "span", CSS_SPINNER)?;
        append_text(&button, document, "span", "", busy_label)?;
    } else {
        button.set_text_content(Some(label));
    }
    Ok(button)
}

/// Disable every input, select and button under `root`.
pub fn disable_controls(root: &Element) -> Result<(), JsValue> {
    for tag in ["input", "select", "button"] {
        let controls = root.get_elements_by_tag_name(tag);
        for i in 0..controls.length() {
            if let Some(control) = controls.item(i) {
                control.set_attribute("disabled", "")?;
            }
        }
    }
    Ok(())
}
