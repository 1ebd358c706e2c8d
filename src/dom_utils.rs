//! dom_utils.rs – thin helper layer for repetitive DOM operations.
//!
//! Pages are rebuilt from state on every render, so most of the code that
//! touches the DOM boils down to "create an element with a class and maybe
//! some text".  These helpers keep that to one line per node.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::constants::{CSS_HIDDEN, CSS_VISIBLE};

pub fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document on window"))
}

/// `<tag class="…">`.  An empty class leaves the attribute off.
pub fn el(document: &Document, tag: &str, class: &str) -> Result<Element, JsValue> {
    let element = document.create_element(tag)?;
    if !class.is_empty() {
        element.set_class_name(class);
    }
    Ok(element)
}

/// Element whose only content is `text`.  Text is never parsed as HTML.
pub fn text_el(document: &Document, tag: &str, class: &str, text: &str) -> Result<Element, JsValue> {
    let element = el(document, tag, class)?;
    element.set_text_content(Some(text));
    Ok(element)
}

/// Create a child of `parent` and return it.
pub fn append(parent: &Element, document: &Document, tag: &str, class: &str) -> Result<Element, JsValue> {
    let child = el(document, tag, class)?;
    parent.append_child(&child)?;
    Ok(child)
}

pub fn append_text(
    parent: &Element,
    document: &Document,
    tag: &str,
    class: &str,
    text: &str,
) -> Result<Element, JsValue> {
    let child = text_el(document, tag, class, text)?;
    parent.append_child(&child)?;
    Ok(child)
}

/// Replace every child of `parent` with `child`.
pub fn replace_children(parent: &Element, child: &Element) -> Result<(), JsValue> {
    parent.set_inner_html("");
    parent.append_child(child)?;
    Ok(())
}

/// Remove the `hidden` class so the element becomes visible.
pub fn show(el: &Element) {
    let _ = el.class_list().remove_1(CSS_HIDDEN);
    let _ = el.class_list().add_1(CSS_VISIBLE);
}

/// Hide the element by toggling CSS classes.
pub fn hide(el: &Element) {
    let _ = el.class_list().remove_1(CSS_VISIBLE);
    let _ = el.class_list().add_1(CSS_HIDDEN);
}

pub fn set_visible(el: &Element, visible: bool) {
    if visible {
        show(el);
    } else {
        hide(el);
    }
}

/// `base` plus `modifier` when `on` is set.
pub fn class_with(base: &str, modifier: &str, on: bool) -> String {
    if on {
        format!("{} {}", base, modifier)
    } else {
        base.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_with_appends_modifier_only_when_on() {
        assert_eq!(class_with("nav-item", "active", true), "nav-item active");
        assert_eq!(class_with("nav-item", "active", false), "nav-item");
    }

    #[cfg(target_arch = "wasm32")]
    mod browser {
        use super::super::*;
        use wasm_bindgen_test::*;

        wasm_bindgen_test_configure!(run_in_browser);

        #[wasm_bindgen_test]
        fn text_is_not_parsed_as_html() {
            let document = document().unwrap();
            let node = text_el(&document, "p", "note", "<b>bold</b>").unwrap();
            assert_eq!(node.children().length(), 0);
            assert_eq!(node.text_content().unwrap(), "<b>bold</b>");
        }

        #[wasm_bindgen_test]
        fn show_and_hide_swap_classes() {
            let document = document().unwrap();
            let node = el(&document, "div", "").unwrap();
            hide(&node);
            assert!(node.class_list().contains(CSS_HIDDEN));
            show(&node);
            assert!(node.class_list().contains(CSS_VISIBLE));
            assert!(!node.class_list().contains(CSS_HIDDEN));
        }
    }
}
