// src/views.rs
//
// Render the active page from application state.  Protected pages only
// render once the guard allows them; until then a placeholder is shown.
//
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::auth::{evaluate, GuardDecision};
use crate::constants::{CSS_PAGE, CSS_PLACEHOLDER, ID_APP_ROOT};
use crate::dom_utils::{self, append, append_text, el};
use crate::pages;
use crate::router::Route;
use crate::state::AppState;

pub fn render(state: &AppState) -> Result<(), JsValue> {
    let document = dom_utils::document()?;
    let root = app_root(&document)?;
    document.set_title(&format!("{} | School Portal", state.route.title()));

    let page = match evaluate(state.auth.session(), state.route.required_role()) {
        GuardDecision::Pending => placeholder(&document, "Checking your session...")?,
        GuardDecision::Redirect(_) => placeholder(&document, "Redirecting to sign in...")?,
        GuardDecision::Allow => render_page(&document, state)?,
    };
    dom_utils::replace_children(&root, &page)
}

fn render_page(document: &Document, state: &AppState) -> Result<Element, JsValue> {
    match state.route {
        Route::Login => pages::login::render(document, state),
        Route::Home => pages::student_dashboard::render(document, state),
        Route::Dashboard => pages::teacher_dashboard::render(document),
        Route::Admin | Route::Subjects | Route::Assessment | Route::Parent | Route::Calendar => {
            pages::admin::render(document, state)
        }
        Route::NotFound => not_found(document),
    }
}

/// `#app`, created under `<body>` when the host page does not provide one.
pub(crate) fn app_root(document: &Document) -> Result<Element, JsValue> {
    if let Some(root) = document.get_element_by_id(ID_APP_ROOT) {
        return Ok(root);
    }
    let root = el(document, "div", "")?;
    root.set_id(ID_APP_ROOT);
    document
        .body()
        .ok_or_else(|| JsValue::from_str("<body> element missing"))?
        .append_child(&root)?;
    Ok(root)
}

fn placeholder(document: &Document, text: &str) -> Result<Element, JsValue> {
    let page = el(document, "main", CSS_PAGE)?;
    let body = append(&page, document, "div", CSS_PLACEHOLDER)?;
    body.set_attribute("aria-busy", "true")?;
    append(&body, document, "span", "spinner spinner-dark")?;
    append_text(&body, document, "span", "", text)?;
    Ok(page)
}

fn not_found(document: &Document) -> Result<Element, JsValue> {
    let page = el(document, "main", &format!("{} not-found", CSS_PAGE))?;
    append_text(&page, document, "h1", "page-title", "Page not found")?;
    append_text(
        &page,
        document,
        "p",
        CSS_PLACEHOLDER,
        "The page you are looking for does not exist.",
    )?;
    let link = append_text(&page, document, "a", "btn btn-primary", "Go to sign in")?;
    link.set_attribute("href", Route::Login.path())?;
    link.set_attribute("data-route", Route::Login.path())?;
    Ok(page)
}
