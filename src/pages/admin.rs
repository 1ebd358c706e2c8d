//! Admin area: sidebar plus one content panel per admin route.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::components::cards::section;
use crate::components::sidebar;
use crate::constants::{CSS_CARD, CSS_PAGE, CSS_PLACEHOLDER};
use crate::dom_utils::{append, append_text, class_with, el};
use crate::mock_data;
use crate::router::Route;
use crate::state::AppState;

pub fn render(document: &Document, state: &AppState) -> Result<Element, JsValue> {
    let layout = el(
        document,
        "div",
        &class_with("admin-layout", "sidebar-collapsed", state.sidebar_collapsed),
    )?;
    let nav = sidebar::render(document, state.route, state.sidebar_collapsed)?;
    layout.append_child(&nav)?;

    let content = append(&layout, document, "main", &format!("{} admin-content", CSS_PAGE))?;
    append_text(&content, document, "h1", "page-title", state.route.title())?;
    if let Some(school) = state.auth.school_id() {
        append_text(&content, document, "p", "page-subtitle", &format!("School {}", school))?;
    }

    match state.route {
        Route::Admin => overview(document, &content)?,
        other => {
            let (card, body) = section(document, other.title())?;
            append_text(&body, document, "p", CSS_PLACEHOLDER, panel_blurb(other))?;
            content.append_child(&card)?;
        }
    }

    Ok(layout)
}

fn overview(document: &Document, content: &Element) -> Result<(), JsValue> {
    let grid = append(content, document, "div", "summary-cards")?;
    for stat in mock_data::school_overview() {
        let card = append(&grid, document, "div", &format!("{} stat-card", CSS_CARD))?;
        append_text(&card, document, "div", "stat-value", stat.value)?;
        append_text(&card, document, "div", "stat-label", stat.label)?;
        append_text(&card, document, "div", "stat-note", stat.note)?;
    }
    Ok(())
}

fn panel_blurb(route: Route) -> &'static str {
    match route {
        Route::Subjects => "Manage the subjects offered at your school and assign teachers.",
        Route::Assessment => "Review assignments and assessments across all classes.",
        Route::Parent => "Share progress reports and messages with parents.",
        Route::Calendar => "Plan terms, holidays and school events.",
        _ => "",
    }
}
