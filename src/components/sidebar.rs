//! Admin navigation sidebar.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::constants::{CSS_NAV_ITEM, CSS_NAV_ITEM_ACTIVE, ID_ADMIN_SIDEBAR};
use crate::dom_utils::{append, append_text, class_with, el};
use crate::router::Route;

use super::cards::nav_button;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub route: Route,
    pub label: &'static str,
    pub active: bool,
}

const NAV_ROUTES: [Route; 5] = [
    Route::Admin,
    Route::Subjects,
    Route::Assessment,
    Route::Parent,
    Route::Calendar,
];

/// Sidebar entries with the one for `current` marked active.
pub fn nav_items(current: Route) -> Vec<NavItem> {
    NAV_ROUTES
        .iter()
        .map(|route| NavItem {
            route: *route,
            label: route.title(),
            active: *route == current,
        })
        .collect()
}

pub fn render(document: &Document, current: Route, collapsed: bool) -> Result<Element, JsValue> {
    let aside = el(document, "aside", &class_with("sidebar", "collapsed", collapsed))?;
    aside.set_id(ID_ADMIN_SIDEBAR);

    let header = append(&aside, document, "div", "sidebar-header")?;
    append_text(&header, document, "span", "sidebar-brand", "School Admin")?;
    let toggle = append_text(
        &header,
        document,
        "button",
        "sidebar-toggle",
        if collapsed { "»" } else { "«" },
    )?;
    toggle.set_attribute("type", "button")?;
    toggle.set_attribute("data-action", "toggle-sidebar")?;
    toggle.set_attribute(
        "aria-label",
        if collapsed { "Expand sidebar" } else { "Collapse sidebar" },
    )?;

    let nav = append(&aside, document, "nav", "sidebar-nav")?;
    for item in nav_items(current) {
        let class = if item.active {
            CSS_NAV_ITEM_ACTIVE
        } else {
            CSS_NAV_ITEM
        };
        let link = nav_button(document, item.label, item.route.path(), class)?;
        if item.active {
            link.set_attribute("aria-current", "page")?;
        }
        nav.append_child(&link)?;
    }

    let logout = append_text(&aside, document, "button", "sidebar-logout", "Sign out")?;
    logout.set_attribute("type", "button")?;
    logout.set_attribute("data-action", "logout")?;

    Ok(aside)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_admin_pages_in_order() {
        let paths: Vec<&str> = nav_items(Route::Admin)
            .iter()
            .map(|i| i.route.path())
            .collect();
        assert_eq!(
            paths,
            vec!["/admin", "/subjects", "/assessment", "/parent", "/calendar"]
        );
    }

    #[test]
    fn exactly_one_item_is_active() {
        let items = nav_items(Route::Parent);
        let active: Vec<_> = items.iter().filter(|i| i.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].label, "Parent Portal");
    }

    #[test]
    fn no_item_active_outside_admin_pages() {
        assert!(nav_items(Route::Login).iter().all(|i| !i.active));
    }
}
