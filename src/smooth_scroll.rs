use log::debug;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::config::SCROLL_MARGIN_PX;
use crate::dom;
use crate::menu::Menu;

const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

/// Id an in-page link points at. A bare `#` points nowhere.
pub fn anchor_target(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some("") | None => None,
        Some(id) => Some(id),
    }
}

/// Page offset that leaves the target just below the fixed navbar.
pub fn scroll_destination(target_top: f64, page_y_offset: f64, navbar_height: f64) -> f64 {
    target_top + page_y_offset - navbar_height - SCROLL_MARGIN_PX
}

pub fn attach(
    window: &Window,
    document: &Document,
    navbar: Option<HtmlElement>,
    menu: Menu,
) -> Result<(), JsValue> {
    let anchors: Vec<Element> = dom::query_all(document, ANCHOR_SELECTOR)?;
    debug!("Smooth scroll on {} anchors", anchors.len());

    for anchor in anchors {
        let window = window.clone();
        let document = document.clone();
        let navbar = navbar.clone();
        let menu = menu.clone();
        let link = anchor.clone();

        dom::listen(&anchor, "click", move |event| {
            event.prevent_default();
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            let Some(id) = anchor_target(&href) else {
                return;
            };
            let Some(target) = document.get_element_by_id(id) else {
                debug!("Anchor target #{} not found", id);
                return;
            };

            let navbar_height = navbar.as_ref().map_or(0, |nav| nav.offset_height());
            let top = scroll_destination(
                target.get_bounding_client_rect().top(),
                window.page_y_offset().unwrap_or(0.0),
                f64::from(navbar_height),
            );

            let options = ScrollToOptions::new();
            options.set_top(top);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);

            menu.close();
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_hash_is_ignored() {
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target(""), None);
        assert_eq!(anchor_target("/pricing"), None);
    }

    #[test]
    fn hash_link_yields_id() {
        assert_eq!(anchor_target("#pricing"), Some("pricing"));
        assert_eq!(anchor_target("#how-it-works"), Some("how-it-works"));
    }

    #[test]
    fn destination_clears_navbar_and_margin() {
        assert_eq!(scroll_destination(400.0, 1200.0, 80.0), 1500.0);
        assert_eq!(scroll_destination(-300.0, 1000.0, 0.0), 680.0);
    }
}
