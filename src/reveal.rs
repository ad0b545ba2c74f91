use log::debug;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, HtmlElement};

use crate::config::{
    REVEAL_OFFSET, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD, REVEAL_TRANSITION, STAGGER_STEP_MS,
};
use crate::dom;
use crate::observer::OneShotObserver;

const CARD_SELECTOR: &str = ".feature-card, .step-card, .testimonial-card, .pricing-card";
const GRID_SELECTOR: &str = ".features-grid, .testimonials-grid, .pricing-grid";
const GRID_ITEM_SELECTOR: &str = ".feature-card, .testimonial-card, .pricing-card";
const VISIBLE_CLASS: &str = "fade-in-visible";

pub const REVEAL_STYLE: &str = "
    .fade-in-visible {
        opacity: 1 !important;
        transform: translateY(0) !important;
    }
";

pub fn stagger_delay(index: usize) -> String {
    format!("{}ms", index as u64 * u64::from(STAGGER_STEP_MS))
}

pub fn attach(document: &Document) -> Result<(), JsValue> {
    let observer = OneShotObserver::new(REVEAL_THRESHOLD, Some(REVEAL_ROOT_MARGIN), |card| {
        dom::set_class(&card, VISIBLE_CLASS, true);
    })?;

    let cards: Vec<HtmlElement> = dom::query_all(document, CARD_SELECTOR)?;
    debug!("Fade-in on {} cards", cards.len());
    for card in &cards {
        dom::set_style(card, "opacity", "0");
        dom::set_style(card, "transform", REVEAL_OFFSET);
        dom::set_style(card, "transition", REVEAL_TRANSITION);
        observer.observe(card);
    }

    inject_visible_style(document)?;

    let grids: Vec<Element> = dom::query_all(document, GRID_SELECTOR)?;
    for grid in &grids {
        let items: Vec<HtmlElement> = dom::query_all_in(grid, GRID_ITEM_SELECTOR)?;
        for (index, item) in items.iter().enumerate() {
            dom::set_style(item, "transition-delay", &stagger_delay(index));
        }
    }
    Ok(())
}

fn inject_visible_style(document: &Document) -> Result<(), JsValue> {
    let Some(head) = document.head() else {
        return Ok(());
    };
    let style = document.create_element("style")?;
    style.set_text_content(Some(REVEAL_STYLE));
    head.append_child(&style)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_grows_with_grid_position() {
        assert_eq!(stagger_delay(0), "0ms");
        assert_eq!(stagger_delay(1), "100ms");
        assert_eq!(stagger_delay(5), "500ms");
    }

    #[test]
    fn visible_state_is_fully_opaque_and_unshifted() {
        assert!(REVEAL_STYLE.contains(".fade-in-visible"));
        assert!(REVEAL_STYLE.contains("opacity: 1 !important"));
        assert!(REVEAL_STYLE.contains("translateY(0) !important"));
    }
}
