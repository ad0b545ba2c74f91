use log::{info, warn};
use wasm_bindgen::JsValue;
use web_sys::HtmlElement;

pub mod chart;
pub mod config;
pub mod counter;
mod dom;
pub mod form;
pub mod menu;
pub mod observer;
pub mod pricing;
pub mod reveal;
pub mod scroll_shadow;
pub mod smooth_scroll;

pub use counter::animate_counter;
pub use form::{handle_form_submit, FormFields};

const NAVBAR_SELECTOR: &str = ".navbar";

/// Attaches every landing page behavior to the current document.
///
/// Each behavior is independent: a missing hook or a failed attach is logged
/// and the rest still run.
pub fn start() {
    let Some(window) = web_sys::window() else {
        warn!("No window, landing page behaviors not attached");
        return;
    };
    let Some(document) = window.document() else {
        warn!("No document, landing page behaviors not attached");
        return;
    };

    let menu = menu::Menu::from_document(&document);
    let navbar = dom::query::<HtmlElement>(&document, NAVBAR_SELECTOR);

    report("menu toggle", menu.attach());
    report("scroll shadow", scroll_shadow::attach(&window, navbar.clone()));
    report("pricing toggle", pricing::attach(&document));
    report(
        "smooth scroll",
        smooth_scroll::attach(&window, &document, navbar, menu),
    );
    report("fade-in", reveal::attach(&document));
    report("stat counters", counter::attach_stats(&document));
    report("chart", chart::attach(&window, &document));

    info!("Worktune.ai landing page initialized");
}

fn report(behavior: &str, result: Result<(), JsValue>) {
    if let Err(err) = result {
        warn!("Could not attach {}: {}", behavior, dom::js_error_message(&err));
    }
}
