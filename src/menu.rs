use std::cell::Cell;
use std::rc::Rc;

use log::debug;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::dom;

const BUTTON_SELECTOR: &str = ".mobile-menu-btn";
const LINKS_SELECTOR: &str = ".nav-links";
const ACTIONS_SELECTOR: &str = ".nav-actions";
const BUTTON_ACTIVE_CLASS: &str = "active";
const PANEL_OPEN_CLASS: &str = "mobile-open";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    /// State the markup ships with: open iff the button is already active.
    /// A page without a button starts closed.
    pub fn from_markup(button_active: Option<bool>) -> Self {
        Self {
            open: button_active.unwrap_or(false),
        }
    }

    pub fn toggle(self) -> Self {
        Self { open: !self.open }
    }

    pub fn close(self) -> Self {
        Self { open: false }
    }
}

/// The mobile menu button and the two panels it reveals. Any of them may be
/// missing from the page.
///
/// Clones share the same open flag, so smooth scrolling can close the menu
/// the button opened.
#[derive(Clone)]
pub struct Menu {
    button: Option<Element>,
    links: Option<Element>,
    actions: Option<Element>,
    state: Rc<Cell<MenuState>>,
}

impl Menu {
    pub fn from_document(document: &Document) -> Self {
        let button = dom::query::<Element>(document, BUTTON_SELECTOR);
        let active = button
            .as_ref()
            .map(|button| button.class_list().contains(BUTTON_ACTIVE_CLASS));
        Self {
            button,
            links: dom::query(document, LINKS_SELECTOR),
            actions: dom::query(document, ACTIONS_SELECTOR),
            state: Rc::new(Cell::new(MenuState::from_markup(active))),
        }
    }

    pub fn attach(&self) -> Result<(), JsValue> {
        let Some(button) = &self.button else {
            debug!("No mobile menu button on this page");
            return Ok(());
        };
        let menu = self.clone();
        dom::listen(button, "click", move |_| menu.toggle())
    }

    pub fn toggle(&self) {
        let next = self.state.get().toggle();
        debug!("Mobile menu open: {}", next.open);
        self.apply(next);
    }

    pub fn close(&self) {
        self.apply(self.state.get().close());
    }

    fn apply(&self, state: MenuState) {
        self.state.set(state);
        if let Some(button) = &self.button {
            dom::set_class(button, BUTTON_ACTIVE_CLASS, state.open);
        }
        for panel in self.links.iter().chain(self.actions.iter()) {
            dom::set_class(panel, PANEL_OPEN_CLASS, state.open);
        }
    }
}
