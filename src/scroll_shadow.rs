use log::debug;
use wasm_bindgen::JsValue;
use web_sys::{HtmlElement, Window};

use crate::config::{NAVBAR_SHADOW, SCROLL_SHADOW_THRESHOLD_PX};
use crate::dom;

/// Remembers which shadow level was last written so scroll events that stay
/// on the same side of the threshold don't touch the style.
#[derive(Debug, Default)]
pub struct ShadowTracker {
    applied: Option<bool>,
}

impl ShadowTracker {
    /// Returns the level to apply, or `None` when it is already applied.
    pub fn update(&mut self, scroll_y: f64) -> Option<bool> {
        let raised = scroll_y > SCROLL_SHADOW_THRESHOLD_PX;
        if self.applied == Some(raised) {
            return None;
        }
        self.applied = Some(raised);
        Some(raised)
    }
}

pub fn attach(window: &Window, navbar: Option<HtmlElement>) -> Result<(), JsValue> {
    let Some(navbar) = navbar else {
        debug!("No navbar, skipping scroll shadow");
        return Ok(());
    };

    let mut tracker = ShadowTracker::default();
    let scroll_window = window.clone();
    dom::listen(window, "scroll", move |_| {
        let Ok(scroll_y) = scroll_window.scroll_y() else {
            return;
        };
        if let Some(raised) = tracker.update(scroll_y) {
            let shadow = if raised { NAVBAR_SHADOW } else { "none" };
            dom::set_style(&navbar, "box-shadow", shadow);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_event_always_applies() {
        let mut tracker = ShadowTracker::default();
        assert_eq!(tracker.update(0.0), Some(false));

        let mut tracker = ShadowTracker::default();
        assert_eq!(tracker.update(450.0), Some(true));
    }

    #[test]
    fn applies_only_when_crossing_the_threshold() {
        let mut tracker = ShadowTracker::default();
        tracker.update(10.0);
        assert_eq!(tracker.update(60.0), None);
        assert_eq!(tracker.update(100.0), None);
        assert_eq!(tracker.update(100.5), Some(true));
        assert_eq!(tracker.update(900.0), None);
        assert_eq!(tracker.update(99.0), Some(false));
    }
}
