use gloo_timers::callback::Timeout;
use log::{debug, warn};
use wasm_bindgen::JsValue;
use web_sys::{Document, HtmlElement, Window};

use crate::config::{BAR_BASE_DELAY_MS, BAR_STAGGER_MS, BAR_TRANSITION, CHART_START_DELAY_MS};
use crate::dom;

const BAR_SELECTOR: &str = ".chart-bars .bar";
const COLLAPSED_HEIGHT: &str = "0%";

pub fn bar_delay_ms(index: usize) -> u32 {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    BAR_BASE_DELAY_MS.saturating_add(index.saturating_mul(BAR_STAGGER_MS))
}

/// When a bar grows back and to what height.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarPlan {
    pub target_height: String,
    pub delay_ms: u32,
}

impl BarPlan {
    pub fn new(index: usize, target_height: String) -> Self {
        Self {
            target_height,
            delay_ms: bar_delay_ms(index),
        }
    }
}

/// The wasm module can boot after `load` already fired, in which case no
/// listener would ever run.
pub fn waits_for_load(state: &str) -> bool {
    state != "complete"
}

/// Grows the dashboard bars left to right once the page and its assets loaded.
pub fn attach(window: &Window, document: &Document) -> Result<(), JsValue> {
    if !waits_for_load(&document.ready_state()) {
        debug!("Page already loaded, scheduling chart now");
        schedule_bars();
        return Ok(());
    }
    dom::listen(window, "load", |_| schedule_bars())
}

fn schedule_bars() {
    Timeout::new(CHART_START_DELAY_MS, || {
        if let Err(err) = animate_bars() {
            warn!("Chart animation failed: {}", dom::js_error_message(&err));
        }
    })
    .forget();
}

fn animate_bars() -> Result<(), JsValue> {
    let document = dom::window()?
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let bars: Vec<HtmlElement> = dom::query_all(&document, BAR_SELECTOR)?;
    debug!("Animating {} chart bars", bars.len());

    for (index, bar) in bars.into_iter().enumerate() {
        let plan = BarPlan::new(index, bar.style().get_property_value("height")?);
        dom::set_style(&bar, "height", COLLAPSED_HEIGHT);
        dom::set_style(&bar, "transition", BAR_TRANSITION);

        Timeout::new(plan.delay_ms, move || {
            dom::set_style(&bar, "height", &plan.target_height);
        })
        .forget();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bars_grow_left_to_right() {
        assert_eq!(bar_delay_ms(0), 500);
        assert_eq!(bar_delay_ms(1), 600);
        assert_eq!(bar_delay_ms(6), 1100);
    }

    #[test]
    fn plan_restores_the_configured_height() {
        let heights = ["45%", "70%", "", "100%"];
        for (index, height) in heights.iter().enumerate() {
            let plan = BarPlan::new(index, height.to_string());
            assert_eq!(plan.target_height, *height);
            assert_ne!(plan.target_height, COLLAPSED_HEIGHT);
        }
    }

    #[test]
    fn waits_for_load_until_the_page_is_complete() {
        assert!(waits_for_load("loading"));
        assert!(waits_for_load("interactive"));
        assert!(!waits_for_load("complete"));
    }

    #[test]
    fn huge_index_saturates() {
        assert_eq!(bar_delay_ms(usize::MAX), u32::MAX);
    }
}
