use gloo_timers::callback::Timeout;
use log::{debug, info};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

use crate::config::{PRICE_SWAP_DELAY_MS, PRICE_TRANSITION};
use crate::dom;

const SWITCH_SELECTOR: &str = ".toggle-switch";
const SLIDER_SELECTOR: &str = ".toggle-slider";
const LABEL_SELECTOR: &str = ".toggle-label";
const PRICE_SELECTOR: &str = ".price-amount";

pub const MONTHLY_PRICES: [&str; 3] = ["9", "19", "Na mieru"];
pub const YEARLY_PRICES: [&str; 3] = ["7", "15", "Na mieru"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PricingPeriod {
    #[default]
    Monthly,
    Yearly,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PricingToggle {
    period: PricingPeriod,
}

impl PricingToggle {
    pub fn period(&self) -> PricingPeriod {
        self.period
    }

    pub fn toggle(&mut self) -> PricingPeriod {
        self.period = match self.period {
            PricingPeriod::Monthly => PricingPeriod::Yearly,
            PricingPeriod::Yearly => PricingPeriod::Monthly,
        };
        self.period
    }

    pub fn slider_left(&self) -> &'static str {
        match self.period {
            PricingPeriod::Monthly => "3px",
            PricingPeriod::Yearly => "27px",
        }
    }

    /// Label 0 reads "monthly", label 1 reads "yearly".
    pub fn label_is_active(&self, index: usize) -> bool {
        matches!(
            (index, self.period),
            (0, PricingPeriod::Monthly) | (1, PricingPeriod::Yearly)
        )
    }

    pub fn price(&self, plan: usize) -> Option<&'static str> {
        let prices = match self.period {
            PricingPeriod::Monthly => &MONTHLY_PRICES,
            PricingPeriod::Yearly => &YEARLY_PRICES,
        };
        prices.get(plan).copied()
    }

    pub fn prices(&self) -> Vec<&'static str> {
        (0..MONTHLY_PRICES.len()).filter_map(|plan| self.price(plan)).collect()
    }
}

pub fn attach(document: &Document) -> Result<(), JsValue> {
    let Some(switch) = dom::query::<HtmlElement>(document, SWITCH_SELECTOR) else {
        debug!("No pricing toggle on this page");
        return Ok(());
    };
    let slider = switch
        .query_selector(SLIDER_SELECTOR)?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    let labels: Vec<Element> = dom::query_all(document, LABEL_SELECTOR)?;
    let amounts: Vec<HtmlElement> = dom::query_all(document, PRICE_SELECTOR)?;

    for amount in amounts.iter() {
        dom::set_style(amount, "transition", PRICE_TRANSITION);
    }

    let mut toggle = PricingToggle::default();
    dom::listen(&switch, "click", move |_| {
        let period = toggle.toggle();
        info!("Pricing period switched to {:?}", period);

        if let Some(slider) = &slider {
            dom::set_style(slider, "left", toggle.slider_left());
        }
        for (index, label) in labels.iter().enumerate() {
            dom::set_class(label, "active", toggle.label_is_active(index));
        }
        for (plan, amount) in amounts.iter().enumerate() {
            dom::set_style(amount, "opacity", "0");
            dom::set_style(amount, "transform", "translateY(-10px)");

            let amount = amount.clone();
            Timeout::new(PRICE_SWAP_DELAY_MS, move || {
                if let Some(price) = toggle.price(plan) {
                    amount.set_text_content(Some(price));
                }
                dom::set_style(&amount, "opacity", "1");
                dom::set_style(&amount, "transform", "translateY(0)");
            })
            .forget();
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_monthly() {
        let toggle = PricingToggle::default();
        assert_eq!(toggle.period(), PricingPeriod::Monthly);
        assert_eq!(toggle.prices(), vec!["9", "19", "Na mieru"]);
        assert_eq!(toggle.slider_left(), "3px");
    }

    #[test]
    fn click_cycle_swaps_prices_and_back() {
        let mut toggle = PricingToggle::default();

        assert_eq!(toggle.toggle(), PricingPeriod::Yearly);
        assert_eq!(toggle.prices(), vec!["7", "15", "Na mieru"]);
        assert_eq!(toggle.slider_left(), "27px");

        assert_eq!(toggle.toggle(), PricingPeriod::Monthly);
        assert_eq!(toggle.prices(), MONTHLY_PRICES.to_vec());
    }

    #[test]
    fn exactly_one_label_is_active() {
        let mut toggle = PricingToggle::default();
        assert!(toggle.label_is_active(0));
        assert!(!toggle.label_is_active(1));

        toggle.toggle();
        assert!(!toggle.label_is_active(0));
        assert!(toggle.label_is_active(1));
        assert!(!toggle.label_is_active(2));
    }

    #[test]
    fn unknown_plan_has_no_price() {
        assert_eq!(PricingToggle::default().price(3), None);
    }
}
