use log::debug;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use crate::config::{
    DEFAULT_COUNTER_DURATION_MS, FRAME_ESTIMATE_MS, STAT_COUNTER_DURATION_MS, STAT_THRESHOLD,
};
use crate::dom;
use crate::observer::OneShotObserver;

const STAT_SELECTOR: &str = ".stat-number";

pub fn ease_out_cubic(progress: f64) -> f64 {
    1.0 - (1.0 - progress).powi(3)
}

/// Fraction of the animation elapsed, clamped to `0.0..=1.0`.
pub fn progress(elapsed_ms: f64, duration_ms: f64) -> f64 {
    if duration_ms <= 0.0 {
        return 1.0;
    }
    (elapsed_ms / duration_ms).clamp(0.0, 1.0)
}

/// A stat like `250+`: the digits it counts up to and whatever else it shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatValue {
    pub magnitude: u64,
    pub suffix: String,
}

impl StatValue {
    /// All digits form the magnitude, every other character the suffix.
    /// Text without digits, or too large to count, is not a stat.
    pub fn parse(text: &str) -> Option<Self> {
        let digits: String = text.chars().filter(char::is_ascii_digit).collect();
        let magnitude = digits.parse::<u64>().ok()?;
        let suffix = text.chars().filter(|c| !c.is_ascii_digit()).collect();
        Some(Self { magnitude, suffix })
    }

    pub fn initial_text(&self) -> String {
        format!("0{}", self.suffix)
    }

    pub fn frame_text(&self, progress: f64) -> String {
        if progress >= 1.0 {
            // Exact, even past the range an f64 holds without rounding.
            return format!("{}{}", self.magnitude, self.suffix);
        }
        let current = (ease_out_cubic(progress) * self.magnitude as f64).floor() as u64;
        format!("{}{}", current.min(self.magnitude), self.suffix)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterFrame {
    Running(u64),
    Done(u64),
}

/// Counts up by a fixed step per frame, sized from an estimated frame length.
#[derive(Debug, Clone)]
pub struct LinearCounter {
    target: u64,
    increment: f64,
    current: f64,
}

impl LinearCounter {
    pub fn new(target: u64, duration_ms: u32) -> Self {
        let frames = f64::from(duration_ms) / FRAME_ESTIMATE_MS;
        Self {
            target,
            increment: target as f64 / frames,
            current: 0.0,
        }
    }

    pub fn step(&mut self) -> CounterFrame {
        self.current += self.increment;
        if self.current < self.target as f64 {
            CounterFrame::Running(self.current.floor() as u64)
        } else {
            CounterFrame::Done(self.target)
        }
    }
}

/// Counts `element` up to `target` over roughly `duration_ms`.
#[wasm_bindgen(js_name = animateCounter)]
pub fn animate_counter(
    element: Element,
    target: u32,
    duration_ms: Option<u32>,
) -> Result<(), JsValue> {
    let duration_ms = duration_ms.unwrap_or(DEFAULT_COUNTER_DURATION_MS);
    let mut counter = LinearCounter::new(u64::from(target), duration_ms);
    dom::run_frames(move |_| match counter.step() {
        CounterFrame::Running(value) => {
            element.set_text_content(Some(&value.to_string()));
            true
        }
        CounterFrame::Done(value) => {
            element.set_text_content(Some(&value.to_string()));
            false
        }
    })
}

pub fn attach_stats(document: &Document) -> Result<(), JsValue> {
    let observer = OneShotObserver::new(STAT_THRESHOLD, None, |stat| {
        let text = stat.text_content().unwrap_or_default();
        let Some(value) = StatValue::parse(&text) else {
            debug!("Stat {:?} is not numeric, leaving it", text);
            return;
        };
        stat.set_text_content(Some(&value.initial_text()));
        count_up(stat, value);
    })?;

    let stats: Vec<Element> = dom::query_all(document, STAT_SELECTOR)?;
    for stat in &stats {
        observer.observe(stat);
    }
    Ok(())
}

fn count_up(stat: Element, value: StatValue) {
    let mut started = dom::now_ms();
    let result = dom::run_frames(move |timestamp| {
        let origin = *started.get_or_insert(timestamp);
        let fraction = progress(timestamp - origin, STAT_COUNTER_DURATION_MS);
        stat.set_text_content(Some(&value.frame_text(fraction)));
        fraction < 1.0
    });
    if let Err(err) = result {
        debug!("Stat counter not started: {}", dom::js_error_message(&err));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_digits_and_suffix() {
        let value = StatValue::parse("250+").unwrap();
        assert_eq!(value.magnitude, 250);
        assert_eq!(value.suffix, "+");

        let value = StatValue::parse("98%").unwrap();
        assert_eq!((value.magnitude, value.suffix.as_str()), (98, "%"));
    }

    #[test]
    fn text_without_digits_is_not_a_stat() {
        assert!(StatValue::parse("Unlimited").is_none());
        assert!(StatValue::parse("").is_none());
    }

    #[test]
    fn overflowing_digits_are_left_alone() {
        assert!(StatValue::parse("99999999999999999999999+").is_none());
    }

    #[test]
    fn starts_at_zero_with_suffix() {
        let value = StatValue::parse("500+").unwrap();
        assert_eq!(value.initial_text(), "0+");
        assert_eq!(value.frame_text(0.0), "0+");
    }

    #[test]
    fn final_frame_matches_original_text() {
        for original in ["250+", "98%", "12k", "3", "1500 users"] {
            let value = StatValue::parse(original).unwrap();
            assert_eq!(value.frame_text(1.0), original);
        }
    }

    #[test]
    fn final_frame_is_exact_for_huge_magnitudes() {
        let value = StatValue::parse("9007199254740993+").unwrap();
        assert_eq!(value.frame_text(1.0), "9007199254740993+");
        assert_eq!(value.frame_text(2.0), "9007199254740993+");

        let value = StatValue::parse(&u64::MAX.to_string()).unwrap();
        assert_eq!(value.frame_text(1.0), u64::MAX.to_string());
    }

    #[test]
    fn easing_is_monotonic_and_bounded() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        let mut last = 0.0;
        for step in 1..=100 {
            let eased = ease_out_cubic(f64::from(step) / 100.0);
            assert!(eased >= last);
            last = eased;
        }
        // Ease-out front-loads the motion.
        assert!(ease_out_cubic(0.5) > 0.5);
    }

    #[test]
    fn progress_uses_elapsed_time() {
        assert_eq!(progress(0.0, 2000.0), 0.0);
        assert_eq!(progress(1000.0, 2000.0), 0.5);
        assert_eq!(progress(2500.0, 2000.0), 1.0);
        assert_eq!(progress(-5.0, 2000.0), 0.0);
        assert_eq!(progress(10.0, 0.0), 1.0);
    }

    #[test]
    fn linear_counter_lands_exactly_on_target() {
        let mut counter = LinearCounter::new(100, 160);
        let mut frames = Vec::new();
        loop {
            match counter.step() {
                CounterFrame::Running(value) => {
                    assert!(value < 100);
                    frames.push(value);
                }
                CounterFrame::Done(value) => {
                    assert_eq!(value, 100);
                    break;
                }
            }
        }
        assert_eq!(frames, vec![10, 20, 30, 40, 50, 60, 70, 80, 90]);
    }

    #[test]
    fn linear_counter_with_zero_target_is_done_immediately() {
        let mut counter = LinearCounter::new(0, 2000);
        assert_eq!(counter.step(), CounterFrame::Done(0));
    }
}
