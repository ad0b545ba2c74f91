use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while developing against the local page
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

// Navbar
pub const SCROLL_SHADOW_THRESHOLD_PX: f64 = 100.0;
pub const NAVBAR_SHADOW: &str = "0 4px 20px rgba(0, 0, 0, 0.08)";
pub const SCROLL_MARGIN_PX: f64 = 20.0;

// Pricing
/// Lets the price fade-out transition finish before the text is swapped.
pub const PRICE_SWAP_DELAY_MS: u32 = 150;
pub const PRICE_TRANSITION: &str = "all 0.3s ease";

// Fade-in
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const REVEAL_OFFSET: &str = "translateY(30px)";
pub const REVEAL_TRANSITION: &str = "opacity 0.6s ease, transform 0.6s ease";
pub const STAGGER_STEP_MS: u32 = 100;

// Counters
pub const STAT_THRESHOLD: f64 = 0.5;
pub const STAT_COUNTER_DURATION_MS: f64 = 2000.0;
pub const FRAME_ESTIMATE_MS: f64 = 16.0;
pub const DEFAULT_COUNTER_DURATION_MS: u32 = 2000;

// Chart
pub const CHART_START_DELAY_MS: u32 = 500;
pub const BAR_BASE_DELAY_MS: u32 = 500;
pub const BAR_STAGGER_MS: u32 = 100;
pub const BAR_TRANSITION: &str = "height 0.8s ease";

// Forms
/// Stands in for the network round trip until a real endpoint exists.
pub const SUBMIT_PLACEHOLDER_DELAY_MS: u32 = 1500;
pub const SUBMITTING_LABEL: &str = "Odosielam...";
