use log::Level;

pub const BRAND_NAME: &str = "WebDevMastery";
pub const COPYRIGHT_YEAR: u16 = 2024;

/// Vertical offset (px) past which the navigation bar switches to its
/// translucent variant. Strictly greater than: 20 itself is not scrolled.
pub const SCROLL_THRESHOLD_PX: f64 = 20.0;

pub const FEATURE_STAGGER_MS: u32 = 100;
pub const TESTIMONIAL_STAGGER_MS: u32 = 200;
pub const FAQ_STAGGER_MS: u32 = 100;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
