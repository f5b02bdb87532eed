// TMDB-style image size path segments. Cards use the downscaled variant,
// the detail overlay the full one.
pub const IMAGE_FULL_SIZE: &str = "original";
pub const IMAGE_CARD_SIZE: &str = "w500";

/// Vertical offset (px) past which the navbar turns solid.
pub const NAVBAR_SOLID_THRESHOLD: f64 = 50.0;

pub const SCROLL_THROTTLE_MS: f64 = 100.0;
pub const RESIZE_THROTTLE_MS: f64 = 250.0;
pub const CLICK_GUARD_MS: f64 = 300.0;

/// Fraction of the visible strip width moved per arrow press.
pub const CAROUSEL_STEP_RATIO: f64 = 0.8;
/// Slack (px) when deciding the strip is scrolled to its end.
pub const CAROUSEL_END_TOLERANCE: f64 = 5.0;

pub const THEME_STORAGE_KEY: &str = "reelview-theme";
pub const LIGHT_THEME_CLASS: &str = "light-theme";

pub const SUBSCRIBE_NOTICE_MS: u32 = 5_000;

pub mod fallback {
    pub const YEAR: &str = "2024";
    pub const RATING: &str = "U/A 13+";
    pub const DURATION: &str = "1 Season";
    pub const SYNOPSIS: &str = "No description available.";
    pub const CAST: &str = "Not available";
    pub const DIRECTOR: &str = "Not available";
}
