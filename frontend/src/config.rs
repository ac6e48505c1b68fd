use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(debug_assertions)]
pub fn asset_base() -> &'static str {
    "/assets"  // Served by trunk from frontend/assets
}

#[cfg(not(debug_assertions))]
pub fn asset_base() -> &'static str {
    "https://static.aurumvault.example/assets"
}

pub fn asset_url(file: &str) -> String {
    format!("{}/{}", asset_base(), file.trim_start_matches('/'))
}

// Viewport observation
pub const DEFAULT_THRESHOLD: f64 = 0.1;
pub const LAZY_SECTION_ROOT_MARGIN: &str = "200px";
pub const LAZY_IMAGE_ROOT_MARGIN: &str = "50px";
pub const ANIMATED_SECTION_ROOT_MARGIN: &str = "50px";
pub const LAZY_SECTION_MIN_HEIGHT: &str = "200px";

// Reveal animation
pub const REVEAL_DURATION_MS: u32 = 800;
pub const REVEAL_EASING: &str = "cubic-bezier(0.22, 1, 0.36, 1)";
pub const REVEAL_OFFSET_PX: f64 = 24.0;
pub const STAGGER_STEP_MS: u32 = 120;
pub const STAGGER_MAX_MS: u32 = 600;

/// Extra time past the requested delay before the guard timer reveals
/// content an idle callback never delivered.
pub const IDLE_GUARD_GRACE_MS: u32 = 500;

// Scroll progress
pub const PARALLAX_TRAVEL_PCT: f64 = 30.0;
pub const DEFAULT_PARALLAX_SPEED: f64 = 0.5;

// Sand particles
pub const SAND_PARTICLE_COUNT: usize = 350;
pub const SAND_SPAWN_BAND: f64 = 0.3;
pub const SAND_COLOR: (u8, u8, u8) = (212, 175, 55);

// Chrome
pub const NAV_SCROLL_THRESHOLD_PX: i32 = 80;
pub const PRELOADER_MIN_MS: u32 = 1200;
pub const PRELOADER_FADE_MS: u32 = 600;

// Storefront
pub const CONTACT_EMAIL: &str = "desk@aurumvault.example";
pub const USD_TO_EUR: f64 = 0.92;
