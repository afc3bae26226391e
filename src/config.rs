use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose choreography logs when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

// Layout
pub const DESKTOP_BREAKPOINT: f64 = 768.0;
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

// Smoothing, per frame
pub const SCROLL_LERP: f64 = 0.1;
pub const POINTER_LERP: f64 = 0.18;

// Horizontal showcase
pub const SHOWCASE_SCRUB_SECS: f64 = 1.2;
pub const SCRUB_SETTLE: f64 = 1e-4;
pub const SKEW_VELOCITY_DIVISOR: f64 = 300.0;
pub const MAX_SKEW_DEG: f64 = 8.0;
pub const SKEW_TWEEN_SECS: f64 = 0.2;
pub const DEFAULT_PARALLAX: f64 = 0.2;
pub const SLIDE_ENTRY_START: f64 = 0.5;
pub const SLIDE_ENTRY_END: f64 = 0.4;
pub const SLIDE_ENTRY_X_PERCENT: f64 = 10.0;
pub const COMPACT_SLIDE_START: f64 = 0.85;
pub const COMPACT_SLIDE_OFFSET_Y: f64 = 30.0;
pub const COMPACT_SLIDE_DURATION: f64 = 0.8;

// Reveals
pub const REVEAL_START: f64 = 0.8;
pub const REVEAL_LINE_START: f64 = 0.85;
pub const SCRUB_REVEAL_END: f64 = 0.5;
pub const REVEAL_OFFSET_Y: f64 = 40.0;
pub const REVEAL_DURATION: f64 = 1.0;
pub const REVEAL_LINE_STAGGER: f64 = 0.05;
pub const FOOTER_STAGGER: f64 = 0.08;
pub const TEXT_DURATION: f64 = 0.9;
pub const TEXT_STAGGER: f64 = 0.04;
pub const TEXT_OFFSET_PERCENT: f64 = 120.0;

// Hero
pub const HERO_WORD_DURATION: f64 = 1.1;
pub const HERO_WORD_STAGGER: f64 = 0.07;
pub const HERO_SUBTITLE_DURATION: f64 = 0.9;
pub const HERO_SUBTITLE_OVERLAP: f64 = 0.4;
pub const HERO_SCROLLED_OPACITY: f64 = 0.92;
pub const FLOATY_SECS: f64 = 6.0;
pub const FLOATY_STAGGER: f64 = 0.3;
pub const SCROLL_CUE_SECS: f64 = 1.0;
pub const HERO_SCENE_URL: &str = "https://prod.spline.design/Ujidb4bmigoHT4IV/scene.splinecode";

// Loading gate
pub const GATE_TIMEOUT_MS: u32 = 3_500;
pub const GATE_FADE_SECS: f64 = 0.6;
pub const PARTICLE_COUNT: usize = 80;
pub const PARTICLE_COUNT_REDUCED: usize = 20;
pub const LOADING_LETTER_DELAY: f64 = 0.06;

// Cursor and hover cards
pub const CURSOR_SIZE: f64 = 20.0;
pub const HOVER_TILT_DEG: f64 = 8.0;
pub const HOVER_SCALE: f64 = 1.02;
