// Page wiring constants: DOM hooks, timings and cursor tuning.
//
// Selectors name the markup contract between the HTML page and the WASM
// module; scene tuning lives in `core::constants`.
// Elements looked up by id
pub const CANVAS_ID: &str = "three-canvas";
pub const LOADING_SCREEN_ID: &str = "loading-screen";

// Selectors
pub const SCROLL_PROGRESS_SELECTOR: &str = ".scroll-progress";
pub const SECTION_SELECTOR: &str = ".section";
pub const NAV_LINK_SELECTOR: &str = ".nav-links a";
pub const PROJECT_CARD_SELECTOR: &str = ".project-card";
pub const PROJECT_ATTR: &str = "data-project";
pub const FORM_FIELD_SELECTOR: &str = ".form-input, .form-textarea";
pub const SUBMIT_BUTTON_SELECTOR: &str = ".submit-button";
pub const CTA_BUTTON_SELECTOR: &str = ".cta-button";
pub const CTA_TARGET_SELECTOR: &str = "#projects";

// Classes
pub const ACTIVE_CLASS: &str = "active";
pub const CURSOR_CLASS: &str = "custom-cursor";

// Loading screen: fade starts (and the scene starts moving) after the first
// delay, the element is removed from layout after the second.
pub const LOADING_FADE_DELAY_MS: i32 = 2000;
pub const LOADING_HIDE_DELAY_MS: i32 = 500;

// Canvas backing store never exceeds 2x CSS pixels
pub const MAX_PIXEL_RATIO: f64 = 2.0;

// Custom cursor press feedback
pub const CURSOR_PRESSED_TRANSFORM: &str = "scale(0.8)";
pub const CURSOR_RELEASED_TRANSFORM: &str = "scale(1)";
