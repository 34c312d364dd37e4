/// DOM hooks and presentation tuning for the landing page front-end.
///
/// Section behaviour (phases, tilt, reveal) is configured in
/// `landing_core::config`; the values here only concern how the web page
/// exposes and displays it.

// Markup hooks
pub const SECTION_SELECTOR: &str = "[data-reveal-section]";
pub const STAGE_SELECTOR: &str = "[data-fx-stage]"; // element that tilts
pub const MASK_SELECTOR: &str = "[data-fx-mask]"; // element clipped by the circular reveal
pub const OVERLAY_SELECTOR: &str = "[data-fx-overlay]"; // dimming layer
pub const VIDEO_SELECTOR: &str = "video";
pub const SCRAMBLE_SELECTOR: &str = "[data-scramble]";
pub const CONFIG_ATTR_PREFIX: &str = "data-";

// CSS hooks
pub const PROGRESS_CSS_VAR: &str = "--fx-progress";
pub const GLYPH_CLASS: &str = "fx-glyph";

// Stage perspective used in the tilt transform
pub const PERSPECTIVE_PX: f32 = 1200.0;

// Skip seeks smaller than about one video frame
pub const SEEK_EPSILON_SEC: f64 = 1.0 / 30.0;

// A headline starts scrambling once its top passes this fraction of the viewport height
pub const HEADLINE_TRIGGER_FRACTION: f32 = 0.85;

// Pointer types that never drive the tilt
pub const IGNORED_POINTER_TYPES: [&str; 2] = ["touch", "pen"];
