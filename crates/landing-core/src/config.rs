//! Per-section configuration, its defaults, and compilation into a [`Section`].
//!
//! Tuning numbers live here as named constants so that call sites never
//! carry magic values.

use crate::error::{ConfigError, Result};
use crate::pipeline::Section;
use crate::progress::ScrollRange;
use crate::reveal::{RevealDriver, SeedPolicy};
use crate::tilt::{DeviceGate, TiltComposer};

// Tilt
pub const DEFAULT_TILT_MAX_DEGREES: f32 = 8.0;
pub const DEFAULT_BASE_X_ROTATION_DEGREES: f32 = 12.0; // leans back at rest
pub const DEFAULT_BASE_Y_ROTATION_DEGREES: f32 = -10.0;
pub const DEFAULT_TILT_ACTIVATION_END: f32 = 0.3;

// Reveal and dim phases (fractions of the outer scroll range)
pub const DEFAULT_REVEAL_END: f32 = 0.6;
pub const DEFAULT_DIM_START: f32 = 0.6;
pub const DEFAULT_MAX_OVERLAY_OPACITY: f32 = 0.7;

// Responsive policy
pub const DEFAULT_DESKTOP_MIN_WIDTH_PX: f32 = 1024.0;
pub const DEFAULT_SEED_BREAKPOINT_PX: f32 = 768.0;
pub const DEFAULT_SEED_SIZE_NARROW_PX: f32 = 120.0;
pub const DEFAULT_SEED_SIZE_WIDE_PX: f32 = 220.0;
pub const DEFAULT_COVER_MARGIN: f32 = 1.5; // times (width + height)

// Video
pub const DEFAULT_VIDEO_SCALE_START: f32 = 1.25;

// Scrolling
pub const DEFAULT_SCROLL_LENGTH_PX: f32 = 2500.0;
pub const DEFAULT_SCROLL_SMOOTHING: f32 = 0.1;

/// Options recognised on a scroll-reactive section. Values are plain numbers
/// until [`SectionConfig::compile`] validates them.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionConfig {
    pub tilt_max_degrees: f32,
    pub base_y_rotation_degrees: f32,
    pub base_x_rotation_degrees: f32,
    pub tilt_activation_end: f32,
    pub reveal_end: f32,
    pub dim_start: f32,
    pub desktop_only: bool,
    pub desktop_min_width_px: f32,
    pub seed_breakpoint_px: f32,
    pub seed_size_narrow_px: f32,
    pub seed_size_wide_px: f32,
    pub cover_margin: f32,
    pub max_overlay_opacity: f32,
    pub video_scale_start: f32,
    pub scroll_length_px: f32,
    pub scroll_smoothing: f32,
}

impl Default for SectionConfig {
    fn default() -> Self {
        Self {
            tilt_max_degrees: DEFAULT_TILT_MAX_DEGREES,
            base_y_rotation_degrees: DEFAULT_BASE_Y_ROTATION_DEGREES,
            base_x_rotation_degrees: DEFAULT_BASE_X_ROTATION_DEGREES,
            tilt_activation_end: DEFAULT_TILT_ACTIVATION_END,
            reveal_end: DEFAULT_REVEAL_END,
            dim_start: DEFAULT_DIM_START,
            desktop_only: true,
            desktop_min_width_px: DEFAULT_DESKTOP_MIN_WIDTH_PX,
            seed_breakpoint_px: DEFAULT_SEED_BREAKPOINT_PX,
            seed_size_narrow_px: DEFAULT_SEED_SIZE_NARROW_PX,
            seed_size_wide_px: DEFAULT_SEED_SIZE_WIDE_PX,
            cover_margin: DEFAULT_COVER_MARGIN,
            max_overlay_opacity: DEFAULT_MAX_OVERLAY_OPACITY,
            video_scale_start: DEFAULT_VIDEO_SCALE_START,
            scroll_length_px: DEFAULT_SCROLL_LENGTH_PX,
            scroll_smoothing: DEFAULT_SCROLL_SMOOTHING,
        }
    }
}

/// Keys accepted by [`SectionConfig::apply_overrides`]. The web front-end
/// reads them as `data-<key>` attributes, the headless driver as `LANDING_<KEY>`.
pub const OVERRIDE_KEYS: &[&str] = &[
    "tilt-max",
    "base-y",
    "base-x",
    "tilt-end",
    "reveal-end",
    "dim-start",
    "desktop-only",
    "desktop-min-width",
    "max-opacity",
    "video-scale",
    "scroll-length",
    "smoothing",
];

impl SectionConfig {
    /// Set a single option from its textual form. Unknown keys are rejected
    /// before the value is looked at.
    pub fn set(&mut self, key: &str, raw: &str) -> Result<()> {
        let raw = raw.trim();
        let unparsable = || ConfigError::Unparsable {
            key: key.to_owned(),
            raw: raw.to_owned(),
        };
        if key == "desktop-only" {
            self.desktop_only = match raw {
                "" | "true" | "1" | "yes" => true,
                "false" | "0" | "no" => false,
                _ => return Err(unparsable()),
            };
            return Ok(());
        }
        let slot = match key {
            "tilt-max" => &mut self.tilt_max_degrees,
            "base-y" => &mut self.base_y_rotation_degrees,
            "base-x" => &mut self.base_x_rotation_degrees,
            "tilt-end" => &mut self.tilt_activation_end,
            "reveal-end" => &mut self.reveal_end,
            "dim-start" => &mut self.dim_start,
            "desktop-min-width" => &mut self.desktop_min_width_px,
            "max-opacity" => &mut self.max_overlay_opacity,
            "video-scale" => &mut self.video_scale_start,
            "scroll-length" => &mut self.scroll_length_px,
            "smoothing" => &mut self.scroll_smoothing,
            _ => {
                return Err(ConfigError::UnknownOption {
                    key: key.to_owned(),
                })
            }
        };
        *slot = raw.parse().map_err(|_| unparsable())?;
        Ok(())
    }

    /// Apply every override `lookup` knows about. Bad values are logged and
    /// the previous value is kept. Returns how many options were changed.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> usize {
        let mut applied = 0;
        for key in OVERRIDE_KEYS {
            let Some(raw) = lookup(key) else { continue };
            match self.set(key, &raw) {
                Ok(()) => applied += 1,
                Err(e) => log::warn!("[config] keeping previous value: {e}"),
            }
        }
        applied
    }

    /// Validate and precompute everything a section needs per frame.
    pub fn compile(&self) -> Result<Section> {
        self.check_finite()?;
        check_progress("tilt_activation_end", self.tilt_activation_end)?;
        check_progress("reveal_end", self.reveal_end)?;
        check_progress("dim_start", self.dim_start)?;
        check_positive("tilt_max_degrees", self.tilt_max_degrees, true)?;
        check_positive("scroll_length_px", self.scroll_length_px, false)?;
        check_positive("desktop_min_width_px", self.desktop_min_width_px, true)?;
        check_positive("max_overlay_opacity", self.max_overlay_opacity, true)?;
        if self.max_overlay_opacity > 1.0 {
            return Err(ConfigError::InvalidValue {
                field: "max_overlay_opacity",
                value: self.max_overlay_opacity,
            });
        }
        if !(self.scroll_smoothing > 0.0 && self.scroll_smoothing <= 1.0) {
            return Err(ConfigError::InvalidValue {
                field: "scroll_smoothing",
                value: self.scroll_smoothing,
            });
        }

        let range = ScrollRange::new(0.0, self.scroll_length_px)?;
        let tilt = TiltComposer::new(
            self.base_x_rotation_degrees,
            self.base_y_rotation_degrees,
            self.tilt_max_degrees,
            self.tilt_activation_end,
            DeviceGate {
                desktop_only: self.desktop_only,
                min_width: self.desktop_min_width_px,
            },
        )?;
        let reveal = RevealDriver::new(
            self.reveal_end,
            self.dim_start,
            self.max_overlay_opacity,
            self.video_scale_start,
            SeedPolicy {
                breakpoint_px: self.seed_breakpoint_px,
                narrow_px: self.seed_size_narrow_px,
                wide_px: self.seed_size_wide_px,
            },
            self.cover_margin,
        )?;
        Ok(Section::new(range, tilt, reveal, self.scroll_smoothing))
    }

    fn check_finite(&self) -> Result<()> {
        let fields = [
            ("tilt_max_degrees", self.tilt_max_degrees),
            ("base_y_rotation_degrees", self.base_y_rotation_degrees),
            ("base_x_rotation_degrees", self.base_x_rotation_degrees),
            ("tilt_activation_end", self.tilt_activation_end),
            ("reveal_end", self.reveal_end),
            ("dim_start", self.dim_start),
            ("desktop_min_width_px", self.desktop_min_width_px),
            ("seed_breakpoint_px", self.seed_breakpoint_px),
            ("seed_size_narrow_px", self.seed_size_narrow_px),
            ("seed_size_wide_px", self.seed_size_wide_px),
            ("cover_margin", self.cover_margin),
            ("max_overlay_opacity", self.max_overlay_opacity),
            ("video_scale_start", self.video_scale_start),
            ("scroll_length_px", self.scroll_length_px),
            ("scroll_smoothing", self.scroll_smoothing),
        ];
        for (field, v) in fields {
            if !v.is_finite() {
                return Err(ConfigError::NonFinite { field });
            }
        }
        Ok(())
    }
}

fn check_progress(field: &'static str, value: f32) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue { field, value })
    }
}

fn check_positive(field: &'static str, value: f32, allow_zero: bool) -> Result<()> {
    let ok = if allow_zero { value >= 0.0 } else { value > 0.0 };
    if ok {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue { field, value })
    }
}
