//! Circular mask reveal and background dimming.

use crate::error::{ConfigError, Result};
use crate::input::Viewport;
use crate::mapper::{map_range, RangeMapper};
use crate::progress::{Phase, Progress};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RevealParameters {
    pub mask_diameter_px: f32,
    pub background_opacity: f32,
    pub video_playback_scale: f32,
    /// Reveal-phase progress, used to scrub the video.
    pub reveal_progress: Progress,
}

/// Starting mask size. A binary switch at `breakpoint_px`, not a blend.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeedPolicy {
    pub breakpoint_px: f32,
    pub narrow_px: f32,
    pub wide_px: f32,
}

impl SeedPolicy {
    #[inline]
    pub fn seed_size(&self, viewport: Viewport) -> f32 {
        if viewport.width < self.breakpoint_px {
            self.narrow_px
        } else {
            self.wide_px
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RevealDriver {
    reveal: Phase,
    dim: RangeMapper,
    video_scale: RangeMapper,
    seed: SeedPolicy,
    cover_margin: f32,
}

impl RevealDriver {
    pub fn new(
        reveal_end: f32,
        dim_start: f32,
        max_opacity: f32,
        video_scale_start: f32,
        seed: SeedPolicy,
        cover_margin: f32,
    ) -> Result<Self> {
        // (w + h) >= diagonal, so any margin >= 1 still clears the frame
        if !(cover_margin >= 1.0) || !cover_margin.is_finite() {
            return Err(ConfigError::InvalidValue {
                field: "cover_margin",
                value: cover_margin,
            });
        }
        if !(seed.narrow_px >= 0.0) || !(seed.wide_px >= 0.0) {
            return Err(ConfigError::InvalidValue {
                field: "seed_size",
                value: seed.narrow_px.min(seed.wide_px),
            });
        }
        Ok(Self {
            reveal: Phase::new("reveal", 0.0, reveal_end)?,
            dim: RangeMapper::linear(dim_start, 1.0, 0.0, max_opacity)
                .map_err(|_| ConfigError::EmptyPhase {
                    name: "dim",
                    start: dim_start,
                    end: 1.0,
                })?,
            video_scale: RangeMapper::linear(0.0, 1.0, video_scale_start, 1.0)?,
            seed,
            cover_margin,
        })
    }

    pub fn reveal_phase(&self) -> &Phase {
        &self.reveal
    }

    /// Diameter that clears the whole viewport for any aspect ratio.
    #[inline]
    pub fn cover_size(&self, viewport: Viewport) -> f32 {
        self.cover_margin * (viewport.width + viewport.height)
    }

    #[inline]
    pub fn seed_size(&self, viewport: Viewport) -> f32 {
        self.seed.seed_size(viewport)
    }

    /// Mask diameter for a given reveal-phase progress.
    pub fn mask_diameter(&self, reveal_progress: Progress, viewport: Viewport) -> f32 {
        if !viewport.is_measured() {
            return 0.0;
        }
        map_range(
            reveal_progress.get(),
            (0.0, 1.0),
            (self.seed_size(viewport), self.cover_size(viewport)),
        )
    }

    #[inline]
    pub fn overlay_opacity(&self, outer: Progress) -> f32 {
        self.dim.map_progress(outer)
    }

    pub fn compute(&self, outer: Progress, viewport: Viewport) -> RevealParameters {
        let reveal_progress = self.reveal.sub_progress(outer);
        RevealParameters {
            mask_diameter_px: self.mask_diameter(reveal_progress, viewport),
            background_opacity: self.overlay_opacity(outer),
            video_playback_scale: self.video_scale.map_progress(reveal_progress),
            reveal_progress,
        }
    }
}
