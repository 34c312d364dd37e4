//! Per-frame pipeline: scroll + pointer + viewport in, parameter bundle out.
//!
//! Order within a frame is fixed: normalise the scroll offset, map it
//! through each phase, then compose tilt and reveal.

use crate::error::Result;
use crate::input::{InputCache, PointerSample, Viewport};
use crate::progress::{Progress, ScrollRange};
use crate::reveal::{RevealDriver, RevealParameters};
use crate::smooth::SmoothScroll;
use crate::tilt::{TiltComposer, TiltParameters};

/// Everything the render boundary needs for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ParameterBundle {
    pub rotate_x: f32,
    pub rotate_y: f32,
    pub mask_diameter_px: f32,
    pub overlay_opacity: f32,
    pub video_playback_scale: f32,
    /// Fraction of the video to seek to, in \[0, 1\].
    pub video_progress: f32,
    pub outer_progress: f32,
}

impl ParameterBundle {
    fn assemble(outer: Progress, tilt: TiltParameters, reveal: RevealParameters) -> Self {
        Self {
            rotate_x: tilt.rotate_x,
            rotate_y: tilt.rotate_y,
            mask_diameter_px: reveal.mask_diameter_px,
            overlay_opacity: reveal.background_opacity,
            video_playback_scale: reveal.video_playback_scale,
            video_progress: reveal.reveal_progress.get(),
            outer_progress: outer.get(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameInputs {
    pub scroll_offset: f32,
    pub pointer: Option<PointerSample>,
    pub viewport: Viewport,
}

/// A compiled scroll-reactive section. Immutable once built.
#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    range: ScrollRange,
    tilt: TiltComposer,
    reveal: RevealDriver,
    smoothing: f32,
}

impl Section {
    pub(crate) fn new(
        range: ScrollRange,
        tilt: TiltComposer,
        reveal: RevealDriver,
        smoothing: f32,
    ) -> Self {
        Self {
            range,
            tilt,
            reveal,
            smoothing,
        }
    }

    pub fn range(&self) -> &ScrollRange {
        &self.range
    }

    pub fn tilt(&self) -> &TiltComposer {
        &self.tilt
    }

    pub fn reveal(&self) -> &RevealDriver {
        &self.reveal
    }

    pub fn smoothing(&self) -> f32 {
        self.smoothing
    }

    /// Re-anchor the outer range at the section's document offset.
    pub fn anchor_at(&mut self, section_top: f32) -> Result<()> {
        self.range = self.range.with_start(section_top)?;
        Ok(())
    }

    /// Pure evaluation: identical inputs give identical bundles.
    pub fn evaluate(&self, inputs: &FrameInputs) -> ParameterBundle {
        let outer = self.range.sample(inputs.scroll_offset).progress();
        let tilt = self.tilt.compose(outer, inputs.pointer, inputs.viewport);
        let reveal = self.reveal.compute(outer, inputs.viewport);
        ParameterBundle::assemble(outer, tilt, reveal)
    }
}

/// Owns the per-section frame state: smoothed scroll and the last bundle
/// computed against a measured viewport.
#[derive(Clone, Debug)]
pub struct Compositor {
    section: Section,
    smooth: SmoothScroll,
    last_good: Option<ParameterBundle>,
}

impl Compositor {
    pub fn new(section: Section) -> Self {
        let smooth = SmoothScroll::new(section.smoothing());
        Self {
            section,
            smooth,
            last_good: None,
        }
    }

    pub fn section(&self) -> &Section {
        &self.section
    }

    pub fn section_mut(&mut self) -> &mut Section {
        &mut self.section
    }

    pub fn smooth_scroll(&self) -> &SmoothScroll {
        &self.smooth
    }

    /// Advance the virtual scroll by `dt_sec` and evaluate the section.
    ///
    /// While the viewport is unmeasured the mask keeps its last good size
    /// (or stays closed if there is none); everything else is computed as usual.
    pub fn frame(&mut self, dt_sec: f32, input: &InputCache) -> ParameterBundle {
        self.smooth.set_target(input.scroll_offset());
        let scroll_offset = self.smooth.advance(dt_sec);
        let inputs = FrameInputs {
            scroll_offset,
            pointer: input.pointer(),
            viewport: input.viewport(),
        };
        let mut bundle = self.section.evaluate(&inputs);
        if inputs.viewport.is_measured() {
            self.last_good = Some(bundle);
        } else if let Some(last) = self.last_good {
            bundle.mask_diameter_px = last.mask_diameter_px;
        }
        log::trace!(
            "[frame] p={:.3} rot=({:.2},{:.2}) mask={:.0} dim={:.2}",
            bundle.outer_progress,
            bundle.rotate_x,
            bundle.rotate_y,
            bundle.mask_diameter_px,
            bundle.overlay_opacity
        );
        bundle
    }
}
