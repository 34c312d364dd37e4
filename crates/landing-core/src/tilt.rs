//! Pointer- and scroll-driven 3D tilt.
//!
//! The resting pose is deliberately tilted (`base_*`), the pointer adds up
//! to `max_degrees` on each axis, and the whole thing fades to zero as the
//! outer progress crosses the tilt phase.

use crate::error::Result;
use crate::input::{PointerSample, Viewport};
use crate::mapper::{map_range, RangeMapper};
use crate::progress::{Phase, Progress};

/// Rotation in degrees, consumed as `rotateX(..) rotateY(..)`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TiltParameters {
    pub rotate_x: f32,
    pub rotate_y: f32,
}

/// Desktop-only gating: below `min_width` the tilt is forced off.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DeviceGate {
    pub desktop_only: bool,
    pub min_width: f32,
}

impl DeviceGate {
    #[inline]
    pub fn allows(&self, viewport: Viewport) -> bool {
        // an unmeasured viewport is not treated as narrow
        !self.desktop_only || !viewport.is_measured() || viewport.width >= self.min_width
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TiltComposer {
    base_x: f32,
    base_y: f32,
    max_degrees: f32,
    phase: Phase,
    fade: RangeMapper,
    gate: DeviceGate,
}

impl TiltComposer {
    pub fn new(
        base_x: f32,
        base_y: f32,
        max_degrees: f32,
        activation_end: f32,
        gate: DeviceGate,
    ) -> Result<Self> {
        let phase = Phase::new("tilt", 0.0, activation_end)?;
        // over the normalised tilt phase: fully active at 0, gone at 1
        let fade = RangeMapper::linear(0.0, 1.0, 1.0, 0.0)?;
        Ok(Self {
            base_x,
            base_y,
            max_degrees,
            phase,
            fade,
            gate,
        })
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// 1 while the tilt is fully active, 0 once scrolled past the phase or
    /// when the device gate rejects the viewport.
    pub fn fade_gate(&self, outer: Progress, viewport: Viewport) -> f32 {
        if !self.gate.allows(viewport) {
            return 0.0;
        }
        self.fade.map_progress(self.phase.sub_progress(outer))
    }

    /// Pointer contribution before fading. Zero when the viewport is not
    /// measured yet or no pointer has been seen.
    pub fn pointer_delta(&self, pointer: Option<PointerSample>, viewport: Viewport) -> (f32, f32) {
        let Some(p) = pointer else {
            return (0.0, 0.0);
        };
        if !viewport.is_measured() {
            return (0.0, 0.0);
        }
        let m = self.max_degrees;
        let dx = map_range(p.x, (0.0, viewport.width), (-m, m));
        // screen y grows downwards, so the x rotation is inverted
        let dy = map_range(p.y, (0.0, viewport.height), (m, -m));
        (dx, dy)
    }

    pub fn compose(
        &self,
        outer: Progress,
        pointer: Option<PointerSample>,
        viewport: Viewport,
    ) -> TiltParameters {
        let gate = self.fade_gate(outer, viewport);
        if gate == 0.0 {
            return TiltParameters::default();
        }
        let (dx, dy) = self.pointer_delta(pointer, viewport);
        TiltParameters {
            rotate_x: self.base_x * gate + dy * gate,
            rotate_y: self.base_y * gate + dx * gate,
        }
    }
}
