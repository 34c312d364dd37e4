//! Smooth-scroll emulation: a virtual offset that eases toward the native one.

/// Remaining distance below which the virtual offset snaps to the target.
pub const SNAP_DISTANCE_PX: f32 = 0.5;

/// Reference frame rate the smoothing factor is expressed at.
const REFERENCE_FPS: f32 = 60.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SmoothScroll {
    current: f32,
    target: f32,
    /// Fraction of the remaining distance covered per reference frame, in (0, 1].
    smoothing: f32,
    primed: bool,
}

impl SmoothScroll {
    pub fn new(smoothing: f32) -> Self {
        Self {
            current: 0.0,
            target: 0.0,
            smoothing: smoothing.clamp(0.001, 1.0),
            primed: false,
        }
    }

    #[inline]
    pub fn set_target(&mut self, native_offset: f32) {
        if native_offset.is_finite() {
            self.target = native_offset;
        }
    }

    /// Move toward the target. Frame-rate independent: two 8 ms steps land
    /// where one 16 ms step would.
    pub fn advance(&mut self, dt_sec: f32) -> f32 {
        if !self.primed {
            self.current = self.target;
            self.primed = true;
            return self.current;
        }
        let frames = (dt_sec.max(0.0)) * REFERENCE_FPS;
        let alpha = 1.0 - (1.0 - self.smoothing).powf(frames);
        self.current += (self.target - self.current) * alpha;
        if (self.target - self.current).abs() < SNAP_DISTANCE_PX {
            self.current = self.target;
        }
        self.current
    }

    #[inline]
    pub fn current(&self) -> f32 {
        self.current
    }

    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }

    #[inline]
    pub fn is_settled(&self) -> bool {
        self.primed && self.current == self.target
    }
}
