//! Signal normalisation: raw scroll offsets to clamped progress values.

use crate::error::{ConfigError, Result};

/// A position within a window, clamped to \[0, 1\].
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Progress(f32);

impl Progress {
    pub const ZERO: Progress = Progress(0.0);
    pub const ONE: Progress = Progress(1.0);

    /// Clamp `value` into \[0, 1\]. NaN collapses to zero.
    #[inline]
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            Self::ZERO
        } else {
            Progress(value.clamp(0.0, 1.0))
        }
    }

    #[inline]
    pub fn get(self) -> f32 {
        self.0
    }
}

impl From<Progress> for f32 {
    fn from(p: Progress) -> f32 {
        p.0
    }
}

/// A named `[start, end)` window with `start < end`, checked on construction.
///
/// Phases are used both for the outer scroll range of a section (in pixels)
/// and for sub-phases over the outer progress value (tilt, reveal, dim).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Phase {
    name: &'static str,
    start: f32,
    end: f32,
}

impl Phase {
    pub fn new(name: &'static str, start: f32, end: f32) -> Result<Self> {
        if !start.is_finite() || !end.is_finite() {
            return Err(ConfigError::NonFinite { field: name });
        }
        // `!(a < b)` also rejects equal bounds
        if !(start < end) {
            return Err(ConfigError::EmptyPhase { name, start, end });
        }
        Ok(Self { name, start, end })
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn start(&self) -> f32 {
        self.start
    }

    #[inline]
    pub fn end(&self) -> f32 {
        self.end
    }

    #[inline]
    pub fn span(&self) -> f32 {
        self.end - self.start
    }

    /// Normalise `value` against this window.
    #[inline]
    pub fn progress(&self, value: f32) -> Progress {
        Progress::new((value - self.start) / self.span())
    }

    /// Normalise an outer progress value against this sub-phase.
    #[inline]
    pub fn sub_progress(&self, outer: Progress) -> Progress {
        self.progress(outer.get())
    }
}

/// One scroll reading together with the trigger window it is measured against.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollSample {
    pub raw_offset: f32,
    pub trigger_start: f32,
    pub trigger_end: f32,
}

impl ScrollSample {
    /// Linear normalisation of `raw_offset` into the trigger window.
    ///
    /// Samples built by hand with an empty window report zero progress; use
    /// [`ScrollRange::sample`] to get a window that was validated up front.
    pub fn progress(&self) -> Progress {
        let span = self.trigger_end - self.trigger_start;
        if span <= 0.0 {
            return Progress::ZERO;
        }
        Progress::new((self.raw_offset - self.trigger_start) / span)
    }
}

/// The outer scroll window of a section, in document pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollRange {
    window: Phase,
}

impl ScrollRange {
    pub fn new(trigger_start: f32, trigger_end: f32) -> Result<Self> {
        Ok(Self {
            window: Phase::new("scroll", trigger_start, trigger_end)?,
        })
    }

    /// Same window, shifted so that it starts at `trigger_start`.
    pub fn with_start(&self, trigger_start: f32) -> Result<Self> {
        Self::new(trigger_start, trigger_start + self.window.span())
    }

    #[inline]
    pub fn sample(&self, raw_offset: f32) -> ScrollSample {
        ScrollSample {
            raw_offset,
            trigger_start: self.window.start(),
            trigger_end: self.window.end(),
        }
    }

    #[inline]
    pub fn progress(&self, raw_offset: f32) -> Progress {
        self.window.progress(raw_offset)
    }

    #[inline]
    pub fn start(&self) -> f32 {
        self.window.start()
    }

    #[inline]
    pub fn end(&self) -> f32 {
        self.window.end()
    }
}
