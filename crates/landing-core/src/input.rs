//! Last-value cache for pointer, scroll and viewport signals.
//!
//! Listeners write here as events arrive; the frame loop reads whatever is
//! current. There is no queue: a newer sample simply replaces the older one.

use glam::Vec2;

/// Viewport size in CSS pixels. Zero until the first layout has been observed.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Both dimensions are known and positive.
    #[inline]
    pub fn is_measured(&self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    #[inline]
    pub fn diagonal(&self) -> f32 {
        Vec2::new(self.width, self.height).length()
    }
}

/// Pointer position in viewport pixels.
pub type PointerSample = Vec2;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputCache {
    pointer: Option<PointerSample>,
    scroll_offset: f32,
    viewport: Viewport,
}

impl InputCache {
    pub fn new(viewport: Viewport, scroll_offset: f32) -> Self {
        Self {
            pointer: None,
            scroll_offset,
            viewport,
        }
    }

    #[inline]
    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.pointer = Some(Vec2::new(x, y));
    }

    /// Forget the pointer, e.g. when it leaves the window.
    #[inline]
    pub fn clear_pointer(&mut self) {
        self.pointer = None;
    }

    #[inline]
    pub fn set_scroll_offset(&mut self, offset: f32) {
        if offset.is_finite() {
            self.scroll_offset = offset;
        }
    }

    #[inline]
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    #[inline]
    pub fn pointer(&self) -> Option<PointerSample> {
        self.pointer
    }

    #[inline]
    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }
}
