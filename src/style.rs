//! Pure formatting helpers between a parameter bundle and CSS/markup.
//!
//! Kept free of web APIs so they can be exercised on the host.

use super::constants::*;
use landing_core::{ParameterBundle, ScrambleFrame};
use std::borrow::Cow;

#[inline]
pub fn stage_transform(rotate_x: f32, rotate_y: f32) -> String {
    format!(
        "perspective({PERSPECTIVE_PX}px) rotateX({:.3}deg) rotateY({:.3}deg)",
        rotate_x, rotate_y
    )
}

#[inline]
pub fn mask_clip_path(diameter_px: f32) -> String {
    format!("circle({:.1}px at 50% 50%)", (diameter_px * 0.5).max(0.0))
}

#[inline]
pub fn video_transform(scale: f32) -> String {
    format!("scale({:.4})", scale)
}

#[inline]
pub fn opacity_value(opacity: f32) -> String {
    format!("{:.3}", opacity.clamp(0.0, 1.0))
}

/// Time to seek the video to, or `None` when the duration is unknown or the
/// playhead is already close enough.
pub fn video_seek_target(progress: f32, duration_sec: f64, current_sec: f64) -> Option<f64> {
    if !duration_sec.is_finite() || duration_sec <= 0.0 {
        return None;
    }
    let target = progress.clamp(0.0, 1.0) as f64 * duration_sec;
    if (target - current_sec).abs() < SEEK_EPSILON_SEC {
        None
    } else {
        Some(target)
    }
}

/// What one frame has to write to the DOM.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FramePlan {
    /// Style properties differ from the last applied bundle.
    pub restyle: bool,
    pub seek_to: Option<f64>,
}

/// Decide the writes for `next`. The seek is judged on its own every frame:
/// a video whose metadata arrives late still needs seeking even when the
/// bundle has not changed since the last write.
///
/// `video` is `(duration_sec, current_sec)` when the section has a video.
pub fn plan_frame(
    last: Option<&ParameterBundle>,
    next: &ParameterBundle,
    video: Option<(f64, f64)>,
) -> FramePlan {
    FramePlan {
        restyle: last != Some(next),
        seek_to: video.and_then(|(duration, current)| {
            video_seek_target(next.video_progress, duration, current)
        }),
    }
}

/// Document-space top of an element from its viewport rect and the scroll position.
#[inline]
pub fn document_top(rect_top: f64, scroll_y: f64) -> f32 {
    (rect_top + scroll_y) as f32
}

#[inline]
pub fn has_entered_view(rect_top: f32, viewport_height: f32) -> bool {
    viewport_height > 0.0 && rect_top < viewport_height * HEADLINE_TRIGGER_FRACTION
}

#[inline]
pub fn is_ignored_pointer(pointer_type: &str) -> bool {
    IGNORED_POINTER_TYPES.contains(&pointer_type)
}

fn push_escaped(out: &mut String, c: char) {
    match c {
        '&' => out.push_str("&amp;"),
        '<' => out.push_str("&lt;"),
        '>' => out.push_str("&gt;"),
        '"' => out.push_str("&quot;"),
        _ => out.push(c),
    }
}

/// Markup for one scramble frame: glyphs are wrapped so CSS can dim them.
pub fn scramble_markup(text: &str, glyph_mask: &[bool]) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    for (i, c) in text.chars().enumerate() {
        if glyph_mask.get(i).copied().unwrap_or(false) {
            out.push_str("<span class=\"");
            out.push_str(GLYPH_CLASS);
            out.push_str("\">");
            push_escaped(&mut out, c);
            out.push_str("</span>");
        } else {
            push_escaped(&mut out, c);
        }
    }
    out
}

/// Markup to show for `frame` of a headline whose authored markup is
/// `original`. The last frame hands back the original so inline elements
/// (`<br>`, `<em>`, links) survive the effect.
pub fn headline_markup<'a>(frame: &ScrambleFrame, original: &'a str) -> Cow<'a, str> {
    if frame.done {
        Cow::Borrowed(original)
    } else {
        Cow::Owned(scramble_markup(&frame.text, &frame.glyph_mask))
    }
}
