// Host-side tests for the CSS and markup helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
#[path = "../src/style.rs"]
mod style;

use landing_core::{SectionConfig, TextScramble, Viewport};
use style::*;

#[test]
fn stage_transform_formats_both_axes() {
    assert_eq!(
        stage_transform(12.0, -10.5),
        "perspective(1200px) rotateX(12.000deg) rotateY(-10.500deg)"
    );
}

#[test]
fn mask_clip_path_uses_radius() {
    assert_eq!(mask_clip_path(220.0), "circle(110.0px at 50% 50%)");
    assert_eq!(mask_clip_path(-4.0), "circle(0.0px at 50% 50%)");
}

#[test]
fn opacity_is_clamped() {
    assert_eq!(opacity_value(0.35), "0.350");
    assert_eq!(opacity_value(1.7), "1.000");
    assert_eq!(opacity_value(-1.0), "0.000");
}

#[test]
fn video_scale_formats() {
    assert_eq!(video_transform(1.25), "scale(1.2500)");
}

#[test]
fn video_seek_needs_a_known_duration() {
    assert_eq!(video_seek_target(0.5, f64::NAN, 0.0), None);
    assert_eq!(video_seek_target(0.5, f64::INFINITY, 0.0), None);
    assert_eq!(video_seek_target(0.5, 0.0, 0.0), None);
    assert_eq!(video_seek_target(0.5, 10.0, 0.0), Some(5.0));
}

#[test]
fn video_seek_skips_tiny_moves() {
    assert_eq!(video_seek_target(0.5, 10.0, 4.99), None);
    assert_eq!(video_seek_target(1.0, 10.0, 9.0), Some(10.0));
    assert_eq!(video_seek_target(2.0, 10.0, 0.0), Some(10.0));
}

#[test]
fn document_top_adds_scroll() {
    assert_eq!(document_top(-300.0, 1000.0), 700.0);
}

#[test]
fn headline_triggers_below_the_fold_line() {
    assert!(has_entered_view(100.0, 1000.0));
    assert!(!has_entered_view(900.0, 1000.0));
    assert!(!has_entered_view(0.0, 0.0));
}

#[test]
fn touch_and_pen_pointers_are_ignored() {
    assert!(is_ignored_pointer("touch"));
    assert!(is_ignored_pointer("pen"));
    assert!(!is_ignored_pointer("mouse"));
}

#[test]
fn scramble_markup_wraps_glyphs_and_escapes() {
    let html = scramble_markup("a<b", &[false, true, false]);
    assert_eq!(html, "a<span class=\"fx-glyph\">&lt;</span>b");
    assert_eq!(scramble_markup("R&D", &[]), "R&amp;D");
}

#[test]
fn scramble_frames_render_to_markup() {
    let mut s = TextScramble::new(9);
    s.set_text("HELLO", "HELLO", 6);
    loop {
        let f = s.step();
        let html = scramble_markup(&f.text, &f.glyph_mask);
        let glyphs = f.glyph_mask.iter().filter(|g| **g).count();
        assert_eq!(html.matches("<span").count(), glyphs);
        if f.done {
            assert_eq!(html, "HELLO");
            break;
        }
    }
}

#[test]
fn rendered_bundle_strings_are_well_formed() {
    let section = SectionConfig::default().compile().unwrap();
    let b = section.evaluate(&landing_core::FrameInputs {
        scroll_offset: 625.0,
        pointer: None,
        viewport: Viewport::new(1920.0, 1080.0),
    });
    assert!(stage_transform(b.rotate_x, b.rotate_y).starts_with("perspective("));
    assert!(mask_clip_path(b.mask_diameter_px).contains("px at 50% 50%"));
}

fn mid_reveal_bundle() -> landing_core::ParameterBundle {
    landing_core::ParameterBundle {
        video_progress: 0.5,
        video_playback_scale: 1.1,
        ..Default::default()
    }
}

#[test]
fn unchanged_bundle_still_seeks_once_duration_is_known() {
    let b = mid_reveal_bundle();

    // metadata not loaded yet: style the frame, nothing to seek
    let first = plan_frame(None, &b, Some((f64::NAN, 0.0)));
    assert!(first.restyle);
    assert_eq!(first.seek_to, None);

    // same bundle, duration now known
    let second = plan_frame(Some(&b), &b, Some((8.0, 0.0)));
    assert!(!second.restyle);
    assert_eq!(second.seek_to, Some(4.0));

    // playhead arrived: nothing left to do
    let third = plan_frame(Some(&b), &b, Some((8.0, 4.0)));
    assert_eq!(third, FramePlan { restyle: false, seek_to: None });
}

#[test]
fn sections_without_video_never_seek() {
    let b = mid_reveal_bundle();
    let plan = plan_frame(None, &b, None);
    assert!(plan.restyle);
    assert_eq!(plan.seek_to, None);
}

#[test]
fn settled_headline_gets_its_authored_markup_back() {
    let authored = "Scroll <em>down</em><br>to see";
    let mut s = TextScramble::new(5);
    s.set_text("Scroll downto see", "Scroll downto see", 6);
    loop {
        let f = s.step();
        let html = headline_markup(&f, authored);
        if f.done {
            assert_eq!(html, authored);
            break;
        }
        assert!(!html.contains("<em>"));
    }
}
