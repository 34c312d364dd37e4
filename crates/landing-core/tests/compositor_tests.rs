// Host-side tests for tilt, reveal and the per-frame pipeline.

use glam::Vec2;
use landing_core::*;

fn make_section() -> Section {
    SectionConfig::default().compile().unwrap()
}

fn desktop() -> Viewport {
    Viewport::new(1920.0, 1080.0)
}

fn inputs(scroll_offset: f32, pointer: Option<Vec2>, viewport: Viewport) -> FrameInputs {
    FrameInputs {
        scroll_offset,
        pointer,
        viewport,
    }
}

#[test]
fn evaluation_is_idempotent() {
    let section = make_section();
    let i = inputs(417.0, Some(Vec2::new(300.0, 900.0)), desktop());
    assert_eq!(section.evaluate(&i), section.evaluate(&i));

    let mut cache = InputCache::new(desktop(), 417.0);
    cache.set_pointer(300.0, 900.0);
    let mut a = Compositor::new(make_section());
    let mut b = Compositor::new(make_section());
    assert_eq!(a.frame(0.016, &cache), b.frame(0.016, &cache));
}

#[test]
fn resting_pose_is_tilted_before_scrolling() {
    let section = make_section();
    let b = section.evaluate(&inputs(0.0, None, desktop()));
    assert_eq!(b.rotate_x, DEFAULT_BASE_X_ROTATION_DEGREES);
    assert_eq!(b.rotate_y, DEFAULT_BASE_Y_ROTATION_DEGREES);
}

#[test]
fn pointer_adds_up_to_max_tilt() {
    let section = make_section();
    let vp = desktop();
    let left_top = section.evaluate(&inputs(0.0, Some(Vec2::new(0.0, 0.0)), vp));
    let right_bottom = section.evaluate(&inputs(0.0, Some(Vec2::new(1920.0, 1080.0)), vp));
    let m = DEFAULT_TILT_MAX_DEGREES;
    assert!((left_top.rotate_y - (DEFAULT_BASE_Y_ROTATION_DEGREES - m)).abs() < 1e-4);
    assert!((left_top.rotate_x - (DEFAULT_BASE_X_ROTATION_DEGREES + m)).abs() < 1e-4);
    assert!((right_bottom.rotate_y - (DEFAULT_BASE_Y_ROTATION_DEGREES + m)).abs() < 1e-4);
    assert!((right_bottom.rotate_x - (DEFAULT_BASE_X_ROTATION_DEGREES - m)).abs() < 1e-4);
}

#[test]
fn tilt_is_gone_at_the_end_of_its_phase() {
    let section = make_section();
    // 0.3 of a 2500 px range
    let at_end = 750.0;
    for (x, y) in [(0.0, 0.0), (960.0, 540.0), (1920.0, 1080.0), (5000.0, -40.0)] {
        for offset in [at_end, 900.0, 2500.0, 10_000.0] {
            let b = section.evaluate(&inputs(offset, Some(Vec2::new(x, y)), desktop()));
            assert_eq!(b.rotate_x, 0.0, "offset={offset} pointer=({x},{y})");
            assert_eq!(b.rotate_y, 0.0, "offset={offset} pointer=({x},{y})");
        }
    }
    let gate = section
        .tilt()
        .fade_gate(Progress::new(DEFAULT_TILT_ACTIVATION_END), desktop());
    assert_eq!(gate, 0.0);
}

#[test]
fn tilt_fades_linearly_inside_its_phase() {
    let section = make_section();
    let gate = section.tilt().fade_gate(Progress::new(0.15), desktop());
    assert!((gate - 0.5).abs() < 1e-5);
}

#[test]
fn narrow_viewport_disables_tilt_when_desktop_only() {
    let section = make_section();
    let phone = Viewport::new(390.0, 844.0);
    for i in 0..=10 {
        for j in 0..=10 {
            let p = Vec2::new(i as f32 * 39.0, j as f32 * 84.4);
            let b = section.evaluate(&inputs(0.0, Some(p), phone));
            assert_eq!(b.rotate_x, 0.0);
            assert_eq!(b.rotate_y, 0.0);
        }
    }
}

#[test]
fn narrow_viewport_keeps_tilt_when_not_desktop_only() {
    let section = SectionConfig {
        desktop_only: false,
        ..Default::default()
    }
    .compile()
    .unwrap();
    let b = section.evaluate(&inputs(0.0, None, Viewport::new(390.0, 844.0)));
    assert_eq!(b.rotate_x, DEFAULT_BASE_X_ROTATION_DEGREES);
}

#[test]
fn unmeasured_viewport_falls_back_to_baseline_tilt() {
    let section = make_section();
    let b = section.evaluate(&inputs(0.0, Some(Vec2::new(10.0, 10.0)), Viewport::default()));
    assert_eq!(b.rotate_x, DEFAULT_BASE_X_ROTATION_DEGREES);
    assert_eq!(b.rotate_y, DEFAULT_BASE_Y_ROTATION_DEGREES);
    assert!(b.rotate_x.is_finite() && b.rotate_y.is_finite());
    assert_eq!(b.mask_diameter_px, 0.0);
}

#[test]
fn mask_covers_the_viewport_when_fully_revealed() {
    let section = make_section();
    for (w, h) in [(1920.0, 1080.0), (390.0, 844.0), (3840.0, 600.0), (500.0, 3000.0), (1.0, 1.0)] {
        let vp = Viewport::new(w, h);
        let reveal_end_px = DEFAULT_REVEAL_END * DEFAULT_SCROLL_LENGTH_PX;
        let b = section.evaluate(&inputs(reveal_end_px, None, vp));
        assert_eq!(b.video_progress, 1.0);
        assert!(
            b.mask_diameter_px >= vp.diagonal(),
            "{w}x{h}: {} < diagonal",
            b.mask_diameter_px
        );
    }
}

#[test]
fn mask_grows_monotonically_with_scroll() {
    let section = make_section();
    let mut prev = 0.0;
    for offset in (0..=2500).step_by(25) {
        let b = section.evaluate(&inputs(offset as f32, None, desktop()));
        assert!(b.mask_diameter_px >= prev);
        prev = b.mask_diameter_px;
    }
}

#[test]
fn reveal_scenario_on_a_1080p_viewport() {
    let section = make_section();
    let vp = desktop();
    let b = section.evaluate(&inputs(625.0, None, vp));
    assert!((b.outer_progress - 0.25).abs() < 1e-6);

    let seed = section.reveal().seed_size(vp);
    let cover = section.reveal().cover_size(vp);
    let fraction = (b.mask_diameter_px - seed) / (cover - seed);
    assert!((fraction - 0.25 / 0.6).abs() < 1e-4);
    assert!((fraction - 0.42).abs() < 0.01);
}

#[test]
fn seed_size_switches_at_the_breakpoint() {
    let section = make_section();
    let r = section.reveal();
    assert_eq!(r.seed_size(Viewport::new(767.0, 900.0)), DEFAULT_SEED_SIZE_NARROW_PX);
    assert_eq!(r.seed_size(Viewport::new(768.0, 900.0)), DEFAULT_SEED_SIZE_WIDE_PX);
    let b = section.evaluate(&inputs(0.0, None, Viewport::new(400.0, 800.0)));
    assert_eq!(b.mask_diameter_px, DEFAULT_SEED_SIZE_NARROW_PX);
}

#[test]
fn overlay_dims_only_in_the_last_phase() {
    let section = make_section();
    let vp = desktop();
    let before = section.evaluate(&inputs(1400.0, None, vp));
    assert_eq!(before.overlay_opacity, 0.0);
    let mid = section.evaluate(&inputs(2000.0, None, vp));
    assert!((mid.overlay_opacity - DEFAULT_MAX_OVERLAY_OPACITY * 0.5).abs() < 1e-4);
    let after = section.evaluate(&inputs(9000.0, None, vp));
    assert_eq!(after.overlay_opacity, DEFAULT_MAX_OVERLAY_OPACITY);
}

#[test]
fn video_scale_settles_at_one() {
    let section = make_section();
    let start = section.evaluate(&inputs(0.0, None, desktop()));
    assert_eq!(start.video_playback_scale, DEFAULT_VIDEO_SCALE_START);
    let end = section.evaluate(&inputs(2500.0, None, desktop()));
    assert_eq!(end.video_playback_scale, 1.0);
}

#[test]
fn anchored_section_measures_from_its_top() {
    let mut section = make_section();
    section.anchor_at(1000.0).unwrap();
    let b = section.evaluate(&inputs(1625.0, None, desktop()));
    assert!((b.outer_progress - 0.25).abs() < 1e-6);
}

#[test]
fn compositor_keeps_last_mask_while_viewport_is_unknown() {
    let mut comp = Compositor::new(make_section());
    let mut cache = InputCache::new(desktop(), 625.0);
    let measured = comp.frame(0.016, &cache);
    assert!(measured.mask_diameter_px > 0.0);

    cache.set_viewport(Viewport::default());
    let unmeasured = comp.frame(0.016, &cache);
    assert_eq!(unmeasured.mask_diameter_px, measured.mask_diameter_px);
}

#[test]
fn compositor_eases_toward_new_scroll_target() {
    let mut comp = Compositor::new(make_section());
    let mut cache = InputCache::new(desktop(), 0.0);
    comp.frame(0.016, &cache);

    cache.set_scroll_offset(1000.0);
    let first = comp.frame(1.0 / 60.0, &cache);
    assert!(first.outer_progress > 0.0);
    assert!(first.outer_progress < 0.4);

    for _ in 0..600 {
        comp.frame(1.0 / 60.0, &cache);
    }
    assert!(comp.smooth_scroll().is_settled());
    let settled = comp.frame(1.0 / 60.0, &cache);
    assert!((settled.outer_progress - 0.4).abs() < 1e-6);
}
