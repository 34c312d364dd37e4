// Host-side tests for the frame scheduler and smooth-scroll emulation.

use landing_core::*;
use std::time::Duration;

const FRAME: Duration = Duration::from_millis(16);

/// Play the display refresh `n` times, counting callbacks that produced a tick.
fn pump(sched: &mut FrameScheduler<&mut ManualClock>, n: usize, counter: &mut u32) {
    for _ in 0..n {
        if sched.clock_mut().fire() && sched.tick(FRAME).is_some() {
            *counter += 1;
        }
    }
}

#[test]
fn scheduler_starts_idle_and_requests_one_frame_on_start() {
    let mut clock = ManualClock::new();
    let mut sched = FrameScheduler::new(&mut clock);
    assert_eq!(sched.state(), SchedulerState::Idle);
    assert!(!sched.has_pending());
    assert_eq!(sched.tick(FRAME), None);

    sched.start();
    assert_eq!(sched.state(), SchedulerState::Running);
    assert!(sched.has_pending());
    assert_eq!(sched.clock().requests(), 1);

    // starting twice does not double-post
    sched.start();
    assert_eq!(sched.clock().requests(), 1);
}

#[test]
fn scheduler_reposts_every_frame() {
    let mut clock = ManualClock::new();
    let mut counter = 0;
    {
        let mut sched = FrameScheduler::new(&mut clock);
        sched.start();
        pump(&mut sched, 10, &mut counter);
        assert_eq!(sched.frames(), 10);
        assert!(sched.has_pending());
    }
    assert_eq!(counter, 10);
    assert_eq!(clock.requests(), 11);
}

#[test]
fn no_frames_fire_after_stop() {
    let mut clock = ManualClock::new();
    let mut counter = 0;
    let mut sched = FrameScheduler::new(&mut clock);
    sched.start();
    pump(&mut sched, 5, &mut counter);
    assert_eq!(counter, 5);

    sched.stop();
    assert_eq!(sched.state(), SchedulerState::Stopped);
    assert!(!sched.has_pending());
    assert_eq!(sched.clock().pending(), None);
    assert_eq!(sched.clock().cancels(), 1);

    pump(&mut sched, 5, &mut counter);
    assert_eq!(counter, 5);
    // a stray callback after teardown is ignored too
    assert_eq!(sched.tick(FRAME), None);

    // stopped is terminal
    sched.start();
    assert_eq!(sched.state(), SchedulerState::Stopped);
    assert_eq!(sched.clock().requests(), 6);
}

#[test]
fn dropping_a_running_scheduler_cancels_its_request() {
    let mut clock = ManualClock::new();
    {
        let mut sched = FrameScheduler::new(&mut clock);
        sched.start();
        let mut counter = 0;
        pump(&mut sched, 3, &mut counter);
    }
    assert_eq!(clock.pending(), None);
    assert_eq!(clock.cancels(), 1);
    assert!(!clock.fire());
}

#[test]
fn dropping_an_idle_scheduler_cancels_nothing() {
    let mut clock = ManualClock::new();
    drop(FrameScheduler::new(&mut clock));
    assert_eq!(clock.cancels(), 0);
    assert_eq!(clock.requests(), 0);
}

#[test]
fn long_frames_are_capped() {
    let mut clock = ManualClock::new();
    let mut sched = FrameScheduler::new(&mut clock);
    sched.start();
    let tick = sched.tick(Duration::from_secs(5)).unwrap();
    assert_eq!(tick.index, 1);
    assert!((tick.dt_sec - MAX_FRAME_DT.as_secs_f32()).abs() < 1e-6);
}

#[test]
fn smooth_scroll_snaps_on_first_frame() {
    let mut s = SmoothScroll::new(0.1);
    s.set_target(1200.0);
    assert_eq!(s.advance(0.016), 1200.0);
    assert!(s.is_settled());
}

#[test]
fn smooth_scroll_converges_without_overshoot() {
    let mut s = SmoothScroll::new(0.1);
    s.advance(0.0);
    s.set_target(500.0);
    let mut prev = s.current();
    for _ in 0..400 {
        let v = s.advance(1.0 / 60.0);
        assert!(v >= prev && v <= 500.0);
        prev = v;
    }
    assert!(s.is_settled());
    assert_eq!(s.current(), 500.0);
}

#[test]
fn smooth_scroll_is_frame_rate_independent() {
    let mut a = SmoothScroll::new(0.15);
    let mut b = SmoothScroll::new(0.15);
    a.advance(0.0);
    b.advance(0.0);
    a.set_target(1000.0);
    b.set_target(1000.0);
    a.advance(1.0 / 60.0);
    b.advance(1.0 / 120.0);
    b.advance(1.0 / 120.0);
    assert!((a.current() - b.current()).abs() < 0.05);
}

#[test]
fn smooth_scroll_ignores_non_finite_targets() {
    let mut s = SmoothScroll::new(0.1);
    s.set_target(300.0);
    s.set_target(f32::NAN);
    assert_eq!(s.target(), 300.0);
}
