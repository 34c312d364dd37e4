//! Per-frame loop state machine.
//!
//! `Idle -> Running` on [`FrameScheduler::start`], `Running` re-posts one
//! frame request per tick, and `Running -> Stopped` on [`FrameScheduler::stop`]
//! or drop. Stopping cancels the outstanding request so no callback can fire
//! against a torn-down view.

use std::time::Duration;

/// Longest frame step fed to the pipeline; a backgrounded tab would
/// otherwise report seconds between frames.
pub const MAX_FRAME_DT: Duration = Duration::from_millis(100);

/// Source of display-refresh callbacks.
pub trait FrameClock {
    type Handle;

    /// Ask for one callback on the next refresh.
    fn request_frame(&mut self) -> Self::Handle;

    /// Withdraw a request made with [`FrameClock::request_frame`].
    fn cancel_frame(&mut self, handle: Self::Handle);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchedulerState {
    Idle,
    Running,
    Stopped,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameTick {
    pub index: u64,
    pub dt_sec: f32,
}

pub struct FrameScheduler<C: FrameClock> {
    clock: C,
    state: SchedulerState,
    pending: Option<C::Handle>,
    frames: u64,
}

impl<C: FrameClock> FrameScheduler<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            state: SchedulerState::Idle,
            pending: None,
            frames: 0,
        }
    }

    pub fn start(&mut self) {
        if self.state != SchedulerState::Idle {
            return;
        }
        self.state = SchedulerState::Running;
        self.pending = Some(self.clock.request_frame());
        log::info!("[scheduler] running");
    }

    /// Handle one refresh callback. Returns `None` unless running.
    pub fn tick(&mut self, dt: Duration) -> Option<FrameTick> {
        if self.state != SchedulerState::Running {
            return None;
        }
        // the request that delivered this callback is spent
        self.pending = None;
        self.frames += 1;
        let tick = FrameTick {
            index: self.frames,
            dt_sec: dt.min(MAX_FRAME_DT).as_secs_f32(),
        };
        self.pending = Some(self.clock.request_frame());
        Some(tick)
    }

    pub fn stop(&mut self) {
        if self.state == SchedulerState::Stopped {
            return;
        }
        if let Some(handle) = self.pending.take() {
            self.clock.cancel_frame(handle);
        }
        let was_running = self.state == SchedulerState::Running;
        self.state = SchedulerState::Stopped;
        if was_running {
            log::info!("[scheduler] stopped after {} frames", self.frames);
        }
    }

    #[inline]
    pub fn state(&self) -> SchedulerState {
        self.state
    }

    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    #[inline]
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }
}

impl<C: FrameClock> Drop for FrameScheduler<C> {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Clock driven by hand: tests and the headless driver call
/// [`ManualClock::fire`] to play the role of the display refresh.
#[derive(Debug, Default)]
pub struct ManualClock {
    next_id: u32,
    pending: Option<u32>,
    requests: u32,
    cancels: u32,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the outstanding request, if any. `true` means a frame is due.
    pub fn fire(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn pending(&self) -> Option<u32> {
        self.pending
    }

    pub fn requests(&self) -> u32 {
        self.requests
    }

    pub fn cancels(&self) -> u32 {
        self.cancels
    }
}

impl FrameClock for ManualClock {
    type Handle = u32;

    fn request_frame(&mut self) -> u32 {
        self.next_id += 1;
        self.requests += 1;
        self.pending = Some(self.next_id);
        self.next_id
    }

    fn cancel_frame(&mut self, handle: u32) {
        self.cancels += 1;
        if self.pending == Some(handle) {
            self.pending = None;
        }
    }
}

impl<C: FrameClock + ?Sized> FrameClock for &mut C {
    type Handle = C::Handle;

    fn request_frame(&mut self) -> Self::Handle {
        (**self).request_frame()
    }

    fn cancel_frame(&mut self, handle: Self::Handle) {
        (**self).cancel_frame(handle)
    }
}
