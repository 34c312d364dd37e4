use crate::dom;
use crate::headline::Headline;
use crate::render::RenderTargets;
use crate::style;
use instant::Instant;
use landing_core::{Compositor, FrameClock, FrameScheduler, InputCache};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// `requestAnimationFrame` as a [`FrameClock`]. The callback slot is filled
/// once the section runtime exists; until then requests are no-ops.
pub struct RafClock {
    window: web::Window,
    callback: FrameCallback,
}

impl FrameClock for RafClock {
    type Handle = Option<i32>;

    fn request_frame(&mut self) -> Option<i32> {
        let slot = self.callback.borrow();
        let cb = slot.as_ref()?;
        match self.window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => Some(id),
            Err(e) => {
                log::error!("requestAnimationFrame failed: {:?}", e);
                None
            }
        }
    }

    fn cancel_frame(&mut self, handle: Option<i32>) {
        if let Some(id) = handle {
            _ = self.window.cancel_animation_frame(id);
        }
    }
}

pub struct FrameContext {
    pub scheduler: FrameScheduler<RafClock>,
    pub compositor: Compositor,
    pub input: Rc<RefCell<InputCache>>,
    pub layout_generation: Rc<Cell<u32>>,
    pub seen_generation: Option<u32>,
    pub window: web::Window,
    pub targets: RenderTargets,
    pub headlines: Vec<Headline>,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        let Some(tick) = self.scheduler.tick(dt) else {
            return;
        };

        let generation = self.layout_generation.get();
        if self.seen_generation != Some(generation) {
            self.seen_generation = Some(generation);
            self.anchor_section();
        }

        // copy out so no borrow is held while listeners may fire
        let input = *self.input.borrow();
        let bundle = self.compositor.frame(tick.dt_sec, &input);
        self.targets.apply(&bundle);

        let vh = input.viewport().height;
        for h in &mut self.headlines {
            h.frame(vh);
        }
    }

    fn anchor_section(&mut self) {
        let rect = self.targets.section().get_bounding_client_rect();
        let top = style::document_top(rect.top(), dom::scroll_y(&self.window) as f64);
        if let Err(e) = self.compositor.section_mut().anchor_at(top) {
            log::warn!("[frame] cannot anchor section at {top}: {e}");
        }
    }
}

/// A section with a live frame loop. Dropping it cancels the pending frame,
/// releases the callback and restores the elements.
pub struct FrameLoop {
    ctx: Rc<RefCell<FrameContext>>,
    callback: FrameCallback,
}

impl FrameLoop {
    pub fn start(
        window: web::Window,
        build: impl FnOnce(FrameScheduler<RafClock>) -> FrameContext,
    ) -> Self {
        let callback: FrameCallback = Rc::new(RefCell::new(None));
        let clock = RafClock {
            window,
            callback: callback.clone(),
        };
        let ctx = Rc::new(RefCell::new(build(FrameScheduler::new(clock))));
        // the callback only holds a weak reference, so the loop never keeps
        // its own section alive
        let weak = Rc::downgrade(&ctx);
        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move |_ts: f64| {
            if let Some(ctx) = weak.upgrade() {
                ctx.borrow_mut().frame();
            }
        }) as Box<dyn FnMut(f64)>));
        ctx.borrow_mut().scheduler.start();
        Self { ctx, callback }
    }

    pub fn frames(&self) -> u64 {
        self.ctx.borrow().scheduler.frames()
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let Ok(mut ctx) = self.ctx.try_borrow_mut() {
            ctx.scheduler.stop();
            ctx.targets.reset();
            for h in &mut ctx.headlines {
                h.restore();
            }
        }
        self.callback.borrow_mut().take();
    }
}
