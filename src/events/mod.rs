pub mod pointer;
pub mod scroll;

use crate::dom::ListenerGuard;
use landing_core::InputCache;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys as web;

/// Shared state written by the page-wide listeners.
#[derive(Clone)]
pub struct InputWiring {
    pub window: web::Window,
    pub input: Rc<RefCell<InputCache>>,
    /// Bumped on every resize so each section re-measures its position.
    pub layout_generation: Rc<Cell<u32>>,
}

pub fn wire_input_handlers(w: &InputWiring) -> anyhow::Result<Vec<ListenerGuard>> {
    let mut guards = pointer::wire_pointer(w)?;
    guards.extend(scroll::wire_scroll_and_resize(w)?);
    Ok(guards)
}
