use super::InputWiring;
use crate::dom::{self, ListenerGuard};

pub fn wire_scroll_and_resize(w: &InputWiring) -> anyhow::Result<Vec<ListenerGuard>> {
    let scroll = {
        let window = w.window.clone();
        let input = w.input.clone();
        ListenerGuard::add(w.window.as_ref(), "scroll", move |_| {
            input.borrow_mut().set_scroll_offset(dom::scroll_y(&window));
        })?
    };
    let resize = {
        let window = w.window.clone();
        let input = w.input.clone();
        let generation = w.layout_generation.clone();
        ListenerGuard::add(w.window.as_ref(), "resize", move |_| {
            input.borrow_mut().set_viewport(dom::viewport(&window));
            generation.set(generation.get().wrapping_add(1));
        })?
    };
    Ok(vec![scroll, resize])
}
