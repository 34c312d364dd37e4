use super::InputWiring;
use crate::dom::ListenerGuard;
use crate::style::is_ignored_pointer;
use wasm_bindgen::JsCast;

pub fn wire_pointer(w: &InputWiring) -> anyhow::Result<Vec<ListenerGuard>> {
    Ok(vec![wire_pointermove(w)?, wire_pointerleave(w)?])
}

fn wire_pointermove(w: &InputWiring) -> anyhow::Result<ListenerGuard> {
    let input = w.input.clone();
    ListenerGuard::add(w.window.as_ref(), "pointermove", move |ev| {
        let Some(ev) = ev.dyn_ref::<web_sys::PointerEvent>() else {
            return;
        };
        // touch and pen never synthesise a tilt
        if is_ignored_pointer(&ev.pointer_type()) {
            return;
        }
        input
            .borrow_mut()
            .set_pointer(ev.client_x() as f32, ev.client_y() as f32);
    })
}

fn wire_pointerleave(w: &InputWiring) -> anyhow::Result<ListenerGuard> {
    let input = w.input.clone();
    let target = match w.window.document().and_then(|d| d.document_element()) {
        Some(root) => root.unchecked_into::<web_sys::EventTarget>(),
        None => w.window.clone().unchecked_into::<web_sys::EventTarget>(),
    };
    ListenerGuard::add(&target, "pointerleave", move |_| {
        input.borrow_mut().clear_pointer();
    })
}
