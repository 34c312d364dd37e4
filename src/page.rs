use crate::constants::*;
use crate::dom::{self, ListenerGuard};
use crate::events::{self, InputWiring};
use crate::frame::{FrameContext, FrameLoop};
use crate::headline::Headline;
use crate::render::RenderTargets;
use anyhow::anyhow;
use instant::Instant;
use landing_core::{Compositor, InputCache};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys as web;

/// Everything mounted on the current page. Sections are dropped before the
/// listeners that feed them.
pub struct Page {
    sections: Vec<FrameLoop>,
    _listeners: Vec<ListenerGuard>,
}

impl Page {
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }
}

impl Drop for Page {
    fn drop(&mut self) {
        let frames: u64 = self.sections.iter().map(FrameLoop::frames).sum();
        self.sections.clear();
        log::info!("[page] unmounted after {frames} section frames");
    }
}

pub fn mount() -> anyhow::Result<Page> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow!("no document"))?;
    let root = document
        .document_element()
        .ok_or_else(|| anyhow!("no document element"))?;

    let input = Rc::new(RefCell::new(InputCache::new(
        dom::viewport(&window),
        dom::scroll_y(&window),
    )));
    let layout_generation = Rc::new(Cell::new(0u32));
    let listeners = events::wire_input_handlers(&InputWiring {
        window: window.clone(),
        input: input.clone(),
        layout_generation: layout_generation.clone(),
    })?;

    let mut sections = Vec::new();
    for el in dom::query_all_html(&root, SECTION_SELECTOR) {
        // a bad section stays static; the rest of the page is unaffected
        let config = dom::read_section_config(&el);
        let section = match config.compile() {
            Ok(s) => s,
            Err(e) => {
                log::error!("[page] section #{} left static: {e}", el.id());
                continue;
            }
        };
        let headlines: Vec<Headline> = dom::query_all_html(&el, SCRAMBLE_SELECTOR)
            .into_iter()
            .map(Headline::new)
            .collect();
        let targets = RenderTargets::find(&el);
        let ctx_window = window.clone();
        let ctx_input = input.clone();
        let ctx_generation = layout_generation.clone();
        sections.push(FrameLoop::start(window.clone(), move |scheduler| {
            FrameContext {
                scheduler,
                compositor: Compositor::new(section),
                input: ctx_input,
                layout_generation: ctx_generation,
                seen_generation: None,
                window: ctx_window,
                targets,
                headlines,
                last_instant: Instant::now(),
            }
        }));
    }

    // scramble headlines outside any reveal section are not driven
    let stray = dom::query_all_html(&root, SCRAMBLE_SELECTOR)
        .into_iter()
        .filter(|el| el.closest(SECTION_SELECTOR).ok().flatten().is_none())
        .count();
    if stray > 0 {
        log::warn!("[page] {stray} scramble element(s) outside a reveal section");
    }

    log::info!("[page] mounted {} section(s)", sections.len());
    Ok(Page {
        sections,
        _listeners: listeners,
    })
}
