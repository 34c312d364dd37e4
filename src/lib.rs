#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod constants;
mod dom;
mod events;
mod frame;
mod headline;
mod page;
mod render;
mod style;

thread_local! {
    static PAGE: RefCell<Option<page::Page>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("landing-fx starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let page = page::mount()?;
    log::info!("[init] {} scroll-reactive section(s) live", page.section_count());
    PAGE.with(|p| *p.borrow_mut() = Some(page));
    Ok(())
}

/// Tear down every section: frame loops cancelled, listeners removed,
/// elements restored. Call before the host page removes the markup.
#[wasm_bindgen]
pub fn unmount() {
    let page = PAGE.with(|p| p.borrow_mut().take());
    drop(page);
}

/// Re-scan the document, e.g. after client-side navigation swapped the markup.
#[wasm_bindgen]
pub fn remount() -> Result<(), JsValue> {
    unmount();
    let page = page::mount().map_err(|e| JsValue::from_str(&format!("{e:?}")))?;
    PAGE.with(|p| *p.borrow_mut() = Some(page));
    Ok(())
}
