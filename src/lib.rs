//! Before/after image comparison sliders.
//!
//! Each element matching the container selector gets a draggable divider
//! that reveals the "after" layer up to the pointer position. Rendering is
//! throttled to one update per animation frame and per slider.

mod boot;
mod dom;
mod frames;
mod input;
mod page;
mod runtime;

use wasm_bindgen::prelude::*;

pub use dom::{BindError, DomSurface};
pub use frames::RafScheduler;
pub use page::{DomController, SliderPage, BOUND_ATTR, POSITION_ATTR};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    init_sliders();
}

/// Binds every unbound container on the page and returns how many were
/// newly bound. The first call reads the page config.
#[wasm_bindgen(js_name = initSliders)]
pub fn init_sliders() -> u32 {
    if let Some(bound) = runtime::with_page(SliderPage::rescan) {
        return bound as u32;
    }
    let Some(root) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
    else {
        return 0;
    };
    let page = SliderPage::mount(&root, boot::load_page_config());
    let bound = page.len() as u32;
    runtime::install(page);
    bound
}

/// Unbinds every slider and cancels pending frames. Returns whether
/// anything was bound.
#[wasm_bindgen]
pub fn teardown() -> bool {
    runtime::clear()
}
