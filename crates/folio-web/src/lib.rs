//! Browser entry point for the folio portfolio page
//!
//! Loaded as a wasm module; `start` runs once the module is instantiated and
//! wires the page in the live document.
//!
//! ## Module Structure
//!
//! - `dom` - [`Surface`](folio_core::Surface) implementation over `web_sys`
//! - `layout` - Geometry sampling and hobby block sizing
//! - `site` - Event listeners and the `requestAnimationFrame` loop
//! - `util` - Console logging

mod dom;
mod layout;
mod site;
mod util;

use wasm_bindgen::prelude::*;

pub use dom::DomSurface;

/// Module entry point
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Set up panic hook for better error messages
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    util::init_logger();
    site::mount().inspect_err(|err| log::error!("[site] startup failed: {:?}", err))
}
