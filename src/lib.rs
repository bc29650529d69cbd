//! Pixelgrid Engine - interactive pixel-grid widget in WASM
//!
//! A rectangular grid of independently colorable, toggleable cells inside a
//! pannable, pinch-zoomable viewport. The JS host owns the canvas; this
//! crate owns cell state, color generation, gesture recognition and the
//! viewport transform.
//!
//! Architecture:
//! - core/     - Grid storage and affine geometry
//! - domain/   - Colors and color strategies
//! - gestures/ - Pointer-stream recognizers (tap, pan, pinch)
//! - widget/   - Orchestration and the wasm facade

pub mod core;
pub mod domain;
pub mod gestures;
pub mod widget;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"🦀 Pixelgrid WASM engine initialized".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use domain::{ColorStrategy, Rainbow, Rgba};
pub use widget::{PixelGrid, PixelGridCore, WidgetOptions};
