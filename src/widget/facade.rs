//! wasm-bindgen facade over the widget core
//!
//! The host owns the canvas and the DOM; it forwards pointer events in
//! widget-local (untransformed) coordinates, applies the viewport transform
//! it reads back from here as a canvas/CSS transform about the bounds
//! center, and blits cell colors straight out of wasm memory via
//! `colors_ptr` + ImageData.

use wasm_bindgen::prelude::*;

use super::{PixelGridCore, WidgetOptions};
use crate::domain::strategy::Rainbow;

#[wasm_bindgen]
pub struct PixelGrid {
    core: PixelGridCore,
}

#[wasm_bindgen]
impl PixelGrid {
    /// Default widget: rainbow strategy, grid sized from its intrinsic
    /// 100x100, scale clamp [1, 10]
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            core: PixelGridCore::new(Box::new(Rainbow::default())),
        }
    }

    /// Construct from a JSON options object; rejects unknown strategies
    /// and invalid ranges
    #[wasm_bindgen(js_name = withOptions)]
    pub fn with_options(json: &str) -> Result<PixelGrid, JsValue> {
        let options = WidgetOptions::from_json(json).map_err(|e| JsValue::from_str(&e))?;
        let core = PixelGridCore::with_options(&options).map_err(|e| JsValue::from_str(&e))?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.core.width()
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.core.height()
    }

    // === Layout ===

    /// Report the widget's on-screen bounds; triggers the full repaint
    pub fn set_bounds(&mut self, width: f32, height: f32) {
        self.core.set_bounds(width, height);
    }

    // === Pointer input (widget-local coordinates) ===

    pub fn pointer_down(&mut self, id: u32, x: f32, y: f32) {
        self.core.pointer_down(id, x, y);
    }

    pub fn pointer_move(&mut self, id: u32, x: f32, y: f32) {
        self.core.pointer_move(id, x, y);
    }

    pub fn pointer_up(&mut self, id: u32, x: f32, y: f32) {
        self.core.pointer_up(id, x, y);
    }

    pub fn pointer_cancel(&mut self, id: u32, x: f32, y: f32) {
        self.core.pointer_cancel(id, x, y);
    }

    /// Drop all in-flight gestures (call on blur / lost pointer capture)
    pub fn cancel_all_gestures(&mut self) {
        self.core.cancel_all_gestures();
    }

    // === Viewport transform (host applies about the bounds center) ===

    #[wasm_bindgen(getter)]
    pub fn scale(&self) -> f32 {
        self.core.viewport().scale
    }

    #[wasm_bindgen(getter)]
    pub fn translate_x(&self) -> f32 {
        self.core.viewport().tx
    }

    #[wasm_bindgen(getter)]
    pub fn translate_y(&self) -> f32 {
        self.core.viewport().ty
    }

    /// [scale, tx, ty] in one call, for hosts that poll per frame
    pub fn transform_components(&self) -> js_sys::Float32Array {
        let t = self.core.viewport();
        js_sys::Float32Array::from(&[t.scale, t.tx, t.ty][..])
    }

    // === Cell state ===

    /// Toggle state at (x, y); false for out-of-range coordinates
    pub fn is_toggled(&self, x: u32, y: u32) -> bool {
        self.core.is_toggled(x, y)
    }

    // === Color buffer (for JS rendering) ===

    pub fn colors_ptr(&self) -> *const u32 {
        self.core.grid().colors_ptr()
    }

    pub fn colors_len_elements(&self) -> usize {
        self.core.grid().size()
    }

    pub fn colors_len_bytes(&self) -> usize {
        self.core.grid().size() * std::mem::size_of::<u32>()
    }

    // === Repaint hints ===

    /// Row-major index of the cell repainted by the last tap, or -1
    pub fn take_dirty_cell(&mut self) -> i32 {
        match self.core.take_dirty_cell() {
            Some(idx) => idx as i32,
            None => -1,
        }
    }

    pub fn take_full_repaint(&mut self) -> bool {
        self.core.take_full_repaint()
    }

    pub fn take_transform_dirty(&mut self) -> bool {
        self.core.take_transform_dirty()
    }
}

impl Default for PixelGrid {
    fn default() -> Self {
        Self::new()
    }
}
