//! PixelGrid widget - orchestration only
//!
//! Owns the cell grid, the color strategy, the viewport transform and the
//! gesture recognizers, and wires them together:
//! - tap    -> flip one cell's toggle state, recolor that cell only
//! - pan    -> translate the viewport transform
//! - pinch  -> scale the viewport transform about the pinch centroid,
//!             cumulative scale clamped to [min_scale, max_scale]
//! - layout -> full repaint of every cell
//!
//! Transform mutations never touch cell state; state mutations never touch
//! the transform. All methods run synchronously on the host's event thread.

use crate::core::grid::CellGrid;
use crate::core::transform::{CellMapping, Transform2D};
use crate::domain::strategy::ColorStrategy;
use crate::gestures::{GestureEvent, GesturePhase, GestureSet};

mod facade;
pub mod options;

pub use facade::PixelGrid;
pub use options::WidgetOptions;

/// Result of feeding one pointer event through the widget
///
/// Purely informational; the widget has already applied all effects.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputOutcome {
    pub toggled_cell: bool,
    pub transform_changed: bool,
}

/// The widget core: fully host-agnostic, drives all observable behavior
pub struct PixelGridCore {
    strategy: Box<dyn ColorStrategy>,
    grid: CellGrid,
    viewport: Transform2D,
    gestures: GestureSet,

    // Layout
    bounds_w: f32,
    bounds_h: f32,

    // Settings
    min_scale: f32,
    max_scale: f32,

    // Gesture scratch: valid only between a gesture's start and end
    last_scale: f32,
    last_position: (f32, f32),

    // Repaint hints for the host
    dirty_cell: Option<usize>,
    full_repaint: bool,
    transform_dirty: bool,
}

impl PixelGridCore {
    /// Create a grid sized from the strategy's intrinsic dimensions
    pub fn new(strategy: Box<dyn ColorStrategy>) -> Self {
        let width = strategy.width();
        let height = strategy.height();
        Self::build(strategy, width, height, &WidgetOptions::default())
    }

    pub fn with_options(options: &WidgetOptions) -> Result<Self, String> {
        let strategy = options.build_strategy()?;
        let width = options.width.unwrap_or_else(|| strategy.width());
        let height = options.height.unwrap_or_else(|| strategy.height());

        // Re-checked here because a one-sided override combines with the
        // strategy's intrinsic size, which validate() cannot see.
        let cells = width as u64 * height as u64;
        if cells == 0 {
            return Err("grid dimensions must be positive".to_string());
        }
        if cells > options::MAX_CELLS {
            return Err(format!(
                "{}x{} grid exceeds {} cells",
                width,
                height,
                options::MAX_CELLS
            ));
        }

        Ok(Self::build(strategy, width, height, options))
    }

    fn build(
        strategy: Box<dyn ColorStrategy>,
        width: u32,
        height: u32,
        options: &WidgetOptions,
    ) -> Self {
        let mut core = Self {
            grid: CellGrid::new(width, height),
            strategy,
            viewport: Transform2D::identity(),
            gestures: GestureSet::new(options.tap_slop),
            bounds_w: 0.0,
            bounds_h: 0.0,
            min_scale: options.min_scale,
            max_scale: options.max_scale,
            last_scale: 1.0,
            last_position: (0.0, 0.0),
            dirty_cell: None,
            full_repaint: false,
            transform_dirty: false,
        };
        // Toggle and color arrays are populated together, once, here.
        core.repaint_all();
        core
    }

    // === Dimensions & state ===
    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    pub fn height(&self) -> u32 {
        self.grid.height()
    }

    pub fn grid(&self) -> &CellGrid {
        &self.grid
    }

    pub fn viewport(&self) -> Transform2D {
        self.viewport
    }

    pub fn is_toggled(&self, x: u32, y: u32) -> bool {
        self.grid.in_bounds(x as i32, y as i32) && self.grid.is_toggled(x, y)
    }

    // === Layout ===

    /// Report new on-screen bounds. The only full O(width*height) repaint.
    pub fn set_bounds(&mut self, width: f32, height: f32) {
        self.bounds_w = width;
        self.bounds_h = height;
        self.repaint_all();
        self.full_repaint = true;
    }

    /// Cell -> local-pixel mapping, rebuilt from current bounds per query
    /// so it always reflects the latest layout. None while bounds are
    /// degenerate (host has not laid the widget out yet).
    pub fn cell_mapping(&self) -> Option<CellMapping> {
        CellMapping::from_bounds(self.bounds_w, self.bounds_h, self.grid.width(), self.grid.height())
    }

    // === Pointer input ===

    pub fn pointer_down(&mut self, id: u32, x: f32, y: f32) -> InputOutcome {
        let events = self.gestures.pointer_down(id, x, y);
        self.dispatch(events)
    }

    pub fn pointer_move(&mut self, id: u32, x: f32, y: f32) -> InputOutcome {
        let events = self.gestures.pointer_move(id, x, y);
        self.dispatch(events)
    }

    pub fn pointer_up(&mut self, id: u32, x: f32, y: f32) -> InputOutcome {
        let events = self.gestures.pointer_up(id, x, y);
        self.dispatch(events)
    }

    pub fn pointer_cancel(&mut self, id: u32, x: f32, y: f32) -> InputOutcome {
        let events = self.gestures.pointer_cancel(id, x, y);
        self.dispatch(events)
    }

    /// Drop all gesture state (host lost pointer capture)
    pub fn cancel_all_gestures(&mut self) {
        self.gestures.reset();
    }

    fn dispatch(&mut self, events: Vec<GestureEvent>) -> InputOutcome {
        let mut outcome = InputOutcome::default();
        for event in events {
            match event {
                GestureEvent::Tap { x, y } => {
                    outcome.toggled_cell |= self.handle_tap(x, y);
                }
                GestureEvent::Pan { phase, x, y } => {
                    outcome.transform_changed |= self.handle_pan(phase, x, y);
                }
                GestureEvent::Pinch { phase, scale, x, y } => {
                    outcome.transform_changed |= self.handle_pinch(phase, scale, x, y);
                }
            }
        }
        outcome
    }

    // === Gesture handlers ===

    /// Tap: inverse-map the release point, flip that cell, recolor it.
    /// Out-of-range taps are ignored rather than clamped.
    fn handle_tap(&mut self, x: f32, y: f32) -> bool {
        let mapping = match self.cell_mapping() {
            Some(m) => m,
            None => return false,
        };
        let (cx, cy) = mapping.cell_at(x, y);
        if !self.grid.in_bounds(cx, cy) {
            return false;
        }

        let (cx, cy) = (cx as u32, cy as u32);
        let enabled = self.grid.flip(cx, cy);
        self.paint_cell(cx, cy, enabled);
        self.dirty_cell = Some(self.grid.index(cx, cy));
        true
    }

    /// Pan: append each drag delta to the viewport translation
    fn handle_pan(&mut self, phase: GesturePhase, x: f32, y: f32) -> bool {
        match phase {
            GesturePhase::Began => {
                self.last_position = (x, y);
                false
            }
            GesturePhase::Changed => {
                let dx = x - self.last_position.0;
                let dy = y - self.last_position.1;
                self.viewport.translate_by(dx, dy);
                self.last_position = (x, y);
                self.transform_dirty = true;
                true
            }
            // No snap-back, no momentum: the transform stays as last computed.
            GesturePhase::Ended | GesturePhase::Cancelled => false,
        }
    }

    /// Pinch: scale about the centroid, keeping it visually fixed, and
    /// follow the centroid's own drift as a drag
    fn handle_pinch(&mut self, phase: GesturePhase, scale: f32, x: f32, y: f32) -> bool {
        match phase {
            GesturePhase::Began => {
                self.last_scale = scale;
                self.last_position = (x, y);
                self.apply_pinch(scale, x, y)
            }
            GesturePhase::Changed => self.apply_pinch(scale, x, y),
            GesturePhase::Ended | GesturePhase::Cancelled => false,
        }
    }

    fn apply_pinch(&mut self, scale: f32, x: f32, y: f32) -> bool {
        // Cumulative scale read straight from the transform's stored
        // component; the clamp keeps the post-gesture value in range.
        let current = self.viewport.scale;
        if current <= 0.0 {
            return false;
        }

        let new_scale = (1.0 - (self.last_scale - scale))
            .clamp(self.min_scale / current, self.max_scale / current);

        let dx = x - self.last_position.0;
        let dy = y - self.last_position.1;

        self.last_scale = scale;
        self.last_position = (x, y);

        // A Began sample, or a Changed sample with no drift, leaves the
        // transform untouched; the host gets no repaint hint for it.
        if new_scale == 1.0 && dx == 0.0 && dy == 0.0 {
            return false;
        }

        // Pinch center relative to the bounds center, the frame the host
        // applies the transform in.
        let cx = x - self.bounds_w / 2.0;
        let cy = y - self.bounds_h / 2.0;

        self.viewport.scale_about(new_scale, cx, cy);
        self.viewport.translate_by(dx, dy);

        self.transform_dirty = true;
        true
    }

    // === Painting ===

    fn paint_cell(&mut self, x: u32, y: u32, enabled: bool) {
        let color = self.strategy.color(x, y, enabled).packed_abgr();
        self.grid.set_color(x, y, color);
    }

    fn repaint_all(&mut self) {
        for idx in 0..self.grid.size() {
            let (x, y) = self.grid.coords(idx);
            let enabled = self.grid.toggled[idx] == 1;
            self.grid.colors[idx] = self.strategy.color(x, y, enabled).packed_abgr();
        }
    }

    // === Repaint hints for the host ===

    /// Index of the single cell repainted by the last tap, if any
    pub fn take_dirty_cell(&mut self) -> Option<usize> {
        self.dirty_cell.take()
    }

    pub fn take_full_repaint(&mut self) -> bool {
        std::mem::take(&mut self.full_repaint)
    }

    pub fn take_transform_dirty(&mut self) -> bool {
        std::mem::take(&mut self.transform_dirty)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
