//! Viewport transform and cell-space mapping
//!
//! Two separate affine maps, never mixed:
//! - `Transform2D`: the pan/zoom transform for the whole grid, applied by the
//!   host about the bounds center. Mutated only by pan/pinch handlers.
//! - `CellMapping`: cell coordinate -> local pixel space, rebuilt from the
//!   current bounds on every query so it always reflects the latest layout.

/// Uniform-scale + translation affine transform (the viewport transform)
///
/// The cumulative scale is stored directly as a component, so reading it back
/// never needs to be recovered from a matrix.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform2D {
    pub scale: f32,
    pub tx: f32,
    pub ty: f32,
}

impl Transform2D {
    pub fn identity() -> Self {
        Self {
            scale: 1.0,
            tx: 0.0,
            ty: 0.0,
        }
    }

    /// Append a translation (screen-space delta)
    #[inline]
    pub fn translate_by(&mut self, dx: f32, dy: f32) {
        self.tx += dx;
        self.ty += dy;
    }

    /// Scale by `factor` about a point given relative to the bounds center
    ///
    /// Keeps whatever is currently under `(cx, cy)` visually fixed:
    /// t' = factor * t + (1 - factor) * c.
    #[inline]
    pub fn scale_about(&mut self, factor: f32, cx: f32, cy: f32) {
        self.tx = factor * self.tx + (1.0 - factor) * cx;
        self.ty = factor * self.ty + (1.0 - factor) * cy;
        self.scale *= factor;
    }
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::identity()
    }
}

/// Cell -> pixel scale for the current bounds (`fromStrategySpace`)
///
/// Pure function of on-screen bounds and fixed grid dimensions. No
/// translation component; the viewport transform composes on top.
#[derive(Clone, Copy, Debug)]
pub struct CellMapping {
    pub sx: f32,
    pub sy: f32,
}

impl CellMapping {
    /// Build the mapping, or `None` when bounds are degenerate (zero-sized
    /// bounds would otherwise put division by zero on the tap path)
    pub fn from_bounds(bounds_w: f32, bounds_h: f32, grid_w: u32, grid_h: u32) -> Option<Self> {
        if bounds_w <= 0.0 || bounds_h <= 0.0 || grid_w == 0 || grid_h == 0 {
            return None;
        }
        Some(Self {
            sx: bounds_w / grid_w as f32,
            sy: bounds_h / grid_h as f32,
        })
    }

    /// Inverse-map a local pixel position to a cell coordinate (floored)
    #[inline]
    pub fn cell_at(&self, px: f32, py: f32) -> (i32, i32) {
        ((px / self.sx).floor() as i32, (py / self.sy).floor() as i32)
    }

    /// Pixel-space rectangle of one unit cell: (x, y, w, h)
    #[inline]
    pub fn cell_rect(&self, x: u32, y: u32) -> (f32, f32, f32, f32) {
        (x as f32 * self.sx, y as f32 * self.sy, self.sx, self.sy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pan_round_trip_restores_translation() {
        let mut t = Transform2D::identity();
        t.translate_by(37.5, -12.0);
        t.translate_by(-37.5, 12.0);
        assert_eq!(t, Transform2D::identity());
    }

    #[test]
    fn scale_about_keeps_anchor_point_fixed() {
        let mut t = Transform2D::identity();
        t.translate_by(10.0, 5.0);

        // Point p (relative to bounds center) currently shown at s*p + t.
        let p = (20.0_f32, -8.0_f32);
        let before = (t.scale * p.0 + t.tx, t.scale * p.1 + t.ty);

        t.scale_about(2.5, before.0, before.1);

        let after = (t.scale * p.0 + t.tx, t.scale * p.1 + t.ty);
        assert!((after.0 - before.0).abs() < 1e-4);
        assert!((after.1 - before.1).abs() < 1e-4);
        assert!((t.scale - 2.5).abs() < 1e-6);
    }

    #[test]
    fn mapping_rejects_degenerate_bounds() {
        assert!(CellMapping::from_bounds(0.0, 100.0, 10, 10).is_none());
        assert!(CellMapping::from_bounds(100.0, -1.0, 10, 10).is_none());
        assert!(CellMapping::from_bounds(100.0, 100.0, 0, 10).is_none());
    }

    #[test]
    fn mapping_floors_to_cell_coordinates() {
        let m = CellMapping::from_bounds(200.0, 200.0, 100, 100).unwrap();
        assert_eq!(m.cell_at(50.0, 50.0), (25, 25));
        assert_eq!(m.cell_at(0.0, 0.0), (0, 0));
        assert_eq!(m.cell_at(199.9, 199.9), (99, 99));
        // Negative positions floor below zero, not toward it.
        assert_eq!(m.cell_at(-0.5, 3.0), (-1, 1));
    }

    #[test]
    fn cell_rect_tiles_the_bounds() {
        let m = CellMapping::from_bounds(300.0, 150.0, 100, 50).unwrap();
        let (x, y, w, h) = m.cell_rect(10, 20);
        assert_eq!((x, y), (30.0, 60.0));
        assert_eq!((w, h), (3.0, 3.0));
    }
}
