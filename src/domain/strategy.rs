//! Color strategies - pluggable per-cell color generation
//!
//! A strategy is a pure function from cell coordinate + toggle state to a
//! color, plus an intrinsic preferred size used to dimension a new grid.
//! The grid may be constructed with different dimensions than the strategy's
//! hint; strategies are then queried outside their intrinsic bounds and must
//! stay deterministic there (they may return out-of-range channel values,
//! which quantization clamps - see `Rgba`).

use super::color::Rgba;

/// Pure coordinate -> color capability
///
/// `color` must be deterministic: same `(x, y, enabled)` always produces the
/// same output, with no dependence on external state.
pub trait ColorStrategy {
    /// Intrinsic preferred width in cells (advisory, not authoritative)
    fn width(&self) -> u32;

    /// Intrinsic preferred height in cells (advisory, not authoritative)
    fn height(&self) -> u32;

    /// Color of the cell at `(x, y)` for the given toggle state
    fn color(&self, x: u32, y: u32, enabled: bool) -> Rgba;
}

/// The built-in strategy: rainbow gradient, grayscale when untoggled
///
/// - red   = y / height
/// - green = x / width
/// - blue  = 1 - dist(origin) / dist(corner)
///
/// The untoggled branch is the flat three-channel average of the toggled
/// color, so the averaging law `disabled == mean(enabled channels)` holds
/// exactly in f32. No clamping is performed when queried beyond the
/// intrinsic size; ratios simply exceed 1.0 and quantization saturates.
pub struct Rainbow {
    width: u32,
    height: u32,
    max_distance: f32,
}

impl Rainbow {
    pub const DEFAULT_WIDTH: u32 = 100;
    pub const DEFAULT_HEIGHT: u32 = 100;

    pub fn new(width: u32, height: u32) -> Self {
        let w = width as f32;
        let h = height as f32;
        Self {
            width,
            height,
            max_distance: (w * w + h * h).sqrt(),
        }
    }
}

impl Default for Rainbow {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WIDTH, Self::DEFAULT_HEIGHT)
    }
}

impl ColorStrategy for Rainbow {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn color(&self, x: u32, y: u32, enabled: bool) -> Rgba {
        let fx = x as f32;
        let fy = y as f32;

        let red = fy / self.height as f32;
        let green = fx / self.width as f32;
        let distance = (fx * fx + fy * fy).sqrt();
        let blue = 1.0 - distance / self.max_distance;

        let full = Rgba::opaque(red, green, blue);
        if enabled {
            full
        } else {
            full.desaturated()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_is_pure_blue_when_enabled() {
        let s = Rainbow::default();
        let c = s.color(0, 0, true);
        assert_eq!(c.r, 0.0);
        assert_eq!(c.g, 0.0);
        assert_eq!(c.b, 1.0);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn far_corner_is_red_green_no_blue() {
        let s = Rainbow::new(100, 100);
        let c = s.color(100, 100, true);
        assert_eq!(c.r, 1.0);
        assert_eq!(c.g, 1.0);
        assert!(c.b.abs() < 1e-6);
    }

    #[test]
    fn disabled_color_is_flat_channel_average() {
        let s = Rainbow::default();
        for &(x, y) in &[(0, 0), (13, 71), (50, 50), (99, 99), (99, 0)] {
            let on = s.color(x, y, true);
            let off = s.color(x, y, false);
            let avg = on.channel_average();
            assert_eq!(off.r, avg);
            assert_eq!(off.g, avg);
            assert_eq!(off.b, avg);
            assert_eq!(off.a, 1.0);
        }
    }

    #[test]
    fn queries_beyond_intrinsic_bounds_do_not_clamp() {
        let s = Rainbow::new(100, 100);
        // A 200-cell grid querying a 100-cell strategy: ratios exceed 1.0.
        let c = s.color(150, 180, true);
        assert!(c.r > 1.0);
        assert!(c.g > 1.0);
        assert!(c.b < 0.0);
    }

    #[test]
    fn color_is_deterministic() {
        let s = Rainbow::default();
        assert_eq!(s.color(42, 17, true), s.color(42, 17, true));
        assert_eq!(s.color(42, 17, false), s.color(42, 17, false));
    }
}
