//! Color values and packing
//!
//! Strategies work in f32 channels so no precision is lost before the
//! host-facing buffer; packing to ABGR happens once per painted cell.
//! ABGR in a little-endian u32 is the R,G,B,A byte order that canvas
//! ImageData expects, same layout the host blits from wasm memory.

/// RGBA color with f32 channels, nominally in [0, 1]
///
/// Channels are NOT clamped here: a strategy queried outside its intrinsic
/// bounds may legitimately produce values above 1.0 (see `Rainbow`).
/// Clamping happens only at quantization time in `packed_abgr`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque color
    pub const fn opaque(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Unweighted mean of the three color channels (alpha excluded)
    #[inline]
    pub fn channel_average(&self) -> f32 {
        (self.r + self.g + self.b) / 3.0
    }

    /// Gray color with all three channels set to the channel average
    pub fn desaturated(&self) -> Self {
        let avg = self.channel_average();
        Self::opaque(avg, avg, avg)
    }

    /// Pack as ABGR u32 (bytes R,G,B,A in memory on little-endian)
    #[inline]
    pub fn packed_abgr(&self) -> u32 {
        let r = quantize(self.r);
        let g = quantize(self.g);
        let b = quantize(self.b);
        let a = quantize(self.a);
        (a << 24) | (b << 16) | (g << 8) | r
    }
}

#[inline]
fn quantize(v: f32) -> u32 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u32
}
