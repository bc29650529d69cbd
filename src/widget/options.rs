//! Widget construction options (JSON from the host)

use serde::Deserialize;

use crate::domain::strategy::{ColorStrategy, Rainbow};
use crate::gestures::set::DEFAULT_TAP_SLOP;

pub const MIN_SCALE: f32 = 1.0;
pub const MAX_SCALE: f32 = 10.0;

/// Upper bound on width * height (4096 x 4096). Keeps host-supplied
/// dimensions from overflowing the cell-count arithmetic or asking for
/// absurd allocations; construction fails instead.
pub const MAX_CELLS: u64 = 16_777_216;

/// Host-supplied configuration, all fields optional in the JSON
///
/// Defaults: rainbow strategy at its intrinsic 100x100, scale clamped
/// to [1, 10].
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct WidgetOptions {
    /// Strategy key; only "rainbow" ships
    pub strategy: String,
    /// Grid width override; falls back to the strategy's intrinsic width
    pub width: Option<u32>,
    /// Grid height override; falls back to the strategy's intrinsic height
    pub height: Option<u32>,
    pub min_scale: f32,
    pub max_scale: f32,
    pub tap_slop: f32,
}

impl Default for WidgetOptions {
    fn default() -> Self {
        Self {
            strategy: "rainbow".to_string(),
            width: None,
            height: None,
            min_scale: MIN_SCALE,
            max_scale: MAX_SCALE,
            tap_slop: DEFAULT_TAP_SLOP,
        }
    }
}

impl WidgetOptions {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let options: WidgetOptions = serde_json::from_str(json).map_err(|e| e.to_string())?;
        options.validate()?;
        Ok(options)
    }

    fn validate(&self) -> Result<(), String> {
        if self.min_scale <= 0.0 || self.max_scale < self.min_scale {
            return Err(format!(
                "invalid scale range [{}, {}]",
                self.min_scale, self.max_scale
            ));
        }
        if self.width == Some(0) || self.height == Some(0) {
            return Err("grid dimensions must be positive".to_string());
        }
        if let (Some(w), Some(h)) = (self.width, self.height) {
            // u64 product cannot overflow for two u32 factors.
            if w as u64 * h as u64 > MAX_CELLS {
                return Err(format!("{}x{} grid exceeds {} cells", w, h, MAX_CELLS));
            }
        }
        if self.tap_slop < 0.0 {
            return Err("tap_slop must be non-negative".to_string());
        }
        Ok(())
    }

    /// Instantiate the named strategy. Unknown keys are a construction
    /// error, the one unsupported-construction mode the widget reports.
    pub fn build_strategy(&self) -> Result<Box<dyn ColorStrategy>, String> {
        match self.strategy.as_str() {
            "rainbow" => Ok(Box::new(Rainbow::default())),
            other => Err(format!("unknown color strategy: {:?}", other)),
        }
    }
}
