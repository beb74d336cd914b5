// Per-instance tuning knobs for the reveal effect.
// Visual expectation: bigger cells = chunkier mosaic, lower decay = trail fades faster,
// higher diffusion = heat bleeds further from the cursor.

use crate::error::ConfigError;
use crate::inject::MAX_INFLUENCE_RADIUS;

/// Immutable simulation parameters, checked once when the engine is created.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealConfig {
    /// Pixels per grid cell (side length of one revealed tile).
    pub cell_size: f32,
    /// Fraction of heat a cell keeps per tick, in (0, 1].
    pub decay: f32,
    /// Blend weight toward the neighbour average, in [0, 1].
    pub diffusion: f32,
    /// Heat at or below this value is not drawn, in [0, 1).
    pub threshold: f32,
    /// Pointer reach, in cells, at most `MAX_INFLUENCE_RADIUS`.
    pub influence_radius: u32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            cell_size: 20.0,
            decay: 0.98,
            diffusion: 0.15,
            threshold: 0.1,
            influence_radius: 4,
        }
    }
}

impl RevealConfig {
    /// Fail fast on anything outside the documented ranges (NaN included).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            return Err(ConfigError::CellSize(self.cell_size));
        }
        if !(self.decay > 0.0 && self.decay <= 1.0) {
            return Err(ConfigError::Decay(self.decay));
        }
        if !(0.0..=1.0).contains(&self.diffusion) {
            return Err(ConfigError::Diffusion(self.diffusion));
        }
        if !(0.0..1.0).contains(&self.threshold) {
            return Err(ConfigError::Threshold(self.threshold));
        }
        if self.influence_radius > MAX_INFLUENCE_RADIUS {
            return Err(ConfigError::InfluenceRadius {
                got: self.influence_radius,
                max: MAX_INFLUENCE_RADIUS,
            });
        }
        Ok(())
    }
}
