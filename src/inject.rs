// Pointer → heat. While the pointer is over the container, every tick dabs a
// soft disc of heat into the grid under it.
// Visual: tiles near the cursor warm up first; the centre tile warms fastest.

use crate::grid::HeatGrid;

/// Peak heat the centre cell receives per tick.
pub const INJECT_PEAK: f32 = 0.5;

/// Largest pointer reach, in cells. Keeps the stamp at a few million weights at most.
pub const MAX_INFLUENCE_RADIUS: u32 = 1024;

/// Where the pointer is, in container-local pixels, and whether it is over the container.
/// Hosts replace the whole value at once so position and `active` never disagree mid-tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
    pub active: bool,
}

impl Default for PointerState {
    fn default() -> Self {
        // Far off-canvas and inactive until the first move event.
        Self { x: -1000.0, y: -1000.0, active: false }
    }
}

/// Precomputed linear falloff disc: `(2r+1)^2` weights centred on the pointer cell.
/// Cells outside the disc (or on its rim) carry weight 0.
#[derive(Debug, Clone, PartialEq)]
pub struct HeatStamp {
    pub radius: i64,
    pub weights: Vec<f32>,
}

impl HeatStamp {
    /// `INJECT_PEAK * (1 - dist / r)` for every cell with `dist <= r`.
    /// A zero radius touches only the centre cell, at full peak.
    /// Radii above `MAX_INFLUENCE_RADIUS` are clamped to it.
    pub fn new(radius: u32) -> Self {
        let r = i64::from(radius.min(MAX_INFLUENCE_RADIUS));
        let d = 2 * r + 1;
        let mut weights = Vec::with_capacity((d * d) as usize);
        for y in -r..=r {
            for x in -r..=r {
                let dist = ((x * x + y * y) as f32).sqrt();
                let w = if r == 0 {
                    INJECT_PEAK
                } else if dist <= r as f32 {
                    INJECT_PEAK * (1.0 - dist / r as f32)
                } else {
                    0.0
                };
                weights.push(w);
            }
        }
        Self { radius: r, weights }
    }

    /// Weight at offset `(dx, dy)` from the centre; 0 outside the square.
    pub fn weight(&self, dx: i64, dy: i64) -> f32 {
        let r = self.radius;
        if dx.abs() > r || dy.abs() > r {
            return 0.0;
        }
        let d = 2 * r + 1;
        self.weights[((dy + r) * d + (dx + r)) as usize]
    }
}

/// Map a container pixel position to the grid cell under it (floor division).
pub fn pointer_cell(x: f32, y: f32, cell_size: f32) -> (i64, i64) {
    ((x / cell_size).floor() as i64, (y / cell_size).floor() as i64)
}

/// Dab the stamp into `grid` around the pointer, clamping each cell at 1.0.
/// Inactive pointers and non-finite positions add nothing; off-grid parts of the disc are skipped.
pub fn inject_heat(grid: &mut HeatGrid, pointer: &PointerState, cell_size: f32, stamp: &HeatStamp) {
    if !pointer.active || !pointer.x.is_finite() || !pointer.y.is_finite() {
        return;
    }
    let (mx, my) = pointer_cell(pointer.x, pointer.y, cell_size);
    let r = stamp.radius;

    for dy in -r..=r {
        for dx in -r..=r {
            let Some(idx) = grid.index(mx.saturating_add(dx), my.saturating_add(dy)) else { continue };
            let w = stamp.weight(dx, dy);
            if w > 0.0 {
                grid.add_capped(idx, w);
            }
        }
    }
}
