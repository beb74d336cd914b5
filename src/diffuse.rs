// Diffusion + decay: one tick of the heat field.
// Visual: the warm patch behind the cursor spreads out a little and fades every frame.
//
// Always reads the previous grid and writes a separate one. Updating in place would
// let cells earlier in scan order leak into later ones within the same tick.

use crate::grid::HeatGrid;

/// Values below this are snapped to exactly zero so the tail never lingers on screen.
pub const ZERO_SNAP: f32 = 0.001;

/// Up, down, left, right.
const NEIGHBOURS: [(i64, i64); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

/// Average of the in-bounds axis-aligned neighbours of `(col, row)` and how many there were.
/// Edges use 3, corners 2; missing neighbours are skipped, never read as zero, never wrapped.
pub fn neighbour_average(grid: &HeatGrid, col: i64, row: i64) -> Option<(f32, usize)> {
    let mut sum = 0.0;
    let mut count = 0;
    for (dx, dy) in NEIGHBOURS {
        if let Some(h) = grid.get(col + dx, row + dy) {
            sum += h;
            count += 1;
        }
    }
    if count == 0 { None } else { Some((sum / count as f32, count)) }
}

/// Next heat of a single cell given its current heat and its neighbour average.
#[inline]
pub fn next_heat(current: f32, neighbour_avg: Option<f32>, diffusion: f32, decay: f32) -> f32 {
    let blended = match neighbour_avg {
        Some(avg) => current * (1.0 - diffusion) + avg * diffusion,
        None => current,
    };
    let decayed = blended * decay;
    if decayed < ZERO_SNAP { 0.0 } else { decayed.min(1.0) }
}

/// Write the next state of `current` into `next` (reshaped if needed).
/// `next` is fully overwritten; nothing in it is read.
pub fn diffuse_decay(current: &HeatGrid, next: &mut HeatGrid, diffusion: f32, decay: f32) {
    if !next.same_shape(current) {
        *next = HeatGrid::new(current.cols(), current.rows());
    }
    let cols = current.cols();
    let src = current.cells();
    let dst = next.cells_mut();

    for (i, out) in dst.iter_mut().enumerate() {
        let col = (i % cols) as i64;
        let row = (i / cols) as i64;
        let avg = neighbour_average(current, col, row).map(|(avg, _)| avg);
        *out = next_heat(src[i], avg, diffusion, decay);
    }
}

/// Reusable pair of grids: step into the back buffer, then swap it to the front.
/// Readers only ever see a complete grid.
#[derive(Debug, Clone)]
pub struct DoubleBuffer {
    front: HeatGrid,
    back: HeatGrid,
}

impl DoubleBuffer {
    pub fn new(grid: HeatGrid) -> Self {
        let back = HeatGrid::new(grid.cols(), grid.rows());
        Self { front: grid, back }
    }

    pub fn front(&self) -> &HeatGrid {
        &self.front
    }

    /// Mutable access to the current grid, for injection before a step.
    pub fn front_mut(&mut self) -> &mut HeatGrid {
        &mut self.front
    }

    /// One diffusion-decay tick; the result becomes the front grid.
    pub fn step(&mut self, diffusion: f32, decay: f32) {
        diffuse_decay(&self.front, &mut self.back, diffusion, decay);
        std::mem::swap(&mut self.front, &mut self.back);
    }
}
