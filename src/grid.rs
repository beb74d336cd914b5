// The heat field: one float per cell, laid over the container.
// Visual: unseen directly; a cell's heat decides how opaque its image tile is.

use log::debug;

/// Upper bound on cells per grid (64 MiB per buffer). Anything larger is a misconfiguration.
pub const MAX_CELLS: usize = 1 << 24;

/// Row-major heat values, `index = row * cols + col`, every value in [0, 1].
#[derive(Debug, Clone, PartialEq)]
pub struct HeatGrid {
    cols: usize,
    rows: usize,
    heat: Vec<f32>,
}

impl HeatGrid {
    /// A zero-filled grid of the given shape. Sizes that come from a container go
    /// through `for_container`, which keeps `cols * rows` within `MAX_CELLS`.
    pub fn new(cols: usize, rows: usize) -> Self {
        Self { cols, rows, heat: vec![0.0; cols * rows] }
    }

    /// Allocate the grid that covers a `width` x `height` container.
    /// Degenerate sizes (zero, negative, NaN) give an empty grid; a shape over
    /// `MAX_CELLS` (or one whose cell count overflows) gives `None`.
    pub fn for_container(width: f32, height: f32, cell_size: f32) -> Option<Self> {
        let cols = cells_along(width, cell_size)?;
        let rows = cells_along(height, cell_size)?;
        let cells = cols.checked_mul(rows).filter(|&n| n <= MAX_CELLS)?;
        debug!("allocating {cols}x{rows} heat grid ({cells} cells) for {width}x{height} container");
        Some(Self::new(cols, rows))
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.heat.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heat.is_empty()
    }

    /// Flat index of `(col, row)`, or `None` when out of bounds.
    #[inline]
    pub fn index(&self, col: i64, row: i64) -> Option<usize> {
        if col < 0 || row < 0 {
            return None;
        }
        let (col, row) = (col as usize, row as usize);
        if col >= self.cols || row >= self.rows {
            return None;
        }
        Some(row * self.cols + col)
    }

    /// Heat at `(col, row)`; out-of-bounds cells read as `None`, never as zero.
    #[inline]
    pub fn get(&self, col: i64, row: i64) -> Option<f32> {
        self.index(col, row).map(|i| self.heat[i])
    }

    /// Overwrite one cell, clamped into [0, 1]. Out-of-bounds writes are ignored.
    pub fn set(&mut self, col: i64, row: i64, value: f32) {
        if let Some(i) = self.index(col, row) {
            self.heat[i] = value.clamp(0.0, 1.0);
        }
    }

    /// Add heat to one cell, capped at 1.0.
    #[inline]
    pub fn add_capped(&mut self, index: usize, amount: f32) {
        let h = self.heat[index] + amount;
        self.heat[index] = if h > 1.0 { 1.0 } else { h };
    }

    pub fn cells(&self) -> &[f32] {
        &self.heat
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [f32] {
        &mut self.heat
    }

    /// Hottest cell, 0.0 for an empty grid.
    pub fn max_heat(&self) -> f32 {
        self.heat.iter().copied().fold(0.0, f32::max)
    }

    /// True once every cell has decayed to exactly zero.
    pub fn is_cold(&self) -> bool {
        self.heat.iter().all(|&h| h == 0.0)
    }

    pub(crate) fn same_shape(&self, other: &HeatGrid) -> bool {
        self.cols == other.cols && self.rows == other.rows
    }
}

/// `ceil(extent / cell_size)`, 0 for anything that isn't a positive finite extent,
/// `None` when the count alone already exceeds `MAX_CELLS`.
fn cells_along(extent: f32, cell_size: f32) -> Option<usize> {
    if !(extent.is_finite() && extent > 0.0) {
        return Some(0);
    }
    let n = (extent / cell_size).ceil();
    if !(n <= MAX_CELLS as f32) {
        return None;
    }
    Some(n as usize)
}
