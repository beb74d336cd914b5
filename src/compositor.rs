// Heat → draw requests.
// Visual: every cell hotter than the threshold shows its own tile of the picture,
// fading in as it heats up; the picture is scaled to cover the container like CSS `cover`.

use crate::grid::HeatGrid;

/// Axis-aligned rectangle, in container pixels or image pixels depending on use.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// One tile to composite this tick: copy `src` (image space) onto `dest` (container space).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawRequest {
    pub dest: Rect,
    pub src: Rect,
    pub alpha: f32,
}

/// Uniform scale + centring that makes an image fully cover a container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoverTransform {
    pub scale: f32,
    pub x_offset: f32,
    pub y_offset: f32,
}

impl CoverTransform {
    /// `None` when either size is degenerate (nothing sensible to map).
    pub fn new(container_w: f32, container_h: f32, image_w: u32, image_h: u32) -> Option<Self> {
        if image_w == 0 || image_h == 0 {
            return None;
        }
        let (iw, ih) = (image_w as f32, image_h as f32);
        let scale = (container_w / iw).max(container_h / ih);
        if !(scale.is_finite() && scale > 0.0) {
            return None;
        }
        Some(Self {
            scale,
            x_offset: (container_w - iw * scale) / 2.0,
            y_offset: (container_h - ih * scale) / 2.0,
        })
    }

    /// Inverse-map a square container tile at `(dx, dy)` back into image space.
    pub fn source_rect(&self, dx: f32, dy: f32, size: f32) -> Rect {
        let s = size / self.scale;
        Rect {
            x: (dx - self.x_offset) / self.scale,
            y: (dy - self.y_offset) / self.scale,
            w: s,
            h: s,
        }
    }
}

/// Opacity for a cell, or `None` when it is at or below the threshold.
#[inline]
pub fn reveal_alpha(heat: f32, threshold: f32) -> Option<f32> {
    if heat > threshold {
        Some(((heat - threshold) / (1.0 - threshold)).min(1.0))
    } else {
        None
    }
}

/// Append one request per visible cell to `out` (which is cleared first).
/// `image_size` is `None` while the picture hasn't arrived; then nothing is emitted.
pub fn compose(
    grid: &HeatGrid,
    image_size: Option<(u32, u32)>,
    container: (f32, f32),
    cell_size: f32,
    threshold: f32,
    out: &mut Vec<DrawRequest>,
) {
    out.clear();
    let Some((iw, ih)) = image_size else { return };
    let Some(cover) = CoverTransform::new(container.0, container.1, iw, ih) else { return };

    let cols = grid.cols();
    for (i, &heat) in grid.cells().iter().enumerate() {
        let Some(alpha) = reveal_alpha(heat, threshold) else { continue };
        let dx = (i % cols) as f32 * cell_size;
        let dy = (i / cols) as f32 * cell_size;
        out.push(DrawRequest {
            dest: Rect { x: dx, y: dy, w: cell_size, h: cell_size },
            src: cover.source_rect(dx, dy, cell_size),
            alpha,
        });
    }
}
