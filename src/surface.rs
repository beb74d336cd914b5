// Drawing surfaces: where draw requests end up.
// The engine never touches pixels itself; a host hands it something implementing `Surface`.

use crate::compositor::{DrawRequest, Rect};
use crate::gamma::GammaLut;
use crate::types::{FrameBuffer, ImageSource};

/// Something that can blit a source region of `I` onto a destination region with a global opacity.
pub trait Surface<I: ImageSource> {
    /// Wipe last tick's tiles.
    fn clear(&mut self);
    /// Composite one tile.
    fn draw_image(&mut self, image: &I, request: &DrawRequest);
}

/// CPU surface over a `FrameBuffer`, blending in linear light.
/// Visual: this is the image the demo window shows.
pub struct SoftwareSurface {
    frame: FrameBuffer,
    background: u32,
    lut: GammaLut,
}

impl SoftwareSurface {
    pub fn new(width: usize, height: usize, background: u32) -> Self {
        Self {
            frame: FrameBuffer::filled(width, height, background),
            background,
            lut: GammaLut::new(),
        }
    }

    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    /// Reallocate for a new window size (contents are wiped).
    pub fn resize(&mut self, width: usize, height: usize) {
        self.frame = FrameBuffer::filled(width, height, self.background);
    }

    /// Pixel-aligned span `[start, end)` of `[pos, pos + len)` clipped to `[0, limit)`.
    fn clip(pos: f32, len: f32, limit: usize) -> (usize, usize) {
        let start = pos.floor().max(0.0) as usize;
        let end = (pos + len).ceil().max(0.0) as usize;
        (start.min(limit), end.min(limit))
    }
}

/// Nearest-neighbour sample position inside the source rect for a destination offset,
/// clamped to the image so edge tiles repeat the border instead of reading garbage.
#[inline]
fn sample_coord(src_pos: f32, src_len: f32, dest_len: f32, offset: f32, limit: usize) -> usize {
    let t = (offset + 0.5) / dest_len;
    let s = (src_pos + t * src_len).floor();
    (s.max(0.0) as usize).min(limit.saturating_sub(1))
}

impl Surface<FrameBuffer> for SoftwareSurface {
    fn clear(&mut self) {
        for px in &mut self.frame.pixels {
            *px = self.background;
        }
    }

    fn draw_image(&mut self, image: &FrameBuffer, request: &DrawRequest) {
        let Rect { x, y, w, h } = request.dest;
        if image.width == 0 || image.height == 0 || w <= 0.0 || h <= 0.0 {
            return;
        }
        let (x0, x1) = Self::clip(x, w, self.frame.width);
        let (y0, y1) = Self::clip(y, h, self.frame.height);
        let src = request.src;

        for py in y0..y1 {
            let sy = sample_coord(src.y, src.h, h, py as f32 - y, image.height);
            let row = py * self.frame.width;
            for px in x0..x1 {
                let sx = sample_coord(src.x, src.w, w, px as f32 - x, image.width);
                let idx = row + px;
                self.frame.pixels[idx] =
                    self.lut.blend(self.frame.pixels[idx], image.pixel(sx, sy), request.alpha);
            }
        }
    }
}
