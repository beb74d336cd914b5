// Core pixel types shared by the engine, the software surface and the demo window.

use std::rc::Rc;
use std::sync::Arc;

#[derive(Clone, Debug, PartialEq)]
pub struct FrameBuffer {
    pub width: usize,      // how wide the frame is on screen (pixels)
    pub height: usize,     // how tall the frame is on screen (pixels)
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    /// A buffer filled with one colour.
    pub fn filled(width: usize, height: usize, color: u32) -> Self {
        Self { width, height, pixels: vec![color; width * height] }
    }

    /// Pixel at `(x, y)`; the caller keeps coordinates in bounds.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> u32 {
        self.pixels[y * self.width + x]
    }
}

/// Anything the engine can reveal: it only needs the natural pixel size.
/// Decoding and sampling belong to whoever implements this and the surface.
pub trait ImageSource {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
}

impl ImageSource for FrameBuffer {
    fn width(&self) -> u32 {
        self.width as u32
    }
    fn height(&self) -> u32 {
        self.height as u32
    }
}

impl<T: ImageSource + ?Sized> ImageSource for &T {
    fn width(&self) -> u32 {
        (**self).width()
    }
    fn height(&self) -> u32 {
        (**self).height()
    }
}

impl<T: ImageSource + ?Sized> ImageSource for Rc<T> {
    fn width(&self) -> u32 {
        (**self).width()
    }
    fn height(&self) -> u32 {
        (**self).height()
    }
}

impl<T: ImageSource + ?Sized> ImageSource for Arc<T> {
    fn width(&self) -> u32 {
        (**self).width()
    }
    fn height(&self) -> u32 {
        (**self).height()
    }
}

/// Convert a decoded picture into 0x00RRGGBB pixels (alpha is dropped).
pub fn frame_from_rgb(img: &image::RgbImage) -> FrameBuffer {
    let (w, h) = img.dimensions();
    let mut out = Vec::with_capacity((w as usize) * (h as usize));
    for (_x, _y, pixel) in img.enumerate_pixels() {
        let r = pixel[0] as u32;
        let g = pixel[1] as u32;
        let b = pixel[2] as u32;
        out.push((r << 16) | (g << 8) | b);
    }
    FrameBuffer { width: w as usize, height: h as usize, pixels: out }
}
