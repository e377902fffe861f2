//! Pixel grid types
//!
//! A [`PixelGrid`] is an `image` buffer addressed through explicit
//! rectangular [`Bounds`]. The bounds need not start at the origin, so
//! every accessor takes absolute coordinates.

use image::{ImageBuffer, Pixel, Rgba};

/// Rectangle of pixel coordinates, `min` inclusive and `max` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl Bounds {
    pub fn new(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Self {
        Self {
            min_x,
            min_y,
            max_x: max_x.max(min_x),
            max_y: max_y.max(min_y),
        }
    }

    /// Zero-based bounds covering `width` x `height` pixels.
    pub fn from_size(width: u32, height: u32) -> Self {
        Self::new(0, 0, width as i32, height as i32)
    }

    pub fn dx(&self) -> u32 {
        (self.max_x - self.min_x) as u32
    }

    pub fn dy(&self) -> u32 {
        (self.max_y - self.min_y) as u32
    }

    pub fn is_empty(&self) -> bool {
        self.dx() == 0 || self.dy() == 0
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.min_x && x < self.max_x && y >= self.min_y && y < self.max_y
    }
}

/// Decoded chart image, kept at 16 bits per channel.
pub type SourceGrid = PixelGrid<Rgba<u16>>;

/// Output of the classification pass, 8 bits per channel.
pub type FilterGrid = PixelGrid<Rgba<u8>>;

#[derive(Debug, Clone)]
pub struct PixelGrid<P: Pixel> {
    bounds: Bounds,
    buffer: ImageBuffer<P, Vec<P::Subpixel>>,
}

impl<P: Pixel> PixelGrid<P> {
    /// Creates a grid where every pixel is zero (fully transparent black).
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            buffer: ImageBuffer::new(bounds.dx(), bounds.dy()),
        }
    }

    pub fn from_buffer(buffer: ImageBuffer<P, Vec<P::Subpixel>>) -> Self {
        Self::with_origin(buffer, 0, 0)
    }

    pub fn with_origin(buffer: ImageBuffer<P, Vec<P::Subpixel>>, min_x: i32, min_y: i32) -> Self {
        let bounds = Bounds::new(
            min_x,
            min_y,
            min_x + buffer.width() as i32,
            min_y + buffer.height() as i32,
        );
        Self { bounds, buffer }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn width(&self) -> u32 {
        self.bounds.dx()
    }

    pub fn height(&self) -> u32 {
        self.bounds.dy()
    }

    pub fn get(&self, x: i32, y: i32) -> Option<&P> {
        if !self.bounds.contains(x, y) {
            return None;
        }
        let (lx, ly) = self.local(x, y);
        Some(self.buffer.get_pixel(lx, ly))
    }

    /// Writes `pixel` at `(x, y)`. Coordinates outside the bounds are ignored.
    pub fn set(&mut self, x: i32, y: i32, pixel: P) {
        if !self.bounds.contains(x, y) {
            return;
        }
        let (lx, ly) = self.local(x, y);
        self.buffer.put_pixel(lx, ly, pixel);
    }

    pub fn buffer(&self) -> &ImageBuffer<P, Vec<P::Subpixel>> {
        &self.buffer
    }

    pub fn into_buffer(self) -> ImageBuffer<P, Vec<P::Subpixel>> {
        self.buffer
    }

    fn local(&self, x: i32, y: i32) -> (u32, u32) {
        ((x - self.bounds.min_x) as u32, (y - self.bounds.min_y) as u32)
    }
}
