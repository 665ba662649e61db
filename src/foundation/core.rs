use crate::foundation::error::{PixError, PixResult};

/// Single-channel 8-bit mask element.
///
/// Masks use small class codes (`0` clear, `1` boundary, `2` soft) or plain
/// `0`/`255` stencil values depending on the producer.
pub type Gray8 = u8;

/// Straight (non-premultiplied) RGBA8 pixel.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[repr(C)]
pub struct PixelRgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl PixelRgba8 {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);

    /// Build a pixel from its four channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Build an opaque pixel.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Same color with a different alpha.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Channels in memory order.
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Inverse of [`PixelRgba8::to_array`].
    pub const fn from_array(c: [u8; 4]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }

    /// Packs the channels as a little-endian word (`r` in the low byte).
    ///
    /// Two pixels are identical exactly when their words are.
    pub const fn to_u32(self) -> u32 {
        u32::from_le_bytes(self.to_array())
    }

    /// Inverse of [`PixelRgba8::to_u32`].
    pub const fn from_u32(v: u32) -> Self {
        Self::from_array(v.to_le_bytes())
    }

    /// `0xAARRGGBB` word as expected by 32-bit window surfaces.
    pub const fn to_argb8888(self) -> u32 {
        (self.a as u32) << 24 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// Inverse of [`PixelRgba8::to_argb8888`].
    pub const fn from_argb8888(v: u32) -> Self {
        Self::new((v >> 16) as u8, (v >> 8) as u8, v as u8, (v >> 24) as u8)
    }
}

/// Floating-point 2D position in pixel units.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Point2 {
    /// Horizontal position.
    pub x: f32,
    /// Vertical position (grows downwards).
    pub y: f32,
}

impl Point2 {
    /// Build a point.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned half-open rectangle `[x_begin, x_end) x [y_begin, y_end)`.
///
/// Only used to describe sub-view regions; views store origin and size instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rect {
    /// First column inside the rectangle.
    pub x_begin: usize,
    /// First column past the rectangle.
    pub x_end: usize,
    /// First row inside the rectangle.
    pub y_begin: usize,
    /// First row past the rectangle.
    pub y_end: usize,
}

impl Rect {
    /// Build a rectangle from its edges. Fails when either axis is empty or inverted.
    pub fn new(x_begin: usize, x_end: usize, y_begin: usize, y_end: usize) -> PixResult<Self> {
        if x_end <= x_begin || y_end <= y_begin {
            return Err(PixError::invalid_region(format!(
                "rect [{x_begin}, {x_end}) x [{y_begin}, {y_end}) is empty"
            )));
        }
        Ok(Self {
            x_begin,
            x_end,
            y_begin,
            y_end,
        })
    }

    /// Build a rectangle from its top-left corner and size.
    pub fn from_origin_size(x: usize, y: usize, width: usize, height: usize) -> PixResult<Self> {
        Self::new(x, x.saturating_add(width), y, y.saturating_add(height))
    }

    /// Number of columns.
    pub fn width(self) -> usize {
        self.x_end - self.x_begin
    }

    /// Number of rows.
    pub fn height(self) -> usize {
        self.y_end - self.y_begin
    }

    /// The same rectangle moved by `(dx, dy)`.
    pub fn translate(self, dx: usize, dy: usize) -> Self {
        Self {
            x_begin: self.x_begin + dx,
            x_end: self.x_end + dx,
            y_begin: self.y_begin + dy,
            y_end: self.y_end + dy,
        }
    }

    /// Overlap of two rectangles, `None` when they do not overlap.
    pub fn intersect(self, other: Self) -> Option<Self> {
        let x_begin = self.x_begin.max(other.x_begin);
        let x_end = self.x_end.min(other.x_end);
        let y_begin = self.y_begin.max(other.y_begin);
        let y_end = self.y_end.min(other.y_end);
        Self::new(x_begin, x_end, y_begin, y_end).ok()
    }

    /// Whether `(x, y)` lies inside.
    pub fn contains(self, x: usize, y: usize) -> bool {
        (self.x_begin..self.x_end).contains(&x) && (self.y_begin..self.y_end).contains(&y)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
