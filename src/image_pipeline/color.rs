//! Color proximity tests
//!
//! All comparisons happen on [`WideColor`], a 16-bit-per-channel view of a
//! pixel with alpha premultiplied into the color channels. An 8-bit channel
//! `v` widens to `v * 0x101`, so tolerances are expressed on the 0..=0xffff
//! scale.

use image::Rgba;

/// Pixel color in the wide (0..=0xffff, alpha-premultiplied) model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WideColor {
    pub r: u32,
    pub g: u32,
    pub b: u32,
    pub a: u32,
}

impl WideColor {
    fn premultiplied(r: u32, g: u32, b: u32, a: u32) -> Self {
        Self {
            r: r * a / 0xffff,
            g: g * a / 0xffff,
            b: b * a / 0xffff,
            a,
        }
    }

    /// True when the color channels match exactly. Alpha is not compared.
    pub fn same_rgb(&self, other: &WideColor) -> bool {
        self.r == other.r && self.g == other.g && self.b == other.b
    }
}

/// Conversion between pixel storage formats and the wide model.
pub trait ToWide {
    fn to_wide(&self) -> WideColor;

    /// Straight-alpha 8-bit copy of the pixel, used when writing filters.
    fn to_rgba8(&self) -> Rgba<u8>;
}

fn widen(v: u8) -> u32 {
    let v = v as u32;
    v | v << 8
}

impl ToWide for Rgba<u8> {
    fn to_wide(&self) -> WideColor {
        let [r, g, b, a] = self.0;
        WideColor::premultiplied(widen(r), widen(g), widen(b), widen(a))
    }

    fn to_rgba8(&self) -> Rgba<u8> {
        *self
    }
}

impl ToWide for Rgba<u16> {
    fn to_wide(&self) -> WideColor {
        let [r, g, b, a] = self.0;
        WideColor::premultiplied(r as u32, g as u32, b as u32, a as u32)
    }

    fn to_rgba8(&self) -> Rgba<u8> {
        Rgba(self.0.map(|c| (c >> 8) as u8))
    }
}

/// A reference bar color and the per-channel tolerance used to match it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorTarget {
    pub color: Rgba<u8>,
    /// Exclusive upper limit on each channel difference, wide scale.
    pub tolerance: u32,
}

impl ColorTarget {
    pub const fn new(color: Rgba<u8>, tolerance: u32) -> Self {
        Self { color, tolerance }
    }

    pub fn matches<P: ToWide>(&self, pixel: &P) -> bool {
        is_close(pixel, &self.color, self.tolerance)
    }
}

pub fn is_close_to(value: u32, reference: u32, tolerance: u32) -> bool {
    value.abs_diff(reference) < tolerance
}

/// Channel-wise proximity of `pixel` to `reference`; alpha is ignored.
pub fn is_close<P: ToWide, Q: ToWide>(pixel: &P, reference: &Q, tolerance: u32) -> bool {
    let p = pixel.to_wide();
    let r = reference.to_wide();

    is_close_to(p.r, r.r, tolerance)
        && is_close_to(p.g, r.g, tolerance)
        && is_close_to(p.b, r.b, tolerance)
}
