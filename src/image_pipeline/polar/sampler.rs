//! Bilinear sampling of the source image at fractional coordinates.
//!
//! Coordinates may overshoot the last pixel by a rounding residue. A
//! fractional part at or below [`EPSILON`] snaps to the lower pixel and
//! its right/lower neighbor is never read, so sampling exactly on the last
//! row or column stays in bounds. Small negative residues snap to zero.

use crate::image_pipeline::source::SourceImage;

pub const EPSILON: f64 = 1e-4;

/// Splits a coordinate into a pixel index and a fractional weight.
#[inline]
fn split(v: f64, len: usize) -> (usize, usize, f64) {
    if v <= 0.0 {
        return (0, 0, 0.0);
    }
    let i0 = v.floor();
    let d = v - i0;
    let last = len.saturating_sub(1);
    let i0 = (i0 as usize).min(last);
    let i1 = (i0 + 1).min(last);
    (i0, i1, d)
}

/// Interpolates between two pixels of one row, per channel.
#[inline]
fn lerp_row(img: &SourceImage, x0: usize, x1: usize, xd: f64, y: usize) -> [f64; 3] {
    let p0 = img.pixel(x0, y);
    if xd <= EPSILON {
        return p0.map(f64::from);
    }
    let p1 = img.pixel(x1, y);
    [0, 1, 2].map(|c| f64::from(p0[c]) * (1.0 - xd) + f64::from(p1[c]) * xd)
}

/// Samples `img` at `(x, y)` and rounds each channel half-up.
pub fn sample_bilinear(img: &SourceImage, x: f64, y: f64) -> [u8; 3] {
    let (x0, x1, xd) = split(x, img.width());
    let (y0, y1, yd) = split(y, img.height());

    let top = lerp_row(img, x0, x1, xd, y0);
    let combined = if yd <= EPSILON {
        top
    } else {
        let bottom = lerp_row(img, x0, x1, xd, y1);
        [0, 1, 2].map(|c| top[c] * (1.0 - yd) + bottom[c] * yd)
    };

    combined.map(|v| (v + 0.5).floor().clamp(0.0, 255.0) as u8)
}
