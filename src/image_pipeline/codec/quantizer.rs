//! Ordered dithering of one 8-bit channel sample down to one bit.
//!
//! Levels come from `value / 17.01`, which maps [0, 255] onto 15 rows. The
//! first and last row are repeated so that typical video range [16, 240]
//! already reaches full black and full white. Odd columns read the pattern
//! half a period later to avoid vertical banding across neighboring bits.

const DITHER_PERIOD: usize = 12;

const LEVEL_DIVISOR: f64 = 17.01;

const DITHER_TABLE: [[u8; DITHER_PERIOD]; 15] = [
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0],
    [1, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0],
    [1, 1, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0],
    [1, 1, 1, 0, 0, 0, 1, 1, 0, 0, 0, 0],
    [1, 1, 1, 0, 0, 0, 1, 1, 1, 0, 0, 0],
    [1, 1, 1, 1, 0, 0, 1, 1, 1, 0, 0, 0],
    [1, 1, 1, 1, 0, 0, 1, 1, 1, 1, 0, 0],
    [1, 1, 1, 1, 1, 0, 1, 1, 1, 1, 0, 0],
    [1, 1, 1, 1, 1, 0, 1, 1, 1, 1, 1, 0],
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0],
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
];

/// Dither level in `0..15` for a channel value. Out-of-range values are clamped.
#[inline]
pub fn dither_level(value: i32) -> usize {
    (f64::from(value.clamp(0, 255)) / LEVEL_DIVISOR) as usize
}

/// Returns whether the LED bit for `value` is lit at bit column `column`
/// on ray `ray`.
#[inline]
pub fn dither_bit(value: i32, column: usize, ray: usize) -> bool {
    let phase = (ray + 6 * (column % 2)) % DITHER_PERIOD;
    DITHER_TABLE[dither_level(value)][phase] == 1
}
