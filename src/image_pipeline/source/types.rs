//! Source image types

use crate::image_pipeline::common::error::{ConversionError, Result};

/// Immutable 8-bit RGB raster, row-major and interleaved `[R, G, B, R, G, B, ...]`.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceImage {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl SourceImage {
    /// Fails on a zero width or height, or when `data` is not `width * height * 3` bytes.
    pub fn from_vec(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(ConversionError::InvalidDimensions(width, height));
        }

        let expected = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(3))
            .ok_or(ConversionError::InvalidDimensions(width, height))?;

        if data.len() != expected {
            return Err(ConversionError::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Panics if `width` or `height` is zero.
    pub fn new_fill(width: usize, height: usize, rgb: [u8; 3]) -> Self {
        Self::from_fn(width, height, |_, _| rgb)
    }

    /// Panics if `width` or `height` is zero.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> [u8; 3]) -> Self {
        assert!(width > 0 && height > 0, "image must not be empty, got {width}x{height}");
        let mut data = Vec::with_capacity(width * height * 3);
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&f(x, y));
            }
        }
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Side of the square region that gets sampled. Non-square images are
    /// cropped to their shorter dimension, anchored at the top-left corner.
    pub fn diameter(&self) -> usize {
        self.width.min(self.height)
    }

    /// Center of the sampled disc in pixel coordinates.
    pub fn center(&self) -> (f64, f64) {
        let c = (self.diameter() as f64 - 1.0) / 2.0;
        (c, c)
    }

    /// Panics if `(x, y)` is outside the image.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 3] {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        let i = (y * self.width + x) * 3;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_vec_rejects_wrong_length() {
        let err = SourceImage::from_vec(2, 2, vec![0u8; 11]).unwrap_err();
        assert!(matches!(
            err,
            ConversionError::SizeMismatch { expected: 12, actual: 11 }
        ));
    }

    #[test]
    fn from_vec_rejects_empty_images() {
        for (w, h) in [(0, 12), (12, 0), (0, 0)] {
            let err = SourceImage::from_vec(w, h, Vec::new()).unwrap_err();
            assert!(
                matches!(err, ConversionError::InvalidDimensions(ew, eh) if ew == w && eh == h),
                "{w}x{h}"
            );
        }
    }

    #[test]
    #[should_panic(expected = "image must not be empty")]
    fn from_fn_rejects_empty_images() {
        SourceImage::new_fill(0, 5, [0, 0, 0]);
    }

    #[test]
    fn pixel_reads_row_major_rgb() {
        let img = SourceImage::from_fn(3, 2, |x, y| [x as u8, y as u8, (x + y * 3) as u8]);
        assert_eq!(img.pixel(0, 0), [0, 0, 0]);
        assert_eq!(img.pixel(2, 1), [2, 1, 5]);
        assert_eq!(img.data().len(), 18);
    }

    #[test]
    fn non_square_uses_shorter_side() {
        let img = SourceImage::new_fill(400, 360, [1, 2, 3]);
        assert_eq!(img.diameter(), 360);
        assert_eq!(img.center(), (179.5, 179.5));
    }
}
