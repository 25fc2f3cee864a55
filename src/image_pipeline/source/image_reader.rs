//! Source image reader backed by the `image` crate.
//!
//! Any format the `image` crate can guess from the file contents (PNG, JPEG,
//! GIF, BMP, ...) is accepted. Whatever the stored color type, pixels are
//! converted to 8-bit RGB; alpha is dropped.

use std::io::Cursor;

use image::ImageReader;
use tracing::debug;

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::source::reader::SourceImageReader;
use crate::image_pipeline::source::types::SourceImage;

pub struct ImageCrateReader;

impl SourceImageReader for ImageCrateReader {
    fn read_image(&self, data: &[u8]) -> Result<SourceImage> {
        debug!("Decoding image, {} bytes", data.len());

        let reader = ImageReader::new(Cursor::new(data))
            .with_guessed_format()
            .map_err(|e| ConversionError::DecodeError(e.to_string()))?;

        debug!("Detected format: {:?}", reader.format());

        let decoded = reader
            .decode()
            .map_err(|e| ConversionError::DecodeError(e.to_string()))?;

        debug!("Decoded {:?} image: {}x{}", decoded.color(), decoded.width(), decoded.height());

        let rgb = decoded.to_rgb8();
        let (width, height) = (rgb.width() as usize, rgb.height() as usize);
        SourceImage::from_vec(width, height, rgb.into_raw())
    }
}
