//! Source image module
//!
//! Decoding of input files into an addressable RGB raster.

mod reader;
mod image_reader;
pub mod types;

pub use reader::SourceImageReader;
pub use image_reader::ImageCrateReader;
pub use types::SourceImage;
