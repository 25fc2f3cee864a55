//! Pipeline conversions module
//!
//! This module contains orchestration logic for image to `.bin` conversion.

mod image_to_bin;

pub use image_to_bin::ImageToBinPipeline;
