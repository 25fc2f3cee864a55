//! Polar codec module
//!
//! Turns a [`SourceImage`](crate::image_pipeline::SourceImage) into one
//! device animation: polar sampling, ordered dithering and bit packing.

pub mod bit_layout;
pub mod frame;
pub mod preview;
pub mod quantizer;
pub mod types;

pub use bit_layout::{BitLayout, Channel};
pub use frame::{ColumnBuffer, FrameAssembler};
pub use preview::render_polar_preview;
pub use quantizer::dither_bit;
pub use types::{Animation, EncoderConfig, EncoderConfigBuilder};
