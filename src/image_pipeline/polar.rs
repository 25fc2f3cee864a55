//! Polar resampling module
//!
//! Maps the device's (ray, LED) grid onto source image coordinates and
//! samples colors there.

pub mod geometry;
pub mod sampler;

pub use geometry::{led_radius, polar_to_cartesian, ray_angle};
pub use sampler::sample_bilinear;
