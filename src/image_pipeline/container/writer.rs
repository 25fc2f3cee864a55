use std::io::Write;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::codec::types::{Animation, EncoderConfig};

pub trait AnimationWriter {
    fn write_header(&self, output: &mut dyn Write, config: &EncoderConfig) -> Result<()>;
    fn write_animation(&self, animation: &Animation, output: &mut dyn Write, config: &EncoderConfig) -> Result<()>;
}
