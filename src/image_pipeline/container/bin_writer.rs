//! Writer for the propeller display's `.bin` container.
//!
//! Layout: a `header_size` byte header starting with the magic, then per
//! image the packed rows in ray order followed by `padding_size` zero
//! bytes. There is no length prefix; the firmware relies on fixed sizes.

use std::io::Write;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::debug;

use crate::image_pipeline::codec::types::{Animation, EncoderConfig};
use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::container::writer::AnimationWriter;

/// Content of the header bytes after the magic. The device ignores them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderFill {
    /// Fresh random bytes on every write
    #[default]
    Random,
    /// Random bytes from a fixed seed
    Seeded(u64),
    Zeros,
}

#[derive(Debug, Default)]
pub struct BinContainerWriter {
    fill: HeaderFill,
}

impl BinContainerWriter {
    pub fn new(fill: HeaderFill) -> Self {
        Self { fill }
    }

    fn header(&self, config: &EncoderConfig) -> Vec<u8> {
        let mut header = vec![0u8; config.header_size];
        let magic_len = config.header_magic.len();
        let filler = &mut header[magic_len..];
        match self.fill {
            HeaderFill::Random => StdRng::from_entropy().fill_bytes(filler),
            HeaderFill::Seeded(seed) => StdRng::seed_from_u64(seed).fill_bytes(filler),
            HeaderFill::Zeros => {}
        }
        header[..magic_len].copy_from_slice(&config.header_magic);
        header
    }
}

impl AnimationWriter for BinContainerWriter {
    fn write_header(&self, output: &mut dyn Write, config: &EncoderConfig) -> Result<()> {
        debug!("Writing {} byte header ({:?} fill)", config.header_size, self.fill);
        output.write_all(&self.header(config))?;
        Ok(())
    }

    fn write_animation(&self, animation: &Animation, output: &mut dyn Write, config: &EncoderConfig) -> Result<()> {
        if animation.n_rays() != config.n_rays || animation.row_bytes() != config.row_bytes() {
            return Err(ConversionError::InvalidConfig(format!(
                "animation is {}x{} bytes, config expects {}x{}",
                animation.n_rays(),
                animation.row_bytes(),
                config.n_rays,
                config.row_bytes()
            )));
        }

        debug!(
            "Writing animation: {} rows of {} bytes + {} padding",
            animation.n_rays(),
            animation.row_bytes(),
            config.padding_size
        );

        for row in animation.rows() {
            output.write_all(row)?;
        }
        output.write_all(&vec![0u8; config.padding_size])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> EncoderConfig {
        EncoderConfig::builder()
            .n_rays(4)
            .leds(16)
            .header_size(16)
            .padding_size(5)
            .build()
    }

    #[test]
    fn header_starts_with_magic_and_has_fixed_length() {
        let config = EncoderConfig::default();
        let mut output = Vec::new();
        BinContainerWriter::default().write_header(&mut output, &config).unwrap();

        assert_eq!(output.len(), 4096);
        assert_eq!(&output[..5], &[0x00, 0x00, 0x00, 0x3c, 0x18]);
    }

    #[test]
    fn seeded_header_is_reproducible() {
        let config = EncoderConfig::default();
        let (mut a, mut b, mut c) = (Vec::new(), Vec::new(), Vec::new());
        BinContainerWriter::new(HeaderFill::Seeded(7)).write_header(&mut a, &config).unwrap();
        BinContainerWriter::new(HeaderFill::Seeded(7)).write_header(&mut b, &config).unwrap();
        BinContainerWriter::new(HeaderFill::Seeded(8)).write_header(&mut c, &config).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(&c[..5], &config.header_magic);
    }

    #[test]
    fn zero_fill_header() {
        let config = small_config();
        let mut output = Vec::new();
        BinContainerWriter::new(HeaderFill::Zeros).write_header(&mut output, &config).unwrap();
        assert_eq!(output, [0u8, 0, 0, 0x3c, 0x18, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn animation_is_rows_then_padding() {
        let config = small_config();
        let mut animation = Animation::zeroed(4, 3);
        for (i, b) in animation.data_mut().iter_mut().enumerate() {
            *b = i as u8 + 1;
        }

        let mut output = Vec::new();
        BinContainerWriter::default()
            .write_animation(&animation, &mut output, &config)
            .unwrap();

        assert_eq!(output.len(), 12 + 5);
        assert_eq!(&output[..12], &(1..=12).collect::<Vec<u8>>()[..]);
        assert!(output[12..].iter().all(|&b| b == 0));
    }

    #[test]
    fn rejects_animation_of_other_geometry() {
        let config = small_config();
        let animation = Animation::zeroed(5, 3);
        let mut output = Vec::new();
        let result = BinContainerWriter::default().write_animation(&animation, &mut output, &config);

        assert!(matches!(result, Err(ConversionError::InvalidConfig(_))));
        assert!(output.is_empty());
    }
}
