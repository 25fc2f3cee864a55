//! Encoder configuration and output types

use crate::image_pipeline::common::error::{ConversionError, Result};

/// Angular samples per revolution.
pub const N_RAYS: usize = 2700;
/// LEDs on the full ring. Half of them are addressed per ray.
pub const LEDS: usize = 224;
/// Zero bytes written after every animation.
pub const PADDING_SIZE: usize = 1288;
/// Total header length, magic included.
pub const HEADER_SIZE: usize = 0x1000;
/// Header bytes the device firmware checks. `00 00 00 01 18` has been seen
/// on video-derived files.
pub const HEADER_MAGIC: [u8; 5] = [0x00, 0x00, 0x00, 0x3c, 0x18];

/// Geometry and framing of the device's `.bin` format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncoderConfig {
    /// Rays per revolution (rows per animation)
    pub n_rays: usize,
    /// LEDs on the full ring, must be a multiple of 16
    pub leds: usize,
    /// Zero bytes after each animation
    pub padding_size: usize,
    /// Header length including the magic
    pub header_size: usize,
    /// Leading header bytes
    pub header_magic: [u8; 5],
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            n_rays: N_RAYS,
            leds: LEDS,
            padding_size: PADDING_SIZE,
            header_size: HEADER_SIZE,
            header_magic: HEADER_MAGIC,
        }
    }
}

impl EncoderConfig {
    pub fn builder() -> EncoderConfigBuilder {
        EncoderConfigBuilder::default()
    }

    pub fn validate(&self) -> Result<()> {
        if self.leds == 0 || self.leds % 16 != 0 {
            return Err(ConversionError::InvalidConfig(format!(
                "leds must be a non-zero multiple of 16, got {}",
                self.leds
            )));
        }
        if self.n_rays == 0 {
            return Err(ConversionError::InvalidConfig("n_rays must be non-zero".to_string()));
        }
        if self.header_size < self.header_magic.len() {
            return Err(ConversionError::InvalidConfig(format!(
                "header_size {} is shorter than the {} byte magic",
                self.header_size,
                self.header_magic.len()
            )));
        }
        Ok(())
    }

    /// Radial samples per ray.
    pub fn radial_samples(&self) -> usize {
        self.leds / 2
    }

    /// Bit columns per row, one per (LED, channel).
    pub fn columns(&self) -> usize {
        self.radial_samples() * 3
    }

    pub fn row_bytes(&self) -> usize {
        self.columns() / 8
    }

    pub fn animation_bytes(&self) -> usize {
        self.n_rays * self.row_bytes()
    }

    /// Exact container length for `images` animations.
    pub fn container_size(&self, images: usize) -> usize {
        self.header_size + images * (self.animation_bytes() + self.padding_size)
    }
}

/// Builder for EncoderConfig
#[derive(Default)]
pub struct EncoderConfigBuilder {
    n_rays: Option<usize>,
    leds: Option<usize>,
    padding_size: Option<usize>,
    header_size: Option<usize>,
    header_magic: Option<[u8; 5]>,
}

impl EncoderConfigBuilder {
    pub fn n_rays(mut self, n_rays: usize) -> Self {
        self.n_rays = Some(n_rays);
        self
    }

    pub fn leds(mut self, leds: usize) -> Self {
        self.leds = Some(leds);
        self
    }

    pub fn padding_size(mut self, padding_size: usize) -> Self {
        self.padding_size = Some(padding_size);
        self
    }

    pub fn header_size(mut self, header_size: usize) -> Self {
        self.header_size = Some(header_size);
        self
    }

    pub fn header_magic(mut self, magic: [u8; 5]) -> Self {
        self.header_magic = Some(magic);
        self
    }

    pub fn build(self) -> EncoderConfig {
        let default = EncoderConfig::default();
        EncoderConfig {
            n_rays: self.n_rays.unwrap_or(default.n_rays),
            leds: self.leds.unwrap_or(default.leds),
            padding_size: self.padding_size.unwrap_or(default.padding_size),
            header_size: self.header_size.unwrap_or(default.header_size),
            header_magic: self.header_magic.unwrap_or(default.header_magic),
        }
    }
}

/// One encoded image: `n_rays` packed rows in ray order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Animation {
    row_bytes: usize,
    data: Vec<u8>,
}

impl Animation {
    pub(crate) fn zeroed(n_rays: usize, row_bytes: usize) -> Self {
        Self {
            row_bytes,
            data: vec![0u8; n_rays * row_bytes],
        }
    }

    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn n_rays(&self) -> usize {
        self.data.len() / self.row_bytes
    }

    pub fn row_bytes(&self) -> usize {
        self.row_bytes
    }

    pub fn row(&self, ray: usize) -> &[u8] {
        &self.data[ray * self.row_bytes..(ray + 1) * self.row_bytes]
    }

    pub fn rows(&self) -> std::slice::ChunksExact<'_, u8> {
        self.data.chunks_exact(self.row_bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_device() {
        let config = EncoderConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.radial_samples(), 112);
        assert_eq!(config.columns(), 336);
        assert_eq!(config.row_bytes(), 42);
        assert_eq!(config.animation_bytes(), 113_400);
        assert_eq!(config.container_size(0), 4096);
        assert_eq!(config.container_size(3), 4096 + 3 * (113_400 + 1288));
    }

    #[test]
    fn builder_overrides_only_given_fields() {
        let config = EncoderConfig::builder()
            .n_rays(24)
            .leds(16)
            .build();

        assert_eq!(config.n_rays, 24);
        assert_eq!(config.leds, 16);
        assert_eq!(config.padding_size, PADDING_SIZE);
        assert_eq!(config.header_magic, HEADER_MAGIC);
        assert_eq!(config.row_bytes(), 3);
    }

    #[test]
    fn rejects_partial_blocks() {
        for leds in [0, 8, 100, 222] {
            let config = EncoderConfig::builder().leds(leds).build();
            assert!(matches!(config.validate(), Err(ConversionError::InvalidConfig(_))), "leds={leds}");
        }
        let config = EncoderConfig::builder().n_rays(0).build();
        assert!(config.validate().is_err());
        let config = EncoderConfig::builder().header_size(4).build();
        assert!(config.validate().is_err());
    }
}
