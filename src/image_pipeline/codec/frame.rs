//! Frame assembly: samples every (ray, LED) of one image into a column
//! buffer, then dithers and packs the columns into rows.

use tracing::{debug, instrument};

use crate::image_pipeline::codec::bit_layout::BitLayout;
use crate::image_pipeline::codec::quantizer::dither_bit;
use crate::image_pipeline::codec::types::{Animation, EncoderConfig};
use crate::image_pipeline::polar::{led_radius, polar_to_cartesian, ray_angle, sample_bilinear};
use crate::image_pipeline::source::SourceImage;

/// Pre-dither samples, one run of `n_rays` values per bit column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnBuffer {
    columns: usize,
    n_rays: usize,
    data: Vec<u8>,
}

impl ColumnBuffer {
    pub fn new(columns: usize, n_rays: usize) -> Self {
        Self {
            columns,
            n_rays,
            data: vec![0u8; columns * n_rays],
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn n_rays(&self) -> usize {
        self.n_rays
    }

    #[inline]
    pub fn get(&self, column: usize, ray: usize) -> u8 {
        self.data[column * self.n_rays + ray]
    }

    #[inline]
    pub fn set(&mut self, column: usize, ray: usize, value: u8) {
        self.data[column * self.n_rays + ray] = value;
    }

    pub fn column(&self, column: usize) -> &[u8] {
        &self.data[column * self.n_rays..(column + 1) * self.n_rays]
    }
}

pub struct FrameAssembler {
    config: EncoderConfig,
    layout: BitLayout,
    led_columns: Vec<[usize; 3]>,
}

impl FrameAssembler {
    /// `config` must already be validated.
    pub fn new(config: EncoderConfig) -> Self {
        let layout = BitLayout::new(config.columns());
        let led_columns = (0..config.radial_samples())
            .map(|led| layout.led_columns(led))
            .collect();
        Self {
            config,
            layout,
            led_columns,
        }
    }

    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    pub fn layout(&self) -> &BitLayout {
        &self.layout
    }

    /// Samples every LED of every ray.
    #[instrument(skip_all, fields(width = image.width(), height = image.height()))]
    pub fn sample(&self, image: &SourceImage) -> ColumnBuffer {
        let n_rays = self.config.n_rays;
        let diameter = image.diameter();
        let (cx, cy) = image.center();
        let radii: Vec<f64> = (0..self.led_columns.len())
            .map(|led| led_radius(led, diameter, self.config.leds))
            .collect();

        debug!(diameter, n_rays, leds = radii.len(), "Sampling polar grid");

        let mut buffer = ColumnBuffer::new(self.config.columns(), n_rays);
        for ray in 0..n_rays {
            let phi = ray_angle(ray, n_rays);
            for (columns, &r) in self.led_columns.iter().zip(&radii) {
                let (x, y) = polar_to_cartesian(cx, cy, r, phi);
                let rgb = sample_bilinear(image, x, y);
                for (&column, value) in columns.iter().zip(rgb) {
                    buffer.set(column, ray, value);
                }
            }
        }
        buffer
    }

    /// Dithers each column and sets bit `column % 8` of byte `column / 8`
    /// in the row of each ray.
    #[instrument(skip_all)]
    pub fn pack(&self, buffer: &ColumnBuffer) -> Animation {
        let row_bytes = buffer.columns() / 8;
        let mut animation = Animation::zeroed(buffer.n_rays(), row_bytes);
        let data = animation.data_mut();

        for column in 0..buffer.columns() {
            let byte = column / 8;
            let mask = 1u8 << (column % 8);
            for (ray, &value) in buffer.column(column).iter().enumerate() {
                if dither_bit(i32::from(value), column, ray) {
                    data[ray * row_bytes + byte] |= mask;
                }
            }
        }
        animation
    }

    pub fn assemble(&self, image: &SourceImage) -> Animation {
        self.pack(&self.sample(image))
    }
}
