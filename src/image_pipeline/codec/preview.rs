//! Polar-unwrapped rendering of sampled columns, for eyeballing what the
//! ring will show before dithering. Column `x` is the LED index from the
//! hub outwards, row `y` is the ray.

use image::{Rgb, RgbImage};

use crate::image_pipeline::codec::bit_layout::{BitLayout, Channel};
use crate::image_pipeline::codec::frame::ColumnBuffer;

pub fn render_polar_preview(buffer: &ColumnBuffer, layout: &BitLayout) -> RgbImage {
    let leds = buffer.columns() / 3;
    RgbImage::from_fn(leds as u32, buffer.n_rays() as u32, |led, ray| {
        Rgb(Channel::ALL.map(|channel| buffer.get(layout.column(led as usize, channel), ray as usize)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_pipeline::codec::{EncoderConfig, FrameAssembler};
    use crate::image_pipeline::source::SourceImage;

    #[test]
    fn preview_has_one_pixel_per_led_and_ray() {
        let assembler = FrameAssembler::new(EncoderConfig::builder().n_rays(10).leds(32).build());
        let buffer = assembler.sample(&SourceImage::new_fill(50, 50, [12, 34, 56]));
        let preview = render_polar_preview(&buffer, assembler.layout());

        assert_eq!(preview.dimensions(), (16, 10));
        assert!(preview.pixels().all(|p| p.0 == [12, 34, 56]));
    }

    #[test]
    fn preview_undoes_the_bit_layout() {
        let layout = BitLayout::new(24);
        let mut buffer = ColumnBuffer::new(24, 2);
        buffer.set(layout.column(3, Channel::Green), 1, 200);

        let preview = render_polar_preview(&buffer, &layout);
        assert_eq!(preview.get_pixel(3, 1).0, [0, 200, 0]);
        assert_eq!(preview.get_pixel(3, 0).0, [0, 0, 0]);
    }
}
