use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{info, instrument, warn};

use crate::image_pipeline::{
    codec::{render_polar_preview, Animation, ColumnBuffer, EncoderConfig, FrameAssembler},
    common::{ConversionError, PipelineTimings, Result},
    container::{AnimationWriter, BinContainerWriter},
    source::{ImageCrateReader, SourceImage, SourceImageReader},
};

/// Encodes images into one `.bin` container.
///
/// Batches abort on the first failing image. A partially written output
/// file is removed, since the device cannot tell a truncated animation
/// from a complete one.
pub struct ImageToBinPipeline<R: SourceImageReader, W: AnimationWriter> {
    reader: R,
    writer: W,
    assembler: FrameAssembler,
    preview_dir: Option<PathBuf>,
}

impl ImageToBinPipeline<ImageCrateReader, BinContainerWriter> {
    pub fn new(config: EncoderConfig) -> Result<Self> {
        Self::with_custom(ImageCrateReader, BinContainerWriter::default(), config)
    }
}

impl<R: SourceImageReader, W: AnimationWriter> ImageToBinPipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: EncoderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            reader,
            writer,
            assembler: FrameAssembler::new(config),
            preview_dir: None,
        })
    }

    /// Also save a polar preview PNG of every input into `dir`.
    pub fn with_preview_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.preview_dir = Some(dir.into());
        self
    }

    fn validate_dimensions(&self, width: usize, height: usize) -> Result<()> {
        if width == 0 || height == 0 {
            return Err(ConversionError::InvalidDimensions(width, height));
        }

        if width != height {
            warn!(
                "Image {}x{} is not square, sampling the top-left {}x{} region",
                width,
                height,
                width.min(height),
                width.min(height)
            );
        }

        Ok(())
    }

    fn decode_and_sample(&self, input_data: &[u8], timings: &mut PipelineTimings) -> Result<ColumnBuffer> {
        let image = {
            let _span = tracing::info_span!("decode_image").entered();
            timings.measure("decode_image", || self.reader.read_image(input_data))?
        };

        self.sample_image(&image, timings)
    }

    fn sample_image(&self, image: &SourceImage, timings: &mut PipelineTimings) -> Result<ColumnBuffer> {
        {
            let _span = tracing::info_span!("validate_dimensions",
                width = image.width(),
                height = image.height()
            ).entered();
            self.validate_dimensions(image.width(), image.height())?;
        }

        Ok(timings.measure("sample", || self.assembler.sample(image)))
    }

    /// Encodes an already decoded image.
    pub fn encode_image(&self, image: &SourceImage) -> Result<Animation> {
        let mut timings = PipelineTimings::new();
        let buffer = self.sample_image(image, &mut timings)?;
        let animation = timings.measure("pack", || self.assembler.pack(&buffer));
        timings.log_summary();
        Ok(animation)
    }

    /// Decodes and encodes one image file's bytes.
    #[instrument(skip(self, input_data), fields(input_size = input_data.len()))]
    pub fn encode(&self, input_data: &[u8]) -> Result<Animation> {
        let mut timings = PipelineTimings::new();
        let buffer = self.decode_and_sample(input_data, &mut timings)?;
        let animation = timings.measure("pack", || self.assembler.pack(&buffer));
        timings.log_summary();
        Ok(animation)
    }

    pub fn write_header(&self, output: &mut dyn Write) -> Result<()> {
        self.writer.write_header(output, self.config())
    }

    /// Encodes one image and appends it, with padding, to `output`.
    pub fn convert(&self, input_data: &[u8], output: &mut dyn Write) -> Result<()> {
        let animation = self.encode(input_data)?;
        let _span = tracing::info_span!("write_animation").entered();
        self.writer.write_animation(&animation, output, self.config())
    }

    /// Writes a complete container holding `inputs` in order.
    pub fn convert_all(&self, inputs: &[&[u8]], output: &mut dyn Write) -> Result<()> {
        if inputs.is_empty() {
            return Err(ConversionError::NoInputs);
        }
        self.write_header(output)?;
        for (index, input_data) in inputs.iter().enumerate() {
            info!("Encoding image {}/{}", index + 1, inputs.len());
            self.convert(input_data, output)?;
        }
        Ok(())
    }

    #[instrument(skip(self, inputs, output_path), fields(images = inputs.len()))]
    pub fn convert_files<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        inputs: &[P],
        output_path: Q,
    ) -> Result<()> {
        if inputs.is_empty() {
            return Err(ConversionError::NoInputs);
        }
        let output_path = output_path.as_ref();

        let file = {
            let _span = tracing::info_span!("create_output_file").entered();
            File::create(output_path).map_err(|e| {
                ConversionError::OutputWriteError(format!("{}: {}", output_path.display(), e))
            })?
        };
        let mut output = BufWriter::new(file);

        let result = self
            .write_files(inputs, &mut output)
            .and_then(|()| output.flush().map_err(ConversionError::from));
        drop(output);

        if let Err(e) = result {
            warn!("Removing incomplete output {}", output_path.display());
            if let Err(remove_err) = std::fs::remove_file(output_path) {
                warn!("Could not remove {}: {}", output_path.display(), remove_err);
            }
            return Err(e);
        }

        info!(
            output = %output_path.display(),
            bytes = self.config().container_size(inputs.len()),
            "Container written"
        );
        Ok(())
    }

    fn write_files<P: AsRef<Path>>(&self, inputs: &[P], output: &mut dyn Write) -> Result<()> {
        self.write_header(output)?;

        for (index, input_path) in inputs.iter().enumerate() {
            let input_path = input_path.as_ref();
            info!(input = %input_path.display(), "Encoding {}/{}", index + 1, inputs.len());

            let mut timings = PipelineTimings::new();
            let input_data = {
                let _span = tracing::info_span!("read_input_file").entered();
                timings.measure("read_input_file", || std::fs::read(input_path)).map_err(|e| {
                    ConversionError::InputReadError(format!("{}: {}", input_path.display(), e))
                })?
            };

            let buffer = self.decode_and_sample(&input_data, &mut timings)?;
            if let Some(dir) = &self.preview_dir {
                timings.measure("preview", || self.save_preview(&buffer, dir, index, input_path))?;
            }
            let animation = timings.measure("pack", || self.assembler.pack(&buffer));

            {
                let _span = tracing::info_span!("write_animation").entered();
                timings.measure("write_animation", || {
                    self.writer.write_animation(&animation, output, self.config())
                })?;
            }
            timings.log_summary();
        }
        Ok(())
    }

    fn save_preview(&self, buffer: &ColumnBuffer, dir: &Path, index: usize, input_path: &Path) -> Result<()> {
        let stem = input_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string());
        let path = dir.join(format!("{:02}_{}.polar.png", index + 1, stem));

        render_polar_preview(buffer, self.assembler.layout())
            .save(&path)
            .map_err(|e| ConversionError::OutputWriteError(format!("{}: {}", path.display(), e)))?;

        info!(preview = %path.display(), "Polar preview saved");
        Ok(())
    }

    pub fn config(&self) -> &EncoderConfig {
        self.assembler.config()
    }

    pub fn set_config(&mut self, config: EncoderConfig) -> Result<()> {
        config.validate()?;
        self.assembler = FrameAssembler::new(config);
        Ok(())
    }
}
