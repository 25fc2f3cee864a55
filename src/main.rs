use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use led_hologram_rs::image_pipeline::{
    BinContainerWriter, EncoderConfig, HeaderFill, ImageCrateReader, ImageToBinPipeline, UploadPlan,
};
use led_hologram_rs::logger;

use tracing::{error, info};

/// Encode images into a `.bin` animation for 224 LED holographic propeller displays.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Input images, one animation each, in playback order
    #[arg(required = true)]
    images: Vec<PathBuf>,

    /// Output file
    #[arg(short, long, default_value = "rgb_enc_01.bin")]
    output: PathBuf,

    /// Seed for the header filler bytes (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Directory to save a polar-unwrapped preview PNG of each input into
    #[arg(long)]
    preview_dir: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init(args.verbose);

    let config = EncoderConfig::default();
    let fill = args.seed.map_or(HeaderFill::Random, HeaderFill::Seeded);
    let mut pipeline = ImageToBinPipeline::with_custom(ImageCrateReader, BinContainerWriter::new(fill), config)
        .context("invalid encoder configuration")?;
    if let Some(dir) = &args.preview_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("creating preview directory {}", dir.display()))?;
        pipeline = pipeline.with_preview_dir(dir);
    }

    info!(
        "Encoding {} image(s): {} rays x {} LEDs, {} bytes per row",
        args.images.len(),
        pipeline.config().n_rays,
        pipeline.config().leds,
        pipeline.config().row_bytes()
    );

    if let Err(e) = pipeline.convert_files(&args.images, &args.output) {
        error!("Encoding failed: {}", e);
        return Err(e).with_context(|| format!("writing {}", args.output.display()));
    }

    let size = pipeline.config().container_size(args.images.len());
    let plan = UploadPlan::for_file_size(size);
    info!(
        "Wrote {} ({} bytes); upload takes {} packets of {} bytes, {} bytes padding",
        args.output.display(),
        size,
        plan.packets,
        plan.chunk_size,
        plan.padding
    );

    Ok(())
}
