//! Image to propeller-display pipeline
//!
//! Decodes raster images, resamples them onto the ring's polar grid,
//! dithers every LED channel to one bit and frames the packed rows into
//! the device's `.bin` container.

pub mod source;
pub mod polar;
pub mod codec;
pub mod container;
pub mod conversions;
pub mod common;

pub use common::{
    ConversionError,
    Result,
};

pub use source::{
    SourceImage,
    SourceImageReader,
    ImageCrateReader,
};

pub use codec::{
    Animation,
    EncoderConfig,
    EncoderConfigBuilder,
    FrameAssembler,
};

pub use container::{
    AnimationWriter,
    BinContainerWriter,
    HeaderFill,
    UploadPlan,
};

pub use conversions::{
    ImageToBinPipeline,
};
