//! Container writing module
//!
//! Frames encoded animations into the device's `.bin` file.

mod writer;
mod bin_writer;
pub mod upload;

pub use writer::AnimationWriter;
pub use bin_writer::{BinContainerWriter, HeaderFill};
pub use upload::UploadPlan;
