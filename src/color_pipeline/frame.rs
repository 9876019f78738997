//! Frame handling module
//!
//! This module decodes frames, splits them into channel layers and reduces each
//! layer to a single value.

mod decoder;
mod image_decoder;
mod reducer;
pub mod types;

pub use decoder::FrameDecoder;
pub use image_decoder::ImageFrameDecoder;
pub use reducer::{FrameReducer, ReductionMode};
pub use types::{ChannelLayer, RgbFrame};
