//! Frame decoder backed by the `image` crate.
//!
//! Accepts any still-image format `image` can decode (PNG, JPEG, BMP, TIFF, ...).
//! Images without color information are decoded as single-channel frames so the
//! reducer can reject them; everything else is converted to 8-bit RGB.

use tracing::debug;

use crate::color_pipeline::common::error::{ColorTempError, Result};
use crate::color_pipeline::frame::decoder::FrameDecoder;
use crate::color_pipeline::frame::types::RgbFrame;

pub struct ImageFrameDecoder;

impl FrameDecoder for ImageFrameDecoder {
    fn decode_frame(&self, data: &[u8]) -> Result<RgbFrame> {
        debug!("Decoding frame, {} bytes", data.len());

        let decoded = image::load_from_memory(data)
            .map_err(|e| ColorTempError::DecodeError(e.to_string()))?;

        let width = decoded.width() as usize;
        let height = decoded.height() as usize;
        let color_type = decoded.color();

        debug!("Decoded frame: {}x{} {:?}", width, height, color_type);

        if color_type.has_color() {
            RgbFrame::from_rgb(width, height, decoded.into_rgb8().into_raw())
        } else {
            RgbFrame::new(width, height, 1, decoded.into_luma8().into_raw())
        }
    }
}
