use crate::color_pipeline::common::error::Result;
use crate::color_pipeline::frame::types::RgbFrame;

pub trait FrameDecoder {
    fn decode_frame(&self, data: &[u8]) -> Result<RgbFrame>;
}
