//! Frame data types

use crate::color_pipeline::common::error::{ColorTempError, Result};

/// Decoded 8-bit frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbFrame {
    /// Width of the frame in pixels
    pub width: usize,
    /// Height of the frame in pixels
    pub height: usize,
    /// Interleaved channels per pixel (1 for grayscale, 3 for RGB, 4 for RGBA)
    pub channels: usize,
    /// Pixel data interleaved [R, G, B, R, G, B, ...]
    pub data: Vec<u8>,
}

impl RgbFrame {
    pub fn new(width: usize, height: usize, channels: usize, data: Vec<u8>) -> Result<Self> {
        let frame = Self { width, height, channels, data };
        frame.validate()?;
        Ok(frame)
    }

    /// Three-channel frame from interleaved RGB bytes
    pub fn from_rgb(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        Self::new(width, height, 3, data)
    }

    /// Frame filled with one RGB color
    pub fn filled(width: usize, height: usize, rgb: [u8; 3]) -> Self {
        Self {
            width,
            height,
            channels: 3,
            data: rgb.repeat(width * height),
        }
    }

    /// `width * height`, saturating at `usize::MAX`
    pub fn pixel_count(&self) -> usize {
        self.width.saturating_mul(self.height)
    }

    /// Fails when the frame is empty or the buffer does not hold
    /// `width * height * channels` bytes.
    pub fn validate(&self) -> Result<()> {
        let expected = self.width
            .checked_mul(self.height)
            .and_then(|pixels| pixels.checked_mul(self.channels));
        if self.pixel_count() == 0 || self.channels == 0 || expected != Some(self.data.len()) {
            return Err(ColorTempError::InvalidDimensions(self.width, self.height));
        }
        Ok(())
    }

    /// True when every pixel has identical R, G and B values, as produced by
    /// cameras in night mode.
    pub fn is_monochrome(&self) -> bool {
        self.channels >= 3
            && self.data
                .chunks_exact(self.channels)
                .all(|px| px[0] == px[1] && px[1] == px[2])
    }
}

/// One channel of a frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelLayer {
    pub width: usize,
    pub height: usize,
    /// Row-major values, `width * height` long
    pub data: Vec<u8>,
}

impl ChannelLayer {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
