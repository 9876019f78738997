use std::fmt;

use crate::color_pipeline::estimator::types::{ColorSample, EstimationResult};

/// Everything computed for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    pub width: usize,
    pub height: usize,
    /// Reduced average color and its normalized form
    pub sample: ColorSample,
    /// Brightest average channel as a percentage
    pub brightness: u8,
    pub estimation: EstimationResult,
    /// Display color rebuilt from the normalized triple
    pub restored: [u8; 3],
    /// All three channels were identical in every pixel
    pub monochrome: bool,
}

impl fmt::Display for FrameReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.sample.rgb;
        let n = self.sample.normalized;
        write!(
            f,
            "Average R,G,B = {}, {}, {} ({}, {}, {}), brightness {}%, color temperature {} K ({})",
            r, g, b, n.r, n.g, n.b, self.brightness, self.estimation.kelvin, self.estimation.confidence,
        )?;
        if self.monochrome {
            f.write_str(" [monochrome]")?;
        }
        Ok(())
    }
}
