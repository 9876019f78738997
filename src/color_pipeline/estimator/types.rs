//! Estimator value types

use crate::color_pipeline::reference::types::MatchingFunction;

/// RGB scaled so the brightest channel is 1.0
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NormalizedRgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl NormalizedRgb {
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    pub fn to_array(self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// Euclidean (L2) distance in normalized RGB space
    pub fn distance(&self, other: &NormalizedRgb) -> f64 {
        let dr = self.r - other.r;
        let dg = self.g - other.g;
        let db = self.b - other.b;
        (dr * dr + dg * dg + db * db).sqrt()
    }
}

/// Average color of one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorSample {
    /// Reduced channel values, 0-255
    pub rgb: [u8; 3],
    pub normalized: NormalizedRgb,
}

/// Nearest blackbody match for a color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimationResult {
    pub kelvin: u32,
    /// `1 - distance` rounded to two decimals. Negative for very poor matches.
    pub confidence: f64,
    pub matching_function: MatchingFunction,
}
