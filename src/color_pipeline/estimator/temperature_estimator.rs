use std::sync::Arc;

use tracing::debug;

use crate::color_pipeline::common::error::{ColorTempError, Result};
use crate::color_pipeline::estimator::types::{ColorSample, EstimationResult, NormalizedRgb};
use crate::color_pipeline::reference::types::{MatchingFunction, ReferenceTable};

/// Decimal digits kept by [`TemperatureEstimator::normalize`]
const NORMALIZED_DIGITS: i32 = 4;

/// Decimal digits kept in [`EstimationResult::confidence`]
const CONFIDENCE_DIGITS: i32 = 2;

const CHANNEL_MAX: f64 = 255.0;

/// Nearest-match color temperature estimator.
///
/// Holds a shared, read-only [`ReferenceTable`]. Cloning the estimator shares the
/// same table, so several frame pipelines can run against one loaded copy.
#[derive(Debug, Clone)]
pub struct TemperatureEstimator {
    table: Arc<ReferenceTable>,
}

impl TemperatureEstimator {
    pub fn new(table: impl Into<Arc<ReferenceTable>>) -> Self {
        Self { table: table.into() }
    }

    pub fn table(&self) -> &ReferenceTable {
        &self.table
    }

    /// Scales `(r, g, b)` so the brightest channel becomes 1.0, rounded to four
    /// decimals. An all-black triple comes back as `(0, 0, 0)`.
    pub fn normalize(r: u8, g: u8, b: u8) -> NormalizedRgb {
        let max_value = r.max(g).max(b);
        if max_value == 0 {
            return NormalizedRgb::new(f64::from(r), f64::from(g), f64::from(b));
        }

        let k = 1.0 / f64::from(max_value);
        NormalizedRgb::new(
            round_to(f64::from(r) * k, NORMALIZED_DIGITS),
            round_to(f64::from(g) * k, NORMALIZED_DIGITS),
            round_to(f64::from(b) * k, NORMALIZED_DIGITS),
        )
    }

    /// Rebuilds a 0-255 triple from normalized values: scale by 255, truncate,
    /// clamp.
    pub fn denormalize(color: NormalizedRgb) -> [u8; 3] {
        color.to_array().map(|v| (v * CHANNEL_MAX).trunc().clamp(0.0, CHANNEL_MAX) as u8)
    }

    /// Reduced channel values paired with their normalized form.
    pub fn sample(r: u8, g: u8, b: u8) -> ColorSample {
        ColorSample {
            rgb: [r, g, b],
            normalized: Self::normalize(r, g, b),
        }
    }

    /// Finds the reference temperature whose normalized triple is closest to
    /// `color` under the Euclidean metric.
    ///
    /// Samples are scanned in ascending temperature order and only a strictly
    /// smaller distance replaces the current best, so ties go to the lowest
    /// temperature.
    ///
    /// # Errors
    ///
    /// [`ColorTempError::EmptyMatchingFunction`] when the table holds no samples
    /// for `matching_function`.
    pub fn estimate(&self, color: NormalizedRgb, matching_function: MatchingFunction) -> Result<EstimationResult> {
        let bucket = self.table
            .samples(matching_function)
            .filter(|bucket| !bucket.is_empty())
            .ok_or(ColorTempError::EmptyMatchingFunction(matching_function))?;

        let mut best: Option<(u32, f64)> = None;
        for (&kelvin, sample) in bucket {
            let distance = color.distance(&sample.normalized);
            if best.is_none_or(|(_, best_distance)| distance < best_distance) {
                best = Some((kelvin, distance));
            }
        }

        let (kelvin, distance) = best.ok_or(ColorTempError::EmptyMatchingFunction(matching_function))?;
        debug!(kelvin, distance, cmf = %matching_function, "Nearest reference sample");

        Ok(EstimationResult {
            kelvin,
            confidence: round_to(1.0 - distance, CONFIDENCE_DIGITS),
            matching_function,
        })
    }

    /// Normalizes `(r, g, b)` and estimates in one step.
    pub fn estimate_rgb(&self, r: u8, g: u8, b: u8, matching_function: MatchingFunction) -> Result<EstimationResult> {
        self.estimate(Self::normalize(r, g, b), matching_function)
    }
}

/// Rounds to `digits` decimals, exact halves to even.
fn round_to(value: f64, digits: i32) -> f64 {
    let scale = 10f64.powi(digits);
    (value * scale).round_ties_even() / scale
}
