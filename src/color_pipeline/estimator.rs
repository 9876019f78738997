//! Color temperature estimation module
//!
//! This module normalizes RGB triples and finds the nearest blackbody sample in
//! a [`ReferenceTable`](crate::color_pipeline::reference::ReferenceTable).

mod temperature_estimator;
pub mod types;

pub use temperature_estimator::TemperatureEstimator;
pub use types::{ColorSample, EstimationResult, NormalizedRgb};
