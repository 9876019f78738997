//! Color temperature pipeline module
//!
//! This module turns raw RGB frames into an average color and a correlated color
//! temperature, with separate modules for the blackbody reference table, the
//! nearest-match estimator, frame reduction, and per-frame orchestration.

pub mod common;
pub mod reference;
pub mod estimator;
pub mod frame;
pub mod analysis;

pub use common::{
    ColorTempError,
    Result,
};

pub use reference::{
    FixedWidthTableReader,
    MatchingFunction,
    ReferenceSample,
    ReferenceTable,
    ReferenceTableReader,
    TableLayout,
};

pub use estimator::{
    ColorSample,
    EstimationResult,
    NormalizedRgb,
    TemperatureEstimator,
};

pub use frame::{
    ChannelLayer,
    FrameDecoder,
    FrameReducer,
    ImageFrameDecoder,
    ReductionMode,
    RgbFrame,
};

pub use analysis::{
    AnalysisConfig,
    AnalysisConfigBuilder,
    FrameAnalysisPipeline,
    FrameReport,
};
