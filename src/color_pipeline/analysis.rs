//! Per-frame analysis module
//!
//! This module ties frame decoding, reduction and temperature estimation into
//! one pipeline that turns a frame into a [`FrameReport`].

mod config;
mod pipeline;
mod report;


pub use config::{AnalysisConfig, AnalysisConfigBuilder};
pub use pipeline::FrameAnalysisPipeline;
pub use report::FrameReport;
