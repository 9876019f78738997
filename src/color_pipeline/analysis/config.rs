//! Frame analysis configuration types

use crate::color_pipeline::frame::ReductionMode;
use crate::color_pipeline::reference::MatchingFunction;

/// Configuration for frame analysis
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// How each channel layer is reduced
    pub reduction: ReductionMode,
    /// Reference samples to match against
    pub matching_function: MatchingFunction,
    /// Whether to check frame size and buffer length before any per-pixel work.
    /// Channel splitting still rejects a malformed buffer when this is off.
    pub validate_dimensions: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            reduction: ReductionMode::Mean,
            matching_function: MatchingFunction::TenDegree,
            validate_dimensions: true,
        }
    }
}

impl AnalysisConfig {
    pub fn builder() -> AnalysisConfigBuilder {
        AnalysisConfigBuilder::default()
    }
}

/// Builder for AnalysisConfig
#[derive(Default)]
pub struct AnalysisConfigBuilder {
    reduction: Option<ReductionMode>,
    matching_function: Option<MatchingFunction>,
    validate_dimensions: Option<bool>,
}

impl AnalysisConfigBuilder {
    pub fn reduction(mut self, reduction: ReductionMode) -> Self {
        self.reduction = Some(reduction);
        self
    }

    pub fn matching_function(mut self, matching_function: MatchingFunction) -> Self {
        self.matching_function = Some(matching_function);
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn build(self) -> AnalysisConfig {
        let default = AnalysisConfig::default();
        AnalysisConfig {
            reduction: self.reduction.unwrap_or(default.reduction),
            matching_function: self.matching_function.unwrap_or(default.matching_function),
            validate_dimensions: self.validate_dimensions.unwrap_or(default.validate_dimensions),
        }
    }
}
