use std::path::Path;

use tracing::{debug, info, instrument};

use crate::color_pipeline::{
    analysis::{config::AnalysisConfig, report::FrameReport},
    common::error::{ColorTempError, Result},
    estimator::TemperatureEstimator,
    frame::{FrameDecoder, FrameReducer, ImageFrameDecoder, RgbFrame},
};

/// Decodes a frame, reduces it to an average color and estimates its color
/// temperature. Each call returns a self-contained [`FrameReport`]; nothing is
/// carried over between frames.
pub struct FrameAnalysisPipeline<D: FrameDecoder> {
    decoder: D,
    estimator: TemperatureEstimator,
    config: AnalysisConfig,
}

impl FrameAnalysisPipeline<ImageFrameDecoder> {
    pub fn new(estimator: TemperatureEstimator, config: AnalysisConfig) -> Self {
        Self {
            decoder: ImageFrameDecoder,
            estimator,
            config,
        }
    }
}

impl<D: FrameDecoder> FrameAnalysisPipeline<D> {
    pub fn with_custom(decoder: D, estimator: TemperatureEstimator, config: AnalysisConfig) -> Self {
        Self {
            decoder,
            estimator,
            config,
        }
    }

    fn validate_dimensions(&self, frame: &RgbFrame) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        frame.validate()
    }

    #[instrument(skip(self, frame), fields(width = frame.width, height = frame.height))]
    pub fn analyze_frame(&self, frame: &RgbFrame) -> Result<FrameReport> {
        {
            let _span = tracing::info_span!("validate_dimensions").entered();
            self.validate_dimensions(frame)?;
        }

        let layers = {
            let _span = tracing::info_span!("split_channels").entered();
            FrameReducer::split_channels(frame)?
        };

        let [r, g, b] = {
            let _span = tracing::info_span!("reduce_channels", mode = %self.config.reduction).entered();
            FrameReducer::reduce_layers(&layers, self.config.reduction)?
        };

        let sample = TemperatureEstimator::sample(r, g, b);
        let estimation = {
            let _span = tracing::info_span!("estimate_temperature",
                cmf = %self.config.matching_function
            ).entered();
            self.estimator.estimate(sample.normalized, self.config.matching_function)?
        };

        let monochrome = frame.is_monochrome();
        if monochrome {
            debug!("Frame channels are identical");
        }

        Ok(FrameReport {
            width: frame.width,
            height: frame.height,
            sample,
            brightness: FrameReducer::brightness(r, g, b),
            estimation,
            restored: TemperatureEstimator::denormalize(sample.normalized),
            monochrome,
        })
    }

    #[instrument(skip(self, input_data), fields(input_size = input_data.len()))]
    pub fn analyze(&self, input_data: &[u8]) -> Result<FrameReport> {
        let frame = {
            let _span = tracing::info_span!("decode_frame").entered();
            self.decoder.decode_frame(input_data)?
        };

        let report = self.analyze_frame(&frame)?;

        info!(
            kelvin = report.estimation.kelvin,
            confidence = report.estimation.confidence,
            "Frame analyzed"
        );
        Ok(report)
    }

    #[instrument(skip(self, input_path))]
    pub fn analyze_file<P: AsRef<Path>>(&self, input_path: P) -> Result<FrameReport> {
        let input_path = input_path.as_ref();

        info!(input = %input_path.display(), "Analyzing file");

        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(input_path).map_err(|e| {
                ColorTempError::InputReadError(format!("{}: {}", input_path.display(), e))
            })?
        };

        self.analyze(&input_data)
    }

    pub fn estimator(&self) -> &TemperatureEstimator {
        &self.estimator
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: AnalysisConfig) {
        self.config = config;
    }
}
