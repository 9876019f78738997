//! Reduces a frame to one average RGB triple.

use std::fmt;

use tracing::{debug, warn};

use crate::color_pipeline::common::error::{ColorTempError, Result};
use crate::color_pipeline::frame::types::{ChannelLayer, RgbFrame};

/// How a channel layer is reduced to one value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReductionMode {
    /// Arithmetic mean of all pixels
    #[default]
    Mean,
    /// Statistical median of all pixels
    Median,
}

impl ReductionMode {
    pub const ALL: [ReductionMode; 2] = [ReductionMode::Mean, ReductionMode::Median];

    pub fn name(self) -> &'static str {
        match self {
            ReductionMode::Mean => "mean",
            ReductionMode::Median => "median",
        }
    }

    /// Exact, case-insensitive lookup.
    pub fn lookup(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(name.trim()))
    }

    /// Lenient lookup: an unrecognized name selects [`ReductionMode::Mean`]
    /// and logs a warning instead of failing.
    pub fn from_name(name: &str) -> Self {
        Self::lookup(name).unwrap_or_else(|| {
            warn!(requested = name, "Unknown reduction mode, using mean");
            ReductionMode::Mean
        })
    }
}

impl fmt::Display for ReductionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub struct FrameReducer;

impl FrameReducer {
    /// Splits an interleaved frame into R, G and B layers.
    ///
    /// Frames with fewer than three channels are rejected with
    /// [`ColorTempError::UnsupportedChannels`]. A fourth (alpha) channel is
    /// dropped.
    pub fn split_channels(frame: &RgbFrame) -> Result<[ChannelLayer; 3]> {
        if frame.channels < 3 {
            return Err(ColorTempError::UnsupportedChannels(frame.channels));
        }
        frame.validate()?;

        let pixels = frame.pixel_count();
        let mut layers: [Vec<u8>; 3] = std::array::from_fn(|_| Vec::with_capacity(pixels));
        for px in frame.data.chunks_exact(frame.channels) {
            for (layer, &value) in layers.iter_mut().zip(px) {
                layer.push(value);
            }
        }

        debug!(width = frame.width, height = frame.height, channels = frame.channels, "Split frame into layers");

        Ok(layers.map(|data| ChannelLayer {
            width: frame.width,
            height: frame.height,
            data,
        }))
    }

    /// Reduces one layer to a value in 0-255, rounding half to even.
    pub fn reduce(layer: &ChannelLayer, mode: ReductionMode) -> Result<u8> {
        if layer.is_empty() {
            return Err(ColorTempError::InvalidDimensions(layer.width, layer.height));
        }

        let value = match mode {
            ReductionMode::Mean => mean(&layer.data),
            ReductionMode::Median => median(&layer.data),
        };

        Ok(value.round_ties_even().clamp(0.0, 255.0) as u8)
    }

    pub fn reduce_layers(layers: &[ChannelLayer; 3], mode: ReductionMode) -> Result<[u8; 3]> {
        let [r, g, b] = layers;
        Ok([
            Self::reduce(r, mode)?,
            Self::reduce(g, mode)?,
            Self::reduce(b, mode)?,
        ])
    }

    /// Brightness in percent from the brightest channel: `max * 100 / 255`,
    /// truncated.
    pub fn brightness(r: u8, g: u8, b: u8) -> u8 {
        let max = u32::from(r.max(g).max(b));
        (max * 100 / 255) as u8
    }
}

fn mean(values: &[u8]) -> f64 {
    let sum: u64 = values.iter().map(|&v| u64::from(v)).sum();
    sum as f64 / values.len() as f64
}

fn median(values: &[u8]) -> f64 {
    let mut histogram = [0usize; 256];
    for &v in values {
        histogram[usize::from(v)] += 1;
    }

    let n = values.len();
    let upper = nth_value(&histogram, n / 2);
    if n % 2 == 1 {
        return f64::from(upper);
    }
    let lower = nth_value(&histogram, n / 2 - 1);
    (f64::from(lower) + f64::from(upper)) / 2.0
}

/// Value at sorted position `index` given per-value counts
fn nth_value(histogram: &[usize; 256], index: usize) -> u8 {
    let mut seen = 0;
    for (value, &count) in histogram.iter().enumerate() {
        seen += count;
        if seen > index {
            return value as u8;
        }
    }
    u8::MAX
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layer(width: usize, height: usize, data: Vec<u8>) -> ChannelLayer {
        ChannelLayer { width, height, data }
    }

    #[test]
    fn test_mean_and_median() {
        let grid = layer(2, 2, vec![10, 10, 10, 250]);
        assert_eq!(FrameReducer::reduce(&grid, ReductionMode::Median).unwrap(), 10);
        assert_eq!(FrameReducer::reduce(&grid, ReductionMode::Mean).unwrap(), 70);
    }

    #[test]
    fn test_median_even_count_averages_middle_pair() {
        let grid = layer(4, 1, vec![1, 200, 4, 100]);
        // middle pair 4 and 100
        assert_eq!(FrameReducer::reduce(&grid, ReductionMode::Median).unwrap(), 52);

        let odd = layer(3, 1, vec![9, 1, 5]);
        assert_eq!(FrameReducer::reduce(&odd, ReductionMode::Median).unwrap(), 5);
    }

    #[test]
    fn test_rounding_half_to_even() {
        // 2.5 -> 2, 3.5 -> 4
        assert_eq!(FrameReducer::reduce(&layer(2, 1, vec![2, 3]), ReductionMode::Mean).unwrap(), 2);
        assert_eq!(FrameReducer::reduce(&layer(2, 1, vec![3, 4]), ReductionMode::Mean).unwrap(), 4);
        assert_eq!(FrameReducer::reduce(&layer(2, 1, vec![3, 4]), ReductionMode::Median).unwrap(), 4);
    }

    #[test]
    fn test_saturated_layer() {
        let grid = layer(2, 2, vec![255; 4]);
        assert_eq!(FrameReducer::reduce(&grid, ReductionMode::Mean).unwrap(), 255);
        assert_eq!(FrameReducer::reduce(&grid, ReductionMode::Median).unwrap(), 255);
    }

    #[test]
    fn test_empty_layer_fails() {
        let empty = layer(0, 0, Vec::new());
        assert!(matches!(
            FrameReducer::reduce(&empty, ReductionMode::Mean),
            Err(ColorTempError::InvalidDimensions(0, 0))
        ));
    }

    #[test]
    fn test_mode_names() {
        assert_eq!(ReductionMode::lookup("median"), Some(ReductionMode::Median));
        assert_eq!(ReductionMode::lookup("MEAN"), Some(ReductionMode::Mean));
        assert_eq!(ReductionMode::lookup("mode"), None);
        assert_eq!(ReductionMode::from_name("median"), ReductionMode::Median);
        assert_eq!(ReductionMode::from_name("average"), ReductionMode::Mean);
        assert_eq!(ReductionMode::default(), ReductionMode::Mean);
    }

    #[test]
    fn test_brightness() {
        assert_eq!(FrameReducer::brightness(200, 100, 50), 78);
        assert_eq!(FrameReducer::brightness(255, 0, 0), 100);
        assert_eq!(FrameReducer::brightness(0, 0, 0), 0);
        assert_eq!(FrameReducer::brightness(1, 2, 3), 1);
    }

    #[test]
    fn test_split_channels() {
        let frame = RgbFrame::from_rgb(2, 1, vec![1, 2, 3, 4, 5, 6]).unwrap();
        let [r, g, b] = FrameReducer::split_channels(&frame).unwrap();
        assert_eq!(r.data, vec![1, 4]);
        assert_eq!(g.data, vec![2, 5]);
        assert_eq!(b.data, vec![3, 6]);
        assert_eq!((r.width, r.height), (2, 1));
    }

    #[test]
    fn test_split_drops_alpha() {
        let frame = RgbFrame::new(1, 2, 4, vec![10, 20, 30, 255, 40, 50, 60, 0]).unwrap();
        let [r, g, b] = FrameReducer::split_channels(&frame).unwrap();
        assert_eq!(r.data, vec![10, 40]);
        assert_eq!(g.data, vec![20, 50]);
        assert_eq!(b.data, vec![30, 60]);
    }

    #[test]
    fn test_split_rejects_grayscale() {
        let frame = RgbFrame::new(2, 2, 1, vec![7; 4]).unwrap();
        assert!(matches!(
            FrameReducer::split_channels(&frame),
            Err(ColorTempError::UnsupportedChannels(1))
        ));

        let two = RgbFrame::new(1, 1, 2, vec![7, 255]).unwrap();
        assert!(matches!(
            FrameReducer::split_channels(&two),
            Err(ColorTempError::UnsupportedChannels(2))
        ));
    }

    #[test]
    fn test_split_rejects_bad_buffer() {
        let frame = RgbFrame { width: 2, height: 2, channels: 3, data: vec![0; 5] };
        assert!(matches!(
            FrameReducer::split_channels(&frame),
            Err(ColorTempError::InvalidDimensions(2, 2))
        ));

        let huge = RgbFrame { width: usize::MAX, height: 2, channels: 3, data: vec![0; 6] };
        assert!(matches!(
            FrameReducer::split_channels(&huge),
            Err(ColorTempError::InvalidDimensions(usize::MAX, 2))
        ));
    }
}
