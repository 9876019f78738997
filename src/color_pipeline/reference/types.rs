//! Reference table types

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::color_pipeline::common::error::{ColorTempError, Result};
use crate::color_pipeline::estimator::types::NormalizedRgb;
use crate::color_pipeline::reference::fixed_width_reader::FixedWidthTableReader;
use crate::color_pipeline::reference::layout::TableLayout;

/// CIE standard observer the chromaticity samples were computed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum MatchingFunction {
    /// CIE 1931 2 degree color matching functions (Judd-Vos corrected)
    TwoDegree,
    /// CIE 1964 10 degree color matching functions
    #[default]
    TenDegree,
}

impl MatchingFunction {
    pub const ALL: [MatchingFunction; 2] = [MatchingFunction::TwoDegree, MatchingFunction::TenDegree];

    /// Tag used in the table file
    pub fn tag(self) -> &'static str {
        match self {
            MatchingFunction::TwoDegree => "2deg",
            MatchingFunction::TenDegree => "10deg",
        }
    }
}

impl fmt::Display for MatchingFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for MatchingFunction {
    type Err = ColorTempError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "2deg" | "2-degree" | "2" => Ok(MatchingFunction::TwoDegree),
            "10deg" | "10-degree" | "10" => Ok(MatchingFunction::TenDegree),
            _ => Err(ColorTempError::UnknownMatchingFunction(s.to_string())),
        }
    }
}

/// Blackbody color at one temperature
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceSample {
    /// Display color, 0-255 per channel
    pub display: [u8; 3],
    /// Chromaticity as normalized RGB, 0-1 per channel
    pub normalized: NormalizedRgb,
}

/// Immutable blackbody table keyed by matching function, then temperature in Kelvin.
///
/// Temperatures iterate in ascending order, which the estimator relies on for
/// tie-breaking.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferenceTable {
    samples: BTreeMap<MatchingFunction, BTreeMap<u32, ReferenceSample>>,
}

impl ReferenceTable {
    /// Builds a table from `(matching function, kelvin, sample)` rows. A repeated
    /// `(matching function, kelvin)` pair keeps the last sample.
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = (MatchingFunction, u32, ReferenceSample)>,
    {
        let mut samples: BTreeMap<MatchingFunction, BTreeMap<u32, ReferenceSample>> = BTreeMap::new();
        for (matching_function, kelvin, sample) in rows {
            samples.entry(matching_function).or_default().insert(kelvin, sample);
        }
        Self { samples }
    }

    /// Loads a fixed-width table file.
    pub fn from_file<P: AsRef<Path>>(path: P, layout: &TableLayout) -> Result<Self> {
        FixedWidthTableReader::new(layout.clone()).read_file(path)
    }

    pub fn samples(&self, matching_function: MatchingFunction) -> Option<&BTreeMap<u32, ReferenceSample>> {
        self.samples.get(&matching_function)
    }

    pub fn sample(&self, matching_function: MatchingFunction, kelvin: u32) -> Option<&ReferenceSample> {
        self.samples(matching_function)?.get(&kelvin)
    }

    pub fn temperatures(&self, matching_function: MatchingFunction) -> impl Iterator<Item = u32> + '_ {
        self.samples(matching_function)
            .into_iter()
            .flat_map(|bucket| bucket.keys().copied())
    }

    pub fn matching_functions(&self) -> impl Iterator<Item = MatchingFunction> + '_ {
        self.samples.keys().copied()
    }

    /// Total number of samples across all matching functions
    pub fn len(&self) -> usize {
        self.samples.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(r: f64, g: f64, b: f64) -> ReferenceSample {
        ReferenceSample {
            display: [0, 0, 0],
            normalized: NormalizedRgb::new(r, g, b),
        }
    }

    #[test]
    fn test_matching_function_parsing() {
        assert_eq!("10deg".parse::<MatchingFunction>().unwrap(), MatchingFunction::TenDegree);
        assert_eq!(" 2deg ".parse::<MatchingFunction>().unwrap(), MatchingFunction::TwoDegree);
        assert_eq!("2-degree".parse::<MatchingFunction>().unwrap(), MatchingFunction::TwoDegree);
        assert!(matches!(
            "5deg".parse::<MatchingFunction>(),
            Err(ColorTempError::UnknownMatchingFunction(_))
        ));
        assert_eq!(MatchingFunction::default(), MatchingFunction::TenDegree);
    }

    #[test]
    fn test_last_write_wins() {
        let table = ReferenceTable::from_rows([
            (MatchingFunction::TenDegree, 3000, sample(1.0, 0.5, 0.1)),
            (MatchingFunction::TenDegree, 3000, sample(1.0, 0.6, 0.2)),
            (MatchingFunction::TwoDegree, 3000, sample(1.0, 0.4, 0.0)),
        ]);

        assert_eq!(table.len(), 2);
        let kept = table.sample(MatchingFunction::TenDegree, 3000).unwrap();
        assert_eq!(kept.normalized, NormalizedRgb::new(1.0, 0.6, 0.2));
    }

    #[test]
    fn test_temperatures_ascending() {
        let table = ReferenceTable::from_rows([
            (MatchingFunction::TenDegree, 6500, sample(1.0, 1.0, 1.0)),
            (MatchingFunction::TenDegree, 1000, sample(1.0, 0.2, 0.0)),
            (MatchingFunction::TenDegree, 3200, sample(1.0, 0.7, 0.4)),
        ]);

        let temperatures: Vec<u32> = table.temperatures(MatchingFunction::TenDegree).collect();
        assert_eq!(temperatures, vec![1000, 3200, 6500]);
        assert_eq!(table.temperatures(MatchingFunction::TwoDegree).count(), 0);
        assert!(!table.is_empty());
        assert!(ReferenceTable::default().is_empty());
    }
}
