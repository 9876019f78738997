//! Column layout of the fixed-width reference table

use std::ops::Range;

/// Where the data rows and fields live inside a reference table file.
///
/// Row numbers are 0-based line indices. Column ranges are byte offsets into a
/// row, end-exclusive. The defaults describe the blackbody dataset this crate
/// is usually run against: 19 header lines, data through line 800, footer after.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableLayout {
    /// First line parsed as data
    pub first_data_row: usize,
    /// Last line parsed as data (inclusive). `None` parses until end of file.
    pub last_data_row: Option<usize>,
    pub temperature: Range<usize>,
    pub matching_function: Range<usize>,
    /// Normalized r, g, b columns
    pub normalized: [Range<usize>; 3],
    /// Display r, g, b columns (0-255)
    pub display: [Range<usize>; 3],
}

impl Default for TableLayout {
    fn default() -> Self {
        Self {
            first_data_row: 19,
            last_data_row: Some(800),
            temperature: 0..6,
            matching_function: 9..15,
            normalized: [44..51, 52..58, 59..65],
            display: [66..70, 70..74, 74..78],
        }
    }
}

impl TableLayout {
    /// Same columns as the default layout with a different data row window.
    pub fn with_rows(first_data_row: usize, last_data_row: Option<usize>) -> Self {
        Self {
            first_data_row,
            last_data_row,
            ..Self::default()
        }
    }

    /// Minimum row length needed to slice every field.
    pub fn required_width(&self) -> usize {
        std::iter::once(&self.temperature)
            .chain(std::iter::once(&self.matching_function))
            .chain(self.normalized.iter())
            .chain(self.display.iter())
            .map(|range| range.end)
            .max()
            .unwrap_or(0)
    }

    pub fn is_data_row(&self, index: usize) -> bool {
        index >= self.first_data_row && !self.is_past_end(index)
    }

    pub fn is_past_end(&self, index: usize) -> bool {
        self.last_data_row.is_some_and(|last| index > last)
    }
}
