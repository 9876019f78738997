//! Fixed-width blackbody table reader.
//!
//! Each data row carries the temperature, the matching function tag, the
//! normalized and the display RGB triples at fixed byte offsets (see
//! [`TableLayout`]). Lines outside the layout's data window are skipped.

use std::ops::Range;
use std::path::Path;
use std::str::FromStr;

use tracing::{debug, info, instrument};

use crate::color_pipeline::common::error::{ColorTempError, Result};
use crate::color_pipeline::estimator::types::NormalizedRgb;
use crate::color_pipeline::reference::layout::TableLayout;
use crate::color_pipeline::reference::reader::ReferenceTableReader;
use crate::color_pipeline::reference::types::{MatchingFunction, ReferenceSample, ReferenceTable};

#[derive(Debug, Clone, Default)]
pub struct FixedWidthTableReader {
    layout: TableLayout,
}

impl FixedWidthTableReader {
    pub fn new(layout: TableLayout) -> Self {
        Self { layout }
    }

    #[instrument(skip(self, path), fields(table = %path.as_ref().display()))]
    pub fn read_file<P: AsRef<Path>>(&self, path: P) -> Result<ReferenceTable> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ColorTempError::TableRead {
            path: path.display().to_string(),
            source,
        })?;
        self.read_table(&text)
    }

    fn parse_row(&self, line_no: usize, line: &str) -> Result<(MatchingFunction, u32, ReferenceSample)> {
        let required = self.layout.required_width();
        if line.len() < required {
            return Err(ColorTempError::TableParse {
                line: line_no,
                reason: format!("row is {} bytes, expected at least {}", line.len(), required),
            });
        }

        let kelvin: u32 = parse_field(line, line_no, &self.layout.temperature, "temperature")?;
        let tag = slice_field(line, line_no, &self.layout.matching_function, "matching function")?;
        let matching_function = MatchingFunction::from_str(tag).map_err(|_| ColorTempError::TableParse {
            line: line_no,
            reason: format!("unknown matching function tag {:?}", tag),
        })?;

        let [rn, gn, bn] = &self.layout.normalized;
        let normalized = NormalizedRgb::new(
            parse_field(line, line_no, rn, "normalized r")?,
            parse_field(line, line_no, gn, "normalized g")?,
            parse_field(line, line_no, bn, "normalized b")?,
        );

        let [r, g, b] = &self.layout.display;
        let display = [
            parse_field(line, line_no, r, "display r")?,
            parse_field(line, line_no, g, "display g")?,
            parse_field(line, line_no, b, "display b")?,
        ];

        Ok((matching_function, kelvin, ReferenceSample { display, normalized }))
    }
}

impl ReferenceTableReader for FixedWidthTableReader {
    /// Parses every data row of `text`.
    ///
    /// The first malformed row fails the whole read, so no partially filled
    /// table is ever returned.
    fn read_table(&self, text: &str) -> Result<ReferenceTable> {
        let mut rows = Vec::new();

        for (index, line) in text.lines().enumerate() {
            if self.layout.is_past_end(index) {
                break;
            }
            if !self.layout.is_data_row(index) {
                continue;
            }
            let row = self.parse_row(index + 1, line)?;
            debug!(line = index + 1, kelvin = row.1, cmf = %row.0, "Parsed reference row");
            rows.push(row);
        }

        let table = ReferenceTable::from_rows(rows);
        info!(samples = table.len(), "Reference table loaded");
        Ok(table)
    }
}

fn slice_field<'a>(line: &'a str, line_no: usize, range: &Range<usize>, name: &str) -> Result<&'a str> {
    line.get(range.clone())
        .map(str::trim)
        .ok_or_else(|| ColorTempError::TableParse {
            line: line_no,
            reason: format!("cannot slice {} at columns {}..{}", name, range.start, range.end),
        })
}

fn parse_field<T: FromStr>(line: &str, line_no: usize, range: &Range<usize>, name: &str) -> Result<T> {
    let raw = slice_field(line, line_no, range, name)?;
    raw.parse().map_err(|_| ColorTempError::TableParse {
        line: line_no,
        reason: format!("invalid {} {:?}", name, raw),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn format_row(kelvin: u32, tag: &str, normalized: [f64; 3], display: [u8; 3]) -> String {
        format!(
            "{:>6} K {:>6}{:<29}{:>7.4} {:>6.4} {:>6.4} {:>4}{:>4}{:>4}  #{:02x}{:02x}{:02x}",
            kelvin,
            tag,
            "  0.4000 0.4000  1.000e+00",
            normalized[0],
            normalized[1],
            normalized[2],
            display[0],
            display[1],
            display[2],
            display[0],
            display[1],
            display[2],
        )
    }

    fn table_text(header_rows: usize, rows: &[String]) -> String {
        let mut lines: Vec<String> = (0..header_rows).map(|i| format!("# header {}", i)).collect();
        lines.extend(rows.iter().cloned());
        lines.join("\n")
    }

    fn reader(first: usize, last: Option<usize>) -> FixedWidthTableReader {
        FixedWidthTableReader::new(TableLayout::with_rows(first, last))
    }

    #[test]
    fn test_row_format_matches_layout() {
        let row = format_row(1000, "10deg", [1.0, 0.0337, 0.0], [255, 51, 0]);
        assert_eq!(&row[0..6], "  1000");
        assert_eq!(&row[9..15], " 10deg");
        assert_eq!(&row[44..51], " 1.0000");
        assert_eq!(&row[52..58], "0.0337");
        assert_eq!(&row[59..65], "0.0000");
        assert_eq!(&row[66..78], " 255  51   0");
    }

    #[test]
    fn test_parses_data_rows() {
        let text = table_text(3, &[
            format_row(1000, "2deg", [1.0, 0.0337, 0.0], [255, 51, 0]),
            format_row(1000, "10deg", [1.0, 0.0401, 0.0], [255, 56, 0]),
            format_row(1100, "10deg", [1.0, 0.0631, 0.0], [255, 71, 0]),
        ]);

        let table = reader(3, None).read_table(&text).unwrap();

        assert_eq!(table.len(), 3);
        let sample = table.sample(MatchingFunction::TenDegree, 1100).unwrap();
        assert_eq!(sample.display, [255, 71, 0]);
        assert_eq!(sample.normalized, NormalizedRgb::new(1.0, 0.0631, 0.0));
        assert!(table.sample(MatchingFunction::TwoDegree, 1000).is_some());
    }

    #[test]
    fn test_skips_header_and_footer_rows() {
        let mut rows = vec![
            format_row(1000, "10deg", [1.0, 0.0401, 0.0], [255, 56, 0]),
            format_row(1100, "10deg", [1.0, 0.0631, 0.0], [255, 71, 0]),
        ];
        rows.push("footer: not a data row".to_string());

        // Header occupies lines 0-1, data is lines 2-3, footer is line 4.
        let table = reader(2, Some(3)).read_table(&table_text(2, &rows)).unwrap();

        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_short_row_fails() {
        let mut short = format_row(1200, "10deg", [1.0, 0.1, 0.0], [255, 90, 0]);
        short.truncate(70);
        let text = table_text(1, &[
            format_row(1100, "10deg", [1.0, 0.0631, 0.0], [255, 71, 0]),
            short,
        ]);

        let result = reader(1, None).read_table(&text);

        match result {
            Err(ColorTempError::TableParse { line, .. }) => assert_eq!(line, 3),
            other => panic!("Expected TableParse, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_number_fails() {
        let mut row = format_row(1200, "10deg", [1.0, 0.1, 0.0], [255, 90, 0]);
        row.replace_range(0..6, "  12x0");

        let result = reader(0, None).read_table(&row);
        assert!(matches!(result, Err(ColorTempError::TableParse { line: 1, .. })));
    }

    #[test]
    fn test_display_channel_out_of_range_fails() {
        let mut row = format_row(1200, "10deg", [1.0, 0.1, 0.0], [255, 90, 0]);
        row.replace_range(66..70, " 256");

        let result = reader(0, None).read_table(&row);
        assert!(matches!(result, Err(ColorTempError::TableParse { .. })));
    }

    #[test]
    fn test_unknown_tag_fails() {
        let row = format_row(1200, "5deg", [1.0, 0.1, 0.0], [255, 90, 0]);
        let result = reader(0, None).read_table(&row);
        assert!(matches!(result, Err(ColorTempError::TableParse { .. })));
    }

    #[test]
    fn test_missing_file_is_parse_error() {
        let result = FixedWidthTableReader::default().read_file("/nonexistent/bbr_color.txt");
        let err = result.unwrap_err();
        assert!(matches!(err, ColorTempError::TableRead { .. }));
        assert!(err.is_parse_error());
    }
}
