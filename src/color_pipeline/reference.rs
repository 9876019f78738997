//! Blackbody reference table module
//!
//! This module loads the fixed-width blackbody chromaticity table that the
//! temperature estimator searches.

mod reader;
mod fixed_width_reader;
pub mod layout;
pub mod types;

pub use reader::ReferenceTableReader;
pub use fixed_width_reader::FixedWidthTableReader;
pub use layout::TableLayout;
pub use types::{MatchingFunction, ReferenceSample, ReferenceTable};
