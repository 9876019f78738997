use thiserror::Error;

use crate::color_pipeline::reference::types::MatchingFunction;

#[derive(Error, Debug)]
pub enum ColorTempError {
    #[error("Failed to read reference table {path}: {source}")]
    TableRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed reference table at line {line}: {reason}")]
    TableParse { line: usize, reason: String },

    #[error("Unknown matching function: {0}")]
    UnknownMatchingFunction(String),

    #[error("No reference samples for matching function {0}")]
    EmptyMatchingFunction(MatchingFunction),

    #[error("Unsupported channel layout: {0} channel(s), expected at least 3")]
    UnsupportedChannels(usize),

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to decode frame: {0}")]
    DecodeError(String),
}

impl ColorTempError {
    /// True for a missing or malformed reference table. These abort startup.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            ColorTempError::TableRead { .. } | ColorTempError::TableParse { .. }
        )
    }

    /// True when the caller can skip the offending frame and carry on.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ColorTempError::UnsupportedChannels(_)
                | ColorTempError::InvalidDimensions(_, _)
                | ColorTempError::UnknownMatchingFunction(_)
                | ColorTempError::EmptyMatchingFunction(_)
                | ColorTempError::InputReadError(_)
                | ColorTempError::DecodeError(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ColorTempError>;
