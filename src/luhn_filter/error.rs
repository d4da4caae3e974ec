// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Error types for the card number filter

use std::io;
use thiserror::Error;

/// Rejected configuration values
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("mask character {0:?} must be printable ASCII and neither a digit nor a separator")]
    InvalidMask(char),

    #[error("separator {0:?} must be printable ASCII and not a digit")]
    InvalidSeparator(char),

    #[error("candidate length bounds {min}..={max} are invalid")]
    InvalidLengthBounds { min: usize, max: usize },

    #[error("max_length {max_length} exceeds the limit of {limit}")]
    LengthTooLarge { max_length: usize, limit: usize },

    #[error("max_run_length {max_run_length} exceeds the limit of {limit}")]
    RunLimitTooLarge { max_run_length: usize, limit: usize },

    #[error("max_run_length {max_run_length} is smaller than max_length {max_length}")]
    RunLimitTooSmall {
        max_run_length: usize,
        max_length: usize,
    },

    #[error("invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read configuration file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Errors surfaced while filtering a stream
#[derive(Debug, Error)]
pub enum FilterError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ConfigError::InvalidLengthBounds { min: 16, max: 14 };
        assert_eq!(err.to_string(), "candidate length bounds 16..=14 are invalid");

        let err = FilterError::from(ConfigError::InvalidMask('7'));
        assert!(err.to_string().contains("'7'"));
    }

    #[test]
    fn test_io_error_conversion() {
        let err: FilterError = io::Error::new(io::ErrorKind::BrokenPipe, "closed").into();
        assert!(matches!(err, FilterError::Io(_)));
        assert_eq!(err.to_string(), "I/O error: closed");
    }
}
