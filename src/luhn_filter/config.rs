// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Configuration types for the card number filter

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[cfg(feature = "python")]
use pyo3::prelude::*;
#[cfg(feature = "python")]
use pyo3::types::PyDict;

use super::error::ConfigError;

/// Character written over every matched digit
pub const DEFAULT_MASK_CHAR: char = 'X';

/// Formatting characters tolerated between the digits of a card number
pub const DEFAULT_SEPARATORS: &str = " -";

/// Shortest digit run accepted as a card number
pub const MIN_LENGTH: usize = 14;

/// Longest digit run accepted as a card number, also the digit window size
pub const MAX_LENGTH: usize = 16;

/// Upper bound on the bytes held back for one run
pub const DEFAULT_MAX_RUN_LENGTH: usize = 4096;

/// Largest accepted `max_length`; the window is rescanned on every digit
pub const MAX_WINDOW_LENGTH: usize = 64;

/// Largest accepted `max_run_length` (1 MiB)
pub const MAX_RUN_LIMIT: usize = 1 << 20;

/// Configuration for the masking engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaskConfig {
    pub mask_char: char,
    pub separators: String,
    pub min_length: usize,
    pub max_length: usize,
    pub max_run_length: usize,
}

impl Default for MaskConfig {
    fn default() -> Self {
        Self {
            mask_char: DEFAULT_MASK_CHAR,
            separators: DEFAULT_SEPARATORS.to_string(),
            min_length: MIN_LENGTH,
            max_length: MAX_LENGTH,
            max_run_length: DEFAULT_MAX_RUN_LENGTH,
        }
    }
}

impl MaskConfig {
    /// Check that the configuration describes a usable engine.
    ///
    /// The mask must never be classified as part of a run, otherwise a
    /// masked cell could be mistaken for input.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for sep in self.separators.chars() {
            if !sep.is_ascii() || sep.is_ascii_digit() || sep.is_ascii_control() {
                return Err(ConfigError::InvalidSeparator(sep));
            }
        }

        let mask = self.mask_char;
        if !mask.is_ascii_graphic() || mask.is_ascii_digit() || self.separators.contains(mask) {
            return Err(ConfigError::InvalidMask(mask));
        }

        if self.min_length == 0 || self.min_length > self.max_length {
            return Err(ConfigError::InvalidLengthBounds {
                min: self.min_length,
                max: self.max_length,
            });
        }

        if self.max_length > MAX_WINDOW_LENGTH {
            return Err(ConfigError::LengthTooLarge {
                max_length: self.max_length,
                limit: MAX_WINDOW_LENGTH,
            });
        }

        if self.max_run_length > MAX_RUN_LIMIT {
            return Err(ConfigError::RunLimitTooLarge {
                max_run_length: self.max_run_length,
                limit: MAX_RUN_LIMIT,
            });
        }

        if self.max_run_length < self.max_length {
            return Err(ConfigError::RunLimitTooSmall {
                max_run_length: self.max_run_length,
                max_length: self.max_length,
            });
        }

        Ok(())
    }

    /// Parse and validate a JSON document. Missing keys keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON configuration file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// The mask as the byte written into the output
    pub fn mask_byte(&self) -> u8 {
        // validate() guarantees ASCII
        self.mask_char as u8
    }

    /// Extract configuration from Python dict
    #[cfg(feature = "python")]
    pub fn from_py_dict(dict: &Bound<'_, PyDict>) -> PyResult<Self> {
        let mut config = Self::default();

        macro_rules! extract_field {
            ($field:ident) => {
                if let Some(value) = dict.get_item(stringify!($field))? {
                    config.$field = value.extract()?;
                }
            };
        }

        extract_field!(mask_char);
        extract_field!(separators);
        extract_field!(min_length);
        extract_field!(max_length);
        extract_field!(max_run_length);

        config
            .validate()
            .map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))?;

        Ok(config)
    }
}
