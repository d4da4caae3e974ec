// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Card Number Filter - Rust Implementation
//
// Streaming Luhn-validated masking of card numbers:
// - Byte-at-a-time state machine, output length always equals input length
// - Rolling 16-digit window scanned longest-candidate-first
// - Positional back-projection so separators survive masking

pub mod config;
pub mod engine;
pub mod error;
pub mod luhn;
pub mod masking;
pub mod scanner;
pub mod stream;

#[cfg(feature = "python")]
pub mod python;

pub use config::MaskConfig;
pub use engine::{MaskStats, MaskingEngine, RunState};
pub use error::{ConfigError, FilterError};
pub use stream::{mask_str, mask_stream};

#[cfg(feature = "python")]
pub use python::CardMaskerRust;
