// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Byte-at-a-time masking state machine

use serde::Serialize;
use tracing::{debug, trace, warn};

use super::config::MaskConfig;
use super::error::ConfigError;
use super::masking;
use super::scanner;

/// How a byte participates in a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteClass {
    Digit,
    Separator,
    Other,
}

/// Lookup table from byte value to its class
#[derive(Debug, Clone)]
struct ByteClasses([ByteClass; 256]);

impl ByteClasses {
    fn new(separators: &str) -> Self {
        let mut table = [ByteClass::Other; 256];
        for b in b'0'..=b'9' {
            table[usize::from(b)] = ByteClass::Digit;
        }
        for b in separators.bytes() {
            table[usize::from(b)] = ByteClass::Separator;
        }
        Self(table)
    }

    #[inline]
    fn classify(&self, byte: u8) -> ByteClass {
        self.0[usize::from(byte)]
    }
}

/// Whether the engine is holding back a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Idle,
    Accumulating,
}

/// Counters for the bytes seen since the last reset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MaskStats {
    pub bytes: u64,
    pub runs: u64,
    pub matches: u64,
    pub masked_digits: u64,
    pub spills: u64,
}

/// Streaming card number masker
///
/// Relevant bytes (digits and separators) are held in a formatted buffer
/// while a parallel window keeps the most recent `max_length` digits. After
/// every digit the window is scanned for a Luhn-valid candidate, and a hit
/// is masked in place in the formatted buffer. The buffer is released
/// unchanged in length when the run ends.
///
/// # Example
/// ```
/// use cardmask::luhn_filter::MaskingEngine;
///
/// let mut engine = MaskingEngine::default();
/// let masked = engine.mask_bytes(b"Card: 4532-0151-1283-0366, thanks");
/// assert_eq!(masked, b"Card: XXXX-XXXX-XXXX-XXXX, thanks");
/// ```
#[derive(Debug, Clone)]
pub struct MaskingEngine {
    config: MaskConfig,
    classes: ByteClasses,
    mask: u8,
    state: RunState,
    formatted: Vec<u8>,
    digits: Vec<u8>,
    stats: MaskStats,
}

impl Default for MaskingEngine {
    fn default() -> Self {
        Self::with_valid_config(MaskConfig::default())
    }
}

impl MaskingEngine {
    /// Create an engine after validating `config`
    pub fn new(config: MaskConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_valid_config(config))
    }

    fn with_valid_config(config: MaskConfig) -> Self {
        Self {
            classes: ByteClasses::new(&config.separators),
            mask: config.mask_byte(),
            state: RunState::Idle,
            formatted: Vec::new(),
            digits: Vec::with_capacity(config.max_length + 1),
            stats: MaskStats::default(),
            config,
        }
    }

    pub fn config(&self) -> &MaskConfig {
        &self.config
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn stats(&self) -> MaskStats {
        self.stats
    }

    /// Drop any held run and zero the counters.
    pub fn reset(&mut self) {
        self.clear_run();
        self.stats = MaskStats::default();
    }

    /// Feed one input byte. Bytes ready for output are appended to `out`.
    pub fn consume(&mut self, byte: u8, out: &mut Vec<u8>) {
        self.stats.bytes += 1;

        let class = self.classes.classify(byte);
        if class == ByteClass::Other {
            if self.state == RunState::Accumulating {
                self.flush_run(out);
            }
            out.push(byte);
            return;
        }

        self.state = RunState::Accumulating;
        self.formatted.push(byte);

        if class == ByteClass::Digit {
            self.digits.push(byte);
            if self.digits.len() > self.config.max_length {
                let excess = self.digits.len() - self.config.max_length;
                self.digits.drain(..excess);
            }
            self.scan_and_mask();
        }

        self.enforce_run_limit(out);
    }

    /// Feed a slice of input bytes
    pub fn consume_all(&mut self, input: &[u8], out: &mut Vec<u8>) {
        out.reserve(input.len());
        for &byte in input {
            self.consume(byte, out);
        }
    }

    /// Signal end of input: releases an open run and returns the counters.
    pub fn finish(&mut self, out: &mut Vec<u8>) -> MaskStats {
        if self.state == RunState::Accumulating {
            self.flush_run(out);
        }
        self.stats
    }

    /// Mask a complete in-memory input, starting from a clean state.
    pub fn mask_bytes(&mut self, input: &[u8]) -> Vec<u8> {
        self.reset();
        let mut out = Vec::with_capacity(input.len());
        self.consume_all(input, &mut out);
        self.finish(&mut out);
        out
    }

    fn scan_and_mask(&mut self) {
        let Some(found) =
            scanner::find_match(&self.digits, self.config.min_length, self.config.max_length)
        else {
            return;
        };

        let masked = masking::mask_backward(&mut self.formatted, &found, self.mask);
        self.stats.matches += 1;
        self.stats.masked_digits += masked as u64;
        debug!(
            offset = found.start,
            length = found.len(),
            masked,
            "masked Luhn-valid digit run"
        );
    }

    fn flush_run(&mut self, out: &mut Vec<u8>) {
        trace!(length = self.formatted.len(), "run closed");
        out.extend_from_slice(&self.formatted);
        self.stats.runs += 1;
        self.clear_run();
    }

    fn clear_run(&mut self) {
        self.formatted.clear();
        self.digits.clear();
        self.state = RunState::Idle;
    }

    /// Keep the held run within `max_run_length` bytes.
    ///
    /// Bytes in front of the oldest windowed digit can no longer be masked
    /// and are released first. If the run is still too long it is split.
    fn enforce_run_limit(&mut self, out: &mut Vec<u8>) {
        if self.formatted.len() <= self.config.max_run_length {
            return;
        }

        let keep_from = self.oldest_window_slot();
        if keep_from > 0 {
            out.extend(self.formatted.drain(..keep_from));
        }

        if self.formatted.len() > self.config.max_run_length {
            warn!(
                length = self.formatted.len(),
                limit = self.config.max_run_length,
                "run exceeds max_run_length, releasing it unscanned"
            );
            out.extend_from_slice(&self.formatted);
            self.formatted.clear();
            self.digits.clear();
            self.stats.spills += 1;
        }
    }

    /// Index in the formatted buffer of the slot holding `digits[0]`
    fn oldest_window_slot(&self) -> usize {
        if self.digits.is_empty() {
            return self.formatted.len();
        }

        let mut seen = 0;
        for (i, &b) in self.formatted.iter().enumerate().rev() {
            if b == self.mask || b.is_ascii_digit() {
                seen += 1;
                if seen == self.digits.len() {
                    return i;
                }
            }
        }
        0
    }
}
