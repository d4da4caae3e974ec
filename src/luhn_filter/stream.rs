// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Reader/writer driver and in-memory helpers

use std::borrow::Cow;
use std::io::{ErrorKind, Read, Write};

use tracing::debug;

use super::config::MaskConfig;
use super::engine::{MaskStats, MaskingEngine};
use super::error::FilterError;

const CHUNK_SIZE: usize = 8 * 1024;

/// Copy `input` to `output`, masking card numbers on the way.
///
/// Input is read in chunks and every byte is passed through the engine in
/// order; whatever the engine releases is written after each chunk. A run
/// still open at end of input is released before the writer is flushed.
pub fn mask_stream<R: Read, W: Write>(
    engine: &mut MaskingEngine,
    mut input: R,
    mut output: W,
) -> Result<MaskStats, FilterError> {
    let mut chunk = vec![0u8; CHUNK_SIZE];
    let mut pending = Vec::with_capacity(CHUNK_SIZE);

    loop {
        let n = match input.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };

        engine.consume_all(&chunk[..n], &mut pending);
        if !pending.is_empty() {
            output.write_all(&pending)?;
            pending.clear();
        }
    }

    let stats = engine.finish(&mut pending);
    output.write_all(&pending)?;
    output.flush()?;

    debug!(
        bytes = stats.bytes,
        matches = stats.matches,
        masked_digits = stats.masked_digits,
        "stream finished"
    );
    Ok(stats)
}

/// Mask card numbers in `text` with the given configuration.
///
/// Borrows the input when nothing was masked.
pub fn mask_str<'a>(text: &'a str, config: &MaskConfig) -> Result<Cow<'a, str>, FilterError> {
    let mut engine = MaskingEngine::new(config.clone())?;
    let out = engine.mask_bytes(text.as_bytes());

    if engine.stats().masked_digits == 0 {
        return Ok(Cow::Borrowed(text));
    }

    // Only ASCII digits are replaced, by an ASCII mask, so UTF-8 survives
    Ok(Cow::Owned(String::from_utf8_lossy(&out).into_owned()))
}
