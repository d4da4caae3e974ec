// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Projection of a digit-window match back onto the formatted run

use super::scanner::Match;

/// Overwrite the digits of `found` inside `formatted` with `mask`.
///
/// Walks `formatted` from its end. Every digit or mask cell is one digit
/// slot of the run; separators are never touched and never count. The
/// first `found.trailing` slots belong to digits after the match and are
/// skipped. The following `found.len()` slots are the match: cells already
/// masked by an earlier, overlapping match count as consumed, the others
/// are replaced by `mask`.
///
/// Cells are chosen by position only. Comparing each cell against the
/// expected digit is kept as a `debug_assert`, never as the selection rule,
/// so a trailing digit equal to the match's last digit stays unmasked.
///
/// # Returns
/// Number of cells newly masked by this call
pub fn mask_backward(formatted: &mut [u8], found: &Match<'_>, mask: u8) -> usize {
    let mut skip = found.trailing;
    let mut remaining = found.len();
    let mut masked = 0;

    for cell in formatted.iter_mut().rev() {
        if remaining == 0 {
            break;
        }

        let is_slot = *cell == mask || cell.is_ascii_digit();
        if !is_slot {
            continue;
        }

        if skip > 0 {
            skip -= 1;
            continue;
        }

        remaining -= 1;
        if *cell == mask {
            continue;
        }

        let expected = found.digits[remaining];
        debug_assert_eq!(*cell, expected, "digit window out of sync with formatted run");
        if *cell == expected {
            *cell = mask;
            masked += 1;
        }
    }

    masked
}
