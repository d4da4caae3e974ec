// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Candidate search over the rolling digit window

use super::luhn;

/// A Luhn-valid candidate found in the digit window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match<'a> {
    /// Offset of the candidate in the window
    pub start: usize,
    /// The candidate's digits
    pub digits: &'a [u8],
    /// Number of window digits that follow the candidate
    pub trailing: usize,
}

impl Match<'_> {
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }
}

/// Find the best Luhn-valid candidate in `window`.
///
/// Offsets are tried in ascending order and, at each offset, lengths from
/// `max_length` down to `min_length`. The first valid candidate wins, so an
/// earlier offset beats a later one and a longer length beats a shorter one
/// at the same offset. Returns `None` when the window holds fewer than
/// `min_length` digits.
pub fn find_match(window: &[u8], min_length: usize, max_length: usize) -> Option<Match<'_>> {
    debug_assert!(min_length > 0 && min_length <= max_length);

    if window.len() < min_length {
        return None;
    }

    for start in 0..=window.len() - min_length {
        let longest = max_length.min(window.len() - start);
        for len in (min_length..=longest).rev() {
            let candidate = &window[start..start + len];
            if luhn::is_valid(candidate) {
                return Some(Match {
                    start,
                    digits: candidate,
                    trailing: window.len() - start - len,
                });
            }
        }
    }

    None
}
