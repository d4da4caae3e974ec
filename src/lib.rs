// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Streaming card number masking
// Optional Python bindings built with PyO3

// Allow non-local definitions for PyO3 macros
#![cfg_attr(feature = "python", allow(non_local_definitions))]

#[cfg(feature = "python")]
use pyo3::prelude::*;

pub mod luhn_filter;

/// Python module: cardmask
///
/// Luhn-validated card number masking for byte and text payloads.
///
/// # Examples
///
/// ```python
/// from cardmask import CardMaskerRust
///
/// masker = CardMaskerRust({"mask_char": "*"})
/// print(masker.mask_text("Card: 4532-0151-1283-0366"))
/// # "Card: ****-****-****-****"
/// ```
#[cfg(feature = "python")]
#[pymodule]
fn cardmask(m: &Bound<'_, pyo3::types::PyModule>) -> PyResult<()> {
    m.add_class::<luhn_filter::CardMaskerRust>()?;

    // Module metadata
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    m.add(
        "__doc__",
        "Luhn-validated card number masking implemented in Rust",
    )?;

    Ok(())
}
