// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// PyO3 bindings for the masking engine

use pyo3::prelude::*;
use pyo3::types::{PyBytes, PyDict};

use super::config::MaskConfig;
use super::engine::MaskingEngine;

/// Card number masker exposed to Python
///
/// # Example (Python)
/// ```python
/// from cardmask import CardMaskerRust
///
/// masker = CardMaskerRust({"mask_char": "#"})
/// masker.mask(b"4532015112830366")   # b"################"
/// masker.last_stats()                # {"bytes": 16, "matches": 1, ...}
/// ```
#[pyclass]
pub struct CardMaskerRust {
    engine: MaskingEngine,
}

#[pymethods]
impl CardMaskerRust {
    /// Create a new masker
    ///
    /// # Configuration Keys
    /// * `mask_char` (str): single character written over matched digits (default "X")
    /// * `separators` (str): characters allowed between digits (default " -")
    /// * `min_length` (int): shortest accepted number (default 14)
    /// * `max_length` (int): longest accepted number (default 16)
    /// * `max_run_length` (int): bytes held back for one run (default 4096)
    #[new]
    #[pyo3(signature = (config_dict=None))]
    pub fn new(config_dict: Option<&Bound<'_, PyDict>>) -> PyResult<Self> {
        let config = match config_dict {
            Some(dict) => MaskConfig::from_py_dict(dict)?,
            None => MaskConfig::default(),
        };

        let engine = MaskingEngine::new(config).map_err(|e| {
            PyErr::new::<pyo3::exceptions::PyValueError, _>(format!("Invalid config: {}", e))
        })?;

        Ok(Self { engine })
    }

    /// Mask card numbers in a bytes payload
    pub fn mask<'py>(&mut self, py: Python<'py>, data: &[u8]) -> Bound<'py, PyBytes> {
        let out = self.engine.mask_bytes(data);
        PyBytes::new(py, &out)
    }

    /// Mask card numbers in a string
    pub fn mask_text(&mut self, text: &str) -> String {
        let out = self.engine.mask_bytes(text.as_bytes());
        String::from_utf8_lossy(&out).into_owned()
    }

    /// Counters from the most recent call, as a dict
    pub fn last_stats<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let stats = self.engine.stats();
        let dict = PyDict::new(py);
        dict.set_item("bytes", stats.bytes)?;
        dict.set_item("runs", stats.runs)?;
        dict.set_item("matches", stats.matches)?;
        dict.set_item("masked_digits", stats.masked_digits)?;
        dict.set_item("spills", stats.spills)?;
        Ok(dict)
    }
}
