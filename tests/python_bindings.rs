// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Tests for the PyO3 bindings, run with `--features python`

#![cfg(feature = "python")]

use std::collections::HashMap;

use cardmask::luhn_filter::{CardMaskerRust, MaskConfig};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{PyBytes, PyDict};

/// Helper to build a masker object owned by the interpreter
fn build_masker<'py>(
    py: Python<'py>,
    config: Option<&Bound<'py, PyDict>>,
) -> PyResult<Bound<'py, CardMaskerRust>> {
    Bound::new(py, CardMaskerRust::new(config)?)
}

#[test]
fn test_config_from_dict() {
    Python::initialize();

    Python::attach(|py| {
        let dict = PyDict::new(py);
        dict.set_item("mask_char", "*").unwrap();
        dict.set_item("separators", " -/").unwrap();
        dict.set_item("max_run_length", 512).unwrap();

        let config = MaskConfig::from_py_dict(&dict).unwrap();
        assert_eq!(config.mask_char, '*');
        assert_eq!(config.separators, " -/");
        assert_eq!(config.max_run_length, 512);
        assert_eq!(config.min_length, 14);
    });
}

#[test]
fn test_invalid_mask_char_rejected() {
    Python::initialize();

    Python::attach(|py| {
        let dict = PyDict::new(py);
        dict.set_item("mask_char", "7").unwrap();

        let err = build_masker(py, Some(&dict)).unwrap_err();
        assert!(err.is_instance_of::<PyValueError>(py));
    });
}

#[test]
fn test_mask_bytes() {
    Python::initialize();

    Python::attach(|py| {
        let masker = build_masker(py, None).unwrap();
        let data = PyBytes::new(py, b"card=4532-0151-1283-0366;");

        let result = masker.call_method1("mask", (data,)).unwrap();
        let masked: Vec<u8> = result.extract().unwrap();
        assert_eq!(masked, b"card=XXXX-XXXX-XXXX-XXXX;");
    });
}

#[test]
fn test_mask_text_non_ascii() {
    Python::initialize();

    Python::attach(|py| {
        let dict = PyDict::new(py);
        dict.set_item("mask_char", "#").unwrap();
        let masker = build_masker(py, Some(&dict)).unwrap();

        let result = masker
            .call_method1("mask_text", ("Zahlung über 4532 0151 1283 0366 — danke",))
            .unwrap();
        let masked: String = result.extract().unwrap();
        assert_eq!(masked, "Zahlung über #### #### #### #### — danke");
    });
}

#[test]
fn test_last_stats_keys() {
    Python::initialize();

    Python::attach(|py| {
        let masker = build_masker(py, None).unwrap();
        masker
            .call_method1("mask_text", ("pay 4532015112830366 now",))
            .unwrap();

        let stats: HashMap<String, u64> = masker
            .call_method0("last_stats")
            .unwrap()
            .extract()
            .unwrap();

        assert_eq!(stats.len(), 5);
        assert_eq!(stats["bytes"], 24);
        assert_eq!(stats["runs"], 1);
        assert_eq!(stats["matches"], 1);
        assert_eq!(stats["masked_digits"], 16);
        assert_eq!(stats["spills"], 0);
    });
}
