//! intermittent_demand — ADI-CV demand-pattern classification with Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that
//! exposes the ADI-CV demand classifier to Python via the
//! `_intermittent_demand` extension module. When the `python-bindings`
//! feature is enabled, this module defines the Python-facing transformer
//! class and submodule used by the `intermittent_demand` package.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust module (`demand`) as the public crate surface.
//! - Define the `#[pyclass]` wrapper [`ADICVTransformer`] and the
//!   `#[pymodule]` initializer for the `_intermittent_demand` Python
//!   extension.
//! - Create and register the `demand` submodule under `intermittent_demand`
//!   so that dot-notation imports work as expected.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work is implemented in the inner `demand` module; this
//!   file performs only FFI glue, input conversion, and error mapping.
//! - When `python-bindings` is enabled, the Python-visible class is
//!   drop-in compatible with sktime's `ADICVTransformer` constructor
//!   (`features=None, adi_threshold=1.32, cv_threshold=0.49,
//!   adi_trim_handling='pool'`).
//! - On successful conversion from Python objects to Rust slices, the
//!   invariants documented in `demand` are assumed to hold.
//!
//! Conventions
//! -----------
//! - Errors from core Rust code are propagated as [`AdiCvError`] values
//!   internally and converted to Python `ValueError` at the PyO3 boundary.
//! - The transform output is a plain `dict` with the configured feature
//!   names as keys, in configured order (Python dicts preserve insertion
//!   order), matching the single-row tabular record of the Rust surface.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code should depend directly on
//!   [`demand`](crate::demand) and can ignore the PyO3 items guarded by the
//!   `python-bindings` feature.
//! - External users are expected to interact with either the safe Rust API
//!   or the Python wrapper; the PyO3 plumbing is considered internal.
//!
//! Testing notes
//! -------------
//! - Core behavior is covered by unit tests in the `demand` submodules and
//!   by the integration suite in `tests/`; binding smoke tests belong at
//!   the Python level.

pub mod demand;
pub mod utils;

#[cfg(feature = "python-bindings")]
use pyo3::{
    prelude::*,
    types::{PyAny, PyDict},
};

#[cfg(feature = "python-bindings")]
use crate::{
    demand::{
        classifier::{AdiCvClassifier, FeatureValue},
        config::{AdiCvConfig, Feature},
    },
    utils::extract_f64_array,
};

/// ADICVTransformer — Python-facing wrapper for the ADI-CV classifier.
///
/// Purpose
/// -------
/// Expose [`AdiCvClassifier`] to Python callers with an
/// sktime-compatible constructor signature, while preserving the core Rust
/// validation and error handling.
///
/// Key behaviors
/// -------------
/// - Validate configuration eagerly at construction: unknown feature names,
///   duplicate features, unknown trim-handling policies, and non-finite
///   thresholds all raise `ValueError` from `__init__`.
/// - Convert numpy arrays, pandas Series, and float sequences into a
///   contiguous `f64` slice and forward to
///   [`AdiCvClassifier::transform`].
/// - Return the single-row record as a `dict` keyed by feature name, in
///   configured order.
///
/// Parameters
/// ----------
/// Constructed from Python via
/// `ADICVTransformer(features=None, adi_threshold=1.32, cv_threshold=0.49,
/// adi_trim_handling='pool')`:
/// - `features`: `Optional[list[str]]`
///   Output columns among `'adi'`, `'cv2'`, `'class'`; `None` selects all
///   three in that order.
/// - `adi_threshold`: `float`
///   ADI cutoff; defaults to the Syntetos–Boylan value 1.32.
/// - `cv_threshold`: `float`
///   CV² cutoff; defaults to the Syntetos–Boylan value 0.49.
/// - `adi_trim_handling`: `str`
///   One of `'pool'`, `'trim'`, `'ignore'`.
///
/// Fields
/// ------
/// - `inner`: [`AdiCvClassifier`]
///   Rust-side classifier holding the validated configuration.
///
/// Invariants
/// ----------
/// - `inner` always wraps a configuration validated by [`AdiCvConfig`];
///   transform-time code never re-checks configuration.
///
/// Performance
/// -----------
/// - At most one allocation copies Python data into a Rust buffer when the
///   input is not already a contiguous float64 array; the classification
///   itself is O(T).
///
/// Notes
/// -----
/// - This type is primarily intended to be used from Python; native Rust
///   code should prefer [`AdiCvClassifier`] directly.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "intermittent_demand.demand")]
pub struct ADICVTransformer {
    /// The validated Rust-side classifier.
    inner: AdiCvClassifier,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl ADICVTransformer {
    /// Classify a demand series into ADI-CV² classes after Syntetos/Boylan.
    ///
    /// The transform is stateless; no fitting step is required.
    #[new]
    #[pyo3(
        text_signature = "(features=None, adi_threshold=1.32, cv_threshold=0.49, \
                          adi_trim_handling='pool')",
        signature = (
            features = None,
            adi_threshold = 1.32,
            cv_threshold = 0.49,
            adi_trim_handling = "pool",
        )
    )]
    pub fn new(
        features: Option<Vec<String>>, adi_threshold: f64, cv_threshold: f64,
        adi_trim_handling: &str,
    ) -> PyResult<ADICVTransformer> {
        let config = match features {
            Some(names) => {
                let refs: Vec<&str> = names.iter().map(String::as_str).collect();
                AdiCvConfig::from_named(&refs, adi_trim_handling, adi_threshold, cv_threshold)?
            }
            None => AdiCvConfig::from_named(
                &["adi", "cv2", "class"],
                adi_trim_handling,
                adi_threshold,
                cv_threshold,
            )?,
        };
        Ok(ADICVTransformer { inner: AdiCvClassifier::new(config) })
    }

    /// Transform a series into its ADI-CV record.
    ///
    /// Accepts a 1-D `numpy.ndarray`, `pandas.Series`, or sequence of
    /// float64 and returns a `dict` containing the configured features in
    /// configured order. Raises `ValueError` for empty, non-finite, or
    /// degenerate series.
    #[pyo3(text_signature = "(self, series, /)")]
    pub fn transform<'py>(
        &self, py: Python<'py>, series: &Bound<'py, PyAny>,
    ) -> PyResult<Bound<'py, PyDict>> {
        let arr = extract_f64_array(py, series)?;
        let data = arr.as_slice().map_err(|_| {
            pyo3::exceptions::PyValueError::new_err(
                "series must be a 1-D contiguous float64 array or sequence",
            )
        })?;

        let record = self.inner.transform(data)?;

        let dict = PyDict::new(py);
        for value in record {
            match value {
                FeatureValue::Adi(v) => dict.set_item("adi", v)?,
                FeatureValue::Cv2(v) => dict.set_item("cv2", v)?,
                FeatureValue::Class(c) => dict.set_item("class", c.as_str())?,
            }
        }
        Ok(dict)
    }

    /// The configured ADI cutoff.
    #[getter]
    pub fn adi_threshold(&self) -> f64 {
        self.inner.config().adi_threshold()
    }

    /// The configured CV² cutoff.
    #[getter]
    pub fn cv_threshold(&self) -> f64 {
        self.inner.config().cv2_threshold()
    }

    /// The configured feature names, in emission order.
    #[getter]
    pub fn features(&self) -> Vec<&'static str> {
        self.inner.config().features().iter().map(Feature::as_str).collect()
    }

    /// The configured trim-handling policy name.
    #[getter]
    pub fn adi_trim_handling(&self) -> &'static str {
        self.inner.config().trim_handling().as_str()
    }
}

/// _intermittent_demand — PyO3 module initializer for the Python extension.
///
/// Creates the `demand` submodule, attaches it to the parent module, and
/// registers it in `sys.modules` so it is importable via dotted paths from
/// Python. Invoked automatically by Python when importing the compiled
/// extension; not called directly by user code.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _intermittent_demand<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let demand_mod = PyModule::new(_py, "demand")?;
    demand_submodule(_py, m, &demand_mod)?;

    // Manually add the submodule into sys.modules to allow for dot notation.
    _py.import("sys")?
        .getattr("modules")?
        .set_item("intermittent_demand.demand", demand_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn demand_submodule<'py>(
    _py: Python, intermittent_demand: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_class::<ADICVTransformer>()?;
    intermittent_demand.add_submodule(m)?;
    Ok(())
}
