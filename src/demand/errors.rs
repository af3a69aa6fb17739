//! demand::errors — shared error types and Python bridges.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias used across the ADI-CV demand
//! classification routines, together with a conversion layer to Python
//! exceptions for PyO3-based bindings. Configuration, input-validation, and
//! degenerate-series failures are kept in one place so both Rust and Python
//! callers see a uniform error surface.
//!
//! Key behaviors
//! -------------
//! - Define [`AdiCvResult`] and [`AdiCvError`] as the canonical result and
//!   error types for the ADI-CV classifier and its configuration/validation
//!   helpers.
//! - Attach human-readable `Display` messages to each variant that name the
//!   offending parameter or condition, so diagnostics are actionable without
//!   additional context.
//! - Expose the three-way error taxonomy (configuration vs invalid input vs
//!   degenerate series) via predicate methods rather than separate enum
//!   types, so callers can branch on error class without losing payloads.
//! - Implement `From<AdiCvError> for PyErr` to surface Rust-side failures as
//!   `ValueError` instances to Python callers.
//!
//! Invariants & assumptions
//! ------------------------
//! - Configuration variants are only produced at construction time
//!   (`AdiCvConfig` builders); compute-time entry points never re-validate
//!   configuration.
//! - `AdiCvError` values are small, cheap to clone, and suitable for use in
//!   both unit tests and higher-level orchestration code.
//! - The Python-facing conversion preserves the Rust `Display` message
//!   verbatim inside the raised `ValueError`.
//!
//! Conventions
//! -----------
//! - Variants are grouped by taxonomy: configuration errors first, then
//!   input-validation errors, then degenerate-series errors. Exactly one of
//!   the [`AdiCvError::is_configuration`], [`AdiCvError::is_invalid_input`],
//!   and [`AdiCvError::is_degenerate_series`] predicates holds for any value.
//! - Error messages are phrased in terms of domain constraints (e.g.,
//!   "thresholds must be finite", "no non-zero observations") rather than
//!   low-level details.
//!
//! Downstream usage
//! ----------------
//! - Configuration builders and the classifier entry points return
//!   [`AdiCvResult<T>`] to propagate failures cleanly to callers.
//! - Python bindings rely on the `From<AdiCvError>` implementation and never
//!   pattern-match on [`AdiCvError`] directly.
//! - Higher-level Rust code may match on variants to implement custom
//!   reporting, or use the taxonomy predicates for coarse-grained handling.
//!
//! Testing notes
//! -------------
//! - Unit tests in this module verify that each variant's `Display` message
//!   embeds its payload (offending name, index, or value) and that the
//!   taxonomy predicates partition the variants as documented.

use crate::demand::config::TrimHandling;

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

/// Result alias for ADI-CV configuration and classification paths.
pub type AdiCvResult<T> = Result<T, AdiCvError>;

/// AdiCvError — error conditions for ADI-CV demand classification.
///
/// Purpose
/// -------
/// Represent all construction-time and compute-time failures of the ADI-CV
/// classifier: malformed configuration, invalid series inputs, and
/// degenerate series for which ADI or CV² is undefined.
///
/// Variants
/// --------
/// - `UnknownFeature { name }`
///   A feature name outside `{"adi", "cv2", "class"}` was supplied on the
///   string-boundary constructor.
/// - `DuplicateFeature { name }`
///   The same feature appears more than once in the `features` list.
/// - `EmptyFeatureList`
///   The `features` list contains no entries, so the output record would be
///   empty.
/// - `UnknownTrimHandling { name }`
///   A trim-handling policy name outside `{"pool", "trim", "ignore"}` was
///   supplied on the string-boundary constructor.
/// - `NonFiniteThreshold { param, value }`
///   A classification threshold is NaN or ±∞, which would poison the `<=`
///   quadrant comparisons.
/// - `EmptySeries`
///   The input series has no observations.
/// - `NonFiniteValue { index, value }`
///   An observation is NaN or ±∞; the classifier declares it does not
///   support missing values.
/// - `AllZeroSeries { len }`
///   Every observation is zero, so N = 0 and both ADI and CV² are undefined.
/// - `SingleDemandEvent { policy }`
///   Exactly one non-zero observation under `trim` or `ignore` handling, so
///   the ADI denominator N − 1 is zero.
/// - `ZeroMeanDemand`
///   The non-zero observations have mean exactly zero, so CV² = (σ/μ)² is
///   undefined.
///
/// Invariants
/// ----------
/// - Each variant carries just enough information (offending name, index,
///   value, or policy) for immediate correction without leaking large data
///   structures.
/// - Configuration variants are never produced after construction; series
///   variants are never produced at construction.
///
/// Notes
/// -----
/// - Implements [`std::error::Error`] and [`std::fmt::Display`] for
///   idiomatic `?`-based propagation.
/// - With the `python-bindings` feature enabled, converts into a Python
///   `ValueError` carrying the `Display` message.
#[derive(Debug, Clone, PartialEq)]
pub enum AdiCvError {
    // ---- Configuration errors ----
    UnknownFeature { name: String },
    DuplicateFeature { name: &'static str },
    EmptyFeatureList,
    UnknownTrimHandling { name: String },
    NonFiniteThreshold { param: &'static str, value: f64 },

    // ---- Input validation errors ----
    EmptySeries,
    NonFiniteValue { index: usize, value: f64 },

    // ---- Degenerate series errors ----
    AllZeroSeries { len: usize },
    SingleDemandEvent { policy: TrimHandling },
    ZeroMeanDemand,
}

impl AdiCvError {
    /// Whether this error was raised while validating configuration.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            AdiCvError::UnknownFeature { .. }
                | AdiCvError::DuplicateFeature { .. }
                | AdiCvError::EmptyFeatureList
                | AdiCvError::UnknownTrimHandling { .. }
                | AdiCvError::NonFiniteThreshold { .. }
        )
    }

    /// Whether this error was raised while validating the input series.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, AdiCvError::EmptySeries | AdiCvError::NonFiniteValue { .. })
    }

    /// Whether this error marks a series for which ADI or CV² is undefined.
    pub fn is_degenerate_series(&self) -> bool {
        matches!(
            self,
            AdiCvError::AllZeroSeries { .. }
                | AdiCvError::SingleDemandEvent { .. }
                | AdiCvError::ZeroMeanDemand
        )
    }
}

impl std::error::Error for AdiCvError {}

impl std::fmt::Display for AdiCvError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdiCvError::UnknownFeature { name } => {
                write!(
                    f,
                    "Invalid feature name: {name:?}. Valid features are 'adi', 'cv2', and 'class'."
                )
            }
            AdiCvError::DuplicateFeature { name } => {
                write!(
                    f,
                    "Duplicate feature in features list: '{name}'. Each feature may appear at \
                     most once."
                )
            }
            AdiCvError::EmptyFeatureList => {
                write!(
                    f,
                    "The features list must contain at least one of 'adi', 'cv2', or 'class'."
                )
            }
            AdiCvError::UnknownTrimHandling { name } => {
                write!(
                    f,
                    "Invalid trim_handling value: {name:?}. Must be one of 'pool', 'trim', or \
                     'ignore'."
                )
            }
            AdiCvError::NonFiniteThreshold { param, value } => {
                write!(f, "Invalid {param}: {value}. Classification thresholds must be finite.")
            }
            AdiCvError::EmptySeries => {
                write!(f, "Series must contain at least one observation.")
            }
            AdiCvError::NonFiniteValue { index, value } => {
                write!(
                    f,
                    "Invalid observation at index {index}: {value}. Series values must be finite \
                     (missing values are not supported)."
                )
            }
            AdiCvError::AllZeroSeries { len } => {
                write!(
                    f,
                    "Series of length {len} has no non-zero observations; ADI and CV² are \
                     undefined."
                )
            }
            AdiCvError::SingleDemandEvent { policy } => {
                write!(
                    f,
                    "Series has exactly one non-zero observation; the ADI denominator N - 1 is \
                     zero under '{}' trim handling.",
                    policy.as_str()
                )
            }
            AdiCvError::ZeroMeanDemand => {
                write!(f, "Non-zero observations have mean zero; CV² is undefined.")
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<AdiCvError> for PyErr {
    fn from(err: AdiCvError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Embedding of payload values (names, indices, values, policies) into
    //   `Display` messages.
    // - The taxonomy predicates partitioning every variant into exactly one
    //   of the three error classes.
    //
    // They intentionally DO NOT cover:
    // - The `From<AdiCvError> for PyErr` conversion, since exercising it
    //   requires linking against the Python C API and is better handled by
    //   Python-level tests.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that `UnknownFeature` embeds the offending feature name in its
    // `Display` representation.
    //
    // Given
    // -----
    // - An `AdiCvError::UnknownFeature` with name "bogus".
    //
    // Expect
    // ------
    // - `format!("{err}")` contains "bogus".
    fn adicv_error_unknown_feature_includes_name_in_display() {
        // Arrange
        let err = AdiCvError::UnknownFeature { name: "bogus".to_string() };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains("bogus"), "Display message should name the feature.\nGot: {msg}");
    }

    #[test]
    // Purpose
    // -------
    // Verify that `UnknownTrimHandling` embeds the offending policy name in
    // its `Display` representation.
    //
    // Given
    // -----
    // - An `AdiCvError::UnknownTrimHandling` with name "average".
    //
    // Expect
    // ------
    // - `format!("{err}")` contains "average".
    fn adicv_error_unknown_trim_handling_includes_name_in_display() {
        // Arrange
        let err = AdiCvError::UnknownTrimHandling { name: "average".to_string() };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains("average"), "Display message should name the policy.\nGot: {msg}");
    }

    #[test]
    // Purpose
    // -------
    // Verify that `NonFiniteValue` reports both the index and the offending
    // value.
    //
    // Given
    // -----
    // - An `AdiCvError::NonFiniteValue` at index 7 with value NaN.
    //
    // Expect
    // ------
    // - `format!("{err}")` contains "7" and "NaN".
    fn adicv_error_non_finite_value_includes_index_and_payload_in_display() {
        // Arrange
        let err = AdiCvError::NonFiniteValue { index: 7, value: f64::NAN };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains('7'), "Display message should include the index.\nGot: {msg}");
        assert!(msg.contains("NaN"), "Display message should include the value.\nGot: {msg}");
    }

    #[test]
    // Purpose
    // -------
    // Verify that `SingleDemandEvent` names the trim-handling policy under
    // which the denominator vanished.
    //
    // Given
    // -----
    // - An `AdiCvError::SingleDemandEvent` with the `Trim` policy.
    //
    // Expect
    // ------
    // - `format!("{err}")` contains "trim".
    fn adicv_error_single_demand_event_names_policy_in_display() {
        // Arrange
        let err = AdiCvError::SingleDemandEvent { policy: TrimHandling::Trim };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains("trim"), "Display message should name the policy.\nGot: {msg}");
    }

    #[test]
    // Purpose
    // -------
    // Ensure the taxonomy predicates partition every variant into exactly
    // one of the three error classes.
    //
    // Given
    // -----
    // - One value of every `AdiCvError` variant.
    //
    // Expect
    // ------
    // - For each value, exactly one of `is_configuration`,
    //   `is_invalid_input`, and `is_degenerate_series` returns true.
    fn adicv_error_taxonomy_predicates_partition_variants() {
        // Arrange
        let variants = vec![
            AdiCvError::UnknownFeature { name: "x".to_string() },
            AdiCvError::DuplicateFeature { name: "adi" },
            AdiCvError::EmptyFeatureList,
            AdiCvError::UnknownTrimHandling { name: "x".to_string() },
            AdiCvError::NonFiniteThreshold { param: "adi_threshold", value: f64::NAN },
            AdiCvError::EmptySeries,
            AdiCvError::NonFiniteValue { index: 0, value: f64::INFINITY },
            AdiCvError::AllZeroSeries { len: 4 },
            AdiCvError::SingleDemandEvent { policy: TrimHandling::Ignore },
            AdiCvError::ZeroMeanDemand,
        ];

        // Act & Assert
        for err in variants {
            let classes = [err.is_configuration(), err.is_invalid_input(), err.is_degenerate_series()];
            let count = classes.iter().filter(|&&c| c).count();
            assert_eq!(count, 1, "expected exactly one taxonomy class for {err:?}, got {classes:?}");
        }
    }
}
