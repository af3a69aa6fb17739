//! demand::validation — shared input guards for demand series.
//!
//! Purpose
//! -------
//! Centralize basic input validation for the ADI-CV classification routines.
//! This keeps checks on series length and data finiteness in one place
//! instead of duplicating them across entry points.
//!
//! Key behaviors
//! -------------
//! - Enforce simple preconditions on a demand series before any statistics
//!   are computed.
//! - Map invalid inputs into structured [`AdiCvError`] values for consistent
//!   error handling in Rust and Python bindings.
//!
//! Invariants & assumptions
//! ------------------------
//! - Input series must have length at least 1.
//! - All observations must be finite (`!NaN`, not ±∞); the classifier does
//!   not support missing values.
//! - Univariate-only input is a type-level guarantee of the `&[f64]`
//!   surface and needs no runtime check.
//!
//! Conventions
//! -----------
//! - This module is purely about *validation*; it performs no I/O and does
//!   not allocate beyond what is required for error construction.
//! - Degenerate-series conditions (all zeros, single demand event) are a
//!   property of the *statistics*, not the raw input, and are detected
//!   during computation in the classifier module rather than here.
//!
//! Downstream usage
//! ----------------
//! - Call [`validate_series`] at the top of classification entry points
//!   before locating non-zero observations.
//! - Treat a successful return (`Ok(())`) as a guarantee that the series is
//!   non-empty and fully finite.
//!
//! Testing notes
//! -------------
//! - Unit tests in this module cover both error branches of
//!   [`validate_series`] and a simple success path.

use crate::demand::errors::{AdiCvError, AdiCvResult};

/// Validate basic input constraints for a demand series.
///
/// Parameters
/// ----------
/// - `series`: `&[f64]`
///   Ordered demand observations. Must be non-empty, and all values must be
///   finite (no `NaN` or ±∞). Zeros are valid and represent no-demand
///   periods.
///
/// Returns
/// -------
/// `AdiCvResult<()>`
///   - `Ok(())` if all basic constraints are satisfied.
///   - `Err(AdiCvError)` if any constraint is violated, with a variant
///     encoding which condition failed and, where relevant, the offending
///     index and value.
///
/// Errors
/// ------
/// - `AdiCvError::EmptySeries`
///   Returned when `series.len() == 0`.
/// - `AdiCvError::NonFiniteValue`
///   Returned when any observation is not finite, with the offending index
///   and value.
///
/// Panics
/// ------
/// - Never panics. All failures are reported via `AdiCvError`.
///
/// Examples
/// --------
/// ```rust
/// # use intermittent_demand::demand::validation::validate_series;
/// # use intermittent_demand::demand::errors::AdiCvError;
/// let series = vec![5.0_f64, 0.0, 3.0];
///
/// // Valid input succeeds:
/// assert!(validate_series(&series).is_ok());
///
/// // A NaN observation produces a NonFiniteValue error:
/// match validate_series(&[5.0, f64::NAN]) {
///     Err(AdiCvError::NonFiniteValue { index: 1, .. }) => (),
///     other => panic!("expected NonFiniteValue error, got {other:?}"),
/// }
/// ```
pub fn validate_series(series: &[f64]) -> AdiCvResult<()> {
    if series.is_empty() {
        return Err(AdiCvError::EmptySeries);
    }

    for (index, &value) in series.iter().enumerate() {
        if !value.is_finite() {
            return Err(AdiCvError::NonFiniteValue { index, value });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Successful validation of a well-formed series (including zeros).
    // - Each error branch in `validate_series`:
    //   * empty series,
    //   * non-finite observation (NaN and ±∞), with index reporting.
    //
    // They intentionally DO NOT cover:
    // - Degenerate-series detection (all zeros, single demand event), which
    //   lives in the classifier module.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that `validate_series` succeeds on a finite series containing
    // zeros.
    //
    // Given
    // -----
    // - A finite series with interior zeros.
    //
    // Expect
    // ------
    // - `validate_series` returns `Ok(())`.
    fn validate_series_finite_series_with_zeros_succeeds() {
        // Arrange
        let series = vec![5.0_f64, 0.0, 0.0, 3.0];

        // Act
        let result = validate_series(&series);

        // Assert
        assert!(result.is_ok(), "Expected Ok(()) for valid series, got {result:?}");
    }

    #[test]
    // Purpose
    // -------
    // Ensure that an empty series is rejected with
    // `AdiCvError::EmptySeries`.
    //
    // Given
    // -----
    // - An empty series.
    //
    // Expect
    // ------
    // - `validate_series` returns `Err(AdiCvError::EmptySeries)`.
    fn validate_series_empty_series_returns_empty_series_error() {
        // Arrange
        let series: Vec<f64> = Vec::new();

        // Act
        let result = validate_series(&series);

        // Assert
        match result {
            Err(AdiCvError::EmptySeries) => (),
            other => panic!("expected EmptySeries error, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify that a NaN observation triggers `AdiCvError::NonFiniteValue`
    // with the offending index.
    //
    // Given
    // -----
    // - A series containing a `NaN` at index 2.
    //
    // Expect
    // ------
    // - `validate_series` returns `Err(NonFiniteValue { index: 2, .. })`
    //   with a non-finite payload.
    fn validate_series_nan_value_returns_non_finite_value_with_index() {
        // Arrange
        let series = vec![5.0_f64, 3.0, f64::NAN, 4.0];

        // Act
        let result = validate_series(&series);

        // Assert
        match result {
            Err(AdiCvError::NonFiniteValue { index, value }) => {
                assert_eq!(index, 2, "NonFiniteValue should report the first offending index");
                assert!(!value.is_finite(), "NonFiniteValue payload should be non-finite");
            }
            other => panic!("expected NonFiniteValue error, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify that an infinite observation is rejected just like NaN.
    //
    // Given
    // -----
    // - A series containing `-∞` at index 0.
    //
    // Expect
    // ------
    // - `validate_series` returns `Err(NonFiniteValue { index: 0, .. })`.
    fn validate_series_infinite_value_returns_non_finite_value() {
        // Arrange
        let series = vec![f64::NEG_INFINITY, 3.0];

        // Act
        let result = validate_series(&series);

        // Assert
        match result {
            Err(AdiCvError::NonFiniteValue { index: 0, .. }) => (),
            other => panic!("expected NonFiniteValue at index 0, got {other:?}"),
        }
    }
}
