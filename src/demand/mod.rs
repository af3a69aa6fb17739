//! demand — ADI-CV intermittent-demand classification stack.
//!
//! Purpose
//! -------
//! Classify univariate demand series into the four Syntetos–Boylan
//! demand-pattern categories (smooth, erratic, intermittent, lumpy) from two
//! summary statistics: the Average Demand Interval (ADI) and the squared
//! coefficient of variation (CV²) over non-zero observations. This subtree
//! bundles the classifier, its validated configuration, shared input guards,
//! and the error surface under a single namespace.
//!
//! Key behaviors
//! -------------
//! - Expose the classifier via [`AdiCvClassifier`] with two entry points:
//!   [`AdiCvClassifier::classify`](classifier::AdiCvClassifier::classify)
//!   for the full (ADI, CV², class) outcome and
//!   [`AdiCvClassifier::transform`](classifier::AdiCvClassifier::transform)
//!   for the feature-filtered single-row record.
//! - Represent configuration as the eagerly-validated [`AdiCvConfig`], with
//!   tagged enums for the trim-handling policy ([`TrimHandling`]) and the
//!   output-feature selection ([`Feature`]), plus named Syntetos–Boylan
//!   default thresholds.
//! - Centralize series input guards in [`validate_series`] and all failure
//!   modes in [`AdiCvError`] / [`AdiCvResult`], including a conversion to
//!   Python exceptions when the `python-bindings` feature is enabled.
//!
//! Invariants & assumptions
//! ------------------------
//! - Series inputs are finite, real-valued, univariate observations; zeros
//!   mark no-demand periods. Entry points call [`validate_series`] before
//!   any computation and never panic on user-facing invalid inputs.
//! - Degenerate series (no non-zero values; a single demand event under
//!   `trim`/`ignore`; zero-mean non-zero values) fail explicitly before the
//!   classification step, so the 2×2 decision table never sees NaN or ±∞.
//! - The classifier is stateless and side-effect free: all values are
//!   computed fresh per call, and concurrent invocations on independent
//!   inputs are safe.
//!
//! Conventions
//! -----------
//! - String vocabularies match the sktime estimator: features are
//!   `"adi"`, `"cv2"`, `"class"`; policies are `"pool"`, `"trim"`,
//!   `"ignore"`; class labels are lowercase.
//! - Boundary policy everywhere is `<=`: a statistic equal to its threshold
//!   classifies to the "low" side.
//! - Configuration errors are raised at construction time only; compute
//!   time raises input-validation and degenerate-series errors only.
//!
//! Downstream usage
//! ----------------
//! - Typical Rust code imports the main surface as:
//!
//!   ```rust
//!   use intermittent_demand::demand::{AdiCvClassifier, AdiCvConfig, DemandClass};
//!
//!   let series = vec![5.0, 0.0, 0.0, 3.0, 0.0, 4.0, 0.0, 0.0, 0.0, 2.0];
//!   let outcome = AdiCvClassifier::default().classify(&series).unwrap();
//!   assert_eq!(outcome.class(), DemandClass::Intermittent);
//!   ```
//!
//!   and only refers to `demand::errors` or `demand::validation` directly
//!   when matching on [`AdiCvError`] or reusing [`validate_series`].
//! - Python bindings expose thin wrappers around the same entry points and
//!   rely on `From<AdiCvError> for PyErr` to raise `ValueError` instances.
//!
//! Testing notes
//! -------------
//! - Unit tests in [`errors`] verify `Display` payload embedding and the
//!   taxonomy predicates; [`validation`] covers all guard branches;
//!   [`config`] covers parsing and every configuration-error branch;
//!   [`classifier`] covers the ADI/CV² helpers, the decision table, and the
//!   boundary rule.
//! - End-to-end scenarios (worked Syntetos–Boylan examples, feature
//!   subsetting, trim-handling equivalence, idempotence) live in
//!   `tests/integration_adi_cv.rs`.

pub mod classifier;
pub mod config;
pub mod errors;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::classifier::{AdiCvClassifier, AdiCvOutcome, DemandClass, FeatureValue};
pub use self::config::{AdiCvConfig, Feature, TrimHandling};
pub use self::errors::{AdiCvError, AdiCvResult};
pub use self::validation::validate_series;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use intermittent_demand::demand::prelude::*;
//
// to import the main classification surface in a single line.

pub mod prelude {
    pub use super::classifier::{AdiCvClassifier, AdiCvOutcome, DemandClass, FeatureValue};
    pub use super::config::{AdiCvConfig, Feature, TrimHandling};
    pub use super::errors::{AdiCvError, AdiCvResult};
}
