//! demand::classifier — ADI / CV² statistics and 4-way demand classes.
//!
//! Purpose
//! -------
//! Implement the intermittent-demand classification of Syntetos & Boylan
//! (2005, Int. J. Forecasting): compute the Average Demand Interval (ADI)
//! and the squared coefficient of variation (CV²) of a demand series, and
//! threshold the pair into one of four demand-pattern classes — smooth,
//! erratic, intermittent, or lumpy.
//!
//! Key behaviors
//! -------------
//! - Locate the non-zero observations of a series and compute ADI according
//!   to the configured [`TrimHandling`] policy:
//!   - `pool`:   ADI = T / N,
//!   - `trim`:   ADI = (last_nonzero − first_nonzero) / (N − 1),
//!   - `ignore`: ADI = T / (N − 1),
//!   where T is the series length and N the count of non-zero observations.
//! - Compute CV² = (σ/μ)² over the non-zero subsequence, with population
//!   (ddof = 0) standard deviation.
//! - Classify via an explicit 2×2 decision table on
//!   `(ADI <= adi_threshold, CV² <= cv2_threshold)`; boundary values belong
//!   to the "low" side.
//! - Expose a compact [`AdiCvOutcome`] value with all three results, and a
//!   [`AdiCvClassifier::transform`] entry point that emits only the
//!   configured features, in configured order, as a single-row record.
//!
//! Invariants & assumptions
//! ------------------------
//! - Input validation (non-empty, finite observations) is delegated to
//!   [`validate_series`], which returns [`AdiCvResult`] rather than
//!   panicking.
//! - Degenerate series fail explicitly *before* classification: N = 0
//!   (all zeros), N = 1 under `trim`/`ignore`, and a zero mean over the
//!   non-zero values are all reported as errors, so the decision table only
//!   ever sees finite ADI and CV² values and covers all inputs with no gaps
//!   or overlaps.
//! - The classifier is a pure function of `(series, config)`: no hidden
//!   state, no side effects, O(T) time and O(N) auxiliary space per call.
//!
//! Conventions
//! -----------
//! - Indices are 0-based; zeros represent "no demand" periods and any
//!   non-zero value (including negative) counts as a demand event.
//! - Class labels use the sktime estimator's lowercase strings
//!   (`"smooth"`, `"erratic"`, `"intermittent"`, `"lumpy"`).
//! - Error handling uses [`AdiCvError`] from `demand::errors` and the
//!   result alias [`AdiCvResult`].
//!
//! Downstream usage
//! ----------------
//! - Call [`AdiCvClassifier::classify`] to obtain the full
//!   `(ADI, CV², class)` outcome, or [`AdiCvClassifier::transform`] for the
//!   feature-filtered record a pipeline consumes as a single tabular row.
//! - The classifier requires no fitting step; Python bindings expose only
//!   the transform surface, leaving helper functions private to the crate.
//!
//! Testing notes
//! -------------
//! - Unit tests in this module verify the low-level helpers (non-zero
//!   location, ADI per policy, CV², quadrant assignment) on small synthetic
//!   series, the boundary-to-low-side rule, and degenerate-series errors.
//! - End-to-end scenarios, feature subsetting, and idempotence are covered
//!   by the integration suite in `tests/`.

use crate::demand::config::{AdiCvConfig, Feature, TrimHandling};
use crate::demand::errors::{AdiCvError, AdiCvResult};
use crate::demand::validation::validate_series;
use ndarray::Array1;

/// DemandClass — the four Syntetos–Boylan demand-pattern labels.
///
/// Purpose
/// -------
/// Name the quadrant of the (ADI, CV²) plane a series falls into. The two
/// thresholds partition the plane into exactly four regions; every finite
/// (ADI, CV²) pair maps to exactly one label.
///
/// Variants
/// --------
/// - `Smooth`: low ADI, low CV² — regular demand of stable size.
/// - `Erratic`: low ADI, high CV² — regular demand of varying size.
/// - `Intermittent`: high ADI, low CV² — sparse demand of stable size.
/// - `Lumpy`: high ADI, high CV² — sparse demand of varying size.
///
/// Notes
/// -----
/// - "Low" means `<=` the corresponding threshold; boundary values are low.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemandClass {
    Smooth,
    Erratic,
    Intermittent,
    Lumpy,
}

impl DemandClass {
    /// The canonical lowercase label of this class.
    pub fn as_str(&self) -> &'static str {
        match self {
            DemandClass::Smooth => "smooth",
            DemandClass::Erratic => "erratic",
            DemandClass::Intermittent => "intermittent",
            DemandClass::Lumpy => "lumpy",
        }
    }
}

impl std::fmt::Display for DemandClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// FeatureValue — one named column of the output record.
///
/// Purpose
/// -------
/// Carry a single computed feature together with its identity, so the
/// record returned by [`AdiCvClassifier::transform`] has named columns
/// matching the configured features.
///
/// Variants
/// --------
/// - `Adi(f64)`: the ADI statistic.
/// - `Cv2(f64)`: the CV² statistic.
/// - `Class(DemandClass)`: the demand-pattern label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FeatureValue {
    Adi(f64),
    Cv2(f64),
    Class(DemandClass),
}

impl FeatureValue {
    /// The feature this value belongs to.
    pub fn feature(&self) -> Feature {
        match self {
            FeatureValue::Adi(_) => Feature::Adi,
            FeatureValue::Cv2(_) => Feature::Cv2,
            FeatureValue::Class(_) => Feature::Class,
        }
    }

    /// The column name of this value.
    pub fn name(&self) -> &'static str {
        self.feature().as_str()
    }
}

/// AdiCvOutcome — outcome of a single ADI-CV classification.
///
/// Purpose
/// -------
/// Represent the full result of classifying one demand series: the ADI
/// statistic, the CV² statistic, and the demand-pattern class derived from
/// them.
///
/// Key behaviors
/// -------------
/// - Holds ADI as computed under the configured trim-handling policy.
/// - Holds CV² computed over the non-zero subsequence with population
///   standard deviation.
/// - Holds the class assigned by the 2×2 decision table.
/// - Provides lightweight accessors for each field so that downstream code
///   (including Python bindings) does not depend on the internal layout.
///
/// Invariants
/// ----------
/// - `adi` is finite and strictly positive whenever construction succeeds
///   (degenerate denominators are surfaced as errors instead).
/// - `cv2` is finite and non-negative.
/// - `class` is the unique quadrant of `(adi, cv2)` under the thresholds
///   used at construction time.
///
/// Performance
/// -----------
/// - Stores two scalars and a label and derives `Copy`/`Clone`, making it
///   cheap to pass by value across FFI boundaries or between threads.
///
/// Notes
/// -----
/// - A simple value object; it does not own the original series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdiCvOutcome {
    adi: f64,
    cv2: f64,
    class: DemandClass,
}

impl AdiCvOutcome {
    /// The Average Demand Interval statistic.
    pub fn adi(&self) -> f64 {
        self.adi
    }

    /// The squared coefficient of variation over non-zero values.
    pub fn cv2(&self) -> f64 {
        self.cv2
    }

    /// The demand-pattern class.
    pub fn class(&self) -> DemandClass {
        self.class
    }
}

/// AdiCvClassifier — stateless ADI-CV demand-pattern classifier.
///
/// Purpose
/// -------
/// Bind a validated [`AdiCvConfig`] to the classification routines. The
/// classifier holds only its configuration; every call computes all values
/// fresh, so there is no state drift between invocations, and concurrent
/// use on independent inputs is trivially safe.
///
/// Parameters
/// ----------
/// Constructed via:
/// - `AdiCvClassifier::new(config: AdiCvConfig)`
///   Wrap an already-validated configuration.
/// - `AdiCvClassifier::default()`
///   Use the Syntetos–Boylan defaults.
///
/// Fields
/// ------
/// - `config`: [`AdiCvConfig`]
///   Thresholds, feature selection, and trim-handling policy.
///
/// Notes
/// -----
/// - The transform requires no fitting step; this type intentionally has no
///   `fit` method and no mutable state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AdiCvClassifier {
    config: AdiCvConfig,
}

impl AdiCvClassifier {
    /// Wrap a validated configuration.
    pub fn new(config: AdiCvConfig) -> AdiCvClassifier {
        AdiCvClassifier { config }
    }

    /// The configuration this classifier was built with.
    pub fn config(&self) -> &AdiCvConfig {
        &self.config
    }

    /// Classify a demand series, returning the full (ADI, CV², class)
    /// outcome.
    ///
    /// Parameters
    /// ----------
    /// - `series`: `&[f64]`
    ///   Ordered demand observations of length T ≥ 1. Zeros represent
    ///   no-demand periods; all values must be finite.
    ///
    /// Returns
    /// -------
    /// `AdiCvResult<AdiCvOutcome>`
    ///   - `Ok(AdiCvOutcome)` with ADI, CV², and the class label.
    ///   - `Err(AdiCvError)` when the series is empty or contains
    ///     non-finite values, or when the statistics are undefined.
    ///
    /// Errors
    /// ------
    /// - `AdiCvError::EmptySeries` / `AdiCvError::NonFiniteValue`
    ///   Input validation failures (see [`validate_series`]).
    /// - `AdiCvError::AllZeroSeries`
    ///   The series has no non-zero observations (N = 0), so both ADI and
    ///   CV² are undefined under every policy.
    /// - `AdiCvError::SingleDemandEvent`
    ///   Exactly one non-zero observation under the `trim` or `ignore`
    ///   policy, so the ADI denominator N − 1 is zero.
    /// - `AdiCvError::ZeroMeanDemand`
    ///   The non-zero observations have mean exactly zero, so CV² is
    ///   undefined.
    ///
    /// Panics
    /// ------
    /// - Never panics under normal operation; all user-facing invalid
    ///   inputs are surfaced as `AdiCvError` values.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// use intermittent_demand::demand::classifier::{AdiCvClassifier, DemandClass};
    ///
    /// let series = vec![5.0, 0.0, 0.0, 3.0, 0.0, 4.0, 0.0, 0.0, 0.0, 2.0];
    /// let outcome = AdiCvClassifier::default().classify(&series).unwrap();
    ///
    /// assert_eq!(outcome.adi(), 2.5);
    /// assert_eq!(outcome.class(), DemandClass::Intermittent);
    /// ```
    pub fn classify(&self, series: &[f64]) -> AdiCvResult<AdiCvOutcome> {
        validate_series(series)?;
        let nonzero = nonzero_indices(series);
        let adi = calc_adi(series.len(), &nonzero, self.config.trim_handling())?;
        let cv2 = calc_cv2(series, &nonzero)?;
        let class =
            classify_quadrant(adi, cv2, self.config.adi_threshold(), self.config.cv2_threshold());

        Ok(AdiCvOutcome { adi, cv2, class })
    }

    /// Classify a demand series and emit the configured features as a
    /// single-row record.
    ///
    /// This is the pipeline-facing transform surface: the record contains
    /// exactly the configured features, in configured order, with named
    /// columns. The transform is stateless and requires no fitting step.
    ///
    /// Parameters
    /// ----------
    /// - `series`: `&[f64]`
    ///   Ordered demand observations; same constraints as
    ///   [`AdiCvClassifier::classify`].
    ///
    /// Returns
    /// -------
    /// `AdiCvResult<Vec<FeatureValue>>`
    ///   The ordered record, or any error [`AdiCvClassifier::classify`] can
    ///   produce. There is no partial record: either every configured
    ///   feature is present or an error is returned.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// use intermittent_demand::demand::classifier::{AdiCvClassifier, FeatureValue};
    ///
    /// let series = vec![1.0, 1.0, 1.0, 1.0, 1.0];
    /// let record = AdiCvClassifier::default().transform(&series).unwrap();
    ///
    /// let names: Vec<&str> = record.iter().map(|v| v.name()).collect();
    /// assert_eq!(names, ["adi", "cv2", "class"]);
    /// ```
    pub fn transform(&self, series: &[f64]) -> AdiCvResult<Vec<FeatureValue>> {
        let outcome = self.classify(series)?;

        Ok(self
            .config
            .features()
            .iter()
            .map(|feature| match feature {
                Feature::Adi => FeatureValue::Adi(outcome.adi()),
                Feature::Cv2 => FeatureValue::Cv2(outcome.cv2()),
                Feature::Class => FeatureValue::Class(outcome.class()),
            })
            .collect())
    }
}

//
// ---------- Private helpers (compact docs) ----------
//

/// Collect the 0-based indices of non-zero observations, in order.
#[inline]
fn nonzero_indices(series: &[f64]) -> Vec<usize> {
    series
        .iter()
        .enumerate()
        .filter_map(|(index, &value)| (value != 0.0).then_some(index))
        .collect()
}

/// Compute ADI from the series length and non-zero indices under a policy.
///
/// Parameters
/// ----------
/// - `len`: `usize`
///   Series length T.
/// - `nonzero`: `&[usize]`
///   Ascending indices of the N non-zero observations.
/// - `policy`: [`TrimHandling`]
///   Numerator/denominator selection (see module docs for the formulas).
///
/// Returns
/// -------
/// `AdiCvResult<f64>`
///   The ADI value, or a degenerate-series error when the denominator
///   would be zero.
///
/// Errors
/// ------
/// - `AdiCvError::AllZeroSeries` when N = 0, under every policy.
/// - `AdiCvError::SingleDemandEvent` when N = 1 under `Trim` or `Ignore`.
#[inline]
fn calc_adi(len: usize, nonzero: &[usize], policy: TrimHandling) -> AdiCvResult<f64> {
    let n = nonzero.len();
    if n == 0 {
        return Err(AdiCvError::AllZeroSeries { len });
    }

    let (numerator, denominator) = match policy {
        TrimHandling::Pool => (len as f64, n as f64),
        TrimHandling::Trim | TrimHandling::Ignore if n == 1 => {
            return Err(AdiCvError::SingleDemandEvent { policy });
        }
        TrimHandling::Trim => {
            let first = nonzero[0];
            let last = nonzero[n - 1];
            ((last - first) as f64, (n - 1) as f64)
        }
        TrimHandling::Ignore => (len as f64, (n - 1) as f64),
    };

    Ok(numerator / denominator)
}

/// Compute CV² = (σ/μ)² over the non-zero observations.
///
/// Parameters
/// ----------
/// - `series`: `&[f64]`
///   The full demand series.
/// - `nonzero`: `&[usize]`
///   Ascending indices of the non-zero observations; must be non-empty
///   (callers run [`calc_adi`] first, which rejects N = 0).
///
/// Returns
/// -------
/// `AdiCvResult<f64>`
///   The CV² value, using the population (ddof = 0) standard deviation.
///
/// Errors
/// ------
/// - `AdiCvError::AllZeroSeries` when `nonzero` is empty.
/// - `AdiCvError::ZeroMeanDemand` when the non-zero values sum to zero,
///   which would send (σ/μ)² to ±∞.
#[inline]
fn calc_cv2(series: &[f64], nonzero: &[usize]) -> AdiCvResult<f64> {
    let values = Array1::from_iter(nonzero.iter().map(|&index| series[index]));
    let mu = values.mean().ok_or(AdiCvError::AllZeroSeries { len: series.len() })?;
    if mu == 0.0 {
        return Err(AdiCvError::ZeroMeanDemand);
    }
    let sigma = values.std(0.0);

    Ok((sigma / mu).powi(2))
}

/// Assign the demand-pattern class from the 2×2 decision table.
///
/// Boundary policy: comparisons are `<=`, so values equal to a threshold
/// classify to the "low" side. The match over `(adi_low, cv2_low)` is
/// exhaustive, covering every finite (ADI, CV²) pair exactly once.
#[inline]
fn classify_quadrant(
    adi: f64, cv2: f64, adi_threshold: f64, cv2_threshold: f64,
) -> DemandClass {
    match (adi <= adi_threshold, cv2 <= cv2_threshold) {
        (true, true) => DemandClass::Smooth,
        (true, false) => DemandClass::Erratic,
        (false, true) => DemandClass::Intermittent,
        (false, false) => DemandClass::Lumpy,
    }
}
