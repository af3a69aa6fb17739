//! demand::config — validated configuration for the ADI-CV classifier.
//!
//! Purpose
//! -------
//! Collect the configuration knobs of the ADI-CV classifier in one place:
//! the two classification thresholds, the ordered list of output features,
//! and the trim-handling policy for leading/trailing zeros. All validation
//! happens eagerly at construction, so compute-time code never re-checks
//! configuration.
//!
//! Key behaviors
//! -------------
//! - Represent the output-feature selection as the [`Feature`] enum and the
//!   leading/trailing-zero policy as the [`TrimHandling`] enum, each with a
//!   string-parsing constructor for FFI and config-file boundaries.
//! - Bundle everything into [`AdiCvConfig`], an immutable carrier whose
//!   constructors reject non-finite thresholds, unknown or duplicate feature
//!   names, empty feature lists, and unknown trim-handling names.
//! - Resolve absent configuration to named default constants once at
//!   construction ([`AdiCvConfig::DEFAULT_ADI_THRESHOLD`],
//!   [`AdiCvConfig::DEFAULT_CV2_THRESHOLD`], default feature order
//!   `[adi, cv2, class]`, default policy `pool`), never per call.
//!
//! Invariants & assumptions
//! ------------------------
//! - A constructed [`AdiCvConfig`] always has finite thresholds and a
//!   non-empty, duplicate-free `features` list in caller-supplied order.
//! - Fields are private and read through accessors; the configuration is
//!   immutable for the life of the instance.
//!
//! Conventions
//! -----------
//! - String names follow the sktime estimator's vocabulary: features are
//!   `"adi"`, `"cv2"`, `"class"`; policies are `"pool"`, `"trim"`,
//!   `"ignore"`.
//! - Invalid configuration is reported via [`AdiCvError`] configuration
//!   variants, never at classify/transform time.
//!
//! Downstream usage
//! ----------------
//! - Rust callers build an [`AdiCvConfig`] via [`AdiCvConfig::new`] (typed)
//!   or [`AdiCvConfig::default`] and hand it to
//!   [`AdiCvClassifier::new`](crate::demand::classifier::AdiCvClassifier::new).
//! - FFI layers (Python bindings) call [`AdiCvConfig::from_named`] with raw
//!   strings so that unknown names fail eagerly with configuration errors.
//!
//! Testing notes
//! -------------
//! - Unit tests cover string parsing of both enums (valid and invalid
//!   names), every configuration-error branch of the constructors, default
//!   values, and preservation of the caller's feature order.

use crate::demand::errors::{AdiCvError, AdiCvResult};

/// Feature — selectable columns of the ADI-CV output record.
///
/// Purpose
/// -------
/// Name the three values the classifier can emit: the ADI statistic, the
/// CV² statistic, and the categorical class label. The configured feature
/// list determines both which columns appear in the output record and their
/// order.
///
/// Variants
/// --------
/// - `Adi`: the Average Demand Interval statistic.
/// - `Cv2`: the squared coefficient of variation over non-zero values.
/// - `Class`: the 4-way demand-pattern label.
///
/// Notes
/// -----
/// - [`Feature::parse`] accepts the sktime estimator's string names and
///   is the only place unknown feature names can enter the system; typed
///   Rust callers cannot construct an invalid feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    Adi,
    Cv2,
    Class,
}

impl Feature {
    /// Default output order: `[adi, cv2, class]`.
    pub const DEFAULT_ORDER: [Feature; 3] = [Feature::Adi, Feature::Cv2, Feature::Class];

    /// Parse a feature name from the sktime estimator's vocabulary.
    ///
    /// Parameters
    /// ----------
    /// - `name`: `&str`
    ///   One of `"adi"`, `"cv2"`, or `"class"`.
    ///
    /// Returns
    /// -------
    /// `AdiCvResult<Feature>`
    ///   The corresponding variant, or `AdiCvError::UnknownFeature` for any
    ///   other name.
    pub fn parse(name: &str) -> AdiCvResult<Feature> {
        match name {
            "adi" => Ok(Feature::Adi),
            "cv2" => Ok(Feature::Cv2),
            "class" => Ok(Feature::Class),
            other => Err(AdiCvError::UnknownFeature { name: other.to_string() }),
        }
    }

    /// The canonical column name of this feature.
    pub fn as_str(&self) -> &'static str {
        match self {
            Feature::Adi => "adi",
            Feature::Cv2 => "cv2",
            Feature::Class => "class",
        }
    }
}

/// TrimHandling — policy for leading/trailing zeros in the ADI formula.
///
/// Purpose
/// -------
/// Encode how the ADI numerator and denominator treat idle periods at the
/// edges of the series, matching the sktime estimator's
/// `adi_trim_handling` parameter.
///
/// Variants
/// --------
/// - `Pool`
///   ADI = T / N: full span over the count of demand events, including
///   leading/trailing idle periods. The default.
/// - `Trim`
///   ADI = (last_nonzero − first_nonzero) / (N − 1): only the span between
///   the first and last demand event, ignoring edge idle periods entirely.
/// - `Ignore`
///   ADI = T / (N − 1): full span, but the first demand event is treated as
///   a reference point rather than a counted interval.
///
/// Invariants
/// ----------
/// - `Trim` and `Ignore` require N ≥ 2; with a single demand event their
///   denominator is zero and classification fails with
///   [`AdiCvError::SingleDemandEvent`].
///
/// Notes
/// -----
/// - Downstream code pattern-matches on this enum exhaustively so that the
///   compiler flags missing cases if new policies are added later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrimHandling {
    #[default]
    Pool,
    Trim,
    Ignore,
}

impl TrimHandling {
    /// Parse a policy name from the sktime estimator's vocabulary.
    ///
    /// Parameters
    /// ----------
    /// - `name`: `&str`
    ///   One of `"pool"`, `"trim"`, or `"ignore"`.
    ///
    /// Returns
    /// -------
    /// `AdiCvResult<TrimHandling>`
    ///   The corresponding variant, or `AdiCvError::UnknownTrimHandling` for
    ///   any other name.
    pub fn parse(name: &str) -> AdiCvResult<TrimHandling> {
        match name {
            "pool" => Ok(TrimHandling::Pool),
            "trim" => Ok(TrimHandling::Trim),
            "ignore" => Ok(TrimHandling::Ignore),
            other => Err(AdiCvError::UnknownTrimHandling { name: other.to_string() }),
        }
    }

    /// The canonical name of this policy.
    pub fn as_str(&self) -> &'static str {
        match self {
            TrimHandling::Pool => "pool",
            TrimHandling::Trim => "trim",
            TrimHandling::Ignore => "ignore",
        }
    }
}

/// AdiCvConfig — immutable, validated classifier configuration.
///
/// Purpose
/// -------
/// Bundle the four configuration parameters of the ADI-CV classifier: the
/// ADI and CV² cutoffs, the ordered output-feature list, and the
/// trim-handling policy. Construction is the single validation point; a
/// value of this type is always internally consistent.
///
/// Parameters
/// ----------
/// Constructed via:
/// - [`AdiCvConfig::new`]
///   Typed constructor; validates thresholds and the feature list.
/// - [`AdiCvConfig::from_named`]
///   String-boundary constructor for FFI layers; additionally parses
///   feature and policy names.
/// - [`AdiCvConfig::default`]
///   Named defaults: thresholds 1.32 / 0.49, features `[adi, cv2, class]`,
///   policy `pool`. Infallible.
///
/// Fields
/// ------
/// - `adi_threshold`: `f64`
///   Cutoff separating "low" from "high" ADI; boundary values classify low.
/// - `cv2_threshold`: `f64`
///   Cutoff separating "low" from "high" CV²; boundary values classify low.
/// - `features`: `Vec<Feature>`
///   Non-empty, duplicate-free output columns in emission order.
/// - `trim_handling`: [`TrimHandling`]
///   Leading/trailing-zero policy for the ADI formula.
///
/// Invariants
/// ----------
/// - Both thresholds are finite.
/// - `features` is non-empty and contains each feature at most once.
///
/// Performance
/// -----------
/// - Small and `Clone`/`PartialEq`; at most three feature entries, so copies
///   are cheap.
#[derive(Debug, Clone, PartialEq)]
pub struct AdiCvConfig {
    adi_threshold: f64,
    cv2_threshold: f64,
    features: Vec<Feature>,
    trim_handling: TrimHandling,
}

impl AdiCvConfig {
    /// ADI cutoff from Syntetos & Boylan (2005).
    pub const DEFAULT_ADI_THRESHOLD: f64 = 1.32;

    /// CV² cutoff from Syntetos & Boylan (2005).
    pub const DEFAULT_CV2_THRESHOLD: f64 = 0.49;

    /// Construct a validated configuration from typed components.
    ///
    /// Parameters
    /// ----------
    /// - `adi_threshold`: `f64`
    ///   ADI cutoff; must be finite.
    /// - `cv2_threshold`: `f64`
    ///   CV² cutoff; must be finite.
    /// - `features`: `Vec<Feature>`
    ///   Output columns in emission order; must be non-empty and
    ///   duplicate-free.
    /// - `trim_handling`: [`TrimHandling`]
    ///   Policy for leading/trailing zeros in the ADI formula.
    ///
    /// Returns
    /// -------
    /// `AdiCvResult<AdiCvConfig>`
    ///   The validated configuration, or a configuration error.
    ///
    /// Errors
    /// ------
    /// - `AdiCvError::NonFiniteThreshold`
    ///   When either threshold is NaN or ±∞.
    /// - `AdiCvError::EmptyFeatureList`
    ///   When `features` is empty.
    /// - `AdiCvError::DuplicateFeature`
    ///   When a feature appears more than once.
    ///
    /// Panics
    /// ------
    /// - Never panics; all invalid configuration is reported via
    ///   `AdiCvError`.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// use intermittent_demand::demand::config::{AdiCvConfig, Feature, TrimHandling};
    ///
    /// let config = AdiCvConfig::new(
    ///     1.5,
    ///     0.2,
    ///     vec![Feature::Adi, Feature::Class],
    ///     TrimHandling::Trim,
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(config.features(), &[Feature::Adi, Feature::Class]);
    /// ```
    pub fn new(
        adi_threshold: f64, cv2_threshold: f64, features: Vec<Feature>,
        trim_handling: TrimHandling,
    ) -> AdiCvResult<AdiCvConfig> {
        if !adi_threshold.is_finite() {
            return Err(AdiCvError::NonFiniteThreshold {
                param: "adi_threshold",
                value: adi_threshold,
            });
        }
        if !cv2_threshold.is_finite() {
            return Err(AdiCvError::NonFiniteThreshold {
                param: "cv2_threshold",
                value: cv2_threshold,
            });
        }
        if features.is_empty() {
            return Err(AdiCvError::EmptyFeatureList);
        }
        for (i, feature) in features.iter().enumerate() {
            if features[..i].contains(feature) {
                return Err(AdiCvError::DuplicateFeature { name: feature.as_str() });
            }
        }

        Ok(AdiCvConfig { adi_threshold, cv2_threshold, features, trim_handling })
    }

    /// Construct a validated configuration from raw string names.
    ///
    /// This is the FFI-boundary counterpart of [`AdiCvConfig::new`]: feature
    /// and policy names are parsed first, so typos such as
    /// `features = ["adi", "bogus"]` or `trim_handling = "average"` fail
    /// eagerly at construction rather than at classify time.
    ///
    /// Parameters
    /// ----------
    /// - `features`: `&[&str]`
    ///   Output column names in emission order; each must be one of
    ///   `"adi"`, `"cv2"`, `"class"`.
    /// - `trim_handling`: `&str`
    ///   One of `"pool"`, `"trim"`, `"ignore"`.
    /// - `adi_threshold`, `cv2_threshold`: `f64`
    ///   Cutoffs; must be finite.
    ///
    /// Returns
    /// -------
    /// `AdiCvResult<AdiCvConfig>`
    ///   The validated configuration, or a configuration error.
    ///
    /// Errors
    /// ------
    /// - `AdiCvError::UnknownFeature` / `AdiCvError::UnknownTrimHandling`
    ///   For names outside the documented vocabularies.
    /// - Everything [`AdiCvConfig::new`] can return.
    pub fn from_named(
        features: &[&str], trim_handling: &str, adi_threshold: f64, cv2_threshold: f64,
    ) -> AdiCvResult<AdiCvConfig> {
        let parsed: Vec<Feature> =
            features.iter().map(|name| Feature::parse(name)).collect::<AdiCvResult<_>>()?;
        let policy = TrimHandling::parse(trim_handling)?;
        AdiCvConfig::new(adi_threshold, cv2_threshold, parsed, policy)
    }

    /// ADI cutoff; boundary values classify to the "low" side.
    pub fn adi_threshold(&self) -> f64 {
        self.adi_threshold
    }

    /// CV² cutoff; boundary values classify to the "low" side.
    pub fn cv2_threshold(&self) -> f64 {
        self.cv2_threshold
    }

    /// Output columns in emission order.
    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    /// Leading/trailing-zero policy for the ADI formula.
    pub fn trim_handling(&self) -> TrimHandling {
        self.trim_handling
    }
}

impl Default for AdiCvConfig {
    /// Named defaults: Syntetos–Boylan thresholds, all features in the
    /// order `[adi, cv2, class]`, and the `pool` policy.
    fn default() -> Self {
        AdiCvConfig {
            adi_threshold: AdiCvConfig::DEFAULT_ADI_THRESHOLD,
            cv2_threshold: AdiCvConfig::DEFAULT_CV2_THRESHOLD,
            features: Feature::DEFAULT_ORDER.to_vec(),
            trim_handling: TrimHandling::Pool,
        }
    }
}
