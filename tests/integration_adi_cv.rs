//! Integration tests for ADI-CV demand-pattern classification.
//!
//! Purpose
//! -------
//! - Validate the end-to-end classification pipeline: from raw demand
//!   series, through configuration and validation, to the (ADI, CV², class)
//!   outcome and the feature-filtered record.
//! - Exercise the worked Syntetos–Boylan scenarios and realistic
//!   configuration variants rather than toy edge cases only.
//!
//! Coverage
//! --------
//! - `demand::config`:
//!   - Typed and string-boundary construction, including rejection of
//!     unknown feature and trim-handling names.
//! - `demand::classifier::AdiCvClassifier`:
//!   - Worked scenarios with hand-computed ADI / CV² values and classes.
//!   - Quadrant coverage across all four classes under custom thresholds.
//!   - Feature subsetting and record ordering.
//!   - Trim-handling equivalence on series with non-zero endpoints.
//!   - Degenerate-series errors under every policy.
//!   - Idempotence of repeated calls.
//!
//! Exclusions
//! ----------
//! - Fine-grained validation of low-level helpers (non-zero location,
//!   per-policy ADI formulas, CV² arithmetic, boundary rules) — these are
//!   covered by unit tests in the `demand` submodules.
//! - Python bindings — those are expected to be tested at the Python level.

use approx::assert_relative_eq;
use intermittent_demand::demand::{
    AdiCvClassifier, AdiCvConfig, AdiCvError, DemandClass, Feature, FeatureValue, TrimHandling,
};

/// The worked example series [5, 0, 0, 3, 0, 4, 0, 0, 0, 2]: T = 10 with
/// demand events at indices 0, 3, 5, 9 (N = 4) and non-zero endpoints, so
/// every trim-handling policy is computable.
fn scenario_a_series() -> Vec<f64> {
    vec![5.0, 0.0, 0.0, 3.0, 0.0, 4.0, 0.0, 0.0, 0.0, 2.0]
}

/// Build a classifier from the defaults with a different trim policy.
fn classifier_with_policy(policy: TrimHandling) -> AdiCvClassifier {
    let config = AdiCvConfig::new(
        AdiCvConfig::DEFAULT_ADI_THRESHOLD,
        AdiCvConfig::DEFAULT_CV2_THRESHOLD,
        Feature::DEFAULT_ORDER.to_vec(),
        policy,
    )
    .expect("default-derived configuration should be valid");
    AdiCvClassifier::new(config)
}

#[test]
// Purpose
// -------
// Reproduce the worked sparse-demand scenario under default configuration:
// pool ADI = 10/4 = 2.5 (high), CV² = 1.25/12.25 (low, population σ over
// [5, 3, 4, 2]), class `intermittent`.
fn scenario_a_sparse_series_classifies_intermittent_under_defaults() {
    // Arrange
    let series = scenario_a_series();
    let classifier = AdiCvClassifier::default();

    // Act
    let outcome = classifier.classify(&series).expect("scenario A should classify");

    // Assert
    assert_relative_eq!(outcome.adi(), 2.5);
    assert_relative_eq!(outcome.cv2(), 1.25 / 12.25, max_relative = 1e-12);
    assert_eq!(outcome.class(), DemandClass::Intermittent);
}

#[test]
// Purpose
// -------
// Reproduce the worked dense-demand scenario: [1, 1, 1, 1, 1] has
// pool ADI = 5/5 = 1.0 (low) and CV² = 0 (σ = 0, low), class `smooth`.
fn scenario_b_constant_series_classifies_smooth_under_defaults() {
    // Arrange
    let series = vec![1.0_f64; 5];
    let classifier = AdiCvClassifier::default();

    // Act
    let outcome = classifier.classify(&series).expect("scenario B should classify");

    // Assert
    assert_relative_eq!(outcome.adi(), 1.0);
    assert_relative_eq!(outcome.cv2(), 0.0);
    assert_eq!(outcome.class(), DemandClass::Smooth);
}

#[test]
// Purpose
// -------
// Produce every one of the four class labels by steering the thresholds
// around scenario A's (ADI, CV²) = (2.5, ≈0.102) point, confirming the two
// axes partition into exactly four reachable quadrants.
fn all_four_classes_are_reachable_by_moving_thresholds() {
    // Arrange
    let series = scenario_a_series();
    let cases = [
        // (adi_threshold, cv2_threshold, expected class)
        (3.0, 0.49, DemandClass::Smooth),       // ADI low, CV² low
        (3.0, 0.05, DemandClass::Erratic),      // ADI low, CV² high
        (1.32, 0.49, DemandClass::Intermittent), // ADI high, CV² low
        (1.32, 0.05, DemandClass::Lumpy),       // ADI high, CV² high
    ];

    for (adi_threshold, cv2_threshold, expected) in cases {
        let config = AdiCvConfig::new(
            adi_threshold,
            cv2_threshold,
            vec![Feature::Class],
            TrimHandling::Pool,
        )
        .expect("configuration should be valid");

        // Act
        let outcome = AdiCvClassifier::new(config)
            .classify(&series)
            .expect("series should classify under every threshold pair");

        // Assert
        assert_eq!(
            outcome.class(),
            expected,
            "thresholds ({adi_threshold}, {cv2_threshold}) should yield {expected:?}"
        );
    }
}

#[test]
// Purpose
// -------
// Verify feature subsetting: for configured subsets of {adi, cv2, class},
// the record contains exactly those fields, in the order given.
fn transform_emits_exactly_the_configured_features_in_order() {
    // Arrange
    let series = scenario_a_series();
    let subsets: Vec<Vec<Feature>> = vec![
        vec![Feature::Adi],
        vec![Feature::Cv2],
        vec![Feature::Class],
        vec![Feature::Class, Feature::Adi],
        vec![Feature::Cv2, Feature::Class, Feature::Adi],
    ];

    for features in subsets {
        let config = AdiCvConfig::new(1.32, 0.49, features.clone(), TrimHandling::Pool)
            .expect("configuration should be valid");

        // Act
        let record = AdiCvClassifier::new(config)
            .transform(&series)
            .expect("series should transform");

        // Assert
        let emitted: Vec<Feature> = record.iter().map(FeatureValue::feature).collect();
        assert_eq!(emitted, features, "record fields should mirror the configured order");
    }
}

#[test]
// Purpose
// -------
// Verify the record's column values agree with the classify outcome for the
// default configuration.
fn transform_record_values_match_classify_outcome() {
    // Arrange
    let series = scenario_a_series();
    let classifier = AdiCvClassifier::default();
    let outcome = classifier.classify(&series).expect("series should classify");

    // Act
    let record = classifier.transform(&series).expect("series should transform");

    // Assert
    assert_eq!(record.len(), 3);
    match record[0] {
        FeatureValue::Adi(v) => assert_relative_eq!(v, outcome.adi()),
        other => panic!("expected adi column first, got {other:?}"),
    }
    match record[1] {
        FeatureValue::Cv2(v) => assert_relative_eq!(v, outcome.cv2()),
        other => panic!("expected cv2 column second, got {other:?}"),
    }
    match record[2] {
        FeatureValue::Class(c) => assert_eq!(c, outcome.class()),
        other => panic!("expected class column third, got {other:?}"),
    }
}

#[test]
// Purpose
// -------
// Verify trim-handling behavior on a series with non-zero first and last
// positions: all three policies must be computable, and on a series with no
// interior zeros `pool` must match the direct formula T/N.
fn trim_handling_policies_all_computable_with_nonzero_endpoints() {
    // Arrange: non-zero endpoints, interior zeros.
    let series = scenario_a_series();

    // Act & Assert: every policy classifies without error.
    for policy in [TrimHandling::Pool, TrimHandling::Trim, TrimHandling::Ignore] {
        let outcome = classifier_with_policy(policy).classify(&series);
        assert!(outcome.is_ok(), "policy {policy:?} should be computable, got {outcome:?}");
    }

    // Arrange: dense series, no zeros at all, so T = N.
    let dense = vec![4.0_f64, 2.0, 6.0, 3.0];

    // Act
    let outcome = classifier_with_policy(TrimHandling::Pool)
        .classify(&dense)
        .expect("dense series should classify under pool");

    // Assert: pool ADI equals T/N = 1 for a fully dense series.
    assert_relative_eq!(outcome.adi(), dense.len() as f64 / dense.len() as f64);
}

#[test]
// Purpose
// -------
// Verify that an all-zero series of any length is rejected as degenerate
// under every trim-handling policy.
fn all_zero_series_raises_degenerate_error_under_every_policy() {
    for len in [1_usize, 4, 16] {
        let series = vec![0.0_f64; len];

        for policy in [TrimHandling::Pool, TrimHandling::Trim, TrimHandling::Ignore] {
            // Act
            let result = classifier_with_policy(policy).classify(&series);

            // Assert
            match result {
                Err(err) => {
                    assert!(
                        err.is_degenerate_series(),
                        "expected a degenerate-series error for len {len} under {policy:?}, \
                         got {err:?}"
                    );
                    assert_eq!(err, AdiCvError::AllZeroSeries { len });
                }
                Ok(outcome) => panic!(
                    "all-zero series of length {len} should not classify under {policy:?}, \
                     got {outcome:?}"
                ),
            }
        }
    }
}

#[test]
// Purpose
// -------
// Verify that a series with exactly one demand event classifies under
// `pool` but is rejected as degenerate under `trim` and `ignore`.
fn single_demand_event_rejected_under_trim_and_ignore_policies() {
    // Arrange
    let series = vec![0.0_f64, 0.0, 7.0, 0.0];

    // Act & Assert: pool is fine (ADI = 4/1, CV² = 0 → intermittent).
    let outcome = classifier_with_policy(TrimHandling::Pool)
        .classify(&series)
        .expect("single event should classify under pool");
    assert_relative_eq!(outcome.adi(), 4.0);
    assert_eq!(outcome.class(), DemandClass::Intermittent);

    // Act & Assert: trim and ignore surface the zero denominator.
    for policy in [TrimHandling::Trim, TrimHandling::Ignore] {
        match classifier_with_policy(policy).classify(&series) {
            Err(AdiCvError::SingleDemandEvent { policy: reported }) => {
                assert_eq!(reported, policy);
            }
            other => panic!("expected SingleDemandEvent under {policy:?}, got {other:?}"),
        }
    }
}

#[test]
// Purpose
// -------
// Verify that invalid configuration fails at construction, never at
// classify time: a bogus feature name and a bogus trim-handling name both
// produce configuration errors.
fn invalid_configuration_fails_eagerly_at_construction() {
    // Act & Assert: bogus feature name.
    match AdiCvConfig::from_named(&["adi", "bogus"], "pool", 1.32, 0.49) {
        Err(err) => {
            assert!(err.is_configuration(), "expected a configuration error, got {err:?}");
            assert_eq!(err, AdiCvError::UnknownFeature { name: "bogus".to_string() });
        }
        Ok(config) => panic!("bogus feature name should not validate, got {config:?}"),
    }

    // Act & Assert: bogus trim-handling name.
    match AdiCvConfig::from_named(&["adi", "cv2", "class"], "average", 1.32, 0.49) {
        Err(err) => {
            assert!(err.is_configuration(), "expected a configuration error, got {err:?}");
            assert_eq!(err, AdiCvError::UnknownTrimHandling { name: "average".to_string() });
        }
        Ok(config) => panic!("bogus trim handling should not validate, got {config:?}"),
    }
}

#[test]
// Purpose
// -------
// Verify idempotence: calling classify twice on the same series with the
// same configuration yields bit-identical results.
fn repeated_classification_yields_bit_identical_results() {
    // Arrange
    let series = scenario_a_series();
    let classifier = classifier_with_policy(TrimHandling::Ignore);

    // Act
    let first = classifier.classify(&series).expect("series should classify");
    let second = classifier.classify(&series).expect("series should classify");

    // Assert: exact bit equality, not approximate.
    assert_eq!(first.adi().to_bits(), second.adi().to_bits());
    assert_eq!(first.cv2().to_bits(), second.cv2().to_bits());
    assert_eq!(first.class(), second.class());
}

#[test]
// Purpose
// -------
// Verify that invalid input series are rejected with input-validation
// errors before any statistics are computed.
fn invalid_series_inputs_are_rejected_before_computation() {
    // Arrange
    let classifier = AdiCvClassifier::default();

    // Act & Assert: empty series.
    match classifier.classify(&[]) {
        Err(err) => assert!(err.is_invalid_input(), "expected invalid input, got {err:?}"),
        Ok(outcome) => panic!("empty series should not classify, got {outcome:?}"),
    }

    // Act & Assert: NaN observation with its index reported.
    match classifier.classify(&[2.0, f64::NAN, 3.0]) {
        Err(AdiCvError::NonFiniteValue { index, .. }) => assert_eq!(index, 1),
        other => panic!("expected NonFiniteValue at index 1, got {other:?}"),
    }
}
