use demand_insight::{DateSeries, SyntheticEstimator};
use rstest::rstest;

const TOLERANCE: f64 = 1e-9;

fn single_value_series(value: f64) -> DateSeries {
    DateSeries::new(vec!["2024-01-01".to_string()], vec![value]).unwrap()
}

#[rstest]
#[case(5.0)]
#[case(0.0)]
#[case(-3.0)]
#[case(123.456)]
#[case(1e6)]
fn synthetic_series_scale_actual(#[case] actual: f64) {
    let bundle = SyntheticEstimator::derive(&single_value_series(actual)).unwrap();

    assert!((bundle.predicted.values()[0] - 1.10 * actual).abs() < TOLERANCE);
    assert!((bundle.train_error.values()[0] - 0.05 * actual).abs() < TOLERANCE);
    assert!((bundle.test_error.values()[0] - (-0.10 * actual)).abs() < TOLERANCE);
}

#[test]
fn test_derive_matches_reference_scenario() {
    // Rows (A, 2024-01-01, 3), (A, 2024-01-01, 2), (A, 2024-01-02, 5)
    // aggregate to 5 per date; expected derived values follow.
    let actual = DateSeries::new(
        vec!["2024-01-01".to_string(), "2024-01-02".to_string()],
        vec![5.0, 5.0],
    )
    .unwrap();

    let bundle = SyntheticEstimator::derive(&actual).unwrap();

    for &predicted in bundle.predicted.values() {
        assert!((predicted - 5.5).abs() < TOLERANCE);
    }
    for &test_error in bundle.test_error.values() {
        assert!((test_error - (-0.5)).abs() < TOLERANCE);
    }
    for &train_error in bundle.train_error.values() {
        assert!((train_error - 0.25).abs() < TOLERANCE);
    }
}

#[test]
fn test_derived_series_share_key_set() {
    let actual = DateSeries::new(
        vec![
            "2024-01-01".to_string(),
            "2024-01-03".to_string(),
            "2024-02-01".to_string(),
        ],
        vec![1.0, 2.0, 3.0],
    )
    .unwrap();

    let bundle = SyntheticEstimator::derive(&actual).unwrap();

    assert_eq!(bundle.predicted.dates(), actual.dates());
    assert_eq!(bundle.train_error.dates(), actual.dates());
    assert_eq!(bundle.test_error.dates(), actual.dates());
    assert_eq!(bundle.len(), 3);
}

#[test]
fn test_derive_empty_series() {
    let bundle = SyntheticEstimator::derive(&DateSeries::empty()).unwrap();

    assert!(bundle.is_empty());
    assert!(bundle.predicted.is_empty());
    assert!(bundle.train_error.is_empty());
    assert!(bundle.test_error.is_empty());
}

#[test]
fn test_derive_is_deterministic() {
    let actual = DateSeries::new(
        vec!["2024-01-01".to_string(), "2024-01-02".to_string()],
        vec![17.0, -4.0],
    )
    .unwrap();

    let first = SyntheticEstimator::derive(&actual).unwrap();
    let second = SyntheticEstimator::derive(&actual).unwrap();
    assert_eq!(first, second);
}
