use crate::tracking::DistanceExtremes;

#[test]
fn test_empty_tracker() {
    let extremes = DistanceExtremes::new();
    assert!(extremes.is_empty());
    assert_eq!(extremes.furthest(), None);
    assert_eq!(extremes.closest(), None);
}

#[test]
fn test_first_record_is_both_extremes() {
    let mut extremes = DistanceExtremes::new();
    extremes.record(0, 1.0);

    assert_eq!(extremes.furthest(), Some(0));
    assert_eq!(extremes.closest(), Some(0));
}

#[test]
fn test_strict_comparisons_keep_earlier_ties() {
    let mut extremes = DistanceExtremes::new();
    extremes.record(0, 1.0);
    extremes.record(1, 1.0);

    assert_eq!(extremes.furthest(), Some(0));
    assert_eq!(extremes.closest(), Some(0));
}

#[test]
fn test_updates_each_extreme_independently() {
    let mut extremes = DistanceExtremes::new();
    extremes.record(0, 1.0);
    extremes.record(1, 5.2);
    extremes.record(2, 0.39);
    extremes.record(3, 1.52);

    assert_eq!(extremes.furthest(), Some(1));
    assert_eq!(extremes.closest(), Some(2));
}

#[test]
fn test_negative_input_beats_tracked_zero() {
    let mut extremes = DistanceExtremes::new();
    extremes.record(0, 0.0);
    extremes.record(1, -1.0);

    assert_eq!(extremes.closest(), Some(1));
    assert_eq!(extremes.furthest(), Some(0));
}

#[test]
fn test_nan_input_never_replaces_an_extreme() {
    let mut extremes = DistanceExtremes::new();
    extremes.record(0, 0.5);
    extremes.record(1, f64::NAN);

    assert_eq!(extremes.closest(), Some(0));
    assert_eq!(extremes.furthest(), Some(0));
}
