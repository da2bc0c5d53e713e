use boxmatch_core::error::BoxMatchError;
use boxmatch_core::estimate::{box_range, estimate_box_size, BoxRange};

mod common;
use common::assert_even;

#[test]
fn test_range_example_150a_at_1a() {
    // 1.5 * 150 = 225 -> 226, 2 * 150 = 300
    let range = box_range(1.0, 150.0).unwrap();
    assert_eq!(range, BoxRange { low: 226, high: 300 });
}

#[test]
fn test_estimate_lists_fft_sizes_in_range() {
    let est = estimate_box_size(1.0, 150.0).unwrap();
    assert_eq!(est.fft_sizes, vec![240, 256, 260, 288, 300]);
    assert!(est.fft_sizes.iter().all(|&s| est.range.contains(s)));
}

#[test]
fn test_high_odd_is_dropped() {
    // 2 * 101 / 1.0 = 202 (even), 1.5 * 101 = 151.5 -> 152 (ties to even)
    let range = box_range(1.0, 101.0).unwrap();
    assert_eq!(range.low, 152);
    assert_eq!(range.high, 202);

    // 2 * 150 / 1.98 = 151.5 -> 152, 1.5 * 150 / 1.98 = 113.6 -> 114
    let range = box_range(1.98, 150.0).unwrap();
    assert_eq!(range, BoxRange { low: 114, high: 152 });

    // 2 * 151 / 2.0 = 151 -> 150
    let range = box_range(2.0, 151.0).unwrap();
    assert_eq!(range.high, 150);
}

#[test]
fn test_rounding_ties_to_even() {
    // 1.5 * 449 / 3 = 224.5 rounds to 224, not 225 -> 226
    let range = box_range(3.0, 449.0).unwrap();
    assert_eq!(range.low, 224);
}

#[test]
fn test_range_ends_always_even() {
    for &(pixel, diameter) in &[(0.83, 180.0), (1.06, 95.0), (1.31, 333.0), (0.5, 77.0)] {
        let range = box_range(pixel, diameter).unwrap();
        assert_even(range.low);
        assert_even(range.high);
    }
}

#[test]
fn test_tiny_particle_gives_empty_range() {
    // 1.5 * 4 / 10 = 0.6 -> 1 -> 2; 2 * 4 / 10 = 0.8 -> 1 -> 0
    let est = estimate_box_size(10.0, 4.0).unwrap();
    assert!(est.range.is_empty());
    assert!(est.fft_sizes.is_empty());
}

#[test]
fn test_range_without_fft_sizes_reports_neighbors() {
    // 1.5 * 30 / 1.0 = 45 -> 46, 2 * 30 = 60: 48, 52, 56, 60 inside
    let est = estimate_box_size(1.0, 30.0).unwrap();
    assert_eq!(est.fft_sizes, vec![48, 52, 56, 60]);

    let range = BoxRange { low: 66, high: 70 };
    assert!(range.fft_sizes().is_empty());
    assert_eq!(range.fft_neighbors(), (Some(64), Some(72)));
}

#[test]
fn test_rejects_non_positive_inputs() {
    assert_eq!(
        box_range(0.0, 150.0),
        Err(BoxMatchError::InvalidPixelSize(0.0))
    );
    assert_eq!(
        box_range(1.0, -5.0),
        Err(BoxMatchError::InvalidDiameter(-5.0))
    );
    assert!(box_range(f64::NAN, 150.0).is_err());
}

#[test]
fn test_rejects_unrepresentable_range() {
    let err = box_range(1e-6, 1e4).unwrap_err();
    assert!(matches!(err, BoxMatchError::BoxTooLarge { .. }), "got: {err}");
    assert!(estimate_box_size(1e-300, 1e300).is_err());
}

#[test]
fn test_range_display() {
    let range = BoxRange { low: 226, high: 300 };
    assert_eq!(format!("{range}"), "226-300 px");
}
