use std::collections::HashSet;

use approx::assert_abs_diff_eq;
use boxmatch_core::consts::MAX_BOX_SIZE;
use boxmatch_core::reconcile::{
    candidate_pool, pair_candidates, pool_size, rank_candidates, reconcile, Priority,
};

mod common;
use common::{assert_even, krios_vs_glacios, params};

// ---------------------------------------------------------------------------
// Candidate pool
// ---------------------------------------------------------------------------

#[test]
fn test_pool_includes_even_endpoints() {
    assert_eq!(candidate_pool(256.0, 4.0), vec![252, 254, 256, 258, 260]);
}

#[test]
fn test_pool_truncates_fractional_bounds() {
    // [251.8, 259.2] -> 251..=259
    assert_eq!(candidate_pool(255.5, 3.7), vec![252, 254, 256, 258]);
}

#[test]
fn test_pool_skips_non_positive_sizes() {
    assert_eq!(candidate_pool(3.0, 2.0), vec![2, 4]);
    assert!(candidate_pool(1.0, 2.0).iter().all(|&n| n >= 2));
}

#[test]
fn test_pool_sizes_even() {
    for size in candidate_pool(301.0, 17.0) {
        assert_even(size);
    }
}

#[test]
fn test_pool_stops_at_max_box_size() {
    let max = MAX_BOX_SIZE as f64;
    assert_eq!(candidate_pool(max, 2.0), vec![MAX_BOX_SIZE - 2, MAX_BOX_SIZE]);
    assert!(candidate_pool(5e9, 2.0).is_empty());
}

#[test]
fn test_pool_size_matches_pool() {
    for (aim, tol) in [(256.0, 4.0), (255.5, 3.7), (3.0, 2.0), (1.0, 2.0), (301.0, 17.0)] {
        assert_eq!(pool_size(aim, tol), candidate_pool(aim, tol).len(), "{aim} +- {tol}");
    }
    assert_eq!(pool_size(5e9, 2.0), 0);
    assert_eq!(pool_size(1e9, 1e9), 1_000_000_000);
}

// ---------------------------------------------------------------------------
// Pairing and ranking
// ---------------------------------------------------------------------------

#[test]
fn test_pairing_preserves_field_of_view() {
    let pool = candidate_pool(320.0, 10.0);
    let pairs = pair_candidates(&pool, 1.06, 0.83);
    assert_eq!(pairs.len(), pool.len());
    for (c, &n) in pairs.iter().zip(&pool) {
        assert_eq!(c.pix2_box, n);
        assert_even(c.pix1_box);
        assert_abs_diff_eq!(c.unrounded * 1.06, n as f64 * 0.83, epsilon = 1e-9);
        assert!(c.abs_deviation() <= 1.5, "deviation {} too large", c.deviation);
    }
}

#[test]
fn test_ranking_best_match_first() {
    let pool = candidate_pool(320.0, 10.0);
    let ranked = rank_candidates(pair_candidates(&pool, 1.06, 0.83), 320.0);
    assert!(ranked
        .windows(2)
        .all(|w| w[0].abs_deviation() <= w[1].abs_deviation()));
    assert_eq!(ranked[0].pix2_box, 322);
    assert_eq!(ranked[0].pix1_box, 252);
}

#[test]
fn test_ranking_equal_deviation_prefers_aim() {
    let pool = candidate_pool(256.0, 4.0);
    let ranked = rank_candidates(pair_candidates(&pool, 1.0, 1.0), 256.0);
    let order: Vec<u32> = ranked.iter().map(|c| c.pix2_box).collect();
    assert_eq!(order, vec![256, 254, 258, 252, 260]);
}

// ---------------------------------------------------------------------------
// Exact target mode
// ---------------------------------------------------------------------------

#[test]
fn test_identical_pixel_sizes_no_rescale() {
    let p = params(1.0, 1.0, 1.0, 256.0, 4.0, 1, Priority::ExactTarget);
    let report = reconcile(&p);
    assert_eq!(report.pool_size, 5);
    assert_eq!(report.recommendations.len(), 1);

    let rec = report.recommendations[0];
    assert_eq!(rec.pix1.extract_box, 256);
    assert_eq!(rec.pix2.extract_box, 256);
    assert_eq!(rec.pix2.final_box, 256);
    assert_abs_diff_eq!(rec.pix1.pixel_size, 1.0);
    assert_abs_diff_eq!(rec.pix2.pixel_size, 1.0);
    assert!(!rec.pix1.is_rescaled());
}

#[test]
fn test_exact_target_at_pix1_resamples_pix2_only() {
    let report = reconcile(&krios_vs_glacios(1.06, 5, Priority::ExactTarget));
    let boxes: Vec<(u32, u32)> = report
        .recommendations
        .iter()
        .map(|r| (r.pix1.extract_box, r.pix2.extract_box))
        .collect();
    assert_eq!(
        boxes,
        vec![(252, 322), (246, 314), (244, 312), (254, 324), (258, 330)]
    );

    let best = report.recommendations[0];
    assert_abs_diff_eq!(best.pix1.pixel_size, 1.06);
    assert_eq!(best.pix2.final_box, 252);
    assert_abs_diff_eq!(best.pix2.pixel_size, 1.0605555555555555, epsilon = 1e-12);
    assert_abs_diff_eq!(best.deviation, -0.132075471698073, epsilon = 1e-9);
    for rec in &report.recommendations {
        assert_eq!(rec.pix1.final_box, rec.pix1.extract_box);
        assert_eq!(rec.pix2.final_box, rec.pix1.extract_box);
    }
}

#[test]
fn test_exact_target_above_pix1_snaps_to_fft() {
    let report = reconcile(&krios_vs_glacios(1.3, 3, Priority::ExactTarget));
    let finals: Vec<u32> = report
        .recommendations
        .iter()
        .map(|r| r.pix1.final_box)
        .collect();
    assert_eq!(finals, vec![208, 196, 196]);

    let best = report.recommendations[0];
    assert_abs_diff_eq!(best.pix1.pixel_size, 1.2842307692307693, epsilon = 1e-12);
    assert_abs_diff_eq!(best.pix2.pixel_size, 1.284903846153846, epsilon = 1e-12);
}

// ---------------------------------------------------------------------------
// FFT priority mode
// ---------------------------------------------------------------------------

#[test]
fn test_fft_priority_snaps_both_datasets() {
    let report = reconcile(&krios_vs_glacios(1.2, 5, Priority::FftEfficiency));
    assert_eq!(report.recommendations.len(), 5);

    let summary: Vec<(u32, u32, u32)> = report
        .recommendations
        .iter()
        .map(|r| (r.pix1.extract_box, r.pix2.extract_box, r.pix1.final_box))
        .collect();
    assert_eq!(
        summary,
        vec![
            (252, 322, 224),
            (246, 314, 216),
            (244, 312, 216),
            (254, 324, 224),
            (258, 330, 224),
        ]
    );

    for rec in &report.recommendations {
        assert_eq!(rec.pix1.final_box, rec.pix2.final_box);
        assert!(boxmatch_core::fft::is_fft_efficient(rec.pix1.final_box));
        assert_abs_diff_eq!(
            rec.pix1.field_of_view(),
            rec.pix1.extract_box as f64 * 1.06,
            epsilon = 1e-9
        );
    }
    assert_abs_diff_eq!(
        report.recommendations[0].pix1.pixel_size,
        1.1925,
        epsilon = 1e-12
    );
    assert_abs_diff_eq!(
        report.recommendations[0].pix2.pixel_size,
        1.193125,
        epsilon = 1e-12
    );
}

#[test]
fn test_fft_priority_results_are_unique() {
    let p = params(1.1, 0.9, 1.5, 200.0, 40.0, 20, Priority::FftEfficiency);
    let report = reconcile(&p);
    let keys: HashSet<(u32, u32, u64)> = report
        .recommendations
        .iter()
        .map(|r| (r.pix1.extract_box, r.pix1.final_box, r.pix2.pixel_size.to_bits()))
        .collect();
    assert_eq!(keys.len(), report.recommendations.len());
    assert!(report.recommendations.len() <= 20);
}

// ---------------------------------------------------------------------------
// Invariants
// ---------------------------------------------------------------------------

#[test]
fn test_pixel_sizes_reordered() {
    let p = params(1.0, 1.2, 1.2, 256.0, 6.0, 2, Priority::ExactTarget);
    assert_abs_diff_eq!(p.pix1, 1.2);
    assert_abs_diff_eq!(p.pix2, 1.0);

    let swapped = params(1.2, 1.0, 1.2, 256.0, 6.0, 2, Priority::ExactTarget);
    assert_eq!(reconcile(&p), reconcile(&swapped));
}

#[test]
fn test_all_boxes_even() {
    for priority in [Priority::FftEfficiency, Priority::ExactTarget] {
        for target in [1.06, 1.4] {
            let report = reconcile(&krios_vs_glacios(target, 8, priority));
            for rec in &report.recommendations {
                assert_even(rec.pix1.extract_box);
                assert_even(rec.pix1.final_box);
                assert_even(rec.pix2.extract_box);
                assert_even(rec.pix2.final_box);
            }
        }
    }
}

#[test]
fn test_boxes_near_max_stay_even_and_distinct() {
    let aim = (MAX_BOX_SIZE - 2) as f64;
    let report = reconcile(&params(1.0, 1.0, 1.0, aim, 2.0, 3, Priority::ExactTarget));
    assert_eq!(report.recommendations.len(), 3);

    let mut seen = HashSet::new();
    for rec in &report.recommendations {
        assert_even(rec.pix1.extract_box);
        assert_even(rec.pix2.extract_box);
        assert!(seen.insert(rec.pix2.extract_box));
    }
}

#[test]
fn test_reconcile_is_deterministic() {
    let p = krios_vs_glacios(1.2, 6, Priority::FftEfficiency);
    assert_eq!(reconcile(&p), reconcile(&p));
}

#[test]
fn test_report_keeps_params() {
    let p = krios_vs_glacios(1.06, 2, Priority::ExactTarget);
    let report = reconcile(&p);
    assert_eq!(report.params, p);
    assert_eq!(report.pool_size, 11);
}
