#![allow(dead_code)]

use boxmatch_core::reconcile::{Priority, ReconcileParams};

/// Build validated parameters, panicking on invalid input.
pub fn params(
    pix_a: f64,
    pix_b: f64,
    target: f64,
    box_aim: f64,
    tolerance: f64,
    num_results: usize,
    priority: Priority,
) -> ReconcileParams {
    ReconcileParams::new(pix_a, pix_b, target, box_aim, tolerance, num_results, priority)
        .expect("valid reconciler parameters")
}

/// Two datasets at 1.06 and 0.83 A/px, 320 px +- 10 aim.
pub fn krios_vs_glacios(target: f64, num_results: usize, priority: Priority) -> ReconcileParams {
    params(1.06, 0.83, target, 320.0, 10.0, num_results, priority)
}

pub fn assert_even(size: u32) {
    assert_eq!(size % 2, 0, "box size {size} is odd");
}
