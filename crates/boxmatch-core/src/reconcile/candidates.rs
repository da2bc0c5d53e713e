use serde::{Deserialize, Serialize};

use crate::consts::{MAX_BOX_SIZE, MIN_BOX_SIZE};
use crate::units::{even_down, even_up, round_half_even, to_box_size};

/// One pix2 box size paired with the pix1 box covering the same field of view.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoxCandidate {
    /// Even box size for the larger-pixel dataset.
    pub pix1_box: u32,
    /// Even box size for the smaller-pixel dataset.
    pub pix2_box: u32,
    /// Exact, non-integer pix1 box matching `pix2_box`.
    pub unrounded: f64,
    /// `pix1_box - unrounded`, in pixels.
    pub deviation: f64,
}

impl BoxCandidate {
    pub fn abs_deviation(&self) -> f64 {
        self.deviation.abs()
    }
}

/// Scan bounds of the pool: `[box_aim - tolerance, box_aim + tolerance]`
/// truncated toward zero and clipped to `MIN_BOX_SIZE..=MAX_BOX_SIZE`.
fn pool_bounds(box_aim: f64, tolerance: f64) -> (i64, i64) {
    let lower = (box_aim - tolerance).trunc() as i64;
    let upper = (box_aim + tolerance).trunc() as i64;
    (
        lower.max(MIN_BOX_SIZE as i64),
        upper.min(MAX_BOX_SIZE as i64),
    )
}

/// Every positive even box size in `[box_aim - tolerance, box_aim + tolerance]`.
///
/// Both bounds are truncated toward zero before the scan, so the endpoints
/// themselves are included whenever they are even. Sizes past `MAX_BOX_SIZE`
/// are left out.
pub fn candidate_pool(box_aim: f64, tolerance: f64) -> Vec<u32> {
    let (lower, upper) = pool_bounds(box_aim, tolerance);
    (lower..=upper)
        .filter(|n| n % 2 == 0)
        .map(to_box_size)
        .collect()
}

/// Length of `candidate_pool(box_aim, tolerance)`, without building it.
pub fn pool_size(box_aim: f64, tolerance: f64) -> usize {
    let (lower, upper) = pool_bounds(box_aim, tolerance);
    let (first, last) = (even_up(lower), even_down(upper));
    if first > last {
        return 0;
    }
    ((last - first) / 2 + 1) as usize
}

/// Pair each pix2 candidate with its even pix1 counterpart, index-aligned
/// with `pool`. Expects `pix1 >= pix2`.
pub fn pair_candidates(pool: &[u32], pix1: f64, pix2: f64) -> Vec<BoxCandidate> {
    pool.iter()
        .map(|&pix2_box| {
            let unrounded = pix2_box as f64 / pix1 * pix2;
            let pix1_box = to_box_size(even_up(round_half_even(unrounded))).max(MIN_BOX_SIZE);
            BoxCandidate {
                pix1_box,
                pix2_box,
                unrounded,
                deviation: pix1_box as f64 - unrounded,
            }
        })
        .collect()
}

/// Order candidates best match first.
///
/// Equal deviations prefer the pix2 box closest to `box_aim`; remaining ties
/// keep pool order (the sort is stable). Breaking ties on pool order alone
/// would rank 252 first for `pix1 = pix2 = 1.0` at `256 +- 4`, where every
/// candidate matches exactly and the aim itself is the expected answer.
pub fn rank_candidates(mut candidates: Vec<BoxCandidate>, box_aim: f64) -> Vec<BoxCandidate> {
    let aim_distance = |c: &BoxCandidate| (c.pix2_box as f64 - box_aim).abs();
    candidates.sort_by(|a, b| {
        a.abs_deviation()
            .total_cmp(&b.abs_deviation())
            .then_with(|| aim_distance(a).total_cmp(&aim_distance(b)))
    });
    candidates
}
