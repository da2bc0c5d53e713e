use std::collections::HashSet;

use tracing::{debug, info};

use crate::fft::nearest_fft_size;
use crate::units::{rescaled_pixel_size, round_half_even};

use super::candidates::{pair_candidates, rank_candidates, BoxCandidate};
use super::config::{Priority, ReconcileParams};
use super::types::{DatasetBox, ReconcileReport, Recommendation};

/// Run the reconciler over validated parameters.
///
/// Deterministic: identical parameters always give the same ordered report.
pub fn reconcile(params: &ReconcileParams) -> ReconcileReport {
    let pool = params.candidate_pool();
    let ranked = rank_candidates(
        pair_candidates(&pool, params.pix1, params.pix2),
        params.box_aim,
    );
    debug!(
        pool = pool.len(),
        best_deviation = ?ranked.first().map(|c| c.deviation),
        "Ranked box candidates"
    );

    let recommendations = match params.priority {
        Priority::FftEfficiency => select_fft_efficient(&ranked, params),
        Priority::ExactTarget => select_exact_target(&ranked, params),
    };

    info!(
        priority = %params.priority,
        requested = params.num_results,
        found = recommendations.len(),
        "Box size reconciliation complete"
    );

    ReconcileReport {
        pool_size: pool.len(),
        params: params.clone(),
        recommendations,
    }
}

/// Identity of a snapped result. Pixel sizes compare bitwise.
#[derive(Hash, PartialEq, Eq)]
struct SnapKey {
    pix1_box: u32,
    snapped_box: u32,
    target_bits: u64,
    pix2_pixel_bits: u64,
}

impl SnapKey {
    fn new(rec: &Recommendation, target_pixel_size: f64) -> Self {
        Self {
            pix1_box: rec.pix1.extract_box,
            snapped_box: rec.pix1.final_box,
            target_bits: target_pixel_size.to_bits(),
            pix2_pixel_bits: rec.pix2.pixel_size.to_bits(),
        }
    }
}

/// Walk the whole ranking, keeping the first `num_results` unique snapped
/// results. Stops early once enough are found, or returns fewer when the
/// ranking runs out.
///
/// Every candidate carries its own pix2 box, so a pool of distinct sizes never
/// repeats a key; only a ranking holding the same candidate twice is trimmed.
fn select_fft_efficient(ranked: &[BoxCandidate], params: &ReconcileParams) -> Vec<Recommendation> {
    let mut seen = HashSet::new();
    let mut results = Vec::with_capacity(params.num_results);

    for candidate in ranked {
        if results.len() == params.num_results {
            break;
        }
        let rec = snap_to_fft(candidate, params);
        if seen.insert(SnapKey::new(&rec, params.target_pixel_size)) {
            results.push(rec);
        } else {
            debug!(
                pix1_box = rec.pix1.extract_box,
                snapped_box = rec.pix1.final_box,
                "Skipping duplicate snapped result"
            );
        }
    }
    results
}

/// Take the best `num_results` candidates as they are. Rescaling only
/// happens when the target differs from pix1.
fn select_exact_target(ranked: &[BoxCandidate], params: &ReconcileParams) -> Vec<Recommendation> {
    ranked
        .iter()
        .take(params.num_results)
        .map(|c| {
            if params.needs_rescale() {
                snap_to_fft(c, params)
            } else {
                match_at_pix1(c, params)
            }
        })
        .collect()
}

/// Rescale the pix1 box towards the target pixel size, snap it to the FFT
/// table and resample both datasets to the snapped size.
fn snap_to_fft(candidate: &BoxCandidate, params: &ReconcileParams) -> Recommendation {
    let rescaled = round_half_even(
        candidate.pix1_box as f64 * params.pix1 / params.target_pixel_size,
    );
    let snapped = nearest_fft_size(rescaled);

    Recommendation {
        pix1: DatasetBox {
            extract_box: candidate.pix1_box,
            final_box: snapped,
            pixel_size: rescaled_pixel_size(params.pix1, candidate.pix1_box, snapped),
        },
        pix2: DatasetBox {
            extract_box: candidate.pix2_box,
            final_box: snapped,
            pixel_size: rescaled_pixel_size(params.pix2, candidate.pix2_box, snapped),
        },
        deviation: candidate.deviation,
    }
}

/// Keep pix1 as extracted; resample pix2 to the pix1 box size.
fn match_at_pix1(candidate: &BoxCandidate, params: &ReconcileParams) -> Recommendation {
    Recommendation {
        pix1: DatasetBox {
            extract_box: candidate.pix1_box,
            final_box: candidate.pix1_box,
            pixel_size: params.pix1,
        },
        pix2: DatasetBox {
            extract_box: candidate.pix2_box,
            final_box: candidate.pix1_box,
            pixel_size: rescaled_pixel_size(params.pix2, candidate.pix2_box, candidate.pix1_box),
        },
        deviation: candidate.deviation,
    }
}
