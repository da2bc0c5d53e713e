//! Per-field checks for reconciler inputs.
//!
//! Each check returns the accepted value so interactive callers can loop on
//! the error and re-ask for the same field.

use crate::consts::{MAX_BOX_SIZE, MIN_BOX_TOLERANCE};
use crate::error::{BoxMatchError, Result};

use super::candidates::pool_size;

pub fn pixel_size(value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(BoxMatchError::InvalidPixelSize(value))
    }
}

/// The target may only coarsen the sampling, never refine it past pix1.
pub fn target_pixel_size(target: f64, pix1: f64) -> Result<f64> {
    let target = pixel_size(target)?;
    if target < pix1 {
        return Err(BoxMatchError::TargetBelowLargest { target, pix1 });
    }
    Ok(target)
}

fn within_max_box(size: f64) -> Result<()> {
    if size > MAX_BOX_SIZE as f64 {
        return Err(BoxMatchError::BoxTooLarge {
            size,
            maximum: MAX_BOX_SIZE,
        });
    }
    Ok(())
}

pub fn box_aim(value: f64) -> Result<f64> {
    if !(value.is_finite() && value > 0.0) {
        return Err(BoxMatchError::InvalidBoxAim(value));
    }
    within_max_box(value)?;
    Ok(value)
}

/// At least `MIN_BOX_TOLERANCE`, and `box_aim + tolerance` must stay a
/// representable box size.
pub fn tolerance(value: f64, box_aim: f64) -> Result<f64> {
    if !(value.is_finite() && value >= MIN_BOX_TOLERANCE) {
        return Err(BoxMatchError::ToleranceTooNarrow {
            tolerance: value,
            minimum: MIN_BOX_TOLERANCE,
        });
    }
    within_max_box((box_aim + value).trunc())?;
    Ok(value)
}

/// `num_results` must fit in the candidate pool spanned by `box_aim +- tolerance`.
pub fn result_count(num_results: usize, box_aim: f64, tolerance: f64) -> Result<usize> {
    if num_results == 0 {
        return Err(BoxMatchError::NoResultsRequested);
    }
    let available = pool_size(box_aim, tolerance);
    if available < num_results {
        return Err(BoxMatchError::NotEnoughCandidates {
            requested: num_results,
            available,
        });
    }
    Ok(num_results)
}
