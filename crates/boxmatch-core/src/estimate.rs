use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::{MAX_BOX_DIAMETER_FACTOR, MAX_BOX_SIZE, MIN_BOX_DIAMETER_FACTOR};
use crate::error::{BoxMatchError, Result};
use crate::fft;
use crate::units::{even_down, even_up, round_half_even, to_box_size};

/// Inclusive range of suitable extraction box sizes, in pixels.
///
/// Both ends are even. For very small particles the even adjustments can push
/// `low` above `high`; such a range is empty rather than an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoxRange {
    pub low: u32,
    pub high: u32,
}

impl BoxRange {
    pub fn is_empty(&self) -> bool {
        self.low > self.high
    }

    pub fn contains(&self, size: u32) -> bool {
        self.low <= size && size <= self.high
    }

    /// FFT-efficient sizes lying inside the range.
    pub fn fft_sizes(&self) -> Vec<u32> {
        fft::sizes_in_range(self.low, self.high)
    }

    /// Closest FFT-efficient sizes just outside the range, below and above.
    pub fn fft_neighbors(&self) -> (Option<u32>, Option<u32>) {
        (fft::largest_below(self.low), fft::smallest_above(self.high))
    }
}

impl std::fmt::Display for BoxRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{} px", self.low, self.high)
    }
}

/// Box size suggestion for one particle at one pixel size.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoxEstimate {
    pub pixel_size: f64,
    pub particle_diameter: f64,
    pub range: BoxRange,
    pub fft_sizes: Vec<u32>,
}

/// Compute the `[1.5x, 2x]` particle-diameter box range in pixels.
///
/// `low` is rounded and bumped up to even, `high` rounded and dropped down to
/// even, so the range never extends past either factor by a whole pixel.
/// A range reaching past `MAX_BOX_SIZE` is rejected.
pub fn box_range(pixel_size: f64, particle_diameter: f64) -> Result<BoxRange> {
    if !(pixel_size.is_finite() && pixel_size > 0.0) {
        return Err(BoxMatchError::InvalidPixelSize(pixel_size));
    }
    if !(particle_diameter.is_finite() && particle_diameter > 0.0) {
        return Err(BoxMatchError::InvalidDiameter(particle_diameter));
    }

    let widest = particle_diameter * MAX_BOX_DIAMETER_FACTOR / pixel_size;
    if widest.round_ties_even() > MAX_BOX_SIZE as f64 {
        return Err(BoxMatchError::BoxTooLarge {
            size: widest,
            maximum: MAX_BOX_SIZE,
        });
    }

    let low = even_up(round_half_even(
        particle_diameter * MIN_BOX_DIAMETER_FACTOR / pixel_size,
    ));
    let high = even_down(round_half_even(widest));

    Ok(BoxRange {
        low: to_box_size(low),
        high: to_box_size(high),
    })
}

/// Box range plus the FFT-efficient sizes that fall inside it.
pub fn estimate_box_size(pixel_size: f64, particle_diameter: f64) -> Result<BoxEstimate> {
    let range = box_range(pixel_size, particle_diameter)?;
    let fft_sizes = range.fft_sizes();
    debug!(
        low = range.low,
        high = range.high,
        fft_count = fft_sizes.len(),
        "Estimated box range"
    );
    Ok(BoxEstimate {
        pixel_size,
        particle_diameter,
        range,
        fft_sizes,
    })
}
