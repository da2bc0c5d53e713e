//! Rounding and ordering helpers shared by both calculators.

use crate::consts::MAX_BOX_SIZE;

/// Round to the nearest integer, ties to even (`2.5 -> 2`, `3.5 -> 4`).
pub fn round_half_even(value: f64) -> i64 {
    value.round_ties_even() as i64
}

/// Bump an odd size up to the next even one.
pub fn even_up(size: i64) -> i64 {
    if size % 2 != 0 {
        size + 1
    } else {
        size
    }
}

/// Drop an odd size down to the previous even one.
pub fn even_down(size: i64) -> i64 {
    if size % 2 != 0 {
        size - 1
    } else {
        size
    }
}

/// Round `value` to `decimals` places for display.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round_ties_even() / scale
}

/// Order two calibrated pixel sizes as `(larger, smaller)`.
///
/// Every reconciler formula assumes `pix1 >= pix2`, so this runs before
/// anything else touches the pair.
pub fn order_pixel_sizes(a: f64, b: f64) -> (f64, f64) {
    if a < b {
        (b, a)
    } else {
        (a, b)
    }
}

/// Physical width (Angstrom) covered by a box of `box_size` pixels.
pub fn field_of_view(box_size: u32, pixel_size: f64) -> f64 {
    box_size as f64 * pixel_size
}

/// Pixel size a dataset ends up with when a box of `box_size` pixels at
/// `pixel_size` is resampled to `rescaled_box` pixels.
pub fn rescaled_pixel_size(pixel_size: f64, box_size: u32, rescaled_box: u32) -> f64 {
    field_of_view(box_size, pixel_size) / rescaled_box as f64
}

/// Clamp a signed size into `0..=MAX_BOX_SIZE`.
pub(crate) fn to_box_size(size: i64) -> u32 {
    size.clamp(0, MAX_BOX_SIZE as i64) as u32
}
