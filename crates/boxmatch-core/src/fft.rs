use crate::consts::FFT_EFFICIENT_SIZES;

/// The shared FFT-efficient size table, ascending.
pub fn fft_efficient_sizes() -> &'static [u32] {
    &FFT_EFFICIENT_SIZES
}

pub fn is_fft_efficient(size: u32) -> bool {
    FFT_EFFICIENT_SIZES.binary_search(&size).is_ok()
}

/// FFT-efficient sizes within `[low, high]`, inclusive. Empty when `low > high`.
pub fn sizes_in_range(low: u32, high: u32) -> Vec<u32> {
    if low > high {
        return Vec::new();
    }
    let start = FFT_EFFICIENT_SIZES.partition_point(|&s| s < low);
    let end = FFT_EFFICIENT_SIZES.partition_point(|&s| s <= high);
    FFT_EFFICIENT_SIZES[start..end].to_vec()
}

/// Table entry closest to `target`.
///
/// The scan runs in ascending order and only replaces the current best on a
/// strictly smaller distance, so an exact tie resolves to the smaller size.
pub fn nearest_fft_size(target: i64) -> u32 {
    let mut best = FFT_EFFICIENT_SIZES[0];
    let mut best_distance = (best as i64 - target).abs();
    for &size in &FFT_EFFICIENT_SIZES[1..] {
        let distance = (size as i64 - target).abs();
        if distance < best_distance {
            best = size;
            best_distance = distance;
        }
    }
    best
}

/// Largest table entry strictly below `size`.
pub fn largest_below(size: u32) -> Option<u32> {
    let idx = FFT_EFFICIENT_SIZES.partition_point(|&s| s < size);
    idx.checked_sub(1).map(|i| FFT_EFFICIENT_SIZES[i])
}

/// Smallest table entry strictly above `size`.
pub fn smallest_above(size: u32) -> Option<u32> {
    let idx = FFT_EFFICIENT_SIZES.partition_point(|&s| s <= size);
    FFT_EFFICIENT_SIZES.get(idx).copied()
}
