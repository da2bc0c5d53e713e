pub mod consts;
pub mod error;
pub mod estimate;
pub mod fft;
pub mod reconcile;
pub mod units;
