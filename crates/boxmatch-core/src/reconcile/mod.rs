//! Matching box sizes between two datasets collected at different pixel sizes.
//!
//! Candidates are even box sizes for the smaller-pixel dataset (pix2) around
//! the preferred size. Each gets the even pix1 box that covers the same
//! physical field of view, the pairs are ranked by how closely that box fits,
//! and the best pairs are rescaled to the target pixel size.

pub mod candidates;
pub mod config;
mod select;
pub mod types;
pub mod validate;

pub use candidates::{candidate_pool, pair_candidates, pool_size, rank_candidates, BoxCandidate};
pub use config::{Priority, ReconcileConfig, ReconcileParams};
pub use select::reconcile;
pub use types::{DatasetBox, ReconcileReport, Recommendation};
