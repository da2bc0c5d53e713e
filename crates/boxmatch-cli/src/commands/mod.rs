pub mod config;
pub mod range;
pub mod reconcile;
