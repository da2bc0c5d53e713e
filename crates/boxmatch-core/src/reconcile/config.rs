use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::units::order_pixel_sizes;

use super::candidates::candidate_pool;
use super::validate;

/// What to favour when the rescaled box cannot hit the target exactly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    /// Snap the rescaled box to an FFT-efficient size, letting the final
    /// pixel size drift from the target.
    #[default]
    FftEfficiency,
    /// Keep the target pixel size; only rescale when it differs from pix1.
    ExactTarget,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FftEfficiency => write!(f, "FFT efficiency"),
            Self::ExactTarget => write!(f, "Exact target pixel size"),
        }
    }
}

/// Reconciler inputs as read from a TOML file or command-line flags.
///
/// Every field is optional; whatever is missing gets asked for interactively.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ReconcileConfig {
    /// First calibrated pixel size (A/px).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pix1: Option<f64>,
    /// Second calibrated pixel size (A/px).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pix2: Option<f64>,
    /// Pixel size after rescaling; at least the larger calibrated size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_pixel_size: Option<f64>,
    /// Preferred box size (px) for the smaller pixel size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub box_aim: Option<f64>,
    /// Allowed deviation (px) around `box_aim`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tolerance: Option<f64>,
    /// Number of distinct recommendations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_results: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

impl ReconcileConfig {
    /// Example values, used for the `config` template.
    pub fn template() -> Self {
        Self {
            pix1: Some(1.06),
            pix2: Some(0.83),
            target_pixel_size: Some(1.06),
            box_aim: Some(320.0),
            tolerance: Some(10.0),
            num_results: Some(5),
            priority: Some(Priority::default()),
        }
    }

    /// Fill every field `self` leaves unset from `base`.
    pub fn or(self, base: ReconcileConfig) -> Self {
        Self {
            pix1: self.pix1.or(base.pix1),
            pix2: self.pix2.or(base.pix2),
            target_pixel_size: self.target_pixel_size.or(base.target_pixel_size),
            box_aim: self.box_aim.or(base.box_aim),
            tolerance: self.tolerance.or(base.tolerance),
            num_results: self.num_results.or(base.num_results),
            priority: self.priority.or(base.priority),
        }
    }
}

/// Validated reconciler parameters, with `pix1 >= pix2`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReconcileParams {
    pub pix1: f64,
    pub pix2: f64,
    pub target_pixel_size: f64,
    pub box_aim: f64,
    pub tolerance: f64,
    pub num_results: usize,
    pub priority: Priority,
}

impl ReconcileParams {
    /// Validate raw inputs. The two pixel sizes may come in either order.
    pub fn new(
        pixel_size_a: f64,
        pixel_size_b: f64,
        target_pixel_size: f64,
        box_aim: f64,
        tolerance: f64,
        num_results: usize,
        priority: Priority,
    ) -> Result<Self> {
        let (pix1, pix2) = order_pixel_sizes(
            validate::pixel_size(pixel_size_a)?,
            validate::pixel_size(pixel_size_b)?,
        );
        let target_pixel_size = validate::target_pixel_size(target_pixel_size, pix1)?;
        let box_aim = validate::box_aim(box_aim)?;
        let tolerance = validate::tolerance(tolerance, box_aim)?;
        let num_results = validate::result_count(num_results, box_aim, tolerance)?;

        Ok(Self {
            pix1,
            pix2,
            target_pixel_size,
            box_aim,
            tolerance,
            num_results,
            priority,
        })
    }

    /// Even pix2 box sizes admitted by `box_aim` and `tolerance`.
    pub fn candidate_pool(&self) -> Vec<u32> {
        candidate_pool(self.box_aim, self.tolerance)
    }

    /// Whether the pix1 boxes have to be resampled to reach the target.
    pub fn needs_rescale(&self) -> bool {
        self.target_pixel_size > self.pix1
    }
}
