use serde::{Deserialize, Serialize};

use super::config::ReconcileParams;

/// Extraction advice for one dataset.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DatasetBox {
    /// Box size (px) to extract at the calibrated pixel size.
    pub extract_box: u32,
    /// Box size (px) after rescaling; equals `extract_box` when not rescaled.
    pub final_box: u32,
    /// Pixel size (A/px) of the final box.
    pub pixel_size: f64,
}

impl DatasetBox {
    pub fn is_rescaled(&self) -> bool {
        self.extract_box != self.final_box
    }

    /// Physical width (A) of the extracted box.
    pub fn field_of_view(&self) -> f64 {
        self.final_box as f64 * self.pixel_size
    }
}

/// A matched pair of boxes for the larger (pix1) and smaller (pix2) pixel sizes.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub pix1: DatasetBox,
    pub pix2: DatasetBox,
    /// Difference (px) between the even pix1 box and its exact equivalent.
    pub deviation: f64,
}

impl Recommendation {
    /// Difference between the two final pixel sizes.
    pub fn pixel_size_mismatch(&self) -> f64 {
        (self.pix1.pixel_size - self.pix2.pixel_size).abs()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReconcileReport {
    /// Number of pix2 box sizes the tolerance admitted.
    pub pool_size: usize,
    pub params: ReconcileParams,
    pub recommendations: Vec<Recommendation>,
}
