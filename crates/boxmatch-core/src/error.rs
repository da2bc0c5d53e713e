use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BoxMatchError {
    #[error("Pixel size must be a positive number, got {0}")]
    InvalidPixelSize(f64),

    #[error("Particle diameter must be a positive number, got {0}")]
    InvalidDiameter(f64),

    #[error("Preferred box size must be a positive number, got {0}")]
    InvalidBoxAim(f64),

    #[error("The target pixel size ({target}) must be equal to or larger than pix1 ({pix1})")]
    TargetBelowLargest { target: f64, pix1: f64 },

    #[error("Box size tolerance {tolerance} is too narrow, please provide at least {minimum}")]
    ToleranceTooNarrow { tolerance: f64, minimum: f64 },

    #[error("Box size of {size} px exceeds the largest supported box ({maximum} px)")]
    BoxTooLarge { size: f64, maximum: u32 },

    #[error("At least one result must be requested")]
    NoResultsRequested,

    #[error("Requested {requested} results but only {available} box sizes fit the tolerance")]
    NotEnoughCandidates { requested: usize, available: usize },
}

pub type Result<T> = std::result::Result<T, BoxMatchError>;
