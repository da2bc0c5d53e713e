/// Box sizes (pixels) whose prime factors are all small (2, 3, 5, 7, 11, 13),
/// so FFT-based processing of an extracted box stays fast. Sorted ascending,
/// all even.
#[rustfmt::skip]
pub const FFT_EFFICIENT_SIZES: [u32; 155] = [
    24, 32, 36, 40, 44, 48, 52, 56, 60, 64, 72, 84,
    96, 100, 104, 112, 120, 128, 132, 140, 168, 180, 192, 196,
    208, 216, 220, 224, 240, 256, 260, 288, 300, 320, 352, 360,
    384, 416, 440, 448, 480, 512, 540, 560, 576, 588, 600, 630,
    640, 648, 672, 686, 700, 720, 750, 756, 768, 784, 800, 810,
    840, 864, 882, 896, 900, 960, 972, 980, 1000, 1008, 1024, 1050,
    1080, 1120, 1134, 1152, 1176, 1200, 1250, 1260, 1280, 1296, 1344, 1350,
    1372, 1400, 1440, 1458, 1470, 1500, 1512, 1536, 1568, 1600, 1620, 1680,
    1728, 1750, 1764, 1792, 1800, 1890, 1920, 1944, 1960, 2000, 2016, 2048,
    2058, 2100, 2160, 2240, 2250, 2268, 2304, 2352, 2400, 2430, 2450, 2500,
    2520, 2560, 2592, 2646, 2688, 2700, 2744, 2800, 2880, 2916, 2940, 3000,
    3024, 3072, 3136, 3150, 3200, 3240, 3360, 3402, 3430, 3456, 3500, 3528,
    3584, 3600, 3750, 3780, 3840, 3888, 3920, 4000, 4032, 4050, 4096,
];

/// Lower bound of the suggested box, as a multiple of the particle diameter.
pub const MIN_BOX_DIAMETER_FACTOR: f64 = 1.5;

/// Upper bound of the suggested box, as a multiple of the particle diameter.
pub const MAX_BOX_DIAMETER_FACTOR: f64 = 2.0;

/// Smallest box size tolerance (pixels) that always admits an even box size.
pub const MIN_BOX_TOLERANCE: f64 = 2.0;

/// Smallest box size (pixels) ever proposed for a dataset.
pub const MIN_BOX_SIZE: u32 = 2;

/// Largest even box size (pixels) that fits a `u32`.
pub const MAX_BOX_SIZE: u32 = u32::MAX - 1;

/// Decimal places used when reporting resulting pixel sizes.
pub const PIXEL_SIZE_DECIMALS: i32 = 5;

/// Decimal places used when reporting the field-of-view deviation of a pair.
pub const DEVIATION_DECIMALS: i32 = 4;
