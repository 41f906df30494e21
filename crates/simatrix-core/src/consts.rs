/// Minimum pixel count (h*w) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Radius of the SSIM Gaussian window. Radius 5 gives the standard
/// 11x11 window from Wang et al.
pub const SSIM_WINDOW_RADIUS: usize = 5;

/// Standard deviation of the SSIM Gaussian window.
pub const SSIM_SIGMA: f32 = 1.5;

/// SSIM luminance stabilizer: (0.01 * 255)^2, tuned for 8-bit range.
pub const SSIM_C1: f32 = 6.5025;

/// SSIM contrast stabilizer: (0.03 * 255)^2, tuned for 8-bit range.
pub const SSIM_C2: f32 = 58.5225;

/// Maximum pixel value of the 8-bit dynamic range frames are promoted from.
pub const PIXEL_MAX: f32 = 255.0;

/// File extensions accepted by the directory scanner (ASCII, lowercase).
pub const IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "bmp", "tif", "tiff"];
