//! Defaults for colorizing

use classbreaks_core::Method;
use classbreaks_palette::Rgb;

pub use classbreaks_engine::DEFAULT_CLASSES;
pub use classbreaks_palette::DEFAULT_PALETTE;

pub const DEFAULT_METHOD: Method = Method::Quantile;

/// Fill for features without a usable value
pub const DEFAULT_MISSING_COLOR: Rgb = Rgb::from_u32(0xf5f5f5);

/// Legend text for the missing-value swatch
pub const DEFAULT_MISSING_TEXT: &str = "No data";
