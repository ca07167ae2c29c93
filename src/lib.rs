//! Statistical class breaks for choropleth maps
//!
//! This crate re-exports the classbreaks workspace:
//!
//! - [`classbreaks_core`]: error types, method identifiers, input cleaning and shared statistics
//! - [`classbreaks_engine`]: the ten break algorithms and the classification entry points
//! - [`classbreaks_palette`]: named color schemes and color conversions
//! - [`classbreaks_legend`]: number formatting, legend rows and threshold colorizing
//! - [`classbreaks_histogram`]: nicely-binned histograms for previewing a distribution
//!
//! # Example
//!
//! ```rust
//! use classbreaks::prelude::*;
//!
//! let values: Vec<RawValue> = vec![
//!     RawValue::from(1.0),
//!     RawValue::from("2"),
//!     RawValue::Missing,
//!     RawValue::from(3.0),
//!     RawValue::from(10.0),
//!     RawValue::from(11.0),
//!     RawValue::from(12.0),
//! ];
//!
//! let result = classify_raw(&values, &ClassificationRequest::new(Method::Jenks).classes(2));
//! assert_eq!(result.breaks, vec![1.0, 6.5, 12.0]);
//!
//! let colors = colors_for_count("Blues", result.n_classes).unwrap_or_default();
//! let legend = breaks_to_legend(&result.breaks, &colors);
//! let labels: Vec<&str> = legend.iter().map(|e| e.label.as_str()).collect();
//! assert_eq!(labels, ["< 6.5", "6.5 +"]);
//! ```

pub use classbreaks_core;
pub use classbreaks_engine;
pub use classbreaks_histogram;
pub use classbreaks_legend;
pub use classbreaks_palette;

pub use classbreaks_core::{Error, Method, RawValue, Result, Sample};
pub use classbreaks_engine::{
    classify, classify_many, classify_raw, classify_sample, Classification, ClassificationRequest,
    ClassificationResult,
};
pub use classbreaks_histogram::{compute_histogram, histogram_domain, Histogram};
pub use classbreaks_legend::{breaks_to_legend, colorize, format_number, ColorizeOptions, Colorizer, LegendEntry};
pub use classbreaks_palette::{color_to_hex, colors_for_count, hex_to_rgb, HexColor, Palette, PaletteType};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        breaks_to_legend, classify, classify_raw, classify_sample, colorize, colors_for_count,
        compute_histogram, format_number, Classification, ClassificationRequest,
        ClassificationResult, ColorizeOptions, HexColor, Method, RawValue, Sample,
    };
}
