//! Legend labels and threshold colorizing for classed data
//!
//! The last step from breakpoints to a map: [`colorize`] classifies raw
//! values and looks up each value's class color, [`breaks_to_legend`] turns
//! breakpoints and colors into labeled rows, and [`format_number`] keeps the
//! labels short.
//!
//! ```rust
//! use classbreaks_core::{Method, RawValue};
//! use classbreaks_legend::{colorize, ColorizeOptions};
//!
//! let values: Vec<RawValue> = [12.0, 48.0, 7.5, 130.0, 61.0, 22.0]
//!     .into_iter()
//!     .map(RawValue::from)
//!     .collect();
//! let colorizer = colorize(&values, &ColorizeOptions::default().method(Method::Jenks).classes(3));
//!
//! for entry in colorizer.legend() {
//!     println!("{} {}", entry.color, entry.label);
//! }
//! ```

pub mod colorize;
pub mod constants;
pub mod format;
pub mod legend;

pub use colorize::{colorize, ColorizeOptions, Colorizer};
pub use format::format_number;
pub use legend::{breaks_to_legend, LegendEntry};
