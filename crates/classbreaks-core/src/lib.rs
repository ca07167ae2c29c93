//! Core types for class break computation
//!
//! This crate holds what every classbreaks crate shares: the error taxonomy,
//! the closed set of classification methods, input cleaning and the small
//! statistics toolbox (sorting, mean, standard deviation, interpolated
//! quantiles) the break methods are built from.
//!
//! # Example
//!
//! ```rust
//! use classbreaks_core::{RawValue, Sample};
//!
//! let cells = vec![RawValue::from(3.0), RawValue::from(""), RawValue::from("1.5")];
//! let sample = Sample::from_raw(&cells);
//!
//! assert_eq!(sample.sorted(), &[1.5, 3.0]);
//! assert_eq!(sample.dropped(), 1);
//! ```

pub mod error;
pub mod method;
pub mod sample;
pub mod ticks;
pub mod utils;

pub use error::{Error, Result};
pub use method::Method;
pub use sample::{RawValue, Sample};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{Error, Method, RawValue, Result, Sample};
}
