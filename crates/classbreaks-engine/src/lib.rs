//! Class break algorithms for thematic mapping
//!
//! Given a numeric sample and a [`ClassificationRequest`], the engine computes
//! the ordered breakpoints that cut the sample into classes. Ten methods
//! compute breaks; `custom` marks breaks owned by the caller.
//!
//! Classification never fails. An empty sample, the custom method and
//! domains a method cannot handle (geometric breaks over non-positive data)
//! all produce the empty result, and a constant sample produces the single
//! class `[v, v]`. [`classify_sample`] keeps the distinction as a
//! [`Classification`].
//!
//! # Example
//!
//! ```rust
//! use classbreaks_core::{Method, Sample};
//! use classbreaks_engine::{classify_sample, Classification, ClassificationRequest};
//!
//! let sample = Sample::new(vec![1.0, 2.0, 3.0, 10.0, 11.0, 12.0]);
//! let request = ClassificationRequest::new(Method::Jenks).classes(2);
//!
//! match classify_sample(&sample, &request) {
//!     Classification::Computed(result) => assert_eq!(result.breaks, vec![1.0, 6.5, 12.0]),
//!     other => panic!("unexpected {other:?}"),
//! }
//! ```

pub mod engine;
pub mod methods;
pub mod request;
pub mod result;
pub mod traits;

pub use engine::{classify, classify_many, classify_raw, classify_sample, compute_breaks};
pub use request::{
    nearest_power_of_two, ClassificationRequest, DEFAULT_BAND_WIDTH, DEFAULT_CLASSES,
    MAX_BAND_WIDTH, MAX_CLASSES, MIN_BAND_WIDTH,
};
pub use result::{Classification, ClassificationResult};
pub use traits::BreakMethod;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{classify, classify_sample, BreakMethod, Classification, ClassificationRequest, ClassificationResult};
    pub use classbreaks_core::prelude::*;
}
