//! Break method implementations, one per computed [`Method`](classbreaks_core::Method)

pub mod arithmetic;
pub mod equal;
pub mod geometric;
pub mod headtail;
pub mod jenks;
pub mod msd;
pub mod nested_means;
pub mod pretty;
pub mod quantile;

pub use arithmetic::Arithmetic;
pub use equal::EqualInterval;
pub use geometric::Geometric;
pub use headtail::{HeadTail, DEFAULT_HEAD_LIMIT};
pub use jenks::{Jenks, MAX_JENKS_CLASSES};
pub use msd::MeanStdDev;
pub use nested_means::NestedMeans;
pub use pretty::Pretty;
pub use quantile::{Quantile, Q6, Q6_PROBABILITIES};
