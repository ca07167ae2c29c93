//! Classification method identifiers

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The eleven classification methods
///
/// `Custom` is a sentinel: breaks for it are owned by the caller and the
/// engine never computes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// Equal-count classes at the `i/nb` quantiles
    #[default]
    Quantile,
    /// Six fixed classes at 0, 5, 25, 50, 75, 95 and 100 percent
    Q6,
    /// Equal-width classes
    Equal,
    /// Jenks natural breaks
    Jenks,
    /// Mean and standard deviation bands
    Msd,
    /// Geometric progression of breaks
    Geometric,
    /// Head/tail breaks for heavy-tailed data
    #[serde(rename = "headtail")]
    HeadTail,
    /// Rounded 1-2-5 breaks
    Pretty,
    /// Arithmetic progression of class widths
    Arithmetic,
    /// Recursive mean bisection
    #[serde(rename = "nestedmeans")]
    NestedMeans,
    /// Breaks supplied by the caller
    Custom,
}

impl Method {
    /// All methods, in the order they are presented to users
    pub const ALL: [Method; 11] = [
        Method::Quantile,
        Method::Q6,
        Method::Equal,
        Method::Jenks,
        Method::Msd,
        Method::Geometric,
        Method::HeadTail,
        Method::Pretty,
        Method::Arithmetic,
        Method::NestedMeans,
        Method::Custom,
    ];

    /// Stable identifier, as accepted by `FromStr` and serde
    pub fn id(&self) -> &'static str {
        match self {
            Self::Quantile => "quantile",
            Self::Q6 => "q6",
            Self::Equal => "equal",
            Self::Jenks => "jenks",
            Self::Msd => "msd",
            Self::Geometric => "geometric",
            Self::HeadTail => "headtail",
            Self::Pretty => "pretty",
            Self::Arithmetic => "arithmetic",
            Self::NestedMeans => "nestedmeans",
            Self::Custom => "custom",
        }
    }

    /// Human readable name for menus and legends
    pub fn label(&self) -> &'static str {
        match self {
            Self::Quantile => "Quantile",
            Self::Q6 => "Q6",
            Self::Equal => "Equal Interval",
            Self::Jenks => "Natural Breaks (Jenks)",
            Self::Msd => "Mean-Std Dev",
            Self::Geometric => "Geometric",
            Self::HeadTail => "Head/Tail",
            Self::Pretty => "Pretty",
            Self::Arithmetic => "Arithmetic",
            Self::NestedMeans => "Nested Means",
            Self::Custom => "Custom",
        }
    }

    /// Whether the engine computes breaks for this method
    pub fn computes_breaks(&self) -> bool {
        !matches!(self, Self::Custom)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim().to_ascii_lowercase();
        Method::ALL
            .iter()
            .copied()
            .find(|m| m.id() == needle)
            .ok_or_else(|| Error::InvalidInput(format!("unknown classification method '{s}'")))
    }
}
