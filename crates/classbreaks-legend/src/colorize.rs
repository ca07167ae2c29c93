//! Threshold colorizing of raw values

use crate::constants::{
    DEFAULT_CLASSES, DEFAULT_METHOD, DEFAULT_MISSING_COLOR, DEFAULT_MISSING_TEXT, DEFAULT_PALETTE,
};
use crate::legend::{breaks_to_legend, LegendEntry};
use classbreaks_core::{Method, RawValue, Sample};
use classbreaks_engine::{classify_sample, ClassificationRequest};
use classbreaks_palette::{colors_for_count, HexColor};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// How to turn values into colors
///
/// Every field has a default, so options deserialize from a partial object
/// and build fluently from [`ColorizeOptions::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ColorizeOptions {
    pub method: Method,
    /// Requested class count
    pub n_classes: i64,
    /// Palette name, used when `colors` is not given
    pub palette: String,
    /// Explicit class colors, overriding the palette
    pub colors: Option<Vec<HexColor>>,
    /// Explicit breakpoints, overriding classification
    pub breaks: Option<Vec<f64>>,
    pub precision: Option<u32>,
    pub k: Option<f64>,
    pub middle: Option<bool>,
    /// Reverse the color order
    pub reversed: bool,
    pub missing_color: HexColor,
    pub missing_text: String,
}

impl Default for ColorizeOptions {
    fn default() -> Self {
        Self {
            method: DEFAULT_METHOD,
            n_classes: DEFAULT_CLASSES,
            palette: DEFAULT_PALETTE.to_string(),
            colors: None,
            breaks: None,
            precision: None,
            k: None,
            middle: None,
            reversed: false,
            missing_color: DEFAULT_MISSING_COLOR.to_hex(),
            missing_text: DEFAULT_MISSING_TEXT.to_string(),
        }
    }
}

impl ColorizeOptions {
    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn classes(mut self, n_classes: i64) -> Self {
        self.n_classes = n_classes;
        self
    }

    pub fn palette(mut self, name: impl Into<String>) -> Self {
        self.palette = name.into();
        self
    }

    pub fn colors(mut self, colors: Vec<HexColor>) -> Self {
        self.colors = Some(colors);
        self
    }

    /// Use these breakpoints instead of classifying; they are sorted first
    pub fn breaks(mut self, breaks: Vec<f64>) -> Self {
        self.breaks = Some(breaks);
        self
    }

    pub fn precision(mut self, decimals: u32) -> Self {
        self.precision = Some(decimals);
        self
    }

    pub fn k(mut self, k: f64) -> Self {
        self.k = Some(k);
        self
    }

    pub fn middle(mut self, middle: bool) -> Self {
        self.middle = Some(middle);
        self
    }

    pub fn reversed(mut self, reversed: bool) -> Self {
        self.reversed = reversed;
        self
    }

    pub fn missing(mut self, text: impl Into<String>, color: HexColor) -> Self {
        self.missing_text = text.into();
        self.missing_color = color;
        self
    }

    /// The engine request these options describe
    pub fn request(&self) -> ClassificationRequest {
        ClassificationRequest {
            method: self.method,
            nb: self.n_classes,
            precision: self.precision,
            k: self.k,
            middle: self.middle,
        }
    }
}

/// A threshold color scale over classified values
///
/// Values below the first inner break take the first color, values at or
/// above the last inner break the last color. Missing and non-numeric values
/// take the missing color.
#[derive(Debug, Clone, PartialEq)]
pub struct Colorizer {
    breaks: Vec<f64>,
    inner_breaks: Vec<f64>,
    colors: Vec<HexColor>,
    missing_color: HexColor,
    missing: Option<(String, HexColor)>,
}

/// Classify `values` and build the color scale
///
/// ```rust
/// use classbreaks_core::{Method, RawValue};
/// use classbreaks_legend::{colorize, ColorizeOptions};
///
/// let values: Vec<RawValue> = vec![1.0.into(), 2.0.into(), RawValue::Missing, 9.0.into()];
/// let options = ColorizeOptions::default().method(Method::Equal).classes(2).palette("Greens");
/// let colorizer = colorize(&values, &options);
///
/// assert_eq!(colorizer.breaks(), &[1.0, 5.0, 9.0]);
/// assert_eq!(colorizer.color_for(&RawValue::Missing), "#f5f5f5");
/// assert_eq!(colorizer.missing().map(|(text, _)| text), Some("No data"));
/// ```
#[instrument(skip(values, options), fields(n = values.len(), method = %options.method))]
pub fn colorize(values: &[RawValue], options: &ColorizeOptions) -> Colorizer {
    let sample = Sample::from_raw(values);

    let breaks = match &options.breaks {
        Some(breaks) => {
            let mut breaks: Vec<f64> = breaks.iter().copied().filter(|b| b.is_finite()).collect();
            breaks.sort_by(f64::total_cmp);
            breaks
        }
        None => classify_sample(&sample, &options.request()).into_result().breaks,
    };

    let mut colors = match &options.colors {
        Some(colors) => colors.clone(),
        None => colors_for_count(&options.palette, breaks.len().saturating_sub(1)).unwrap_or_else(|| {
            debug!(palette = %options.palette, "unknown palette, no colors");
            Vec::new()
        }),
    };
    if options.reversed {
        colors.reverse();
    }

    let inner_breaks = if breaks.len() >= 2 {
        breaks[1..breaks.len() - 1].to_vec()
    } else {
        Vec::new()
    };
    let missing = (sample.dropped() > 0)
        .then(|| (options.missing_text.clone(), options.missing_color.clone()));
    debug!(classes = breaks.len().saturating_sub(1), colors = colors.len(), "colorizer ready");

    Colorizer {
        breaks,
        inner_breaks,
        colors,
        missing_color: options.missing_color.clone(),
        missing,
    }
}

impl Colorizer {
    /// Class index of a number, `None` when it is not finite
    pub fn class_index(&self, value: f64) -> Option<usize> {
        value
            .is_finite()
            .then(|| self.inner_breaks.partition_point(|&b| b <= value))
    }

    /// Color of a number; the missing color when no class color applies
    pub fn color_for_value(&self, value: f64) -> &HexColor {
        self.class_index(value)
            .and_then(|index| self.colors.get(index))
            .unwrap_or(&self.missing_color)
    }

    /// Color of a raw cell
    pub fn color_for(&self, value: &RawValue) -> &HexColor {
        match value.as_number() {
            Some(number) => self.color_for_value(number),
            None => &self.missing_color,
        }
    }

    pub fn breaks(&self) -> &[f64] {
        &self.breaks
    }

    pub fn inner_breaks(&self) -> &[f64] {
        &self.inner_breaks
    }

    pub fn colors(&self) -> &[HexColor] {
        &self.colors
    }

    /// Legend text and color for missing values, if the input had any
    pub fn missing(&self) -> Option<(&str, &HexColor)> {
        self.missing
            .as_ref()
            .map(|(text, color)| (text.as_str(), color))
    }

    /// Legend rows for the classes
    pub fn legend(&self) -> Vec<LegendEntry> {
        breaks_to_legend(&self.breaks, &self.colors)
    }
}
