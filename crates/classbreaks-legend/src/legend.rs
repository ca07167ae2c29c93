//! Legend entries pairing class ranges with colors

use crate::format::format_number;
use classbreaks_palette::HexColor;
use serde::{Deserialize, Serialize};

/// One row of a class legend
///
/// `range` is open-ended on the outer classes: the first has no lower bound
/// and the last no upper bound, so values outside the classified sample still
/// find a row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub color: HexColor,
    pub label: String,
    pub range: (Option<f64>, Option<f64>),
}

/// Zip breakpoints and colors into legend rows, lowest class first
///
/// Returns nothing for fewer than two breaks or no colors. Each color gets
/// one row, up to the number of classes; extra colors are ignored.
///
/// ```rust
/// use classbreaks_legend::breaks_to_legend;
/// use classbreaks_palette::colors_for_count;
///
/// let colors = colors_for_count("Reds", 3).unwrap();
/// let legend = breaks_to_legend(&[0.0, 10.0, 250.0, 12000.0], &colors);
///
/// let labels: Vec<&str> = legend.iter().map(|e| e.label.as_str()).collect();
/// assert_eq!(labels, ["< 10", "10 - 250", "250 +"]);
/// assert_eq!(legend[0].range, (None, Some(10.0)));
/// assert_eq!(legend[2].range, (Some(250.0), None));
/// ```
pub fn breaks_to_legend(breaks: &[f64], colors: &[HexColor]) -> Vec<LegendEntry> {
    if breaks.len() < 2 || colors.is_empty() {
        return Vec::new();
    }
    let rows = colors.len().min(breaks.len() - 1);
    colors
        .iter()
        .take(rows)
        .enumerate()
        .map(|(i, color)| {
            let lower = (i > 0).then(|| breaks[i]);
            let upper = (i + 1 < rows).then(|| breaks[i + 1]);
            let label = match (lower, upper) {
                (None, _) => format!("< {}", format_number(breaks[1])),
                (Some(lower), None) => format!("{} +", format_number(lower)),
                (Some(lower), Some(upper)) => {
                    format!("{} - {}", format_number(lower), format_number(upper))
                }
            };
            LegendEntry {
                color: color.clone(),
                label,
                range: (lower, upper),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use classbreaks_palette::colors_for_count;

    fn blues(n: usize) -> Vec<HexColor> {
        colors_for_count("Blues", n).unwrap()
    }

    #[test]
    fn test_degenerate_inputs() {
        assert!(breaks_to_legend(&[1.0], &blues(3)).is_empty());
        assert!(breaks_to_legend(&[0.0, 1.0, 2.0], &[]).is_empty());
    }

    #[test]
    fn test_middle_labels() {
        let legend = breaks_to_legend(&[0.0, 0.25, 1500.0, 20000.0, 1e6], &blues(4));
        assert_eq!(legend.len(), 4);
        assert_eq!(legend[1].label, "0.25 - 1,500");
        assert_eq!(legend[2].label, "1,500 - 20k");
        assert_eq!(legend[3].label, "20k +");
        assert_eq!(legend[1].range, (Some(0.25), Some(1500.0)));
    }

    #[test]
    fn test_single_class_is_open_on_both_sides() {
        let legend = breaks_to_legend(&[3.0, 9.0], &blues(1));
        assert_eq!(legend.len(), 1);
        assert_eq!(legend[0].label, "< 9");
        assert_eq!(legend[0].range, (None, None));
    }

    #[test]
    fn test_extra_colors_are_ignored() {
        let legend = breaks_to_legend(&[0.0, 5.0, 10.0], &blues(5));
        assert_eq!(legend.len(), 2);
        assert_eq!(legend[1].label, "5 +");
    }

    #[test]
    fn test_fewer_colors_leave_last_row_open() {
        let legend = breaks_to_legend(&[0.0, 1.0, 2.0, 3.0, 4.0], &blues(2));
        assert_eq!(legend.len(), 2);
        assert_eq!(legend[1].label, "1 +");
        assert_eq!(legend[1].range, (Some(1.0), None));
    }

    #[test]
    fn test_serializes_range_as_pair() {
        let legend = breaks_to_legend(&[0.0, 5.0, 10.0], &blues(2));
        let json = serde_json::to_value(&legend[0]).unwrap();
        assert_eq!(json["range"], serde_json::json!([null, 5.0]));
        assert_eq!(json["label"], "< 5");
    }
}
