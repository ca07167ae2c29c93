//! From raw values to legend rows

use classbreaks_core::{Method, RawValue};
use classbreaks_legend::*;
use proptest::prelude::*;

fn population() -> Vec<RawValue> {
    let mut cells: Vec<RawValue> = [
        1_200.0, 3_400.0, 560.0, 89_000.0, 15_500.0, 7_300.0, 42_000.0, 2_100.0, 640_000.0, 980.0,
    ]
    .into_iter()
    .map(RawValue::from)
    .collect();
    cells.push(RawValue::Missing);
    cells.push(RawValue::from("n/a"));
    cells
}

#[test]
fn test_every_method_produces_consistent_legend() {
    for method in Method::ALL.into_iter().filter(Method::computes_breaks) {
        let colorizer = colorize(&population(), &ColorizeOptions::default().method(method).classes(4));
        let legend = colorizer.legend();
        assert_eq!(legend.len(), colorizer.colors().len().min(colorizer.breaks().len() - 1));
        assert!(legend[0].range.0.is_none(), "{method}");
        assert!(legend.last().unwrap().range.1.is_none(), "{method}");
        for pair in legend.windows(2) {
            // Each row starts where the previous one ends
            assert_eq!(pair[0].range.1, pair[1].range.0, "{method}");
        }
    }
}

#[test]
fn test_colors_follow_classes() {
    let cells = population();
    let colorizer = colorize(&cells, &ColorizeOptions::default().method(Method::Quantile).classes(5));
    for cell in &cells {
        let color = colorizer.color_for(cell);
        match cell.as_number() {
            Some(x) => {
                let index = colorizer.class_index(x).unwrap();
                assert_eq!(color, &colorizer.colors()[index]);
            }
            None => assert_eq!(color, "#f5f5f5"),
        }
    }
    assert!(colorizer.missing().is_some());
}

#[test]
fn test_legend_labels_use_compact_numbers() {
    let colorizer = colorize(
        &population(),
        &ColorizeOptions::default().breaks(vec![560.0, 1_000.0, 10_000.0, 640_000.0]),
    );
    let labels: Vec<String> = colorizer.legend().into_iter().map(|e| e.label).collect();
    assert_eq!(labels, ["< 1,000", "1,000 - 10k", "10k +"]);
}

proptest! {
    #[test]
    fn prop_legend_rows_ascending(
        mut breaks in prop::collection::vec(-1.0e6..1.0e6f64, 2..12),
        n_colors in 1usize..12,
    ) {
        breaks.sort_by(f64::total_cmp);
        let colors = classbreaks_palette::colors_for_count("YlGnBu", n_colors).unwrap();
        let legend = breaks_to_legend(&breaks, &colors);
        prop_assert_eq!(legend.len(), colors.len().min(breaks.len() - 1));
        for pair in legend.windows(2) {
            let upper = pair[0].range.1.unwrap();
            let lower = pair[1].range.0.unwrap();
            prop_assert_eq!(upper, lower);
        }
        for entry in &legend {
            if let (Some(lo), Some(hi)) = entry.range {
                prop_assert!(lo <= hi);
            }
        }
    }

    #[test]
    fn prop_format_number_never_panics(x in prop::num::f64::ANY) {
        let text = format_number(x);
        prop_assert!(!text.is_empty());
    }
}
