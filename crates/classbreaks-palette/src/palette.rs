//! Named color schemes and the registry that holds them

use crate::color::{HexColor, Rgb};
use crate::schemes::{DIVERGING, QUALITATIVE, SEQUENTIAL};
use classbreaks_core::{Error, Result};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Scheme used when none is chosen
pub const DEFAULT_PALETTE: &str = "Blues";

/// Type of palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteType {
    /// Ordered data that progress from low to high. Lightness steps dominate
    /// the look of these schemes, light for low values and dark for high.
    Sequential,
    /// Equal emphasis on a critical mid-range value and the extremes at both
    /// ends. The middle is light, the extremes dark with contrasting hues.
    Diverging,
    /// Hues without implied magnitude, for nominal or categorical data.
    Qualitative,
}

impl PaletteType {
    pub const ALL: [PaletteType; 3] = [Self::Sequential, Self::Diverging, Self::Qualitative];

    pub fn id(&self) -> &'static str {
        match self {
            Self::Sequential => "sequential",
            Self::Diverging => "diverging",
            Self::Qualitative => "qualitative",
        }
    }
}

impl fmt::Display for PaletteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for PaletteType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|t| t.id() == wanted)
            .ok_or_else(|| Error::InvalidInput(format!("unknown palette type {s:?}")))
    }
}

/// A named scheme
///
/// Sequential and diverging schemes carry a ColorBrewer table for every class
/// count from three up to their largest. One or two classes have no table and
/// are sampled from a uniform B-spline through the largest one. Qualitative
/// schemes hand out their colors in order.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    name: &'static str,
    palette_type: PaletteType,
    tables: Vec<Vec<Rgb>>,
}

impl Palette {
    /// Build a palette from `0xrrggbb` tables, smallest first
    pub fn new(name: &'static str, palette_type: PaletteType, tables: &[&[u32]]) -> Self {
        Self {
            name,
            palette_type,
            tables: tables
                .iter()
                .map(|table| table.iter().copied().map(Rgb::from_u32).collect())
                .collect(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn palette_type(&self) -> PaletteType {
        self.palette_type
    }

    /// The largest table
    pub fn anchors(&self) -> &[Rgb] {
        self.tables.last().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Largest class count this palette can color distinctly
    pub fn max_classes(&self) -> usize {
        self.anchors().len()
    }

    /// Color of the ramp at position `t` in `[0, 1]`
    pub fn interpolate(&self, t: f64) -> Rgb {
        let anchors = self.anchors();
        let Some(&first) = anchors.first() else {
            return Rgb::BLACK;
        };
        let segments = anchors.len() - 1;
        if segments == 0 {
            return first;
        }
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let position = t * segments as f64;
        let index = (position.floor() as usize).min(segments - 1);
        let (v1, v2) = (anchors[index], anchors[index + 1]);
        // Missing neighbours past either end are mirrored
        let v0 = index.checked_sub(1).map(|i| anchors[i]);
        let v3 = anchors.get(index + 2).copied();
        let channel = |pick: fn(Rgb) -> u8| {
            let (c1, c2) = (f64::from(pick(v1)), f64::from(pick(v2)));
            let c0 = v0.map_or(2.0 * c1 - c2, |c| f64::from(pick(c)));
            let c3 = v3.map_or(2.0 * c2 - c1, |c| f64::from(pick(c)));
            basis(position - index as f64, c0, c1, c2, c3).round().clamp(0.0, 255.0) as u8
        };
        Rgb::new(channel(|c| c.r), channel(|c| c.g), channel(|c| c.b))
    }

    /// `n` colors, `n` clamped into `[1, max_classes]`
    pub fn colors(&self, n: usize) -> Vec<HexColor> {
        let n = n.clamp(1, self.max_classes().max(1));
        if self.palette_type == PaletteType::Qualitative {
            return self.anchors().iter().take(n).map(|c| c.to_hex()).collect();
        }
        if let Some(table) = self.tables.iter().find(|table| table.len() == n) {
            return table.iter().map(|c| c.to_hex()).collect();
        }
        match n {
            1 => vec![self.interpolate(0.5).to_hex()],
            n => (0..n)
                .map(|i| self.interpolate(i as f64 / (n - 1) as f64).to_hex())
                .collect(),
        }
    }
}

/// Uniform cubic B-spline weight of four control values at `t` in `[0, 1]`
fn basis(t: f64, v0: f64, v1: f64, v2: f64, v3: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    ((1.0 - 3.0 * t + 3.0 * t2 - t3) * v0
        + (4.0 - 6.0 * t2 + 3.0 * t3) * v1
        + (1.0 + 3.0 * t + 3.0 * t2 - 3.0 * t3) * v2
        + t3 * v3)
        / 6.0
}

lazy_static! {
    static ref REGISTRY: Vec<Palette> = {
        let groups = [
            (PaletteType::Sequential, SEQUENTIAL),
            (PaletteType::Diverging, DIVERGING),
        ];
        groups
            .iter()
            .flat_map(|&(palette_type, schemes)| {
                schemes
                    .iter()
                    .map(move |&(name, tables)| Palette::new(name, palette_type, tables))
            })
            .chain(QUALITATIVE.iter().map(|&(name, colors)| {
                Palette::new(name, PaletteType::Qualitative, std::slice::from_ref(&colors))
            }))
            .collect()
    };
}

/// Every built-in palette: sequential, then diverging, then qualitative
pub fn all_palettes() -> &'static [Palette] {
    &REGISTRY
}

/// Look a palette up by its exact name
pub fn palette_by_name(name: &str) -> Option<&'static Palette> {
    REGISTRY.iter().find(|p| p.name == name)
}

/// Palettes of one type, or all of them for `None`
pub fn palettes_by_type(palette_type: Option<PaletteType>) -> Vec<&'static Palette> {
    REGISTRY
        .iter()
        .filter(|p| palette_type.map_or(true, |t| p.palette_type == t))
        .collect()
}

/// `n` colors of the named palette, `None` for an unknown name
///
/// ```rust
/// use classbreaks_palette::colors_for_count;
///
/// let blues = colors_for_count("Blues", 3).unwrap();
/// assert_eq!(blues.len(), 3);
/// assert_eq!(blues[0], "#deebf7");
/// assert_eq!(blues[2], "#3182bd");
///
/// assert!(colors_for_count("NoSuchScheme", 3).is_none());
/// ```
pub fn colors_for_count(name: &str, n: usize) -> Option<Vec<HexColor>> {
    palette_by_name(name).map(|p| p.colors(n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_contents() {
        assert_eq!(all_palettes().len(), 36);
        assert_eq!(palettes_by_type(Some(PaletteType::Sequential)).len(), 18);
        assert_eq!(palettes_by_type(Some(PaletteType::Diverging)).len(), 9);
        assert_eq!(palettes_by_type(Some(PaletteType::Qualitative)).len(), 9);
        assert_eq!(palettes_by_type(None).len(), 36);
        assert!(palette_by_name(DEFAULT_PALETTE).is_some());
        assert!(palette_by_name("blues").is_none());
    }

    #[test]
    fn test_max_classes() {
        assert_eq!(palette_by_name("Blues").unwrap().max_classes(), 9);
        assert_eq!(palette_by_name("RdBu").unwrap().max_classes(), 11);
        assert_eq!(palette_by_name("Set1").unwrap().max_classes(), 9);
        assert_eq!(palette_by_name("Paired").unwrap().max_classes(), 12);
        assert_eq!(palette_by_name("Tableau10").unwrap().max_classes(), 10);
    }

    #[test]
    fn test_class_counts_use_brewer_tables() {
        assert_eq!(
            colors_for_count("Blues", 5).unwrap(),
            vec!["#eff3ff", "#bdd7e7", "#6baed6", "#3182bd", "#08519c"]
        );
        assert_eq!(
            colors_for_count("RdBu", 3).unwrap(),
            vec!["#ef8a62", "#f7f7f7", "#67a9cf"]
        );
        // A five-class table is not a slice of the nine-class ramp
        let blues = palette_by_name("Blues").unwrap();
        assert_ne!(blues.colors(5)[0], blues.anchors()[0].to_hex());
    }

    #[test]
    fn test_largest_table_is_anchors() {
        let blues = palette_by_name("Blues").unwrap();
        let anchors: Vec<HexColor> = blues.anchors().iter().map(|c| c.to_hex()).collect();
        assert_eq!(blues.colors(9), anchors);
        assert_eq!(blues.colors(9)[8], "#08306b");
    }

    #[test]
    fn test_small_counts_sample_the_spline() {
        let rd_bu = palette_by_name("RdBu").unwrap();
        assert_eq!(rd_bu.colors(1), vec![rd_bu.interpolate(0.5).to_hex()]);
        // Weighted 1:4:1 over the three middle anchors
        assert_eq!(rd_bu.colors(1)[0], "#f2efee");

        // The spline passes through both end anchors
        let blues = colors_for_count("Blues", 2).unwrap();
        assert_eq!(blues, vec!["#f7fbff", "#08306b"]);
    }

    #[test]
    fn test_counts_are_clamped() {
        let set2 = palette_by_name("Set2").unwrap();
        assert_eq!(set2.colors(0).len(), 1);
        assert_eq!(set2.colors(20).len(), 8);
        assert_eq!(palette_by_name("Greens").unwrap().colors(40).len(), 9);
        assert_eq!(palette_by_name("Spectral").unwrap().colors(40).len(), 11);
    }

    #[test]
    fn test_qualitative_takes_prefix() {
        let colors = colors_for_count("Set1", 3).unwrap();
        assert_eq!(colors, vec!["#e41a1c", "#377eb8", "#4daf4a"]);
    }

    #[test]
    fn test_palette_type_parsing() {
        assert_eq!("Diverging".parse::<PaletteType>().unwrap(), PaletteType::Diverging);
        assert!("rainbow".parse::<PaletteType>().is_err());
        assert_eq!(PaletteType::Qualitative.to_string(), "qualitative");
    }
}
