//! RGB colors and their hex notation

use classbreaks_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An opaque 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// A lowercase `#rrggbb` color string
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HexColor(String);

/// CSS color keywords understood by the parser
const NAMED_COLORS: &[(&str, u32)] = &[
    ("black", 0x000000),
    ("white", 0xffffff),
    ("red", 0xff0000),
    ("green", 0x008000),
    ("blue", 0x0000ff),
    ("yellow", 0xffff00),
    ("orange", 0xffa500),
    ("purple", 0x800080),
    ("gray", 0x808080),
    ("grey", 0x808080),
    ("silver", 0xc0c0c0),
    ("navy", 0x000080),
    ("teal", 0x008080),
    ("steelblue", 0x4682b4),
    ("whitesmoke", 0xf5f5f5),
];

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// From a `0xrrggbb` literal
    pub const fn from_u32(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as u8,
            g: ((rgb >> 8) & 0xff) as u8,
            b: (rgb & 0xff) as u8,
        }
    }

    pub fn to_hex(self) -> HexColor {
        HexColor(format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b))
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

fn parse_hex(digits: &str) -> Option<Rgb> {
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match digits.len() {
        6 => u32::from_str_radix(digits, 16).ok().map(Rgb::from_u32),
        // #rgb doubles every digit
        3 => {
            let short = u32::from_str_radix(digits, 16).ok()?;
            let expand = |nibble: u32| (nibble * 17) as u8;
            Some(Rgb::new(
                expand((short >> 8) & 0xf),
                expand((short >> 4) & 0xf),
                expand(short & 0xf),
            ))
        }
        _ => None,
    }
}

fn parse_functional(args: &str) -> Option<Rgb> {
    let channels: Vec<u8> = args
        .split(',')
        .map(|part| {
            let value: f64 = part.trim().parse().ok()?;
            value.is_finite().then(|| value.round().clamp(0.0, 255.0) as u8)
        })
        .collect::<Option<_>>()?;
    match channels[..] {
        [r, g, b] => Some(Rgb::new(r, g, b)),
        _ => None,
    }
}

impl FromStr for Rgb {
    type Err = Error;

    /// Parse `#rgb`, `#rrggbb`, `rgb(r, g, b)` or a CSS color keyword
    fn from_str(s: &str) -> Result<Self> {
        let text = s.trim().to_ascii_lowercase();
        let parsed = if let Some(digits) = text.strip_prefix('#') {
            parse_hex(digits)
        } else if let Some(args) = text.strip_prefix("rgb(").and_then(|t| t.strip_suffix(')')) {
            parse_functional(args)
        } else {
            NAMED_COLORS
                .iter()
                .find(|(name, _)| *name == text)
                .map(|&(_, rgb)| Rgb::from_u32(rgb))
        };
        parsed.ok_or_else(|| Error::InvalidInput(format!("unrecognized color {s:?}")))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl HexColor {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Channels of the color; black if a deserialized value is not a color
    pub fn to_rgb(&self) -> Rgb {
        self.0.parse().unwrap_or(Rgb::BLACK)
    }
}

impl FromStr for HexColor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        s.parse::<Rgb>().map(Rgb::to_hex)
    }
}

impl From<Rgb> for HexColor {
    fn from(rgb: Rgb) -> Self {
        rgb.to_hex()
    }
}

impl AsRef<str> for HexColor {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for HexColor {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for HexColor {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Normalize any parseable color to `#rrggbb`
///
/// Input that does not parse as a color is returned unchanged.
///
/// ```rust
/// use classbreaks_palette::color_to_hex;
///
/// assert_eq!(color_to_hex("#ABC"), "#aabbcc");
/// assert_eq!(color_to_hex("steelblue"), "#4682b4");
/// assert_eq!(color_to_hex("not a color"), "not a color");
/// ```
pub fn color_to_hex(color: &str) -> String {
    match color.parse::<Rgb>() {
        Ok(rgb) => rgb.to_hex().0,
        Err(_) => color.to_string(),
    }
}

/// RGB channels of a color, black when it does not parse
pub fn hex_to_rgb(color: &str) -> [u8; 3] {
    color.parse::<Rgb>().unwrap_or(Rgb::BLACK).to_array()
}
