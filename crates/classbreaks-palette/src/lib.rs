//! Named color schemes for classed thematic maps
//!
//! The ColorBrewer sequential, diverging and qualitative schemes plus
//! Tableau10, looked up by name and sampled for a class count, and the hex
//! and RGB conversions legends need.
//!
//! ```rust
//! use classbreaks_palette::{palettes_by_type, PaletteType};
//!
//! for palette in palettes_by_type(Some(PaletteType::Diverging)) {
//!     let colors = palette.colors(5);
//!     assert_eq!(colors.len(), 5);
//! }
//! ```

pub mod color;
pub mod palette;
mod schemes;

pub use color::{color_to_hex, hex_to_rgb, HexColor, Rgb};
pub use palette::{
    all_palettes, colors_for_count, palette_by_name, palettes_by_type, Palette, PaletteType,
    DEFAULT_PALETTE,
};
