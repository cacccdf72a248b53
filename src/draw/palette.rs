//! Fixed 16-color palette shared by the canvas and the exporter.
//!
//! Entry order is significant: the index is what the canvas stores and what
//! callers pass to the color setters, and each entry's symbolic name is the
//! label emitted in the export header. The table itself never changes at
//! runtime.

use thiserror::Error;

/// Errors produced by palette lookups.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaletteError {
    #[error("palette index {0} out of range (0-{max})", max = PALETTE.len() - 1)]
    OutOfRange(usize),
}

/// A resolved RGB color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Parses a `#rrggbb` hex string.
    ///
    /// Returns `None` for anything that is not exactly seven ASCII
    /// characters starting with `#`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
        let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
        let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
        Some(Self { r, g, b })
    }
}

/// One selectable color: CSS-style hex value plus the symbolic name used in
/// exported data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    /// `#rrggbb` color value, used for swatches and background fills
    pub hex: &'static str,
    /// Symbolic name, used as the export header label
    pub name: &'static str,
}

impl PaletteEntry {
    /// Resolves the entry's hex value to an [`Rgb`] color.
    pub fn rgb(&self) -> Rgb {
        Rgb::from_hex(self.hex).unwrap_or(Rgb { r: 0, g: 0, b: 0 })
    }
}

/// Palette index of the default stroke color (`void`).
pub const DEFAULT_STROKE_INDEX: usize = 0;

/// Palette index of the default background color (`white`).
pub const DEFAULT_BACKGROUND_INDEX: usize = 2;

/// The full palette, in selection and export order.
pub const PALETTE: [PaletteEntry; 16] = [
    PaletteEntry { hex: "#000000", name: "void" },
    PaletteEntry { hex: "#9d9d9d", name: "grey" },
    PaletteEntry { hex: "#ffffff", name: "white" },
    PaletteEntry { hex: "#be2633", name: "red" },
    PaletteEntry { hex: "#e06f8b", name: "meat" },
    PaletteEntry { hex: "#493c2b", name: "dark_brown" },
    PaletteEntry { hex: "#a46422", name: "brown" },
    PaletteEntry { hex: "#eb8925", name: "orange" },
    PaletteEntry { hex: "#f7e26b", name: "yellow" },
    PaletteEntry { hex: "#2f484e", name: "dark_green" },
    PaletteEntry { hex: "#44891a", name: "green" },
    PaletteEntry { hex: "#a3ce27", name: "slime_green" },
    PaletteEntry { hex: "#1b2632", name: "night_blue" },
    PaletteEntry { hex: "#005789", name: "sea_blue" },
    PaletteEntry { hex: "#31a2f2", name: "sky_blue" },
    PaletteEntry { hex: "#b2dcef", name: "cloud_blue" },
];

/// Looks up a palette entry by index.
pub fn entry(index: usize) -> Result<&'static PaletteEntry, PaletteError> {
    PALETTE.get(index).ok_or(PaletteError::OutOfRange(index))
}

/// Maps a symbolic color name back to its palette index.
///
/// Used by the configuration system to resolve color names from the config
/// file. Names are matched exactly (they are identifiers, not prose).
pub fn index_of(name: &str) -> Option<usize> {
    PALETTE.iter().position(|e| e.name == name)
}
