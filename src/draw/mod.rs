//! Geometry and color data for the sketching core:
//! - [`Point`] / [`Group`]: canvas coordinates and polyline containers
//! - [`PaletteEntry`] / [`PALETTE`]: the fixed 16-color table
//! - [`Rgb`]: resolved color values for background fills

pub mod group;
pub mod palette;

// Re-export commonly used types at module level
pub use group::{Group, Point};
pub use palette::{PALETTE, PaletteEntry, PaletteError, Rgb};

// Re-export palette constants for public API
#[allow(unused_imports)]
pub use palette::{DEFAULT_BACKGROUND_INDEX, DEFAULT_STROKE_INDEX};
