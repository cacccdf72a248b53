//! Configuration data structures.

use serde::{Deserialize, Serialize};

/// Initial color selection, by palette name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawingConfig {
    /// Palette name of the initial stroke color
    #[serde(default = "default_stroke")]
    pub stroke: String,

    /// Palette name of the initial background color
    #[serde(default = "default_background")]
    pub background: String,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            stroke: default_stroke(),
            background: default_background(),
        }
    }
}

fn default_stroke() -> String {
    "void".to_string()
}

fn default_background() -> String {
    "white".to_string()
}
