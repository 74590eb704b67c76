//! RGB surface color.

use serde::{Deserialize, Serialize};
use weft_types::constants::MAX_COLOR_COMPONENT;

/// Linear RGB color with components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const WHITE: Self = Self {
        r: MAX_COLOR_COMPONENT,
        g: MAX_COLOR_COMPONENT,
        b: MAX_COLOR_COMPONENT,
    };

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}
