//! Toolbox Entry - one skill category shown as a flip card

use serde::{Deserialize, Serialize};

/// A skill or technology category.
///
/// The front face of its card shows `icon` and `label`, the back face shows
/// `value`. `color_class` is a space-separated list of utility classes applied
/// to the tile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolboxEntry {
    /// Glyph shown on the front face (usually an emoji)
    pub icon: String,
    /// Category name shown on the front face
    pub label: String,
    /// Descriptive text shown on the back face
    pub value: String,
    /// Tile colour classes
    pub color_class: String,
}

impl ToolboxEntry {
    pub fn new(icon: &str, label: &str, value: &str, color_class: &str) -> Self {
        Self {
            icon: icon.to_string(),
            label: label.to_string(),
            value: value.to_string(),
            color_class: color_class.to_string(),
        }
    }
}
