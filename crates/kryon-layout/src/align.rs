// crates/kryon-layout/src/align.rs

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalAlign {
    #[default]
    Left,
    Center,
    Right,
    /// Spread extra width between items
    Justify,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlign {
    #[default]
    Top,
    Middle,
    Bottom,
    /// Stretch items to the band height
    Justify,
}

impl HorizontalAlign {
    /// Offset of the run start and extra spacing per gap, given the space
    /// left over after the run is placed.
    pub(crate) fn distribute(self, extra: f32, item_count: usize) -> (f32, f32) {
        match self {
            HorizontalAlign::Left => (0.0, 0.0),
            HorizontalAlign::Center => (extra / 2.0, 0.0),
            HorizontalAlign::Right => (extra, 0.0),
            HorizontalAlign::Justify if item_count > 1 => (0.0, extra / (item_count - 1) as f32),
            HorizontalAlign::Justify => (extra / 2.0, 0.0),
        }
    }
}

impl VerticalAlign {
    /// Vertical offset within the band and the height the item ends up with
    pub(crate) fn place(self, item_height: f32, band_height: f32) -> (f32, f32) {
        match self {
            VerticalAlign::Top => (0.0, item_height),
            VerticalAlign::Middle => ((band_height - item_height) / 2.0, item_height),
            VerticalAlign::Bottom => (band_height - item_height, item_height),
            VerticalAlign::Justify => (0.0, band_height),
        }
    }
}
