// crates/kryon-layout/src/config.rs
use kryon_core::{KryonError, Result};
use serde::Deserialize;

use crate::{HorizontalAlign, VerticalAlign};

/// Tunable parameters of the horizontal list layout.
///
/// Padding and gap are taken verbatim; negative values are legal and simply
/// pull content towards (or past) the viewport edge.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub padding_top: f32,
    pub padding_right: f32,
    pub padding_bottom: f32,
    pub padding_left: f32,
    /// Space between consecutive items, never before the first or after the last
    pub gap: f32,
    pub horizontal_align: HorizontalAlign,
    pub vertical_align: VerticalAlign,
    /// Number of items the viewport should be sized to show
    pub requested_column_count: Option<u32>,
    /// Representative item width used with `requested_column_count`
    pub typical_item_width: Option<f32>,
}

impl LayoutConfig {
    pub fn validate(&self) -> Result<()> {
        match self.requested_column_count {
            Some(0) => Err(KryonError::InvalidColumnCount(0)),
            _ => Ok(()),
        }
    }

    pub fn horizontal_padding(&self) -> f32 {
        self.padding_left + self.padding_right
    }

    pub fn vertical_padding(&self) -> f32 {
        self.padding_top + self.padding_bottom
    }

    /// Total gap consumed by `count` items placed in a row
    pub fn total_gap(&self, count: usize) -> f32 {
        if count > 1 {
            self.gap * (count - 1) as f32
        } else {
            0.0
        }
    }
}
