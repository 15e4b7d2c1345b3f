// crates/kryon-core/src/layout_units.rs
use std::str::FromStr;

use glam::Vec2;
use serde::Deserialize;

use crate::KryonError;

/// Per-axis sizing request an item can make of its layout.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(try_from = "DimensionRepr")]
pub enum LayoutDimension {
    /// Fixed pixel value, replaces the measured size
    Pixels(f32),
    /// Fraction of the available space (0.0 to 1.0)
    Percentage(f32),
    /// Use the item's measured size
    #[default]
    Auto,
}

impl LayoutDimension {
    /// Resolve against the item's measured size. `available` is the space a
    /// percentage refers to; without it percentages fall back to `measured`.
    pub fn resolve(&self, measured: f32, available: Option<f32>) -> f32 {
        match (*self, available) {
            (LayoutDimension::Pixels(px), _) => px,
            (LayoutDimension::Percentage(pct), Some(space)) => pct * space,
            (LayoutDimension::Percentage(_), None) | (LayoutDimension::Auto, _) => measured,
        }
    }

    pub fn is_percentage(&self) -> bool {
        matches!(self, LayoutDimension::Percentage(_))
    }
}

impl FromStr for LayoutDimension {
    type Err = KryonError;

    /// Parses "auto", "50%", "100px" or a plain number of pixels.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        if value == "auto" {
            return Ok(LayoutDimension::Auto);
        }

        let parsed = if let Some(pct) = value.strip_suffix('%') {
            pct.trim().parse::<f32>().map(|pct| LayoutDimension::Percentage(pct / 100.0))
        } else if let Some(px) = value.strip_suffix("px") {
            px.trim().parse::<f32>().map(LayoutDimension::Pixels)
        } else {
            value.parse::<f32>().map(LayoutDimension::Pixels)
        };

        parsed.map_err(|_| KryonError::InvalidDimension(value.to_string()))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DimensionRepr {
    Number(f32),
    Text(String),
}

impl TryFrom<DimensionRepr> for LayoutDimension {
    type Error = KryonError;

    fn try_from(repr: DimensionRepr) -> Result<Self, Self::Error> {
        match repr {
            DimensionRepr::Number(px) => Ok(LayoutDimension::Pixels(px)),
            DimensionRepr::Text(text) => text.parse(),
        }
    }
}

/// Layout data an item attaches to itself to override its measured size
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct LayoutOverride {
    pub width: LayoutDimension,
    pub height: LayoutDimension,
}

impl LayoutOverride {
    pub fn new(width: LayoutDimension, height: LayoutDimension) -> Self {
        Self { width, height }
    }

    pub fn pixels(width: f32, height: f32) -> Self {
        Self {
            width: LayoutDimension::Pixels(width),
            height: LayoutDimension::Pixels(height),
        }
    }

    /// Percentages are given in the 0-100 range
    pub fn percentage(width_pct: f32, height_pct: f32) -> Self {
        Self {
            width: LayoutDimension::Percentage(width_pct / 100.0),
            height: LayoutDimension::Percentage(height_pct / 100.0),
        }
    }

    pub fn auto() -> Self {
        Self::default()
    }

    /// Replace measured values with explicit pixel overrides, leaving
    /// percentages to be resolved by the layout once space is known.
    pub fn apply_explicit(&self, measured: Vec2) -> Vec2 {
        Vec2::new(
            self.width.resolve(measured.x, None),
            self.height.resolve(measured.y, None),
        )
    }
}
