// crates/kryon-layout/src/constraints.rs
use serde::Deserialize;

/// Container-provided measurement constraints for one layout pass.
///
/// Every field is independently optional; `None` means unspecified.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MeasurementConstraints {
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub min_width: Option<f32>,
    pub min_height: Option<f32>,
    pub max_width: Option<f32>,
    pub max_height: Option<f32>,
}

impl MeasurementConstraints {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fixed_size(width: f32, height: f32) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
            ..Self::default()
        }
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }

    pub fn with_min_size(mut self, width: f32, height: f32) -> Self {
        self.min_width = Some(width);
        self.min_height = Some(height);
        self
    }

    pub fn with_max_size(mut self, width: f32, height: f32) -> Self {
        self.max_width = Some(width);
        self.max_height = Some(height);
        self
    }

    /// Clamp to `[min_width, max_width]`; the minimum wins if they cross.
    pub fn constrain_width(&self, width: f32) -> f32 {
        clamp_optional(width, self.min_width, self.max_width)
    }

    pub fn constrain_height(&self, height: f32) -> f32 {
        clamp_optional(height, self.min_height, self.max_height)
    }

    /// Explicit width after clamping, if one was given
    pub fn explicit_width(&self) -> Option<f32> {
        self.width.map(|width| self.constrain_width(width))
    }

    pub fn explicit_height(&self) -> Option<f32> {
        self.height.map(|height| self.constrain_height(height))
    }
}

fn clamp_optional(value: f32, min: Option<f32>, max: Option<f32>) -> f32 {
    let mut value = value;
    if let Some(max) = max {
        value = value.min(max);
    }
    if let Some(min) = min {
        value = value.max(min);
    }
    value
}
