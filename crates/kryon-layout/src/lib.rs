// crates/kryon-layout/src/lib.rs

use glam::Vec2;
use kryon_core::{LayoutItem, Result};
use serde::Serialize;

pub mod align;
pub mod config;
pub mod constraints;
pub mod horizontal;
pub mod notify;

pub use align::*;
pub use config::*;
pub use constraints::*;
pub use horizontal::*;
pub use notify::*;

/// Dimensions reported by one layout pass.
///
/// The viewport is what the container should occupy; the content is the
/// padded bounding box of the items and may be larger (scrolling) or smaller.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct LayoutResult {
    pub viewport_width: f32,
    pub viewport_height: f32,
    pub content_width: f32,
    pub content_height: f32,
    pub content_x: f32,
    pub content_y: f32,
}

impl LayoutResult {
    pub fn viewport_size(&self) -> Vec2 {
        Vec2::new(self.viewport_width, self.viewport_height)
    }

    pub fn content_size(&self) -> Vec2 {
        Vec2::new(self.content_width, self.content_height)
    }

    pub fn content_origin(&self) -> Vec2 {
        Vec2::new(self.content_x, self.content_y)
    }

    /// True when the content overflows the viewport horizontally
    pub fn scrolls_horizontally(&self) -> bool {
        self.content_width > self.viewport_width
    }
}

pub trait LayoutEngine {
    /// Position (and where needed resize) `items`, returning the resulting
    /// viewport and content dimensions. An empty slice is a valid input.
    fn layout<I: LayoutItem>(
        &self,
        items: &mut [I],
        constraints: &MeasurementConstraints,
    ) -> Result<LayoutResult>;
}
