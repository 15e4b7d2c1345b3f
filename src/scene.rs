// src/scene.rs
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use kryon_core::{LayoutDimension, LayoutOverride, SizedItem};
use kryon_layout::{LayoutConfig, MeasurementConstraints};
use serde::Deserialize;

/// A row of items plus the layout parameters to arrange them with.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Scene {
    pub config: LayoutConfig,
    pub constraints: MeasurementConstraints,
    pub items: Vec<SceneItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SceneItem {
    #[serde(default)]
    pub id: Option<String>,
    pub width: f32,
    pub height: f32,
    #[serde(default)]
    pub layout_width: LayoutDimension,
    #[serde(default)]
    pub layout_height: LayoutDimension,
}

impl Scene {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read scene file: {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("Invalid scene file: {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        let scene: Scene = serde_json::from_str(text)?;
        scene.config.validate()?;
        Ok(scene)
    }

    pub fn build_items(&self) -> Vec<SizedItem> {
        self.items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let id = item.id.clone().unwrap_or_else(|| format!("item{}", index));
                let mut built = SizedItem::new(item.width, item.height).with_id(id);
                if item.layout_width != LayoutDimension::Auto || item.layout_height != LayoutDimension::Auto {
                    built = built.with_layout(LayoutOverride::new(item.layout_width, item.layout_height));
                }
                built
            })
            .collect()
    }
}
