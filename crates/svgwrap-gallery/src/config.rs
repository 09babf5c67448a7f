//! Gallery configuration.

use crate::scenes::SceneKind;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use svgwrap_core::{FlexOptions, GridOptions, Vector2};
use svgwrap_render::RenderConfig;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Invalid configuration: {0}")]
    Parse(String),
}

/// Settings for a gallery run, loadable from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    pub out_dir: PathBuf,
    /// Seed for noise and random shapes.
    pub seed: u64,
    /// Scenes to render; empty renders all of them.
    pub scenes: Vec<SceneKind>,
    pub render: RenderConfig,
    /// Cells per side of the noise grid.
    pub noise_cells: usize,
    pub flex: FlexOptions,
    pub grid: GridOptions,
    pub grid_columns: usize,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("gallery"),
            seed: 0,
            scenes: Vec::new(),
            render: RenderConfig::default(),
            noise_cells: 20,
            flex: FlexOptions {
                size: Vector2::new(180.0, 180.0),
                spacing: Vector2::new(10.0, 10.0),
                origin: Vector2::new(10.0, 10.0),
                ..FlexOptions::default()
            },
            grid: GridOptions {
                cell: Vector2::new(50.0, 50.0),
                spacing: Vector2::new(5.0, 5.0),
                origin: Vector2::new(10.0, 10.0),
                ..GridOptions::default()
            },
            grid_columns: 3,
        }
    }
}

impl GalleryConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
        Self::from_json(&json)
    }

    /// The scenes to render, in declaration order when none were chosen.
    pub fn selected_scenes(&self) -> Vec<SceneKind> {
        if self.scenes.is_empty() {
            SceneKind::ALL.to_vec()
        } else {
            self.scenes.clone()
        }
    }
}
