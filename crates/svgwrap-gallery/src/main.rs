//! Gallery entry point.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use svgwrap_core::Element;
use svgwrap_gallery::{GalleryConfig, SceneKind};
use svgwrap_render::{RenderConfig, write_to_file};

/// Render the demo scenes to SVG files
#[derive(Parser)]
#[command(name = "svgwrap-gallery")]
#[command(about = "Write the svgwrap demo scenes as SVG files")]
struct Cli {
    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output directory (overrides the configuration)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Seed for noise and random shapes
    #[arg(short, long)]
    seed: Option<u64>,

    /// Write single-line markup
    #[arg(long)]
    compact: bool,

    /// Scenes to render (default: all)
    #[arg(value_enum)]
    scenes: Vec<SceneKind>,
}

impl Cli {
    fn into_config(self) -> Result<GalleryConfig> {
        let mut config = match &self.config {
            Some(path) => GalleryConfig::load(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => GalleryConfig::default(),
        };
        if let Some(out) = self.out {
            config.out_dir = out;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if self.compact {
            config.render = RenderConfig::compact();
        }
        if !self.scenes.is_empty() {
            config.scenes = self.scenes;
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let config = Cli::parse().into_config()?;
    log::info!(
        "Rendering into {} (seed {})",
        config.out_dir.display(),
        config.seed
    );

    for kind in config.selected_scenes() {
        let canvas = kind
            .build(&config)
            .with_context(|| format!("Failed to build scene {kind}"))?;
        let path = config.out_dir.join(format!("{}.svg", kind.name()));
        write_to_file(canvas.node(), &path, &config.render)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }
    Ok(())
}
