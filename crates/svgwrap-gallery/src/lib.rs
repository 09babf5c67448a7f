//! SvgWrap Gallery
//!
//! Demo scenes built with the core wrappers and written out as SVG files.

pub mod config;
pub mod scenes;

pub use config::{ConfigError, GalleryConfig};
pub use scenes::SceneKind;
