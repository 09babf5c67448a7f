//! SvgWrap Render Library
//!
//! Serializes element trees built with `svgwrap-core` to SVG markup, either into
//! any `fmt::Write` sink or straight to a file.

mod renderer;

pub use renderer::{
    RenderConfig, RenderResult, Renderer, RendererError, SvgRenderer, render_to_string,
    write_to_file,
};
