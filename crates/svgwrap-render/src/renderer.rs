//! Serializing an element tree to SVG markup.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use svgwrap_core::Node;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Formatting failed: {0}")]
    Format(#[from] fmt::Error),
    #[error("IO error: {0}")]
    Io(String),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Output options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Spaces per nesting level. `None` writes everything on one line.
    pub indent: Option<usize>,
    /// Emit `<?xml version="1.0" encoding="UTF-8"?>` first.
    pub xml_declaration: bool,
    /// Round attribute values that are plain numbers to this many decimals.
    pub precision: Option<usize>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            indent: Some(2),
            xml_declaration: true,
            precision: Some(3),
        }
    }
}

impl RenderConfig {
    /// Single-line output without declaration or rounding.
    pub fn compact() -> Self {
        Self {
            indent: None,
            xml_declaration: false,
            precision: None,
        }
    }

    pub fn with_indent(mut self, indent: Option<usize>) -> Self {
        self.indent = indent;
        self
    }

    pub fn with_xml_declaration(mut self, enabled: bool) -> Self {
        self.xml_declaration = enabled;
        self
    }

    pub fn with_precision(mut self, precision: Option<usize>) -> Self {
        self.precision = precision;
        self
    }
}

/// Trait for output backends.
pub trait Renderer {
    /// Render the tree rooted at `root`.
    fn render(&mut self, root: &Node) -> RenderResult<()>;
}

/// Writes markup into any [`fmt::Write`] sink.
pub struct SvgRenderer<W: fmt::Write> {
    out: W,
    config: RenderConfig,
}

impl<W: fmt::Write> SvgRenderer<W> {
    pub fn new(out: W, config: RenderConfig) -> Self {
        Self { out, config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Give back the sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn newline(&mut self, depth: usize) -> fmt::Result {
        if let Some(indent) = self.config.indent {
            self.out.write_char('\n')?;
            write!(self.out, "{:width$}", "", width = depth * indent)?;
        }
        Ok(())
    }

    fn write_attribute(&mut self, name: &str, value: &str) -> fmt::Result {
        let value = match self.config.precision {
            Some(precision) => round_number(value, precision),
            None => value.to_string(),
        };
        write!(self.out, " {name}=\"{}\"", escape(&value, true))
    }

    fn write_element(&mut self, node: &Node, depth: usize) -> fmt::Result {
        let tag = node.tag();
        write!(self.out, "<{tag}")?;
        for (name, value) in node.attributes() {
            self.write_attribute(&name, &value)?;
        }
        if !node.style_properties().is_empty() {
            let style = node.attribute("style").unwrap_or_default();
            write!(self.out, " style=\"{}\"", escape(&style, true))?;
        }

        let text = node.own_text().filter(|text| !text.is_empty());
        let children = node.children();
        if text.is_none() && children.is_empty() {
            return self.out.write_str("/>");
        }

        self.out.write_char('>')?;
        if let Some(text) = text {
            self.out.write_str(&escape(&text, false))?;
        }
        if !children.is_empty() {
            for child in &children {
                self.newline(depth + 1)?;
                self.write_element(child, depth + 1)?;
            }
            self.newline(depth)?;
        }
        write!(self.out, "</{tag}>")
    }
}

impl<W: fmt::Write> Renderer for SvgRenderer<W> {
    fn render(&mut self, root: &Node) -> RenderResult<()> {
        if self.config.xml_declaration {
            self.out
                .write_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
            self.newline(0)?;
        }
        self.write_element(root, 0)?;
        if self.config.indent.is_some() {
            self.out.write_char('\n')?;
        }
        Ok(())
    }
}

/// Escape markup characters; quotes too when `attribute` is set.
fn escape(value: &str, attribute: bool) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' if attribute => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Round a value that is a single number. Anything else is returned as is.
fn round_number(value: &str, precision: usize) -> String {
    match value.trim().parse::<f64>() {
        Ok(number) if number.is_finite() => {
            let rounded = format!("{number:.precision$}");
            let trimmed = if rounded.contains('.') {
                rounded.trim_end_matches('0').trim_end_matches('.')
            } else {
                rounded.as_str()
            };
            match trimmed {
                "-0" => "0".to_string(),
                other => other.to_string(),
            }
        }
        _ => value.to_string(),
    }
}

/// Render a tree to a string.
pub fn render_to_string(root: &Node, config: &RenderConfig) -> RenderResult<String> {
    let mut renderer = SvgRenderer::new(String::new(), config.clone());
    renderer.render(root)?;
    Ok(renderer.into_inner())
}

/// Render a tree into a file, creating parent directories as needed.
pub fn write_to_file(root: &Node, path: impl AsRef<Path>, config: &RenderConfig) -> RenderResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            RendererError::Io(format!("Failed to create {}: {}", parent.display(), e))
        })?;
    }
    let markup = render_to_string(root, config)?;
    fs::write(path, markup)
        .map_err(|e| RendererError::Io(format!("Failed to write {}: {}", path.display(), e)))?;
    log::info!("Wrote {}", path.display());
    Ok(())
}
