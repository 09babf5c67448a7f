//! Raster images and foreign-content boxes.

use super::Quadrilateral;
use crate::element::{Element, Geometry, Graphic};
use crate::node::Node;
use crate::styles::keyword_enum;

keyword_enum!(
    /// CORS mode used when fetching the image.
    CrossOrigin, default None {
        None => "",
        Anonymous => "anonymous",
        UseCredentials => "use-credentials",
    }
);

keyword_enum!(
    /// Decoding hint for the image.
    Decoding, default Auto {
        Auto => "auto",
        Sync => "sync",
        Async => "async",
    }
);

/// An `<image>` referencing a raster source.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    node: Node,
}

impl Image {
    pub fn new(x: f64, y: f64, width: f64, height: f64, href: &str) -> Self {
        Self::with_options(
            x,
            y,
            width,
            height,
            href,
            CrossOrigin::default(),
            Decoding::default(),
        )
    }

    #[allow(clippy::too_many_arguments)]
    pub fn with_options(
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        href: &str,
        cross_origin: CrossOrigin,
        decoding: Decoding,
    ) -> Self {
        let image = Self {
            node: Node::create(Self::TAG),
        };
        image.set_x(x).set_y(y).set_width(width).set_height(height);
        image
            .set_href(href)
            .set_cross_origin(cross_origin)
            .set_decoding(decoding);
        image
    }

    pub fn href(&self) -> String {
        self.node.attribute("href").unwrap_or_default()
    }

    pub fn set_href(&self, href: &str) -> &Self {
        self.node.set_attribute("href", href);
        self
    }

    /// Unknown values read as [`CrossOrigin::None`].
    pub fn cross_origin(&self) -> CrossOrigin {
        self.node
            .attribute("crossorigin")
            .and_then(|value| value.parse().ok())
            .unwrap_or_default()
    }

    pub fn set_cross_origin(&self, cross_origin: CrossOrigin) -> &Self {
        self.node.set_attribute("crossorigin", cross_origin);
        self
    }

    pub fn decoding(&self) -> Decoding {
        self.node
            .attribute("decoding")
            .and_then(|value| value.parse().ok())
            .unwrap_or_default()
    }

    pub fn set_decoding(&self, decoding: Decoding) -> &Self {
        self.node.set_attribute("decoding", decoding);
        self
    }
}

impl Element for Image {
    const TAG: &'static str = "image";

    fn node(&self) -> &Node {
        &self.node
    }

    fn from_node_unchecked(node: Node) -> Self {
        Self { node }
    }
}

impl Graphic for Image {}
impl Geometry for Image {}
impl Quadrilateral for Image {}

/// A `<foreignObject>` box for embedding non-SVG content.
#[derive(Debug, Clone, PartialEq)]
pub struct ForeignObject {
    node: Node,
}

impl ForeignObject {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        let object = Self {
            node: Node::create(Self::TAG),
        };
        object.set_x(x).set_y(y).set_width(width).set_height(height);
        object
    }
}

impl Element for ForeignObject {
    const TAG: &'static str = "foreignObject";

    fn node(&self) -> &Node {
        &self.node
    }

    fn from_node_unchecked(node: Node) -> Self {
        Self { node }
    }
}

impl Graphic for ForeignObject {}
impl Geometry for ForeignObject {}
impl Quadrilateral for ForeignObject {}
