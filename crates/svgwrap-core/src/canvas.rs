//! Root `<svg>` element.

use crate::element::{Element, Geometry, Graphic, expect_tag, number};
use crate::error::{SvgError, SvgResult, ensure_non_negative};
use crate::node::{Node, SVG_NAMESPACE};
use kurbo::{Rect, Size};

/// Parse a `viewBox` value: four numbers separated by whitespace and/or commas.
pub fn parse_view_box(value: &str) -> SvgResult<Rect> {
    let numbers: Vec<f64> = value
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(|part| part.parse::<f64>())
        .collect::<Result<_, _>>()
        .map_err(|_| SvgError::InvalidViewBox(value.to_string()))?;
    match numbers.as_slice() {
        [x, y, width, height] if *width >= 0.0 && *height >= 0.0 => {
            Ok(Rect::new(*x, *y, x + width, y + height))
        }
        _ => Err(SvgError::InvalidViewBox(value.to_string())),
    }
}

/// The document root. Its viewBox defines the user coordinate system.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    node: Node,
}

impl Canvas {
    /// Create an `<svg>` root with the given viewBox.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> SvgResult<Self> {
        ensure_non_negative("Width", width)?;
        ensure_non_negative("Height", height)?;
        let node = Node::create("svg");
        node.set_attribute("xmlns", SVG_NAMESPACE);
        let canvas = Self { node };
        canvas.write_view_box(Rect::new(x, y, x + width, y + height));
        Ok(canvas)
    }

    /// The viewBox, or an empty rect when unset.
    pub fn view_box(&self) -> Rect {
        self.node
            .attribute("viewBox")
            .and_then(|value| parse_view_box(&value).ok())
            .unwrap_or(Rect::ZERO)
    }

    fn write_view_box(&self, view_box: Rect) {
        self.node.set_attribute(
            "viewBox",
            format!(
                "{} {} {} {}",
                view_box.x0,
                view_box.y0,
                view_box.width(),
                view_box.height()
            ),
        );
    }

    pub fn view_box_x(&self) -> f64 {
        self.view_box().x0
    }

    pub fn set_view_box_x(&self, x: f64) -> &Self {
        let view_box = self.view_box();
        self.write_view_box(Rect::from_origin_size((x, view_box.y0), view_box.size()));
        self
    }

    pub fn view_box_y(&self) -> f64 {
        self.view_box().y0
    }

    pub fn set_view_box_y(&self, y: f64) -> &Self {
        let view_box = self.view_box();
        self.write_view_box(Rect::from_origin_size((view_box.x0, y), view_box.size()));
        self
    }

    pub fn view_box_width(&self) -> f64 {
        self.view_box().width()
    }

    pub fn set_view_box_width(&self, width: f64) -> SvgResult<&Self> {
        ensure_non_negative("Width", width)?;
        let view_box = self.view_box();
        self.write_view_box(Rect::from_origin_size(
            view_box.origin(),
            (width, view_box.height()),
        ));
        Ok(self)
    }

    pub fn view_box_height(&self) -> f64 {
        self.view_box().height()
    }

    pub fn set_view_box_height(&self, height: f64) -> SvgResult<&Self> {
        ensure_non_negative("Height", height)?;
        let view_box = self.view_box();
        self.write_view_box(Rect::from_origin_size(
            view_box.origin(),
            (view_box.width(), height),
        ));
        Ok(self)
    }

    /// Set the outer `width` and `height` of the drawing.
    pub fn set_size(&self, width: f64, height: f64) -> &Self {
        self.node.set_attribute("width", width);
        self.node.set_attribute("height", height);
        self
    }

    pub fn size(&self) -> Size {
        Size::new(number(&self.node, "width"), number(&self.node, "height"))
    }
}

impl Element for Canvas {
    const TAG: &'static str = "svg";

    fn node(&self) -> &Node {
        &self.node
    }

    fn from_node_unchecked(node: Node) -> Self {
        Self { node }
    }

    /// Wrap an existing `<svg>`, validating its viewBox if it has one.
    fn from_node(node: Node) -> SvgResult<Self> {
        expect_tag(&node, Self::TAG)?;
        if let Some(value) = node.attribute("viewBox") {
            parse_view_box(&value)?;
        }
        Ok(Self { node })
    }
}

impl Graphic for Canvas {}
impl Geometry for Canvas {}
