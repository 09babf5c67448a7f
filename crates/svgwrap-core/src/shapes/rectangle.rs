//! Rectangle shape.

use super::Quadrilateral;
use crate::element::{Element, Geometry, Graphic, number};
use crate::math::Vector2;
use crate::node::Node;

/// A `<rect>` with optional rounded corners.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    node: Node,
}

impl Rectangle {
    /// Create a new rectangle.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        let rect = Self {
            node: Node::create(Self::TAG),
        };
        rect.set_x(x).set_y(y).set_width(width).set_height(height);
        rect
    }

    /// Create a rectangle with corner radii.
    pub fn rounded(x: f64, y: f64, width: f64, height: f64, rx: f64, ry: f64) -> Self {
        let rect = Self::new(x, y, width, height);
        rect.set_corner_radius_x(rx).set_corner_radius_y(ry);
        rect
    }

    /// Create a rectangle from a position, a size and corner radii.
    pub fn from_vector2(position: Vector2, size: Vector2, corner: Vector2) -> Self {
        Self::rounded(position.x, position.y, size.x, size.y, corner.x, corner.y)
    }

    /// Create a square with side `s`.
    pub fn square(x: f64, y: f64, s: f64) -> Self {
        Self::new(x, y, s, s)
    }

    pub fn corner_radius_x(&self) -> f64 {
        number(&self.node, "rx")
    }

    pub fn set_corner_radius_x(&self, rx: f64) -> &Self {
        self.node.set_attribute("rx", rx);
        self
    }

    pub fn corner_radius_y(&self) -> f64 {
        number(&self.node, "ry")
    }

    pub fn set_corner_radius_y(&self, ry: f64) -> &Self {
        self.node.set_attribute("ry", ry);
        self
    }

    pub fn size(&self) -> Vector2 {
        Vector2::new(self.width(), self.height())
    }

    pub fn set_size(&self, size: Vector2) -> &Self {
        self.set_width(size.x).set_height(size.y);
        self
    }

    pub fn position(&self) -> Vector2 {
        Vector2::new(self.x(), self.y())
    }

    pub fn set_position(&self, position: Vector2) -> &Self {
        self.set_x(position.x).set_y(position.y);
        self
    }

    /// Axis-aligned overlap test. Touching edges do not collide.
    pub fn is_colliding(&self, other: &Rectangle) -> bool {
        self.x() < other.x() + other.width()
            && self.x() + self.width() > other.x()
            && self.y() < other.y() + other.height()
            && self.y() + self.height() > other.y()
    }
}

impl Element for Rectangle {
    const TAG: &'static str = "rect";

    fn node(&self) -> &Node {
        &self.node
    }

    fn from_node_unchecked(node: Node) -> Self {
        Self { node }
    }
}

impl Graphic for Rectangle {}
impl Geometry for Rectangle {}
impl Quadrilateral for Rectangle {}
