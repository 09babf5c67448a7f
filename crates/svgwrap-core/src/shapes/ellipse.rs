//! Ellipse shape.

use super::Conic;
use crate::element::{Element, Geometry, Graphic, number};
use crate::math::Vector2;
use crate::node::Node;

/// An axis-aligned `<ellipse>`.
#[derive(Debug, Clone, PartialEq)]
pub struct Ellipse {
    node: Node,
}

impl Ellipse {
    pub fn new(cx: f64, cy: f64, rx: f64, ry: f64) -> Self {
        let ellipse = Self {
            node: Node::create(Self::TAG),
        };
        ellipse.set_cx(cx).set_cy(cy);
        ellipse.set_radius_x(rx).set_radius_y(ry);
        ellipse
    }

    pub fn from_vector2(position: Vector2, radius: Vector2) -> Self {
        Self::new(position.x, position.y, radius.x, radius.y)
    }

    pub fn radius_x(&self) -> f64 {
        number(&self.node, "rx")
    }

    pub fn set_radius_x(&self, rx: f64) -> &Self {
        self.node.set_attribute("rx", rx);
        self
    }

    pub fn radius_y(&self) -> f64 {
        number(&self.node, "ry")
    }

    pub fn set_radius_y(&self, ry: f64) -> &Self {
        self.node.set_attribute("ry", ry);
        self
    }

    /// Approximate overlap test: the centre distance, normalised by the summed radii
    /// on each axis, is at most 1.
    pub fn is_colliding(&self, other: &Ellipse) -> bool {
        let dx = self.cx() - other.cx();
        let dy = self.cy() - other.cy();
        let sum_x = self.radius_x() + other.radius_x();
        let sum_y = self.radius_y() + other.radius_y();
        (dx * dx) / (sum_x * sum_x) + (dy * dy) / (sum_y * sum_y) <= 1.0
    }
}

impl Element for Ellipse {
    const TAG: &'static str = "ellipse";

    fn node(&self) -> &Node {
        &self.node
    }

    fn from_node_unchecked(node: Node) -> Self {
        Self { node }
    }
}

impl Graphic for Ellipse {}
impl Geometry for Ellipse {}
impl Conic for Ellipse {}
