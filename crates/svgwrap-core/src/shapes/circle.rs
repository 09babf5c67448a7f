//! Circle shape.

use super::Conic;
use crate::element::{Element, Geometry, Graphic, number};
use crate::math::Vector3;
use crate::node::Node;

/// A `<circle>` defined by its centre and radius.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    node: Node,
}

impl Circle {
    pub fn new(cx: f64, cy: f64, r: f64) -> Self {
        let circle = Self {
            node: Node::create(Self::TAG),
        };
        circle.set_cx(cx).set_cy(cy);
        circle.set_radius(r);
        circle
    }

    pub fn from_diameter(cx: f64, cy: f64, d: f64) -> Self {
        Self::new(cx, cy, d / 2.0)
    }

    /// Create a circle from `(cx, cy, r)`.
    pub fn from_vector3(v: Vector3) -> Self {
        Self::new(v.x, v.y, v.z)
    }

    pub fn radius(&self) -> f64 {
        number(&self.node, "r")
    }

    pub fn set_radius(&self, r: f64) -> &Self {
        self.node.set_attribute("r", r);
        self
    }

    /// Circles collide when their centres are closer than the sum of their radii.
    pub fn is_colliding(&self, other: &Circle) -> bool {
        let dx = self.cx() - other.cx();
        let dy = self.cy() - other.cy();
        dx.hypot(dy) < self.radius() + other.radius()
    }
}

impl Element for Circle {
    const TAG: &'static str = "circle";

    fn node(&self) -> &Node {
        &self.node
    }

    fn from_node_unchecked(node: Node) -> Self {
        Self { node }
    }
}

impl Graphic for Circle {}
impl Geometry for Circle {}
impl Conic for Circle {}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;

    #[test]
    fn test_constructors() {
        let circle = Circle::from_diameter(5.0, 6.0, 10.0);
        assert_eq!(circle.cx(), 5.0);
        assert_eq!(circle.cy(), 6.0);
        assert_eq!(circle.radius(), 5.0);

        let circle = Circle::from_vector3(Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(circle.radius(), 3.0);
        assert_eq!(circle.node().attribute("cx").as_deref(), Some("1"));
    }

    #[test]
    fn test_is_colliding() {
        let a = Circle::new(0.0, 0.0, 5.0);
        assert!(a.is_colliding(&Circle::new(8.0, 0.0, 5.0)));
        assert!(!a.is_colliding(&Circle::new(10.0, 0.0, 5.0)));
    }

    #[test]
    fn test_point_in_fill() {
        let circle = Circle::new(10.0, 10.0, 5.0);
        assert!(circle.is_point_in_fill(Point::new(12.0, 12.0)));
        assert!(!circle.is_point_in_fill(Point::new(14.5, 14.5)));
    }
}
