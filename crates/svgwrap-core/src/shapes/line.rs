//! Straight line segment.

use crate::element::{Element, Geometry, Graphic, number};
use crate::math::Vector2;
use crate::node::Node;

/// A `<line>` from `(x1, y1)` to `(x2, y2)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    node: Node,
}

impl Line {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        let line = Self {
            node: Node::create(Self::TAG),
        };
        line.set_x1(x1).set_y1(y1).set_x2(x2).set_y2(y2);
        line
    }

    pub fn from_vector2(start: Vector2, end: Vector2) -> Self {
        Self::new(start.x, start.y, end.x, end.y)
    }

    pub fn x1(&self) -> f64 {
        number(&self.node, "x1")
    }

    pub fn set_x1(&self, x1: f64) -> &Self {
        self.node.set_attribute("x1", x1);
        self
    }

    pub fn y1(&self) -> f64 {
        number(&self.node, "y1")
    }

    pub fn set_y1(&self, y1: f64) -> &Self {
        self.node.set_attribute("y1", y1);
        self
    }

    pub fn x2(&self) -> f64 {
        number(&self.node, "x2")
    }

    pub fn set_x2(&self, x2: f64) -> &Self {
        self.node.set_attribute("x2", x2);
        self
    }

    pub fn y2(&self) -> f64 {
        number(&self.node, "y2")
    }

    pub fn set_y2(&self, y2: f64) -> &Self {
        self.node.set_attribute("y2", y2);
        self
    }

    pub fn start(&self) -> Vector2 {
        Vector2::new(self.x1(), self.y1())
    }

    pub fn end(&self) -> Vector2 {
        Vector2::new(self.x2(), self.y2())
    }

    pub fn length(&self) -> f64 {
        self.start().distance(self.end())
    }
}

impl Element for Line {
    const TAG: &'static str = "line";

    fn node(&self) -> &Node {
        &self.node
    }

    fn from_node_unchecked(node: Node) -> Self {
        Self { node }
    }
}

impl Graphic for Line {}
impl Geometry for Line {}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;

    #[test]
    fn test_getters_parse_numbers() {
        let line = Line::new(1.0, 2.0, 4.0, 6.0);
        assert_eq!(line.x1() + line.x2(), 5.0);
        assert_eq!(line.length(), 5.0);
        assert_eq!(line.end(), Vector2::new(4.0, 6.0));
    }

    #[test]
    fn test_missing_attribute_reads_zero() {
        let line = Line::from_node(Node::detached("line")).unwrap();
        assert_eq!(line.y2(), 0.0);
    }

    #[test]
    fn test_stroke_hit() {
        let line = Line::from_vector2(Vector2::new(0.0, 0.0), Vector2::new(10.0, 10.0));
        assert!(line.is_point_in_stroke(Point::new(5.0, 5.2)));
        assert!(!line.is_point_in_stroke(Point::new(5.0, 7.0)));
    }
}
