//! Polygon and polyline shapes sharing a point-list API.

use crate::element::{Element, Geometry, Graphic};
use crate::geometry::{format_points, parse_points};
use crate::node::Node;
use kurbo::Point;

/// Shapes described by a `points` attribute.
pub trait Poly: Geometry {
    fn points(&self) -> Vec<Point> {
        self.node()
            .attribute("points")
            .map(|value| parse_points(&value))
            .unwrap_or_default()
    }

    fn set_points(&self, points: &[Point]) -> &Self {
        self.node().set_attribute("points", format_points(points));
        self
    }

    /// Append the point `(x, y)`.
    fn set_point(&self, x: f64, y: f64) -> &Self {
        self.add_point(Point::new(x, y))
    }

    fn add_point(&self, point: Point) -> &Self {
        let mut points = self.points();
        points.push(point);
        self.set_points(&points)
    }

    fn add_points(&self, points: &[Point]) -> &Self {
        let mut all = self.points();
        all.extend_from_slice(points);
        self.set_points(&all)
    }

    fn point_at(&self, index: usize) -> Option<Point> {
        self.points().get(index).copied()
    }

    /// Apply `updater` to the point at `index`. Returns false when out of range.
    fn update_point_at(&self, index: usize, updater: impl FnOnce(&mut Point)) -> bool {
        let mut points = self.points();
        let Some(point) = points.get_mut(index) else {
            return false;
        };
        updater(point);
        self.set_points(&points);
        true
    }

    /// Apply `updater` to every point accepted by `filter`. Both receive the
    /// point's index in the full list.
    fn update_points(
        &self,
        mut updater: impl FnMut(&mut Point, usize),
        filter: impl Fn(&Point, usize) -> bool,
    ) -> &Self {
        let mut points = self.points();
        for (index, point) in points.iter_mut().enumerate() {
            if filter(point, index) {
                updater(point, index);
            }
        }
        self.set_points(&points)
    }

    fn remove_point_at(&self, index: usize) -> Option<Point> {
        let mut points = self.points();
        if index >= points.len() {
            return None;
        }
        let removed = points.remove(index);
        self.set_points(&points);
        Some(removed)
    }

    fn clear(&self) -> &Self {
        self.node().set_attribute("points", "");
        self
    }
}

macro_rules! poly_shape {
    ($(#[$meta:meta])* $name:ident, $tag:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            node: Node,
        }

        impl $name {
            pub fn new() -> Self {
                let shape = Self {
                    node: Node::create(Self::TAG),
                };
                shape.node.set_attribute("points", "");
                shape
            }

            pub fn from_points(points: &[Point]) -> Self {
                let shape = Self::new();
                shape.set_points(points);
                shape
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl Element for $name {
            const TAG: &'static str = $tag;

            fn node(&self) -> &Node {
                &self.node
            }

            fn from_node_unchecked(node: Node) -> Self {
                Self { node }
            }
        }

        impl Graphic for $name {}
        impl Geometry for $name {}
        impl Poly for $name {}
    };
}

poly_shape!(
    /// A closed `<polygon>`.
    Polygon,
    "polygon"
);
poly_shape!(
    /// An open `<polyline>`.
    Polyline,
    "polyline"
);

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Rect;

    #[test]
    fn test_add_points() {
        let polygon = Polygon::new();
        polygon.add_point(Point::ZERO).add_points(&[Point::new(10.0, 0.0), Point::new(5.0, 8.5)]);
        assert_eq!(polygon.node().attribute("points").unwrap(), "0,0 10,0 5,8.5");
        assert_eq!(polygon.points().len(), 3);
        assert_eq!(polygon.point_at(2), Some(Point::new(5.0, 8.5)));
        assert_eq!(polygon.point_at(3), None);
    }

    #[test]
    fn test_set_point_appends() {
        let line = Polyline::new();
        line.set_point(1.0, 2.0).set_point(3.5, -4.0);
        assert_eq!(line.node().attribute("points").unwrap(), "1,2 3.5,-4");
        assert_eq!(line.point_at(1), Some(Point::new(3.5, -4.0)));
    }

    #[test]
    fn test_update_point_at() {
        let line = Polyline::from_points(&[Point::new(0.0, 0.0), Point::new(1.0, 1.0)]);
        assert!(line.update_point_at(1, |p| p.y = 4.0));
        assert!(!line.update_point_at(5, |p| p.y = 4.0));
        assert_eq!(line.point_at(1), Some(Point::new(1.0, 4.0)));
    }

    #[test]
    fn test_update_points_with_filter() {
        let polygon = Polygon::from_points(&[
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(2.0, 0.0),
        ]);
        let mut seen = Vec::new();
        polygon.update_points(
            |p, index| {
                p.y = 10.0;
                seen.push(index);
            },
            |_, index| index != 1,
        );
        assert_eq!(seen, vec![0, 2]);
        assert_eq!(
            polygon.points(),
            vec![Point::new(0.0, 10.0), Point::new(1.0, 0.0), Point::new(2.0, 10.0)]
        );
    }

    #[test]
    fn test_remove_and_clear() {
        let polygon = Polygon::from_points(&[Point::new(0.0, 0.0), Point::new(3.0, 4.0)]);
        assert_eq!(polygon.remove_point_at(0), Some(Point::new(0.0, 0.0)));
        assert_eq!(polygon.remove_point_at(4), None);
        assert_eq!(polygon.points(), vec![Point::new(3.0, 4.0)]);
        polygon.clear();
        assert!(polygon.points().is_empty());
    }

    #[test]
    fn test_polygon_fill_and_bounds() {
        let triangle = Polygon::from_points(&[
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(0.0, 10.0),
        ]);
        assert_eq!(triangle.bounding_box(), Rect::new(0.0, 0.0, 10.0, 10.0));
        assert!(triangle.is_point_in_fill(Point::new(2.0, 2.0)));
        assert!(!triangle.is_point_in_fill(Point::new(8.0, 8.0)));
    }
}
