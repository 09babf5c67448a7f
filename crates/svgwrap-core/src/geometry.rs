//! Outlines, bounding boxes, hit-testing and translation of elements.
//!
//! These functions work directly on a [`Node`] so that every wrapper, and the
//! layout passes, share one notion of an element's geometry.

use crate::node::Node;
use crate::styles::{FillRule, FontStyle, Style};
use crate::transform::{compose, parse_transform_list};
use kurbo::{
    Affine, BezPath, Circle, Ellipse, PathEl, Point, Rect, RoundedRect, Shape as KurboShape, Vec2,
};

/// Tolerance used when converting curves to paths or polylines.
pub const TOLERANCE: f64 = 0.1;

/// Width of one character relative to the font size, for text extent estimates.
const CHAR_WIDTH_RATIO: f64 = 0.6;
/// Portion of the font size above the baseline.
const ASCENT_RATIO: f64 = 0.8;

fn number(node: &Node, name: &str) -> f64 {
    node.attribute_f64(name).unwrap_or(0.0)
}

/// Parse a `points` attribute. Coordinates may be separated by commas and/or spaces.
pub fn parse_points(value: &str) -> Vec<Point> {
    let numbers: Vec<f64> = value
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .filter_map(|part| part.parse().ok())
        .collect();
    numbers
        .chunks_exact(2)
        .map(|pair| Point::new(pair[0], pair[1]))
        .collect()
}

/// Format points as `"x,y x,y"`.
pub fn format_points(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Corner radius of a rect: the positive of `rx`/`ry`, or the smaller when both are set.
pub fn corner_radius(rx: f64, ry: f64) -> f64 {
    match (rx > 0.0, ry > 0.0) {
        (true, true) => rx.min(ry),
        (true, false) => rx,
        (false, true) => ry,
        (false, false) => 0.0,
    }
}

/// Outline of a basic shape in its own user space.
pub fn outline(node: &Node) -> Option<BezPath> {
    let tag = node.tag();
    match tag.as_str() {
        "rect" | "image" | "foreignObject" => {
            let rect = Rect::new(
                number(node, "x"),
                number(node, "y"),
                number(node, "x") + number(node, "width"),
                number(node, "y") + number(node, "height"),
            );
            let radius = if tag == "rect" {
                corner_radius(number(node, "rx"), number(node, "ry"))
                    .min(rect.width().min(rect.height()) / 2.0)
            } else {
                0.0
            };
            if radius > 0.0 {
                Some(RoundedRect::from_rect(rect, radius).to_path(TOLERANCE))
            } else {
                Some(rect.to_path(TOLERANCE))
            }
        }
        "circle" => {
            let center = Point::new(number(node, "cx"), number(node, "cy"));
            Some(Circle::new(center, number(node, "r")).to_path(TOLERANCE))
        }
        "ellipse" => {
            let center = Point::new(number(node, "cx"), number(node, "cy"));
            let radii = Vec2::new(number(node, "rx"), number(node, "ry"));
            Some(Ellipse::new(center, radii, 0.0).to_path(TOLERANCE))
        }
        "line" => {
            let mut path = BezPath::new();
            path.move_to((number(node, "x1"), number(node, "y1")));
            path.line_to((number(node, "x2"), number(node, "y2")));
            Some(path)
        }
        "polygon" | "polyline" => {
            let points = parse_points(&node.attribute("points").unwrap_or_default());
            let mut path = polyline_path(&points);
            if tag == "polygon" && !points.is_empty() {
                path.close_path();
            }
            Some(path)
        }
        "path" => {
            let data = node.attribute("d").unwrap_or_default();
            match BezPath::from_svg(&data) {
                Ok(path) => Some(path),
                Err(e) => {
                    log::warn!("Unparsable path data on <path>: {e}");
                    None
                }
            }
        }
        _ => None,
    }
}

fn polyline_path(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    for (i, point) in points.iter().enumerate() {
        if i == 0 {
            path.move_to(*point);
        } else {
            path.line_to(*point);
        }
    }
    path
}

/// Own `transform` attribute of an element as a matrix.
pub fn local_transform(node: &Node) -> Affine {
    let Some(value) = node.attribute("transform") else {
        return Affine::IDENTITY;
    };
    match parse_transform_list(&value) {
        Ok(list) => compose(&list),
        Err(e) => {
            log::warn!("Ignoring transform on <{}>: {e}", node.tag());
            Affine::IDENTITY
        }
    }
}

/// Express a displacement given in the parent's coordinates in the element's
/// own user space. Only the linear part of the element's transform applies.
/// A singular transform leaves the displacement unchanged.
pub fn parent_to_local_delta(node: &Node, delta: Vec2) -> Vec2 {
    let transform = local_transform(node);
    let det = transform.determinant();
    if det.abs() < f64::EPSILON || !det.is_finite() {
        return delta;
    }
    let [a, b, c, d, _, _] = transform.inverse().as_coeffs();
    Vec2::new(a * delta.x + c * delta.y, b * delta.x + d * delta.y)
}

fn is_container(tag: &str) -> bool {
    matches!(tag, "g" | "svg" | "a" | "switch")
}

/// Bounding box in the element's own user space, or `None` when it has no extent.
pub fn local_bounds(node: &Node) -> Option<Rect> {
    let tag = node.tag();
    if let Some(path) = outline(node) {
        if path.elements().is_empty() {
            return None;
        }
        return Some(path.bounding_box());
    }
    match tag.as_str() {
        "text" | "tspan" => Some(text_bounds(node)),
        t if is_container(t) => node
            .children()
            .iter()
            .filter_map(|child| {
                local_bounds(child).map(|bounds| local_transform(child).transform_rect_bbox(bounds))
            })
            .reduce(|acc, bounds| acc.union(bounds)),
        _ => None,
    }
}

/// Bounding box in user space, `Rect::ZERO` for elements without extent.
pub fn bounding_box(node: &Node) -> Rect {
    local_bounds(node).unwrap_or(Rect::ZERO)
}

fn text_bounds(node: &Node) -> Rect {
    let size = FontStyle::read_from(node).size_in_pixels();
    let chars = node.text_content().chars().count() as f64;
    let x = number(node, "x") + number(node, "dx");
    let baseline = number(node, "y") + number(node, "dy");
    Rect::new(
        x,
        baseline - ASCENT_RATIO * size,
        x + chars * size * CHAR_WIDTH_RATIO,
        baseline + (1.0 - ASCENT_RATIO) * size,
    )
}

/// Move an element by rewriting its positional attributes.
pub fn translate(node: &Node, dx: f64, dy: f64) {
    let tag = node.tag();
    let shift = |name: &str, delta: f64| {
        node.set_attribute(name, number(node, name) + delta);
    };
    match tag.as_str() {
        "rect" | "image" | "foreignObject" | "text" | "tspan" | "use" => {
            shift("x", dx);
            shift("y", dy);
        }
        "circle" | "ellipse" => {
            shift("cx", dx);
            shift("cy", dy);
        }
        "line" => {
            shift("x1", dx);
            shift("y1", dy);
            shift("x2", dx);
            shift("y2", dy);
        }
        "polygon" | "polyline" => {
            let points: Vec<Point> = parse_points(&node.attribute("points").unwrap_or_default())
                .into_iter()
                .map(|p| p + Vec2::new(dx, dy))
                .collect();
            node.set_attribute("points", format_points(&points));
        }
        "path" => {
            if let Some(mut path) = outline(node) {
                path.apply_affine(Affine::translate((dx, dy)));
                node.set_attribute("d", path.to_svg());
            }
        }
        t if is_container(t) => {
            for child in node.children() {
                let local = parent_to_local_delta(&child, Vec2::new(dx, dy));
                translate(&child, local.x, local.y);
            }
        }
        other => log::debug!("<{other}> has no position to translate"),
    }
}

fn fill_rule(node: &Node) -> FillRule {
    node.style_property("fill-rule")
        .or_else(|| node.attribute("fill-rule"))
        .and_then(|value| value.parse().ok())
        .unwrap_or_default()
}

fn stroke_width(node: &Node) -> f64 {
    node.style_property("stroke-width")
        .or_else(|| node.attribute("stroke-width"))
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(1.0)
}

/// Check if a point in user space lies inside the element's fill area.
pub fn is_point_in_fill(node: &Node, point: Point) -> bool {
    let tag = node.tag();
    if tag == "line" {
        return false;
    }
    if matches!(tag.as_str(), "text" | "tspan") {
        return text_bounds(node).contains(point);
    }
    let Some(mut path) = outline(node) else {
        return false;
    };
    if tag == "polyline" {
        path.close_path();
    }
    let winding = path.winding(point);
    match fill_rule(node) {
        FillRule::NonZero => winding != 0,
        FillRule::EvenOdd => winding % 2 != 0,
    }
}

/// Check if a point in user space lies on the element's stroke.
pub fn is_point_in_stroke(node: &Node, point: Point) -> bool {
    let Some(path) = outline(node) else {
        return false;
    };
    let half_width = stroke_width(node) / 2.0;
    flatten_subpaths(&path)
        .iter()
        .any(|polyline| point_to_polyline_dist(point, polyline) <= half_width)
}

/// Flatten a path into one polyline per subpath, closing closed subpaths.
fn flatten_subpaths(path: &BezPath) -> Vec<Vec<Point>> {
    let mut polylines: Vec<Vec<Point>> = Vec::new();
    kurbo::flatten(path.iter(), TOLERANCE, |el| match el {
        PathEl::MoveTo(p) => polylines.push(vec![p]),
        PathEl::LineTo(p) => {
            if let Some(current) = polylines.last_mut() {
                current.push(p);
            }
        }
        PathEl::ClosePath => {
            if let Some(current) = polylines.last_mut() {
                if let Some(&first) = current.first() {
                    current.push(first);
                }
            }
        }
        _ => {}
    });
    polylines
}

/// Distance from a point to a line segment.
pub fn point_to_segment_dist(point: Point, a: Point, b: Point) -> f64 {
    let seg = Vec2::new(b.x - a.x, b.y - a.y);
    let pv = Vec2::new(point.x - a.x, point.y - a.y);
    let len_sq = seg.hypot2();
    if len_sq < f64::EPSILON {
        return pv.hypot();
    }
    let t = (pv.dot(seg) / len_sq).clamp(0.0, 1.0);
    let proj = Point::new(a.x + t * seg.x, a.y + t * seg.y);
    ((point.x - proj.x).powi(2) + (point.y - proj.y).powi(2)).sqrt()
}

/// Minimum distance from a point to a polyline (sequence of connected segments).
pub fn point_to_polyline_dist(point: Point, points: &[Point]) -> f64 {
    if let [single] = points {
        return single.distance(point);
    }
    points
        .windows(2)
        .map(|w| point_to_segment_dist(point, w[0], w[1]))
        .fold(f64::INFINITY, f64::min)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect_node(x: f64, y: f64, w: f64, h: f64) -> Node {
        let node = Node::detached("rect");
        node.set_attribute("x", x);
        node.set_attribute("y", y);
        node.set_attribute("width", w);
        node.set_attribute("height", h);
        node
    }

    fn assert_rect(actual: Rect, expected: Rect) {
        assert!((actual.x0 - expected.x0).abs() < 1e-6, "{actual:?} != {expected:?}");
        assert!((actual.y0 - expected.y0).abs() < 1e-6, "{actual:?} != {expected:?}");
        assert!((actual.x1 - expected.x1).abs() < 1e-6, "{actual:?} != {expected:?}");
        assert!((actual.y1 - expected.y1).abs() < 1e-6, "{actual:?} != {expected:?}");
    }

    #[test]
    fn test_points_parse_and_format() {
        let points = parse_points("0,0 10 5, 20,  7.5");
        assert_eq!(
            points,
            vec![Point::new(0.0, 0.0), Point::new(10.0, 5.0), Point::new(20.0, 7.5)]
        );
        assert_eq!(format_points(&points), "0,0 10,5 20,7.5");
        assert!(parse_points("").is_empty());
    }

    #[test]
    fn test_corner_radius() {
        assert_eq!(corner_radius(5.0, 0.0), 5.0);
        assert_eq!(corner_radius(0.0, 3.0), 3.0);
        assert_eq!(corner_radius(5.0, 3.0), 3.0);
        assert_eq!(corner_radius(-1.0, 0.0), 0.0);
    }

    #[test]
    fn test_bounds_of_basic_shapes() {
        assert_rect(bounding_box(&rect_node(10.0, 20.0, 30.0, 40.0)), Rect::new(10.0, 20.0, 40.0, 60.0));

        let circle = Node::detached("circle");
        circle.set_attribute("cx", 50);
        circle.set_attribute("cy", 50);
        circle.set_attribute("r", 10);
        assert_rect(bounding_box(&circle), Rect::new(40.0, 40.0, 60.0, 60.0));

        let polygon = Node::detached("polygon");
        polygon.set_attribute("points", "0,0 10,0 5,8");
        assert_rect(bounding_box(&polygon), Rect::new(0.0, 0.0, 10.0, 8.0));
    }

    #[test]
    fn test_group_bounds_apply_child_transform() {
        let group = Node::detached("g");
        group.append_child(&rect_node(0.0, 0.0, 10.0, 10.0));
        let moved = rect_node(0.0, 0.0, 10.0, 10.0);
        moved.set_attribute("transform", "translate(50, 0)");
        group.append_child(&moved);

        assert_rect(bounding_box(&group), Rect::new(0.0, 0.0, 60.0, 10.0));
        assert_eq!(local_bounds(&Node::detached("g")), None);
    }

    #[test]
    fn test_text_bounds_estimate() {
        let text = Node::detached("text");
        text.set_attribute("x", 0);
        text.set_attribute("y", 20);
        text.set_style_property("font-size", "10px");
        text.set_text_content("abcd");
        assert_rect(bounding_box(&text), Rect::new(0.0, 12.0, 24.0, 22.0));
    }

    #[test]
    fn test_translate_rewrites_attributes() {
        let rect = rect_node(1.0, 2.0, 3.0, 4.0);
        translate(&rect, 10.0, -2.0);
        assert_eq!(rect.attribute_f64("x"), Some(11.0));
        assert_eq!(rect.attribute_f64("y"), Some(0.0));

        let poly = Node::detached("polyline");
        poly.set_attribute("points", "0,0 1,1");
        translate(&poly, 1.0, 2.0);
        assert_eq!(poly.attribute("points").as_deref(), Some("1,2 2,3"));

        let path = Node::detached("path");
        path.set_attribute("d", "M0,0 L10,0");
        translate(&path, 5.0, 5.0);
        assert_rect(bounding_box(&path), Rect::new(5.0, 5.0, 15.0, 5.0));
    }

    #[test]
    fn test_point_in_fill_respects_fill_rule() {
        // Two nested squares drawn in the same direction.
        let path = Node::detached("path");
        path.set_attribute("d", "M0,0 L30,0 L30,30 L0,30 Z M10,10 L20,10 L20,20 L10,20 Z");
        assert!(is_point_in_fill(&path, Point::new(15.0, 15.0)));
        path.set_style_property("fill-rule", "evenodd");
        assert!(!is_point_in_fill(&path, Point::new(15.0, 15.0)));
        assert!(is_point_in_fill(&path, Point::new(5.0, 5.0)));
        assert!(!is_point_in_fill(&path, Point::new(40.0, 5.0)));
    }

    #[test]
    fn test_point_in_stroke() {
        let line = Node::detached("line");
        line.set_attribute("x2", 100);
        line.set_style_property("stroke-width", 4);
        assert!(is_point_in_stroke(&line, Point::new(50.0, 1.5)));
        assert!(!is_point_in_stroke(&line, Point::new(50.0, 3.0)));
        assert!(!is_point_in_fill(&line, Point::new(50.0, 0.0)));

        let rect = rect_node(0.0, 0.0, 10.0, 10.0);
        assert!(is_point_in_stroke(&rect, Point::new(0.0, 5.0)));
        assert!(!is_point_in_stroke(&rect, Point::new(5.0, 5.0)));
    }

    #[test]
    fn test_point_to_segment_dist() {
        let d = point_to_segment_dist(Point::new(5.0, 5.0), Point::new(0.0, 0.0), Point::new(10.0, 0.0));
        assert!((d - 5.0).abs() < 1e-9);
        let d = point_to_segment_dist(Point::new(13.0, 4.0), Point::new(0.0, 0.0), Point::new(10.0, 0.0));
        assert!((d - 5.0).abs() < 1e-9);
    }
}
