use super::{Align, Alignment, Direction};
use crate::element::{Element, Geometry, Graphic};
use crate::group::Group;
use crate::math::Vector2;
use crate::node::Node;
use crate::shapes::Shape;
use kurbo::Rect;
use serde::{Deserialize, Serialize};

/// Options of a [`Flex`] layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlexOptions {
    /// Start a new line when the next item would overflow `size`.
    pub wrap: bool,
    /// Extent of the container; only the main-axis component limits lines.
    pub size: Vector2,
    pub origin: Vector2,
    /// Gap between items (main axis) and between lines (cross axis), per axis.
    pub spacing: Vector2,
    pub alignment: Alignment,
}

impl Default for FlexOptions {
    fn default() -> Self {
        Self {
            wrap: true,
            size: Vector2::new(100.0, 100.0),
            origin: Vector2::ZERO,
            spacing: Vector2::ZERO,
            alignment: Alignment::default(),
        }
    }
}

/// A group whose members flow along a row or column.
#[derive(Debug, Clone, PartialEq)]
pub struct Flex {
    group: Group,
    direction: Direction,
    options: FlexOptions,
}

struct Line {
    items: Vec<usize>,
    main: f64,
    cross: f64,
}

impl Flex {
    pub fn new(
        direction: Direction,
        members: impl IntoIterator<Item = Shape>,
        options: FlexOptions,
    ) -> Self {
        Self {
            group: Group::from_shapes(members),
            direction,
            options,
        }
    }

    pub fn group(&self) -> &Group {
        &self.group
    }

    pub fn members(&self) -> Vec<Shape> {
        self.group.members()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn set_direction(&mut self, direction: Direction) -> &mut Self {
        self.direction = direction;
        self
    }

    pub fn options(&self) -> &FlexOptions {
        &self.options
    }

    pub fn is_wrap(&self) -> bool {
        self.options.wrap
    }

    pub fn toggle_wrap(&mut self) -> &mut Self {
        self.options.wrap = !self.options.wrap;
        self
    }

    pub fn size(&self) -> Vector2 {
        self.options.size
    }

    pub fn set_size(&mut self, size: Vector2) -> &mut Self {
        self.options.size = size;
        self
    }

    pub fn origin(&self) -> Vector2 {
        self.options.origin
    }

    pub fn set_origin(&mut self, origin: Vector2) -> &mut Self {
        self.options.origin = origin;
        self
    }

    pub fn spacing(&self) -> Vector2 {
        self.options.spacing
    }

    pub fn set_spacing(&mut self, spacing: Vector2) -> &mut Self {
        self.options.spacing = spacing;
        self
    }

    pub fn main_alignment(&self) -> Align {
        self.options.alignment.main
    }

    pub fn set_main_alignment(&mut self, align: Align) -> &mut Self {
        self.options.alignment.main = align;
        self
    }

    pub fn cross_alignment(&self) -> Align {
        self.options.alignment.cross
    }

    pub fn set_cross_alignment(&mut self, align: Align) -> &mut Self {
        self.options.alignment.cross = align;
        self
    }

    /// Split `(main, cross)` of a vector according to the direction.
    fn split_axes(&self, v: Vector2) -> (f64, f64) {
        match self.direction {
            Direction::Row => (v.x, v.y),
            Direction::Column => (v.y, v.x),
        }
    }

    fn join_axes(&self, main: f64, cross: f64) -> Vector2 {
        match self.direction {
            Direction::Row => Vector2::new(main, cross),
            Direction::Column => Vector2::new(cross, main),
        }
    }

    fn break_lines(&self, extents: &[(f64, f64)]) -> Vec<Line> {
        let (limit, _) = self.split_axes(self.options.size);
        let (gap, _) = self.split_axes(self.options.spacing);
        let mut lines: Vec<Line> = Vec::new();
        for (index, &(main, cross)) in extents.iter().enumerate() {
            match lines.last_mut() {
                Some(line) if !self.options.wrap || line.main + gap + main <= limit => {
                    line.items.push(index);
                    line.main += gap + main;
                    line.cross = line.cross.max(cross);
                }
                _ => lines.push(Line {
                    items: vec![index],
                    main,
                    cross,
                }),
            }
        }
        lines
    }

    /// Position every member and return the boxes they were placed in.
    pub fn layout(&self) -> Vec<Rect> {
        let members = self.members();
        let extents: Vec<(f64, f64)> = members
            .iter()
            .map(|member| {
                let bounds = member.bounding_box();
                self.split_axes(Vector2::new(bounds.width(), bounds.height()))
            })
            .collect();
        let lines = self.break_lines(&extents);

        let (limit, _) = self.split_axes(self.options.size);
        let (gap, line_gap) = self.split_axes(self.options.spacing);
        let (origin_main, origin_cross) = self.split_axes(self.options.origin);
        let mut placed = vec![Rect::ZERO; members.len()];
        let mut line_start = origin_cross;

        for line in &lines {
            let mut main = origin_main + self.options.alignment.main.offset(limit - line.main);
            for &index in &line.items {
                let (item_main, item_cross) = extents[index];
                let cross = line_start + self.options.alignment.cross.offset(line.cross - item_cross);
                let position = self.join_axes(main, cross);
                let size = self.join_axes(item_main, item_cross);
                members[index].move_to(position.x, position.y);
                placed[index] = Rect::new(
                    position.x,
                    position.y,
                    position.x + size.x,
                    position.y + size.y,
                );
                main += item_main + gap;
            }
            line_start += line.cross + line_gap;
        }

        log::debug!(
            "Flex layout placed {} members on {} lines",
            members.len(),
            lines.len()
        );
        placed
    }
}

impl Element for Flex {
    const TAG: &'static str = "g";

    fn node(&self) -> &Node {
        self.group.node()
    }

    fn from_node_unchecked(node: Node) -> Self {
        Self {
            group: Group::from_node_unchecked(node),
            direction: Direction::default(),
            options: FlexOptions::default(),
        }
    }

    fn duplicate(&self) -> Self {
        Self {
            group: self.group.duplicate(),
            direction: self.direction,
            options: self.options,
        }
    }
}

impl Graphic for Flex {}
impl Geometry for Flex {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Circle, Rectangle};

    fn squares(sizes: &[f64]) -> Vec<Shape> {
        sizes
            .iter()
            .map(|&s| Rectangle::square(0.0, 0.0, s).into())
            .collect()
    }

    #[test]
    fn test_row_wraps_on_overflow() {
        let flex = Flex::new(
            Direction::Row,
            squares(&[40.0, 40.0, 40.0]),
            FlexOptions {
                spacing: Vector2::new(10.0, 5.0),
                ..FlexOptions::default()
            },
        );
        let boxes = flex.layout();
        assert_eq!(boxes[0], Rect::new(0.0, 0.0, 40.0, 40.0));
        assert_eq!(boxes[1], Rect::new(50.0, 0.0, 90.0, 40.0));
        assert_eq!(boxes[2], Rect::new(0.0, 45.0, 40.0, 85.0));
        match &flex.members()[2] {
            Shape::Rectangle(rect) => assert_eq!(rect.node().attribute_f64("y"), Some(45.0)),
            other => panic!("unexpected member {other:?}"),
        }
    }

    #[test]
    fn test_no_wrap_keeps_single_line() {
        let mut flex = Flex::new(Direction::Row, squares(&[60.0, 60.0]), FlexOptions::default());
        flex.toggle_wrap();
        assert!(!flex.is_wrap());
        let boxes = flex.layout();
        assert_eq!(boxes[1].x0, 60.0);
        assert_eq!(boxes[1].y0, 0.0);
    }

    #[test]
    fn test_center_alignment() {
        let mut flex = Flex::new(Direction::Row, squares(&[10.0, 20.0]), FlexOptions::default());
        flex.set_main_alignment(Align::Center)
            .set_cross_alignment(Align::End)
            .set_origin(Vector2::new(5.0, 0.0));
        let boxes = flex.layout();
        assert_eq!(boxes[0], Rect::new(40.0, 10.0, 50.0, 20.0));
        assert_eq!(boxes[1], Rect::new(50.0, 0.0, 70.0, 20.0));
    }

    #[test]
    fn test_column_direction() {
        let flex = Flex::new(
            Direction::Column,
            vec![Circle::new(50.0, 50.0, 10.0).into(), Rectangle::new(9.0, 9.0, 5.0, 30.0).into()],
            FlexOptions::default(),
        );
        let boxes = flex.layout();
        assert!((boxes[0].y1 - 20.0).abs() < 1e-6);
        assert!((boxes[1].y0 - 20.0).abs() < 1e-6);
        assert_eq!(boxes[1].x0, 0.0);
    }

    fn transformed_members() -> Vec<Shape> {
        let scaled = Rectangle::new(10.0, 10.0, 5.0, 5.0);
        scaled.scale(2.0, 2.0);
        let rotated = Rectangle::new(0.0, 0.0, 20.0, 10.0);
        rotated.rotate(90.0);
        vec![scaled.into(), rotated.into()]
    }

    fn assert_close(a: Rect, b: Rect) {
        let close = (a.x0 - b.x0).abs() < 1e-6
            && (a.y0 - b.y0).abs() < 1e-6
            && (a.x1 - b.x1).abs() < 1e-6
            && (a.y1 - b.y1).abs() < 1e-6;
        assert!(close, "{a:?} != {b:?}");
    }

    #[test]
    fn test_transformed_members_land_in_their_slots() {
        let flex = Flex::new(Direction::Row, transformed_members(), FlexOptions::default());
        let boxes = flex.layout();
        assert_close(boxes[0], Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_close(boxes[1], Rect::new(10.0, 0.0, 20.0, 20.0));
        for (member, expected) in flex.members().iter().zip(&boxes) {
            assert_close(member.bounding_box(), *expected);
        }
    }

    #[test]
    fn test_options_from_json() {
        let options: FlexOptions =
            serde_json::from_str(r#"{"wrap":false,"alignment":{"main":"end"}}"#).unwrap();
        assert!(!options.wrap);
        assert_eq!(options.size, Vector2::new(100.0, 100.0));
        assert_eq!(options.alignment.main, Align::End);
    }
}
