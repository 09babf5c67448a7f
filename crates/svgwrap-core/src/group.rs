//! `<g>` containers.

use crate::element::{Element, Geometry, Graphic};
use crate::node::Node;
use crate::shapes::Shape;

/// A `<g>` grouping shapes so they can be styled and transformed together.
///
/// Members are the group's child nodes that wrap as a [`Shape`]; other
/// children (titles, animations) are kept but not listed.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    node: Node,
}

impl Group {
    pub fn new() -> Self {
        Self {
            node: Node::create(Self::TAG),
        }
    }

    /// Create a group holding `shapes`.
    pub fn group(shapes: impl IntoIterator<Item = Shape>) -> Self {
        let group = Self::new();
        for shape in shapes {
            group.node.append_child(shape.node());
        }
        group
    }

    pub fn from_shapes(shapes: impl IntoIterator<Item = Shape>) -> Self {
        Self::group(shapes)
    }

    pub fn members(&self) -> Vec<Shape> {
        self.node
            .children()
            .into_iter()
            .filter_map(|child| Shape::from_node(child).ok())
            .collect()
    }

    /// Replace every member with `shapes`.
    pub fn set_members(&self, shapes: impl IntoIterator<Item = Shape>) -> &Self {
        for member in self.members() {
            self.node.remove_child(member.node());
        }
        for shape in shapes {
            self.node.append_child(shape.node());
        }
        self
    }

    pub fn iter(&self) -> std::vec::IntoIter<Shape> {
        self.members().into_iter()
    }

    pub fn len(&self) -> usize {
        self.members().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Group {
    fn default() -> Self {
        Self::new()
    }
}

impl Element for Group {
    const TAG: &'static str = "g";

    fn node(&self) -> &Node {
        &self.node
    }

    fn from_node_unchecked(node: Node) -> Self {
        Self { node }
    }
}

impl Graphic for Group {}
impl Geometry for Group {}

impl IntoIterator for &Group {
    type Item = Shape;
    type IntoIter = std::vec::IntoIter<Shape>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Circle, Rectangle};
    use crate::text::Title;
    use kurbo::Rect;

    #[test]
    fn test_group_and_nest_accumulate() {
        let group = Group::group([Rectangle::new(0.0, 0.0, 1.0, 1.0).into()]);
        group.nest(&Circle::new(5.0, 5.0, 1.0));
        assert_eq!(group.len(), 2);
        let tags: Vec<String> = group.iter().map(|s| s.tag()).collect();
        assert_eq!(tags, vec!["rect", "circle"]);
    }

    #[test]
    fn test_set_members_replaces_shapes_only() {
        let group = Group::new();
        group.nest(&Title::new("caption"));
        group.nest(&Rectangle::new(0.0, 0.0, 1.0, 1.0));
        group.set_members([Circle::new(0.0, 0.0, 2.0).into()]);
        assert_eq!(group.len(), 1);
        assert!(matches!(group.members()[0], Shape::Circle(_)));
        assert_eq!(group.node().children().len(), 2);
    }

    #[test]
    fn test_bounding_box_unions_members() {
        let group = Group::from_shapes([
            Rectangle::new(0.0, 0.0, 10.0, 10.0).into(),
            Circle::new(20.0, 20.0, 5.0).into(),
        ]);
        let bounds = group.bounding_box();
        let expected = Rect::new(0.0, 0.0, 25.0, 25.0);
        assert!((bounds.x1 - expected.x1).abs() < 1e-6 && (bounds.y1 - expected.y1).abs() < 1e-6);
        assert_eq!((bounds.x0, bounds.y0), (0.0, 0.0));
        assert!(!group.is_empty());
        assert_eq!((&group).into_iter().count(), 2);
    }

    #[test]
    fn test_members_share_nodes() {
        let rect = Rectangle::new(0.0, 0.0, 1.0, 1.0);
        let group = Group::group([rect.clone().into()]);
        rect.node().set_attribute("x", 3.0);
        match &group.members()[0] {
            Shape::Rectangle(member) => assert_eq!(member.node().attribute_f64("x"), Some(3.0)),
            other => panic!("unexpected member {other:?}"),
        }
    }
}
